// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use headvec_test_utils::{Op, apply_to_model, ops_strategy};
use proptest::prelude::*;

use crate::{GrowthPolicy, HeadVec, Retain, ShrinkOnRemove};

fn apply<P: GrowthPolicy>(
    vec: &mut HeadVec<i32, P>,
    removed: &mut HeadVec<i32>,
    op: &Op,
) -> Option<i32> {
    match op {
        Op::PushBack(value) => {
            vec.push_back(*value);
            None
        }
        Op::PopBack => vec.pop_back(),
        Op::Insert(index, value) => {
            vec.insert(*index, *value);
            None
        }
        Op::Erase(index) => vec.erase(*index),
        Op::Reserve(capacity) => {
            vec.reserve(*capacity);
            None
        }
        Op::ShrinkToFit => {
            vec.shrink_to_fit();
            None
        }
        Op::Clear => {
            vec.clear();
            None
        }
        Op::Reverse => {
            vec.reverse();
            None
        }
        Op::FilterDivisibleBy(divisor) => {
            vec.filter(|value| value % divisor == 0, removed);
            None
        }
        Op::AppendSlice(values) => {
            vec.append_slice(values);
            None
        }
    }
}

fn expected_push_capacity(pushes: usize) -> usize {
    if pushes == 0 {
        return 0;
    }

    let mut capacity = Retain::INITIAL_CAPACITY;
    while capacity <= pushes {
        capacity *= 2;
    }
    capacity
}

proptest! {
    #[test]
    fn fuzzy_retain_matches_model(ops in ops_strategy(200)) {
        let mut vec = HeadVec::with_policy(Retain);
        let mut removed = HeadVec::new();
        let mut model = Vec::new();
        let mut model_removed = Vec::new();

        for op in &ops {
            let capacity_before = vec.capacity();

            let got = apply(&mut vec, &mut removed, op);
            let expected = apply_to_model(&mut model, &mut model_removed, op);

            prop_assert_eq!(got, expected);
            prop_assert_eq!(vec.as_slice(), model.as_slice());
            prop_assert!(vec.capacity() >= vec.len());

            if *op != Op::ShrinkToFit {
                prop_assert!(vec.capacity() >= capacity_before);
            }
        }

        prop_assert_eq!(removed.as_slice(), model_removed.as_slice());
    }

    #[test]
    fn fuzzy_shrink_on_remove_matches_model(ops in ops_strategy(200)) {
        let mut vec = HeadVec::with_policy(ShrinkOnRemove);
        let mut removed = HeadVec::new();
        let mut model = Vec::new();
        let mut model_removed = Vec::new();

        for op in &ops {
            let capacity_before = vec.capacity();

            let got = apply(&mut vec, &mut removed, op);
            let expected = apply_to_model(&mut model, &mut model_removed, op);

            prop_assert_eq!(got, expected);
            prop_assert_eq!(vec.as_slice(), model.as_slice());
            prop_assert!(vec.capacity() >= vec.len());

            // A removal shrinks at most once, by half.
            if matches!(op, Op::PopBack | Op::Erase(_)) {
                let capacity = vec.capacity();
                prop_assert!(capacity == capacity_before || capacity == capacity_before / 2);
            }
        }

        prop_assert_eq!(removed.as_slice(), model_removed.as_slice());
    }

    #[test]
    fn fuzzy_push_capacity_follows_doubling(pushes in 0..2_000usize) {
        let mut vec = HeadVec::with_policy(Retain);
        for i in 0..pushes {
            vec.push_back(i);
        }

        prop_assert_eq!(vec.len(), pushes);
        prop_assert_eq!(vec.capacity(), expected_push_capacity(pushes));
    }

    #[test]
    fn fuzzy_insert_erase_inverse(
        values in proptest::collection::vec(any::<i32>(), 0..100),
        index in 0..100usize,
        value in any::<i32>()
    ) {
        let mut vec: HeadVec<i32> = values.iter().copied().collect();
        let index = index.min(values.len());

        vec.insert(index, value);
        prop_assert_eq!(vec[index], value);

        prop_assert_eq!(vec.erase(index), Some(value));
        prop_assert_eq!(vec.as_slice(), values.as_slice());
    }
}
