// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Random operation sequences and the `Vec` model they are checked against.

use proptest::collection::vec;
use proptest::prelude::*;

/// One container operation, as generated by [`op_strategy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    PushBack(i32),
    PopBack,
    Insert(usize, i32),
    Erase(usize),
    Reserve(usize),
    ShrinkToFit,
    Clear,
    Reverse,
    /// Keep elements divisible by the given (non-zero) divisor.
    FilterDivisibleBy(i32),
    AppendSlice(Vec<i32>),
}

/// Strategy over single operations. Indices may exceed the container size.
pub fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => any::<i32>().prop_map(Op::PushBack),
        3 => Just(Op::PopBack),
        3 => (0..64usize, any::<i32>()).prop_map(|(index, value)| Op::Insert(index, value)),
        3 => (0..64usize).prop_map(Op::Erase),
        1 => (0..256usize).prop_map(Op::Reserve),
        1 => Just(Op::ShrinkToFit),
        1 => Just(Op::Clear),
        1 => Just(Op::Reverse),
        1 => (1..5i32).prop_map(Op::FilterDivisibleBy),
        1 => vec(any::<i32>(), 0..20).prop_map(Op::AppendSlice),
    ]
}

/// Strategy over operation sequences of up to `max_len` steps.
pub fn ops_strategy(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    vec(op_strategy(), 0..max_len)
}

/// Applies `op` to the reference model.
///
/// Returns the element removed by `PopBack`/`Erase` and pushes filtered-out
/// elements onto `removed`. Out-of-range `Insert` appends and out-of-range
/// `Erase` pops, matching the container under test.
pub fn apply_to_model(model: &mut Vec<i32>, removed: &mut Vec<i32>, op: &Op) -> Option<i32> {
    match op {
        Op::PushBack(value) => {
            model.push(*value);
            None
        }
        Op::PopBack => model.pop(),
        Op::Insert(index, value) => {
            let index = (*index).min(model.len());
            model.insert(index, *value);
            None
        }
        Op::Erase(index) => {
            if *index < model.len() {
                Some(model.remove(*index))
            } else {
                model.pop()
            }
        }
        Op::Reserve(_) | Op::ShrinkToFit => None,
        Op::Clear => {
            model.clear();
            None
        }
        Op::Reverse => {
            model.reverse();
            None
        }
        Op::FilterDivisibleBy(divisor) => {
            let (kept, dropped): (Vec<i32>, Vec<i32>) =
                model.iter().partition(|value| *value % divisor == 0);
            *model = kept;
            removed.extend(dropped);
            None
        }
        Op::AppendSlice(values) => {
            model.extend_from_slice(values);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_erase_pops() {
        let mut model = vec![1, 2, 3];
        let mut removed = Vec::new();

        assert_eq!(apply_to_model(&mut model, &mut removed, &Op::Erase(10)), Some(3));
        assert_eq!(model, vec![1, 2]);
    }

    #[test]
    fn test_out_of_range_insert_appends() {
        let mut model = vec![1, 2];
        let mut removed = Vec::new();

        apply_to_model(&mut model, &mut removed, &Op::Insert(10, 9));
        assert_eq!(model, vec![1, 2, 9]);
    }

    #[test]
    fn test_filter_is_stable() {
        let mut model = vec![1, 2, 3, 4, 5, 6];
        let mut removed = vec![0];

        apply_to_model(&mut model, &mut removed, &Op::FilterDivisibleBy(3));
        assert_eq!(model, vec![3, 6]);
        assert_eq!(removed, vec![0, 1, 2, 4, 5]);
    }
}
