// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use headvec_test_utils::fixtures::Coordinate;

use crate::{HeadVec, Retain, ShrinkOnRemove, headvec};

// =============================================================================
// Display, Debug
// =============================================================================

#[test]
fn test_display_matches_to_string_with() {
    let vec = headvec![0, 1, 2];

    assert_eq!(vec.to_string(), "[0, 1, 2]");
    assert_eq!(
        vec.to_string(),
        vec.to_string_with(|value| value.to_string())
    );
}

#[test]
fn test_display_empty() {
    let vec: HeadVec<i32> = HeadVec::new();

    assert_eq!(format!("{vec}"), "[]");
}

#[test]
fn test_debug() {
    let vec = headvec![Coordinate::new(1, 2)];

    assert_eq!(format!("{vec:?}"), "[Coordinate { x: 1, y: 2 }]");
}

// =============================================================================
// Clone, PartialEq
// =============================================================================

#[test]
fn test_clone_is_independent() {
    let mut original = headvec![String::from("a"), String::from("b")];
    let clone = original.clone();

    original[0].push('!');
    original.push_back(String::from("c"));

    assert_eq!(clone, ["a", "b"]);
    assert_eq!(original, ["a!", "b", "c"]);
}

#[test]
fn test_clone_capacity_is_exact() {
    let mut original: HeadVec<i32> = (0..5).collect();
    original.reserve(100);

    let clone = original.clone();

    assert_eq!(clone.capacity(), 5);
    assert_eq!(clone, original);
}

#[test]
fn test_clone_empty_does_not_allocate() {
    let original: HeadVec<i32> = HeadVec::new();
    let clone = original.clone();

    assert_eq!(clone.capacity(), 0);
}

#[test]
fn test_eq_ignores_capacity_and_policy() {
    let mut retain = HeadVec::with_policy(Retain);
    let mut shrink = HeadVec::with_policy(ShrinkOnRemove);
    for i in 0..3 {
        retain.push_back(i);
        shrink.push_back(i);
    }
    retain.reserve(64);

    assert_eq!(retain, shrink);

    shrink.push_back(3);
    assert_ne!(retain, shrink);
}

#[test]
fn test_eq_against_slices_and_arrays() {
    let vec = headvec![1, 2, 3];
    let expected: &[i32] = &[1, 2, 3];

    assert_eq!(vec, [1, 2, 3]);
    assert_eq!(vec, expected);
    assert_eq!(vec, *expected);
    assert_ne!(vec, [1, 2]);
}

// =============================================================================
// FromIterator, Extend, From
// =============================================================================

#[test]
fn test_from_iter() {
    let vec: HeadVec<i32> = (0..20).collect();

    assert_eq!(vec.len(), 20);
    assert_eq!(vec.capacity(), 24);
    assert_eq!(vec[19], 19);
}

#[test]
fn test_from_iter_empty() {
    let vec: HeadVec<i32> = core::iter::empty().collect();

    assert_eq!(vec.capacity(), 0);
}

#[test]
fn test_extend_unknown_length() {
    let mut vec = headvec![0];
    vec.extend((1..30).filter(|value| value % 2 == 1));

    assert_eq!(vec.len(), 16);
    assert_eq!(vec.capacity(), 24);
    assert_eq!(vec.back(), Some(&29));
}

#[test]
fn test_from_slice() {
    let src = [Coordinate::new(0, 0), Coordinate::new(1, 1)];
    let vec: HeadVec<Coordinate> = HeadVec::from(&src[..]);

    assert_eq!(vec, src);
    assert_eq!(vec.capacity(), 12);
}

// =============================================================================
// headvec!
// =============================================================================

#[test]
fn test_macro_empty() {
    let vec: HeadVec<u8> = headvec![];

    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), 0);
}

#[test]
fn test_macro_trailing_comma() {
    let vec = headvec![1, 2, 3,];

    assert_eq!(vec, [1, 2, 3]);
}

// =============================================================================
// Deref, IntoIterator
// =============================================================================

#[test]
fn test_slice_api_through_deref() {
    let mut vec = headvec![3, 1, 2];
    vec.sort_unstable();

    assert_eq!(vec[0], 1);
    assert_eq!(&vec[1..], &[2, 3]);
    assert!(vec.contains(&3));
    assert_eq!(vec.iter().sum::<i32>(), 6);
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn test_index_past_len_panics_instead_of_reading_spare() {
    let vec = headvec![1];
    let value = vec[1];

    assert_eq!(value, 0);
}

#[test]
fn test_into_iter_by_reference() {
    let mut vec = headvec![1, 2, 3];

    for value in &mut vec {
        *value *= 10;
    }

    let collected: Vec<i32> = (&vec).into_iter().copied().collect();
    assert_eq!(collected, [10, 20, 30]);
}

// =============================================================================
// Send, Sync
// =============================================================================

#[test]
fn test_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<HeadVec<i32>>();
    assert_send_sync::<HeadVec<String, ShrinkOnRemove>>();
}

#[test]
fn test_moves_across_threads() {
    let vec: HeadVec<u64> = (0..50).collect();

    let sum = std::thread::spawn(move || vec.iter().sum::<u64>())
        .join()
        .expect("Failed to join(..)");

    assert_eq!(sum, (0..50).sum::<u64>());
}
