// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Creates a [`HeadVec`](crate::HeadVec) holding the given elements.
///
/// Elements are pushed one by one, so capacities follow the same growth
/// policy as [`HeadVec::push_back`](crate::HeadVec::push_back).
///
/// ```rust
/// use headvec::headvec;
///
/// let vec = headvec![1, 2, 3];
/// assert_eq!(vec.len(), 3);
/// assert_eq!(vec.capacity(), 12);
/// ```
#[macro_export]
macro_rules! headvec {
    () => {
        $crate::HeadVec::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut vec = $crate::HeadVec::new();
        $(vec.push_back($value);)+
        vec
    }};
}
