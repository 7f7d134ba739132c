// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Operations built on top of the core push/pop/reallocate set.

use alloc::string::String;
use core::ptr;

use crate::head_vec::HeadVec;
use crate::policy::GrowthPolicy;

impl<T, P: GrowthPolicy> HeadVec<T, P> {
    /// Inserts `value` at `index`, shifting every later element one slot toward the tail.
    ///
    /// An `index` at or past `len()` (including any index on an empty
    /// container) appends instead. O(n).
    ///
    /// ```rust
    /// use headvec::headvec;
    ///
    /// let mut vec = headvec![1, 2, 4];
    /// vec.insert(2, 3);
    /// vec.insert(99, 5);
    /// assert_eq!(vec, [1, 2, 3, 4, 5]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        let len = self.len();
        self.push_back(value);

        if index < len {
            self.as_mut_slice()[index..].rotate_right(1);
        }
    }

    /// Removes the element at `index`, shifting every later element one slot toward the head.
    ///
    /// An out-of-range `index` behaves exactly like [`pop_back`](Self::pop_back).
    /// Returns `None` only when the container is empty. O(n).
    pub fn erase(&mut self, index: usize) -> Option<T> {
        if index < self.len() {
            self.as_mut_slice()[index..].rotate_left(1);
        }

        self.pop_back()
    }

    /// Stable in-place partition.
    ///
    /// Elements for which `predicate` returns `true` are compacted toward the
    /// front, in order. The others are appended to `removed`, in order.
    /// `removed` is grown up front so that no reallocation happens during the pass.
    ///
    /// ```rust
    /// use headvec::{HeadVec, headvec};
    ///
    /// let mut vec = headvec![1, 2, 3, 4, 5, 6];
    /// let mut odd = HeadVec::new();
    /// vec.filter(|value| value % 2 == 0, &mut odd);
    ///
    /// assert_eq!(vec, [2, 4, 6]);
    /// assert_eq!(odd, [1, 3, 5]);
    /// ```
    pub fn filter<F, Q>(&mut self, mut predicate: F, removed: &mut HeadVec<T, Q>)
    where
        F: FnMut(&T) -> bool,
        Q: GrowthPolicy,
    {
        let len = self.len();
        if len == 0 {
            return;
        }

        removed.grow_for(len);

        let base = self.as_mut_ptr();
        let mut kept = 0;

        // SAFETY (PRECONDITIONS ARE MET): the size is 0 for the whole pass, so if `predicate`
        // panics the unvisited elements leak instead of being dropped twice. Each slot in
        // `0..len` is read exactly once, and `kept <= index` keeps copies non-overlapping.
        unsafe {
            self.set_len(0);

            for index in 0..len {
                let slot = base.add(index);

                if predicate(&*slot) {
                    if kept != index {
                        ptr::copy_nonoverlapping(slot, base.add(kept), 1);
                    }
                    kept += 1;
                } else {
                    // `grow_for(len)` above left room for every element of this pass.
                    removed.push_unchecked(ptr::read(slot));
                }
            }

            self.set_len(kept);
        }
    }

    /// Moves every element of `src` onto the tail, in order, and frees `src`'s block.
    ///
    /// ```rust
    /// use headvec::headvec;
    ///
    /// let mut vec = headvec![1, 2];
    /// vec.append_vec(headvec![3, 4]);
    /// assert_eq!(vec, [1, 2, 3, 4]);
    /// ```
    pub fn append_vec<Q: GrowthPolicy>(&mut self, mut src: HeadVec<T, Q>) {
        let count = src.len();
        if count == 0 {
            return;
        }

        self.grow_for(count);
        let len = self.len();

        // SAFETY (PRECONDITIONS ARE MET): `grow_for(count)` left room for `count` elements,
        // the two blocks are distinct allocations, and `src` forgets its elements before
        // it is dropped so they are owned by `self` alone.
        unsafe {
            ptr::copy_nonoverlapping(src.as_ptr(), self.as_mut_ptr().add(len), count);
            src.set_len(0);
            self.set_len(len + count);
        }
    }

    /// Clones every element of `src` onto the tail, in order. `src` is left untouched.
    pub fn append_slice(&mut self, src: &[T])
    where
        T: Clone,
    {
        if src.is_empty() {
            return;
        }

        self.grow_for(src.len());

        for value in src {
            // SAFETY (PRECONDITIONS ARE MET): `grow_for(src.len())` left room for every clone.
            unsafe { self.push_unchecked(value.clone()) };
        }
    }

    /// Returns `true` if some element is equal to `value` according to `equals`.
    pub fn find<F>(&self, value: &T, equals: F) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.find_index(value, equals) < self.len()
    }

    /// Returns the index of the first element equal to `value` according to `equals`.
    ///
    /// Returns `len()` when there is none.
    ///
    /// ```rust
    /// use headvec::headvec;
    ///
    /// let vec = headvec![7, 3, 7];
    /// assert_eq!(vec.find_index(&7, |a, b| a == b), 0);
    /// assert_eq!(vec.find_index(&9, |a, b| a == b), vec.len());
    /// ```
    pub fn find_index<F>(&self, value: &T, mut equals: F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.iter()
            .position(|element| equals(element, value))
            .unwrap_or(self.len())
    }

    /// Hands every element to `destroy`, in index order, then frees the block.
    pub fn free_all<F>(mut self, mut destroy: F)
    where
        F: FnMut(T),
    {
        let len = self.len();
        let base = self.as_mut_ptr();

        // SAFETY (PRECONDITIONS ARE MET): the size is 0 before any element is moved out, so
        // dropping `self` (also on unwind out of `destroy`) only frees the block.
        unsafe {
            self.set_len(0);

            for index in 0..len {
                destroy(ptr::read(base.add(index)));
            }
        }
    }

    /// Renders the container as `[e0, e1, ..., en]`, with `stringify` producing each element.
    ///
    /// An empty container renders as `[]`.
    ///
    /// ```rust
    /// use headvec::{HeadVec, headvec};
    ///
    /// let vec = headvec![0, 1, 2];
    /// assert_eq!(vec.to_string_with(|value| value.to_string()), "[0, 1, 2]");
    ///
    /// let empty: HeadVec<i32> = HeadVec::new();
    /// assert_eq!(empty.to_string_with(|value| value.to_string()), "[]");
    /// ```
    pub fn to_string_with<F>(&self, mut stringify: F) -> String
    where
        F: FnMut(&T) -> String,
    {
        let mut rendered = String::from("[");

        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                rendered.push_str(", ");
            }
            rendered.push_str(&stringify(element));
        }

        rendered.push(']');
        rendered
    }

    /// Reverses the order of the elements in place.
    pub fn reverse(&mut self) {
        let len = self.len();
        let elements = self.as_mut_slice();

        for i in 0..len / 2 {
            elements.swap(i, len - 1 - i);
        }
    }
}
