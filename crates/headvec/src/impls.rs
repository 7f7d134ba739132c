// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::ops::{Deref, DerefMut};

use crate::head_vec::HeadVec;
use crate::policy::GrowthPolicy;

impl<T, P: GrowthPolicy + Default> Default for HeadVec<T, P> {
    fn default() -> Self {
        Self::with_policy(P::default())
    }
}

impl<T, P: GrowthPolicy> Deref for HeadVec<T, P> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T, P: GrowthPolicy> DerefMut for HeadVec<T, P> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T: Clone, P: GrowthPolicy + Default> Clone for HeadVec<T, P> {
    fn clone(&self) -> Self {
        let mut clone = Self::with_capacity_and_policy(self.len(), P::default());

        for value in self.iter() {
            // SAFETY (PRECONDITIONS ARE MET): the clone was reserved for exactly `self.len()` elements.
            unsafe { clone.push_unchecked(value.clone()) };
        }

        clone
    }
}

impl<T: fmt::Debug, P: GrowthPolicy> fmt::Debug for HeadVec<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Same `[e0, e1, ..., en]` format as [`HeadVec::to_string_with`].
impl<T: fmt::Display, P: GrowthPolicy> fmt::Display for HeadVec<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("]")
    }
}

impl<T, U, P, Q> PartialEq<HeadVec<U, Q>> for HeadVec<T, P>
where
    T: PartialEq<U>,
    P: GrowthPolicy,
    Q: GrowthPolicy,
{
    fn eq(&self, other: &HeadVec<U, Q>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, P: GrowthPolicy> Eq for HeadVec<T, P> {}

impl<T, U, P, const N: usize> PartialEq<[U; N]> for HeadVec<T, P>
where
    T: PartialEq<U>,
    P: GrowthPolicy,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<T, U, P> PartialEq<[U]> for HeadVec<T, P>
where
    T: PartialEq<U>,
    P: GrowthPolicy,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, P> PartialEq<&[U]> for HeadVec<T, P>
where
    T: PartialEq<U>,
    P: GrowthPolicy,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, P: GrowthPolicy + Default> FromIterator<T> for HeadVec<T, P> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::default();
        vec.extend(iter);
        vec
    }
}

impl<T, P: GrowthPolicy> Extend<T> for HeadVec<T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if lower > 0 {
            self.grow_for(lower);
        }

        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T: Clone, P: GrowthPolicy + Default> From<&[T]> for HeadVec<T, P> {
    fn from(src: &[T]) -> Self {
        let mut vec = Self::default();
        vec.append_slice(src);
        vec
    }
}

impl<'a, T, P: GrowthPolicy> IntoIterator for &'a HeadVec<T, P> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, P: GrowthPolicy> IntoIterator for &'a mut HeadVec<T, P> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
