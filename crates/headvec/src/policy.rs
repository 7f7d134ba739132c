// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growth and shrink policies.
//!
//! A policy is picked when the container is built, as the `P` type parameter
//! of [`HeadVec`](crate::HeadVec). It cannot be switched on a live container.

/// Capacity rules applied by the growth engine.
pub trait GrowthPolicy {
    /// Capacity allocated the first time an empty container grows.
    ///
    /// Must be non-zero.
    const INITIAL_CAPACITY: usize = 12;

    /// Whether `pop_back` and `erase` halve the capacity once the size
    /// drops to a quarter of it.
    const SHRINK_ON_REMOVE: bool = false;
}

/// Removals never reallocate. Memory is only returned by `shrink_to_fit`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Retain;

impl GrowthPolicy for Retain {}

/// Removals halve the capacity when `size <= capacity / 4`.
///
/// A block whose halved capacity would be zero is released.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShrinkOnRemove;

impl GrowthPolicy for ShrinkOnRemove {
    const SHRINK_ON_REMOVE: bool = true;
}

/// Policy used by [`HeadVec::new`](crate::HeadVec::new).
#[cfg(not(feature = "shrink_on_remove"))]
pub type DefaultPolicy = Retain;

/// Policy used by [`HeadVec::new`](crate::HeadVec::new).
#[cfg(feature = "shrink_on_remove")]
pub type DefaultPolicy = ShrinkOnRemove;
