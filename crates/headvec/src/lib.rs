// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable array with its size and capacity stored in front of the elements.
//!
//! `HeadVec<T>` keeps one heap block per container:
//!
//! ```text
//! ---------------------------------------------
//! | size | capacity | 0 | 1 | 2 | 3 | 4 | ... |
//! ---------------------------------------------
//!                     ^
//!                     handle
//! ```
//!
//! The container is a single pointer to element 0. An empty container owns
//! no block at all, and the counters are recovered from the header just
//! before the handle.
//!
//! # Core Guarantees
//!
//! - **Amortized O(1) append**: the first growth allocates 12 slots, every
//!   later one doubles the capacity.
//! - **Explicit capacity control**: `reserve` sets an exact capacity and never
//!   shrinks, `shrink_to_fit` trims the block to the size.
//! - **Construction-time shrink policy**: [`ShrinkOnRemove`] halves the
//!   capacity after removals once the container is a quarter full. It is a
//!   type parameter, or the crate-wide default with the `shrink_on_remove` feature.
//! - **Empty reads are explicit**: `pop_back`, `front` and `back` return `Option`.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use headvec::HeadVec;
//!
//! let mut vec = HeadVec::new();
//! for i in 0..5 {
//!     vec.push_back(i);
//! }
//!
//! vec.insert(0, -1);
//! assert_eq!(vec.erase(3), Some(2));
//! assert_eq!(vec, [-1, 0, 1, 3, 4]);
//!
//! vec.reverse();
//! assert_eq!(vec.to_string(), "[4, 3, 1, 0, -1]");
//! ```
//!
//! # Example: Fallible Reservation
//!
//! ```rust
//! use headvec::{HeadVec, HeadVecError};
//!
//! fn example() -> Result<(), HeadVecError> {
//!     let mut vec: HeadVec<u64> = HeadVec::new();
//!     vec.try_reserve(100)?;
//!     assert_eq!(vec.capacity(), 100);
//!
//!     assert_eq!(vec.try_reserve(usize::MAX), Err(HeadVecError::CapacityOverflow));
//!     assert_eq!(vec.capacity(), 100);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod error;
mod extra;
mod head_vec;
mod impls;
mod macros;
mod policy;
mod raw;

#[cfg(test)]
mod tests;

pub use error::HeadVecError;
pub use head_vec::HeadVec;
pub use policy::{DefaultPolicy, GrowthPolicy, Retain, ShrinkOnRemove};
