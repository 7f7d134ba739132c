// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Block layout and the growth engine.
//!
//! A block is a single heap allocation:
//!
//! ```text
//! handle ------------------------------|
//!                                      v
//! -------------------------------------------------------------
//! | pad | size | capacity | element_0 | element_1 | ...       |
//! -------------------------------------------------------------
//! ```
//!
//! `pad` is only present when `T` is aligned more strictly than [`Header`],
//! so the header always ends exactly where element 0 begins. Every function
//! here takes a possibly-null handle; `None` is a valid empty container.

use alloc::alloc::{self as heap, Layout};
use core::mem;
use core::ptr::NonNull;

use crate::error::HeadVecError;

/// The two counters stored in front of element 0.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Header {
    pub(crate) size: usize,
    pub(crate) capacity: usize,
}

const HEADER_SIZE: usize = mem::size_of::<Header>();

/// Byte distance from the start of the block to element 0.
#[inline(always)]
fn element_offset<T>() -> usize {
    let align = mem::align_of::<T>();
    (HEADER_SIZE + align - 1) & !(align - 1)
}

#[inline(always)]
fn block_align<T>() -> usize {
    mem::align_of::<Header>().max(mem::align_of::<T>())
}

/// Layout of a block able to hold `capacity` elements.
pub(crate) fn block_layout<T>(capacity: usize) -> Result<Layout, HeadVecError> {
    let elements = mem::size_of::<T>()
        .checked_mul(capacity)
        .ok_or(HeadVecError::CapacityOverflow)?;
    let total = element_offset::<T>()
        .checked_add(elements)
        .ok_or(HeadVecError::CapacityOverflow)?;

    Layout::from_size_align(total, block_align::<T>()).map_err(|_| HeadVecError::CapacityOverflow)
}

/// # Safety
///
/// `handle` must point at element 0 of a live block.
#[inline(always)]
unsafe fn header<T>(handle: NonNull<T>) -> NonNull<Header> {
    // SAFETY (PRECONDITIONS ARE MET): element 0 starts at `element_offset` >= HEADER_SIZE,
    // and that offset is a multiple of `block_align`, so the header slot is in bounds and aligned.
    unsafe { handle.cast::<Header>().sub(1) }
}

/// # Safety
///
/// `handle` must point at element 0 of a live block.
#[inline(always)]
unsafe fn block_base<T>(handle: NonNull<T>) -> NonNull<u8> {
    // SAFETY (PRECONDITIONS ARE MET): the block starts `element_offset` bytes before element 0.
    unsafe { handle.cast::<u8>().sub(element_offset::<T>()) }
}

/// Number of live elements. Zero for the null handle.
///
/// # Safety
///
/// A non-null `handle` must point at element 0 of a live block.
#[inline]
pub(crate) unsafe fn size_of<T>(handle: Option<NonNull<T>>) -> usize {
    match handle {
        // SAFETY (PRECONDITIONS ARE MET): forwarded from the caller.
        Some(handle) => unsafe { header(handle).as_ref().size },
        None => 0,
    }
}

/// Number of elements the block holds without reallocating. Zero for the null handle.
///
/// # Safety
///
/// A non-null `handle` must point at element 0 of a live block.
#[inline]
pub(crate) unsafe fn capacity_of<T>(handle: Option<NonNull<T>>) -> usize {
    match handle {
        // SAFETY (PRECONDITIONS ARE MET): forwarded from the caller.
        Some(handle) => unsafe { header(handle).as_ref().capacity },
        None => 0,
    }
}

/// Overwrites the size counter. No-op on the null handle.
///
/// # Safety
///
/// A non-null `handle` must point at element 0 of a live block, and the
/// caller is responsible for `size <= capacity` and for the first `size`
/// elements being initialized.
#[inline]
pub(crate) unsafe fn set_size<T>(handle: Option<NonNull<T>>, size: usize) {
    if let Some(handle) = handle {
        // SAFETY (PRECONDITIONS ARE MET): forwarded from the caller.
        unsafe { (*header(handle).as_ptr()).size = size };
    }
}

/// Overwrites the capacity counter. No-op on the null handle.
///
/// # Safety
///
/// A non-null `handle` must point at element 0 of a live block and
/// `capacity` must describe the block's actual allocation.
#[inline]
pub(crate) unsafe fn set_capacity<T>(handle: Option<NonNull<T>>, capacity: usize) {
    if let Some(handle) = handle {
        // SAFETY (PRECONDITIONS ARE MET): forwarded from the caller.
        unsafe { (*header(handle).as_ptr()).capacity = capacity };
    }
}

/// Moves the block to one holding exactly `new_capacity` elements.
///
/// Allocates a fresh block for the null handle. Live elements and the size
/// counter are preserved; the returned handle replaces `handle`, which must
/// not be used again on success. On failure the old block is untouched.
///
/// # Panics
///
/// If `T` is zero-sized, if `new_capacity` is zero, or if `new_capacity`
/// would drop live elements.
///
/// # Safety
///
/// A non-null `handle` must point at element 0 of a live block.
pub(crate) unsafe fn reallocate<T>(
    handle: Option<NonNull<T>>,
    new_capacity: usize,
) -> Result<NonNull<T>, HeadVecError> {
    assert!(mem::size_of::<T>() > 0, "headvec cannot store zero-sized elements");
    assert!(new_capacity > 0, "reallocation requires a non-zero capacity");

    // SAFETY (PRECONDITIONS ARE MET): forwarded from the caller.
    let (size, old_capacity) = unsafe { (size_of(handle), capacity_of(handle)) };
    assert!(
        new_capacity >= size,
        "reallocation to capacity {new_capacity} would drop {size} live elements"
    );

    let new_layout = block_layout::<T>(new_capacity)?;

    let base = match handle {
        // SAFETY: `new_layout` has a non-zero size (the header alone is non-empty).
        None => unsafe { heap::alloc(new_layout) },
        Some(handle) => {
            let old_layout = block_layout::<T>(old_capacity)?;
            // SAFETY (PRECONDITIONS ARE MET): the block was allocated with `old_layout`,
            // and both layouts share `block_align::<T>()`.
            unsafe { heap::realloc(block_base(handle).as_ptr(), old_layout, new_layout.size()) }
        }
    };

    let base = NonNull::new(base).ok_or(HeadVecError::AllocationFailed { layout: new_layout })?;

    // SAFETY (PRECONDITIONS ARE MET): the block is `new_layout.size()` bytes long, which is
    // at least `element_offset::<T>()`, and it is aligned for both `Header` and `T`.
    let new_handle = unsafe { base.add(element_offset::<T>()).cast::<T>() };

    // SAFETY (PRECONDITIONS ARE MET): `new_handle` points at element 0 of the block above.
    // The counters are plain integers, so writing them into fresh memory is sound.
    unsafe {
        set_size(Some(new_handle), size);
        set_capacity(Some(new_handle), new_capacity);
    }

    log::trace!(
        "headvec block moved: capacity {old_capacity} -> {new_capacity}, size {size}, {} bytes",
        new_layout.size()
    );

    Ok(new_handle)
}

/// Frees the block. Live elements are not dropped.
///
/// # Safety
///
/// `handle` must point at element 0 of a live block and must not be used afterwards.
pub(crate) unsafe fn release<T>(handle: NonNull<T>) {
    // SAFETY (PRECONDITIONS ARE MET): forwarded from the caller.
    let capacity = unsafe { capacity_of(Some(handle)) };

    match block_layout::<T>(capacity) {
        Ok(layout) => {
            // SAFETY (PRECONDITIONS ARE MET): the block was allocated by `reallocate` with this layout.
            unsafe { heap::dealloc(block_base(handle).as_ptr(), layout) };
            log::trace!("headvec block released: capacity {capacity}");
        }
        Err(_) => unreachable!("a live block always has a representable layout"),
    }
}
