// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::alloc::handle_alloc_error;
use core::marker::PhantomData;
use core::mem::MaybeUninit;
use core::ptr::{self, NonNull};
use core::slice;

use crate::error::HeadVecError;
use crate::policy::{DefaultPolicy, GrowthPolicy};
use crate::raw;

/// A growable array whose size and capacity live in a header right before
/// element 0, in the same allocation.
///
/// The container itself is a single pointer wide. An empty `HeadVec` owns no
/// allocation at all; the first push allocates room for
/// [`GrowthPolicy::INITIAL_CAPACITY`] elements and every later growth doubles
/// the capacity.
///
/// Indexing, iteration and the rest of the slice API come through
/// `Deref<Target = [T]>`.
///
/// # Example
///
/// ```rust
/// use headvec::HeadVec;
///
/// let mut vec = HeadVec::new();
/// assert!(vec.is_empty());
/// assert_eq!(vec.capacity(), 0);
///
/// for i in 0..100 {
///     vec.push_back(i);
/// }
///
/// assert_eq!(vec.len(), 100);
/// assert_eq!(vec.capacity(), 192);
/// assert_eq!(vec[42], 42);
///
/// vec.shrink_to_fit();
/// assert_eq!(vec.capacity(), 100);
///
/// while let Some(value) = vec.pop_back() {
///     assert_eq!(value, vec.len());
/// }
/// ```
pub struct HeadVec<T, P = DefaultPolicy> {
    // Invariant: `None`, or element 0 of a live block with `capacity > 0`.
    handle: Option<NonNull<T>>,
    _owns: PhantomData<T>,
    _policy: PhantomData<fn() -> P>,
}

// SAFETY: `HeadVec` uniquely owns its block and the elements in it.
unsafe impl<T: Send, P> Send for HeadVec<T, P> {}

// SAFETY: shared access only hands out `&T`.
unsafe impl<T: Sync, P> Sync for HeadVec<T, P> {}

impl<T> HeadVec<T> {
    /// Creates an empty container. Does not allocate.
    pub const fn new() -> Self {
        Self {
            handle: None,
            _owns: PhantomData,
            _policy: PhantomData,
        }
    }

    /// Creates a container with room for exactly `capacity` elements.
    ///
    /// `with_capacity(0)` does not allocate.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_policy(capacity, DefaultPolicy::default())
    }
}

impl<T, P: GrowthPolicy> HeadVec<T, P> {
    /// Creates an empty container governed by `policy`.
    ///
    /// ```rust
    /// use headvec::{HeadVec, ShrinkOnRemove};
    ///
    /// let mut vec = HeadVec::with_policy(ShrinkOnRemove);
    /// for i in 0..8 {
    ///     vec.push_back(i);
    /// }
    /// assert_eq!(vec.capacity(), 12);
    ///
    /// while vec.len() > 3 {
    ///     vec.pop_back();
    /// }
    /// assert_eq!(vec.capacity(), 6);
    /// ```
    pub fn with_policy(_policy: P) -> Self {
        Self {
            handle: None,
            _owns: PhantomData,
            _policy: PhantomData,
        }
    }

    /// Creates a container governed by `policy` with room for exactly `capacity` elements.
    pub fn with_capacity_and_policy(capacity: usize, policy: P) -> Self {
        let mut vec = Self::with_policy(policy);
        vec.reserve(capacity);
        vec
    }

    /// Returns the number of elements in the container.
    #[inline]
    pub fn len(&self) -> usize {
        // SAFETY (PRECONDITIONS ARE MET): `handle` is null or points at a live block.
        unsafe { raw::size_of(self.handle) }
    }

    /// Returns the number of elements the container holds without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        // SAFETY (PRECONDITIONS ARE MET): `handle` is null or points at a live block.
        unsafe { raw::capacity_of(self.handle) }
    }

    /// Returns `true` if the container holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a pointer to element 0, or a dangling pointer when nothing is allocated.
    ///
    /// The pointer is invalidated by any operation that may reallocate.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        match self.handle {
            Some(handle) => handle.as_ptr(),
            None => NonNull::dangling().as_ptr(),
        }
    }

    /// Returns a mutable pointer to element 0, or a dangling pointer when nothing is allocated.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        match self.handle {
            Some(handle) => handle.as_ptr(),
            None => NonNull::dangling().as_ptr(),
        }
    }

    /// Returns a slice over the live elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY (PRECONDITIONS ARE MET): the first `len()` elements are initialized;
        // for the null handle the pointer is dangling but aligned and the length is 0.
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len()) }
    }

    /// Returns a mutable slice over the live elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len();
        // SAFETY (PRECONDITIONS ARE MET): see `as_slice`.
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), len) }
    }

    /// Returns the slots between `len()` and `capacity()`.
    ///
    /// After [`clear`](Self::clear) or [`pop_back`](Self::pop_back) these slots
    /// still hold the bytes of the removed elements.
    pub fn spare_capacity_mut(&mut self) -> &mut [MaybeUninit<T>] {
        let len = self.len();
        let spare = self.capacity() - len;
        // SAFETY (PRECONDITIONS ARE MET): slots `len..capacity` lie inside the block.
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr().add(len).cast(), spare) }
    }

    /// Forces the size counter to `new_len`. No-op when nothing is allocated.
    ///
    /// # Safety
    ///
    /// - `new_len` must be less than or equal to `capacity()`.
    /// - the elements at `old_len..new_len` must be initialized.
    #[inline]
    pub unsafe fn set_len(&mut self, new_len: usize) {
        // SAFETY (PRECONDITIONS ARE MET): forwarded from the caller.
        unsafe { raw::set_size(self.handle, new_len) };
    }

    /// Returns the first element, or `None` if the container is empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, or `None` if the container is empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Appends `value` after the last element.
    ///
    /// Grows when `capacity() <= len() + 1`: to `INITIAL_CAPACITY` from empty,
    /// otherwise to twice the current capacity. Amortized O(1).
    ///
    /// ```rust
    /// use headvec::HeadVec;
    ///
    /// let mut vec = HeadVec::new();
    /// vec.push_back(1u32);
    /// assert_eq!(vec.capacity(), 12);
    ///
    /// for i in 2..=12 {
    ///     vec.push_back(i);
    /// }
    /// assert_eq!(vec.capacity(), 24);
    /// assert_eq!(vec.back(), Some(&12));
    /// ```
    pub fn push_back(&mut self, value: T) {
        self.grow_for(1);

        // SAFETY (PRECONDITIONS ARE MET): `grow_for(1)` leaves at least one free slot.
        unsafe { self.push_unchecked(value) };
    }

    /// Removes the last element and returns it, or `None` if the container is empty.
    ///
    /// Under [`ShrinkOnRemove`](crate::ShrinkOnRemove) the capacity is halved
    /// once the remaining size is at most a quarter of it.
    pub fn pop_back(&mut self) -> Option<T> {
        let handle = self.handle?;
        let len = self.len();
        if len == 0 {
            return None;
        }

        // SAFETY (PRECONDITIONS ARE MET): slot `len - 1` is initialized. The size drops first,
        // so from here on the element is owned by `value` alone.
        let value = unsafe {
            raw::set_size(self.handle, len - 1);
            ptr::read(handle.as_ptr().add(len - 1))
        };

        if P::SHRINK_ON_REMOVE {
            self.shrink_after_removal();
        }

        Some(value)
    }

    /// Reallocates to exactly `new_capacity` if it is above the current capacity.
    ///
    /// Never shrinks; use [`shrink_to_fit`](Self::shrink_to_fit) for that.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow and aborts if the allocator fails.
    pub fn reserve(&mut self, new_capacity: usize) {
        if let Err(error) = self.try_reserve(new_capacity) {
            alloc_failure(error);
        }
    }

    /// Fallible version of [`reserve`](Self::reserve).
    ///
    /// On error the container is left unchanged.
    ///
    /// # Errors
    ///
    /// - [`HeadVecError::CapacityOverflow`] if the block would exceed `isize::MAX` bytes.
    /// - [`HeadVecError::AllocationFailed`] if the allocator refuses the request.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), HeadVecError> {
        if new_capacity == 0 || new_capacity <= self.capacity() {
            return Ok(());
        }

        self.try_reallocate(new_capacity)
    }

    /// Reallocates so that `capacity() == len()`.
    ///
    /// An empty container gives its block back entirely.
    pub fn shrink_to_fit(&mut self) {
        if self.handle.is_none() {
            return;
        }

        let len = self.len();
        if len == 0 {
            self.release();
        } else if len != self.capacity() {
            self.reallocate(len);
        }
    }

    /// Drops every element and sets the size to 0.
    ///
    /// The capacity is kept and the slots are not overwritten.
    pub fn clear(&mut self) {
        let len = self.len();

        // SAFETY (PRECONDITIONS ARE MET): the first `len` slots are initialized. The size drops
        // to 0 before they are dropped, so a panicking destructor cannot cause a second drop.
        unsafe {
            raw::set_size(self.handle, 0);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.as_mut_ptr(), len));
        }
    }

    /// Writes `value` into slot `len()` and bumps the size.
    ///
    /// # Safety
    ///
    /// `len() < capacity()` must hold.
    #[inline]
    pub(crate) unsafe fn push_unchecked(&mut self, value: T) {
        let len = self.len();
        debug_assert!(len < self.capacity());

        // SAFETY (PRECONDITIONS ARE MET): slot `len` lies inside the block.
        unsafe {
            self.as_mut_ptr().add(len).write(value);
            raw::set_size(self.handle, len + 1);
        }
    }

    /// Grows so that `additional` more elements fit.
    ///
    /// Does nothing while `capacity() > len() + additional`. Otherwise starts
    /// from `INITIAL_CAPACITY` (empty) or twice the capacity, doubling again
    /// until the new elements fit.
    pub(crate) fn grow_for(&mut self, additional: usize) {
        let Some(required) = self.len().checked_add(additional) else {
            capacity_overflow();
        };

        let capacity = self.capacity();
        if capacity > required {
            return;
        }

        let mut new_capacity = if capacity == 0 {
            P::INITIAL_CAPACITY
        } else {
            capacity.checked_mul(2).unwrap_or_else(|| capacity_overflow())
        };
        assert!(new_capacity > 0, "GrowthPolicy::INITIAL_CAPACITY must be non-zero");

        while new_capacity < required {
            new_capacity = new_capacity.checked_mul(2).unwrap_or_else(|| capacity_overflow());
        }

        self.reallocate(new_capacity);
    }

    fn shrink_after_removal(&mut self) {
        let capacity = self.capacity();
        if self.len() > capacity / 4 {
            return;
        }

        let halved = capacity / 2;
        log::debug!(
            "headvec shrinking after removal: size {}, capacity {capacity} -> {halved}",
            self.len()
        );

        if halved == 0 {
            // size <= capacity / 4 == 0 here, so no element is lost.
            self.release();
        } else {
            self.reallocate(halved);
        }
    }

    fn reallocate(&mut self, new_capacity: usize) {
        if let Err(error) = self.try_reallocate(new_capacity) {
            alloc_failure(error);
        }
    }

    fn try_reallocate(&mut self, new_capacity: usize) -> Result<(), HeadVecError> {
        // SAFETY (PRECONDITIONS ARE MET): `handle` is null or points at a live block;
        // on success the old handle is replaced and never used again.
        let handle = unsafe { raw::reallocate(self.handle, new_capacity)? };
        self.handle = Some(handle);
        Ok(())
    }

    /// Frees the block without dropping anything. Callers make sure no live element remains.
    pub(crate) fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            // SAFETY (PRECONDITIONS ARE MET): the handle was just taken, so it is not reused.
            unsafe { raw::release(handle) };
        }
    }
}

impl<T, P> Drop for HeadVec<T, P> {
    fn drop(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };

        // SAFETY (PRECONDITIONS ARE MET): the first `size` slots are initialized and
        // the handle has been taken, so neither the elements nor the block are touched again.
        unsafe {
            let len = raw::size_of(Some(handle));
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(handle.as_ptr(), len));
            raw::release(handle);
        }
    }
}

#[cold]
#[inline(never)]
fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

#[cold]
#[inline(never)]
fn alloc_failure(error: HeadVecError) -> ! {
    match error {
        HeadVecError::CapacityOverflow => capacity_overflow(),
        HeadVecError::AllocationFailed { layout } => handle_alloc_error(layout),
    }
}
