// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for headvec.

use core::alloc::Layout;

use thiserror::Error;

/// Errors from the growth engine.
///
/// Only fallible entry points such as [`HeadVec::try_reserve`](crate::HeadVec::try_reserve)
/// return these. The infallible operations panic on `CapacityOverflow` and
/// abort through `handle_alloc_error` on `AllocationFailed`.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum HeadVecError {
    /// The requested capacity does not fit in `isize::MAX` bytes.
    #[error("capacity overflow: block would exceed isize::MAX bytes")]
    CapacityOverflow,

    /// The global allocator refused the request.
    #[error("allocation of {} bytes (align {}) failed", .layout.size(), .layout.align())]
    AllocationFailed {
        /// Layout of the block that could not be allocated.
        layout: Layout,
    },
}
