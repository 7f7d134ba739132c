// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for headvec.
//!
//! - [`fixtures`]: element types, formatters and equality functions shared by tests.
//! - [`DropLog`] / [`Tracked`]: elements that record when they are dropped.
//! - [`Op`] / [`ops_strategy`]: random operation sequences and a `Vec` reference model.
//!
//! ## License
//!
//! GPL-3.0-only

pub mod fixtures;
mod drop_log;
mod model;

pub use drop_log::{DropLog, Tracked};
pub use model::{Op, apply_to_model, op_strategy, ops_strategy};
