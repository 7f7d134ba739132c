// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Element fixtures.

/// Two-field record used to exercise non-scalar elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Renders a coordinate as `(x, y)`.
pub fn coordinate_to_string(coordinate: &Coordinate) -> String {
    format!("({}, {})", coordinate.x, coordinate.y)
}

pub fn coordinate_equals(a: &Coordinate, b: &Coordinate) -> bool {
    a.x == b.x && a.y == b.y
}

pub fn int_to_string(value: &i32) -> String {
    value.to_string()
}

pub fn int_equals(a: &i32, b: &i32) -> bool {
    a == b
}

/// Element aligned more strictly than the header, to exercise block padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(align(64))]
pub struct OverAligned(pub u8);
