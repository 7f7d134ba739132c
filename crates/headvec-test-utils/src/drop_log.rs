// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Drop-order tracking.

use std::cell::RefCell;
use std::rc::Rc;

/// Shared record of dropped element ids, in drop order.
#[derive(Debug, Clone, Default)]
pub struct DropLog {
    dropped: Rc<RefCell<Vec<u32>>>,
}

impl DropLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an element that appends `id` to this log when dropped.
    pub fn track(&self, id: u32) -> Tracked {
        Tracked {
            id,
            log: Rc::clone(&self.dropped),
        }
    }

    /// Ids dropped so far, in drop order.
    pub fn dropped(&self) -> Vec<u32> {
        self.dropped.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.dropped.borrow().len()
    }
}

/// Element that reports its own drop to a [`DropLog`].
#[derive(Debug)]
pub struct Tracked {
    id: u32,
    log: Rc<RefCell<Vec<u32>>>,
}

impl Tracked {
    pub fn id(&self) -> u32 {
        self.id
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.log.borrow_mut().push(self.id);
    }
}
