//! Slab-backed pool of order nodes.
//!
//! Every resting order lives in one arena slot; the slot key is the
//! handle stored in the order index and in the level queues' intrusive
//! links. Freed slots go back on the slab free list, so sustained
//! add/cancel churn allocates nothing once the pool has warmed up.

use crate::order::Order;
use slab::Slab;

/// A resting order plus its intrusive FIFO links within its price level.
#[derive(Debug)]
pub(crate) struct OrderNode {
    pub order: Order,
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

/// Pooled storage for order nodes with stable `usize` handles.
#[derive(Debug)]
pub(crate) struct OrderArena {
    slab: Slab<OrderNode>,
}

impl OrderArena {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slab: Slab::with_capacity(capacity),
        }
    }

    /// Stores `order` unlinked and returns its handle.
    pub fn insert(&mut self, order: Order) -> usize {
        self.slab.insert(OrderNode {
            order,
            prev: None,
            next: None,
        })
    }

    /// Frees the slot and returns the order that occupied it.
    ///
    /// The caller must have unlinked the node from its level first.
    pub fn remove(&mut self, key: usize) -> Order {
        self.slab.remove(key).order
    }

    /// Borrows the node at `key`. The key must be live.
    #[inline]
    pub fn node(&self, key: usize) -> &OrderNode {
        &self.slab[key]
    }

    /// Mutably borrows the node at `key`. The key must be live.
    #[inline]
    pub fn node_mut(&mut self, key: usize) -> &mut OrderNode {
        &mut self.slab[key]
    }

    pub fn len(&self) -> usize {
        self.slab.len()
    }

    pub fn clear(&mut self) {
        self.slab.clear();
    }
}
