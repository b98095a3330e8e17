//! A single price level: one tick price and the FIFO queue of resting
//! orders at that price.
//!
//! The queue is an intrusive doubly linked list over arena handles, so
//! removal from any position is O(1) given the handle. Partial fills
//! never move the head; priority is strictly arrival order.

use super::arena::OrderArena;
use crate::order::OrderId;

/// Outcome of executing against the head of a level's queue.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeadExecution {
    /// Arena handle of the head order. Still allocated on return; the
    /// caller frees it (after event emission) when `completed` is true.
    pub key: usize,
    pub order_id: OrderId,
    /// Quantity executed in this step. Always non-zero.
    pub executed: u32,
    /// Open quantity left on the head after this step.
    pub remaining: u32,
    /// True when the head fully filled and was unlinked from the queue.
    pub completed: bool,
}

/// One tick price and its resting FIFO queue, with a cached aggregate of
/// the members' open quantity.
#[derive(Debug)]
pub(crate) struct PriceLevel {
    price: u32,
    head: Option<usize>,
    tail: Option<usize>,
    order_count: u32,
    total: u64,
}

impl PriceLevel {
    pub fn new(price: u32) -> Self {
        Self {
            price,
            head: None,
            tail: None,
            order_count: 0,
            total: 0,
        }
    }

    #[inline]
    pub fn price(&self) -> u32 {
        self.price
    }

    /// Aggregate open quantity across the queue.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    #[inline]
    pub fn order_count(&self) -> u32 {
        self.order_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[inline]
    pub fn peek_head(&self) -> Option<usize> {
        self.head
    }

    /// Appends the node at `key` to the tail of the queue.
    pub fn push_back(&mut self, arena: &mut OrderArena, key: usize) {
        let remaining = u64::from(arena.node(key).order.remaining());

        {
            let node = arena.node_mut(key);
            node.prev = self.tail;
            node.next = None;
        }

        match self.tail {
            Some(tail) => arena.node_mut(tail).next = Some(key),
            None => self.head = Some(key),
        }
        self.tail = Some(key);
        self.order_count += 1;
        self.total += remaining;
    }

    /// Unlinks the node at `key` from any position in the queue.
    ///
    /// The arena slot stays allocated; the caller decides when to free
    /// it. Aggregates are adjusted by the node's open quantity.
    pub fn unlink(&mut self, arena: &mut OrderArena, key: usize) {
        let (prev, next, remaining) = {
            let node = arena.node(key);
            (node.prev, node.next, u64::from(node.order.remaining()))
        };

        match prev {
            Some(prev) => arena.node_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => arena.node_mut(next).prev = prev,
            None => self.tail = prev,
        }

        {
            let node = arena.node_mut(key);
            node.prev = None;
            node.next = None;
        }
        self.order_count -= 1;
        self.total -= remaining;
    }

    /// Executes up to `quantity` against the head order.
    ///
    /// Increments the head's fill, shrinks the aggregate, and unlinks the
    /// head when it completes. Returns `None` on an empty queue.
    pub fn trade_at_head(&mut self, arena: &mut OrderArena, quantity: u32) -> Option<HeadExecution> {
        let key = self.peek_head()?;

        let (order_id, executed, remaining) = {
            let node = arena.node_mut(key);
            let executed = quantity.min(node.order.remaining());
            node.order.filled += executed;
            (node.order.id, executed, node.order.remaining())
        };

        self.total -= u64::from(executed);
        let completed = remaining == 0;
        if completed {
            // The node's open quantity is already zero, so unlink only
            // adjusts the links and count.
            self.unlink(arena, key);
        }

        Some(HeadExecution {
            key,
            order_id,
            executed,
            remaining,
            completed,
        })
    }

    /// Shrinks the order at `key` to `new_quantity` in place.
    ///
    /// Queue position is untouched; only the aggregate changes. The
    /// caller has validated `filled <= new_quantity < quantity`.
    pub fn reduce_quantity(&mut self, arena: &mut OrderArena, key: usize, new_quantity: u32) {
        let node = arena.node_mut(key);
        let delta = u64::from(node.order.quantity - new_quantity);
        node.order.quantity = new_quantity;
        self.total -= delta;
    }

    /// Grows the order at `key` to `new_quantity` and sends it to the
    /// back of the queue: a size increase forfeits time priority.
    pub fn grow_quantity(&mut self, arena: &mut OrderArena, key: usize, new_quantity: u32) {
        self.unlink(arena, key);
        arena.node_mut(key).order.quantity = new_quantity;
        self.push_back(arena, key);
    }
}
