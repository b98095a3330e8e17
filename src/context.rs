//! The engine context: host-controlled logical time, callback sinks, and
//! pool sizing shared by every order book created against it.

use crate::events::{OrderEvent, OrderEventListener, Trade, TradeListener};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Default number of order-node slots reserved when a book is created.
pub const DEFAULT_ORDER_POOL_CAPACITY: usize = 1024;

/// Global state shared by the order books of one host session.
///
/// The context owns the logical timestamp (the engine never reads a
/// clock; the host advances time between calls, which keeps runs
/// deterministic and replay-safe), the two optional callback sinks, and
/// the initial arena capacity handed to each new book.
///
/// Listeners run synchronously on the thread performing the mutation.
/// A listener must not mutate the book that produced the event; the
/// mutation API takes `&mut self`, so doing so requires host-side
/// interior mutability and has undefined results.
pub struct Context {
    timestamp: Cell<u64>,
    trade_listener: RefCell<Option<TradeListener>>,
    order_listener: RefCell<Option<OrderEventListener>>,
    order_pool_capacity: Cell<usize>,
}

impl Context {
    /// Creates a context with timestamp 0 and no listeners installed.
    #[must_use]
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            timestamp: Cell::new(0),
            trade_listener: RefCell::new(None),
            order_listener: RefCell::new(None),
            order_pool_capacity: Cell::new(DEFAULT_ORDER_POOL_CAPACITY),
        })
    }

    /// Sets the logical timestamp, in nanoseconds.
    ///
    /// The host contract is monotonic non-decreasing across calls that
    /// produce events; the engine does not enforce it.
    pub fn set_timestamp(&self, timestamp: u64) {
        self.timestamp.set(timestamp);
    }

    /// The current logical timestamp.
    #[inline]
    #[must_use]
    pub fn timestamp(&self) -> u64 {
        self.timestamp.get()
    }

    /// Installs the trade listener, replacing any previous one.
    pub fn set_trade_listener(&self, listener: TradeListener) {
        *self.trade_listener.borrow_mut() = Some(listener);
    }

    /// Removes the trade listener.
    pub fn remove_trade_listener(&self) {
        *self.trade_listener.borrow_mut() = None;
    }

    /// Installs the order-event listener, replacing any previous one.
    pub fn set_order_listener(&self, listener: OrderEventListener) {
        *self.order_listener.borrow_mut() = Some(listener);
    }

    /// Removes the order-event listener.
    pub fn remove_order_listener(&self) {
        *self.order_listener.borrow_mut() = None;
    }

    /// Sets the arena capacity reserved by books created after this call.
    pub fn set_order_pool_capacity(&self, capacity: usize) {
        self.order_pool_capacity.set(capacity);
    }

    /// The arena capacity handed to new books.
    #[inline]
    #[must_use]
    pub fn order_pool_capacity(&self) -> usize {
        self.order_pool_capacity.get()
    }

    pub(crate) fn emit_trade(&self, trade: &Trade) {
        // Clone the Rc out of the cell so the borrow does not span the
        // listener call.
        let listener = self.trade_listener.borrow().clone();
        if let Some(listener) = listener {
            listener(trade);
        }
    }

    pub(crate) fn emit_order_event(&self, event: &OrderEvent) {
        let listener = self.order_listener.borrow().clone();
        if let Some(listener) = listener {
            listener(event);
        }
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("timestamp", &self.timestamp.get())
            .field("has_trade_listener", &self.trade_listener.borrow().is_some())
            .field("has_order_listener", &self.order_listener.borrow().is_some())
            .field("order_pool_capacity", &self.order_pool_capacity.get())
            .finish()
    }
}
