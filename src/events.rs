//! Post-trade event payloads and the listener types that receive them.
//!
//! Events are delivered synchronously, inside the call that produced
//! them, in execution order. For a single aggressive arrival the stream
//! is `(trade, passive event)` per match, followed by the aggressive
//! order's terminal event.

use crate::order::OrderId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use uuid::Uuid;

/// Lifecycle events reported for individual orders.
///
/// Discriminant values are part of the wire contract. `Rejected`,
/// `Expired` and `Triggered` are reserved kinds not produced by any
/// current engine path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum OrderEventKind {
    /// The order rested on the book without executing.
    Accepted = 0,
    /// Reserved: the order was refused.
    Rejected = 1,
    /// The order's full quantity has executed; it is off the book.
    Filled = 2,
    /// Part of the order executed.
    Partial = 3,
    /// The order was removed at the host's request.
    Cancelled = 4,
    /// Reserved: the order lapsed at its expiry.
    Expired = 5,
    /// Reserved: a stop order's trigger fired.
    Triggered = 6,
}

impl fmt::Display for OrderEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            OrderEventKind::Accepted => "ACCEPTED",
            OrderEventKind::Rejected => "REJECTED",
            OrderEventKind::Filled => "FILLED",
            OrderEventKind::Partial => "PARTIAL",
            OrderEventKind::Cancelled => "CANCELLED",
            OrderEventKind::Expired => "EXPIRED",
            OrderEventKind::Triggered => "TRIGGERED",
        };
        write!(f, "{text}")
    }
}

/// A single execution between an aggressive and a passive order.
///
/// `price` is always the passive order's resting price; aggressive orders
/// receive any price improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// Deterministic per-book execution id.
    pub trade_id: Uuid,
    /// The incoming order that crossed.
    pub aggressive_order_id: OrderId,
    /// The resting order that was hit.
    pub passive_order_id: OrderId,
    /// Execution price in ticks.
    pub price: u32,
    /// Executed quantity. Always non-zero.
    pub quantity: u32,
    /// The context timestamp at execution.
    pub timestamp: u64,
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Trade:aggressive={};passive={};price={};quantity={};timestamp={}",
            self.aggressive_order_id, self.passive_order_id, self.price, self.quantity,
            self.timestamp
        )
    }
}

/// A lifecycle notification for one order.
///
/// For passive fills `filled` is the quantity executed in that step; for
/// the aggressive order's terminal event it is the cumulative quantity
/// executed in the call. `remaining` is what stays open on the book
/// (zero once the order is removed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEvent {
    /// The order the event refers to.
    pub order_id: OrderId,
    /// What happened.
    pub kind: OrderEventKind,
    /// Executed quantity (step delta for passive events, cumulative for
    /// the aggressive terminal event).
    pub filled: u32,
    /// Open quantity left after the event.
    pub remaining: u32,
}

impl fmt::Display for OrderEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OrderEvent:id={};kind={};filled={};remaining={}",
            self.order_id, self.kind, self.filled, self.remaining
        )
    }
}

/// Receives every trade produced by books bound to a context.
pub type TradeListener = Rc<dyn Fn(&Trade)>;

/// Receives every order-lifecycle event produced by books bound to a
/// context.
pub type OrderEventListener = Rc<dyn Fn(&OrderEvent)>;
