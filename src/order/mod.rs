//! Order domain types: identifiers, sides, kinds, time-in-force policies,
//! behavior flags, and the resting order itself.

mod flags;
mod kind;
mod side;
mod status;
mod time_in_force;

pub use flags::OrderFlags;
pub use kind::OrderKind;
pub use side::Side;
pub use status::Status;
pub use time_in_force::TimeInForce;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 64-bit order identifier, unique per order book.
///
/// Ids are assigned by the host; the engine never generates them. Reuse
/// after an order leaves the book is permitted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl OrderId {
    /// Wraps a raw host-assigned id.
    #[inline]
    #[must_use]
    pub const fn new(id: u64) -> Self {
        OrderId(id)
    }

    /// The raw id value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        OrderId(id)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A resting order.
///
/// `filled` is monotonically non-decreasing and strictly below `quantity`
/// while the order rests; the instant `filled == quantity` the order is
/// removed from every structure before any further mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Host-assigned unique identifier.
    pub id: OrderId,
    /// Buy or sell.
    pub side: Side,
    /// Limit price in integer ticks. Zero only for market orders, which
    /// never rest.
    pub price: u32,
    /// Original quantity (reduced in place by `modify`).
    pub quantity: u32,
    /// Cumulative executed quantity.
    pub filled: u32,
    /// Arrival timestamp in logical nanoseconds from the context.
    pub timestamp: u64,
    /// Execution style.
    pub kind: OrderKind,
    /// Remainder disposition policy.
    pub time_in_force: TimeInForce,
    /// Behavior flags.
    pub flags: OrderFlags,
}

impl Order {
    /// Open quantity still available to trade.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.quantity - self.filled
    }

    /// True once the full quantity has executed.
    #[inline]
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.filled >= self.quantity
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:id={};side={};price={};quantity={};filled={};tif={}",
            self.kind, self.id, self.side, self.price, self.quantity, self.filled,
            self.time_in_force
        )
    }
}
