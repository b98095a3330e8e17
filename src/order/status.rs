use serde::{Deserialize, Serialize};
use std::fmt;

/// Flat status codes reported across the engine boundary.
///
/// `Ok` is zero; every failure is a distinct negative value. The numeric
/// values are a contract with existing hosts and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum Status {
    /// Operation completed.
    Ok = 0,
    /// Unspecified failure. Not produced by any current code path.
    Error = -1,
    /// A parameter was structurally invalid or names a reserved feature.
    InvalidParam = -2,
    /// Allocator exhaustion.
    OutOfMemory = -3,
    /// The order id is not resting on the book.
    OrderNotFound = -4,
    /// A limit price of zero.
    InvalidPrice = -5,
    /// A quantity of zero, or a modify below the filled amount.
    InvalidQuantity = -6,
    /// The order id is already resting on the book.
    DuplicateOrder = -7,
    /// A post-only order would have executed on entry.
    WouldMatch = -8,
    /// A fill-or-kill order could not be completely filled.
    CannotFill = -9,
    /// A stop order's trigger condition has not been met.
    StopNotTriggered = -10,
}

impl Status {
    /// The raw wire value.
    #[inline]
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Returns true for `Ok`.
    #[inline]
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Status::Ok)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Status::Ok => "Success",
            Status::Error => "Unspecified error",
            Status::InvalidParam => "Invalid parameter",
            Status::OutOfMemory => "Out of memory",
            Status::OrderNotFound => "Order not found",
            Status::InvalidPrice => "Invalid price",
            Status::InvalidQuantity => "Invalid quantity",
            Status::DuplicateOrder => "Duplicate order id",
            Status::WouldMatch => "Post-only order would match",
            Status::CannotFill => "Fill-or-kill order cannot fill",
            Status::StopNotTriggered => "Stop order not triggered",
        };
        write!(f, "{text}")
    }
}
