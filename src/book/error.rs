//! Order book error types and their wire-code mapping.

use crate::order::{OrderId, Status};
use thiserror::Error;

/// Errors reported by order book operations.
///
/// Every validation error is detected before any state mutation: on an
/// `Err` return the book and the event stream are exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BookError {
    /// A parameter names a reserved feature or is structurally invalid.
    #[error("invalid parameter: {0}")]
    InvalidParam(&'static str),

    /// The order id is not resting on the book.
    #[error("order not found: {0}")]
    OrderNotFound(OrderId),

    /// Limit orders require a non-zero price.
    #[error("invalid price for order {0}: price must be non-zero")]
    InvalidPrice(OrderId),

    /// Quantities must be non-zero and a modify may not go below the
    /// filled amount.
    #[error("invalid quantity for order {0}")]
    InvalidQuantity(OrderId),

    /// The order id is already resting on the book.
    #[error("duplicate order id: {0}")]
    DuplicateOrder(OrderId),

    /// A post-only order would have executed on entry.
    #[error("post-only order {0} would match resting quantity")]
    WouldMatch(OrderId),

    /// A fill-or-kill order could not be completely filled on entry.
    #[error("fill-or-kill order {0} cannot be fully filled")]
    CannotFill(OrderId),
}

impl BookError {
    /// The wire status code for this error.
    #[must_use]
    pub const fn status(&self) -> Status {
        match self {
            BookError::InvalidParam(_) => Status::InvalidParam,
            BookError::OrderNotFound(_) => Status::OrderNotFound,
            BookError::InvalidPrice(_) => Status::InvalidPrice,
            BookError::InvalidQuantity(_) => Status::InvalidQuantity,
            BookError::DuplicateOrder(_) => Status::DuplicateOrder,
            BookError::WouldMatch(_) => Status::WouldMatch,
            BookError::CannotFill(_) => Status::CannotFill,
        }
    }
}

impl From<&BookError> for Status {
    fn from(err: &BookError) -> Self {
        err.status()
    }
}
