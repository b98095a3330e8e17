//! Prelude module that re-exports commonly used types and traits.
//!
//! This module provides a convenient way to import the most commonly
//! used types from the matchbook-rs crate. Instead of importing each
//! type individually, you can use:
//!
//! ```rust
//! use matchbook_rs::prelude::*;
//! ```

// Core order book types
pub use crate::book::{BookError, BookStats, LevelInfo, OrderBook, OrderInfo};

// Context and event delivery
pub use crate::context::Context;
pub use crate::events::{OrderEvent, OrderEventKind, OrderEventListener, Trade, TradeListener};

// Order domain types
pub use crate::order::{Order, OrderFlags, OrderId, OrderKind, Side, Status, TimeInForce};

// Utility functions
pub use crate::utils::{UuidGenerator, setup_logger};
