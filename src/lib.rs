//! # Matchbook
//!
//! A single-symbol, in-memory limit order book and matching engine for
//! financial-trading simulations and backtesting harnesses.
//!
//! ## Key Features
//!
//! - **Price-time priority matching**: better-priced resting orders match
//!   first; among equal prices, strict FIFO by arrival. Partial fills
//!   never move an order in its queue.
//! - **Deterministic by construction**: the engine never reads a clock.
//!   The host sets the logical timestamp on the [`Context`], so replaying
//!   the same order flow reproduces the same trades, events and trade
//!   ids.
//! - **Synchronous event delivery**: trades and order-lifecycle events
//!   are emitted through listeners on the [`Context`], inside the call
//!   that caused them, in execution order.
//! - **O(1) cancellation**: resting orders live in a slab-backed arena;
//!   the order index holds the arena handle, so a cancel unlinks from the
//!   middle of a level's queue without scanning.
//! - **Transactional rejections**: post-only and fill-or-kill checks run
//!   before any state mutation. A rejected order leaves the book and the
//!   event stream untouched.
//! - **O(1) market data**: best bid/ask, spread, mid price and aggregate
//!   statistics are served from maintained caches, refreshed before every
//!   mutating call returns.
//!
//! ## Scheduling model
//!
//! The engine is single-threaded and cooperative: no operation suspends,
//! performs I/O, or uses synchronization primitives. Every mutation takes
//! `&mut self`; the caller serializes access per book. Distinct books may
//! share a [`Context`], in which case they share its timestamp and
//! listeners and nothing else.
//!
//! ## Example
//!
//! ```
//! use matchbook_rs::{Context, OrderBook, OrderId, Side};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let ctx = Context::new();
//! let trades = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&trades);
//! ctx.set_trade_listener(Rc::new(move |trade| sink.borrow_mut().push(*trade)));
//!
//! let mut book = OrderBook::new(Rc::clone(&ctx), "BTCUSD");
//! book.add_limit(OrderId::new(1), Side::Sell, 10_000, 50).unwrap();
//! book.add_limit(OrderId::new(2), Side::Buy, 10_000, 50).unwrap();
//!
//! let trades = trades.borrow();
//! assert_eq!(trades.len(), 1);
//! assert_eq!(trades[0].price, 10_000);
//! assert_eq!(trades[0].quantity, 50);
//! assert_eq!(book.best_ask(), None);
//! ```
//!
//! ## Out of scope
//!
//! Persistence, multi-symbol routing, network transport, risk checks and
//! stop-trigger logic are host concerns. The `STOP`/`STOP_LIMIT` kinds,
//! `DAY`/`GTD` policies and `HIDDEN`/`AON` flags are reserved wire values
//! rejected with `InvalidParam`.

pub mod book;
pub mod context;
pub mod events;
pub mod order;
pub mod prelude;
mod utils;

pub use book::{BookError, BookStats, LevelInfo, OrderBook, OrderInfo};
pub use context::Context;
pub use events::{OrderEvent, OrderEventKind, OrderEventListener, Trade, TradeListener};
pub use order::{Order, OrderFlags, OrderId, OrderKind, Side, Status, TimeInForce};
pub use utils::{UuidGenerator, setup_logger};
