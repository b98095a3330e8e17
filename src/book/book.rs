//! Core order book: ownership of both sides, the order index, the node
//! arena, and the cached top-of-book market data.

use super::arena::OrderArena;
use super::error::BookError;
use super::side_book::SideBook;
use crate::context::Context;
use crate::order::{OrderId, Side};
use crate::utils::UuidGenerator;
use serde::Serialize;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::trace;
use uuid::Uuid;

/// A snapshot row for one price level, best-first within a depth view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelInfo {
    /// Tick price of the level.
    pub price: u32,
    /// Aggregate open quantity at the level.
    pub quantity: u64,
    /// Number of resting orders queued at the level.
    pub order_count: u32,
}

/// Point-in-time details of one resting order.
///
/// `remaining` is the OPEN quantity (original minus filled) — the value
/// a host watches to track an order being worked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderInfo {
    /// Which side the order rests on.
    pub side: Side,
    /// The resting tick price.
    pub price: u32,
    /// Open quantity still available to trade.
    pub remaining: u32,
    /// Cumulative executed quantity.
    pub filled: u32,
}

/// Aggregate book statistics, maintained incrementally so the query is
/// O(1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct BookStats {
    /// Resting orders across both sides.
    pub total_orders: usize,
    /// Populated bid price levels.
    pub bid_levels: usize,
    /// Populated ask price levels.
    pub ask_levels: usize,
    /// Open quantity across all bid levels.
    pub bid_volume: u64,
    /// Open quantity across all ask levels.
    pub ask_volume: u64,
}

/// A single-symbol limit order book with price-time priority matching.
///
/// The book is single-threaded: every mutation takes `&mut self` and the
/// caller serializes access. Side effects (trades, lifecycle events) are
/// delivered synchronously through the listeners registered on the
/// [`Context`] the book was created with.
#[derive(Debug)]
pub struct OrderBook {
    pub(super) symbol: String,
    pub(super) ctx: Rc<Context>,
    pub(super) bids: SideBook,
    pub(super) asks: SideBook,
    /// Order id to arena handle. An id present here is resting on
    /// exactly one level of exactly one side.
    pub(super) index: HashMap<OrderId, usize>,
    pub(super) arena: OrderArena,
    pub(super) trade_ids: UuidGenerator,
    /// Cached best prices, refreshed before every mutating call returns.
    pub(super) best_bid: Option<u32>,
    pub(super) best_ask: Option<u32>,
    pub(super) last_trade: Option<u32>,
    pub(super) bid_volume: u64,
    pub(super) ask_volume: u64,
}

impl OrderBook {
    /// Creates an empty book for `symbol`, bound to `ctx` for timestamps
    /// and event delivery.
    #[must_use]
    pub fn new(ctx: Rc<Context>, symbol: &str) -> Self {
        let capacity = ctx.order_pool_capacity();
        // Trade ids are seeded from the symbol so replaying the same
        // order flow reproduces the same ids.
        let namespace = Uuid::new_v5(&Uuid::NAMESPACE_OID, symbol.as_bytes());
        Self {
            symbol: symbol.to_string(),
            ctx,
            bids: SideBook::new(Side::Buy),
            asks: SideBook::new(Side::Sell),
            index: HashMap::with_capacity(capacity),
            arena: OrderArena::with_capacity(capacity),
            trade_ids: UuidGenerator::new(namespace),
            best_bid: None,
            best_ask: None,
            last_trade: None,
            bid_volume: 0,
            ask_volume: 0,
        }
    }

    /// The symbol this book trades.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Best (highest) bid price, if any bids rest.
    #[inline]
    #[must_use]
    pub fn best_bid(&self) -> Option<u32> {
        self.best_bid
    }

    /// Best (lowest) ask price, if any asks rest.
    #[inline]
    #[must_use]
    pub fn best_ask(&self) -> Option<u32> {
        self.best_ask
    }

    /// `best_ask - best_bid`; `None` unless both sides are populated.
    #[must_use]
    pub fn spread(&self) -> Option<u32> {
        match (self.best_bid, self.best_ask) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// Midpoint of the touch using integer division; `None` unless both
    /// sides are populated.
    #[must_use]
    pub fn mid_price(&self) -> Option<u32> {
        match (self.best_bid, self.best_ask) {
            (Some(bid), Some(ask)) => Some((bid + ask) / 2),
            _ => None,
        }
    }

    /// Price of the last execution on this book, if any.
    #[inline]
    #[must_use]
    pub fn last_trade_price(&self) -> Option<u32> {
        self.last_trade
    }

    /// Aggregate open quantity resting at `(side, price)`, 0 when the
    /// level does not exist.
    #[must_use]
    pub fn volume_at_price(&self, side: Side, price: u32) -> u64 {
        self.side_book(side)
            .level(price)
            .map_or(0, |level| level.total())
    }

    /// Whether `id` is resting on the book.
    #[must_use]
    pub fn has_order(&self, id: OrderId) -> bool {
        self.index.contains_key(&id)
    }

    /// Details of the resting order `id`.
    ///
    /// # Errors
    /// [`BookError::OrderNotFound`] when `id` is not resting.
    pub fn order_info(&self, id: OrderId) -> Result<OrderInfo, BookError> {
        let key = self.index.get(&id).ok_or(BookError::OrderNotFound(id))?;
        let order = &self.arena.node(*key).order;
        Ok(OrderInfo {
            side: order.side,
            price: order.price,
            remaining: order.remaining(),
            filled: order.filled,
        })
    }

    /// O(1) aggregate statistics.
    #[must_use]
    pub fn stats(&self) -> BookStats {
        BookStats {
            total_orders: self.index.len(),
            bid_levels: self.bids.level_count(),
            ask_levels: self.asks.level_count(),
            bid_volume: self.bid_volume,
            ask_volume: self.ask_volume,
        }
    }

    /// Best-first snapshot of up to `max_levels` levels on `side`.
    #[must_use]
    pub fn depth(&self, side: Side, max_levels: usize) -> Vec<LevelInfo> {
        self.side_book(side)
            .iter_best_first()
            .take(max_levels)
            .map(|level| LevelInfo {
                price: level.price(),
                quantity: level.total(),
                order_count: level.order_count(),
            })
            .collect()
    }

    /// Removes every order and level without emitting events.
    ///
    /// This is a host-administrative reset: counters, caches and the
    /// node pool all return to their initial state.
    pub fn clear(&mut self) {
        trace!("Order book {}: clearing {} orders", self.symbol, self.index.len());
        self.bids.clear();
        self.asks.clear();
        self.index.clear();
        self.arena.clear();
        self.best_bid = None;
        self.best_ask = None;
        self.last_trade = None;
        self.bid_volume = 0;
        self.ask_volume = 0;
    }

    #[inline]
    pub(super) fn side_book(&self, side: Side) -> &SideBook {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    /// Recomputes the cached best prices from the side books. Called
    /// before any mutating operation returns, so queries between calls
    /// are O(1) and always consistent.
    pub(super) fn refresh_top_of_book(&mut self) {
        self.best_bid = self.bids.best_price();
        self.best_ask = self.asks.best_price();
        debug_assert_eq!(self.index.len(), self.arena.len());

        // A populated book is never locked or crossed: any crossing
        // would have been matched away on entry.
        debug_assert!(
            match (self.best_bid, self.best_ask) {
                (Some(bid), Some(ask)) => bid < ask,
                _ => true,
            },
            "book crossed: bid {:?} >= ask {:?}",
            self.best_bid,
            self.best_ask
        );
    }

    pub(super) fn add_side_volume(&mut self, side: Side, quantity: u64) {
        match side {
            Side::Buy => self.bid_volume += quantity,
            Side::Sell => self.ask_volume += quantity,
        }
    }

    pub(super) fn sub_side_volume(&mut self, side: Side, quantity: u64) {
        match side {
            Side::Buy => self.bid_volume -= quantity,
            Side::Sell => self.ask_volume -= quantity,
        }
    }
}
