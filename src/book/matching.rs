//! The cross-side sweep: executes an incoming aggressive order against
//! the opposite side under price-time priority.
//!
//! Trades always print at the resting order's price, so aggressors never
//! pay worse than their limit and collect any price improvement. Within
//! one call the event stream is `(trade, passive event)` per match, in
//! traversal order; the caller appends the aggressive terminal event.

use super::book::OrderBook;
use crate::events::{OrderEvent, OrderEventKind, Trade};
use crate::order::{Order, Side};
use tracing::trace;

impl OrderBook {
    /// Executes `taker` against the opposite side while its price gate
    /// holds and liquidity remains. Returns the total quantity executed.
    ///
    /// `limit_price` is `None` for market orders, which cross at any
    /// price. Emptied levels are removed as the sweep passes them, and
    /// fully filled passive orders leave the index and the arena before
    /// the next match is attempted.
    pub(super) fn match_incoming(&mut self, taker: &mut Order, limit_price: Option<u32>) -> u32 {
        let mut executed_total: u32 = 0;

        while taker.remaining() > 0 {
            let best = match taker.side {
                Side::Buy => self.asks.best_price(),
                Side::Sell => self.bids.best_price(),
            };
            let Some(level_price) = best else { break };

            // Price gate: limit orders only cross while the resting
            // price is within their limit.
            if let Some(limit) = limit_price
                && !taker.side.crosses(limit, level_price)
            {
                break;
            }

            // Peel the level head by head.
            while taker.remaining() > 0 {
                let exec = {
                    let level = match taker.side {
                        Side::Buy => self.asks.level_mut(level_price),
                        Side::Sell => self.bids.level_mut(level_price),
                    };
                    match level {
                        Some(level) => level.trade_at_head(&mut self.arena, taker.remaining()),
                        None => None,
                    }
                };
                let Some(exec) = exec else { break };

                taker.filled += exec.executed;
                executed_total += exec.executed;
                self.last_trade = Some(level_price);
                self.sub_side_volume(taker.side.opposite(), u64::from(exec.executed));

                let trade = Trade {
                    trade_id: self.trade_ids.next(),
                    aggressive_order_id: taker.id,
                    passive_order_id: exec.order_id,
                    price: level_price,
                    quantity: exec.executed,
                    timestamp: self.ctx.timestamp(),
                };
                trace!(
                    "Order book {}: trade {} @ {} (aggressive {}, passive {})",
                    self.symbol, exec.executed, level_price, taker.id, exec.order_id
                );
                self.ctx.emit_trade(&trade);

                if exec.completed {
                    self.index.remove(&exec.order_id);
                    self.arena.remove(exec.key);
                    self.ctx.emit_order_event(&OrderEvent {
                        order_id: exec.order_id,
                        kind: OrderEventKind::Filled,
                        filled: exec.executed,
                        remaining: 0,
                    });
                } else {
                    self.ctx.emit_order_event(&OrderEvent {
                        order_id: exec.order_id,
                        kind: OrderEventKind::Partial,
                        filled: exec.executed,
                        remaining: exec.remaining,
                    });
                    // A surviving head means the taker is exhausted.
                    break;
                }
            }

            match taker.side {
                Side::Buy => self.asks.remove_level_if_empty(level_price),
                Side::Sell => self.bids.remove_level_if_empty(level_price),
            }
        }

        executed_total
    }

    /// Non-mutating scan of the opposite side: how much of `quantity`
    /// could execute right now for an order on `side`, bounded by
    /// `limit_price` (`None` scans all liquidity).
    ///
    /// This is also the fill-or-kill preflight: FOK accepts only when
    /// the result equals the full order quantity.
    #[must_use]
    pub fn peek_match(&self, side: Side, quantity: u32, limit_price: Option<u32>) -> u64 {
        let target = u64::from(quantity);
        let mut matched: u64 = 0;

        for level in self.side_book(side.opposite()).iter_best_first() {
            if matched >= target {
                break;
            }
            if let Some(limit) = limit_price
                && !side.crosses(limit, level.price())
            {
                break;
            }
            matched += level.total();
        }

        matched.min(target)
    }

    /// Whether an order on `side` at `price` would execute against any
    /// resting quantity. This is the post-only preflight.
    pub(super) fn would_match(&self, side: Side, price: u32) -> bool {
        self.side_book(side.opposite())
            .best_price()
            .is_some_and(|best| side.crosses(price, best))
    }
}
