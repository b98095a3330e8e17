//! Order book operations: adding, canceling and modifying orders.
//!
//! Every entry point validates its inputs in contract order before
//! touching any state; on an error return the book and the event stream
//! are untouched.

use super::book::OrderBook;
use super::error::BookError;
use crate::events::{OrderEvent, OrderEventKind};
use crate::order::{Order, OrderFlags, OrderId, OrderKind, Side, TimeInForce};
use tracing::trace;

impl OrderBook {
    /// Adds a plain limit order: GTC, no flags.
    ///
    /// # Errors
    /// `InvalidQuantity` when `quantity` is zero, `InvalidPrice` when
    /// `price` is zero, `DuplicateOrder` when `id` already rests.
    pub fn add_limit(
        &mut self,
        id: OrderId,
        side: Side,
        price: u32,
        quantity: u32,
    ) -> Result<(), BookError> {
        self.add_limit_with(id, side, price, quantity, TimeInForce::Gtc, OrderFlags::empty())
    }

    /// Adds a limit order with an explicit time-in-force and flag set.
    ///
    /// GTC remainders rest; IOC remainders are discarded; FOK executes
    /// completely or fails `CannotFill` without touching the book. A
    /// `POST_ONLY` order that would execute on entry fails `WouldMatch`,
    /// also without touching the book.
    ///
    /// # Errors
    /// `InvalidQuantity`, `InvalidPrice`, `DuplicateOrder` as for
    /// [`Self::add_limit`]; `InvalidParam` for the reserved `DAY`/`GTD`
    /// policies or `HIDDEN`/`AON` flags; `WouldMatch`; `CannotFill`.
    pub fn add_limit_with(
        &mut self,
        id: OrderId,
        side: Side,
        price: u32,
        quantity: u32,
        time_in_force: TimeInForce,
        flags: OrderFlags,
    ) -> Result<(), BookError> {
        trace!(
            "Order book {}: add limit {} {} {} x {} {}",
            self.symbol, id, side, price, quantity, time_in_force
        );

        if quantity == 0 {
            return Err(BookError::InvalidQuantity(id));
        }
        if price == 0 {
            return Err(BookError::InvalidPrice(id));
        }
        if self.index.contains_key(&id) {
            return Err(BookError::DuplicateOrder(id));
        }
        if !time_in_force.is_supported() {
            return Err(BookError::InvalidParam("time in force"));
        }
        if !flags.is_supported() {
            return Err(BookError::InvalidParam("flags"));
        }

        // Preflight checks keep rejections transactional: no trades, no
        // events, no state change.
        if flags.contains(OrderFlags::POST_ONLY) && self.would_match(side, price) {
            return Err(BookError::WouldMatch(id));
        }
        if time_in_force == TimeInForce::Fok
            && self.peek_match(side, quantity, Some(price)) < u64::from(quantity)
        {
            return Err(BookError::CannotFill(id));
        }

        let mut order = Order {
            id,
            side,
            price,
            quantity,
            filled: 0,
            timestamp: self.ctx.timestamp(),
            kind: OrderKind::Limit,
            time_in_force,
            flags,
        };

        let executed = self.match_incoming(&mut order, Some(price));

        if order.remaining() == 0 {
            self.ctx.emit_order_event(&OrderEvent {
                order_id: id,
                kind: OrderEventKind::Filled,
                filled: executed,
                remaining: 0,
            });
        } else if order.time_in_force.is_immediate() {
            // IOC residual is discarded. (FOK cannot reach here: the
            // preflight guarantees a complete fill.)
            if executed > 0 {
                self.ctx.emit_order_event(&OrderEvent {
                    order_id: id,
                    kind: OrderEventKind::Partial,
                    filled: executed,
                    remaining: order.remaining(),
                });
            }
        } else {
            let kind = if executed > 0 {
                OrderEventKind::Partial
            } else {
                OrderEventKind::Accepted
            };
            self.ctx.emit_order_event(&OrderEvent {
                order_id: id,
                kind,
                filled: executed,
                remaining: order.remaining(),
            });
            self.rest(order);
        }

        self.refresh_top_of_book();
        Ok(())
    }

    /// Submits an order with an explicit kind, routing to the limit or
    /// market path.
    ///
    /// `price` is ignored for market orders. The reserved `Stop` and
    /// `StopLimit` kinds are rejected with `InvalidParam` — trigger
    /// logic is a host concern — as are flags on a market order.
    ///
    /// # Errors
    /// As for [`Self::add_limit_with`] and [`Self::add_market`], plus
    /// `InvalidParam` for a reserved kind.
    #[allow(clippy::too_many_arguments)]
    pub fn add_order(
        &mut self,
        id: OrderId,
        side: Side,
        kind: OrderKind,
        price: u32,
        quantity: u32,
        time_in_force: TimeInForce,
        flags: OrderFlags,
    ) -> Result<(), BookError> {
        match kind {
            OrderKind::Limit => {
                self.add_limit_with(id, side, price, quantity, time_in_force, flags)
            }
            OrderKind::Market => {
                if !flags.is_empty() {
                    return Err(BookError::InvalidParam("flags"));
                }
                self.add_market(id, side, quantity)
            }
            OrderKind::Stop | OrderKind::StopLimit => Err(BookError::InvalidParam("order kind")),
        }
    }

    /// Adds a market order: executes against available liquidity and
    /// never rests. Succeeds even into an empty book (zero fills, no
    /// residual, no events).
    ///
    /// # Errors
    /// `InvalidQuantity` when `quantity` is zero, `DuplicateOrder` when
    /// `id` already rests.
    pub fn add_market(&mut self, id: OrderId, side: Side, quantity: u32) -> Result<(), BookError> {
        trace!(
            "Order book {}: add market {} {} x {}",
            self.symbol, id, side, quantity
        );

        if quantity == 0 {
            return Err(BookError::InvalidQuantity(id));
        }
        if self.index.contains_key(&id) {
            return Err(BookError::DuplicateOrder(id));
        }

        let mut order = Order {
            id,
            side,
            price: 0,
            quantity,
            filled: 0,
            timestamp: self.ctx.timestamp(),
            kind: OrderKind::Market,
            time_in_force: TimeInForce::Ioc,
            flags: OrderFlags::empty(),
        };

        let executed = self.match_incoming(&mut order, None);

        if order.remaining() == 0 {
            self.ctx.emit_order_event(&OrderEvent {
                order_id: id,
                kind: OrderEventKind::Filled,
                filled: executed,
                remaining: 0,
            });
        } else if executed > 0 {
            self.ctx.emit_order_event(&OrderEvent {
                order_id: id,
                kind: OrderEventKind::Partial,
                filled: executed,
                remaining: order.remaining(),
            });
        }

        self.refresh_top_of_book();
        Ok(())
    }

    /// Cancels the resting order `id`, removing it from its level (and
    /// the level itself when emptied), the index and the node pool, then
    /// emits `CANCELLED`.
    ///
    /// # Errors
    /// `OrderNotFound` when `id` is not resting.
    pub fn cancel(&mut self, id: OrderId) -> Result<(), BookError> {
        let key = self.index.remove(&id).ok_or(BookError::OrderNotFound(id))?;

        let (side, price, filled, remaining) = {
            let order = &self.arena.node(key).order;
            (order.side, order.price, order.filled, order.remaining())
        };
        trace!(
            "Order book {}: cancel {} ({} {} x {} open)",
            self.symbol, id, side, price, remaining
        );

        {
            let book = match side {
                Side::Buy => &mut self.bids,
                Side::Sell => &mut self.asks,
            };
            if let Some(level) = book.level_mut(price) {
                level.unlink(&mut self.arena, key);
            }
            book.remove_level_if_empty(price);
        }
        self.arena.remove(key);
        self.sub_side_volume(side, u64::from(remaining));

        self.ctx.emit_order_event(&OrderEvent {
            order_id: id,
            kind: OrderEventKind::Cancelled,
            filled,
            remaining,
        });

        self.refresh_top_of_book();
        Ok(())
    }

    /// Changes the resting order `id`'s quantity to `new_quantity`.
    ///
    /// Reductions keep the order's queue position (a hard guarantee);
    /// an increase forfeits time priority — the order is re-stamped with
    /// the current context timestamp and moved to the back of its
    /// level's queue. Reducing to exactly the filled amount completes
    /// the order, which is removed with a `FILLED` event.
    ///
    /// # Errors
    /// `OrderNotFound` when `id` is not resting; `InvalidQuantity` when
    /// `new_quantity` is zero or below the filled amount.
    pub fn modify(&mut self, id: OrderId, new_quantity: u32) -> Result<(), BookError> {
        let &key = self.index.get(&id).ok_or(BookError::OrderNotFound(id))?;
        if new_quantity == 0 {
            return Err(BookError::InvalidQuantity(id));
        }

        let (side, price, quantity, filled, remaining) = {
            let order = &self.arena.node(key).order;
            (
                order.side,
                order.price,
                order.quantity,
                order.filled,
                order.remaining(),
            )
        };
        if new_quantity < filled {
            return Err(BookError::InvalidQuantity(id));
        }
        if new_quantity == quantity {
            return Ok(());
        }
        trace!(
            "Order book {}: modify {} from {} to {}",
            self.symbol, id, quantity, new_quantity
        );

        if new_quantity == filled {
            // Nothing left open: the order is complete.
            self.index.remove(&id);
            {
                let book = match side {
                    Side::Buy => &mut self.bids,
                    Side::Sell => &mut self.asks,
                };
                if let Some(level) = book.level_mut(price) {
                    level.unlink(&mut self.arena, key);
                }
                book.remove_level_if_empty(price);
            }
            self.arena.remove(key);
            self.sub_side_volume(side, u64::from(remaining));

            self.ctx.emit_order_event(&OrderEvent {
                order_id: id,
                kind: OrderEventKind::Filled,
                filled,
                remaining: 0,
            });
        } else if new_quantity < quantity {
            let delta = u64::from(quantity - new_quantity);
            let book = match side {
                Side::Buy => &mut self.bids,
                Side::Sell => &mut self.asks,
            };
            if let Some(level) = book.level_mut(price) {
                level.reduce_quantity(&mut self.arena, key, new_quantity);
            }
            self.sub_side_volume(side, delta);
        } else {
            let delta = u64::from(new_quantity - quantity);
            let timestamp = self.ctx.timestamp();
            self.arena.node_mut(key).order.timestamp = timestamp;
            let book = match side {
                Side::Buy => &mut self.bids,
                Side::Sell => &mut self.asks,
            };
            if let Some(level) = book.level_mut(price) {
                level.grow_quantity(&mut self.arena, key, new_quantity);
            }
            self.add_side_volume(side, delta);
        }

        self.refresh_top_of_book();
        Ok(())
    }

    /// Rests an order remainder on its own side and records it in the
    /// index.
    fn rest(&mut self, order: Order) {
        let side = order.side;
        let open = u64::from(order.remaining());
        let id = order.id;

        let key = self.arena.insert(order);
        match side {
            Side::Buy => self.bids.enqueue(&mut self.arena, key),
            Side::Sell => self.asks.enqueue(&mut self.arena, key),
        }
        self.index.insert(id, key);
        self.add_side_volume(side, open);
    }
}
