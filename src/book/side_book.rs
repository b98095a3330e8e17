//! One side of the book: a price-ordered map of levels, navigable in
//! best-first order.
//!
//! The map maintains sorted order automatically; the bid side walks it in
//! reverse (highest price first), the ask side forward (lowest first).
//! Levels are created lazily on the first arrival at a tick and removed
//! as soon as their last order departs.

use super::arena::OrderArena;
use super::level::PriceLevel;
use crate::order::Side;
use std::collections::BTreeMap;

#[derive(Debug)]
pub(crate) struct SideBook {
    side: Side,
    levels: BTreeMap<u32, PriceLevel>,
}

impl SideBook {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
        }
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Number of populated price levels.
    #[inline]
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// The best price on this side: highest bid, lowest ask.
    pub fn best_price(&self) -> Option<u32> {
        match self.side {
            Side::Buy => self.levels.keys().next_back().copied(),
            Side::Sell => self.levels.keys().next().copied(),
        }
    }

    #[inline]
    pub fn level(&self, price: u32) -> Option<&PriceLevel> {
        self.levels.get(&price)
    }

    #[inline]
    pub fn level_mut(&mut self, price: u32) -> Option<&mut PriceLevel> {
        self.levels.get_mut(&price)
    }

    /// Appends the node at `key` to the level at its price, creating the
    /// level on first arrival.
    pub fn enqueue(&mut self, arena: &mut OrderArena, key: usize) {
        debug_assert_eq!(arena.node(key).order.side, self.side());
        let price = arena.node(key).order.price;
        self.levels
            .entry(price)
            .or_insert_with(|| PriceLevel::new(price))
            .push_back(arena, key);
    }

    /// Drops the level at `price` if its queue is empty.
    pub fn remove_level_if_empty(&mut self, price: u32) {
        if let Some(level) = self.levels.get(&price)
            && level.is_empty()
        {
            self.levels.remove(&price);
        }
    }

    /// Iterates levels in best-first order.
    pub fn iter_best_first(&self) -> Box<dyn Iterator<Item = &PriceLevel> + '_> {
        match self.side {
            Side::Buy => Box::new(self.levels.values().rev()),
            Side::Sell => Box::new(self.levels.values()),
        }
    }

    pub fn clear(&mut self) {
        self.levels.clear();
    }
}
