use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Behavior flags attached to an incoming order.
    ///
    /// Bit values are part of the wire contract. `HIDDEN` and `AON` are
    /// reserved bits: carried for contract stability, rejected with
    /// `InvalidParam` when submitted.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct OrderFlags: u32 {
        /// The order must not execute on entry; if it would cross any
        /// resting quantity it is rejected with `WouldMatch`.
        const POST_ONLY = 1;
        /// Reserved: quantity invisible in market-data views.
        const HIDDEN = 2;
        /// Reserved: all-or-none execution.
        const AON = 4;
    }
}

impl OrderFlags {
    /// Returns true when no reserved bit is set.
    #[inline]
    #[must_use]
    pub fn is_supported(&self) -> bool {
        !self.intersects(OrderFlags::HIDDEN | OrderFlags::AON)
    }
}

impl Default for OrderFlags {
    fn default() -> Self {
        OrderFlags::empty()
    }
}
