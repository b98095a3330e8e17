use crate::book::error::BookError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The side of an order: buying or selling.
///
/// Discriminant values are part of the wire contract (`BUY = 0`,
/// `SELL = 1`) and must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Side {
    /// Buy side (bids)
    #[serde(rename(serialize = "BUY"))]
    #[serde(alias = "buy", alias = "Buy", alias = "BUY")]
    Buy = 0,

    /// Sell side (asks)
    #[serde(rename(serialize = "SELL"))]
    #[serde(alias = "sell", alias = "Sell", alias = "SELL")]
    Sell = 1,
}

impl Side {
    /// Returns the opposite side.
    ///
    /// An aggressive order on this side matches against resting orders
    /// on the opposite side.
    #[inline]
    #[must_use]
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    /// Returns true when `price` on this side crosses a resting level at
    /// `level_price` on the opposite side.
    #[inline]
    #[must_use]
    pub fn crosses(&self, price: u32, level_price: u32) -> bool {
        match self {
            Side::Buy => price >= level_price,
            Side::Sell => price <= level_price,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

impl FromStr for Side {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BUY" => Ok(Side::Buy),
            "SELL" => Ok(Side::Sell),
            _ => Err(BookError::InvalidParam("side")),
        }
    }
}
