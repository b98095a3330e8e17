use crate::book::error::BookError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The execution style of an incoming order.
///
/// `Stop` and `StopLimit` are reserved wire values: the enum carries them
/// so the contract stays stable, but submitting one is rejected with
/// [`BookError::InvalidParam`] — trigger logic is not part of this engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum OrderKind {
    /// Execute up to a limit price; any remainder may rest on the book.
    #[serde(rename(serialize = "LIMIT"))]
    #[serde(alias = "limit", alias = "Limit", alias = "LIMIT")]
    Limit = 0,

    /// Execute against whatever liquidity is available; never rests.
    #[serde(rename(serialize = "MARKET"))]
    #[serde(alias = "market", alias = "Market", alias = "MARKET")]
    Market = 1,

    /// Reserved: market order armed by a trigger price.
    #[serde(rename(serialize = "STOP"))]
    #[serde(alias = "stop", alias = "Stop", alias = "STOP")]
    Stop = 2,

    /// Reserved: limit order armed by a trigger price.
    #[serde(rename(serialize = "STOP_LIMIT"))]
    #[serde(alias = "stop_limit", alias = "StopLimit", alias = "STOP_LIMIT")]
    StopLimit = 3,
}

impl OrderKind {
    /// Returns true for the kinds this engine actually executes.
    #[inline]
    #[must_use]
    pub fn is_supported(&self) -> bool {
        matches!(self, OrderKind::Limit | OrderKind::Market)
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderKind::Limit => write!(f, "LIMIT"),
            OrderKind::Market => write!(f, "MARKET"),
            OrderKind::Stop => write!(f, "STOP"),
            OrderKind::StopLimit => write!(f, "STOP_LIMIT"),
        }
    }
}

impl FromStr for OrderKind {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LIMIT" => Ok(OrderKind::Limit),
            "MARKET" => Ok(OrderKind::Market),
            "STOP" => Ok(OrderKind::Stop),
            "STOP_LIMIT" => Ok(OrderKind::StopLimit),
            _ => Err(BookError::InvalidParam("order kind")),
        }
    }
}
