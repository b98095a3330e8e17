use crate::book::error::BookError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Specifies how long an order remains active before it is executed or
/// expires, and what happens to any unexecuted remainder.
///
/// `Day` and `Gtd` are reserved wire values; submitting them is rejected
/// with [`BookError::InvalidParam`] because this engine has no expiry
/// clock of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TimeInForce {
    /// Good 'Til Canceled - the remainder rests until filled or canceled.
    #[serde(rename(serialize = "GTC"))]
    #[serde(alias = "gtc", alias = "Gtc", alias = "GTC")]
    Gtc = 0,

    /// Immediate Or Cancel - execute what is immediately available, then
    /// discard the remainder.
    #[serde(rename(serialize = "IOC"))]
    #[serde(alias = "ioc", alias = "Ioc", alias = "IOC")]
    Ioc = 1,

    /// Fill Or Kill - execute the entire quantity immediately or reject
    /// the order without touching the book.
    #[serde(rename(serialize = "FOK"))]
    #[serde(alias = "fok", alias = "Fok", alias = "FOK")]
    Fok = 2,

    /// Reserved: good for the current trading day.
    #[serde(rename(serialize = "DAY"))]
    #[serde(alias = "day", alias = "Day", alias = "DAY")]
    Day = 3,

    /// Reserved: good until a host-supplied expiry time.
    #[serde(rename(serialize = "GTD"))]
    #[serde(alias = "gtd", alias = "Gtd", alias = "GTD")]
    Gtd = 4,
}

impl TimeInForce {
    /// Returns true if the unexecuted remainder must not rest on the book.
    #[inline]
    #[must_use]
    pub fn is_immediate(&self) -> bool {
        matches!(self, Self::Ioc | Self::Fok)
    }

    /// Returns true for the policies this engine actually executes.
    #[inline]
    #[must_use]
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Gtc | Self::Ioc | Self::Fok)
    }
}

impl Default for TimeInForce {
    fn default() -> Self {
        TimeInForce::Gtc
    }
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeInForce::Gtc => write!(f, "GTC"),
            TimeInForce::Ioc => write!(f, "IOC"),
            TimeInForce::Fok => write!(f, "FOK"),
            TimeInForce::Day => write!(f, "DAY"),
            TimeInForce::Gtd => write!(f, "GTD"),
        }
    }
}

impl FromStr for TimeInForce {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GTC" => Ok(TimeInForce::Gtc),
            "IOC" => Ok(TimeInForce::Ioc),
            "FOK" => Ok(TimeInForce::Fok),
            "DAY" => Ok(TimeInForce::Day),
            "GTD" => Ok(TimeInForce::Gtd),
            _ => Err(BookError::InvalidParam("time in force")),
        }
    }
}
