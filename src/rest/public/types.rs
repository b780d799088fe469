//! Types for public REST API endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::params::Params;
use crate::types::KlineInterval;

/// Default number of trades returned by the trade endpoints.
pub const DEFAULT_TRADES_LIMIT: u32 = 500;
/// Default order book depth.
pub const DEFAULT_DEPTH_LIMIT: u32 = 100;

/// Server time response.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerTime {
    /// Milliseconds since the UNIX epoch
    pub server_time: u64,
}

/// Latest price for a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TickerPrice {
    /// Trading pair (e.g. "BNBBTC")
    pub symbol: String,
    /// Last price
    pub price: Decimal,
}

/// Request for compressed/aggregate trades.
#[derive(Debug, Clone)]
pub struct AggTradesRequest {
    /// Trading pair
    pub symbol: String,
    /// Trade ID to fetch from (inclusive)
    pub from_id: Option<u64>,
    /// Start time in milliseconds (inclusive)
    pub start_time: Option<u64>,
    /// End time in milliseconds (inclusive)
    pub end_time: Option<u64>,
    /// Number of trades (default 500, max 1000)
    pub limit: u32,
}

impl AggTradesRequest {
    /// Create a request for a symbol with default limit.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            from_id: None,
            start_time: None,
            end_time: None,
            limit: DEFAULT_TRADES_LIMIT,
        }
    }

    /// Start from a trade ID.
    pub fn from_id(mut self, id: u64) -> Self {
        self.from_id = Some(id);
        self
    }

    /// Restrict to a time range, in milliseconds.
    pub fn time_range(mut self, start: u64, end: u64) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }

    /// Set the number of trades.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .with("symbol", &self.symbol)
            .with_opt("fromId", self.from_id)
            .with_opt("startTime", self.start_time)
            .with_opt("endTime", self.end_time)
            .with("limit", self.limit)
    }
}

/// Request for kline/candlestick bars.
#[derive(Debug, Clone)]
pub struct KlinesRequest {
    /// Trading pair
    pub symbol: String,
    /// Bar interval (default 1h)
    pub interval: KlineInterval,
    /// Start time in milliseconds
    pub start_time: Option<u64>,
    /// End time in milliseconds
    pub end_time: Option<u64>,
    /// Number of bars (default 500, max 1000)
    pub limit: u32,
}

impl KlinesRequest {
    /// Create a request for a symbol and interval.
    pub fn new(symbol: impl Into<String>, interval: KlineInterval) -> Self {
        Self {
            symbol: symbol.into(),
            interval,
            start_time: None,
            end_time: None,
            limit: DEFAULT_TRADES_LIMIT,
        }
    }

    /// Restrict to a time range, in milliseconds.
    pub fn time_range(mut self, start: u64, end: u64) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }

    /// Set the number of bars.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .with("symbol", &self.symbol)
            .with("interval", self.interval)
            .with_opt("startTime", self.start_time)
            .with_opt("endTime", self.end_time)
            .with("limit", self.limit)
    }
}
