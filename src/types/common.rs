//! Common domain types for Binance API.

use serde::{Deserialize, Serialize};

/// Buy or sell side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl OrderSide {
    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Buy => "BUY",
            OrderSide::Sell => "SELL",
        }
    }
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order type for trading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Market order - execute immediately at best available price
    Market,
    /// Limit order - execute at specified price or better
    Limit,
    /// Stop-loss order - market order once the stop price is reached
    StopLoss,
    /// Stop-loss limit - limit order once the stop price is reached
    StopLossLimit,
    /// Take-profit order - market order once the profit target is reached
    TakeProfit,
    /// Take-profit limit - limit order once the profit target is reached
    TakeProfitLimit,
    /// Limit order rejected if it would immediately match as a taker
    LimitMaker,
}

impl OrderType {
    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Market => "MARKET",
            OrderType::Limit => "LIMIT",
            OrderType::StopLoss => "STOP_LOSS",
            OrderType::StopLossLimit => "STOP_LOSS_LIMIT",
            OrderType::TakeProfit => "TAKE_PROFIT",
            OrderType::TakeProfitLimit => "TAKE_PROFIT_LIMIT",
            OrderType::LimitMaker => "LIMIT_MAKER",
        }
    }

    /// Whether Binance expects a `price` for this order type.
    pub fn requires_price(&self) -> bool {
        matches!(
            self,
            OrderType::Limit
                | OrderType::StopLossLimit
                | OrderType::TakeProfitLimit
                | OrderType::LimitMaker
        )
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kline/candlestick interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KlineInterval {
    /// 1 minute
    #[serde(rename = "1m")]
    Minute1,
    /// 3 minutes
    #[serde(rename = "3m")]
    Minute3,
    /// 5 minutes
    #[serde(rename = "5m")]
    Minute5,
    /// 15 minutes
    #[serde(rename = "15m")]
    Minute15,
    /// 30 minutes
    #[serde(rename = "30m")]
    Minute30,
    /// 1 hour (default)
    #[default]
    #[serde(rename = "1h")]
    Hour1,
    /// 2 hours
    #[serde(rename = "2h")]
    Hour2,
    /// 4 hours
    #[serde(rename = "4h")]
    Hour4,
    /// 6 hours
    #[serde(rename = "6h")]
    Hour6,
    /// 8 hours
    #[serde(rename = "8h")]
    Hour8,
    /// 12 hours
    #[serde(rename = "12h")]
    Hour12,
    /// 1 day
    #[serde(rename = "1d")]
    Day1,
    /// 3 days
    #[serde(rename = "3d")]
    Day3,
    /// 1 week
    #[serde(rename = "1w")]
    Week1,
    /// 1 month
    #[serde(rename = "1M")]
    Month1,
}

impl KlineInterval {
    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            KlineInterval::Minute1 => "1m",
            KlineInterval::Minute3 => "3m",
            KlineInterval::Minute5 => "5m",
            KlineInterval::Minute15 => "15m",
            KlineInterval::Minute30 => "30m",
            KlineInterval::Hour1 => "1h",
            KlineInterval::Hour2 => "2h",
            KlineInterval::Hour4 => "4h",
            KlineInterval::Hour6 => "6h",
            KlineInterval::Hour8 => "8h",
            KlineInterval::Hour12 => "12h",
            KlineInterval::Day1 => "1d",
            KlineInterval::Day3 => "3d",
            KlineInterval::Week1 => "1w",
            KlineInterval::Month1 => "1M",
        }
    }
}

impl std::fmt::Display for KlineInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(OrderSide::Buy.to_string(), "BUY");
        assert_eq!(OrderType::StopLossLimit.to_string(), "STOP_LOSS_LIMIT");
        assert_eq!(KlineInterval::Month1.to_string(), "1M");
        assert_eq!(KlineInterval::default(), KlineInterval::Hour1);
    }

    #[test]
    fn test_serde_matches_display() {
        let json = serde_json::to_string(&OrderType::LimitMaker).unwrap();
        assert_eq!(json, "\"LIMIT_MAKER\"");
        let interval: KlineInterval = serde_json::from_str("\"15m\"").unwrap();
        assert_eq!(interval, KlineInterval::Minute15);
    }

    #[test]
    fn test_requires_price() {
        assert!(OrderType::Limit.requires_price());
        assert!(!OrderType::Market.requires_price());
        assert!(!OrderType::StopLoss.requires_price());
    }
}
