//! Types for private REST API endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::params::Params;
use crate::types::{OrderSide, OrderType};

/// A new order, built per call and sent to `POST /v3/order`.
///
/// `price` is sent only when set. No check is made that the order type
/// needs one; Binance rejects a `LIMIT` order without a price itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    /// Trading pair (e.g. "BNBBTC")
    pub symbol: String,
    /// Buy or sell
    pub side: OrderSide,
    /// Order type
    pub order_type: OrderType,
    /// Amount of the base asset
    pub quantity: Decimal,
    /// Limit price
    pub price: Option<Decimal>,
}

impl OrderRequest {
    /// Create an order without a price.
    pub fn new(
        symbol: impl Into<String>,
        side: OrderSide,
        order_type: OrderType,
        quantity: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type,
            quantity,
            price: None,
        }
    }

    /// Create a market order.
    pub fn market(symbol: impl Into<String>, side: OrderSide, quantity: Decimal) -> Self {
        Self::new(symbol, side, OrderType::Market, quantity)
    }

    /// Create a limit order.
    pub fn limit(
        symbol: impl Into<String>,
        side: OrderSide,
        quantity: Decimal,
        price: Decimal,
    ) -> Self {
        Self::new(symbol, side, OrderType::Limit, quantity).with_price(price)
    }

    /// Set the limit price.
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Parameters in the order Binance documents them.
    pub fn to_params(&self) -> Params {
        Params::new()
            .with("symbol", &self.symbol)
            .with("side", self.side)
            .with("type", self.order_type)
            .with("quantity", self.quantity)
            .with_opt("price", self.price)
    }
}

/// Balance of a single asset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Balance {
    /// Asset name (e.g. "BTC")
    pub asset: String,
    /// Available amount
    pub free: Decimal,
    /// Amount locked in open orders
    pub locked: Decimal,
}

impl Balance {
    /// Free plus locked.
    pub fn total(&self) -> Decimal {
        self.free + self.locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_market_order_has_no_price() {
        let order = OrderRequest::market("ETHBTC", OrderSide::Sell, Decimal::new(2, 0));
        let params = order.to_params();
        assert!(!params.contains_key("price"));
        assert_eq!(
            params.to_query_string(),
            "symbol=ETHBTC&side=SELL&type=MARKET&quantity=2"
        );
    }

    #[test]
    fn test_limit_order_has_price() {
        let order = OrderRequest::limit(
            "BNBBTC",
            OrderSide::Buy,
            Decimal::from_str("1.5").unwrap(),
            Decimal::from_str("0.002").unwrap(),
        );
        assert_eq!(
            order.to_params().to_query_string(),
            "symbol=BNBBTC&side=BUY&type=LIMIT&quantity=1.5&price=0.002"
        );
    }

    #[test]
    fn test_limit_without_price_passes_through() {
        let order = OrderRequest::new("BNBBTC", OrderSide::Buy, OrderType::Limit, Decimal::ONE);
        assert!(!order.to_params().contains_key("price"));
    }

    #[test]
    fn test_balance_deserialize() {
        let balance: Balance = serde_json::from_str(
            r#"{"asset":"BTC","free":"4723846.89208129","locked":"0.00000000"}"#,
        )
        .unwrap();
        assert_eq!(balance.asset, "BTC");
        assert_eq!(balance.total(), Decimal::from_str("4723846.89208129").unwrap());
    }
}
