//! Private REST API endpoints (authentication required).
//!
//! These endpoints require API credentials to be configured on the client.
//! Each call is one signed request; there is no order state kept locally.

mod types;

pub use types::*;

use reqwest::Method;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::BinanceError;
use crate::params::Params;
use crate::rest::BinanceRestClient;
use crate::rest::decode::{from_value, take_field};
use crate::rest::endpoints::{private, wallet};
use crate::types::OrderSide;

impl BinanceRestClient {
    /// Get account balances.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use binance_api_client::rest::BinanceRestClient;
    /// use binance_api_client::auth::StaticCredentials;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(StaticCredentials::new("key", "secret"));
    ///     let client = BinanceRestClient::builder().credentials(credentials).build()?;
    ///
    ///     for balance in client.account_balances().await? {
    ///         println!("{}: {} (locked {})", balance.asset, balance.free, balance.locked);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn account_balances(&self) -> Result<Vec<Balance>, BinanceError> {
        let account = self.account_info().await?;
        from_value(take_field(account, "balances")?)
    }

    /// Get the full account information.
    pub async fn account_info(&self) -> Result<Value, BinanceError> {
        self.private_get(private::ACCOUNT, Params::new()).await
    }

    /// Get this account's trades for a symbol.
    pub async fn recent_trades(&self, symbol: &str, limit: u32) -> Result<Value, BinanceError> {
        let params = Params::new().with("symbol", symbol).with("limit", limit);
        self.private_get(private::MY_TRADES, params).await
    }

    /// Get all open orders.
    pub async fn open_orders(&self) -> Result<Value, BinanceError> {
        self.private_get(private::OPEN_ORDERS, Params::new()).await
    }

    /// Get all orders for a symbol: active, canceled or filled.
    pub async fn all_orders(&self, symbol: &str) -> Result<Value, BinanceError> {
        let params = Params::new().with("symbol", symbol);
        self.private_get(private::ALL_ORDERS, params).await
    }

    // ========== Trading ==========

    /// Place an order.
    pub async fn place_order(&self, order: &OrderRequest) -> Result<Value, BinanceError> {
        tracing::info!(
            symbol = %order.symbol,
            side = %order.side,
            order_type = %order.order_type,
            quantity = %order.quantity,
            "placing order"
        );
        self.private_request(private::ORDER, order.to_params(), Method::POST)
            .await
    }

    /// Buy at market price.
    pub async fn market_buy(&self, symbol: &str, quantity: Decimal) -> Result<Value, BinanceError> {
        self.place_order(&OrderRequest::market(symbol, OrderSide::Buy, quantity))
            .await
    }

    /// Sell at market price.
    pub async fn market_sell(
        &self,
        symbol: &str,
        quantity: Decimal,
    ) -> Result<Value, BinanceError> {
        self.place_order(&OrderRequest::market(symbol, OrderSide::Sell, quantity))
            .await
    }

    /// Buy at a limit price.
    pub async fn limit_buy(
        &self,
        symbol: &str,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<Value, BinanceError> {
        self.place_order(&OrderRequest::limit(symbol, OrderSide::Buy, quantity, price))
            .await
    }

    /// Sell at a limit price.
    pub async fn limit_sell(
        &self,
        symbol: &str,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<Value, BinanceError> {
        self.place_order(&OrderRequest::limit(symbol, OrderSide::Sell, quantity, price))
            .await
    }

    // ========== Wallet ==========

    /// Get the deposit address for an asset.
    pub async fn deposit_address(&self, asset: &str) -> Result<Value, BinanceError> {
        let params = Params::new().with("asset", asset);
        self.wallet_request(wallet::DEPOSIT_ADDRESS, params, Method::GET)
            .await
    }

    async fn private_get(&self, path: &str, params: Params) -> Result<Value, BinanceError> {
        self.private_request(path, params, Method::GET).await
    }
}
