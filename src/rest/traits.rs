//! Trait definition for the Binance REST API client.
//!
//! This module provides the `BinanceClient` trait which abstracts all REST API operations.
//! This enables:
//! - Mock implementations for testing
//! - Decorator pattern (e.g., logging or throttling wrapper)
//! - Alternative implementations

use std::future::Future;

use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::BinanceError;
use crate::rest::BinanceRestClient;
use crate::rest::private::{Balance, OrderRequest};
use crate::rest::public::{AggTradesRequest, KlinesRequest, TickerPrice};

/// Trait defining all Binance REST API operations.
///
/// All methods are async and return `Result<T, BinanceError>`.
pub trait BinanceClient: Send + Sync {
    // ========== Public Endpoints ==========

    /// Get the server time in milliseconds.
    fn server_time(&self) -> impl Future<Output = Result<u64, BinanceError>> + Send;

    /// Get exchange trading rules and symbol information.
    fn exchange_info(&self) -> impl Future<Output = Result<Value, BinanceError>> + Send;

    /// Get symbol information.
    fn markets(&self) -> impl Future<Output = Result<Value, BinanceError>> + Send;

    /// Get the latest price of every symbol.
    fn tickers(&self) -> impl Future<Output = Result<Value, BinanceError>> + Send;

    /// Get the order book for a symbol.
    fn order_book(
        &self,
        symbol: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Value, BinanceError>> + Send;

    /// Get recent public trades for a symbol.
    fn public_trades(
        &self,
        symbol: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Value, BinanceError>> + Send;

    /// Get compressed, aggregate trades.
    fn agg_trades(
        &self,
        request: &AggTradesRequest,
    ) -> impl Future<Output = Result<Value, BinanceError>> + Send;

    /// Get kline/candlestick bars.
    fn candlesticks(
        &self,
        request: &KlinesRequest,
    ) -> impl Future<Output = Result<Value, BinanceError>> + Send;

    /// Get the current average price for a symbol.
    fn avg_price(&self, symbol: &str) -> impl Future<Output = Result<Value, BinanceError>> + Send;

    /// Get 24 hour price change statistics.
    fn ticker_change(
        &self,
        symbol: Option<&str>,
    ) -> impl Future<Output = Result<Value, BinanceError>> + Send;

    /// Get the latest price for one or all symbols.
    fn ticker_price(
        &self,
        symbol: Option<&str>,
    ) -> impl Future<Output = Result<Value, BinanceError>> + Send;

    /// Get the latest price for one symbol, typed.
    fn price(&self, symbol: &str) -> impl Future<Output = Result<TickerPrice, BinanceError>> + Send;

    // ========== Private Endpoints - Account ==========

    /// Get account balances.
    fn account_balances(&self) -> impl Future<Output = Result<Vec<Balance>, BinanceError>> + Send;

    /// Get the full account information.
    fn account_info(&self) -> impl Future<Output = Result<Value, BinanceError>> + Send;

    /// Get this account's trades for a symbol.
    fn recent_trades(
        &self,
        symbol: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Value, BinanceError>> + Send;

    /// Get all open orders.
    fn open_orders(&self) -> impl Future<Output = Result<Value, BinanceError>> + Send;

    /// Get all orders for a symbol.
    fn all_orders(&self, symbol: &str) -> impl Future<Output = Result<Value, BinanceError>> + Send;

    // ========== Private Endpoints - Trading ==========

    /// Place an order.
    fn place_order(
        &self,
        order: &OrderRequest,
    ) -> impl Future<Output = Result<Value, BinanceError>> + Send;

    /// Buy at market price.
    fn market_buy(
        &self,
        symbol: &str,
        quantity: Decimal,
    ) -> impl Future<Output = Result<Value, BinanceError>> + Send;

    /// Sell at market price.
    fn market_sell(
        &self,
        symbol: &str,
        quantity: Decimal,
    ) -> impl Future<Output = Result<Value, BinanceError>> + Send;

    /// Buy at a limit price.
    fn limit_buy(
        &self,
        symbol: &str,
        quantity: Decimal,
        price: Decimal,
    ) -> impl Future<Output = Result<Value, BinanceError>> + Send;

    /// Sell at a limit price.
    fn limit_sell(
        &self,
        symbol: &str,
        quantity: Decimal,
        price: Decimal,
    ) -> impl Future<Output = Result<Value, BinanceError>> + Send;

    // ========== Wallet Endpoints ==========

    /// Get the deposit address for an asset.
    fn deposit_address(
        &self,
        asset: &str,
    ) -> impl Future<Output = Result<Value, BinanceError>> + Send;
}

impl BinanceClient for BinanceRestClient {
    async fn server_time(&self) -> Result<u64, BinanceError> {
        BinanceRestClient::server_time(self).await
    }

    async fn exchange_info(&self) -> Result<Value, BinanceError> {
        BinanceRestClient::exchange_info(self).await
    }

    async fn markets(&self) -> Result<Value, BinanceError> {
        BinanceRestClient::markets(self).await
    }

    async fn tickers(&self) -> Result<Value, BinanceError> {
        BinanceRestClient::tickers(self).await
    }

    async fn order_book(&self, symbol: &str, limit: u32) -> Result<Value, BinanceError> {
        BinanceRestClient::order_book(self, symbol, limit).await
    }

    async fn public_trades(&self, symbol: &str, limit: u32) -> Result<Value, BinanceError> {
        BinanceRestClient::public_trades(self, symbol, limit).await
    }

    async fn agg_trades(&self, request: &AggTradesRequest) -> Result<Value, BinanceError> {
        BinanceRestClient::agg_trades(self, request).await
    }

    async fn candlesticks(&self, request: &KlinesRequest) -> Result<Value, BinanceError> {
        BinanceRestClient::candlesticks(self, request).await
    }

    async fn avg_price(&self, symbol: &str) -> Result<Value, BinanceError> {
        BinanceRestClient::avg_price(self, symbol).await
    }

    async fn ticker_change(&self, symbol: Option<&str>) -> Result<Value, BinanceError> {
        BinanceRestClient::ticker_change(self, symbol).await
    }

    async fn ticker_price(&self, symbol: Option<&str>) -> Result<Value, BinanceError> {
        BinanceRestClient::ticker_price(self, symbol).await
    }

    async fn price(&self, symbol: &str) -> Result<TickerPrice, BinanceError> {
        BinanceRestClient::price(self, symbol).await
    }

    async fn account_balances(&self) -> Result<Vec<Balance>, BinanceError> {
        BinanceRestClient::account_balances(self).await
    }

    async fn account_info(&self) -> Result<Value, BinanceError> {
        BinanceRestClient::account_info(self).await
    }

    async fn recent_trades(&self, symbol: &str, limit: u32) -> Result<Value, BinanceError> {
        BinanceRestClient::recent_trades(self, symbol, limit).await
    }

    async fn open_orders(&self) -> Result<Value, BinanceError> {
        BinanceRestClient::open_orders(self).await
    }

    async fn all_orders(&self, symbol: &str) -> Result<Value, BinanceError> {
        BinanceRestClient::all_orders(self, symbol).await
    }

    async fn place_order(&self, order: &OrderRequest) -> Result<Value, BinanceError> {
        BinanceRestClient::place_order(self, order).await
    }

    async fn market_buy(&self, symbol: &str, quantity: Decimal) -> Result<Value, BinanceError> {
        BinanceRestClient::market_buy(self, symbol, quantity).await
    }

    async fn market_sell(&self, symbol: &str, quantity: Decimal) -> Result<Value, BinanceError> {
        BinanceRestClient::market_sell(self, symbol, quantity).await
    }

    async fn limit_buy(
        &self,
        symbol: &str,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<Value, BinanceError> {
        BinanceRestClient::limit_buy(self, symbol, quantity, price).await
    }

    async fn limit_sell(
        &self,
        symbol: &str,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<Value, BinanceError> {
        BinanceRestClient::limit_sell(self, symbol, quantity, price).await
    }

    async fn deposit_address(&self, asset: &str) -> Result<Value, BinanceError> {
        BinanceRestClient::deposit_address(self, asset).await
    }
}
