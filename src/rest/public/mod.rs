//! Public REST API endpoints (no authentication required).
//!
//! Responses are returned as decoded JSON unless a typed projection is
//! noted; callers index into them the way the Binance docs describe.

mod types;

pub use types::*;

use reqwest::Method;
use serde_json::Value;

use crate::error::BinanceError;
use crate::params::Params;
use crate::rest::BinanceRestClient;
use crate::rest::decode::{from_value, take_field};
use crate::rest::endpoints::public;

impl BinanceRestClient {
    /// Test connectivity and get the server time in milliseconds.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use binance_api_client::rest::BinanceRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = BinanceRestClient::new()?;
    ///     let time = client.server_time().await?;
    ///     println!("Server time: {time}");
    ///     Ok(())
    /// }
    /// ```
    pub async fn server_time(&self) -> Result<u64, BinanceError> {
        let value = self.public_get(public::TIME, Params::new()).await?;
        from_value::<ServerTime>(value).map(|t| t.server_time)
    }

    /// Current exchange trading rules and symbol information.
    pub async fn exchange_info(&self) -> Result<Value, BinanceError> {
        self.public_get(public::EXCHANGE_INFO, Params::new()).await
    }

    /// Symbol information, the `symbols` array of [`exchange_info`](Self::exchange_info).
    pub async fn markets(&self) -> Result<Value, BinanceError> {
        let info = self.exchange_info().await?;
        take_field(info, "symbols")
    }

    /// Latest price for every symbol.
    pub async fn tickers(&self) -> Result<Value, BinanceError> {
        self.public_get(public::ALL_PRICES, Params::new()).await
    }

    /// Order book for a symbol.
    ///
    /// # Arguments
    ///
    /// * `limit` - Depth; valid values are 5, 10, 20, 50, 100, 500 and 1000.
    ///   See [`DEFAULT_DEPTH_LIMIT`].
    pub async fn order_book(&self, symbol: &str, limit: u32) -> Result<Value, BinanceError> {
        let params = Params::new().with("symbol", symbol).with("limit", limit);
        self.public_get(public::DEPTH, params).await
    }

    /// Recent public trades for a symbol (up to 1000).
    pub async fn public_trades(&self, symbol: &str, limit: u32) -> Result<Value, BinanceError> {
        let params = Params::new().with("symbol", symbol).with("limit", limit);
        self.public_get(public::TRADES, params).await
    }

    /// Compressed, aggregate trades.
    ///
    /// Trades that fill at the same time, from the same order, at the same
    /// price have their quantity aggregated.
    pub async fn agg_trades(&self, request: &AggTradesRequest) -> Result<Value, BinanceError> {
        self.public_get(public::AGG_TRADES, request.to_params()).await
    }

    /// Kline/candlestick bars, identified by their open time.
    pub async fn candlesticks(&self, request: &KlinesRequest) -> Result<Value, BinanceError> {
        self.public_get(public::KLINES, request.to_params()).await
    }

    /// Current average price for a symbol.
    pub async fn avg_price(&self, symbol: &str) -> Result<Value, BinanceError> {
        let params = Params::new().with("symbol", symbol);
        self.public_get(public::AVG_PRICE, params).await
    }

    /// 24 hour rolling window price change statistics.
    ///
    /// Without a symbol, statistics for every symbol are returned, at a much
    /// higher request weight.
    pub async fn ticker_change(&self, symbol: Option<&str>) -> Result<Value, BinanceError> {
        let params = Params::new().with_opt("symbol", symbol);
        self.public_get(public::TICKER_24HR, params).await
    }

    /// Latest price for a symbol, or for all symbols when `symbol` is `None`.
    pub async fn ticker_price(&self, symbol: Option<&str>) -> Result<Value, BinanceError> {
        let params = Params::new().with_opt("symbol", symbol);
        self.public_get(public::TICKER_PRICE, params).await
    }

    /// Latest price for one symbol, typed.
    pub async fn price(&self, symbol: &str) -> Result<TickerPrice, BinanceError> {
        from_value(self.ticker_price(Some(symbol)).await?)
    }

    async fn public_get(&self, path: &str, params: Params) -> Result<Value, BinanceError> {
        self.public_request(path, params, Method::GET).await
    }
}
