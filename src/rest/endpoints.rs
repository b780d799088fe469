//! Binance REST API endpoint paths.
//!
//! Paths are relative to the base URL of their namespace
//! (see [`crate::config::Endpoints`]).

/// Name of the header carrying the API key on signed requests.
pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// Public endpoints (security type `NONE`).
pub mod public {
    /// Test connectivity and get the server time.
    pub const TIME: &str = "/v1/time";
    /// Exchange trading rules and symbol information.
    pub const EXCHANGE_INFO: &str = "/v1/exchangeInfo";
    /// Latest price for all symbols.
    pub const ALL_PRICES: &str = "/v1/ticker/allPrices";
    /// Order book.
    pub const DEPTH: &str = "/v1/depth";
    /// Recent trades.
    pub const TRADES: &str = "/v1/trades";
    /// Compressed/aggregate trades.
    pub const AGG_TRADES: &str = "/v1/aggTrades";
    /// Kline/candlestick bars.
    pub const KLINES: &str = "/v1/klines";
    /// Current average price.
    pub const AVG_PRICE: &str = "/v3/avgPrice";
    /// 24hr ticker price change statistics.
    pub const TICKER_24HR: &str = "/v1/ticker/24hr";
    /// Symbol price ticker.
    pub const TICKER_PRICE: &str = "/v3/ticker/price";
}

/// Private endpoints (security types `TRADE` and `USER_DATA`).
pub mod private {
    /// Account information and balances.
    pub const ACCOUNT: &str = "/v3/account";
    /// Trades for a specific account and symbol.
    pub const MY_TRADES: &str = "/v3/myTrades";
    /// Open orders.
    pub const OPEN_ORDERS: &str = "/v3/openOrders";
    /// All orders for a symbol.
    pub const ALL_ORDERS: &str = "/v3/allOrders";
    /// Place a new order.
    pub const ORDER: &str = "/v3/order";
}

/// Wallet endpoints, relative to the wallet base URL.
pub mod wallet {
    /// Deposit address for an asset.
    pub const DEPOSIT_ADDRESS: &str = "/v3/depositAddress.html";
}
