//! Example: Fetching public market data.
//!
//! Run with: cargo run --example public_data

use binance_api_client::KlineInterval;
use binance_api_client::rest::BinanceRestClient;
use binance_api_client::rest::public::{DEFAULT_DEPTH_LIMIT, KlinesRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = BinanceRestClient::new()?;

    let time = client.server_time().await?;
    println!("Server time: {time}");

    let price = client.price("BNBBTC").await?;
    println!("{} last price: {}", price.symbol, price.price);

    let book = client.order_book("BNBBTC", DEFAULT_DEPTH_LIMIT).await?;
    println!("Best bid: {}", book["bids"][0]);

    let klines = client
        .candlesticks(&KlinesRequest::new("BNBBTC", KlineInterval::Hour1).limit(3))
        .await?;
    println!("Last 3 hourly candles: {klines}");

    Ok(())
}
