//! Example: Account balances and order placement.
//!
//! Reads `BINANCE_KEY` and `BINANCE_SECRET` (a `.env` file works too).
//!
//! Run with: cargo run --example private_trading

use std::str::FromStr;

use binance_api_client::rest::BinanceRestClient;
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = BinanceRestClient::from_env()?;
    if !client.has_credentials() {
        eprintln!("Set BINANCE_KEY and BINANCE_SECRET to run this example");
        return Ok(());
    }

    for balance in client.account_balances().await? {
        if !balance.total().is_zero() {
            println!("{}: {} free, {} locked", balance.asset, balance.free, balance.locked);
        }
    }

    // A limit buy far below market so it rests on the book.
    let order = client
        .limit_buy(
            "BNBBTC",
            Decimal::from_str("1")?,
            Decimal::from_str("0.00000100")?,
        )
        .await?;
    println!("Placed order: {order}");

    println!("Open orders: {}", client.open_orders().await?);

    Ok(())
}
