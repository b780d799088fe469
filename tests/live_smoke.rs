use binance_api_client::rest::BinanceRestClient;

fn live_tests_enabled() -> bool {
    std::env::var("BINANCE_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_public_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let client = BinanceRestClient::from_env()?;
    let time = client.server_time().await?;
    assert!(time > 0);

    Ok(())
}

#[tokio::test]
#[ignore]
async fn live_private_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let client = BinanceRestClient::from_env()?;
    if !client.has_credentials() {
        return Ok(());
    }

    let _balances = client.account_balances().await?;
    let _orders = client.open_orders().await?;

    Ok(())
}
