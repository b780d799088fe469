use std::sync::Arc;
use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use binance_api_client::BinanceError;
use binance_api_client::auth::StaticCredentials;
use binance_api_client::error::error_codes;
use binance_api_client::rest::BinanceRestClient;

fn build_client(base_url: String) -> BinanceRestClient {
    BinanceRestClient::builder()
        .base_url(base_url)
        .credentials(Arc::new(StaticCredentials::new("test_key", "test_secret")))
        .build()
        .unwrap()
}

/// A local address nothing is listening on.
fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let client = build_client(closed_port_url());

    let err = client.server_time().await.unwrap_err();
    assert!(err.is_transport(), "unexpected error: {err:?}");
    assert!(!err.is_decode());

    let err = client.account_info().await.unwrap_err();
    assert!(err.is_transport(), "unexpected error: {err:?}");
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/time"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "serverTime": 1 }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = BinanceRestClient::builder()
        .base_url(server.uri())
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let err = client.server_time().await.unwrap_err();
    assert!(err.is_transport(), "unexpected error: {err:?}");
}

#[tokio::test]
async fn test_invalid_json_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/ticker/allPrices"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json{"))
        .mount(&server)
        .await;

    let client = build_client(server.uri());
    let err = client.tickers().await.unwrap_err();
    assert!(matches!(err, BinanceError::Decode { status: Some(200), .. }));
}

#[tokio::test]
async fn test_scalar_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/openOrders"))
        .respond_with(ResponseTemplate::new(200).set_body_string("12345"))
        .mount(&server)
        .await;

    let client = build_client(server.uri());
    let err = client.open_orders().await.unwrap_err();
    assert!(err.is_decode());
}

#[tokio::test]
async fn test_recv_window_error_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/account"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "code": -1021,
            "msg": "Timestamp outside recvWindow"
        })))
        .mount(&server)
        .await;

    let client = build_client(server.uri());
    let err = client.account_info().await.unwrap_err();
    match err {
        BinanceError::Api(api) => {
            assert_eq!(api.code, error_codes::INVALID_TIMESTAMP);
            assert_eq!(api.message, "Timestamp outside recvWindow");
            assert_eq!(api.status, Some(400));
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_api_error_with_success_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/ticker/price"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": -1121,
            "msg": "Invalid symbol."
        })))
        .mount(&server)
        .await;

    let client = build_client(server.uri());
    let err = client.ticker_price(Some("NOPE")).await.unwrap_err();
    assert_eq!(err.api_error().map(|e| e.code), Some(error_codes::BAD_SYMBOL));
}

#[tokio::test]
async fn test_rate_limit_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/order"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "code": -1015,
            "msg": "Too many new orders."
        })))
        .mount(&server)
        .await;

    let client = build_client(server.uri());
    let err = client
        .market_buy("BNBBTC", rust_decimal::Decimal::ONE)
        .await
        .unwrap_err();
    assert!(err.api_error().unwrap().is_rate_limited());
}

#[tokio::test]
async fn test_wallet_failure_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/depositAddress.html"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "msg": "Asset not supported"
        })))
        .mount(&server)
        .await;

    let client = BinanceRestClient::builder()
        .wallet_url(server.uri())
        .credentials(Arc::new(StaticCredentials::new("test_key", "test_secret")))
        .build()
        .unwrap();
    let err = client.deposit_address("XYZ").await.unwrap_err();
    assert_eq!(err.api_error().unwrap().message, "Asset not supported");
}

#[tokio::test]
async fn test_missing_balances_field_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "canTrade": true
        })))
        .mount(&server)
        .await;

    let client = build_client(server.uri());
    let err = client.account_balances().await.unwrap_err();
    assert!(err.is_decode());
}

#[tokio::test]
async fn test_missing_credentials_sends_nothing() {
    let server = MockServer::start().await;

    let client = BinanceRestClient::builder()
        .base_url(server.uri())
        .build()
        .unwrap();
    let err = client.open_orders().await.unwrap_err();
    assert!(matches!(err, BinanceError::MissingCredentials));
    assert!(server.received_requests().await.unwrap().is_empty());
}
