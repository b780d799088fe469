//! Example: Telling transport, decode and API errors apart.
//!
//! Run with: cargo run --example error_handling

use binance_api_client::BinanceError;
use binance_api_client::error::{ApiError, error_codes};

fn describe(err: &BinanceError) -> String {
    match err {
        BinanceError::Transport(cause) => format!("network problem, safe to report: {cause}"),
        BinanceError::Decode { message, .. } => format!("unexpected response: {message}"),
        BinanceError::Api(api) if api.is_timestamp_outside_recv_window() => {
            "clock drift: sync the local clock or raise recvWindow".to_string()
        }
        BinanceError::Api(api) => format!("rejected by Binance: {api}"),
        other => other.to_string(),
    }
}

fn main() {
    let api_error = ApiError::new(error_codes::INVALID_TIMESTAMP, "Timestamp outside recvWindow");
    println!("API error: {api_error}");
    println!("{}", describe(&BinanceError::Api(api_error)));

    let api_error = ApiError::new(error_codes::INVALID_SIGNATURE, "Signature for this request is not valid.");
    println!("Is invalid signature: {}", api_error.is_invalid_signature());
    println!("{}", describe(&BinanceError::Api(api_error)));
}
