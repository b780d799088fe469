//! # Binance Client
//!
//! An async Rust client library for the Binance exchange REST API.
//!
//! ## Features
//!
//! - Market data, account and trade history, and order placement
//! - HMAC-SHA256 request signing over the exact transmitted query string
//! - Explicit classification of transport, decode and API errors
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use binance_api_client::rest::BinanceRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BinanceRestClient::new()?;
//!     let time = client.server_time().await?;
//!     println!("Server time: {time}");
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod params;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::BinanceError;
pub use params::Params;
pub use types::{KlineInterval, OrderSide, OrderType};

/// Result type alias using BinanceError
pub type Result<T> = std::result::Result<T, BinanceError>;
