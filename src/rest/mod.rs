//! Binance REST API client.
//!
//! Requests are dispatched in one of three tiers:
//! - public: unsigned, against the general API
//! - private: signed with `timestamp`, `recvWindow` and `signature`, against the general API
//! - wallet: signed the same way, against the wallet API
//!
//! # Trait-based API
//!
//! The [`BinanceClient`] trait abstracts all REST API operations, enabling
//! mock implementations and decorators.
//!
//! ```rust,ignore
//! use binance_api_client::rest::{BinanceClient, BinanceRestClient};
//!
//! async fn use_client<C: BinanceClient>(client: &C) -> binance_api_client::Result<()> {
//!     let time = client.server_time().await?;
//!     println!("Server time: {time}");
//!     Ok(())
//! }
//! ```

mod client;
mod decode;
mod endpoints;
pub mod private;
pub mod public;
mod traits;

pub use client::{BinanceRestClient, BinanceRestClientBuilder};
pub use endpoints::API_KEY_HEADER;
pub use traits::BinanceClient;
