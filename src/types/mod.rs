//! Shared types for Binance API.

pub mod common;

pub use common::*;
