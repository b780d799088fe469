//! Request timestamps for Binance signed endpoints.
//!
//! Every signed request carries a `timestamp` in milliseconds since the UNIX
//! epoch. Binance rejects it when it differs from server time by more than
//! `recvWindow`.

use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for providing request timestamps.
pub trait TimestampProvider: Send + Sync {
    /// Milliseconds since the UNIX epoch.
    fn now_millis(&self) -> u64;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimestampProvider for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Always returns the same timestamp. Useful for reproducible signatures.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimestamp(pub u64);

impl TimestampProvider for FixedTimestamp {
    fn now_millis(&self) -> u64 {
        self.0
    }
}
