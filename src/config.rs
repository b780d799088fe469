//! Client configuration: base URLs, `recvWindow` and HTTP transport settings.

use std::time::Duration;

use crate::error::BinanceError;

/// Base URL for the general Binance REST API.
pub const BINANCE_API_URL: &str = "https://api.binance.com/api";
/// Base URL for the Binance wallet API.
pub const BINANCE_WALLET_URL: &str = "https://api.binance.com/wapi";

/// Default `recvWindow` in milliseconds.
pub const DEFAULT_RECV_WINDOW: u64 = 5000;
/// Default TCP connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(20);
/// Default total request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Environment variables read by [`ClientConfig::from_env`].
pub mod env_vars {
    /// General API base URL.
    pub const API_URL: &str = "BINANCE_API_URL";
    /// Wallet API base URL.
    pub const WALLET_URL: &str = "BINANCE_WAPI_URL";
    /// `recvWindow` in milliseconds.
    pub const RECV_WINDOW: &str = "BINANCE_TIMING";
    /// Whether to verify TLS certificates.
    pub const VERIFY_TLS: &str = "BINANCE_SSL_VERIFYPEER";
    /// Connect timeout in seconds.
    pub const CONNECT_TIMEOUT: &str = "BINANCE_SETTINGS_CONNECTIONTIMEOUT";
    /// Total request timeout in seconds.
    pub const TIMEOUT: &str = "BINANCE_SETTINGS_TIMEOUT";
}

/// The two REST namespaces a client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Base URL for public and private calls (e.g. `https://api.binance.com/api`)
    pub api: String,
    /// Base URL for wallet calls (e.g. `https://api.binance.com/wapi`)
    pub wallet: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            api: BINANCE_API_URL.to_string(),
            wallet: BINANCE_WALLET_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Check that both base URLs parse.
    pub fn validate(&self) -> Result<(), BinanceError> {
        url::Url::parse(&self.api)?;
        url::Url::parse(&self.wallet)?;
        Ok(())
    }
}

/// Settings applied once when a client is built.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URLs
    pub endpoints: Endpoints,
    /// Server-side tolerance for clock drift, in milliseconds
    pub recv_window: u64,
    /// Verify TLS certificates
    pub verify_tls: bool,
    /// TCP connect timeout
    pub connect_timeout: Duration,
    /// Total request timeout
    pub timeout: Duration,
    /// User agent header; defaults to `binance-api-client/<version>`
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            recv_window: DEFAULT_RECV_WINDOW,
            verify_tls: true,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Build a configuration from `BINANCE_*` environment variables.
    ///
    /// Unset variables keep their defaults. Set but unparsable ones are an error.
    pub fn from_env() -> Result<Self, BinanceError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, BinanceError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(env_vars::API_URL) {
            config.endpoints.api = url;
        }
        if let Some(url) = lookup(env_vars::WALLET_URL) {
            config.endpoints.wallet = url;
        }
        if let Some(value) = lookup(env_vars::RECV_WINDOW) {
            config.recv_window = parse_number(env_vars::RECV_WINDOW, &value)?;
        }
        if let Some(value) = lookup(env_vars::VERIFY_TLS) {
            config.verify_tls = parse_flag(env_vars::VERIFY_TLS, &value)?;
        }
        if let Some(value) = lookup(env_vars::CONNECT_TIMEOUT) {
            config.connect_timeout =
                Duration::from_secs(parse_number(env_vars::CONNECT_TIMEOUT, &value)?);
        }
        if let Some(value) = lookup(env_vars::TIMEOUT) {
            config.timeout = Duration::from_secs(parse_number(env_vars::TIMEOUT, &value)?);
        }

        config.endpoints.validate()?;
        Ok(config)
    }
}

fn parse_number(name: &str, value: &str) -> Result<u64, BinanceError> {
    value
        .trim()
        .parse()
        .map_err(|e| BinanceError::Config(format!("{name}={value:?}: {e}")))
}

fn parse_flag(name: &str, value: &str) -> Result<bool, BinanceError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(BinanceError::Config(format!(
            "{name}={value:?}: expected a boolean"
        ))),
    }
}
