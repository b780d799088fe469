//! Binance REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde_json::Value;

use crate::auth::{
    CredentialsProvider, EnvCredentials, SystemClock, TimestampProvider, sign_query,
};
use crate::config::{ClientConfig, Endpoints};
use crate::error::BinanceError;
use crate::params::Params;
use crate::rest::decode::decode_body;
use crate::rest::endpoints::API_KEY_HEADER;

/// Security tier of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    Public,
    Private,
    Wallet,
}

impl Tier {
    fn as_str(self) -> &'static str {
        match self {
            Tier::Public => "public",
            Tier::Private => "private",
            Tier::Wallet => "wallet",
        }
    }
}

/// The Binance REST API client.
///
/// Owns one HTTP connection pool, configured once at build time and
/// released when the last clone of the client is dropped. Every call issues
/// exactly one request; nothing is retried.
///
/// # Example
///
/// ```rust,no_run
/// use binance_api_client::rest::BinanceRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a client for public endpoints only
///     let client = BinanceRestClient::new()?;
///
///     let time = client.server_time().await?;
///     println!("Server time: {time}");
///
///     Ok(())
/// }
/// ```
///
/// For private endpoints, provide credentials:
///
/// ```rust,no_run
/// use binance_api_client::rest::BinanceRestClient;
/// use binance_api_client::auth::StaticCredentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "api_secret"));
///     let client = BinanceRestClient::builder()
///         .credentials(credentials)
///         .build()?;
///
///     for balance in client.account_balances().await? {
///         println!("{}: {}", balance.asset, balance.free);
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BinanceRestClient {
    http_client: ClientWithMiddleware,
    endpoints: Endpoints,
    recv_window: u64,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    timestamp_provider: Arc<dyn TimestampProvider>,
}

impl BinanceRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints until credentials are set.
    pub fn new() -> Result<Self, BinanceError> {
        Self::builder().build()
    }

    /// Create a client from `BINANCE_*` environment variables.
    ///
    /// Credentials are attached when both `BINANCE_KEY` and `BINANCE_SECRET`
    /// are set; with neither set the client is public only, and with just one
    /// set this fails with [`BinanceError::Config`].
    pub fn from_env() -> Result<Self, BinanceError> {
        let mut builder = Self::builder().config(ClientConfig::from_env()?);
        match EnvCredentials::from_env() {
            Ok(credentials) => builder = builder.credentials(Arc::new(credentials)),
            Err(BinanceError::MissingCredentials) => {}
            Err(e) => return Err(e),
        }
        builder.build()
    }

    /// Create a new client builder.
    pub fn builder() -> BinanceRestClientBuilder {
        BinanceRestClientBuilder::new()
    }

    /// Replace the credentials used for signed requests.
    pub fn set_credentials(&mut self, credentials: Arc<dyn CredentialsProvider>) {
        self.credentials = Some(credentials);
    }

    /// Whether credentials are configured.
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// The base URLs this client talks to.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// The `recvWindow` attached to signed requests, in milliseconds.
    pub fn recv_window(&self) -> u64 {
        self.recv_window
    }

    /// Make an unsigned request against the general API.
    ///
    /// Parameters, if any, are sent as the query string.
    pub async fn public_request(
        &self,
        path: &str,
        params: Params,
        method: Method,
    ) -> Result<Value, BinanceError> {
        tracing::debug!(tier = Tier::Public.as_str(), %method, path, "dispatching request");

        let url = if params.is_empty() {
            format!("{}{}", self.endpoints.api, path)
        } else {
            format!("{}{}?{}", self.endpoints.api, path, params.to_query_string())
        };
        self.send(method, &url, None).await
    }

    /// Make a signed request against the general API.
    pub async fn private_request(
        &self,
        path: &str,
        params: Params,
        method: Method,
    ) -> Result<Value, BinanceError> {
        self.signed_request(Tier::Private, path, params, method).await
    }

    /// Make a signed request against the wallet API.
    pub async fn wallet_request(
        &self,
        path: &str,
        params: Params,
        method: Method,
    ) -> Result<Value, BinanceError> {
        self.signed_request(Tier::Wallet, path, params, method).await
    }

    async fn signed_request(
        &self,
        tier: Tier,
        path: &str,
        mut params: Params,
        method: Method,
    ) -> Result<Value, BinanceError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(BinanceError::MissingCredentials)?;
        let creds = credentials.get_credentials();

        tracing::debug!(tier = tier.as_str(), %method, path, "dispatching request");

        // timestamp and recvWindow always close the signed envelope.
        params.remove("timestamp");
        params.remove("recvWindow");
        params.set("timestamp", self.timestamp_provider.now_millis());
        params.set("recvWindow", self.recv_window);

        // The exact string that is signed is the one that is sent.
        let query = params.to_query_string();
        let signature = sign_query(creds, &query)?;

        let base = match tier {
            Tier::Wallet => &self.endpoints.wallet,
            _ => &self.endpoints.api,
        };
        // POST parameters travel in the URL too; the body stays empty.
        let url = format!("{base}{path}?{query}&signature={signature}");
        self.send(method, &url, Some(&creds.api_key)).await
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        api_key: Option<&str>,
    ) -> Result<Value, BinanceError> {
        let mut request = self.http_client.request(method, url);
        if let Some(api_key) = api_key {
            request = request.header(API_KEY_HEADER, api_key);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        decode_body(status, &body)
    }
}

impl std::fmt::Debug for BinanceRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinanceRestClient")
            .field("endpoints", &self.endpoints)
            .field("recv_window", &self.recv_window)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Builder for [`BinanceRestClient`].
pub struct BinanceRestClientBuilder {
    config: ClientConfig,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    timestamp_provider: Option<Arc<dyn TimestampProvider>>,
}

impl BinanceRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
            credentials: None,
            timestamp_provider: None,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the general API base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.endpoints.api = url.into();
        self
    }

    /// Set the wallet API base URL.
    pub fn wallet_url(mut self, url: impl Into<String>) -> Self {
        self.config.endpoints.wallet = url.into();
        self
    }

    /// Set the `recvWindow` in milliseconds.
    pub fn recv_window(mut self, millis: u64) -> Self {
        self.config.recv_window = millis;
        self
    }

    /// Enable or disable TLS certificate verification.
    pub fn verify_tls(mut self, verify: bool) -> Self {
        self.config.verify_tls = verify;
        self
    }

    /// Set the TCP connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set the total request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    /// Set the credentials provider for signed requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom timestamp provider.
    pub fn timestamp_provider(mut self, provider: Arc<dyn TimestampProvider>) -> Self {
        self.timestamp_provider = Some(provider);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<BinanceRestClient, BinanceError> {
        let ClientConfig {
            mut endpoints,
            recv_window,
            verify_tls,
            connect_timeout,
            timeout,
            user_agent,
        } = self.config;

        endpoints.validate()?;
        endpoints.api = endpoints.api.trim_end_matches('/').to_string();
        endpoints.wallet = endpoints.wallet.trim_end_matches('/').to_string();

        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = user_agent
            .unwrap_or_else(|| format!("binance-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("binance-api-client"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .danger_accept_invalid_certs(!verify_tls)
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .build()?;

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let timestamp_provider = self
            .timestamp_provider
            .unwrap_or_else(|| Arc::new(SystemClock));

        Ok(BinanceRestClient {
            http_client: client,
            endpoints,
            recv_window,
            credentials: self.credentials,
            timestamp_provider,
        })
    }
}

impl Default for BinanceRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
