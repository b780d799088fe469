//! Error types for the Binance client library.

use thiserror::Error;

/// The main error type for all Binance client operations.
///
/// Every call either returns one decoded value or exactly one of these;
/// nothing is retried or recovered locally.
#[derive(Error, Debug)]
pub enum BinanceError {
    /// The HTTP layer failed (connection refused, TLS, timeout, body read).
    #[error("HTTP transport failed: {0}")]
    Transport(#[from] reqwest_middleware::Error),

    /// The response body is not JSON, or not an array/object at the top level.
    #[error("Failed to decode response: {message}")]
    Decode {
        /// What went wrong while decoding
        message: String,
        /// HTTP status code of the response, when one was received
        status: Option<u16>,
    },

    /// Binance answered with a business-level error payload.
    #[error("Binance API error: {0}")]
    Api(ApiError),

    /// Authentication error
    #[error("Authentication error: {0}")]
    Auth(String),

    /// A private or wallet endpoint was called without credentials.
    #[error("Missing credentials: API key and secret required for signed endpoints")]
    MissingCredentials,

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for BinanceError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(reqwest_middleware::Error::Reqwest(err))
    }
}

impl BinanceError {
    pub(crate) fn decode(message: impl Into<String>, status: Option<u16>) -> Self {
        Self::Decode {
            message: message.into(),
            status,
        }
    }

    /// Whether this error happened at the HTTP layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Whether the response could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Whether Binance reported a business-level error.
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// The API error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// Binance API error codes and messages.
///
/// Binance reports errors in the response body as `{"code": -1021, "msg": "..."}`.
/// The wallet API uses `{"success": false, "msg": "..."}` instead, which has no code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The numeric error code (0 when the payload carried none)
    pub code: i64,
    /// Human-readable error message
    pub message: String,
    /// HTTP status of the response carrying the error
    pub status: Option<u16>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl ApiError {
    /// Create a new API error from code and message.
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            status: None,
        }
    }

    /// Attach the HTTP status of the response.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Check if the request timestamp fell outside `recvWindow`.
    pub fn is_timestamp_outside_recv_window(&self) -> bool {
        self.code == error_codes::INVALID_TIMESTAMP
    }

    /// Check if the signature was rejected.
    pub fn is_invalid_signature(&self) -> bool {
        self.code == error_codes::INVALID_SIGNATURE
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limited(&self) -> bool {
        self.code == error_codes::TOO_MANY_REQUESTS || matches!(self.status, Some(418 | 429))
    }

    /// Check if the referenced order does not exist.
    pub fn is_unknown_order(&self) -> bool {
        self.code == error_codes::CANCEL_REJECTED || self.code == error_codes::NO_SUCH_ORDER
    }

    /// Check if a new order was rejected (-2010).
    ///
    /// Binance reports an insufficient balance with this code; the `msg`
    /// text varies between API versions and is not inspected.
    pub fn is_insufficient_balance(&self) -> bool {
        self.code == error_codes::NEW_ORDER_REJECTED
    }
}

/// Known Binance error codes for pattern matching.
pub mod error_codes {
    /// An unknown error occurred while processing the request.
    pub const UNKNOWN: i64 = -1000;
    /// Internal error; unable to process the request.
    pub const DISCONNECTED: i64 = -1001;
    /// Not authorized to execute this request.
    pub const UNAUTHORIZED: i64 = -1002;
    /// Too many requests queued or sent.
    pub const TOO_MANY_REQUESTS: i64 = -1003;
    /// Timeout waiting for response from backend server.
    pub const TIMEOUT: i64 = -1007;
    /// Timestamp for this request is outside of the recvWindow.
    pub const INVALID_TIMESTAMP: i64 = -1021;
    /// Signature for this request is not valid.
    pub const INVALID_SIGNATURE: i64 = -1022;
    /// A mandatory parameter was not sent, was empty/null, or malformed.
    pub const MANDATORY_PARAM_EMPTY_OR_MALFORMED: i64 = -1102;
    /// Invalid symbol.
    pub const BAD_SYMBOL: i64 = -1121;
    /// Order was rejected.
    pub const NEW_ORDER_REJECTED: i64 = -2010;
    /// Cancel was rejected.
    pub const CANCEL_REJECTED: i64 = -2011;
    /// Order does not exist.
    pub const NO_SUCH_ORDER: i64 = -2013;
    /// API-key format invalid.
    pub const BAD_API_KEY_FMT: i64 = -2014;
    /// Invalid API-key, IP, or permissions for action.
    pub const REJECTED_MBX_KEY: i64 = -2015;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let error = ApiError::new(-1021, "Timestamp for this request is outside of the recvWindow.");
        assert_eq!(
            error.to_string(),
            "-1021: Timestamp for this request is outside of the recvWindow."
        );
        assert!(error.is_timestamp_outside_recv_window());
        assert!(!error.is_invalid_signature());
    }

    #[test]
    fn test_rate_limit_from_status() {
        let error = ApiError::new(-1015, "Too many new orders").with_status(429);
        assert!(error.is_rate_limited());
        assert!(ApiError::new(-1003, "Too much request weight used").is_rate_limited());
        assert!(!ApiError::new(-1121, "Invalid symbol.").is_rate_limited());
    }

    #[test]
    fn test_insufficient_balance_matches_code_only() {
        let error = ApiError::new(-2010, "Account has insufficient balance for requested action.");
        assert!(error.is_insufficient_balance());
        assert!(ApiError::new(-2010, "").is_insufficient_balance());
        assert!(!ApiError::new(-2011, "Unknown order sent.").is_insufficient_balance());
    }

    #[test]
    fn test_error_kind_predicates() {
        let err = BinanceError::Api(ApiError::new(-2013, "Order does not exist."));
        assert!(err.is_api());
        assert!(!err.is_decode());
        assert!(err.api_error().unwrap().is_unknown_order());

        let err = BinanceError::decode("expected value at line 1 column 1", Some(200));
        assert!(err.is_decode());
        assert!(err.api_error().is_none());
        assert_eq!(
            err.to_string(),
            "Failed to decode response: expected value at line 1 column 1"
        );
    }
}
