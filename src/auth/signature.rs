//! HMAC-SHA256 signature generation for Binance API authentication.
//!
//! Signed endpoints (`TRADE`, `USER_DATA`) require a signature computed as:
//! ```text
//! hex(HMAC-SHA256(query_string, api_secret))
//! ```
//!
//! where `query_string` is the exact encoded query that is transmitted,
//! including `timestamp` and `recvWindow`. The lowercase hex digest is then
//! appended as the final `signature` parameter.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::auth::Credentials;
use crate::error::BinanceError;
use crate::params::Params;

type HmacSha256 = Hmac<Sha256>;

/// Sign an already-encoded query string.
///
/// The caller must transmit `query` byte for byte as passed here; any
/// re-encoding afterwards invalidates the signature. Any secret length,
/// including an empty one, is accepted.
///
/// # Example
///
/// ```rust
/// use binance_api_client::auth::{Credentials, sign_query};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("api_key", "api_secret");
/// let signature = sign_query(&credentials, "symbol=BNBBTC&timestamp=1499827319559")?;
/// assert_eq!(signature.len(), 64);
/// # Ok(())
/// # }
/// ```
pub fn sign_query(credentials: &Credentials, query: &str) -> Result<String, BinanceError> {
    // HMAC accepts keys of any length, so this only fails if the MAC type changes.
    let mut mac = HmacSha256::new_from_slice(credentials.expose_secret().as_bytes())
        .map_err(|e| BinanceError::Auth(format!("Invalid HMAC key: {e}")))?;
    mac.update(query.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Sign a parameter list in its insertion order.
///
/// Equivalent to `sign_query(credentials, &params.to_query_string())`.
pub fn sign_params(credentials: &Credentials, params: &Params) -> Result<String, BinanceError> {
    sign_query(credentials, &params.to_query_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "NhqPtmdSJYdKjVHjA7PZj4Mge3R5YNiP1e3UZjInClVN65XAbvqqM6YMVzjd9q";

    fn vector_params() -> Params {
        Params::new()
            .with("symbol", "BNBBTC")
            .with("limit", 500)
            .with("timestamp", 1_499_827_319_559u64)
            .with("recvWindow", 5000)
    }

    #[test]
    fn test_fixed_vector() {
        let credentials = Credentials::new("key", SECRET);
        let signature = sign_params(&credentials, &vector_params()).unwrap();
        assert_eq!(
            signature,
            "5384eca261da23240488668ca18f720cfa6a34e5483de89fb99ac70c41bd3f90"
        );
    }

    #[test]
    fn test_signs_the_encoded_query() {
        let credentials = Credentials::new("key", SECRET);
        let from_params = sign_params(&credentials, &vector_params()).unwrap();
        let from_query = sign_query(
            &credentials,
            "symbol=BNBBTC&limit=500&timestamp=1499827319559&recvWindow=5000",
        )
        .unwrap();
        assert_eq!(from_params, from_query);
    }

    #[test]
    fn test_signature_consistency() {
        let credentials = Credentials::new("key", "my_secret");
        let sig1 = sign_params(&credentials, &vector_params()).unwrap();
        let sig2 = sign_params(&credentials, &vector_params()).unwrap();
        assert_eq!(sig1, sig2);
    }

    #[test]
    fn test_signature_changes_with_order() {
        let credentials = Credentials::new("key", SECRET);
        let reordered = Params::new()
            .with("limit", 500)
            .with("symbol", "BNBBTC")
            .with("timestamp", 1_499_827_319_559u64)
            .with("recvWindow", 5000);

        let signature = sign_params(&credentials, &reordered).unwrap();
        assert_eq!(
            signature,
            "8638493122e8f64dc87fd84d9f0275a3d59e92ae9a48f5872c6c1b61a7bb57ef"
        );
        assert_ne!(signature, sign_params(&credentials, &vector_params()).unwrap());
    }

    #[test]
    fn test_signature_is_lowercase_hex() {
        let credentials = Credentials::new("key", "my_secret");
        let signature = sign_query(&credentials, "timestamp=1").unwrap();
        assert_eq!(signature.len(), 64);
        assert!(
            signature
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }

    #[test]
    fn test_any_secret_length_signs() {
        for secret in [String::new(), "k".to_string(), "s".repeat(256)] {
            let credentials = Credentials::new("key", secret);
            let signature = sign_query(&credentials, "symbol=BNBBTC").unwrap();
            assert_eq!(signature.len(), 64);
        }
    }
}
