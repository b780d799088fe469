//! Credential management for Binance API authentication.

use secrecy::{ExposeSecret, SecretString};

use crate::error::BinanceError;

/// Default environment variable holding the API key.
pub const API_KEY_VAR: &str = "BINANCE_KEY";
/// Default environment variable holding the API secret.
pub const API_SECRET_VAR: &str = "BINANCE_SECRET";

/// A Binance API key and its HMAC secret.
///
/// The key travels in the `X-MBX-APIKEY` header. The secret is only ever
/// used as the HMAC key and is redacted from `Debug` output.
#[derive(Clone)]
pub struct Credentials {
    /// Sent as `X-MBX-APIKEY`
    pub api_key: String,
    api_secret: SecretString,
}

impl Credentials {
    /// Pair an API key with its secret.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// The raw secret, for use as the HMAC key only.
    pub fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Source of the credentials used for signed requests.
///
/// The client holds an `Arc<dyn CredentialsProvider>` and asks it for
/// credentials on every private or wallet call.
pub trait CredentialsProvider: Send + Sync {
    /// Credentials for the next signed request.
    fn get_credentials(&self) -> &Credentials;
}

impl CredentialsProvider for Credentials {
    fn get_credentials(&self) -> &Credentials {
        self
    }
}

/// Credentials fixed at construction time.
#[derive(Clone)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(api_key, api_secret),
        }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials read from the process environment.
///
/// The variables default to `BINANCE_KEY` and `BINANCE_SECRET`. Empty values
/// count as unset.
#[derive(Debug)]
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Read credentials from `BINANCE_KEY` and `BINANCE_SECRET`.
    ///
    /// Fails with [`BinanceError::MissingCredentials`] when neither variable
    /// is set and with [`BinanceError::Config`] when only one of them is.
    pub fn from_env() -> Result<Self, BinanceError> {
        Self::from_env_vars(API_KEY_VAR, API_SECRET_VAR)
    }

    /// Read credentials from custom variable names.
    pub fn from_env_vars(key_var: &str, secret_var: &str) -> Result<Self, BinanceError> {
        Self::from_lookup(key_var, secret_var, |name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(
        key_var: &str,
        secret_var: &str,
        lookup: F,
    ) -> Result<Self, BinanceError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.is_empty());

        match (read(key_var), read(secret_var)) {
            (Some(api_key), Some(api_secret)) => Ok(Self {
                credentials: Credentials::new(api_key, api_secret),
            }),
            (None, None) => Err(BinanceError::MissingCredentials),
            (Some(_), None) => Err(BinanceError::Config(format!(
                "{key_var} is set but {secret_var} is not"
            ))),
            (None, Some(_)) => Err(BinanceError::Config(format!(
                "{secret_var} is set but {key_var} is not"
            ))),
        }
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacted() {
        let creds = Credentials::new("my_key", "super_secret");
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("my_key"));
        assert!(!debug_str.contains("super_secret"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_static_credentials() {
        let provider = StaticCredentials::new("key", "secret");
        let creds = provider.get_credentials();
        assert_eq!(creds.api_key, "key");
        assert_eq!(creds.expose_secret(), "secret");
    }

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name: &str| {
            vars.iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_env_credentials_present() {
        let vars = [("BINANCE_KEY", "env_key"), ("BINANCE_SECRET", "env_secret")];
        let provider =
            EnvCredentials::from_lookup(API_KEY_VAR, API_SECRET_VAR, lookup(&vars)).unwrap();
        assert_eq!(provider.get_credentials().api_key, "env_key");
        assert_eq!(provider.get_credentials().expose_secret(), "env_secret");
    }

    #[test]
    fn test_env_credentials_unset() {
        let err = EnvCredentials::from_lookup(API_KEY_VAR, API_SECRET_VAR, lookup(&[])).unwrap_err();
        assert!(matches!(err, BinanceError::MissingCredentials));

        let vars = [("BINANCE_KEY", ""), ("BINANCE_SECRET", "")];
        let err =
            EnvCredentials::from_lookup(API_KEY_VAR, API_SECRET_VAR, lookup(&vars)).unwrap_err();
        assert!(matches!(err, BinanceError::MissingCredentials));
    }

    #[test]
    fn test_env_credentials_half_set() {
        let vars = [("BINANCE_KEY", "env_key")];
        let err =
            EnvCredentials::from_lookup(API_KEY_VAR, API_SECRET_VAR, lookup(&vars)).unwrap_err();
        match err {
            BinanceError::Config(message) => assert!(message.contains("BINANCE_SECRET")),
            other => panic!("expected a config error, got {other:?}"),
        }
    }

    #[test]
    fn test_env_credentials_custom_names_unset() {
        let err = EnvCredentials::from_env_vars(
            "BINANCE_TEST_UNSET_KEY_VAR",
            "BINANCE_TEST_UNSET_SECRET_VAR",
        )
        .unwrap_err();
        assert!(matches!(err, BinanceError::MissingCredentials));
    }
}
