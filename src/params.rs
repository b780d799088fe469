//! Ordered request parameters.
//!
//! Binance signs the query string exactly as it is sent, so the order in
//! which parameters are inserted is part of the request. [`Params`] keeps
//! that order: nothing here sorts or reorders entries.

use url::form_urlencoded;

/// An ordered list of request parameters.
///
/// Entries keep their insertion order. Setting a key that already exists
/// replaces its value in place, without moving it. Entries without a value
/// are kept in the list but left out of the encoded query entirely.
///
/// ```rust
/// use binance_api_client::Params;
///
/// let params = Params::new()
///     .with("symbol", "BNBBTC")
///     .with_opt("fromId", None::<u64>)
///     .with("limit", 500);
///
/// assert_eq!(params.to_query_string(), "symbol=BNBBTC&limit=500");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, Option<String>)>,
}

impl Params {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a parameter, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set(key, value);
        self
    }

    /// Add or replace an optional parameter, builder style.
    pub fn with_opt<V: ToString>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.set_opt(key, value);
        self
    }

    /// Add a parameter at the end, or replace the value of an existing key in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) {
        self.upsert(key.into(), Some(value.to_string()));
    }

    /// Like [`Params::set`], but `None` marks the parameter as absent.
    pub fn set_opt<V: ToString>(&mut self, key: impl Into<String>, value: Option<V>) {
        self.upsert(key.into(), value.map(|v| v.to_string()));
    }

    fn upsert(&mut self, key: String, value: Option<String>) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Remove a parameter, returning its value if it had one.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        self.entries.remove(idx).1
    }

    /// Get the value of a present parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Whether a parameter with a value is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterate over the present parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
    }

    /// Keys of the present parameters in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(k, _)| k)
    }

    /// Number of present parameters.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether there are no present parameters.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Encode as `key=value` pairs joined by `&`, in insertion order.
    ///
    /// Values are form-urlencoded; absent parameters are skipped.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.set(key, value);
        }
        params
    }
}
