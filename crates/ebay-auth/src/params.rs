//! Inbound request parameters.

use std::collections::HashMap;

use crate::error::{Error, ErrorKind, Result};

/// Query parameters of the request the host framework is handling,
/// normalized to a single string-keyed map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    params: HashMap<String, String>,
}

impl RequestParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a raw query string (without the leading `?`).
    ///
    /// Values are form-decoded, so a `+` arrives here as a space. When a key
    /// repeats, the last value wins.
    pub fn from_query(query: &str) -> Result<Self> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)?;
        Ok(pairs.into_iter().collect())
    }

    /// Set a parameter.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Look up a parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Look up a parameter that must be present and non-empty.
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| Error::new(ErrorKind::MissingParameter(key.to_string())))
    }

    /// eBay user name returned to the callback.
    pub fn username(&self) -> Result<&str> {
        self.require("username")
    }

    /// Session id returned to the callback.
    pub fn sid(&self) -> Result<&str> {
        self.require("sid")
    }

    /// Where the host wants to send the user once signed in.
    pub fn internal_return_to(&self) -> Option<&str> {
        self.get("internal_return_to").filter(|value| !value.is_empty())
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns true if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RequestParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
