//! Values produced by the sign-in calls.
//!
//! Session ids and auth tokens are redacted in Debug output.

use serde::Serialize;

use crate::xml::{XmlMap, XmlValue};

/// Session id minted by `GetSessionID`, valid for one sign-in attempt.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap a session id.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw, unescaped session id.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the raw session id.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Debug for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionId([REDACTED])")
    }
}

/// User auth token returned by `FetchToken`.
///
/// Lives only as long as the callback request that fetched it.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Wrap an auth token.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The token value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the token value.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AuthToken([REDACTED])")
    }
}

/// The `GetUserResponse.User` element, as returned by eBay.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct UserProfile(XmlMap);

impl UserProfile {
    /// Wrap a parsed `User` element.
    pub fn new(user: XmlMap) -> Self {
        Self(user)
    }

    /// `EIASToken`, eBay's stable user identifier.
    pub fn eias_token(&self) -> Option<&str> {
        self.0.get_str("EIASToken")
    }

    /// `UserID`, the public eBay user name.
    pub fn user_id(&self) -> Option<&str> {
        self.0.get_str("UserID")
    }

    /// `Email`
    pub fn email(&self) -> Option<&str> {
        self.0.get_str("Email")
    }

    /// `Status`
    pub fn status(&self) -> Option<&str> {
        self.0.get_str("Status")
    }

    /// `RegistrationAddress.Name`
    pub fn full_name(&self) -> Option<&str> {
        self.0.path_str(&["RegistrationAddress", "Name"])
    }

    /// `RegistrationAddress.Country`
    pub fn country(&self) -> Option<&str> {
        self.0.path_str(&["RegistrationAddress", "Country"])
    }

    /// Look up any element of the profile.
    pub fn get(&self, key: &str) -> Option<&XmlValue> {
        self.0.get(key)
    }

    /// The whole `User` element.
    pub fn as_map(&self) -> &XmlMap {
        &self.0
    }

    /// Take the whole `User` element.
    pub fn into_map(self) -> XmlMap {
        self.0
    }
}

impl From<XmlMap> for UserProfile {
    fn from(user: XmlMap) -> Self {
        Self(user)
    }
}
