//! Request bodies for the Trading API calls used by sign-in.
//!
//! Interpolated values are XML-escaped.

use ebay_signin_client::security::xml;

/// XML namespace of every Trading API request.
pub const API_NAMESPACE: &str = "urn:ebay:apis:eBLBaseComponents";

/// The Trading API calls made during sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TradingCall {
    /// Mint a session id for one sign-in attempt.
    GetSessionId,
    /// Exchange a completed session for a user auth token.
    FetchToken,
    /// Read the signed-in user's profile.
    GetUser,
}

impl TradingCall {
    /// Value of the `X-EBAY-API-CALL-NAME` header.
    pub fn call_name(&self) -> &'static str {
        match self {
            TradingCall::GetSessionId => "GetSessionID",
            TradingCall::FetchToken => "FetchToken",
            TradingCall::GetUser => "GetUser",
        }
    }

    /// Root element of the response document.
    pub fn response_element(&self) -> &'static str {
        match self {
            TradingCall::GetSessionId => "GetSessionIDResponse",
            TradingCall::FetchToken => "FetchTokenResponse",
            TradingCall::GetUser => "GetUserResponse",
        }
    }

    /// Element extracted from under the response root.
    pub fn result_element(&self) -> &'static str {
        match self {
            TradingCall::GetSessionId => "SessionID",
            TradingCall::FetchToken => "eBayAuthToken",
            TradingCall::GetUser => "User",
        }
    }

    /// Message of the [`ApiError`](crate::ApiError) raised when the result
    /// element is missing.
    pub fn failure_message(&self) -> &'static str {
        match self {
            TradingCall::GetSessionId => "Failed to generate session id",
            TradingCall::FetchToken => "Failed to retrieve auth token",
            TradingCall::GetUser => "Failed to retrieve user info",
        }
    }
}

impl std::fmt::Display for TradingCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.call_name())
    }
}

/// Restore the `+` signs of a secret id that went through form decoding.
///
/// eBay session ids may contain `+`; a host framework decoding the callback
/// query string turns them into spaces before they reach this crate.
pub fn normalize_secret_id(secret_id: &str) -> String {
    secret_id.replace(' ', "+")
}

pub(crate) fn get_session_id_request(runame: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<GetSessionIDRequest xmlns="{ns}">
  <RuName>{runame}</RuName>
</GetSessionIDRequest>"#,
        ns = API_NAMESPACE,
        runame = xml::escape(runame),
    )
}

pub(crate) fn fetch_token_request(username: &str, secret_id: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<FetchTokenRequest xmlns="{ns}">
  <RequesterCredentials>
    <Username>{username}</Username>
  </RequesterCredentials>
  <SecretID>{secret_id}</SecretID>
</FetchTokenRequest>"#,
        ns = API_NAMESPACE,
        username = xml::escape(username),
        secret_id = xml::escape(&normalize_secret_id(secret_id)),
    )
}

pub(crate) fn get_user_request(username: &str, auth_token: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<GetUserRequest xmlns="{ns}">
  <DetailLevel>ReturnAll</DetailLevel>
  <UserID>{username}</UserID>
  <RequesterCredentials>
    <eBayAuthToken>{auth_token}</eBayAuthToken>
  </RequesterCredentials>
  <WarningLevel>High</WarningLevel>
</GetUserRequest>"#,
        ns = API_NAMESPACE,
        username = xml::escape(username),
        auth_token = xml::escape(auth_token),
    )
}
