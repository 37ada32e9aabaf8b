//! eBay sign-in page redirect.
//!
//! The redirect carries a `ruparams` value that eBay echoes back to the
//! callback. It is a query string embedded as a single query parameter, so its
//! own `=` and `&` separators are escaped a second time.

use ebay_signin_client::security;
use ebay_signin_trading::SessionId;

use crate::options::StrategyOptions;

/// Serialize the parameters eBay should echo back to the callback.
///
/// Pairs are emitted in key order (`internal_return_to`, then `sid`). Keys and
/// values are percent-encoded like the session id field, with spaces as `+`.
/// Then `=` becomes `%3D` and `&` becomes `%26`.
///
/// # Example
///
/// ```rust
/// use ebay_signin_auth::encode_ruparams;
///
/// assert_eq!(encode_ruparams("abc", None), "sid%3Dabc");
/// assert_eq!(
///     encode_ruparams("abc", Some("/home")),
///     "internal_return_to%3D%2Fhome%26sid%3Dabc"
/// );
/// ```
pub fn encode_ruparams(session_id: &str, internal_return_to: Option<&str>) -> String {
    let mut pairs = Vec::with_capacity(2);
    if let Some(return_to) = internal_return_to {
        pairs.push(("internal_return_to", return_to));
    }
    pairs.push(("sid", session_id));

    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", query_escape(key), query_escape(value)))
        .collect::<Vec<_>>()
        .join("&")
        .replace('=', "%3D")
        .replace('&', "%26")
}

/// Percent-encode a query component, leaving `-_.~` and alphanumerics as-is
/// and writing spaces as `+`.
fn query_escape(value: &str) -> String {
    security::url::encode_param(value).replace("%20", "+")
}

/// Build the URL of eBay's hosted sign-in page for a fresh session.
///
/// Produces
/// `{login_url}?{verb}&runame={runame}&{session_field}={session_id}&ruparams={ruparams}`
/// where the session id is percent-encoded with `+` forced to `%2B`.
pub fn build_login_redirect(
    options: &StrategyOptions,
    session_id: &SessionId,
    internal_return_to: Option<&str>,
) -> String {
    let auth_type = options.auth_type();

    format!(
        "{}?{}&runame={}&{}={}&ruparams={}",
        options.environment().login_url(),
        auth_type.verb(),
        options.runame(),
        auth_type.session_field(),
        security::url::encode_session_id(session_id.as_str()),
        encode_ruparams(session_id.as_str(), internal_return_to),
    )
}
