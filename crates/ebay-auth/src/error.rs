//! Error types for ebay-auth.
//!
//! Error messages are designed to avoid exposing tokens or secret ids.

use ebay_signin_trading::ApiError;

/// Result type alias for ebay-auth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for ebay-auth operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// The API error, if eBay answered without the expected element.
    pub fn api_error(&self) -> Option<&ApiError> {
        match &self.kind {
            ErrorKind::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Missing or invalid strategy configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Environment variable not set.
    #[error("Environment variable not set: {0}")]
    EnvVar(String),

    /// A required inbound request parameter was absent.
    #[error("Missing request parameter: {0}")]
    MissingParameter(String),

    /// Inbound parameters could not be decoded.
    #[error("Invalid request parameters: {0}")]
    InvalidParameters(String),

    /// eBay responded but the expected element was absent.
    #[error("{0}")]
    Api(ApiError),

    /// The user profile lacks a field the identity needs.
    #[error("Invalid user profile: {0}")]
    InvalidProfile(String),

    /// Network, TLS or timeout failure.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl From<ebay_signin_trading::Error> for Error {
    fn from(err: ebay_signin_trading::Error) -> Self {
        use ebay_signin_trading::ErrorKind as TradingKind;

        let ebay_signin_trading::Error { kind, source } = err;
        let kind = match kind {
            TradingKind::Api(api_error) => ErrorKind::Api(api_error),
            TradingKind::Transport(message) => ErrorKind::Transport(message),
            TradingKind::Config(message) => ErrorKind::Config(message),
            TradingKind::Xml(message) => ErrorKind::Transport(format!("XML error: {}", message)),
        };
        Self { kind, source }
    }
}

impl From<ebay_signin_client::Error> for Error {
    fn from(err: ebay_signin_client::Error) -> Self {
        let kind = match &err.kind {
            ebay_signin_client::ErrorKind::Config(message) => ErrorKind::Config(message.clone()),
            other => ErrorKind::Transport(other.to_string()),
        };
        Error::with_source(kind, err)
    }
}

impl From<serde_urlencoded::de::Error> for Error {
    fn from(err: serde_urlencoded::de::Error) -> Self {
        Error::with_source(ErrorKind::InvalidParameters(err.to_string()), err)
    }
}
