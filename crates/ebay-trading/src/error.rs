//! Error types for ebay-trading.

use crate::xml::{XmlMap, XmlValue};

/// Result type alias for ebay-trading operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for ebay-trading operations.
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

    /// Returns true if the request never produced a response.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport(_))
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// eBay responded but the expected element was absent.
    #[error("{0}")]
    Api(ApiError),

    /// Network, TLS or timeout failure.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Client misconfiguration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed XML.
    #[error("XML error: {0}")]
    Xml(String),
}

/// A Trading API response that did not yield the expected element.
///
/// Keeps the exact request and response bodies. The request body may hold a
/// secret id or auth token, so Debug output only reports body sizes.
#[derive(Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    message: String,
    request: String,
    response: String,
    ebay_errors: Vec<EbayError>,
}

impl std::fmt::Debug for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiError")
            .field("message", &self.message)
            .field("request", &format_args!("[{} bytes]", self.request.len()))
            .field("response", &format_args!("[{} bytes]", self.response.len()))
            .field("ebay_errors", &self.ebay_errors)
            .finish()
    }
}

impl ApiError {
    /// Create an API error for the given exchange.
    pub fn new(
        message: impl Into<String>,
        request: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            request: request.into(),
            response: response.into(),
            ebay_errors: Vec::new(),
        }
    }

    /// Attach the `Errors` entries eBay reported in the response.
    pub fn with_ebay_errors(mut self, errors: Vec<EbayError>) -> Self {
        self.ebay_errors = errors;
        self
    }

    /// Human-readable failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The exact request body that was sent.
    pub fn request(&self) -> &str {
        &self.request
    }

    /// The raw response body that was received.
    pub fn response(&self) -> &str {
        &self.response
    }

    /// The `Errors` entries eBay included in the response, if any.
    pub fn ebay_errors(&self) -> &[EbayError] {
        &self.ebay_errors
    }
}

/// One entry of the `Errors` block in a Trading API response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EbayError {
    /// `ErrorCode`
    pub code: Option<String>,
    /// `ShortMessage`
    pub short_message: Option<String>,
    /// `LongMessage`
    pub long_message: Option<String>,
    /// `SeverityCode` (`Error` or `Warning`)
    pub severity: Option<String>,
}

impl EbayError {
    /// Collect the `Errors` entries under a response root element.
    pub fn from_response(document: &XmlMap, root: &str) -> Vec<EbayError> {
        let Some(errors) = document.path(&[root, "Errors"]) else {
            return Vec::new();
        };

        errors
            .iter_occurrences()
            .filter_map(XmlValue::as_map)
            .map(|entry| EbayError {
                code: entry.get_str("ErrorCode").map(str::to_string),
                short_message: entry.get_str("ShortMessage").map(str::to_string),
                long_message: entry.get_str("LongMessage").map(str::to_string),
                severity: entry.get_str("SeverityCode").map(str::to_string),
            })
            .collect()
    }
}

impl std::fmt::Display for EbayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {}",
            self.code.as_deref().unwrap_or("?"),
            self.long_message
                .as_deref()
                .or(self.short_message.as_deref())
                .unwrap_or("no message")
        )
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::new(ErrorKind::Api(err))
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

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::with_source(ErrorKind::Xml(err.to_string()), err)
    }
}
