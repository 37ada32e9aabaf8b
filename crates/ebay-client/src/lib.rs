//! # ebay-client
//!
//! HTTP transport for eBay's legacy XML Trading API.
//!
//! This crate provides the lowest layer of the sign-in stack:
//! - Fixed sandbox/production endpoints
//! - Application credentials (dev id, app id, cert id, site id, RuName)
//! - The `X-EBAY-API-*` header set required on every call
//! - A single-attempt HTTPS POST that returns the raw response body
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Strategy Layer                           │
//! │  (ebay-auth: request phase, callback phase, identity)       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    TradingClient                            │
//! │  (ebay-trading: GetSessionID, FetchToken, GetUser)          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    EbayHttpClient                           │
//! │  - Endpoint selection, eBay headers, one POST per call      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use ebay_signin_client::{ClientConfig, Credentials, EbayHttpClient, Environment};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ebay_signin_client::Error> {
//!     let credentials = Credentials::new("devid", "appid", "certid", "0", "runame");
//!     let client = EbayHttpClient::new(credentials, Environment::Sandbox, ClientConfig::default())?;
//!
//!     let body = client.send("GetSessionID", "<GetSessionIDRequest/>").await?;
//!     println!("{body}");
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod credentials;
mod environment;
mod error;
pub mod security;

pub use client::EbayHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use credentials::Credentials;
pub use environment::{
    Environment, PRODUCTION_API_URL, PRODUCTION_LOGIN_URL, SANDBOX_API_URL, SANDBOX_LOGIN_URL,
};
pub use error::{Error, ErrorKind, Result};

/// Trading API compatibility level sent with every call.
pub const COMPATIBILITY_LEVEL: &str = "675";

/// Content type of every Trading API request body.
pub const REQUEST_CONTENT_TYPE: &str = "text/xml";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("ebay-signin/", env!("CARGO_PKG_VERSION"));
