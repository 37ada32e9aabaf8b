//! # ebay-signin
//!
//! eBay Sign-In for Rust web applications, built on eBay's legacy XML
//! Trading API.
//!
//! ## Security
//!
//! This library is designed with security in mind:
//! - The cert id, session ids and auth tokens are redacted in Debug output
//! - Tracing/logging skips secret parameters
//! - Values interpolated into XML requests are escaped
//!
//! ## Crates
//!
//! - **ebay-signin-client** - HTTP transport with the eBay header set
//! - **ebay-signin-trading** - `GetSessionID`, `FetchToken` and `GetUser` calls and XML parsing
//! - **ebay-signin-auth** - Sign-in strategy: login redirect, callback exchange, identity
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ebay_signin::{EbayStrategy, PhaseOutcome, RequestParams, StrategyOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Credentials from EBAY_RUNAME, EBAY_DEV_ID, EBAY_APP_ID, EBAY_CERT_ID
//!     let strategy = EbayStrategy::new(StrategyOptions::from_env()?)?;
//!
//!     // GET /auth/ebay/callback?username=...&sid=...
//!     let params = RequestParams::from_query("username=test_user&sid=abc")?;
//!     match strategy.callback_phase(&params).await {
//!         PhaseOutcome::Success(auth) => println!("signed in as {}", auth.uid),
//!         PhaseOutcome::Failure(failure) => println!("-> {}", failure.redirect_path("/auth")),
//!         PhaseOutcome::Redirect(url) => println!("-> {}", url),
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "auth")]
pub use ebay_signin_auth as auth;
#[cfg(feature = "client")]
pub use ebay_signin_client as client;
#[cfg(feature = "trading")]
pub use ebay_signin_trading as trading;

// Re-export commonly used types at the top level
#[cfg(feature = "auth")]
pub use ebay_signin_auth::{
    AuthHash, AuthType, EbayStrategy, Failure, PhaseOutcome, PhaseState, RequestParams,
    StrategyOptions,
};
#[cfg(feature = "client")]
pub use ebay_signin_client::{ClientConfig, Credentials, EbayHttpClient, Environment};
#[cfg(feature = "trading")]
pub use ebay_signin_trading::{ApiError, TradingClient};
