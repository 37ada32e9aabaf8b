//! # ebay-auth
//!
//! eBay Sign-In strategy for host login frameworks.
//!
//! The strategy runs a two-phase exchange against eBay's XML Trading API:
//!
//! 1. **Request phase** - mint a session id (`GetSessionID`) and redirect the
//!    user to eBay's hosted sign-in page.
//! 2. **Callback phase** - eBay redirects back with `username` and `sid`; the
//!    session id is exchanged for an auth token (`FetchToken`), the profile is
//!    fetched (`GetUser`), and the result is projected into an [`AuthHash`].
//!
//! Nothing is stored between phases. The host framework supplies the inbound
//! [`RequestParams`] for each call and acts on the returned [`PhaseOutcome`].
//!
//! ## Security
//!
//! - The cert id, session ids and auth tokens are redacted in Debug output
//! - Tracing skips secret parameters
//! - Values interpolated into XML requests are escaped
//!
//! ## Example
//!
//! ```rust,ignore
//! use ebay_signin_auth::{EbayStrategy, PhaseOutcome, RequestParams, StrategyOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ebay_signin_auth::Error> {
//!     let strategy = EbayStrategy::new(StrategyOptions::from_env()?)?;
//!
//!     // GET /auth/ebay
//!     match strategy.request_phase(&RequestParams::new()).await {
//!         PhaseOutcome::Redirect(url) => println!("302 -> {url}"),
//!         PhaseOutcome::Failure(failure) => println!("302 -> {}", failure.redirect_path("/auth")),
//!         PhaseOutcome::Success(_) => unreachable!(),
//!     }
//!
//!     // GET /auth/ebay/callback?username=...&sid=...
//!     let params = RequestParams::from_query("username=testuser&sid=abc")?;
//!     if let PhaseOutcome::Success(auth) = strategy.callback_phase(&params).await {
//!         println!("signed in as {}", auth.uid);
//!     }
//!     Ok(())
//! }
//! ```

mod auth_hash;
mod error;
mod login_url;
mod options;
mod params;
mod strategy;

pub use auth_hash::{AuthCredentials, AuthHash, Extra, UserInfo};
pub use error::{Error, ErrorKind, Result};
pub use login_url::{build_login_redirect, encode_ruparams};
pub use options::{AuthType, StrategyOptions, DEFAULT_NAME};
pub use params::RequestParams;
pub use strategy::{EbayStrategy, Failure, PhaseOutcome, PhaseState};

pub use ebay_signin_client::{Credentials, Environment};
pub use ebay_signin_trading::{ApiError, AuthToken, SessionId, UserProfile};

/// Failure message key of the request phase.
pub const REQUEST_PHASE_FAILURE: &str = "Failed to retrieve session id from ebay";

/// Failure message key of the callback phase.
pub const CALLBACK_PHASE_FAILURE: &str = "Failed to retrieve user info from ebay";
