//! # ebay-trading
//!
//! The three eBay XML Trading API calls behind the sign-in flow.
//!
//! Every call follows the same template: build the XML request, post it
//! through [`EbayHttpClient`](ebay_signin_client::EbayHttpClient), parse the
//! response into an [`XmlValue`] tree, and extract the expected element. A
//! missing element is the only failure signal eBay gives here, so any
//! unexpected shape (empty body, non-XML body, an `Errors` response) becomes
//! an [`ApiError`] carrying both bodies for diagnostics.
//!
//! ## Example
//!
//! ```rust,ignore
//! use ebay_signin_client::{Credentials, Environment};
//! use ebay_signin_trading::TradingClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ebay_signin_trading::Error> {
//!     let credentials = Credentials::new("devid", "appid", "certid", "0", "runame");
//!     let client = TradingClient::from_credentials(credentials, Environment::Sandbox)?;
//!
//!     let session_id = client.create_session().await?;
//!     // ... user signs in on eBay, which redirects back with `username` ...
//!     let token = client.fetch_auth_token("testuser", session_id.as_str()).await?;
//!     let profile = client.fetch_user_info("testuser", &token).await?;
//!     println!("{:?}", profile.eias_token());
//!     Ok(())
//! }
//! ```

mod calls;
mod client;
mod error;
mod types;
pub mod xml;

pub use calls::{normalize_secret_id, TradingCall, API_NAMESPACE};
pub use client::TradingClient;
pub use error::{ApiError, EbayError, Error, ErrorKind, Result};
pub use types::{AuthToken, SessionId, UserProfile};
pub use xml::{XmlMap, XmlValue};
