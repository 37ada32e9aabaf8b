//! eBay environments and their fixed endpoints.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};

/// Hosted sign-in page for production.
pub const PRODUCTION_LOGIN_URL: &str = "https://signin.ebay.com/ws/eBayISAPI.dll";

/// Hosted sign-in page for the sandbox.
pub const SANDBOX_LOGIN_URL: &str = "https://signin.sandbox.ebay.com/ws/eBayISAPI.dll";

/// XML Trading API endpoint for production.
pub const PRODUCTION_API_URL: &str = "https://api.ebay.com/ws/api.dll";

/// XML Trading API endpoint for the sandbox.
pub const SANDBOX_API_URL: &str = "https://api.sandbox.ebay.com/ws/api.dll";

/// The eBay environment a client talks to.
///
/// Selects a paired sign-in page and API endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// `signin.sandbox.ebay.com` / `api.sandbox.ebay.com`.
    Sandbox,
    /// `signin.ebay.com` / `api.ebay.com`.
    #[default]
    Production,
}

impl Environment {
    /// The hosted sign-in page users are redirected to.
    pub fn login_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_LOGIN_URL,
            Environment::Production => PRODUCTION_LOGIN_URL,
        }
    }

    /// The XML Trading API endpoint.
    pub fn api_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_API_URL,
            Environment::Production => PRODUCTION_API_URL,
        }
    }

    /// The lowercase name used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Sandbox => "sandbox",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Environment::Sandbox),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(Error::new(ErrorKind::Config(format!(
                "unknown eBay environment '{}' (expected 'sandbox' or 'production')",
                other
            )))),
        }
    }
}
