//! Strategy configuration.

use std::str::FromStr;

use ebay_signin_client::{ClientConfig, Credentials, Environment};
use serde::Deserialize;

use crate::error::{Error, ErrorKind, Result};

/// Default strategy name, used in host paths such as `/auth/ebay`.
pub const DEFAULT_NAME: &str = "ebay";

/// How the user signs in on eBay's hosted page.
///
/// Selects the verb of the sign-in URL and the name of the field carrying
/// the session id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
pub enum AuthType {
    /// Single Sign-On: verb `SingleSignOn`, field `sid`.
    #[default]
    #[serde(alias = "sso")]
    SingleSignOn,
    /// Direct sign-in: verb `SignIn`, field `SessId`.
    #[serde(alias = "simple")]
    SignIn,
}

impl AuthType {
    /// Query-string verb of the sign-in URL.
    pub fn verb(&self) -> &'static str {
        match self {
            AuthType::SingleSignOn => "SingleSignOn",
            AuthType::SignIn => "SignIn",
        }
    }

    /// Name of the session id field in the sign-in URL.
    pub fn session_field(&self) -> &'static str {
        match self {
            AuthType::SingleSignOn => "sid",
            AuthType::SignIn => "SessId",
        }
    }
}

impl FromStr for AuthType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "SingleSignOn" | "sso" | "SSO" => Ok(AuthType::SingleSignOn),
            "SignIn" | "simple" | "Simple" => Ok(AuthType::SignIn),
            other => Err(Error::new(ErrorKind::Config(format!(
                "unknown auth type '{}' (expected 'SingleSignOn' or 'SignIn')",
                other
            )))),
        }
    }
}

/// Everything the strategy needs, fixed at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct StrategyOptions {
    #[serde(default = "default_name")]
    name: String,
    #[serde(flatten)]
    credentials: Credentials,
    #[serde(default)]
    environment: Environment,
    #[serde(default)]
    auth_type: AuthType,
    #[serde(skip)]
    client_config: ClientConfig,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

impl StrategyOptions {
    /// Options for production Single Sign-On with the given credentials.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            name: default_name(),
            credentials,
            environment: Environment::default(),
            auth_type: AuthType::default(),
            client_config: ClientConfig::default(),
        }
    }

    /// Load options from environment variables.
    ///
    /// Required environment variables:
    /// - `EBAY_RUNAME`
    /// - `EBAY_DEV_ID`
    /// - `EBAY_APP_ID`
    /// - `EBAY_CERT_ID`
    ///
    /// Optional:
    /// - `EBAY_SITE_ID` (default: "0")
    /// - `EBAY_ENVIRONMENT` (default: "production")
    /// - `EBAY_AUTH_TYPE` (default: "SingleSignOn")
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load options through an arbitrary variable lookup.
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| Error::new(ErrorKind::EnvVar(key.to_string())))
        };

        let credentials = Credentials::new(
            required("EBAY_DEV_ID")?,
            required("EBAY_APP_ID")?,
            required("EBAY_CERT_ID")?,
            lookup("EBAY_SITE_ID").unwrap_or_else(|| "0".to_string()),
            required("EBAY_RUNAME")?,
        );

        let mut options = Self::new(credentials);
        if let Some(environment) = lookup("EBAY_ENVIRONMENT") {
            options.environment = environment.parse()?;
        }
        if let Some(auth_type) = lookup("EBAY_AUTH_TYPE") {
            options.auth_type = auth_type.parse()?;
        }

        Ok(options)
    }

    /// Set the strategy name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the environment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Set the auth type.
    pub fn with_auth_type(mut self, auth_type: AuthType) -> Self {
        self.auth_type = auth_type;
        self
    }

    /// Set the HTTP client configuration.
    pub fn with_client_config(mut self, config: ClientConfig) -> Self {
        self.client_config = config;
        self
    }

    /// Strategy name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Application credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The configured RuName.
    pub fn runame(&self) -> &str {
        self.credentials.runame()
    }

    /// eBay environment.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Sign-in mode.
    pub fn auth_type(&self) -> AuthType {
        self.auth_type
    }

    /// HTTP client configuration.
    pub fn client_config(&self) -> &ClientConfig {
        &self.client_config
    }

    /// Reject incomplete configuration before any request is served.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::new(ErrorKind::Config(
                "strategy name is required".to_string(),
            )));
        }
        self.credentials.validate()?;
        Ok(())
    }
}
