//! eBay application credentials.
//!
//! The cert id is a shared secret and is redacted in Debug output.

use serde::Deserialize;

use crate::error::{Error, ErrorKind, Result};

/// Application keys issued by the eBay developer program, plus the RuName
/// (redirect name) registered for the sign-in flow.
///
/// Values are opaque and sent verbatim as headers or request fields.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    #[serde(alias = "devid")]
    dev_id: String,
    #[serde(alias = "appid")]
    app_id: String,
    #[serde(alias = "certid")]
    cert_id: String,
    #[serde(alias = "siteid", default = "default_site_id")]
    site_id: String,
    runame: String,
}

fn default_site_id() -> String {
    "0".to_string()
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("dev_id", &self.dev_id)
            .field("app_id", &self.app_id)
            .field("cert_id", &"[REDACTED]")
            .field("site_id", &self.site_id)
            .field("runame", &self.runame)
            .finish()
    }
}

impl Credentials {
    /// Create credentials from their parts.
    pub fn new(
        dev_id: impl Into<String>,
        app_id: impl Into<String>,
        cert_id: impl Into<String>,
        site_id: impl Into<String>,
        runame: impl Into<String>,
    ) -> Self {
        Self {
            dev_id: dev_id.into(),
            app_id: app_id.into(),
            cert_id: cert_id.into(),
            site_id: site_id.into(),
            runame: runame.into(),
        }
    }

    /// Developer id (`X-EBAY-API-DEV-NAME`).
    pub fn dev_id(&self) -> &str {
        &self.dev_id
    }

    /// Application id (`X-EBAY-API-APP-NAME`).
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Certificate id (`X-EBAY-API-CERT-NAME`).
    pub fn cert_id(&self) -> &str {
        &self.cert_id
    }

    /// Numeric eBay site id, as a string (`X-EBAY-API-SITEID`).
    pub fn site_id(&self) -> &str {
        &self.site_id
    }

    /// Registered redirect name.
    pub fn runame(&self) -> &str {
        &self.runame
    }

    /// Check that every value is present.
    ///
    /// Returns the name of the first missing value as a configuration error.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("runame", &self.runame),
            ("devid", &self.dev_id),
            ("appid", &self.app_id),
            ("certid", &self.cert_id),
            ("siteid", &self.site_id),
        ];

        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(Error::new(ErrorKind::Config(format!(
                    "{} is required",
                    name
                ))));
            }
        }

        Ok(())
    }
}
