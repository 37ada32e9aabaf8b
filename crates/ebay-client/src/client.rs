//! HTTP client for the XML Trading API.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_LENGTH, CONTENT_TYPE};
use tracing::{debug, instrument, warn};

use crate::config::ClientConfig;
use crate::credentials::Credentials;
use crate::environment::Environment;
use crate::error::{Error, ErrorKind, Result};

static CALL_NAME_HEADER: HeaderName = HeaderName::from_static("x-ebay-api-call-name");
static COMPATIBILITY_LEVEL_HEADER: HeaderName =
    HeaderName::from_static("x-ebay-api-compatibility-level");
static DEV_NAME_HEADER: HeaderName = HeaderName::from_static("x-ebay-api-dev-name");
static APP_NAME_HEADER: HeaderName = HeaderName::from_static("x-ebay-api-app-name");
static CERT_NAME_HEADER: HeaderName = HeaderName::from_static("x-ebay-api-cert-name");
static SITE_ID_HEADER: HeaderName = HeaderName::from_static("x-ebay-api-siteid");

/// HTTP client for eBay's XML Trading API.
///
/// Each call is a single POST: there is no retry and no backoff. A response
/// with a non-success status is still returned, since eBay reports call
/// failures inside the XML body.
#[derive(Clone)]
pub struct EbayHttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
    credentials: Credentials,
    environment: Environment,
    api_url: String,
}

impl std::fmt::Debug for EbayHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EbayHttpClient")
            .field("credentials", &self.credentials)
            .field("environment", &self.environment)
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

impl EbayHttpClient {
    /// Create a new client for the given environment.
    pub fn new(
        credentials: Credentials,
        environment: Environment,
        config: ClientConfig,
    ) -> Result<Self> {
        let api_url = match config.api_url {
            Some(ref url) => url::Url::parse(url)?.to_string(),
            None => environment.api_url().to_string(),
        };

        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self {
            inner,
            config,
            credentials,
            environment,
            api_url,
        })
    }

    /// Create a new client with default configuration.
    pub fn with_defaults(credentials: Credentials, environment: Environment) -> Result<Self> {
        Self::new(credentials, environment, ClientConfig::default())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the application credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Get the environment.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// The endpoint API calls are posted to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// The hosted sign-in page for this client's environment.
    pub fn login_url(&self) -> &'static str {
        self.environment.login_url()
    }

    /// Build the header set required on every Trading API call.
    pub fn api_headers(&self, call_name: &str, content_length: usize) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CALL_NAME_HEADER.clone(), header_value(&CALL_NAME_HEADER, call_name)?);
        headers.insert(
            COMPATIBILITY_LEVEL_HEADER.clone(),
            HeaderValue::from_static(crate::COMPATIBILITY_LEVEL),
        );
        headers.insert(
            DEV_NAME_HEADER.clone(),
            header_value(&DEV_NAME_HEADER, self.credentials.dev_id())?,
        );
        headers.insert(
            APP_NAME_HEADER.clone(),
            header_value(&APP_NAME_HEADER, self.credentials.app_id())?,
        );
        headers.insert(
            CERT_NAME_HEADER.clone(),
            header_value(&CERT_NAME_HEADER, self.credentials.cert_id())?,
        );
        headers.insert(
            SITE_ID_HEADER.clone(),
            header_value(&SITE_ID_HEADER, self.credentials.site_id())?,
        );
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static(crate::REQUEST_CONTENT_TYPE),
        );
        headers.insert(CONTENT_LENGTH, HeaderValue::from(content_length));
        Ok(headers)
    }

    /// Post an XML request body for the named call and return the raw
    /// response body.
    #[instrument(skip(self, body), fields(url = %self.api_url))]
    pub async fn send(&self, call_name: &str, body: &str) -> Result<String> {
        let headers = self.api_headers(call_name, body.len())?;

        if self.config.enable_tracing {
            debug!(call_name, content_length = body.len(), "Sending Trading API call");
        }

        let response = self
            .inner
            .post(&self.api_url)
            .headers(headers)
            .body(body.to_string())
            .send()
            .await?;

        let status = response.status();
        if self.config.enable_tracing {
            if status.is_success() {
                debug!(status = status.as_u16(), "Response received");
            } else {
                warn!(status = status.as_u16(), call_name, "Non-success response");
            }
        }

        Ok(response.text().await?)
    }
}

fn header_value(name: &HeaderName, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| {
        Error::with_source(
            ErrorKind::InvalidHeader {
                name: name.to_string(),
                message: e.to_string(),
            },
            e,
        )
    })
}
