//! Trading API client for the sign-in calls.

use ebay_signin_client::{ClientConfig, Credentials, EbayHttpClient, Environment};
use tracing::{debug, instrument, warn};

use crate::calls::{self, TradingCall};
use crate::error::{ApiError, EbayError, Result};
use crate::types::{AuthToken, SessionId, UserProfile};
use crate::xml::{self, XmlMap, XmlValue};

/// eBay Trading API client.
#[derive(Debug, Clone)]
pub struct TradingClient {
    http_client: EbayHttpClient,
}

/// One request/response pair and its parsed document.
struct Exchange {
    call: TradingCall,
    request: String,
    response: String,
    document: XmlMap,
}

impl Exchange {
    /// The result element under the response root.
    fn result(&self) -> Option<&XmlValue> {
        self.document
            .path(&[self.call.response_element(), self.call.result_element()])
    }

    /// The result element as non-blank text.
    fn result_text(&self) -> Option<&str> {
        self.result()
            .and_then(XmlValue::as_str)
            .filter(|text| !text.trim().is_empty())
    }

    fn into_error(self) -> ApiError {
        let ebay_errors = EbayError::from_response(&self.document, self.call.response_element());
        for error in &ebay_errors {
            warn!(call = %self.call, error = %error, "eBay reported an error");
        }

        ApiError::new(self.call.failure_message(), self.request, self.response)
            .with_ebay_errors(ebay_errors)
    }
}

impl TradingClient {
    /// Create a client on top of an existing HTTP client.
    pub fn new(http_client: EbayHttpClient) -> Self {
        Self { http_client }
    }

    /// Create a client with default HTTP configuration.
    pub fn from_credentials(credentials: Credentials, environment: Environment) -> Result<Self> {
        Self::with_config(credentials, environment, ClientConfig::default())
    }

    /// Create a client with custom HTTP configuration.
    pub fn with_config(
        credentials: Credentials,
        environment: Environment,
        config: ClientConfig,
    ) -> Result<Self> {
        let http_client = EbayHttpClient::new(credentials, environment, config)?;
        Ok(Self::new(http_client))
    }

    /// The underlying HTTP client.
    pub fn http_client(&self) -> &EbayHttpClient {
        &self.http_client
    }

    /// The application credentials.
    pub fn credentials(&self) -> &Credentials {
        self.http_client.credentials()
    }

    /// Mint a session id for the configured RuName (`GetSessionID`).
    #[instrument(skip(self))]
    pub async fn create_session(&self) -> Result<SessionId> {
        let request = calls::get_session_id_request(self.credentials().runame());
        let exchange = self.execute(TradingCall::GetSessionId, request).await?;

        match exchange.result_text() {
            Some(session_id) => Ok(SessionId::new(session_id)),
            None => Err(exchange.into_error().into()),
        }
    }

    /// Exchange the session id returned to the callback for the user's auth
    /// token (`FetchToken`).
    ///
    /// Spaces in `secret_id` are sent as `+`.
    #[instrument(skip(self, secret_id))]
    pub async fn fetch_auth_token(&self, username: &str, secret_id: &str) -> Result<AuthToken> {
        let request = calls::fetch_token_request(username, secret_id);
        let exchange = self.execute(TradingCall::FetchToken, request).await?;

        match exchange.result_text() {
            Some(token) => Ok(AuthToken::new(token)),
            None => Err(exchange.into_error().into()),
        }
    }

    /// Fetch the full profile of a signed-in user (`GetUser`).
    #[instrument(skip(self, auth_token))]
    pub async fn fetch_user_info(
        &self,
        username: &str,
        auth_token: &AuthToken,
    ) -> Result<UserProfile> {
        let request = calls::get_user_request(username, auth_token.as_str());
        let exchange = self.execute(TradingCall::GetUser, request).await?;

        match exchange.result().and_then(XmlValue::as_map) {
            Some(user) if !user.is_empty() => Ok(UserProfile::new(user.clone())),
            _ => Err(exchange.into_error().into()),
        }
    }

    /// Send a request and parse whatever comes back.
    ///
    /// Only transport failures are errors here; unparseable responses yield an
    /// empty document so the caller reports them as a missing element.
    async fn execute(&self, call: TradingCall, request: String) -> Result<Exchange> {
        let response = self.http_client.send(call.call_name(), &request).await?;

        let document = match xml::parse(&response) {
            Ok(document) => document,
            Err(err) => {
                debug!(call = %call, error = %err, "Response is not well-formed XML");
                XmlMap::new()
            }
        };

        Ok(Exchange {
            call,
            request,
            response,
            document,
        })
    }
}
