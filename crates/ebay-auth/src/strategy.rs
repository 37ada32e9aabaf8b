//! The two-phase sign-in strategy.

use ebay_signin_trading::TradingClient;
use tracing::{info, instrument, warn};

use crate::auth_hash::AuthHash;
use crate::error::{Error, ErrorKind, Result};
use crate::login_url::build_login_redirect;
use crate::options::StrategyOptions;
use crate::params::RequestParams;
use crate::{CALLBACK_PHASE_FAILURE, REQUEST_PHASE_FAILURE};

/// Where a sign-in attempt stands after a phase returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseState {
    /// No phase has run.
    Idle,
    /// The user was sent to eBay's sign-in page.
    AwaitingEbayLogin,
    /// eBay redirected back and the exchange is in progress.
    CallbackReceived,
    /// The identity was produced.
    Success,
    /// The attempt failed; the user has to start over.
    Failed,
}

/// What the host framework should do after a phase.
#[derive(Debug)]
pub enum PhaseOutcome {
    /// Redirect the user to this URL.
    Redirect(String),
    /// The user is signed in.
    Success(Box<AuthHash>),
    /// The phase failed.
    Failure(Failure),
}

impl PhaseOutcome {
    /// The sign-in state this outcome leaves the attempt in.
    pub fn state(&self) -> PhaseState {
        match self {
            PhaseOutcome::Redirect(_) => PhaseState::AwaitingEbayLogin,
            PhaseOutcome::Success(_) => PhaseState::Success,
            PhaseOutcome::Failure(_) => PhaseState::Failed,
        }
    }

    /// Returns true if the phase failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, PhaseOutcome::Failure(_))
    }
}

/// A failed phase, as reported to the host framework.
#[derive(Debug)]
pub struct Failure {
    /// Message key for the host's failure endpoint.
    pub message_key: &'static str,
    /// Name of the strategy that failed.
    pub strategy: String,
    /// What went wrong.
    pub error: Error,
}

impl Failure {
    /// Host location for the failure:
    /// `{path_prefix}/failure?message={message_key}&strategy={strategy}`.
    pub fn redirect_path(&self, path_prefix: &str) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("message", self.message_key)
            .append_pair("strategy", &self.strategy)
            .finish();

        format!("{}/failure?{}", path_prefix.trim_end_matches('/'), query)
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.message_key, self.error)
    }
}

/// eBay Sign-In strategy.
///
/// Holds no per-user state; one instance serves every sign-in attempt.
#[derive(Debug, Clone)]
pub struct EbayStrategy {
    options: StrategyOptions,
    client: TradingClient,
}

impl EbayStrategy {
    /// Validate the options and build a Trading API client for them.
    pub fn new(options: StrategyOptions) -> Result<Self> {
        options.validate()?;
        let client = TradingClient::with_config(
            options.credentials().clone(),
            options.environment(),
            options.client_config().clone(),
        )?;
        Ok(Self { options, client })
    }

    /// Use an existing Trading API client.
    ///
    /// The client must target the same environment as the options.
    pub fn with_client(options: StrategyOptions, client: TradingClient) -> Result<Self> {
        options.validate()?;
        let client_environment = client.http_client().environment();
        if client_environment != options.environment() {
            return Err(Error::new(ErrorKind::Config(format!(
                "client targets {} but the strategy is configured for {}",
                client_environment,
                options.environment()
            ))));
        }
        Ok(Self { options, client })
    }

    /// Strategy name.
    pub fn name(&self) -> &str {
        self.options.name()
    }

    /// Strategy options.
    pub fn options(&self) -> &StrategyOptions {
        &self.options
    }

    /// The Trading API client.
    pub fn client(&self) -> &TradingClient {
        &self.client
    }

    /// Mint a session id and build the sign-in page URL for it.
    pub async fn login_redirect_url(&self, params: &RequestParams) -> Result<String> {
        let session_id = self.client.create_session().await?;
        Ok(build_login_redirect(
            &self.options,
            &session_id,
            params.internal_return_to(),
        ))
    }

    /// Start a sign-in: redirect the user to eBay.
    #[instrument(skip(self, params), fields(strategy = %self.name()))]
    pub async fn request_phase(&self, params: &RequestParams) -> PhaseOutcome {
        match self.login_redirect_url(params).await {
            Ok(url) => {
                info!(environment = %self.options.environment(), "Redirecting to eBay sign-in");
                PhaseOutcome::Redirect(url)
            }
            Err(error) => self.fail(REQUEST_PHASE_FAILURE, error),
        }
    }

    /// Finish a sign-in: exchange the callback's `username` and `sid` for an
    /// identity.
    #[instrument(skip(self, params), fields(strategy = %self.name()))]
    pub async fn callback_phase(&self, params: &RequestParams) -> PhaseOutcome {
        match self.authenticate(params).await {
            Ok(auth) => {
                info!(uid = %auth.uid, "eBay sign-in succeeded");
                PhaseOutcome::Success(Box::new(auth))
            }
            Err(error) => self.fail(CALLBACK_PHASE_FAILURE, error),
        }
    }

    async fn authenticate(&self, params: &RequestParams) -> Result<AuthHash> {
        let username = params.username()?;
        let sid = params.sid()?;
        info!(username, "eBay callback received");

        let auth_token = self.client.fetch_auth_token(username, sid).await?;
        let profile = self.client.fetch_user_info(username, &auth_token).await?;

        AuthHash::for_provider(
            self.name(),
            profile,
            &auth_token,
            params.internal_return_to(),
        )
    }

    fn fail(&self, message_key: &'static str, error: Error) -> PhaseOutcome {
        warn!(key = message_key, error = %error, "eBay sign-in failed");
        PhaseOutcome::Failure(Failure {
            message_key,
            strategy: self.name().to_string(),
            error,
        })
    }
}
