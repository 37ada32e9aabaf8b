//! Failure paths of both phases.

use super::common::{
    mount_call, strategy_for, test_options, FAILURE_RESPONSE, FETCH_TOKEN_RESPONSE,
};
use ebay_signin::auth::{ErrorKind, CALLBACK_PHASE_FAILURE, REQUEST_PHASE_FAILURE};
use ebay_signin::{
    AuthType, ClientConfig, EbayStrategy, Environment, PhaseOutcome, PhaseState, RequestParams,
};
use wiremock::MockServer;

fn expect_failure(outcome: PhaseOutcome) -> ebay_signin::Failure {
    assert_eq!(outcome.state(), PhaseState::Failed);
    match outcome {
        PhaseOutcome::Failure(failure) => failure,
        other => panic!("expected failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_request_phase_fails_on_empty_body() {
    let server = MockServer::start().await;
    mount_call(&server, "GetSessionID", 200, "").await;

    let strategy = strategy_for(
        &server,
        test_options(Environment::Production, AuthType::SingleSignOn),
    );
    let failure = expect_failure(strategy.request_phase(&RequestParams::new()).await);

    assert_eq!(failure.message_key, REQUEST_PHASE_FAILURE);
    assert_eq!(
        failure.redirect_path("/auth"),
        "/auth/failure?message=Failed+to+retrieve+session+id+from+ebay&strategy=ebay"
    );

    let api_error = failure.error.api_error().expect("should be an API error");
    assert_eq!(api_error.message(), "Failed to generate session id");
    assert!(api_error.request().contains("<RuName>runame</RuName>"));
    assert_eq!(api_error.response(), "");
}

#[tokio::test]
async fn test_request_phase_fails_on_server_error() {
    let server = MockServer::start().await;
    mount_call(&server, "GetSessionID", 503, "Service Unavailable").await;

    let strategy = strategy_for(
        &server,
        test_options(Environment::Sandbox, AuthType::SignIn),
    );
    let failure = expect_failure(strategy.request_phase(&RequestParams::new()).await);

    let api_error = failure.error.api_error().expect("should be an API error");
    assert_eq!(api_error.response(), "Service Unavailable");
}

#[tokio::test]
async fn test_request_phase_fails_when_unreachable() {
    let options = test_options(Environment::Production, AuthType::SingleSignOn)
        .with_client_config(
            ClientConfig::builder()
                .with_api_url("http://127.0.0.1:1/ws/api.dll")
                .build(),
        );
    let strategy = EbayStrategy::new(options).expect("options should be valid");

    let failure = expect_failure(strategy.request_phase(&RequestParams::new()).await);
    assert_eq!(failure.message_key, REQUEST_PHASE_FAILURE);
    assert!(matches!(failure.error.kind, ErrorKind::Transport(_)));
}

#[tokio::test]
async fn test_callback_phase_fails_without_parameters() {
    let server = MockServer::start().await;

    let strategy = strategy_for(
        &server,
        test_options(Environment::Production, AuthType::SingleSignOn),
    );
    let failure = expect_failure(strategy.callback_phase(&RequestParams::new()).await);

    assert_eq!(failure.message_key, CALLBACK_PHASE_FAILURE);
    assert!(matches!(failure.error.kind, ErrorKind::MissingParameter(_)));
    assert!(server
        .received_requests()
        .await
        .expect("recording enabled")
        .is_empty());
}

#[tokio::test]
async fn test_callback_phase_reports_ebay_errors() {
    let server = MockServer::start().await;
    mount_call(&server, "FetchToken", 200, FAILURE_RESPONSE).await;

    let strategy = strategy_for(
        &server,
        test_options(Environment::Production, AuthType::SingleSignOn),
    );
    let params = RequestParams::new()
        .with("username", "test_user")
        .with("sid", "fake");
    let failure = expect_failure(strategy.callback_phase(&params).await);

    assert_eq!(failure.message_key, CALLBACK_PHASE_FAILURE);
    let api_error = failure.error.api_error().expect("should be an API error");
    assert_eq!(api_error.message(), "Failed to retrieve auth token");
    assert_eq!(api_error.ebay_errors().len(), 1);
    assert_eq!(api_error.ebay_errors()[0].code.as_deref(), Some("21916017"));
}

#[tokio::test]
async fn test_callback_phase_fails_on_malformed_user() {
    let server = MockServer::start().await;
    mount_call(&server, "FetchToken", 200, FETCH_TOKEN_RESPONSE).await;
    mount_call(
        &server,
        "GetUser",
        200,
        "<GetUserResponse><Ack>Success</Ack><User>",
    )
    .await;

    let strategy = strategy_for(
        &server,
        test_options(Environment::Production, AuthType::SingleSignOn),
    );
    let params = RequestParams::new()
        .with("username", "test_user")
        .with("sid", "fake");
    let failure = expect_failure(strategy.callback_phase(&params).await);

    let api_error = failure.error.api_error().expect("should be an API error");
    assert_eq!(api_error.message(), "Failed to retrieve user info");
    assert!(api_error.request().contains("<WarningLevel>High</WarningLevel>"));
}

#[tokio::test]
async fn test_callback_phase_fails_without_eias_token() {
    let server = MockServer::start().await;
    mount_call(&server, "FetchToken", 200, FETCH_TOKEN_RESPONSE).await;
    mount_call(
        &server,
        "GetUser",
        200,
        "<GetUserResponse><User><UserID>test_user</UserID></User></GetUserResponse>",
    )
    .await;

    let strategy = strategy_for(
        &server,
        test_options(Environment::Production, AuthType::SingleSignOn),
    );
    let params = RequestParams::new()
        .with("username", "test_user")
        .with("sid", "fake");
    let failure = expect_failure(strategy.callback_phase(&params).await);

    assert!(matches!(failure.error.kind, ErrorKind::InvalidProfile(_)));
}
