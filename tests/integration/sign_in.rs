//! Successful sign-in flows.

use super::common::{
    mount_call, strategy_for, test_options, FETCH_TOKEN_RESPONSE, GET_USER_RESPONSE,
    SESSION_ID_RESPONSE,
};
use ebay_signin::{AuthType, Environment, PhaseOutcome, PhaseState, RequestParams};
use wiremock::matchers::{body_string_contains, header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Request phase
// ============================================================================

#[tokio::test]
async fn test_request_phase_redirects_to_sign_in_page() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("X-EBAY-API-CALL-NAME", "GetSessionID"))
        .and(header("X-EBAY-API-COMPATIBILITY-LEVEL", "675"))
        .and(header("X-EBAY-API-DEV-NAME", "devid"))
        .and(header("X-EBAY-API-APP-NAME", "appid"))
        .and(header("X-EBAY-API-CERT-NAME", "certid"))
        .and(header("X-EBAY-API-SITEID", "0"))
        .and(header("Content-Type", "text/xml"))
        .and(body_string_contains("<RuName>runame</RuName>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SESSION_ID_RESPONSE))
        .expect(1)
        .mount(&server)
        .await;

    let strategy = strategy_for(
        &server,
        test_options(Environment::Production, AuthType::SingleSignOn),
    );
    let params = RequestParams::from_query(
        "internal_return_to=http%3A%2F%2Fsomeurl.com%2Fsomewhere",
    )
    .expect("query should decode");

    let outcome = strategy.request_phase(&params).await;
    assert_eq!(outcome.state(), PhaseState::AwaitingEbayLogin);

    let PhaseOutcome::Redirect(location) = outcome else {
        panic!("expected a redirect");
    };
    assert_eq!(
        location,
        "https://signin.ebay.com/ws/eBayISAPI.dll?SingleSignOn&runame=runame\
         &sid=lOAAAA%2A%2A8f31b2e61360a471d2d4b2c1ffffe1cd\
         &ruparams=internal_return_to%3Dhttp%3A%2F%2Fsomeurl.com%2Fsomewhere\
         %26sid%3DlOAAAA%2A%2A8f31b2e61360a471d2d4b2c1ffffe1cd"
    );
}

#[tokio::test]
async fn test_request_phase_sandbox_sign_in() {
    let server = MockServer::start().await;
    mount_call(&server, "GetSessionID", 200, SESSION_ID_RESPONSE).await;

    let strategy = strategy_for(&server, test_options(Environment::Sandbox, AuthType::SignIn));
    let outcome = strategy.request_phase(&RequestParams::new()).await;

    let PhaseOutcome::Redirect(location) = outcome else {
        panic!("expected a redirect");
    };
    assert!(location.starts_with(
        "https://signin.sandbox.ebay.com/ws/eBayISAPI.dll?SignIn&runame=runame&SessId="
    ));
    assert!(location.ends_with("&ruparams=sid%3DlOAAAA%2A%2A8f31b2e61360a471d2d4b2c1ffffe1cd"));
}

// ============================================================================
// Callback phase
// ============================================================================

#[tokio::test]
async fn test_callback_phase_builds_identity() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("X-EBAY-API-CALL-NAME", "FetchToken"))
        .and(body_string_contains("<Username>test_user</Username>"))
        .and(body_string_contains("<SecretID>fake</SecretID>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FETCH_TOKEN_RESPONSE))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(header("X-EBAY-API-CALL-NAME", "GetUser"))
        .and(body_string_contains("<UserID>test_user</UserID>"))
        .and(body_string_contains("<DetailLevel>ReturnAll</DetailLevel>"))
        .and(body_string_contains(
            "<eBayAuthToken>AgAAAA**AQAAAA**aAAAAA**fake_auth_token</eBayAuthToken>",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(GET_USER_RESPONSE))
        .expect(1)
        .mount(&server)
        .await;

    let strategy = strategy_for(
        &server,
        test_options(Environment::Production, AuthType::SingleSignOn),
    );
    let params = RequestParams::from_query("sid=fake&username=test_user&")
        .expect("query should decode");

    let outcome = strategy.callback_phase(&params).await;
    assert_eq!(outcome.state(), PhaseState::Success);

    let PhaseOutcome::Success(auth) = outcome else {
        panic!("expected success");
    };
    assert_eq!(auth.provider, "ebay");
    assert_eq!(auth.uid, "fake_eias_token");
    assert_eq!(auth.info.ebay_id.as_deref(), Some("test_user"));
    assert_eq!(auth.info.email.as_deref(), Some("test@user.com"));
    assert_eq!(auth.info.full_name.as_deref(), Some("Test User"));
    assert_eq!(auth.info.country.as_deref(), Some("US"));
    assert_eq!(
        auth.credentials.token,
        "AgAAAA**AQAAAA**aAAAAA**fake_auth_token"
    );
    assert_eq!(auth.extra.internal_return_to, None);
    assert_eq!(auth.extra.raw_info.status(), Some("Confirmed"));

    let json = serde_json::to_value(&auth).expect("identity should serialize");
    assert_eq!(json["extra"]["raw_info"]["SellerInfo"]["SellerLevel"], "None");
    assert_eq!(json["info"]["ebay_token"], "AgAAAA**AQAAAA**aAAAAA**fake_auth_token");
}

#[tokio::test]
async fn test_callback_phase_restores_plus_in_secret_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("X-EBAY-API-CALL-NAME", "FetchToken"))
        .and(body_string_contains("<SecretID>abc+def+ghi</SecretID>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FETCH_TOKEN_RESPONSE))
        .expect(1)
        .mount(&server)
        .await;
    mount_call(&server, "GetUser", 200, GET_USER_RESPONSE).await;

    let strategy = strategy_for(
        &server,
        test_options(Environment::Sandbox, AuthType::SingleSignOn),
    );
    // A form decoder has already turned the `+` signs into spaces.
    let params = RequestParams::from_query(
        "username=test_user&sid=abc+def+ghi&internal_return_to=%2Forders",
    )
    .expect("query should decode");
    assert_eq!(params.sid().expect("sid is present"), "abc def ghi");

    let outcome = strategy.callback_phase(&params).await;
    let PhaseOutcome::Success(auth) = outcome else {
        panic!("expected success");
    };
    assert_eq!(auth.extra.internal_return_to.as_deref(), Some("/orders"));
}

// ============================================================================
// Full round trip
// ============================================================================

#[tokio::test]
async fn test_full_sign_in_round_trip() {
    let server = MockServer::start().await;
    mount_call(&server, "GetSessionID", 200, SESSION_ID_RESPONSE).await;
    mount_call(&server, "FetchToken", 200, FETCH_TOKEN_RESPONSE).await;
    mount_call(&server, "GetUser", 200, GET_USER_RESPONSE).await;

    let strategy = strategy_for(
        &server,
        test_options(Environment::Production, AuthType::SingleSignOn),
    );

    let outcome = strategy.request_phase(&RequestParams::new()).await;
    let PhaseOutcome::Redirect(location) = outcome else {
        panic!("expected a redirect");
    };
    let sid = location
        .split('&')
        .find_map(|pair| pair.strip_prefix("sid="))
        .expect("redirect should carry the session id");

    let params = RequestParams::from_query(&format!("username=test_user&sid={}", sid))
        .expect("query should decode");
    let outcome = strategy.callback_phase(&params).await;

    let PhaseOutcome::Success(auth) = outcome else {
        panic!("expected success");
    };
    assert_eq!(auth.uid, "fake_eias_token");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 3);
}
