use ebay_signin::{
    AuthType, ClientConfig, Credentials, EbayHttpClient, EbayStrategy, Environment,
    StrategyOptions, TradingClient,
};
use wiremock::matchers::{header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SESSION_ID_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<GetSessionIDResponse xmlns="urn:ebay:apis:eBLBaseComponents">
  <Timestamp>2012-03-21T14:01:24.384Z</Timestamp>
  <Ack>Success</Ack>
  <Version>763</Version>
  <Build>E763_CORE_BUNDLED_14489733_R1</Build>
  <SessionID>lOAAAA**8f31b2e61360a471d2d4b2c1ffffe1cd</SessionID>
</GetSessionIDResponse>"#;

pub const FETCH_TOKEN_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<FetchTokenResponse xmlns="urn:ebay:apis:eBLBaseComponents">
  <Timestamp>2012-03-21T14:02:11.012Z</Timestamp>
  <Ack>Success</Ack>
  <Version>763</Version>
  <Build>E763_CORE_BUNDLED_14489733_R1</Build>
  <eBayAuthToken>AgAAAA**AQAAAA**aAAAAA**fake_auth_token</eBayAuthToken>
  <HardExpirationTime>2013-09-12T14:02:10.000Z</HardExpirationTime>
</FetchTokenResponse>"#;

pub const GET_USER_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<GetUserResponse xmlns="urn:ebay:apis:eBLBaseComponents">
  <Timestamp>2012-03-21T14:02:12.155Z</Timestamp>
  <Ack>Success</Ack>
  <Version>763</Version>
  <Build>E763_CORE_BUNDLED_14489733_R1</Build>
  <User>
    <AboutMePage>false</AboutMePage>
    <EIASToken>fake_eias_token</EIASToken>
    <Email>test@user.com</Email>
    <FeedbackScore>0</FeedbackScore>
    <RegistrationDate>2012-03-07T12:28:06.000Z</RegistrationDate>
    <Site>US</Site>
    <Status>Confirmed</Status>
    <UserID>test_user</UserID>
    <RegistrationAddress>
      <Name>Test User</Name>
      <Street1>address</Street1>
      <CityName>San Jose</CityName>
      <StateOrProvince>CA</StateOrProvince>
      <Country>US</Country>
      <CountryName>United States</CountryName>
      <PostalCode>95125</PostalCode>
    </RegistrationAddress>
    <SellerInfo>
      <AllowPaymentEdit>false</AllowPaymentEdit>
      <SellerLevel>None</SellerLevel>
    </SellerInfo>
  </User>
</GetUserResponse>"#;

pub const FAILURE_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<FetchTokenResponse xmlns="urn:ebay:apis:eBLBaseComponents">
  <Ack>Failure</Ack>
  <Errors>
    <ShortMessage>The end user has not completed Auth &amp; Auth sign in flow.</ShortMessage>
    <LongMessage>The end user has not completed Auth &amp; Auth sign in flow.</LongMessage>
    <ErrorCode>21916017</ErrorCode>
    <SeverityCode>Error</SeverityCode>
  </Errors>
</FetchTokenResponse>"#;

/// Route subscriber output through the test harness; `RUST_LOG` controls it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn test_options(environment: Environment, auth_type: AuthType) -> StrategyOptions {
    StrategyOptions::new(Credentials::new("devid", "appid", "certid", "0", "runame"))
        .with_environment(environment)
        .with_auth_type(auth_type)
}

/// Build a strategy whose Trading API calls go to the mock server.
pub fn strategy_for(server: &MockServer, options: StrategyOptions) -> EbayStrategy {
    init_tracing();

    let http_client = EbayHttpClient::new(
        options.credentials().clone(),
        options.environment(),
        ClientConfig::builder().with_api_url(server.uri()).build(),
    )
    .expect("mock server URL should be valid");

    EbayStrategy::with_client(options, TradingClient::new(http_client))
        .expect("test options should be valid")
}

/// Answer one Trading API call with a fixed body.
pub async fn mount_call(server: &MockServer, call_name: &str, status: u16, body: &str) {
    Mock::given(method("POST"))
        .and(header("X-EBAY-API-CALL-NAME", call_name))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}
