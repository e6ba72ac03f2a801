//! Exercises the injected-transport seam without any network involvement.

// std
use std::sync::{Arc, Mutex};
// self
use mymagti_oauth::{
	error::{DecodeError, Error},
	fetch_token,
	grant::{DEFAULT_USER_AGENT, GrantDefaults, GrantKind},
	http::{RawResponse, TokenTransport, TransportFuture},
	request::{FetchOptions, TokenEndpointRequest, TokenRequest},
};

const TOKEN_INFO_BODY: &str = "{\"access_token\":\"fake_access_token\",\"autoLogin\":1,\"expires_in\":3600,\"jti\":\"fake_jti\",\"phoneNo\":\"fake_phoneNo\",\"refresh_token\":\"fake_refresh_token\",\"scope\":\"fake_scope\",\"token_type\":\"fake_token_type\",\"userId\":1234,\"userIdentifier\":\"fake_userIdentifier\"}";

struct RecordingTransport {
	status: u16,
	body: &'static str,
	calls: Mutex<Vec<TokenEndpointRequest>>,
}
impl RecordingTransport {
	fn new(status: u16, body: &'static str) -> Arc<Self> {
		Arc::new(Self { status, body, calls: Mutex::new(Vec::new()) })
	}

	fn calls(&self) -> Vec<TokenEndpointRequest> {
		self.calls.lock().expect("Recording transport log should not be poisoned.").clone()
	}
}
impl TokenTransport for RecordingTransport {
	fn send(&self, request: TokenEndpointRequest) -> TransportFuture<'_> {
		self.calls.lock().expect("Recording transport log should not be poisoned.").push(request);

		let response = RawResponse { status: self.status, body: self.body.as_bytes().to_vec() };

		Box::pin(async move { Ok(response) })
	}
}

#[tokio::test]
async fn default_configuration_reaches_the_transport() {
	let transport = RecordingTransport::new(200, TOKEN_INFO_BODY);
	let request = TokenRequest::login("test", "test");

	fetch_token(&request, FetchOptions::new().with_transport(transport.clone()))
		.await
		.expect("Stubbed login exchange should succeed.");

	let calls = transport.calls();

	assert_eq!(calls.len(), 1);

	let sent = &calls[0];

	assert_eq!(sent.url.as_str(), "https://oauth.magticom.ge/auth/oauth/token");
	assert_eq!(
		sent.body,
		"client_id=MymagtiApp2FAPre&grant_type=mymagti_auth&username=test&password=test"
	);
	assert_eq!(sent.header("user-agent"), Some(DEFAULT_USER_AGENT));
	assert_eq!(
		sent.header("authorization"),
		Some(GrantDefaults::of(GrantKind::Login).authorization)
	);
	assert_eq!(sent.header("content-type"), Some("application/x-www-form-urlencoded"));
}

#[tokio::test]
async fn repeated_requests_are_byte_identical() {
	let transport = RecordingTransport::new(200, TOKEN_INFO_BODY);
	let request = TokenRequest::refresh("abc");

	for _ in 0..2 {
		fetch_token(&request, FetchOptions::new().with_transport(transport.clone()))
			.await
			.expect("Stubbed refresh exchange should succeed.");
	}

	let calls = transport.calls();

	assert_eq!(calls.len(), 2);
	assert_eq!(calls[0], calls[1]);
	assert_eq!(calls[0].body, "client_id=MymagtiApp2FAPre&grant_type=refresh_token&refresh_token=abc");
}

#[tokio::test]
async fn malformed_success_body_fails_the_exchange() {
	let transport = RecordingTransport::new(200, "<html>upstream gateway</html>");
	let request = TokenRequest::login("test", "test");
	let error = fetch_token(&request, FetchOptions::new().with_transport(transport))
		.await
		.expect_err("Non-JSON 200 body should fail instead of fabricating a result.");

	match error {
		Error::Decode(DecodeError::Body { status, .. }) => assert_eq!(status, 200),
		other => panic!("Unexpected error variant: {other:?}."),
	}
}

#[tokio::test]
async fn mismatched_error_body_fails_the_exchange() {
	// A 400 whose body lacks the OAuth error fields is a decode failure, not
	// an error result with invented contents.
	let transport = RecordingTransport::new(400, "{\"message\":\"nope\"}");
	let request = TokenRequest::refresh("abc");
	let error = fetch_token(&request, FetchOptions::new().with_transport(transport))
		.await
		.expect_err("Schema-mismatched error body should fail to decode.");

	match error {
		Error::Decode(DecodeError::Body { status, .. }) => assert_eq!(status, 400),
		other => panic!("Unexpected error variant: {other:?}."),
	}
}
