//! The single-round-trip token exchange flow.

// self
use crate::{
	_prelude::*,
	http::TokenTransport,
	request::{FetchOptions, TokenRequest, build_request},
	response::{TokenResult, classify},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;

/// Executes one token exchange: build the request, perform a single transport
/// call, classify the response on the 200 boundary.
///
/// A non-200 answer is a normal [`TokenResult::Error`] return carrying the
/// server's status code and error payload. Transport failures and undecodable
/// bodies surface through [`enum@Error`] instead. Calls are independent; the
/// flow holds no state beyond the read-only grant table, introduces no
/// per-call nonce or timestamp, and suspends exactly once at the network call.
pub async fn fetch_token(request: &TokenRequest, options: FetchOptions) -> Result<TokenResult> {
	let endpoint_request = build_request(request, &options)?;
	let transport = resolve_transport(&options)?;

	#[cfg(feature = "tracing")]
	tracing::debug!(
		grant = %request.grant_kind(),
		url = %endpoint_request.url,
		"dispatching token request"
	);

	let response = transport.send(endpoint_request).await?;

	#[cfg(feature = "tracing")]
	tracing::debug!(status = response.status, "token endpoint responded");

	classify(&response)
}

/// Resolves the transport for one call: the injected override when present,
/// otherwise the crate's default reqwest client.
fn resolve_transport(options: &FetchOptions) -> Result<Arc<dyn TokenTransport>> {
	if let Some(transport) = &options.transport {
		return Ok(Arc::clone(transport));
	}

	#[cfg(feature = "reqwest")]
	{
		Ok(Arc::new(ReqwestTransport::default()))
	}
	#[cfg(not(feature = "reqwest"))]
	{
		use crate::error::ConfigError;

		Err(ConfigError::MissingTransport.into())
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::sync::Mutex;
	// self
	use super::*;
	use crate::{
		http::{RawResponse, TransportFuture},
		request::TokenEndpointRequest,
	};

	const TOKEN_INFO_BODY: &str = r#"{
		"access_token": "fake_access_token",
		"autoLogin": 1,
		"expires_in": 3600,
		"jti": "fake_jti",
		"phoneNo": "fake_phoneNo",
		"refresh_token": "fake_refresh_token",
		"scope": "fake_scope",
		"token_type": "fake_token_type",
		"userId": 1234,
		"userIdentifier": "fake_userIdentifier"
	}"#;

	struct StubTransport {
		status: u16,
		body: &'static str,
		calls: Mutex<Vec<TokenEndpointRequest>>,
	}
	impl StubTransport {
		fn new(status: u16, body: &'static str) -> Arc<Self> {
			Arc::new(Self { status, body, calls: Mutex::new(Vec::new()) })
		}

		fn calls(&self) -> Vec<TokenEndpointRequest> {
			self.calls.lock().expect("Stub call log should not be poisoned.").clone()
		}
	}
	impl TokenTransport for StubTransport {
		fn send(&self, request: TokenEndpointRequest) -> TransportFuture<'_> {
			self.calls.lock().expect("Stub call log should not be poisoned.").push(request);

			let response = RawResponse { status: self.status, body: self.body.as_bytes().to_vec() };

			Box::pin(async move { Ok(response) })
		}
	}

	#[tokio::test]
	async fn refresh_success_classifies_token_info() {
		let transport = StubTransport::new(200, TOKEN_INFO_BODY);
		let request = TokenRequest::refresh("fake_refresh_token");
		let result =
			fetch_token(&request, FetchOptions::new().with_transport(transport.clone()))
				.await
				.expect("Stubbed 200 response should classify.");

		assert!(result.is_success());
		assert_eq!(result.status_code(), 200);
		assert_eq!(
			result.token_info().map(|info| info.refresh_token.as_str()),
			Some("fake_refresh_token")
		);

		let calls = transport.calls();

		assert_eq!(calls.len(), 1);
		assert_eq!(
			calls[0].body,
			"client_id=MymagtiApp2FAPre&grant_type=refresh_token&refresh_token=fake_refresh_token"
		);
	}

	#[tokio::test]
	async fn rejected_login_classifies_error_payload() {
		let transport =
			StubTransport::new(401, r#"{"error":"invalid_grant","error_description":"bad credentials"}"#);
		let request = TokenRequest::login("test", "wrong");
		let result = fetch_token(&request, FetchOptions::new().with_transport(transport))
			.await
			.expect("Stubbed 401 response should classify as a normal error result.");

		assert!(!result.is_success());
		assert_eq!(result.status_code(), 401);
		assert_eq!(result.error_info().map(|info| info.error.as_str()), Some("invalid_grant"));
	}

	#[tokio::test]
	async fn repeated_logins_produce_identical_requests() {
		let transport = StubTransport::new(200, TOKEN_INFO_BODY);
		let request = TokenRequest::login("test", "test");

		for _ in 0..2 {
			fetch_token(&request, FetchOptions::new().with_transport(transport.clone()))
				.await
				.expect("Stubbed login exchange should succeed.");
		}

		let calls = transport.calls();

		assert_eq!(calls.len(), 2);
		assert_eq!(calls[0], calls[1]);
	}
}
