//! Transport primitives for the token exchange.
//!
//! [`TokenTransport`] is the crate's only seam to an HTTP stack: given a
//! ready-to-send [`TokenEndpointRequest`] it performs exactly one POST and
//! returns the status code and raw body as a [`RawResponse`] for
//! classification. The default implementation rides on reqwest; tests and
//! embedders can inject anything satisfying the trait.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// self
use crate::{_prelude::*, error::TransportError, request::TokenEndpointRequest};

/// Boxed future returned by [`TokenTransport::send`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<RawResponse, TransportError>> + 'a + Send>>;

/// Injectable HTTP transport capability.
///
/// Implementations perform a single POST with the descriptor's URL, headers,
/// and body. No retries, timeout enforcement, or cancellation belong here;
/// callers impose those on the injected transport if they need them. A
/// transport failure surfaces as [`TransportError`] and fails the whole
/// exchange.
pub trait TokenTransport
where
	Self: Send + Sync,
{
	/// Performs one HTTP POST and resolves to the raw response.
	fn send(&self, request: TokenEndpointRequest) -> TransportFuture<'_>;
}

/// Response surface the classifier consumes: a status code plus the undecoded
/// body bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
	/// HTTP status code returned by the token endpoint.
	pub status: u16,
	/// Raw response body, expected to be JSON for every status code.
	pub body: Vec<u8>,
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one
/// place. Token requests should not follow redirects, matching OAuth 2.0
/// guidance that token endpoints return results directly; configure any custom
/// [`ReqwestClient`] accordingly before wrapping it.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Wraps an existing [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestTransport {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl TokenTransport for ReqwestTransport {
	fn send(&self, request: TokenEndpointRequest) -> TransportFuture<'_> {
		let client = self.0.clone();

		Box::pin(async move {
			let TokenEndpointRequest { url, headers, body } = request;
			let mut builder = client.post(url).body(body);

			for (name, value) in headers {
				builder = builder.header(name, value);
			}

			let response = builder.send().await.map_err(TransportError::from)?;
			let status = response.status().as_u16();
			let body = response.bytes().await.map_err(TransportError::from)?.to_vec();

			Ok(RawResponse { status, body })
		})
	}
}
