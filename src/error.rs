//! Error types shared across the request builder, transport, and classifier.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`enum@Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
///
/// A non-200 answer from the authorization server is not an error; it
/// classifies into [`TokenResult::Error`](crate::response::TokenResult)
/// so callers can branch without exception handling.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Response body could not be decoded.
	#[error(transparent)]
	Decode(#[from] DecodeError),
}

/// Configuration and request-building failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Endpoint path could not be resolved against the base URL.
	#[error("Token endpoint URL could not be resolved.")]
	InvalidEndpoint {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// No transport was injected and no default transport is compiled in.
	#[error("No HTTP transport is available; inject one via FetchOptions.")]
	MissingTransport,
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the token endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the token endpoint.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Failures raised while decoding the token endpoint's response body.
///
/// The upstream server is expected to answer with JSON for every status code;
/// a body that is not JSON or does not match the expected payload schema fails
/// the whole exchange instead of being coerced into a fabricated result.
#[derive(Debug, ThisError)]
pub enum DecodeError {
	/// Body is not valid JSON or does not match the expected payload schema.
	#[error("Token endpoint returned a body that does not decode as the expected JSON shape.")]
	Body {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response that carried the body.
		status: u16,
	},
}
