//! Response payloads and the status-code classifier.
//!
//! [`classify`] splits a [`RawResponse`] on the 200 boundary: a 200 decodes
//! into [`TokenInfo`] and tags the result `success`, anything else (4xx, 5xx,
//! unexpected 2xx/3xx alike) decodes into [`ErrorInfo`] and tags it `error`.
//! Both payloads are pass-through; beyond JSON decoding no field is validated
//! here.

// self
use crate::{_prelude::*, error::DecodeError, http::RawResponse};

/// Success payload issued by the token endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
	/// Bearer access token.
	pub access_token: String,
	/// Auto-login flag forwarded by the server.
	#[serde(rename = "autoLogin")]
	pub auto_login: i64,
	/// Access token lifetime in seconds.
	pub expires_in: u64,
	/// Identifier of the issuing claim.
	pub jti: String,
	/// Subscriber phone number.
	#[serde(rename = "phoneNo")]
	pub phone_no: String,
	/// Refresh token for the next exchange.
	pub refresh_token: String,
	/// Granted scope.
	pub scope: String,
	/// Token type, typically `bearer`.
	pub token_type: String,
	/// Numeric user id.
	#[serde(rename = "userId")]
	pub user_id: i64,
	/// Opaque user identifier string.
	#[serde(rename = "userIdentifier")]
	pub user_identifier: String,
}

/// Failure payload per the OAuth2 error response convention.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
	/// Machine-readable error code.
	pub error: String,
	/// Human-readable description.
	pub error_description: String,
}

/// Classified outcome of one token exchange.
///
/// The tag is determined solely by whether the HTTP status equals 200; the
/// wire form carries it in a `result` field next to `statusCode` and `data`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum TokenResult {
	/// Authorization server answered 200 with a token payload.
	Success {
		/// HTTP status code, always 200 for this variant.
		#[serde(rename = "statusCode")]
		status_code: u16,
		/// Decoded token payload.
		data: TokenInfo,
	},
	/// Authorization server answered non-200 with an error payload.
	Error {
		/// HTTP status code returned by the server.
		#[serde(rename = "statusCode")]
		status_code: u16,
		/// Decoded error payload.
		data: ErrorInfo,
	},
}
impl TokenResult {
	/// HTTP status code carried by either variant.
	pub fn status_code(&self) -> u16 {
		match self {
			Self::Success { status_code, .. } | Self::Error { status_code, .. } => *status_code,
		}
	}

	/// Returns true for the `success` variant.
	pub fn is_success(&self) -> bool {
		matches!(self, Self::Success { .. })
	}

	/// Token payload, when the exchange succeeded.
	pub fn token_info(&self) -> Option<&TokenInfo> {
		match self {
			Self::Success { data, .. } => Some(data),
			Self::Error { .. } => None,
		}
	}

	/// Error payload, when the server rejected the exchange.
	pub fn error_info(&self) -> Option<&ErrorInfo> {
		match self {
			Self::Success { .. } => None,
			Self::Error { data, .. } => Some(data),
		}
	}
}

/// Converts a raw HTTP response into a [`TokenResult`].
///
/// A malformed body is a [`DecodeError`], never a fabricated payload.
pub fn classify(response: &RawResponse) -> Result<TokenResult> {
	if response.status == 200 {
		Ok(TokenResult::Success { status_code: response.status, data: decode(response)? })
	} else {
		Ok(TokenResult::Error { status_code: response.status, data: decode(response)? })
	}
}

fn decode<T>(response: &RawResponse) -> Result<T>
where
	T: for<'de> Deserialize<'de>,
{
	let mut deserializer = serde_json::Deserializer::from_slice(&response.body);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| DecodeError::Body { source, status: response.status }.into())
}
