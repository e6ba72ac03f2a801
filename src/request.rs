//! Logical token requests and the form-encoded request builder.
//!
//! [`build_request`] merges a [`TokenRequest`] with the grant's static
//! defaults and any per-call [`FetchOptions`] overrides into a ready-to-send
//! [`TokenEndpointRequest`]. Field ordering in the encoded body is stable so
//! serialized output stays byte-for-byte reproducible across calls.

// crates.io
use url::form_urlencoded;
// self
use crate::{
	_prelude::*,
	error::ConfigError,
	grant::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, GrantDefaults, GrantKind},
	http::TokenTransport,
};

/// A logical token request, tagged by grant kind.
///
/// Credential contents are opaque to this layer; empty or malformed values
/// pass through verbatim and the authorization server is the sole validator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenRequest {
	/// Password grant carrying the subscriber's credentials.
	Login {
		/// Subscriber username.
		username: String,
		/// Subscriber password.
		password: String,
	},
	/// Refresh grant carrying a previously issued refresh token.
	Refresh {
		/// Refresh token from a prior exchange.
		refresh_token: String,
	},
}
impl TokenRequest {
	/// Builds a password-grant request.
	pub fn login(username: impl Into<String>, password: impl Into<String>) -> Self {
		Self::Login { username: username.into(), password: password.into() }
	}

	/// Builds a refresh-grant request.
	pub fn refresh(refresh_token: impl Into<String>) -> Self {
		Self::Refresh { refresh_token: refresh_token.into() }
	}

	/// Grant kind encoded in the request's tag.
	pub fn grant_kind(&self) -> GrantKind {
		match self {
			Self::Login { .. } => GrantKind::Login,
			Self::Refresh { .. } => GrantKind::Refresh,
		}
	}

	/// Grant-specific form fields, in wire order.
	fn form_fields(&self) -> Vec<(&'static str, &str)> {
		match self {
			Self::Login { username, password } =>
				vec![("username", username.as_str()), ("password", password.as_str())],
			Self::Refresh { refresh_token } => vec![("refresh_token", refresh_token.as_str())],
		}
	}
}

/// Per-call configuration bundle; absent fields fall back to module defaults.
///
/// Constructed fresh for each call and discarded afterwards; the bundle holds
/// no persistent identity.
#[derive(Clone, Default)]
pub struct FetchOptions {
	/// Injected transport; defaults to the crate's reqwest transport.
	pub transport: Option<Arc<dyn TokenTransport>>,
	/// Base URL the grant's relative endpoint path is joined against.
	pub base_url: Option<Url>,
	/// `Authorization` header override for this call.
	pub authorization: Option<String>,
	/// `User-Agent` header override for this call.
	pub user_agent: Option<String>,
}
impl FetchOptions {
	/// Creates an empty bundle; every field falls back to its default.
	pub fn new() -> Self {
		Self::default()
	}

	/// Overrides the transport used for the call.
	pub fn with_transport(mut self, transport: Arc<dyn TokenTransport>) -> Self {
		self.transport = Some(transport);

		self
	}

	/// Overrides the base URL the endpoint path is joined against.
	pub fn with_base_url(mut self, base_url: Url) -> Self {
		self.base_url = Some(base_url);

		self
	}

	/// Overrides the `Authorization` header for the call.
	pub fn with_authorization(mut self, authorization: impl Into<String>) -> Self {
		self.authorization = Some(authorization.into());

		self
	}

	/// Overrides the `User-Agent` header for the call.
	pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = Some(user_agent.into());

		self
	}
}
impl Debug for FetchOptions {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("FetchOptions")
			.field("transport", &self.transport.as_ref().map(|_| ".."))
			.field("base_url", &self.base_url)
			.field("authorization", &self.authorization)
			.field("user_agent", &self.user_agent)
			.finish()
	}
}

/// Ready-to-send POST descriptor produced by [`build_request`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenEndpointRequest {
	/// Fully resolved token endpoint URL.
	pub url: Url,
	/// Ordered header list; an overridden key replaces its default entirely.
	pub headers: Vec<(&'static str, String)>,
	/// Form-urlencoded body with stable field ordering.
	pub body: String,
}
impl TokenEndpointRequest {
	/// Returns the value of the first header matching `name`, ignoring case.
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(header, _)| header.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}
}

/// Assembles the POST descriptor for a token request.
///
/// The body always opens with `client_id` and `grant_type` from the grant's
/// defaults, followed by the grant-specific fields. The URL joins the base
/// (override or [`DEFAULT_BASE_URL`]) with the grant's relative endpoint
/// path. Header defaults are `User-Agent`, `Authorization`, and
/// `Content-Type`; explicit overrides win.
pub fn build_request(
	request: &TokenRequest,
	options: &FetchOptions,
) -> Result<TokenEndpointRequest> {
	let defaults = GrantDefaults::of(request.grant_kind());
	let mut serializer = form_urlencoded::Serializer::new(String::new());

	serializer.append_pair("client_id", defaults.client_id);
	serializer.append_pair("grant_type", defaults.grant_type);

	for (key, value) in request.form_fields() {
		serializer.append_pair(key, value);
	}

	let body = serializer.finish();
	let base = match &options.base_url {
		Some(base) => base.clone(),
		None => Url::parse(DEFAULT_BASE_URL)
			.map_err(|source| ConfigError::InvalidEndpoint { source })?,
	};
	let url = base.join(defaults.url).map_err(|source| ConfigError::InvalidEndpoint { source })?;
	let user_agent = options.user_agent.clone().unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());
	let authorization =
		options.authorization.clone().unwrap_or_else(|| defaults.authorization.to_owned());
	let headers = vec![
		("User-Agent", user_agent),
		("Authorization", authorization),
		("Content-Type", "application/x-www-form-urlencoded".to_owned()),
	];

	Ok(TokenEndpointRequest { url, headers, body })
}
