//! Demonstrates injecting a custom transport in place of the default reqwest
//! client.
//!
//! 1. Implement [`TokenTransport`] over whatever HTTP stack is at hand and
//!    resolve each call to a [`RawResponse`].
//! 2. Hand it to [`fetch_token`] through [`FetchOptions::with_transport`].
//! 3. Transport failures surface as [`TransportError`] and fail the call;
//!    non-200 answers stay ordinary [`TokenResult::Error`] values.

// std
use std::{
	io::{Error as IoError, ErrorKind},
	sync::Arc,
};
// crates.io
use color_eyre::Result;
// self
use mymagti_oauth::{
	error::TransportError,
	fetch_token,
	http::{RawResponse, TokenTransport, TransportFuture},
	request::{FetchOptions, TokenEndpointRequest, TokenRequest},
	response::TokenResult,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let request = TokenRequest::refresh("demo-refresh-token");
	let options = FetchOptions::new().with_transport(Arc::new(CannedTransport::Success));

	match fetch_token(&request, options).await? {
		TokenResult::Success { status_code, data } => {
			println!("Canned transport issued a token with status {status_code}.");
			println!("Access token: {}.", data.access_token);
		},
		TokenResult::Error { status_code, data } => {
			println!("Canned transport rejected the grant with status {status_code}: {}.", data.error);
		},
	}

	let rejecting = FetchOptions::new().with_transport(Arc::new(CannedTransport::InvalidGrant));

	match fetch_token(&request, rejecting).await? {
		TokenResult::Success { .. } => println!("Canned transport unexpectedly issued a token."),
		TokenResult::Error { status_code, data } => {
			println!(
				"Grant rejection classified as a normal result: status {status_code}, {} ({}).",
				data.error, data.error_description
			);
		},
	}

	let unreachable = FetchOptions::new().with_transport(Arc::new(CannedTransport::Unreachable));

	match fetch_token(&request, unreachable).await {
		Ok(_) => println!("Unreachable transport unexpectedly produced a result."),
		Err(e) => println!("Transport failure propagated to the caller: {e}."),
	}

	Ok(())
}

#[derive(Clone, Copy)]
enum CannedTransport {
	Success,
	InvalidGrant,
	Unreachable,
}
impl TokenTransport for CannedTransport {
	fn send(&self, request: TokenEndpointRequest) -> TransportFuture<'_> {
		println!("POST {} ({} bytes of form data).", request.url, request.body.len());

		let behavior = *self;

		Box::pin(async move {
			match behavior {
				CannedTransport::Success => Ok(RawResponse {
					status: 200,
					body: b"{\"access_token\":\"demo-access\",\"autoLogin\":0,\"expires_in\":900,\"jti\":\"demo-jti\",\"phoneNo\":\"599000000\",\"refresh_token\":\"demo-next-refresh\",\"scope\":\"read\",\"token_type\":\"bearer\",\"userId\":42,\"userIdentifier\":\"demo-user\"}".to_vec(),
				}),
				CannedTransport::InvalidGrant => Ok(RawResponse {
					status: 400,
					body: b"{\"error\":\"invalid_grant\",\"error_description\":\"refresh token expired\"}".to_vec(),
				}),
				CannedTransport::Unreachable => Err(TransportError::Io(IoError::new(
					ErrorKind::ConnectionRefused,
					"token endpoint unreachable",
				))),
			}
		})
	}
}
