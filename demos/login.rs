//! Performs a live password-grant exchange against the Magti authorization
//! server, reading credentials from `MYMAGTI_USERNAME` / `MYMAGTI_PASSWORD`.

// std
use std::env;
// crates.io
use color_eyre::Result;
// self
use mymagti_oauth::{
	fetch_token,
	request::{FetchOptions, TokenRequest},
	response::TokenResult,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let username = env::var("MYMAGTI_USERNAME")?;
	let password = env::var("MYMAGTI_PASSWORD")?;
	let request = TokenRequest::login(username, password);

	match fetch_token(&request, FetchOptions::new()).await? {
		TokenResult::Success { status_code, data } => {
			println!("Token issued with status {status_code}.");
			println!(
				"Subscriber {} holds a {} token expiring in {} seconds.",
				data.user_identifier, data.token_type, data.expires_in
			);
		},
		TokenResult::Error { status_code, data } => {
			println!(
				"Exchange rejected with status {status_code}: {} ({}).",
				data.error, data.error_description
			);
		},
	}

	Ok(())
}
