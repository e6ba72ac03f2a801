//! Token exchange client for the MyMagti authorization server - password and
//! refresh-token grants over an injectable HTTP transport.
//!
//! The crate is a thin protocol adapter: a static grant configuration table, a
//! form-encoded request builder, one transport round trip, and a response
//! classifier that splits on the 200 boundary. See [`fetch_token`] for the
//! single entry point.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod error;
pub mod flows;
pub mod grant;
pub mod http;
pub mod request;
pub mod response;

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use flows::fetch_token;

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
