//! CSRF-aware session plumbing for browser-style API consoles: same-origin token injection
//! and status-routed failure handling behind one shared client object, plus the display and
//! export helpers console tables need.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ext;
pub mod intercept;
pub mod obs;
#[cfg(feature = "reqwest")] pub mod session;
pub mod token;

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		sync::Arc,
	};

	pub use parking_lot::Mutex;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {httpmock as _, tokio as _};
