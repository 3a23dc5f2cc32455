//! Validated session configuration consumed by the client-wide hooks.
//!
//! The configuration is assembled once at application startup, either through
//! [`SessionConfigBuilder`] or from a JSON payload served next to the rest of the
//! console's deployment config, and then lives unchanged for the session lifetime.

// self
use crate::{_prelude::*, error::ConfigError};

/// Default login path served by the console backend.
pub const DEFAULT_LOGIN_PATH: &str = "/auth/login";
/// Default request header carrying the CSRF token.
pub const DEFAULT_TOKEN_HEADER: &str = "X-CSRFToken";
/// Default `<meta>` tag name exposing the CSRF token in page markup.
pub const DEFAULT_TOKEN_META_NAME: &str = "csrf-token";

/// Immutable configuration for one console session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
	/// Origin (scheme + host + port) the console pages are served from.
	pub origin: Url,
	/// Absolute path of the login page users are sent to on 401 responses.
	#[serde(default = "default_login_path")]
	pub login_path: String,
	/// Header name the token is attached under on mutating requests.
	#[serde(default = "default_token_header")]
	pub token_header: String,
	/// `<meta>` tag name the token is scanned from in served markup.
	#[serde(default = "default_token_meta_name")]
	pub token_meta_name: String,
}
impl SessionConfig {
	/// Creates a new builder for the provided origin.
	pub fn builder(origin: Url) -> SessionConfigBuilder {
		SessionConfigBuilder::new(origin)
	}

	/// Builds a configuration with default paths and names for the origin.
	pub fn new(origin: Url) -> Result<Self, ConfigError> {
		Self::builder(origin).build()
	}

	/// Parses and validates a configuration from a JSON payload.
	///
	/// Malformed payloads report the offending field path in the error source.
	pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ConfigError> {
		let mut deserializer = serde_json::Deserializer::from_slice(bytes);
		let config: Self = serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| ConfigError::Parse { source })?;

		config.validate()?;

		Ok(config)
	}

	/// Returns the fully resolved login URL (origin + login path).
	///
	/// Configurations deserialized without validation degrade to the bare origin
	/// when the stored path cannot be joined.
	pub fn login_url(&self) -> Url {
		self.origin.join(&self.login_path).unwrap_or_else(|_| self.origin.clone())
	}

	/// Checks whether a request target shares the page origin (scheme + host + port).
	pub fn is_same_origin(&self, target: &Url) -> bool {
		target.origin() == self.origin.origin()
	}

	fn validate(&self) -> Result<(), ConfigError> {
		if !matches!(self.origin.scheme(), "http" | "https") {
			return Err(ConfigError::OriginNotHttp { scheme: self.origin.scheme().into() });
		}
		if self.origin.cannot_be_a_base() {
			return Err(ConfigError::OriginOpaque);
		}
		if !self.login_path.starts_with('/') {
			return Err(ConfigError::LoginPathNotAbsolute { path: self.login_path.clone() });
		}
		if self.token_header.is_empty() {
			return Err(ConfigError::EmptyTokenHeader);
		}
		if self.token_meta_name.is_empty() {
			return Err(ConfigError::EmptyTokenMetaName);
		}

		Ok(())
	}
}

/// Builder API for assembling a validated [`SessionConfig`].
#[derive(Clone, Debug)]
pub struct SessionConfigBuilder {
	origin: Url,
	login_path: String,
	token_header: String,
	token_meta_name: String,
}
impl SessionConfigBuilder {
	/// Starts a builder with default paths and names for the provided origin.
	pub fn new(origin: Url) -> Self {
		Self {
			origin,
			login_path: DEFAULT_LOGIN_PATH.into(),
			token_header: DEFAULT_TOKEN_HEADER.into(),
			token_meta_name: DEFAULT_TOKEN_META_NAME.into(),
		}
	}

	/// Overrides the login path users are sent to on 401 responses.
	pub fn login_path(mut self, path: impl Into<String>) -> Self {
		self.login_path = path.into();

		self
	}

	/// Overrides the header name the token is attached under.
	pub fn token_header(mut self, header: impl Into<String>) -> Self {
		self.token_header = header.into();

		self
	}

	/// Overrides the `<meta>` tag name the token is scanned from.
	pub fn token_meta_name(mut self, name: impl Into<String>) -> Self {
		self.token_meta_name = name.into();

		self
	}

	/// Validates the assembled configuration.
	pub fn build(self) -> Result<SessionConfig, ConfigError> {
		let config = SessionConfig {
			origin: self.origin,
			login_path: self.login_path,
			token_header: self.token_header,
			token_meta_name: self.token_meta_name,
		};

		config.validate()?;

		Ok(config)
	}
}

fn default_login_path() -> String {
	DEFAULT_LOGIN_PATH.into()
}

fn default_token_header() -> String {
	DEFAULT_TOKEN_HEADER.into()
}

fn default_token_meta_name() -> String {
	DEFAULT_TOKEN_META_NAME.into()
}
