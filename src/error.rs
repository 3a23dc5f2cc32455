//! Session-level error types shared across configuration, transport, and helpers.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical session error exposed by public APIs.
///
/// The client-wide hooks themselves never raise; only session construction and
/// transport dispatch produce values of this type.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
}

/// Configuration and validation failures raised by the session.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Outbound request could not be assembled.
	#[error("Outbound request could not be assembled.")]
	RequestBuild {
		/// Underlying request builder failure.
		#[source]
		source: BoxError,
	},
	/// Request body could not be serialized to JSON.
	#[error("Request body could not be serialized.")]
	RequestBody {
		/// Structured serialization failure.
		#[source]
		source: serde_json::Error,
	},
	/// Console path failed to resolve against the configured origin.
	#[error("Console path failed to resolve against the origin.")]
	RequestUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},

	/// Configured origin must use http or https.
	#[error("Origin scheme `{scheme}` is not http(s).")]
	OriginNotHttp {
		/// Scheme carried by the rejected origin.
		scheme: String,
	},
	/// Configured origin cannot serve as a base for console paths.
	#[error("Origin cannot be used as a base URL.")]
	OriginOpaque,
	/// Login path must be absolute.
	#[error("Login path `{path}` must start with `/`.")]
	LoginPathNotAbsolute {
		/// Rejected path value.
		path: String,
	},
	/// Token header name is empty.
	#[error("Token header name cannot be empty.")]
	EmptyTokenHeader,
	/// Token meta tag name is empty.
	#[error("Token meta tag name cannot be empty.")]
	EmptyTokenMetaName,
	/// Config payload is not valid JSON for a session configuration.
	#[error("Config payload is not a valid session configuration.")]
	Parse {
		/// Structured parsing failure with the offending field path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}

	/// Wraps a request builder failure inside [`ConfigError`].
	pub fn request_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::RequestBuild { source: Box::new(src) }
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the console backend.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the console backend.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::error::Error as StdError;
	// self
	use super::*;

	#[test]
	fn config_error_converts_into_session_error_with_source() {
		let config_error = ConfigError::OriginNotHttp { scheme: "ftp".into() };
		let session_error: Error = config_error.into();

		assert!(matches!(session_error, Error::Config(_)));
		assert!(session_error.to_string().contains("ftp"));
	}

	#[test]
	fn transport_error_preserves_io_source() {
		let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "peer reset");
		let transport: TransportError = io.into();
		let session_error: Error = transport.into();

		let source = StdError::source(&session_error)
			.expect("Session error should expose the transport error as its source.");

		assert!(source.to_string().contains("console backend"));
	}
}
