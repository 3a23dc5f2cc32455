//! Optional observability helpers for session requests.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `console_session.request` with the
//!   `method` and `stage` (call site) fields.
//! - Enable `metrics` to increment the `console_session_request_total` counter for every
//!   attempt/success/failure and `console_session_failure_total` for every failed status,
//!   labeled by coarse failure class.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Request lifecycle labels recorded for each dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestOutcome {
	/// Entry to the dispatch loop.
	Attempt,
	/// Response carried a passing status.
	Success,
	/// Transport failure or failing status.
	Failure,
}
impl RequestOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestOutcome::Attempt => "attempt",
			RequestOutcome::Success => "success",
			RequestOutcome::Failure => "failure",
		}
	}
}
impl Display for RequestOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Coarse class of a failed response status, matching the failure hook's branches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureClass {
	/// 401 responses.
	Unauthorized,
	/// 403 responses.
	Forbidden,
	/// 5xx responses.
	ServerError,
	/// Any other failing status.
	Other,
}
impl FailureClass {
	/// Maps a failed response status onto its class.
	pub const fn from_status(status: u16) -> Self {
		match status {
			401 => FailureClass::Unauthorized,
			403 => FailureClass::Forbidden,
			500.. => FailureClass::ServerError,
			_ => FailureClass::Other,
		}
	}

	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FailureClass::Unauthorized => "unauthorized",
			FailureClass::Forbidden => "forbidden",
			FailureClass::ServerError => "server_error",
			FailureClass::Other => "other",
		}
	}
}
impl Display for FailureClass {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
