//! Global failure hook: maps failed response statuses to UI reactions.

// self
use crate::{config::SessionConfig, ext::BrowserBridge};

/// Fixed alert shown when the backend answers 403.
pub const FORBIDDEN_ALERT: &str = "You do not have permission to perform this action.";
/// Fixed alert shown when the backend answers with a 5xx status.
pub const SERVER_ERROR_ALERT: &str = "The server encountered an error. Please try again later.";

/// Reaction selected for one failed response.
///
/// Statuses outside the handled set are deliberately left to per-call handlers;
/// the session-wide hook stays passive for them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureAction {
	/// The session is gone; send the user back to the login page.
	RedirectToLogin,
	/// Surface a blocking alert with the given message.
	Alert(&'static str),
	/// Leave the status to per-call handling.
	Ignore,
}
impl FailureAction {
	/// Selects the reaction for a failed response status.
	pub const fn classify(status: u16) -> Self {
		match status {
			401 => Self::RedirectToLogin,
			403 => Self::Alert(FORBIDDEN_ALERT),
			500.. => Self::Alert(SERVER_ERROR_ALERT),
			_ => Self::Ignore,
		}
	}

	/// Runs the selected side effect through the bridge.
	///
	/// Dispatch never fails and returns nothing; navigation receives the fully
	/// resolved login URL so bridges need no URL logic of their own.
	pub fn dispatch<B>(self, config: &SessionConfig, bridge: &B)
	where
		B: ?Sized + BrowserBridge,
	{
		match self {
			Self::RedirectToLogin => bridge.navigate(&config.login_url()),
			Self::Alert(message) => bridge.alert(message),
			Self::Ignore => {},
		}
	}
}

/// Classifies and dispatches in one step for a failed response status.
pub fn handle_failure<B>(status: u16, config: &SessionConfig, bridge: &B)
where
	B: ?Sized + BrowserBridge,
{
	FailureAction::classify(status).dispatch(config, bridge);
}
