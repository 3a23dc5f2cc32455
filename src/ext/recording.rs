//! Recording [`BrowserBridge`] double for tests and demos.

// self
use crate::{_prelude::*, ext::BrowserBridge};

/// Side effect captured by [`RecordingBridge`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
	/// The session asked the UI to navigate to a location.
	Navigated(Url),
	/// The session asked the UI to show a blocking alert.
	Alerted(String),
	/// The session asked the UI to download a prepared payload.
	Downloaded {
		/// Filename the download was requested under.
		filename: String,
		/// Prepared `href` handed to the UI.
		href: String,
	},
}

/// Bridge double that records every side effect for assertions.
#[derive(Debug, Default)]
pub struct RecordingBridge(Mutex<Vec<UiEvent>>);
impl RecordingBridge {
	/// Returns a snapshot of the captured events in dispatch order.
	pub fn events(&self) -> Vec<UiEvent> {
		self.0.lock().clone()
	}

	/// Drops all captured events.
	pub fn reset(&self) {
		self.0.lock().clear();
	}

	fn push(&self, event: UiEvent) {
		self.0.lock().push(event);
	}
}
impl BrowserBridge for RecordingBridge {
	fn navigate(&self, url: &Url) {
		self.push(UiEvent::Navigated(url.clone()));
	}

	fn alert(&self, message: &str) {
		self.push(UiEvent::Alerted(message.into()));
	}

	fn download(&self, filename: &str, href: &str) {
		self.push(UiEvent::Downloaded { filename: filename.into(), href: href.into() });
	}
}
