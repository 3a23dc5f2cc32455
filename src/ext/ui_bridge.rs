//! Side-effect contract that lets the session drive the embedding UI without
//! constraining how it is built.

// self
use crate::_prelude::*;

/// Browser-owned primitives the session invokes as opaque side effects.
///
/// Implementations must be `Send + Sync` (typically behind `Arc<B>`) so one
/// bridge can serve every request the session dispatches. All three operations
/// are fire-and-forget: the session never inspects an outcome and the contract
/// offers no failure channel.
pub trait BrowserBridge
where
	Self: Send + Sync,
{
	/// Replaces the current view with the provided location, discarding view state.
	fn navigate(&self, url: &Url);

	/// Shows a blocking, user-visible message and waits for dismissal.
	fn alert(&self, message: &str);

	/// Triggers a single file download for a prepared `href` under `filename`.
	///
	/// Browser shells typically satisfy this by inserting a transient anchor
	/// element with `href`/`download` attributes and removing it immediately
	/// after the click.
	fn download(&self, filename: &str, href: &str);
}
