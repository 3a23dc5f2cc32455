//! Public extension contracts for the browser-owned side effects.
//!
//! The crate intentionally exposes the [`BrowserBridge`] trait without a concrete
//! production implementation so downstream shells (a WebView host, a headless
//! driver) can bring their own navigation, alert, and download primitives. Only
//! the recording double used by tests and demos ships here.

pub mod recording;
pub mod ui_bridge;

pub use recording::*;
pub use ui_bridge::*;
