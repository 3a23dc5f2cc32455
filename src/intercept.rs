//! Client-wide hooks applied uniformly to every request the session dispatches.
//!
//! Two hooks exist, registered once per session and mirroring a browser client's
//! shared configuration object: a before-send hook that attaches the CSRF token
//! to mutating same-origin requests, and a global failure hook that routes
//! failed statuses to the UI. Neither hook carries state across invocations and
//! neither can fail.

pub mod failure;
#[cfg(feature = "reqwest")] pub mod request;

pub use failure::*;
#[cfg(feature = "reqwest")] pub use request::*;
