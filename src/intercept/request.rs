//! Before-send hook: attaches the cached CSRF token to mutating same-origin requests.

// crates.io
use reqwest::{
	Method, Request,
	header::{HeaderName, HeaderValue},
};
// self
use crate::{config::SessionConfig, token::TokenSlot};

/// Methods defined not to mutate server state; they never carry the token.
pub const SAFE_METHODS: [Method; 4] = [Method::GET, Method::HEAD, Method::OPTIONS, Method::TRACE];

/// Checks whether a method belongs to the safe/idempotent set.
pub fn is_safe_method(method: &Method) -> bool {
	SAFE_METHODS.contains(method)
}

/// Attaches the cached token header when the request both mutates state and
/// targets the configured origin. Returns whether the header was attached.
///
/// Safe methods, cross-origin targets, an empty slot, and a token that does not
/// form a valid header name/value pair all leave the request untouched; the
/// hook has no failure channel by contract.
pub fn attach_csrf_token(request: &mut Request, config: &SessionConfig, slot: &TokenSlot) -> bool {
	if is_safe_method(request.method()) {
		return false;
	}
	if !config.is_same_origin(request.url()) {
		return false;
	}

	let Some(token) = slot.read() else { return false };
	let Ok(name) = HeaderName::from_bytes(config.token_header.as_bytes()) else { return false };
	let Ok(value) = HeaderValue::from_str(&token) else { return false };

	request.headers_mut().insert(name, value);

	true
}
