//! The shared, client-wide session object and its dispatch loop.
//!
//! One [`Session`] is created at application startup and lives for the page or
//! process lifetime. Every request issued through it passes the same two hooks:
//! the before-send CSRF hook and the global failure hook. The session owns no
//! retry, timeout, or cancellation policy; configure those on the caller-supplied
//! reqwest client.

// crates.io
use reqwest::{
	Method, Request, RequestBuilder, Response,
	header::{CONTENT_TYPE, HeaderValue},
};
// self
use crate::{
	_prelude::*,
	config::SessionConfig,
	error::{ConfigError, TransportError},
	ext::BrowserBridge,
	intercept::{attach_csrf_token, handle_failure},
	obs::{FailureClass, RequestOutcome, RequestSpan, record_failure_class, record_request_outcome},
	token::{TokenSlot, scan_meta_token},
};

/// Session specialized for a type-erased UI bridge.
pub type DynSession = Session<dyn BrowserBridge>;

/// Coordinates console requests against one backend origin.
///
/// The session owns the HTTP client, the validated configuration, the cached
/// CSRF token, and the UI bridge so the hooks can run uniformly on every
/// dispatch instead of being re-implemented per call site. Clones share the
/// token cache.
pub struct Session<B>
where
	B: ?Sized + BrowserBridge,
{
	/// HTTP client used for every outbound console request.
	pub http_client: ReqwestClient,
	/// Validated configuration the hooks consult.
	pub config: SessionConfig,
	/// Cached CSRF token shared with the before-send hook.
	pub token: TokenSlot,
	/// UI bridge receiving navigation, alert, and download side effects.
	pub bridge: Arc<B>,
}
impl<B> Session<B>
where
	B: ?Sized + BrowserBridge,
{
	/// Creates a session that reuses the caller-provided reqwest client.
	pub fn with_http_client(
		config: SessionConfig,
		bridge: impl Into<Arc<B>>,
		http_client: ReqwestClient,
	) -> Self {
		Self { http_client, config, token: TokenSlot::default(), bridge: bridge.into() }
	}

	/// Creates a session with a freshly built default reqwest client.
	pub fn new(config: SessionConfig, bridge: impl Into<Arc<B>>) -> Result<Self> {
		let http_client =
			ReqwestClient::builder().build().map_err(ConfigError::http_client_build)?;

		Ok(Self::with_http_client(config, bridge, http_client))
	}

	/// Scans served page markup for the configured token meta tag and caches the
	/// result. Returns whether a token was found.
	///
	/// An absent tag clears the cache; absence is a valid, non-exceptional state
	/// and simply leaves subsequent mutating requests without the header.
	pub fn adopt_document(&self, document: &str) -> bool {
		let token = scan_meta_token(document, &self.config.token_meta_name);
		let found = !token.is_empty();

		self.token.store(token);

		found
	}

	/// Returns a clone of the cached CSRF token, if any.
	pub fn token(&self) -> Option<String> {
		self.token.read()
	}

	/// Starts a request for a console path resolved against the configured origin.
	pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
		let url = self
			.config
			.origin
			.join(path)
			.map_err(|source| ConfigError::RequestUrl { source })?;

		Ok(self.http_client.request(method, url))
	}

	/// Starts a GET request for a console path.
	pub fn get(&self, path: &str) -> Result<RequestBuilder> {
		self.request(Method::GET, path)
	}

	/// Starts a POST request for a console path with a JSON body.
	pub fn post_json<T>(&self, path: &str, body: &T) -> Result<RequestBuilder>
	where
		T: ?Sized + Serialize,
	{
		let payload =
			serde_json::to_vec(body).map_err(|source| ConfigError::RequestBody { source })?;
		let builder = self
			.request(Method::POST, path)?
			.header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
			.body(payload);

		Ok(builder)
	}

	/// Builds and dispatches a request assembled with [`Session::request`] and
	/// friends.
	pub async fn send(&self, builder: RequestBuilder) -> Result<Response> {
		let request = builder.build().map_err(ConfigError::request_build)?;

		self.execute(request).await
	}

	/// Dispatches one request through both client-wide hooks.
	///
	/// The before-send hook runs first; transport errors map to
	/// [`TransportError`]; a response with a failing status is routed through the
	/// failure hook exactly once and then returned to the caller unchanged, so
	/// per-call handling of unrouted statuses stays possible.
	pub async fn execute(&self, mut request: Request) -> Result<Response> {
		let span = RequestSpan::new(request.method().as_str(), "execute");
		let dispatch = async {
			record_request_outcome(RequestOutcome::Attempt);
			attach_csrf_token(&mut request, &self.config, &self.token);

			let response = match self.http_client.execute(request).await {
				Ok(response) => response,
				Err(error) => {
					record_request_outcome(RequestOutcome::Failure);

					return Err(TransportError::from(error).into());
				},
			};
			let status = response.status();

			if status.is_client_error() || status.is_server_error() {
				record_request_outcome(RequestOutcome::Failure);
				record_failure_class(FailureClass::from_status(status.as_u16()));
				handle_failure(status.as_u16(), &self.config, self.bridge.as_ref());
			} else {
				record_request_outcome(RequestOutcome::Success);
			}

			Ok(response)
		};

		span.instrument(dispatch).await
	}
}
impl<B> Clone for Session<B>
where
	B: ?Sized + BrowserBridge,
{
	fn clone(&self) -> Self {
		Self {
			http_client: self.http_client.clone(),
			config: self.config.clone(),
			token: self.token.clone(),
			bridge: self.bridge.clone(),
		}
	}
}
impl<B> Debug for Session<B>
where
	B: ?Sized + BrowserBridge,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Session")
			.field("config", &self.config)
			.field("token_cached", &self.token.read().is_some())
			.finish()
	}
}
