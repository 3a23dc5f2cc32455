// std
use std::sync::Arc;
// crates.io
use httpmock::prelude::*;
use url::Url;
// self
use console_session::{
	config::SessionConfig,
	ext::{RecordingBridge, UiEvent},
	intercept::{FORBIDDEN_ALERT, SERVER_ERROR_ALERT},
	session::Session,
};

fn build_session(server: &MockServer) -> (Session<RecordingBridge>, Arc<RecordingBridge>) {
	let origin = Url::parse(&server.base_url()).expect("Mock server origin should parse.");
	let config = SessionConfig::new(origin).expect("Session config should build for the mock origin.");
	let bridge = Arc::new(RecordingBridge::default());
	let session = Session::new(config, bridge.clone())
		.expect("Session should build with the default HTTP client.");

	(session, bridge)
}

async fn fetch_status(session: &Session<RecordingBridge>, server: &MockServer, status: u16) -> u16 {
	let path = format!("/dashboard/api/status/{status}");

	server
		.mock_async(|when, then| {
			when.method(GET).path(path.clone());
			then.status(status);
		})
		.await;

	let builder = session.get(&path).expect("Console path should resolve.");
	let response = session.send(builder).await.expect("Dispatch should reach the mock server.");

	response.status().as_u16()
}

#[tokio::test]
async fn unauthorized_navigates_to_the_login_page() {
	let server = MockServer::start_async().await;
	let (session, bridge) = build_session(&server);
	let status = fetch_status(&session, &server, 401).await;

	// The response still reaches the caller after the hook ran.
	assert_eq!(status, 401);

	let login = Url::parse(&server.url("/auth/login")).expect("Login URL should parse.");

	assert_eq!(bridge.events(), vec![UiEvent::Navigated(login)]);
}

#[tokio::test]
async fn forbidden_alerts_with_the_fixed_message() {
	let server = MockServer::start_async().await;
	let (session, bridge) = build_session(&server);
	let status = fetch_status(&session, &server, 403).await;

	assert_eq!(status, 403);
	assert_eq!(bridge.events(), vec![UiEvent::Alerted(FORBIDDEN_ALERT.into())]);
}

#[tokio::test]
async fn server_errors_alert_with_the_fixed_message() {
	let server = MockServer::start_async().await;
	let (session, bridge) = build_session(&server);

	assert_eq!(fetch_status(&session, &server, 500).await, 500);
	assert_eq!(fetch_status(&session, &server, 503).await, 503);
	assert_eq!(bridge.events(), vec![
		UiEvent::Alerted(SERVER_ERROR_ALERT.into()),
		UiEvent::Alerted(SERVER_ERROR_ALERT.into()),
	]);
}

#[tokio::test]
async fn passing_statuses_trigger_no_ui_side_effects() {
	let server = MockServer::start_async().await;
	let (session, bridge) = build_session(&server);

	assert_eq!(fetch_status(&session, &server, 200).await, 200);
	assert_eq!(fetch_status(&session, &server, 204).await, 204);
	assert!(bridge.events().is_empty());
}

#[tokio::test]
async fn unrouted_failure_statuses_are_left_to_per_call_handlers() {
	let server = MockServer::start_async().await;
	let (session, bridge) = build_session(&server);

	assert_eq!(fetch_status(&session, &server, 404).await, 404);
	assert_eq!(fetch_status(&session, &server, 409).await, 409);
	assert!(bridge.events().is_empty());
}

#[tokio::test]
async fn the_failure_hook_runs_once_per_failed_request() {
	let server = MockServer::start_async().await;
	let (session, bridge) = build_session(&server);

	fetch_status(&session, &server, 403).await;
	fetch_status(&session, &server, 403).await;

	assert_eq!(bridge.events().len(), 2);
}
