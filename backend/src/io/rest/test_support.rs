//! Shared helpers for router tests.
//!
//! Requests go out as [`client`] unless a test picks another session.

use axum::{
    body::Body,
    http::{header, Method, Request},
    response::Response,
    Router,
};
use serde::de::DeserializeOwned;
use tower::util::ServiceExt; // for `oneshot`
use uuid::Uuid;

use crate::domain::models::{SessionId, YearMonth};
use crate::domain::{Credentials, ScheduleService, ScheduleState, SlotStore};
use crate::io::rest::client_session::SESSION_COOKIE;
use crate::AppState;

/// Demo slots, calendar on September 2024, demo secrets
pub fn test_state() -> AppState {
    let credentials = Credentials::new(
        "admin123",
        vec!["OTP123".to_string(), "OTP456".to_string(), "OTP789".to_string()],
    );
    let state = ScheduleState::new(
        SlotStore::with_demo_slots(),
        YearMonth::new(2024, 9).expect("valid month"),
    );
    AppState::new(ScheduleService::new(state, credentials.clone()), credentials)
}

/// The default test client
pub fn client() -> SessionId {
    SessionId::from(Uuid::from_u128(1))
}

pub fn session_cookie(session: SessionId) -> String {
    format!("{}={}", SESSION_COOKIE, session)
}

/// Send a request as `session`, or as a brand-new client when `None`
pub async fn send_as(
    app: Router,
    session: Option<SessionId>,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(session) = session {
        builder = builder.header(header::COOKIE, session_cookie(session));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn send_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    send_as(app, Some(client()), method, uri, Some(body)).await
}

pub async fn send_empty(app: Router, method: Method, uri: &str) -> Response {
    send_as(app, Some(client()), method, uri, None).await
}

pub async fn read_text(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

pub async fn read_json<T: DeserializeOwned>(response: Response) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Log the default test client in as admin
pub fn login_admin(state: &AppState) {
    state.schedule_service.admin_login(client(), "admin123").unwrap();
}
