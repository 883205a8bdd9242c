//! # Gate Endpoints
//!
//! The two original widget endpoints. They compare the submitted secret with
//! the configured one and reply; neither touches the schedule.
//!
//! Bodies are read leniently: a request that is not JSON, or has no body,
//! counts as an empty form and is rejected by the secret check rather than
//! by the extractor.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::Json,
    routing::post,
    Router,
};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::AppState;
use shared::{AdminLoginRequest, ApiResponse, BookAppointmentRequest};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin-login", post(admin_login))
        .route("/book-appointment", post(book_appointment))
}

/// POST /api/admin-login
pub async fn admin_login(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<ApiResponse>) {
    info!("POST /api/admin-login");

    let request: AdminLoginRequest = match read_form(&headers, &body) {
        Ok(request) => request,
        Err(rejection) => return rejection,
    };

    if state.credentials.verify_admin_password(&request.password) {
        (StatusCode::OK, Json(ApiResponse::ok("Login successful")))
    } else {
        (StatusCode::UNAUTHORIZED, Json(ApiResponse::failed("Incorrect password")))
    }
}

/// POST /api/book-appointment
pub async fn book_appointment(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<ApiResponse>) {
    let request: BookAppointmentRequest = match read_form(&headers, &body) {
        Ok(request) => request,
        Err(rejection) => return rejection,
    };
    info!(
        "POST /api/book-appointment - date: {}, time: {}",
        request.date, request.time
    );

    if state
        .credentials
        .accepts_one_time_password(&request.one_time_password)
    {
        (StatusCode::OK, Json(ApiResponse::ok("Booking successful")))
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::failed("Invalid one-time password")),
        )
    }
}

/// JSON bodies are parsed; anything else yields the empty form.
/// Malformed JSON is still a 400.
fn read_form<T>(headers: &HeaderMap, body: &Bytes) -> Result<T, (StatusCode, Json<ApiResponse>)>
where
    T: DeserializeOwned + Default,
{
    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map_or(false, |value| value.starts_with("application/json"));

    if !is_json || body.is_empty() {
        return Ok(T::default());
    }

    serde_json::from_slice(body).map_err(|e| {
        warn!("Rejecting malformed JSON body: {}", e);
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::failed("Malformed JSON body")),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::rest::test_support::{read_json, send_json, test_state};
    use axum::http::Method;
    use serde_json::json;

    fn app() -> Router {
        router().with_state(test_state())
    }

    #[tokio::test]
    async fn test_admin_login_success() {
        let response = send_json(app(), Method::POST, "/admin-login", json!({"password": "admin123"})).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: ApiResponse = read_json(response).await;
        assert_eq!(body, ApiResponse::ok("Login successful"));
    }

    #[tokio::test]
    async fn test_admin_login_wrong_password() {
        let response = send_json(app(), Method::POST, "/admin-login", json!({"password": "wrong"})).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = read_json(response).await;
        assert_eq!(body, json!({"success": false, "message": "Incorrect password"}));
    }

    #[tokio::test]
    async fn test_admin_login_missing_password_is_rejected() {
        let response = send_json(app(), Method::POST, "/admin-login", json!({})).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_book_appointment_valid_otp() {
        let request = json!({
            "date": "2024-09-15",
            "time": "09:00 AM",
            "email": "visitor@example.com",
            "oneTimePassword": "OTP789"
        });
        let response = send_json(app(), Method::POST, "/book-appointment", request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: ApiResponse = read_json(response).await;
        assert_eq!(body, ApiResponse::ok("Booking successful"));
    }

    #[tokio::test]
    async fn test_book_appointment_otp_is_case_sensitive() {
        let request = json!({
            "date": "2024-09-15",
            "time": "09:00 AM",
            "email": "",
            "oneTimePassword": "otp123"
        });
        let response = send_json(app(), Method::POST, "/book-appointment", request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = read_json(response).await;
        assert_eq!(body, json!({"success": false, "message": "Invalid one-time password"}));
    }

    #[tokio::test]
    async fn test_book_appointment_does_not_touch_schedule() {
        let state = test_state();
        let before = state.schedule_service.availability().unwrap();

        let request = json!({"date": "2024-09-15", "time": "09:00 AM", "oneTimePassword": "OTP123"});
        let response = send_json(router().with_state(state.clone()), Method::POST, "/book-appointment", request).await;
        assert_eq!(response.status(), StatusCode::OK);

        assert_eq!(state.schedule_service.availability().unwrap(), before);
    }

    #[tokio::test]
    async fn test_invalid_json() {
        use axum::{body::Body, http::Request};
        use tower::util::ServiceExt;

        let request = Request::builder()
            .method(Method::POST)
            .uri("/admin-login")
            .header("content-type", "application/json")
            .body(Body::from("invalid json"))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_non_json_body_counts_as_empty_form() {
        use crate::io::rest::test_support::read_text;
        use axum::{body::Body, http::Request};
        use tower::util::ServiceExt;

        let request = Request::builder()
            .method(Method::POST)
            .uri("/admin-login")
            .header("content-type", "text/plain")
            .body(Body::from("password=admin123"))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let request = Request::builder()
            .method(Method::POST)
            .uri("/book-appointment")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            read_text(response).await,
            r#"{"success":false,"message":"Invalid one-time password"}"#
        );
    }
}
