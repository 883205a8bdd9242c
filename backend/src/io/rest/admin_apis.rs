//! # Admin Session Endpoints
//!
//! Login, logout and status for the admin session that unlocks slot
//! management and export, plus the booked-meetings listing. A login only
//! unlocks the client that made it.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use tracing::info;

use crate::error::BookingError;
use crate::io::rest::client_session::ClientId;
use crate::io::rest::mappers::booking_mapper::BookingMapper;
use crate::AppState;
use shared::{AdminLoginRequest, AdminSessionResponse, BookingListResponse};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/login", post(login))
        .route("/admin/logout", post(logout))
        .route("/admin/session", get(session_status))
        .route("/admin/bookings", get(list_bookings))
}

/// POST /api/admin/login
pub async fn login(
    State(state): State<AppState>,
    ClientId(session): ClientId,
    Json(request): Json<AdminLoginRequest>,
) -> Result<Json<AdminSessionResponse>, BookingError> {
    info!("POST /api/admin/login");

    state.schedule_service.admin_login(session, &request.password)?;
    Ok(Json(AdminSessionResponse {
        authenticated: true,
        message: "Login successful".to_string(),
    }))
}

/// POST /api/admin/logout
pub async fn logout(
    State(state): State<AppState>,
    ClientId(session): ClientId,
) -> Result<Json<AdminSessionResponse>, BookingError> {
    info!("POST /api/admin/logout");

    state.schedule_service.admin_logout(session)?;
    Ok(Json(AdminSessionResponse {
        authenticated: false,
        message: "Logged out".to_string(),
    }))
}

/// GET /api/admin/session
pub async fn session_status(
    State(state): State<AppState>,
    ClientId(session): ClientId,
) -> Result<Json<AdminSessionResponse>, BookingError> {
    let authenticated = state.schedule_service.is_admin(session)?;
    let message = if authenticated { "Authenticated" } else { "Not authenticated" };
    Ok(Json(AdminSessionResponse {
        authenticated,
        message: message.to_string(),
    }))
}

/// GET /api/admin/bookings
pub async fn list_bookings(
    State(state): State<AppState>,
    ClientId(session): ClientId,
) -> Result<Json<BookingListResponse>, BookingError> {
    info!("GET /api/admin/bookings");

    let bookings = state.schedule_service.bookings(session)?;
    info!("Returning {} bookings", bookings.len());
    Ok(Json(BookingMapper::to_list_response(&bookings)))
}
