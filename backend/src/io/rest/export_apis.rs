//! # REST API for Data Export
//!
//! Downloads the booked meetings as a spreadsheet file.

use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tracing::{error, info};

use crate::error::BookingError;
use crate::io::rest::client_session::ClientId;
use crate::AppState;

/// Create a router for export related APIs
pub fn router() -> Router<AppState> {
    Router::new().route("/admin/export", get(export_bookings))
}

/// GET /api/admin/export
pub async fn export_bookings(
    State(state): State<AppState>,
    ClientId(session): ClientId,
) -> Result<Response, BookingError> {
    info!("GET /api/admin/export");

    let file = state.schedule_service.export_bookings(session)?;
    info!("✅ Export completed with {} rows", file.row_count);

    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{}\"", file.filename))
        .map_err(|e| {
            error!("❌ Invalid export filename {}: {}", file.filename, e);
            BookingError::Export(e.to_string())
        })?;
    let content_type = HeaderValue::from_str(&file.content_type)
        .map_err(|e| BookingError::Export(e.to_string()))?;

    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.content,
    )
        .into_response())
}
