use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::ErrorResponse;
use thiserror::Error;

/// Every recoverable failure a booking session can surface to a caller
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingError {
    #[error("Incorrect password")]
    InvalidCredential,

    #[error("Invalid one-time password")]
    InvalidOneTimePassword,

    #[error("No slot selected")]
    NoSelection,

    #[error("Slot {time} on {date} is not available")]
    SlotUnavailable { date: String, time: String },

    #[error("Admin login required")]
    NotAuthorized,

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid weekday {0}, expected 0 (Sunday) to 6 (Saturday)")]
    InvalidWeekday(u32),

    #[error("Invalid month {month} for year {year}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("Time label cannot be empty")]
    EmptyTimeLabel,

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BookingError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            BookingError::InvalidCredential => StatusCode::UNAUTHORIZED,
            BookingError::InvalidOneTimePassword => StatusCode::BAD_REQUEST,
            BookingError::NoSelection => StatusCode::CONFLICT,
            BookingError::SlotUnavailable { .. } => StatusCode::CONFLICT,
            BookingError::NotAuthorized => StatusCode::FORBIDDEN,
            BookingError::InvalidDate(_)
            | BookingError::InvalidWeekday(_)
            | BookingError::InvalidMonth { .. }
            | BookingError::EmptyTimeLabel => StatusCode::BAD_REQUEST,
            BookingError::Export(_) | BookingError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            BookingError::InvalidCredential => "INVALID_CREDENTIAL",
            BookingError::InvalidOneTimePassword => "INVALID_ONE_TIME_PASSWORD",
            BookingError::NoSelection => "NO_SELECTION",
            BookingError::SlotUnavailable { .. } => "SLOT_UNAVAILABLE",
            BookingError::NotAuthorized => "NOT_AUTHORIZED",
            BookingError::InvalidDate(_) => "INVALID_DATE",
            BookingError::InvalidWeekday(_) => "INVALID_WEEKDAY",
            BookingError::InvalidMonth { .. } => "INVALID_MONTH",
            BookingError::EmptyTimeLabel => "INVALID_INPUT",
            BookingError::Export(_) => "EXPORT_ERROR",
            BookingError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }

        let body = ErrorResponse {
            success: false,
            message: self.to_string(),
            code: self.code().to_string(),
        };
        (status, Json(body)).into_response()
    }
}
