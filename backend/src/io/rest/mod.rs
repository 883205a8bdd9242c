//! # REST API Interface Layer
//!
//! HTTP endpoints for the booking widget. Handlers translate JSON DTOs from
//! the `shared` crate into domain commands, call `ScheduleService`, and turn
//! `BookingError` into status codes through its `IntoResponse` impl.
//!
//! ## Routes (all under `/api`)
//!
//! - **gate_apis**: `/admin-login`, `/book-appointment` (stateless checks)
//! - **admin_apis**: `/admin/login`, `/admin/logout`, `/admin/session`, `/admin/bookings`
//! - **slot_apis**: `/slots`, `/slots/:date`, `/admin/slots`, `/admin/slots/recurring`
//! - **calendar_apis**: `/calendar`, `/calendar/{next,previous,hover,leave}`
//! - **booking_apis**: `/booking`, `/booking/{select,confirm,cancel}`
//! - **export_apis**: `/admin/export`
//!
//! Every API request carries a client session (see **client_session**);
//! admin login, calendar view and booking dialog state are per client.
//! Everything else is answered by **static_files**.

pub mod admin_apis;
pub mod booking_apis;
pub mod calendar_apis;
pub mod client_session;
pub mod export_apis;
pub mod gate_apis;
pub mod mappers;
pub mod slot_apis;
pub mod static_files;

#[cfg(test)]
pub(crate) mod test_support;

use axum::{middleware, Router};

use crate::AppState;

/// All API routes, ready to be nested under `/api`
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(gate_apis::router())
        .merge(admin_apis::router())
        .merge(slot_apis::router())
        .merge(calendar_apis::router())
        .merge(booking_apis::router())
        .merge(export_apis::router())
        .layer(middleware::from_fn(client_session::ensure_session))
}
