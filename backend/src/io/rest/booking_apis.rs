//! # Booking Workflow Endpoints
//!
//! Drive the visitor's booking dialog: pick a slot, confirm it with a
//! one-time password, or cancel. Unlike the gate endpoint, a confirmation
//! here removes the slot and records the booking.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use tracing::info;

use crate::domain::commands::booking::ConfirmBookingCommand;
use crate::error::BookingError;
use crate::io::rest::client_session::ClientId;
use crate::io::rest::mappers::slot_mapper::SlotMapper;
use crate::io::rest::mappers::workflow_mapper::WorkflowMapper;
use crate::AppState;
use shared::{ConfirmBookingRequest, SlotRequest, WorkflowResponse};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/booking", get(get_workflow))
        .route("/booking/select", post(select_slot))
        .route("/booking/confirm", post(confirm_booking))
        .route("/booking/cancel", post(cancel_booking))
}

/// GET /api/booking
pub async fn get_workflow(
    State(state): State<AppState>,
    ClientId(session): ClientId,
) -> Result<Json<WorkflowResponse>, BookingError> {
    let snapshot = state.schedule_service.workflow(session)?;
    Ok(Json(WorkflowMapper::to_dto(&snapshot)))
}

/// POST /api/booking/select
pub async fn select_slot(
    State(state): State<AppState>,
    ClientId(session): ClientId,
    Json(request): Json<SlotRequest>,
) -> Result<Json<WorkflowResponse>, BookingError> {
    info!("POST /api/booking/select - request: {:?}", request);

    let command = SlotMapper::to_command(request)?;
    let snapshot = state.schedule_service.select_slot(session, command)?;
    Ok(Json(WorkflowMapper::to_dto(&snapshot)))
}

/// POST /api/booking/confirm
///
/// A rejected password answers 400 and leaves the selection in place.
pub async fn confirm_booking(
    State(state): State<AppState>,
    ClientId(session): ClientId,
    Json(request): Json<ConfirmBookingRequest>,
) -> Result<Json<WorkflowResponse>, BookingError> {
    info!("POST /api/booking/confirm - email: {:?}", request.email);

    let command = ConfirmBookingCommand {
        email: request.email,
        one_time_password: request.one_time_password,
    };
    let snapshot = state.schedule_service.confirm_booking(session, command)?;
    if let Some(booking) = &snapshot.booking {
        info!("✅ Booking {} confirmed", booking.id);
    }
    Ok(Json(WorkflowMapper::to_dto(&snapshot)))
}

/// POST /api/booking/cancel
pub async fn cancel_booking(
    State(state): State<AppState>,
    ClientId(session): ClientId,
) -> Result<Json<WorkflowResponse>, BookingError> {
    info!("POST /api/booking/cancel");

    let snapshot = state.schedule_service.cancel_booking(session)?;
    Ok(Json(WorkflowMapper::to_dto(&snapshot)))
}
