//! # Slot Endpoints
//!
//! Public reads of availability and admin-only slot management.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use tracing::info;

use crate::domain::models::SlotDate;
use crate::error::BookingError;
use crate::io::rest::client_session::ClientId;
use crate::io::rest::mappers::slot_mapper::SlotMapper;
use crate::AppState;
use shared::{AvailabilityResponse, DaySlots, RecurringSlotsRequest, RecurringSlotsResponse, SlotRequest};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/slots", get(list_availability))
        .route("/slots/:date", get(get_day_slots))
        .route("/admin/slots", post(add_slot).delete(remove_slot))
        .route("/admin/slots/recurring", post(add_recurring_slots))
}

/// GET /api/slots
pub async fn list_availability(
    State(state): State<AppState>,
) -> Result<Json<AvailabilityResponse>, BookingError> {
    info!("GET /api/slots");

    let days = state.schedule_service.availability()?;
    Ok(Json(SlotMapper::to_availability_response(days)))
}

/// GET /api/slots/:date
pub async fn get_day_slots(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DaySlots>, BookingError> {
    info!("GET /api/slots/{}", date);

    let date = SlotDate::parse(&date)?;
    let times = state.schedule_service.slots_for(date)?;
    Ok(Json(SlotMapper::to_day_slots(date, times)))
}

/// POST /api/admin/slots
pub async fn add_slot(
    State(state): State<AppState>,
    ClientId(session): ClientId,
    Json(request): Json<SlotRequest>,
) -> Result<(StatusCode, Json<DaySlots>), BookingError> {
    info!("POST /api/admin/slots - request: {:?}", request);

    let command = SlotMapper::to_command(request)?;
    let date = command.date;
    let times = state.schedule_service.add_slot(session, command)?;
    Ok((StatusCode::CREATED, Json(SlotMapper::to_day_slots(date, times))))
}

/// DELETE /api/admin/slots
pub async fn remove_slot(
    State(state): State<AppState>,
    ClientId(session): ClientId,
    Json(request): Json<SlotRequest>,
) -> Result<Json<DaySlots>, BookingError> {
    info!("DELETE /api/admin/slots - request: {:?}", request);

    let command = SlotMapper::to_command(request)?;
    let date = command.date;
    let result = state.schedule_service.remove_slot(session, command)?;
    info!("Removed {} entries", result.removed);
    Ok(Json(SlotMapper::to_day_slots(date, result.remaining)))
}

/// POST /api/admin/slots/recurring
pub async fn add_recurring_slots(
    State(state): State<AppState>,
    ClientId(session): ClientId,
    Json(request): Json<RecurringSlotsRequest>,
) -> Result<(StatusCode, Json<RecurringSlotsResponse>), BookingError> {
    info!("POST /api/admin/slots/recurring - request: {:?}", request);

    let command = SlotMapper::to_recurring_command(request)?;
    let time = command.time.clone();
    let dates = state.schedule_service.add_recurring_slots(session, command)?;
    Ok((
        StatusCode::CREATED,
        Json(SlotMapper::to_recurring_response(time, &dates)),
    ))
}
