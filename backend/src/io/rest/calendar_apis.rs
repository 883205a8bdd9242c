use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use tracing::info;

use crate::domain::models::SlotDate;
use crate::error::BookingError;
use crate::io::rest::client_session::ClientId;
use crate::AppState;
use shared::{CalendarMonth, HoverDateRequest};

/// Create a router for calendar related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/calendar", get(get_calendar_month))
        .route("/calendar/next", post(navigate_next_month))
        .route("/calendar/previous", post(navigate_previous_month))
        .route("/calendar/hover", post(hover_date))
        .route("/calendar/leave", post(leave_date))
}

/// Get the focused month with availability markers
async fn get_calendar_month(
    State(state): State<AppState>,
    ClientId(session): ClientId,
) -> Result<Json<CalendarMonth>, BookingError> {
    info!("GET /api/calendar");
    let month = state.schedule_service.calendar_month(session, SlotDate::today())?;
    Ok(Json(month))
}

async fn navigate_next_month(
    State(state): State<AppState>,
    ClientId(session): ClientId,
) -> Result<Json<CalendarMonth>, BookingError> {
    info!("POST /api/calendar/next");
    let month = state.schedule_service.next_month(session, SlotDate::today())?;
    info!("Calendar now showing {}", month.label);
    Ok(Json(month))
}

async fn navigate_previous_month(
    State(state): State<AppState>,
    ClientId(session): ClientId,
) -> Result<Json<CalendarMonth>, BookingError> {
    info!("POST /api/calendar/previous");
    let month = state.schedule_service.previous_month(session, SlotDate::today())?;
    info!("Calendar now showing {}", month.label);
    Ok(Json(month))
}

async fn hover_date(
    State(state): State<AppState>,
    ClientId(session): ClientId,
    Json(request): Json<HoverDateRequest>,
) -> Result<Json<CalendarMonth>, BookingError> {
    let date = SlotDate::parse(&request.date)?;
    let month = state.schedule_service.hover_date(session, date, SlotDate::today())?;
    Ok(Json(month))
}

async fn leave_date(
    State(state): State<AppState>,
    ClientId(session): ClientId,
) -> Result<Json<CalendarMonth>, BookingError> {
    let month = state.schedule_service.leave_date(session, SlotDate::today())?;
    Ok(Json(month))
}
