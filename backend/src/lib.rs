//! # Slot Booking Backend
//!
//! Server for the appointment-booking widget: admins publish time slots,
//! visitors book one with a one-time password, admins export the bookings.
//!
//! ## Architecture
//!
//! ```text
//! Browser widget
//!     ↓
//! IO Layer (axum REST handlers, static app shell)
//!     ↓
//! Domain Layer (slot store, booking workflow, admin session, calendar, export)
//! ```
//!
//! All schedule state is held in memory by [`domain::ScheduleService`] and is
//! lost on restart. Slots and bookings are shared by every client; admin
//! login, calendar view and booking dialog are kept per client session. The two gate endpoints (`/api/admin-login`,
//! `/api/book-appointment`) only check secrets and never touch that state.

pub mod config;
pub mod domain;
pub mod error;
pub mod io;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::domain::models::YearMonth;
use crate::domain::{Credentials, ScheduleService, ScheduleState, SlotStore};

pub use error::BookingError;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub schedule_service: ScheduleService,
    pub credentials: Credentials,
}

impl AppState {
    pub fn new(schedule_service: ScheduleService, credentials: Credentials) -> Self {
        Self {
            schedule_service,
            credentials,
        }
    }
}

/// Build the in-memory schedule and the services around it
pub fn initialize_backend(config: &Config) -> AppState {
    info!("Setting up schedule");
    let slots = if config.seed_demo_slots {
        info!("Seeding demo availability");
        SlotStore::with_demo_slots()
    } else {
        SlotStore::new()
    };

    let state = ScheduleState::new(slots, YearMonth::current());
    let schedule_service = ScheduleService::new(state, config.credentials.clone());

    info!("Setting up application state");
    AppState::new(schedule_service, config.credentials.clone())
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &Config) -> Result<Router> {
    let router = Router::new()
        .nest("/api", io::api_router())
        .fallback_service(io::rest::static_files::spa_service(&config.static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    let router = match &config.cors_origin {
        Some(origin) => {
            info!("Allowing cross-origin requests from {}", origin);
            let cors = CorsLayer::new()
                .allow_origin(
                    origin
                        .parse::<HeaderValue>()
                        .with_context(|| format!("Invalid CORS_ORIGIN {origin}"))?,
                )
                .allow_methods([Method::GET, Method::POST, Method::DELETE])
                .allow_headers(Any);
            router.layer(cors)
        }
        None => router,
    };

    Ok(router)
}
