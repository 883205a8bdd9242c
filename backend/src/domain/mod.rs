//! # Domain Module
//!
//! Business rules for the booking widget, independent of HTTP.
//!
//! ## Module Organization
//!
//! - **slot_store**: which time labels are still bookable on which date
//! - **booking_recorder**: append-only list of confirmed bookings
//! - **admin_session**: the flag that unlocks slot management and export
//! - **credentials**: admin secret and one-time password allow-list
//! - **calendar**: visible month, hovered date and the month grid projection
//! - **booking_workflow**: select → confirm/reject → idle state machine
//! - **export_service**: booked meetings as a spreadsheet download
//! - **schedule_service**: owns all of the above behind one lock
//!
//! ## Business Rules
//!
//! - A date whose slot list is empty is treated as having no availability
//! - The same time label may be added twice; removal drops every copy
//! - One-time passwords match exactly and case-sensitively
//! - A rejected one-time password keeps the selection for a retry
//! - A successful booking removes the slot and records the booking together
//! - Admin-only operations fail with `NotAuthorized` until login

pub mod admin_session;
pub mod booking_recorder;
pub mod booking_workflow;
pub mod calendar;
pub mod commands;
pub mod credentials;
pub mod export_service;
pub mod models;
pub mod schedule_service;
pub mod slot_store;

pub use admin_session::*;
pub use booking_recorder::*;
pub use booking_workflow::*;
pub use calendar::*;
pub use credentials::*;
pub use export_service::*;
pub use schedule_service::*;
pub use slot_store::*;
