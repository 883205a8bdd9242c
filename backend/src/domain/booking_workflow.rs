//! The visitor's booking dialog as a state machine.
//!
//! ```text
//! Idle ──select──▶ SlotSelected ──submit(valid OTP)──▶ Confirmed
//!                      │  ▲                                │
//!        submit(bad OTP)  │ submit(valid OTP)             cancel
//!                      ▼  │                                ▼
//!                    Rejected ──────────cancel──────────▶ Idle
//! ```
//!
//! A confirmed submission removes the slot from the store and records the
//! booking in one step; callers hold the schedule lock for the whole call.

use shared::WorkflowStatus;
use tracing::{info, warn};

use crate::domain::models::{Booking, SelectedSlot};
use crate::domain::{BookingRecorder, Credentials, SlotStore};
use crate::error::BookingError;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum WorkflowState {
    #[default]
    Idle,
    SlotSelected(SelectedSlot),
    /// Last OTP was wrong; the selection stays so the visitor can retry
    Rejected(SelectedSlot),
    Confirmed(Booking),
}

#[derive(Debug, Clone, Default)]
pub struct BookingWorkflow {
    state: WorkflowState,
}

impl BookingWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn status(&self) -> WorkflowStatus {
        match self.state {
            WorkflowState::Idle => WorkflowStatus::Idle,
            WorkflowState::SlotSelected(_) => WorkflowStatus::SlotSelected,
            WorkflowState::Rejected(_) => WorkflowStatus::Rejected,
            WorkflowState::Confirmed(_) => WorkflowStatus::Confirmed,
        }
    }

    pub fn selected(&self) -> Option<&SelectedSlot> {
        match &self.state {
            WorkflowState::SlotSelected(slot) | WorkflowState::Rejected(slot) => Some(slot),
            _ => None,
        }
    }

    pub fn confirmed_booking(&self) -> Option<&Booking> {
        match &self.state {
            WorkflowState::Confirmed(booking) => Some(booking),
            _ => None,
        }
    }

    /// Pick an opening. Allowed from any state as long as the slot is still
    /// in the store.
    pub fn select(&mut self, slot: SelectedSlot, slots: &SlotStore) -> Result<(), BookingError> {
        if !slots.has_slot(slot.date, &slot.time) {
            warn!("Rejected selection of unavailable slot {} on {}", slot.time, slot.date);
            return Err(BookingError::SlotUnavailable {
                date: slot.date.to_string(),
                time: slot.time,
            });
        }

        info!("Selected slot {} on {}", slot.time, slot.date);
        self.state = WorkflowState::SlotSelected(slot);
        Ok(())
    }

    /// Confirm the current selection with a one-time password
    pub fn submit(
        &mut self,
        email: &str,
        one_time_password: &str,
        credentials: &Credentials,
        slots: &mut SlotStore,
        recorder: &mut BookingRecorder,
    ) -> Result<Booking, BookingError> {
        let slot = self.selected().cloned().ok_or(BookingError::NoSelection)?;

        if !credentials.accepts_one_time_password(one_time_password) {
            info!("One-time password rejected for {} on {}", slot.time, slot.date);
            self.state = WorkflowState::Rejected(slot);
            return Err(BookingError::InvalidOneTimePassword);
        }

        if !slots.has_slot(slot.date, &slot.time) {
            warn!("Slot {} on {} disappeared before confirmation", slot.time, slot.date);
            self.state = WorkflowState::Idle;
            return Err(BookingError::SlotUnavailable {
                date: slot.date.to_string(),
                time: slot.time,
            });
        }

        slots.remove_slot(slot.date, &slot.time);
        let booking = Booking::new(slot, email);
        recorder.record(booking.clone());
        self.state = WorkflowState::Confirmed(booking.clone());
        Ok(booking)
    }

    /// Close the dialog without touching availability
    pub fn cancel(&mut self) {
        self.state = WorkflowState::Idle;
    }
}
