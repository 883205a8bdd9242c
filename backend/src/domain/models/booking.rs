use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::slot_date::SlotDate;

/// A (date, time label) opening
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedSlot {
    pub date: SlotDate,
    pub time: String,
}

impl SelectedSlot {
    pub fn new(date: SlotDate, time: impl Into<String>) -> Self {
        Self {
            date,
            time: time.into(),
        }
    }
}

/// A confirmed booking. Never updated or deleted once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub date: SlotDate,
    pub time: String,
    /// As typed by the visitor; may be blank
    pub email: String,
}

impl Booking {
    pub fn new(slot: SelectedSlot, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: slot.date,
            time: slot.time,
            email: email.into(),
        }
    }
}
