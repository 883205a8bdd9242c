//! Domain-level command types.
//! These are used by `ScheduleService` and are **not** exposed over the public
//! API. The REST layer parses the DTOs from the `shared` crate into these,
//! so every date and month here is already validated.

pub mod slots {
    use std::collections::BTreeSet;

    use crate::domain::models::{SlotDate, YearMonth};

    /// Add or remove one time label on one date.
    #[derive(Debug, Clone)]
    pub struct SlotCommand {
        pub date: SlotDate,
        pub time: String,
    }

    /// Add a time label on selected weekdays of a month.
    #[derive(Debug, Clone)]
    pub struct RecurringSlotsCommand {
        pub month: YearMonth,
        /// 0 = Sunday … 6 = Saturday
        pub weekdays: BTreeSet<u32>,
        pub time: String,
    }

    /// Result of removing a slot.
    #[derive(Debug, Clone)]
    pub struct RemoveSlotResult {
        pub removed: usize,
        pub remaining: Vec<String>,
    }
}

pub mod booking {
    use crate::domain::models::{Booking, SelectedSlot};
    use shared::WorkflowStatus;

    /// Confirm the selected slot.
    #[derive(Debug, Clone)]
    pub struct ConfirmBookingCommand {
        pub email: String,
        pub one_time_password: String,
    }

    /// Read-only copy of the booking dialog state.
    #[derive(Debug, Clone, PartialEq)]
    pub struct WorkflowSnapshot {
        pub status: WorkflowStatus,
        pub selected: Option<SelectedSlot>,
        pub booking: Option<Booking>,
    }
}
