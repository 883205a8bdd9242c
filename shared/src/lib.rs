use serde::{Deserialize, Serialize};
use std::fmt;

/// Generic `{success, message}` body used by the gate endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

impl ApiResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Error body returned by every endpoint that fails with a domain error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    /// Stable machine-readable code, e.g. `INVALID_ONE_TIME_PASSWORD`
    pub code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminLoginRequest {
    #[serde(default)]
    pub password: String,
}

/// Booking request as sent by the widget to `/api/book-appointment`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookAppointmentRequest {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub one_time_password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSessionResponse {
    pub authenticated: bool,
    pub message: String,
}

/// A single (date, time) slot reference. Dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotRequest {
    pub date: String,
    pub time: String,
}

/// Adds `time` to every day of `year`/`month` whose weekday is listed.
/// Weekdays use 0 = Sunday through 6 = Saturday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringSlotsRequest {
    pub year: i32,
    pub month: u32,
    pub weekdays: Vec<u32>,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringSlotsResponse {
    pub time: String,
    pub dates: Vec<String>,
    pub added_count: usize,
}

/// Time labels available on one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySlots {
    pub date: String,
    pub times: Vec<String>,
    pub has_availability: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub days: Vec<DaySlots>,
}

/// A confirmed booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookedMeeting {
    pub id: String,
    pub date: String,
    pub time: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingListResponse {
    pub bookings: Vec<BookedMeeting>,
    pub total: usize,
}

/// Type of calendar day for explicit rendering logic
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CalendarDayType {
    /// Empty padding day before the start of the month
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
    /// Empty padding day after the end of the month to complete the last week
    PaddingAfter,
}

/// A month of the booking calendar as rendered by the widget
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarMonth {
    pub month: u32,
    pub year: i32,
    /// e.g. "September 2024"
    pub label: String,
    pub first_day_of_week: u32, // 0 = Sunday, 1 = Monday, etc.
    pub days: Vec<CalendarDay>,
    pub hovered_date: Option<String>,
}

/// A single cell of the calendar grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarDay {
    /// Day of month, 0 for padding cells
    pub day: u32,
    /// `YYYY-MM-DD`, absent for padding cells
    pub date: Option<String>,
    pub day_type: CalendarDayType,
    pub is_today: bool,
    pub has_availability: bool,
    /// Time labels, only filled in for the hovered date
    pub hovered_slots: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverDateRequest {
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmBookingRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub one_time_password: String,
}

/// Where the visitor currently is in the booking dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    Idle,
    SlotSelected,
    Confirmed,
    Rejected,
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WorkflowStatus::Idle => "idle",
            WorkflowStatus::SlotSelected => "slot_selected",
            WorkflowStatus::Confirmed => "confirmed",
            WorkflowStatus::Rejected => "rejected",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedSlotInfo {
    pub date: String,
    pub time: String,
    /// e.g. "September 15, 2024"
    pub display_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowResponse {
    pub status: WorkflowStatus,
    pub selected: Option<SelectedSlotInfo>,
    /// Set once the booking has been confirmed
    pub booking: Option<BookedMeeting>,
    pub message: Option<String>,
}
