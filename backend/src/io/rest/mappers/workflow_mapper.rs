use crate::domain::commands::booking::WorkflowSnapshot;
use crate::domain::models::SelectedSlot;
use crate::io::rest::mappers::booking_mapper::BookingMapper;
use shared::{SelectedSlotInfo, WorkflowResponse, WorkflowStatus};

pub struct WorkflowMapper;

impl WorkflowMapper {
    pub fn to_dto(snapshot: &WorkflowSnapshot) -> WorkflowResponse {
        let message = match snapshot.status {
            WorkflowStatus::Confirmed => Some("Booking successful!".to_string()),
            WorkflowStatus::Rejected => {
                Some("Invalid one-time password. Please try again.".to_string())
            }
            _ => None,
        };

        WorkflowResponse {
            status: snapshot.status,
            selected: snapshot.selected.as_ref().map(Self::to_selected_info),
            booking: snapshot.booking.as_ref().map(BookingMapper::to_dto),
            message,
        }
    }

    fn to_selected_info(slot: &SelectedSlot) -> SelectedSlotInfo {
        SelectedSlotInfo {
            date: slot.date.to_string(),
            time: slot.time.clone(),
            display_date: slot.date.display(),
        }
    }
}
