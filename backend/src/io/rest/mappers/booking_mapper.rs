use crate::domain::models::Booking as DomainBooking;
use shared::{BookedMeeting, BookingListResponse};

pub struct BookingMapper;

impl BookingMapper {
    pub fn to_dto(domain: &DomainBooking) -> BookedMeeting {
        BookedMeeting {
            id: domain.id.to_string(),
            date: domain.date.to_string(),
            time: domain.time.clone(),
            email: domain.email.clone(),
        }
    }

    pub fn to_list_response(bookings: &[DomainBooking]) -> BookingListResponse {
        BookingListResponse {
            bookings: bookings.iter().map(Self::to_dto).collect(),
            total: bookings.len(),
        }
    }
}
