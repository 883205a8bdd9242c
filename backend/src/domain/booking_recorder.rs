use tracing::info;

use crate::domain::models::Booking;

/// Append-only log of confirmed bookings, oldest first
#[derive(Debug, Clone, Default)]
pub struct BookingRecorder {
    bookings: Vec<Booking>,
}

impl BookingRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, booking: Booking) {
        info!(
            "Recorded booking {} for {} at {}",
            booking.id, booking.date, booking.time
        );
        self.bookings.push(booking);
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{SelectedSlot, SlotDate};

    #[test]
    fn test_records_in_order_without_dedup() {
        let mut recorder = BookingRecorder::new();
        assert!(recorder.is_empty());

        let date = SlotDate::parse("2024-09-15").unwrap();
        recorder.record(Booking::new(SelectedSlot::new(date, "09:00 AM"), "a@example.com"));
        recorder.record(Booking::new(SelectedSlot::new(date, "09:00 AM"), "a@example.com"));

        assert_eq!(recorder.len(), 2);
        assert_eq!(recorder.bookings()[0].time, "09:00 AM");
        assert_ne!(recorder.bookings()[0].id, recorder.bookings()[1].id);
    }
}
