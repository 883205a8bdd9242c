use std::collections::BTreeSet;

use crate::domain::commands::slots::{RecurringSlotsCommand, SlotCommand};
use crate::domain::models::{SlotDate, YearMonth};
use crate::error::BookingError;
use shared::{AvailabilityResponse, DaySlots, RecurringSlotsRequest, RecurringSlotsResponse, SlotRequest};

/// Surrounding whitespace never distinguishes two slots
fn normalize_time(time: String) -> String {
    time.trim().to_string()
}

pub struct SlotMapper;

impl SlotMapper {
    pub fn to_command(dto: SlotRequest) -> Result<SlotCommand, BookingError> {
        Ok(SlotCommand {
            date: SlotDate::parse(&dto.date)?,
            time: normalize_time(dto.time),
        })
    }

    pub fn to_recurring_command(dto: RecurringSlotsRequest) -> Result<RecurringSlotsCommand, BookingError> {
        Ok(RecurringSlotsCommand {
            month: YearMonth::new(dto.year, dto.month)?,
            weekdays: dto.weekdays.into_iter().collect::<BTreeSet<u32>>(),
            time: normalize_time(dto.time),
        })
    }

    pub fn to_day_slots(date: SlotDate, times: Vec<String>) -> DaySlots {
        DaySlots {
            date: date.to_string(),
            has_availability: !times.is_empty(),
            times,
        }
    }

    pub fn to_availability_response(days: Vec<(SlotDate, Vec<String>)>) -> AvailabilityResponse {
        AvailabilityResponse {
            days: days
                .into_iter()
                .map(|(date, times)| Self::to_day_slots(date, times))
                .collect(),
        }
    }

    pub fn to_recurring_response(time: String, dates: &[SlotDate]) -> RecurringSlotsResponse {
        RecurringSlotsResponse {
            time,
            dates: dates.iter().map(SlotDate::to_string).collect(),
            added_count: dates.len(),
        }
    }
}
