//! Calendar view state for the booking widget.
//!
//! Tracks which month is on screen and which date the visitor is hovering,
//! and projects the slot store onto a Sunday-first month grid. Nothing here
//! mutates availability.

use shared::{CalendarDay, CalendarDayType, CalendarMonth};
use tracing::debug;

use crate::domain::models::{SlotDate, YearMonth};
use crate::domain::SlotStore;

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarView {
    focus: YearMonth,
    hovered: Option<SlotDate>,
}

impl Default for CalendarView {
    fn default() -> Self {
        Self::new(YearMonth::current())
    }
}

impl CalendarView {
    pub fn new(focus: YearMonth) -> Self {
        Self {
            focus,
            hovered: None,
        }
    }

    pub fn focus(&self) -> YearMonth {
        self.focus
    }

    pub fn hovered(&self) -> Option<SlotDate> {
        self.hovered
    }

    /// Dates of the focused month, first to last
    pub fn month_days(&self) -> Vec<SlotDate> {
        self.focus.days().collect()
    }

    pub fn next_month(&mut self) -> YearMonth {
        self.focus = self.focus.next();
        debug!("Calendar moved forward to {}", self.focus.label());
        self.focus
    }

    pub fn previous_month(&mut self) -> YearMonth {
        self.focus = self.focus.previous();
        debug!("Calendar moved back to {}", self.focus.label());
        self.focus
    }

    pub fn hover(&mut self, date: SlotDate) {
        self.hovered = Some(date);
    }

    pub fn leave(&mut self) {
        self.hovered = None;
    }

    /// Build the grid for the focused month
    pub fn month_view(&self, slots: &SlotStore, today: SlotDate) -> CalendarMonth {
        let first_day = self.focus.first_day().weekday_from_sunday();

        let mut days: Vec<CalendarDay> = (0..first_day)
            .map(|_| padding_day(CalendarDayType::PaddingBefore))
            .collect();

        for date in self.focus.days() {
            let hovered_slots = (self.hovered == Some(date)).then(|| slots.slots_for(date).to_vec());
            days.push(CalendarDay {
                day: date.day(),
                date: Some(date.to_string()),
                day_type: CalendarDayType::MonthDay,
                is_today: date == today,
                has_availability: slots.has_availability(date),
                hovered_slots,
            });
        }

        while days.len() % 7 != 0 {
            days.push(padding_day(CalendarDayType::PaddingAfter));
        }

        CalendarMonth {
            month: self.focus.month,
            year: self.focus.year,
            label: self.focus.label(),
            first_day_of_week: first_day,
            days,
            hovered_date: self.hovered.map(|date| date.to_string()),
        }
    }
}

fn padding_day(day_type: CalendarDayType) -> CalendarDay {
    CalendarDay {
        day: 0,
        date: None,
        day_type,
        is_today: false,
        has_availability: false,
        hovered_slots: None,
    }
}
