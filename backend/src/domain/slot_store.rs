//! Availability for the booking calendar.
//!
//! The store maps each date to the ordered list of time labels that can still
//! be booked. A date with an empty list is treated exactly like a missing one.

use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

use crate::domain::models::{SlotDate, YearMonth};
use crate::error::BookingError;

/// Demo openings the widget starts with
const DEMO_SLOTS: [(&str, &[&str]); 3] = [
    ("2024-09-15", &["09:00 AM", "10:00 AM", "2:00 PM"]),
    ("2024-09-16", &["11:00 AM", "3:00 PM"]),
    ("2024-09-20", &["10:00 AM", "1:00 PM", "4:00 PM"]),
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotStore {
    slots: BTreeMap<SlotDate, Vec<String>>,
}

impl SlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with the demo openings for September 2024
    pub fn with_demo_slots() -> Self {
        let mut store = Self::new();
        for (date, times) in DEMO_SLOTS {
            if let Ok(date) = SlotDate::parse(date) {
                for time in times {
                    store.add_slot(date, time);
                }
            }
        }
        store
    }

    /// Append `time` to the list for `date`. Duplicates are kept.
    pub fn add_slot(&mut self, date: SlotDate, time: &str) {
        debug!("Adding slot {} on {}", time, date);
        self.slots.entry(date).or_default().push(time.to_string());
    }

    /// Add `time` to every day of `month` whose weekday (0 = Sunday) is in
    /// `weekdays`. Returns the dates that received the slot.
    pub fn add_recurring_slots(
        &mut self,
        month: YearMonth,
        weekdays: &BTreeSet<u32>,
        time: &str,
    ) -> Result<Vec<SlotDate>, BookingError> {
        if let Some(&bad) = weekdays.iter().find(|&&day| day > 6) {
            return Err(BookingError::InvalidWeekday(bad));
        }

        let dates: Vec<SlotDate> = month
            .days()
            .filter(|date| weekdays.contains(&date.weekday_from_sunday()))
            .collect();

        for date in &dates {
            self.add_slot(*date, time);
        }

        info!(
            "Added recurring slot {} to {} days in {}",
            time,
            dates.len(),
            month.label()
        );
        Ok(dates)
    }

    /// Remove every entry equal to `time` on `date`, keeping the (possibly
    /// empty) list. Returns how many entries were removed.
    pub fn remove_slot(&mut self, date: SlotDate, time: &str) -> usize {
        match self.slots.get_mut(&date) {
            Some(times) => {
                let before = times.len();
                times.retain(|existing| existing != time);
                let removed = before - times.len();
                debug!("Removed {} entries of {} on {}", removed, time, date);
                removed
            }
            None => 0,
        }
    }

    pub fn has_availability(&self, date: SlotDate) -> bool {
        self.slots.get(&date).map_or(false, |times| !times.is_empty())
    }

    pub fn has_slot(&self, date: SlotDate, time: &str) -> bool {
        self.slots
            .get(&date)
            .map_or(false, |times| times.iter().any(|existing| existing == time))
    }

    /// Time labels for `date`, empty when none were ever added
    pub fn slots_for(&self, date: SlotDate) -> &[String] {
        self.slots.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every date that still has at least one opening, in date order
    pub fn available_dates(&self) -> impl Iterator<Item = SlotDate> + '_ {
        self.slots
            .iter()
            .filter(|(_, times)| !times.is_empty())
            .map(|(date, _)| *date)
    }

    /// All known dates with their lists, including emptied ones
    pub fn iter(&self) -> impl Iterator<Item = (&SlotDate, &Vec<String>)> {
        self.slots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(value: &str) -> SlotDate {
        SlotDate::parse(value).unwrap()
    }

    #[test]
    fn test_empty_store_has_no_availability() {
        let store = SlotStore::new();
        assert!(!store.has_availability(date("2024-09-15")));
        assert!(store.slots_for(date("2024-09-15")).is_empty());
    }

    #[test]
    fn test_add_slot_creates_list() {
        let mut store = SlotStore::new();
        store.add_slot(date("2024-09-15"), "09:00 AM");

        assert!(store.has_availability(date("2024-09-15")));
        assert_eq!(store.slots_for(date("2024-09-15")), ["09:00 AM"]);
    }

    #[test]
    fn test_add_slot_keeps_duplicates_in_order() {
        let mut store = SlotStore::new();
        store.add_slot(date("2024-09-15"), "10:00 AM");
        store.add_slot(date("2024-09-15"), "09:00 AM");
        store.add_slot(date("2024-09-15"), "10:00 AM");

        assert_eq!(
            store.slots_for(date("2024-09-15")),
            ["10:00 AM", "09:00 AM", "10:00 AM"]
        );
    }

    #[test]
    fn test_remove_slot_removes_all_matches_and_keeps_key() {
        let mut store = SlotStore::new();
        store.add_slot(date("2024-09-15"), "10:00 AM");
        store.add_slot(date("2024-09-15"), "10:00 AM");

        assert_eq!(store.remove_slot(date("2024-09-15"), "10:00 AM"), 2);
        assert!(!store.has_availability(date("2024-09-15")));
        assert_eq!(store.iter().count(), 1);
        assert_eq!(store.available_dates().count(), 0);
    }

    #[test]
    fn test_remove_missing_slot_is_noop() {
        let mut store = SlotStore::with_demo_slots();
        assert_eq!(store.remove_slot(date("2024-09-15"), "11:59 PM"), 0);
        assert_eq!(store.remove_slot(date("2030-01-01"), "09:00 AM"), 0);
        assert_eq!(store.slots_for(date("2024-09-15")).len(), 3);
    }

    #[test]
    fn test_recurring_slots_on_mondays_and_wednesdays() {
        let mut store = SlotStore::new();
        let weekdays: BTreeSet<u32> = [1, 3].into_iter().collect();
        let month = YearMonth::new(2024, 9).unwrap();

        let dates = store.add_recurring_slots(month, &weekdays, "09:00 AM").unwrap();

        let expected: Vec<SlotDate> = [
            "2024-09-02", "2024-09-04", "2024-09-09", "2024-09-11", "2024-09-16",
            "2024-09-18", "2024-09-23", "2024-09-25", "2024-09-30",
        ]
        .iter()
        .map(|d| date(d))
        .collect();
        assert_eq!(dates, expected);

        for day in month.days() {
            let is_target = expected.contains(&day);
            assert_eq!(store.has_availability(day), is_target, "unexpected state for {}", day);
        }
    }

    #[test]
    fn test_recurring_slots_reject_out_of_range_weekday() {
        let mut store = SlotStore::new();
        let weekdays: BTreeSet<u32> = [2, 7].into_iter().collect();
        let month = YearMonth::new(2024, 9).unwrap();

        let result = store.add_recurring_slots(month, &weekdays, "09:00 AM");
        assert_eq!(result, Err(BookingError::InvalidWeekday(7)));
        assert_eq!(store.available_dates().count(), 0);
    }

    #[test]
    fn test_demo_slots() {
        let store = SlotStore::with_demo_slots();
        let dates: Vec<String> = store.available_dates().map(|d| d.to_string()).collect();
        assert_eq!(dates, vec!["2024-09-15", "2024-09-16", "2024-09-20"]);
        assert!(store.has_slot(date("2024-09-16"), "3:00 PM"));
    }
}
