//! Calendar value types used as schedule keys.

use chrono::{Datelike, Local, Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::BookingError;

const KEY_FORMAT: &str = "%Y-%m-%d";

/// A calendar date normalized to `YYYY-MM-DD`, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotDate(NaiveDate);

impl SlotDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, BookingError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| BookingError::InvalidDate(format!("{:04}-{:02}-{:02}", year, month, day)))
    }

    pub fn parse(value: &str) -> Result<Self, BookingError> {
        NaiveDate::parse_from_str(value.trim(), KEY_FORMAT)
            .map(Self)
            .map_err(|_| BookingError::InvalidDate(value.to_string()))
    }

    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year_month(&self) -> YearMonth {
        YearMonth {
            year: self.0.year(),
            month: self.0.month(),
        }
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Day of week with 0 = Sunday, matching the calendar grid columns
    pub fn weekday_from_sunday(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// e.g. "September 15, 2024"
    pub fn display(&self) -> String {
        self.0.format("%B %-d, %Y").to_string()
    }
}

impl fmt::Display for SlotDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(KEY_FORMAT))
    }
}

impl FromStr for SlotDate {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for SlotDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SlotDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// A (year, month) pair identifying one page of the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, BookingError> {
        if !(1..=12).contains(&month) || NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(BookingError::InvalidMonth { year, month });
        }
        Ok(Self { year, month })
    }

    pub fn current() -> Self {
        SlotDate::today().year_month()
    }

    pub fn first_day(&self) -> SlotDate {
        // Constructor guarantees the first of the month exists
        SlotDate(NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN))
    }

    pub fn last_day(&self) -> SlotDate {
        let first = self.first_day().naive();
        let last = first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(first);
        SlotDate(last)
    }

    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    /// Every date of the month, first to last
    pub fn days(&self) -> impl Iterator<Item = SlotDate> {
        let first = self.first_day().naive();
        let count = self.days_in_month() as usize;
        first.iter_days().take(count).map(SlotDate)
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    /// e.g. "September 2024"
    pub fn label(&self) -> String {
        self.first_day().naive().format("%B %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display_round_trip_format() {
        let date = SlotDate::parse("2024-09-15").unwrap();
        assert_eq!(date.to_string(), "2024-09-15");
        assert_eq!(date.display(), "September 15, 2024");
        assert_eq!(date.weekday_from_sunday(), 0); // Sunday
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            SlotDate::parse("15/09/2024"),
            Err(BookingError::InvalidDate("15/09/2024".to_string()))
        );
        assert!(SlotDate::parse("2024-02-30").is_err());
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a = SlotDate::parse("2024-09-16").unwrap();
        let b = SlotDate::parse("2024-10-01").unwrap();
        let c = SlotDate::parse("2023-12-31").unwrap();
        let mut dates = vec![a, b, c];
        dates.sort();
        assert_eq!(dates, vec![c, a, b]);
    }

    #[test]
    fn test_serde_uses_key_format() {
        let date = SlotDate::parse("2024-09-05").unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2024-09-05\"");
        let parsed: SlotDate = serde_json::from_str("\"2024-09-05\"").unwrap();
        assert_eq!(parsed, date);
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(YearMonth::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(YearMonth::new(2025, 2).unwrap().days_in_month(), 28);
        assert_eq!(YearMonth::new(2024, 9).unwrap().days_in_month(), 30);
        assert_eq!(YearMonth::new(2024, 12).unwrap().last_day().to_string(), "2024-12-31");
        assert!(YearMonth::new(2024, 13).is_err());
        assert!(YearMonth::new(2024, 0).is_err());
    }

    #[test]
    fn test_days_enumerates_whole_month() {
        let days: Vec<SlotDate> = YearMonth::new(2024, 9).unwrap().days().collect();
        assert_eq!(days.len(), 30);
        assert_eq!(days[0].to_string(), "2024-09-01");
        assert_eq!(days[29].to_string(), "2024-09-30");
    }

    #[test]
    fn test_navigation_rolls_over_years() {
        let december = YearMonth::new(2024, 12).unwrap();
        assert_eq!(december.next(), YearMonth::new(2025, 1).unwrap());
        let january = YearMonth::new(2025, 1).unwrap();
        assert_eq!(january.previous(), december);
        assert_eq!(december.next().previous(), december);
    }

    #[test]
    fn test_label() {
        assert_eq!(YearMonth::new(2024, 9).unwrap().label(), "September 2024");
    }
}
