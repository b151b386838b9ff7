use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::ParseError;
use crate::serde::{deserialize_canonical, serialize_canonical};

/// A calendar date without timezone. Canonical form is `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateValue(NaiveDate);

impl DateValue {
    /// Creates a date from its parts, rejecting impossible dates.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, ParseError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .filter(|_| (0..=9999).contains(&year))
            .map(Self)
            .ok_or_else(|| ParseError::InvalidDate(format!("{:04}-{:02}-{:02}", year, month, day)))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Day-of-week code used for label lookup: `0` is Sunday, `6` is Saturday.
    pub fn day_code(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    pub fn earlier_than(&self, other: &DateValue) -> bool {
        self < other
    }

    pub fn later_than(&self, other: &DateValue) -> bool {
        self > other
    }
}

impl TryFrom<NaiveDate> for DateValue {
    type Error = ParseError;

    /// Goes through [`DateValue::new`], so years outside `0..=9999` are rejected.
    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        DateValue::new(date.year(), date.month(), date.day())
    }
}

impl From<DateValue> for NaiveDate {
    fn from(date: DateValue) -> Self {
        date.0
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl FromStr for DateValue {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidDate(s.to_string());
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !well_formed {
            return Err(invalid());
        }
        let year = s[0..4].parse().map_err(|_| invalid())?;
        let month = s[5..7].parse().map_err(|_| invalid())?;
        let day = s[8..10].parse().map_err(|_| invalid())?;
        DateValue::new(year, month, day).map_err(|_| invalid())
    }
}

impl Serialize for DateValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_canonical(self, serializer)
    }
}

impl<'de> Deserialize<'de> for DateValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_canonical(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(year: i32, month: u32, day: u32) -> DateValue {
        DateValue::new(year, month, day).unwrap()
    }

    #[test]
    fn test_date_new_rejects_impossible_dates() {
        assert!(DateValue::new(2024, 2, 29).is_ok());
        assert!(DateValue::new(2023, 2, 29).is_err());
        assert!(DateValue::new(2024, 13, 1).is_err());
        assert!(DateValue::new(10_000, 1, 1).is_err());
    }

    #[test]
    fn test_date_parse_and_display() {
        let date: DateValue = "2024-01-05".parse().unwrap();
        assert_eq!(date, make_date(2024, 1, 5));
        assert_eq!(date.to_string(), "2024-01-05");

        assert!("2024-1-05".parse::<DateValue>().is_err());
        assert!("2024/01/05".parse::<DateValue>().is_err());
        assert!("2024-02-30".parse::<DateValue>().is_err());
        assert!("20240105".parse::<DateValue>().is_err());
        assert!("".parse::<DateValue>().is_err());
    }

    #[test]
    fn test_date_ordering() {
        let first = make_date(2024, 1, 31);
        let second = make_date(2024, 2, 1);

        assert!(first.earlier_than(&second));
        assert!(second.later_than(&first));
        assert!(!first.earlier_than(&first));
    }

    #[test]
    fn test_day_code_starts_on_sunday() {
        assert_eq!(make_date(2024, 1, 7).day_code(), 0); // Sunday
        assert_eq!(make_date(2024, 1, 8).day_code(), 1); // Monday
        assert_eq!(make_date(2024, 1, 13).day_code(), 6); // Saturday
        assert_eq!(make_date(2024, 1, 8).weekday(), Weekday::Mon);
    }

    #[test]
    fn test_date_serde() {
        let date = make_date(2025, 12, 31);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""2025-12-31""#);
        assert_eq!(serde_json::from_str::<DateValue>(&json).unwrap(), date);
    }

    #[test]
    fn test_naive_conversion_keeps_canonical_round_trip() {
        let last = NaiveDate::from_ymd_opt(9999, 12, 31).unwrap();
        let date = DateValue::try_from(last).unwrap();
        assert_eq!(date.naive(), last);
        assert_eq!(date.to_string().parse::<DateValue>().unwrap(), date);
        assert_eq!(NaiveDate::from(date), last);

        let too_late = NaiveDate::from_ymd_opt(10_000, 1, 1).unwrap();
        assert!(matches!(
            DateValue::try_from(too_late),
            Err(ParseError::InvalidDate(_))
        ));
    }
}
