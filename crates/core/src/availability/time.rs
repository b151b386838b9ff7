use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::ParseError;
use crate::serde::{deserialize_canonical, serialize_canonical};

/// A wall-clock time of day with minute precision.
///
/// Ordered by `(hour, minute)`. Canonical form is `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    hour: u8,
    minute: u8,
}

impl Time {
    /// Creates a time, rejecting hours above 23 and minutes above 59.
    pub fn new(hour: u8, minute: u8) -> Result<Self, ParseError> {
        if hour > 23 || minute > 59 {
            return Err(ParseError::InvalidTime(format!("{:02}:{:02}", hour, minute)));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_since_midnight(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }

    pub fn earlier_than(&self, other: &Time) -> bool {
        self < other
    }

    pub fn later_than(&self, other: &Time) -> bool {
        self > other
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for Time {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidTime(s.to_string());
        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        let hour = parse_two_digits(hour).ok_or_else(invalid)?;
        let minute = parse_two_digits(minute).ok_or_else(invalid)?;
        Time::new(hour, minute).map_err(|_| invalid())
    }
}

/// Parses exactly two ASCII digits.
fn parse_two_digits(s: &str) -> Option<u8> {
    if s.len() != 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl From<Time> for NaiveTime {
    fn from(time: Time) -> Self {
        // Both fields are range-checked on construction.
        NaiveTime::from_hms_opt(time.hour as u32, time.minute as u32, 0).unwrap_or(NaiveTime::MIN)
    }
}

impl From<NaiveTime> for Time {
    /// Truncates seconds.
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }
}

impl Serialize for Time {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_canonical(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_canonical(deserializer)
    }
}

/// A half-open slot of the day, `start` strictly before `end`.
///
/// Ordered by start, then by end. Canonical form is `HH:MM-HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeRange {
    start: Time,
    end: Time,
}

impl TimeRange {
    /// Creates a time range, rejecting empty or inverted ranges.
    pub fn new(start: Time, end: Time) -> Result<Self, ParseError> {
        if start >= end {
            return Err(ParseError::EmptyTimeRange(format!("{}-{}", start, end)));
        }
        Ok(Self { start, end })
    }

    /// The `00:00-23:59` sentinel used for date-only events.
    pub fn full_day() -> Self {
        Self {
            start: Time { hour: 0, minute: 0 },
            end: Time {
                hour: 23,
                minute: 59,
            },
        }
    }

    pub fn start(&self) -> Time {
        self.start
    }

    pub fn end(&self) -> Time {
        self.end
    }

    /// Length of the range in minutes.
    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes_since_midnight() - self.start.minutes_since_midnight()
    }

    /// Returns true if `self` ends exactly where `next` starts.
    pub fn is_adjacent_to(&self, next: &TimeRange) -> bool {
        self.end == next.start
    }

    /// Returns true if the two ranges share any minute.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn earlier_than(&self, other: &TimeRange) -> bool {
        self < other
    }

    pub fn later_than(&self, other: &TimeRange) -> bool {
        self > other
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for TimeRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidTimeRange(s.to_string());
        let (start, end) = s.split_once('-').ok_or_else(invalid)?;
        let start: Time = start.parse().map_err(|_| invalid())?;
        let end: Time = end.parse().map_err(|_| invalid())?;
        TimeRange::new(start, end).map_err(|_| ParseError::EmptyTimeRange(s.to_string()))
    }
}

impl Serialize for TimeRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_canonical(self, serializer)
    }
}

impl<'de> Deserialize<'de> for TimeRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_canonical(deserializer)
    }
}
