use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::date::DateValue;
use super::error::ParseError;
use super::time::TimeRange;
use crate::serde::{deserialize_canonical, serialize_canonical};

/// One selectable cell of the availability grid: a date paired with a time slot.
///
/// Equality is structural. Ordered by date, then by time range. The canonical
/// form `YYYY-MM-DD_HH:MM-HH:MM` is both the set key and the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTimeRange {
    date: DateValue,
    time_range: TimeRange,
}

impl DateTimeRange {
    pub fn new(date: DateValue, time_range: TimeRange) -> Self {
        Self { date, time_range }
    }

    /// The single cell a date-only event offers for `date`.
    pub fn full_day(date: DateValue) -> Self {
        Self::new(date, TimeRange::full_day())
    }

    pub fn date(&self) -> DateValue {
        self.date
    }

    pub fn time_range(&self) -> TimeRange {
        self.time_range
    }

    pub fn earlier_than(&self, other: &DateTimeRange) -> bool {
        self < other
    }

    pub fn later_than(&self, other: &DateTimeRange) -> bool {
        self > other
    }
}

impl fmt::Display for DateTimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.date, self.time_range)
    }
}

impl FromStr for DateTimeRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidDateTimeRange(s.to_string());
        let (date, time_range) = s.split_once('_').ok_or_else(invalid)?;
        let date = date.parse().map_err(|_| invalid())?;
        let time_range = time_range.parse().map_err(|_| invalid())?;
        Ok(Self::new(date, time_range))
    }
}

impl Serialize for DateTimeRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_canonical(self, serializer)
    }
}

impl<'de> Deserialize<'de> for DateTimeRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_canonical(deserializer)
    }
}
