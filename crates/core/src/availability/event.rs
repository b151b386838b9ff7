//! Event configuration and the option grid it spans.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::cell::DateTimeRange;
use super::date::DateValue;
use super::error::{EventError, ParseError};
use super::span::GridIndex;
use super::time::TimeRange;
use crate::serde::deserialize_optional_mode;

/// Whether participants pick individual time slots or whole days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventMode {
    #[default]
    #[serde(rename = "datetime")]
    DateTime,
    #[serde(rename = "date-only")]
    DateOnly,
}

impl EventMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventMode::DateTime => "datetime",
            EventMode::DateOnly => "date-only",
        }
    }

    pub fn is_date_only(&self) -> bool {
        matches!(self, EventMode::DateOnly)
    }
}

impl fmt::Display for EventMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "datetime" => Ok(EventMode::DateTime),
            "date-only" => Ok(EventMode::DateOnly),
            other => Err(ParseError::InvalidMode(other.to_string())),
        }
    }
}

/// Wire form of an event: dates and time slots as canonical strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedEventData {
    pub nanoid: String,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_optional_mode")]
    pub mode: EventMode,
    #[serde(default)]
    pub available_dates: Vec<String>,
    #[serde(default)]
    pub available_times: Vec<String>,
}

/// A parsed event: the dates and time slots participants can pick from.
///
/// `available_dates` and `available_times` are kept in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SerializedEventData", into = "SerializedEventData")]
pub struct EventData {
    pub nanoid: String,
    pub title: String,
    pub mode: EventMode,
    pub available_dates: Vec<DateValue>,
    pub available_times: Vec<TimeRange>,
}

impl EventData {
    /// Creates an event, sorting dates and times ascending.
    pub fn new(
        nanoid: impl Into<String>,
        title: impl Into<String>,
        mode: EventMode,
        mut available_dates: Vec<DateValue>,
        mut available_times: Vec<TimeRange>,
    ) -> Self {
        available_dates.sort();
        available_times.sort();
        Self {
            nanoid: nanoid.into(),
            title: title.into(),
            mode,
            available_dates,
            available_times,
        }
    }

    /// Parses the wire form. Dates and times are sorted ascending and exact
    /// duplicates are dropped.
    pub fn parse(serialized: SerializedEventData) -> Result<Self, ParseError> {
        let available_dates = serialized
            .available_dates
            .iter()
            .map(|d| d.parse())
            .collect::<Result<Vec<DateValue>, _>>()?;
        let available_times = serialized
            .available_times
            .iter()
            .map(|t| t.parse())
            .collect::<Result<Vec<TimeRange>, _>>()?;

        let mut event = Self::new(
            serialized.nanoid,
            serialized.title,
            serialized.mode,
            available_dates,
            available_times,
        );

        let (dates, times) = (event.available_dates.len(), event.available_times.len());
        event.available_dates.dedup();
        event.available_times.dedup();
        if dates != event.available_dates.len() || times != event.available_times.len() {
            tracing::debug!(
                nanoid = %event.nanoid,
                dropped_dates = dates - event.available_dates.len(),
                dropped_times = times - event.available_times.len(),
                "Dropped duplicate event options"
            );
        }

        Ok(event)
    }

    /// Converts back to the wire form.
    pub fn to_serialized(&self) -> SerializedEventData {
        SerializedEventData {
            nanoid: self.nanoid.clone(),
            title: self.title.clone(),
            mode: self.mode,
            available_dates: self.available_dates.iter().map(ToString::to_string).collect(),
            available_times: self.available_times.iter().map(ToString::to_string).collect(),
        }
    }

    /// The time axis of the grid: the configured slots, or the full-day
    /// sentinel for date-only events.
    pub fn grid_times(&self) -> Vec<TimeRange> {
        match self.mode {
            EventMode::DateTime => self.available_times.clone(),
            EventMode::DateOnly => vec![TimeRange::full_day()],
        }
    }

    /// Validates the event before it is offered to participants.
    pub fn validate(&self) -> Result<(), EventError> {
        validate_event(self)
    }
}

impl TryFrom<SerializedEventData> for EventData {
    type Error = ParseError;

    fn try_from(serialized: SerializedEventData) -> Result<Self, Self::Error> {
        EventData::parse(serialized)
    }
}

impl From<EventData> for SerializedEventData {
    fn from(event: EventData) -> Self {
        event.to_serialized()
    }
}

/// Validates an event's configuration.
pub fn validate_event(event: &EventData) -> Result<(), EventError> {
    if event.title.trim().is_empty() {
        return Err(EventError::EmptyTitle);
    }
    if event.available_dates.is_empty() {
        return Err(EventError::NoDates);
    }

    let mut dates = event.available_dates.clone();
    dates.sort();
    if let Some(pair) = dates.windows(2).find(|pair| pair[0] == pair[1]) {
        return Err(EventError::DuplicateDate(pair[0].to_string()));
    }

    // Date-only events ignore their time slots.
    if event.mode.is_date_only() {
        return Ok(());
    }
    if event.available_times.is_empty() {
        return Err(EventError::NoTimes);
    }

    let mut times = event.available_times.clone();
    times.sort();
    for pair in times.windows(2) {
        if pair[0] == pair[1] {
            return Err(EventError::DuplicateTime(pair[0].to_string()));
        }
        if pair[0].overlaps(&pair[1]) {
            return Err(EventError::OverlappingTimes(
                pair[0].to_string(),
                pair[1].to_string(),
            ));
        }
    }

    Ok(())
}

/// Materializes every selectable cell of an event, date-major then time-minor.
///
/// Enumerates the same sorted, de-duplicated axes as [`GridIndex`], so the
/// result matches the index even if the public fields were edited by hand.
///
/// # Examples
///
/// ```
/// use slotsync_core::availability::{build_option_grid, EventData, EventMode};
///
/// let event = EventData::new(
///     "abc",
///     "Team lunch",
///     EventMode::DateTime,
///     vec!["2024-01-02".parse().unwrap(), "2024-01-01".parse().unwrap()],
///     vec!["12:00-13:00".parse().unwrap()],
/// );
/// let grid: Vec<String> = build_option_grid(&event).iter().map(|c| c.to_string()).collect();
///
/// assert_eq!(grid, ["2024-01-01_12:00-13:00", "2024-01-02_12:00-13:00"]);
/// ```
pub fn build_option_grid(event: &EventData) -> Vec<DateTimeRange> {
    GridIndex::new(event).cells()
}
