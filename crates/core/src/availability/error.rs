use thiserror::Error;

/// Errors raised when decoding a canonical string into a value type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid time (expected HH:MM): {0}")]
    InvalidTime(String),
    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),
    #[error("Invalid time range (expected HH:MM-HH:MM): {0}")]
    InvalidTimeRange(String),
    #[error("Time range must end after it starts: {0}")]
    EmptyTimeRange(String),
    #[error("Invalid date time range (expected YYYY-MM-DD_HH:MM-HH:MM): {0}")]
    InvalidDateTimeRange(String),
    #[error("Invalid event mode (expected datetime or date-only): {0}")]
    InvalidMode(String),
}

/// Errors that can occur when validating an event's configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event must offer at least one date")]
    NoDates,
    #[error("Event must offer at least one time slot")]
    NoTimes,
    #[error("Date offered more than once: {0}")]
    DuplicateDate(String),
    #[error("Time slot offered more than once: {0}")]
    DuplicateTime(String),
    #[error("Time slots overlap: {0} and {1}")]
    OverlappingTimes(String, String),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
