//! Serde helper functions for the availability value types.
//!
//! Every value type travels on the wire as its canonical string, so the same
//! `Display`/`FromStr` pair decides both set-key equality and the JSON form.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serializer};

use crate::availability::EventMode;

/// Serialize a value through its `Display` implementation.
pub fn serialize_canonical<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.collect_str(value)
}

/// Deserialize a value from a string through its `FromStr` implementation.
pub fn deserialize_canonical<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: FromStr,
    T::Err: Display,
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.parse().map_err(serde::de::Error::custom)
}

/// Deserialize an optional event mode, treating missing or empty values as
/// the default mode.
pub fn deserialize_optional_mode<'de, D>(deserializer: D) -> Result<EventMode, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => s.trim().parse().map_err(serde::de::Error::custom),
        _ => Ok(EventMode::default()),
    }
}
