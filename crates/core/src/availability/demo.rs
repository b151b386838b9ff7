//! Demo data for trying out the engine and for tests.
//!
//! Pure functions: the same arguments always produce the same event and picks.

use chrono::{Days, NaiveDate};

use super::cell::DateTimeRange;
use super::date::DateValue;
use super::event::{EventMode, SerializedEventData};
use super::heatmap::ParticipantPicks;

const PARTICIPANT_NAMES: [&str; 8] = [
    "Alice", "Bruno", "Chen", "Dara", "Emeka", "Farah", "Goran", "Hana",
];

/// Builds a demo event starting on `first_date`.
///
/// Offers `days` consecutive dates with a morning block of three hour-long
/// slots and a separate afternoon block of two. Dates stop early at the last
/// one a `DateValue` can hold (`9999-12-31`).
///
/// # Example
///
/// ```
/// use slotsync_core::availability::{generate_demo_event, EventData};
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
/// let event = EventData::parse(generate_demo_event(start, 3)).unwrap();
///
/// assert_eq!(event.available_dates.len(), 3);
/// assert_eq!(event.available_times.len(), 5);
/// ```
pub fn generate_demo_event(first_date: NaiveDate, days: u32) -> SerializedEventData {
    let available_dates = (0..days)
        .map_while(|offset| first_date.checked_add_days(Days::new(offset as u64)))
        .map_while(|date| DateValue::try_from(date).ok())
        .map(|date| date.to_string())
        .collect();
    let available_times = [
        "09:00-10:00",
        "10:00-11:00",
        "11:00-12:00",
        "14:00-15:00",
        "15:00-16:00",
    ]
    .iter()
    .map(|t| t.to_string())
    .collect();

    SerializedEventData {
        nanoid: "demo-quarterly-planning".to_string(),
        title: "Quarterly planning".to_string(),
        mode: EventMode::DateTime,
        available_dates,
        available_times,
    }
}

/// Generates picks for `count` participants over `grid`.
///
/// Participant `i` picks every cell whose grid position `j` satisfies
/// `(i + j) % (i + 2) != 0`, so earlier participants are pickier and the
/// resulting heatmap has a spread of buckets. Names cycle through a fixed
/// list and get a numeric suffix once it runs out.
pub fn generate_demo_picks(grid: &[DateTimeRange], count: u32) -> Vec<ParticipantPicks> {
    (0..count as usize)
        .map(|i| {
            let base = PARTICIPANT_NAMES[i % PARTICIPANT_NAMES.len()];
            let name = match i / PARTICIPANT_NAMES.len() {
                0 => base.to_string(),
                round => format!("{} {}", base, round + 1),
            };
            let picks = grid
                .iter()
                .enumerate()
                .filter(|(j, _)| (i + j) % (i + 2) != 0)
                .map(|(_, cell)| *cell)
                .collect();
            ParticipantPicks::new(name, picks)
        })
        .collect()
}
