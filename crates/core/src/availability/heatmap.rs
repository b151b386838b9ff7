//! Aggregation of everyone's picks into per-cell heat buckets.
//!
//! Each cell is counted independently: the number of participants whose picks
//! contain it, mapped onto one of [`BUCKET_COUNT`] intensity levels.

use serde::{Deserialize, Serialize};

use super::cell::DateTimeRange;
use super::date::DateValue;
use super::event::{build_option_grid, EventData};

/// Number of intensity levels. Bucket 0 means nobody picked the cell.
pub const BUCKET_COUNT: u8 = 10;

/// One participant's submitted availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantPicks {
    pub name: String,
    pub picks: Vec<DateTimeRange>,
}

impl ParticipantPicks {
    pub fn new(name: impl Into<String>, picks: Vec<DateTimeRange>) -> Self {
        Self {
            name: name.into(),
            picks,
        }
    }

    pub fn picked(&self, cell: &DateTimeRange) -> bool {
        self.picks.contains(cell)
    }

    /// Returns true if any pick falls on `date`.
    pub fn picked_date(&self, date: DateValue) -> bool {
        self.picks.iter().any(|pick| pick.date() == date)
    }
}

/// Aggregated participation for one grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatCell {
    pub cell: DateTimeRange,
    pub count: usize,
    pub total: usize,
    pub bucket: u8,
}

impl HeatCell {
    pub fn new(cell: DateTimeRange, count: usize, total: usize) -> Self {
        Self {
            cell,
            count,
            total,
            bucket: bucket_index(count, total),
        }
    }

    /// `"count / total"`, as shown under each day in date-only events.
    pub fn label(&self) -> String {
        format!("{} / {}", self.count, self.total)
    }
}

/// Maps `count` of `total` participants to a bucket in `0..BUCKET_COUNT`.
///
/// Rounds `count * 10 / total` half-up, computed in integers so the `.5`
/// boundary is exact, then clamps to the top bucket. With no participants
/// every cell is bucket 0.
///
/// # Examples
///
/// ```
/// use slotsync_core::availability::bucket_index;
///
/// assert_eq!(bucket_index(0, 4), 0);
/// assert_eq!(bucket_index(1, 4), 3); // 2.5 rounds up
/// assert_eq!(bucket_index(4, 4), 9);
/// assert_eq!(bucket_index(3, 0), 0);
/// ```
pub fn bucket_index(count: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let scale = BUCKET_COUNT as usize;
    // floor(count * scale / total + 1/2)
    let rounded = (2 * count * scale + total) / (2 * total);
    rounded.min(scale - 1) as u8
}

/// Number of participants who picked `cell`.
pub fn count_cell(results: &[ParticipantPicks], cell: &DateTimeRange) -> usize {
    results.iter().filter(|p| p.picked(cell)).count()
}

/// Number of participants with at least one pick on `date`.
pub fn count_date(results: &[ParticipantPicks], date: DateValue) -> usize {
    results.iter().filter(|p| p.picked_date(date)).count()
}

/// Names of the participants who picked `cell`, in submission order.
pub fn participants_for<'a>(
    results: &'a [ParticipantPicks],
    cell: &DateTimeRange,
) -> Vec<&'a str> {
    results
        .iter()
        .filter(|p| p.picked(cell))
        .map(|p| p.name.as_str())
        .collect()
}

/// Names of the participants with at least one pick on `date`.
pub fn participants_for_date(results: &[ParticipantPicks], date: DateValue) -> Vec<&str> {
    results
        .iter()
        .filter(|p| p.picked_date(date))
        .map(|p| p.name.as_str())
        .collect()
}

/// Builds one heat cell per grid cell of `event`, in grid order.
///
/// Date-only events count a participant for a date when any of their picks
/// falls on it, whatever the time slot.
pub fn build_heatmap(event: &EventData, results: &[ParticipantPicks]) -> Vec<HeatCell> {
    let total = results.len();
    let heatmap: Vec<HeatCell> = build_option_grid(event)
        .into_iter()
        .map(|cell| {
            let count = if event.mode.is_date_only() {
                count_date(results, cell.date())
            } else {
                count_cell(results, &cell)
            };
            HeatCell::new(cell, count, total)
        })
        .collect();

    tracing::trace!(
        nanoid = %event.nanoid,
        participants = total,
        cells = heatmap.len(),
        "Built heatmap"
    );
    heatmap
}

/// The most popular cells: every cell sharing the highest non-zero count.
pub fn best_cells(heatmap: &[HeatCell]) -> Vec<&HeatCell> {
    let Some(max) = heatmap.iter().map(|c| c.count).max().filter(|max| *max > 0) else {
        return Vec::new();
    };
    heatmap.iter().filter(|c| c.count == max).collect()
}
