//! Range-span resolution: which grid cells a drag from an anchor covers.
//!
//! A cell belongs to the span when its start time lies in the closed interval
//! between the anchor's and the current cell's start times, and its date lies
//! in the closed interval between their dates. Both bounds are taken in
//! either order, so the result does not depend on drag direction.
//!
//! References outside the grid are not errors: the grid may change between
//! render and gesture, so they resolve to an empty span.

use super::cell::DateTimeRange;
use super::date::DateValue;
use super::event::EventData;
use super::time::TimeRange;

/// Two-axis lookup over an event's option grid.
///
/// Built once per `EventData`; resolving a span costs two binary searches
/// per axis plus the size of the span itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridIndex {
    dates: Vec<DateValue>,
    times: Vec<TimeRange>,
}

impl GridIndex {
    pub fn new(event: &EventData) -> Self {
        Self::from_axes(event.available_dates.clone(), event.grid_times())
    }

    /// Builds an index from raw axes. Both are sorted and de-duplicated.
    pub fn from_axes(mut dates: Vec<DateValue>, mut times: Vec<TimeRange>) -> Self {
        dates.sort();
        dates.dedup();
        times.sort();
        times.dedup();
        Self { dates, times }
    }

    pub fn dates(&self) -> &[DateValue] {
        &self.dates
    }

    pub fn times(&self) -> &[TimeRange] {
        &self.times
    }

    /// Number of cells in the grid.
    pub fn len(&self) -> usize {
        self.dates.len() * self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Column (date) and row (time) of a cell, if it is part of the grid.
    pub fn position(&self, cell: &DateTimeRange) -> Option<(usize, usize)> {
        let column = self.dates.binary_search(&cell.date()).ok()?;
        let row = self.times.binary_search(&cell.time_range()).ok()?;
        Some((column, row))
    }

    pub fn contains(&self, cell: &DateTimeRange) -> bool {
        self.position(cell).is_some()
    }

    /// Every cell of the grid, date-major then time-minor.
    pub fn cells(&self) -> Vec<DateTimeRange> {
        self.dates
            .iter()
            .flat_map(|date| {
                self.times
                    .iter()
                    .map(move |time| DateTimeRange::new(*date, *time))
            })
            .collect()
    }

    /// Resolves the cells spanned between `anchor` and `current`, inclusive,
    /// in grid order.
    ///
    /// # Examples
    ///
    /// ```
    /// use slotsync_core::availability::{EventData, EventMode, GridIndex};
    ///
    /// let event = EventData::new(
    ///     "abc",
    ///     "Standup",
    ///     EventMode::DateTime,
    ///     vec!["2024-01-01".parse().unwrap(), "2024-01-02".parse().unwrap()],
    ///     vec!["09:00-10:00".parse().unwrap(), "10:00-11:00".parse().unwrap()],
    /// );
    /// let index = GridIndex::new(&event);
    ///
    /// let anchor = "2024-01-02_10:00-11:00".parse().unwrap();
    /// let current = "2024-01-01_09:00-10:00".parse().unwrap();
    ///
    /// assert_eq!(index.resolve_span(&anchor, &current).len(), 4);
    /// ```
    pub fn resolve_span(
        &self,
        anchor: &DateTimeRange,
        current: &DateTimeRange,
    ) -> Vec<DateTimeRange> {
        if !self.contains(anchor) || !self.contains(current) {
            tracing::debug!(
                anchor = %anchor,
                current = %current,
                "Span endpoint outside the option grid, resolving to an empty span"
            );
            return Vec::new();
        }
        if anchor == current {
            return vec![*anchor];
        }

        let (first_start, last_start) =
            ordered(anchor.time_range().start(), current.time_range().start());
        let (first_date, last_date) = ordered(anchor.date(), current.date());

        let rows = self.times.partition_point(|t| t.start() < first_start)
            ..self.times.partition_point(|t| t.start() <= last_start);
        let columns = self.dates.partition_point(|d| *d < first_date)
            ..self.dates.partition_point(|d| *d <= last_date);

        let span: Vec<DateTimeRange> = self.dates[columns]
            .iter()
            .flat_map(|date| {
                self.times[rows.clone()]
                    .iter()
                    .map(move |time| DateTimeRange::new(*date, *time))
            })
            .collect();

        tracing::trace!(
            anchor = %anchor,
            current = %current,
            cells = span.len(),
            "Resolved span"
        );
        span
    }
}

/// Resolves a span by scanning every cell of `grid`.
///
/// Same semantics as [`GridIndex::resolve_span`], for callers holding a plain
/// cell list rather than an index.
pub fn resolve_span(
    grid: &[DateTimeRange],
    anchor: &DateTimeRange,
    current: &DateTimeRange,
) -> Vec<DateTimeRange> {
    if !grid.contains(anchor) || !grid.contains(current) {
        tracing::debug!(
            anchor = %anchor,
            current = %current,
            "Span endpoint outside the option grid, resolving to an empty span"
        );
        return Vec::new();
    }
    if anchor == current {
        return vec![*anchor];
    }

    let (first_start, last_start) =
        ordered(anchor.time_range().start(), current.time_range().start());
    let (first_date, last_date) = ordered(anchor.date(), current.date());

    grid.iter()
        .filter(|cell| {
            within(cell.time_range().start(), first_start, last_start)
                && within(cell.date(), first_date, last_date)
        })
        .copied()
        .collect()
}

fn ordered<T: Ord>(a: T, b: T) -> (T, T) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn within<T: Ord>(value: T, low: T, high: T) -> bool {
    low <= value && value <= high
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::availability::event::{build_option_grid, EventMode};

    fn make_event(dates: &[&str], times: &[&str]) -> EventData {
        EventData::new(
            "test",
            "Test event",
            EventMode::DateTime,
            dates.iter().map(|d| d.parse().unwrap()).collect(),
            times.iter().map(|t| t.parse().unwrap()).collect(),
        )
    }

    fn make_cell(s: &str) -> DateTimeRange {
        s.parse().unwrap()
    }

    fn to_strings(cells: &[DateTimeRange]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn week_event() -> EventData {
        make_event(
            &["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-04"],
            &["09:00-10:00", "10:00-11:00", "11:00-12:00", "14:00-15:00"],
        )
    }

    #[test]
    fn test_resolve_span_full_rectangle() {
        let event = make_event(&["2024-01-01", "2024-01-02"], &["09:00-10:00", "10:00-11:00"]);
        let index = GridIndex::new(&event);

        let span = index.resolve_span(
            &make_cell("2024-01-01_09:00-10:00"),
            &make_cell("2024-01-02_10:00-11:00"),
        );

        assert_eq!(span, build_option_grid(&event));
    }

    #[test]
    fn test_resolve_span_single_cell() {
        let index = GridIndex::new(&week_event());
        let cell = make_cell("2024-01-02_10:00-11:00");

        assert_eq!(index.resolve_span(&cell, &cell), vec![cell]);
    }

    #[test]
    fn test_resolve_span_is_direction_independent() {
        let index = GridIndex::new(&week_event());
        let a = make_cell("2024-01-03_09:00-10:00");
        let b = make_cell("2024-01-02_11:00-12:00");

        let forward = index.resolve_span(&a, &b);
        let backward = index.resolve_span(&b, &a);

        assert_eq!(forward, backward);
        assert_eq!(
            to_strings(&forward),
            [
                "2024-01-02_09:00-10:00",
                "2024-01-02_10:00-11:00",
                "2024-01-02_11:00-12:00",
                "2024-01-03_09:00-10:00",
                "2024-01-03_10:00-11:00",
                "2024-01-03_11:00-12:00",
            ]
        );
    }

    #[test]
    fn test_resolve_span_single_column() {
        let index = GridIndex::new(&week_event());
        let span = index.resolve_span(
            &make_cell("2024-01-04_14:00-15:00"),
            &make_cell("2024-01-04_10:00-11:00"),
        );

        assert_eq!(
            to_strings(&span),
            [
                "2024-01-04_10:00-11:00",
                "2024-01-04_11:00-12:00",
                "2024-01-04_14:00-15:00",
            ]
        );
    }

    #[test]
    fn test_resolve_span_includes_boundary_slots() {
        let index = GridIndex::new(&week_event());
        let span = index.resolve_span(
            &make_cell("2024-01-01_09:00-10:00"),
            &make_cell("2024-01-04_14:00-15:00"),
        );

        assert_eq!(span.len(), index.len());
    }

    #[test]
    fn test_resolve_span_outside_grid_is_empty() {
        let index = GridIndex::new(&week_event());
        let inside = make_cell("2024-01-01_09:00-10:00");

        let wrong_date = make_cell("2024-02-01_09:00-10:00");
        let wrong_time = make_cell("2024-01-01_09:00-09:30");

        assert!(index.resolve_span(&inside, &wrong_date).is_empty());
        assert!(index.resolve_span(&wrong_time, &inside).is_empty());
        assert!(index.resolve_span(&wrong_time, &wrong_time).is_empty());
    }

    #[test]
    fn test_scan_matches_index() {
        let event = week_event();
        let index = GridIndex::new(&event);
        let grid = build_option_grid(&event);

        for anchor in &grid {
            for current in &grid {
                assert_eq!(
                    resolve_span(&grid, anchor, current),
                    index.resolve_span(anchor, current),
                    "anchor {anchor}, current {current}"
                );
            }
        }
    }

    #[test]
    fn test_scan_outside_grid_is_empty() {
        let grid = build_option_grid(&week_event());
        let outside = make_cell("2023-12-31_09:00-10:00");
        assert!(resolve_span(&grid, &outside, &grid[0]).is_empty());
    }

    #[test]
    fn test_position_and_contains() {
        let index = GridIndex::new(&week_event());
        assert_eq!(
            index.position(&make_cell("2024-01-03_11:00-12:00")),
            Some((2, 2))
        );
        assert!(!index.contains(&make_cell("2024-01-03_12:00-13:00")));
        assert_eq!(index.cells().len(), 16);
    }

    #[test]
    fn test_date_only_index_uses_full_day_sentinel() {
        let mut event = week_event();
        event.mode = EventMode::DateOnly;
        let index = GridIndex::new(&event);

        assert_eq!(index.times(), &[TimeRange::full_day()]);
        let span = index.resolve_span(
            &make_cell("2024-01-01_00:00-23:59"),
            &make_cell("2024-01-03_00:00-23:59"),
        );
        assert_eq!(span.len(), 3);
    }
}
