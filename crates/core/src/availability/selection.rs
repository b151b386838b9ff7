//! Selection sets and the anchor-state toggle committer.
//!
//! The caller owns the selection. Every operation here returns a new
//! `Selection` and leaves its input untouched.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::cell::DateTimeRange;
use super::date::DateValue;

/// A set of picked cells, ordered by date then time slot.
///
/// Membership is structural, which coincides with equality of the canonical
/// string form. Serializes as an array of canonical strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(BTreeSet<DateTimeRange>);

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, cell: &DateTimeRange) -> bool {
        self.0.contains(cell)
    }

    /// Returns true if any selected cell falls on `date`.
    pub fn contains_date(&self, date: DateValue) -> bool {
        self.0.iter().any(|cell| cell.date() == date)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DateTimeRange> {
        self.0.iter()
    }

    pub fn to_vec(&self) -> Vec<DateTimeRange> {
        self.0.iter().copied().collect()
    }

    /// Cells added and removed when going from `self` to `next`.
    pub fn diff(&self, next: &Selection) -> SelectionDelta {
        SelectionDelta {
            added: next.0.difference(&self.0).copied().collect(),
            removed: self.0.difference(&next.0).copied().collect(),
        }
    }
}

impl FromIterator<DateTimeRange> for Selection {
    fn from_iter<I: IntoIterator<Item = DateTimeRange>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a DateTimeRange;
    type IntoIter = std::collections::btree_set::Iter<'a, DateTimeRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The change between two selections, for callers that persist incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionDelta {
    pub added: Vec<DateTimeRange>,
    pub removed: Vec<DateTimeRange>,
}

impl SelectionDelta {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Folds a resolved span into a selection using anchor-state toggling.
///
/// When the gesture started on a selected cell every span cell is removed,
/// otherwise every span cell is added. The decision is made once per gesture,
/// so a drag never mixes additions and removals. Members outside the span are
/// preserved.
///
/// Committing twice is only idempotent if the caller recomputes
/// `anchor_was_selected` from the first result.
///
/// # Examples
///
/// ```
/// use slotsync_core::availability::{commit, Selection};
///
/// let cell = "2024-01-01_09:00-10:00".parse().unwrap();
/// let selection: Selection = [cell].into_iter().collect();
///
/// let next = commit(&selection, &[cell], selection.contains(&cell));
/// assert!(next.is_empty());
/// assert_eq!(selection.len(), 1);
/// ```
pub fn commit(
    selection: &Selection,
    span: &[DateTimeRange],
    anchor_was_selected: bool,
) -> Selection {
    let mut next = selection.0.clone();
    if anchor_was_selected {
        for cell in span {
            next.remove(cell);
        }
    } else {
        next.extend(span.iter().copied());
    }

    tracing::trace!(
        span = span.len(),
        removing = anchor_was_selected,
        before = selection.len(),
        after = next.len(),
        "Committed span"
    );
    Selection(next)
}

/// Toggles a whole day in a date-only event.
///
/// If any selected cell falls on `date`, every cell on that date is removed.
/// Otherwise the full-day cell for `date` is added.
pub fn toggle_date(selection: &Selection, date: DateValue) -> Selection {
    if selection.contains_date(date) {
        selection
            .iter()
            .filter(|cell| cell.date() != date)
            .copied()
            .collect()
    } else {
        let mut next = selection.0.clone();
        next.insert(DateTimeRange::full_day(date));
        Selection(next)
    }
}
