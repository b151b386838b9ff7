//! Pointer gesture handling for the editable availability grid.
//!
//! Events arrive one at a time from a single dispatch thread: a down sets the
//! anchor, any number of moves update the current cell, and an up commits the
//! span. None of these can fail; out-of-grid cells and out-of-order events are
//! ignored so a gesture never gets stuck half-way.

use std::fmt;

use super::cell::DateTimeRange;
use super::date::DateValue;
use super::event::EventData;
use super::selection::{commit, toggle_date, Selection};
use super::span::GridIndex;

/// State of a single pointer gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging {
        anchor: DateTimeRange,
        current: DateTimeRange,
        /// Decided once on pointer-down; picks between adding and removing.
        anchor_was_selected: bool,
    },
}

/// How a cell should be shown while a gesture may be in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Unselected,
    Selected,
    /// Inside the span of a drag that will add it.
    PendingAdd,
    /// Inside the span of a drag that will remove it.
    PendingRemove,
}

impl CellState {
    /// Whether the cell ends up selected if the gesture is committed now.
    pub fn is_selected_after_commit(&self) -> bool {
        matches!(self, CellState::Selected | CellState::PendingAdd)
    }
}

impl Gesture {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Gesture::Dragging { .. })
    }

    pub fn anchor(&self) -> Option<DateTimeRange> {
        match self {
            Gesture::Dragging { anchor, .. } => Some(*anchor),
            Gesture::Idle => None,
        }
    }

    /// Starts a gesture on `cell`. Returns false if the cell is not in the grid.
    ///
    /// A down while already dragging restarts the gesture from the new cell.
    pub fn pointer_down(
        &mut self,
        grid: &GridIndex,
        cell: DateTimeRange,
        selection: &Selection,
    ) -> bool {
        if !grid.contains(&cell) {
            tracing::debug!(cell = %cell, "Ignoring pointer down outside the option grid");
            return false;
        }
        if let Some(previous) = self.anchor() {
            tracing::debug!(previous = %previous, cell = %cell, "Restarting gesture");
        }
        *self = Gesture::Dragging {
            anchor: cell,
            current: cell,
            anchor_was_selected: selection.contains(&cell),
        };
        true
    }

    /// Moves the gesture to `cell` and returns the span it now covers.
    ///
    /// Cells outside the grid keep the previous current cell. Idle gestures
    /// return an empty span.
    pub fn pointer_move(&mut self, grid: &GridIndex, cell: DateTimeRange) -> Vec<DateTimeRange> {
        if let Gesture::Dragging { current, .. } = self {
            if grid.contains(&cell) {
                *current = cell;
            } else {
                tracing::debug!(cell = %cell, "Ignoring pointer move outside the option grid");
            }
        }
        self.span(grid)
    }

    /// The span currently covered, empty when idle.
    pub fn span(&self, grid: &GridIndex) -> Vec<DateTimeRange> {
        match self {
            Gesture::Dragging {
                anchor, current, ..
            } => grid.resolve_span(anchor, current),
            Gesture::Idle => Vec::new(),
        }
    }

    /// Ends the gesture, returning the new selection.
    ///
    /// Returns `None` for an up without a matching down.
    pub fn pointer_up(&mut self, grid: &GridIndex, selection: &Selection) -> Option<Selection> {
        let gesture = std::mem::take(self);
        match gesture {
            Gesture::Dragging {
                anchor_was_selected,
                ..
            } => Some(commit(selection, &gesture.span(grid), anchor_was_selected)),
            Gesture::Idle => {
                tracing::debug!("Ignoring pointer up without a gesture in progress");
                None
            }
        }
    }

    /// Abandons the gesture without touching any selection.
    pub fn cancel(&mut self) {
        *self = Gesture::Idle;
    }

    /// Display state of `cell` given the gesture in progress.
    pub fn preview(
        &self,
        grid: &GridIndex,
        cell: &DateTimeRange,
        selection: &Selection,
    ) -> CellState {
        if let Gesture::Dragging {
            anchor,
            current,
            anchor_was_selected,
        } = self
        {
            if grid.resolve_span(anchor, current).contains(cell) {
                return if *anchor_was_selected {
                    CellState::PendingRemove
                } else {
                    CellState::PendingAdd
                };
            }
        }
        if selection.contains(cell) {
            CellState::Selected
        } else {
            CellState::Unselected
        }
    }
}

type ChangeHandler = Box<dyn FnMut(&Selection)>;

/// Editable availability grid for one participant.
///
/// Holds the event, its grid index, a snapshot of the caller's selection and
/// the gesture in progress. Every completed gesture produces a new selection
/// which is stored as the new snapshot and handed to the change handler.
pub struct AvailabilityEditor {
    event: EventData,
    grid: GridIndex,
    selection: Selection,
    gesture: Gesture,
    read_only: bool,
    on_change: Option<ChangeHandler>,
}

impl AvailabilityEditor {
    pub fn new(event: EventData, selection: Selection) -> Self {
        let grid = GridIndex::new(&event);
        Self {
            event,
            grid,
            selection,
            gesture: Gesture::Idle,
            read_only: false,
            on_change: None,
        }
    }

    /// Registers the handler called once per completed gesture.
    pub fn on_change(mut self, handler: impl FnMut(&Selection) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Read-only editors ignore every pointer event.
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn event(&self) -> &EventData {
        &self.event
    }

    pub fn grid(&self) -> &GridIndex {
        &self.grid
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// Replaces the event and rebuilds the grid, dropping any gesture in
    /// progress.
    pub fn set_event(&mut self, event: EventData) {
        self.grid = GridIndex::new(&event);
        self.event = event;
        self.gesture.cancel();
    }

    /// Replaces the selection snapshot, e.g. after the caller reloads it.
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    pub fn pointer_down(&mut self, cell: DateTimeRange) -> bool {
        if self.read_only {
            return false;
        }
        self.gesture.pointer_down(&self.grid, cell, &self.selection)
    }

    pub fn pointer_move(&mut self, cell: DateTimeRange) -> Vec<DateTimeRange> {
        if self.read_only {
            return Vec::new();
        }
        self.gesture.pointer_move(&self.grid, cell)
    }

    /// Commits the gesture and notifies the change handler.
    pub fn pointer_up(&mut self) -> Option<&Selection> {
        if self.read_only {
            return None;
        }
        let next = self.gesture.pointer_up(&self.grid, &self.selection)?;
        Some(self.apply(next))
    }

    pub fn cancel(&mut self) {
        self.gesture.cancel();
    }

    /// Toggles a whole day. Ignored unless the event is date-only.
    pub fn toggle_date(&mut self, date: DateValue) -> Option<&Selection> {
        if !self.event.mode.is_date_only() {
            tracing::debug!(date = %date, "Ignoring date toggle on a datetime event");
            return None;
        }
        if self.read_only || !self.grid.dates().contains(&date) {
            tracing::debug!(date = %date, "Ignoring date toggle");
            return None;
        }
        let next = toggle_date(&self.selection, date);
        Some(self.apply(next))
    }

    pub fn preview(&self, cell: &DateTimeRange) -> CellState {
        self.gesture.preview(&self.grid, cell, &self.selection)
    }

    fn apply(&mut self, next: Selection) -> &Selection {
        self.selection = next;
        if let Some(handler) = self.on_change.as_mut() {
            handler(&self.selection);
        }
        &self.selection
    }
}

impl fmt::Debug for AvailabilityEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvailabilityEditor")
            .field("event", &self.event.nanoid)
            .field("cells", &self.grid.len())
            .field("selected", &self.selection.len())
            .field("gesture", &self.gesture)
            .field("read_only", &self.read_only)
            .finish()
    }
}
