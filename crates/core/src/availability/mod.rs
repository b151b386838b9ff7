mod blocks;
mod cell;
mod date;
mod demo;
mod error;
mod event;
mod gesture;
mod heatmap;
mod selection;
mod span;
mod time;

pub use blocks::{merge_time_blocks, TimeBlock};
pub use cell::DateTimeRange;
pub use date::DateValue;
pub use demo::{generate_demo_event, generate_demo_picks};
pub use error::{EventError, ParseError};
pub use event::{build_option_grid, validate_event, EventData, EventMode, SerializedEventData};
pub use gesture::{AvailabilityEditor, CellState, Gesture};
pub use heatmap::{
    best_cells, bucket_index, build_heatmap, count_cell, count_date, participants_for,
    participants_for_date, HeatCell, ParticipantPicks, BUCKET_COUNT,
};
pub use selection::{commit, toggle_date, Selection, SelectionDelta};
pub use span::{resolve_span, GridIndex};
pub use time::{Time, TimeRange};
