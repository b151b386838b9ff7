//! Output formatting functions.

pub mod json;
pub mod pretty;

use serde::Serialize;
use slotsync_core::availability::{DateTimeRange, Selection, SelectionDelta};

use crate::cli::OutputFormat;

/// Format a value for output.
pub fn format_output<T: serde::Serialize>(value: &T, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(value),
        OutputFormat::Pretty => serde_json::to_string_pretty(value).unwrap_or_default(),
    }
}

/// Result of a command that edits a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionReport {
    pub selection: Selection,
    #[serde(flatten)]
    pub delta: SelectionDelta,
}

impl SelectionReport {
    pub fn new(before: &Selection, after: Selection) -> Self {
        Self {
            delta: before.diff(&after),
            selection: after,
        }
    }
}

/// Who picked a given cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WhoReport {
    pub cell: DateTimeRange,
    pub participants: Vec<String>,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_selection(cells: &[&str]) -> Selection {
        cells.iter().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn test_selection_report_json() {
        let before = make_selection(&["2024-01-01_09:00-10:00"]);
        let after = make_selection(&["2024-01-01_10:00-11:00"]);

        let report = SelectionReport::new(&before, after);

        assert_eq!(
            format_output(&report, OutputFormat::Json),
            r#"{"selection":["2024-01-01_10:00-11:00"],"added":["2024-01-01_10:00-11:00"],"removed":["2024-01-01_09:00-10:00"]}"#
        );
    }

    #[test]
    fn test_pretty_json_is_indented() {
        let report = WhoReport {
            cell: "2024-01-01_09:00-10:00".parse().unwrap(),
            participants: vec!["Ana".to_string()],
            total: 3,
        };

        let output = format_output(&report, OutputFormat::Pretty);

        assert!(output.contains("\n  \"cell\": \"2024-01-01_09:00-10:00\""));
    }
}
