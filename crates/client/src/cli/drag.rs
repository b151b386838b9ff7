//! Drag CLI command.

use std::path::PathBuf;

use clap::Parser;
use slotsync_core::availability::{AvailabilityEditor, DateTimeRange};

use crate::cli::OutputFormat;
use crate::error::{ClientError, Result};
use crate::io::{load_event, load_selection, save_selection};
use crate::output::{format_output, pretty, SelectionReport};

/// Run one drag gesture: press on `anchor`, move to `current`, release.
#[derive(Debug, Parser)]
pub struct DragCommand {
    /// Event file in wire form.
    #[arg(long)]
    pub event: PathBuf,

    /// Current selection. Starts empty when omitted.
    #[arg(long)]
    pub selection: Option<PathBuf>,

    /// Cell where the gesture starts.
    #[arg(long)]
    pub anchor: DateTimeRange,

    /// Cell under the pointer when it is released.
    #[arg(long)]
    pub current: DateTimeRange,

    /// Write the new selection back to the `--selection` file.
    #[arg(long, requires = "selection")]
    pub save: bool,
}

impl DragCommand {
    pub fn run(&self, format: OutputFormat, quiet: bool) -> Result<String> {
        let event = load_event(&self.event)?;
        let before = load_selection(self.selection.as_deref())?;
        let mut editor = AvailabilityEditor::new(event, before.clone());

        if !editor.pointer_down(self.anchor) {
            return Err(ClientError::InvalidInput(format!(
                "anchor {} is not on the event grid",
                self.anchor
            )));
        }
        if !editor.grid().contains(&self.current) {
            tracing::warn!(
                current = %self.current,
                "Current cell is outside the grid, span stays on the anchor"
            );
        }
        editor.pointer_move(self.current);
        let after = editor.pointer_up().cloned().unwrap_or_else(|| before.clone());

        let report = SelectionReport::new(&before, after);
        let mut output = match format {
            OutputFormat::Json => format_output(&report, format),
            OutputFormat::Pretty => pretty::format_selection(editor.event(), &report),
        };

        if let (true, Some(path)) = (self.save, self.selection.as_deref()) {
            save_selection(path, &report.selection)?;
            if !quiet && format == OutputFormat::Pretty {
                output.push_str(&format!("\nSaved selection to {}", path.display()));
            }
        }
        Ok(output)
    }
}
