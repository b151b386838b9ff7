//! Toggle-date CLI command.

use std::path::PathBuf;

use clap::Parser;
use slotsync_core::availability::{AvailabilityEditor, DateValue};

use crate::cli::OutputFormat;
use crate::error::{ClientError, Result};
use crate::io::{load_event, load_selection, save_selection};
use crate::output::{format_output, pretty, SelectionReport};

/// Toggle a whole day in a date-only event.
#[derive(Debug, Parser)]
pub struct ToggleDateCommand {
    /// Event file in wire form.
    #[arg(long)]
    pub event: PathBuf,

    /// Current selection. Starts empty when omitted.
    #[arg(long)]
    pub selection: Option<PathBuf>,

    /// Day to toggle (YYYY-MM-DD).
    #[arg(long)]
    pub date: DateValue,

    /// Write the new selection back to the `--selection` file.
    #[arg(long, requires = "selection")]
    pub save: bool,
}

impl ToggleDateCommand {
    pub fn run(&self, format: OutputFormat, quiet: bool) -> Result<String> {
        let event = load_event(&self.event)?;
        if !event.mode.is_date_only() {
            return Err(ClientError::InvalidInput(format!(
                "event {} offers time slots, use `drag` instead",
                event.nanoid
            )));
        }
        let before = load_selection(self.selection.as_deref())?;
        let mut editor = AvailabilityEditor::new(event, before.clone());

        let after = editor.toggle_date(self.date).cloned().ok_or_else(|| {
            ClientError::InvalidInput(format!("{} is not one of the event's dates", self.date))
        })?;

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
