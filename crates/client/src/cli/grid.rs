//! Grid CLI command.

use std::path::PathBuf;

use clap::Parser;
use slotsync_core::availability::build_option_grid;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::io::{load_event, load_selection};
use crate::output::{format_output, pretty};

/// Print the option grid of an event.
#[derive(Debug, Parser)]
pub struct GridCommand {
    /// Event file in wire form.
    #[arg(long)]
    pub event: PathBuf,

    /// Saved selection to mark on the grid.
    #[arg(long)]
    pub selection: Option<PathBuf>,
}

impl GridCommand {
    pub fn run(&self, format: OutputFormat) -> Result<String> {
        let event = load_event(&self.event)?;
        let selection = load_selection(self.selection.as_deref())?;

        Ok(match format {
            OutputFormat::Json => format_output(&build_option_grid(&event), format),
            OutputFormat::Pretty => pretty::format_grid(&event, &selection),
        })
    }
}
