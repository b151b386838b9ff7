//! Blocks CLI command.

use std::path::PathBuf;

use clap::Parser;
use slotsync_core::availability::merge_time_blocks;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::io::load_event;
use crate::output::{format_output, pretty};

/// Print the event's time slots merged into contiguous blocks.
#[derive(Debug, Parser)]
pub struct BlocksCommand {
    /// Event file in wire form.
    #[arg(long)]
    pub event: PathBuf,
}

impl BlocksCommand {
    pub fn run(&self, format: OutputFormat) -> Result<String> {
        let event = load_event(&self.event)?;
        let blocks = merge_time_blocks(&event.grid_times());

        Ok(match format {
            OutputFormat::Json => format_output(&blocks, format),
            OutputFormat::Pretty => pretty::format_blocks(&blocks),
        })
    }
}
