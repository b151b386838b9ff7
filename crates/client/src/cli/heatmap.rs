//! Heatmap CLI command.

use std::path::PathBuf;

use clap::Parser;
use slotsync_core::availability::{best_cells, build_heatmap};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::Result;
use crate::io::{load_event, load_results};
use crate::output::{format_output, pretty};

/// Aggregate everyone's picks into heat buckets.
#[derive(Debug, Parser)]
pub struct HeatmapCommand {
    /// Event file in wire form.
    #[arg(long)]
    pub event: PathBuf,

    /// Results file: `[{ "name": ..., "picks": [...] }]`.
    #[arg(long)]
    pub results: PathBuf,

    /// Only print the most popular cells.
    #[arg(long)]
    pub best: bool,
}

impl HeatmapCommand {
    pub fn run(&self, format: OutputFormat, config: &Config) -> Result<String> {
        let event = load_event(&self.event)?;
        let results = load_results(&self.results)?;
        let heatmap = build_heatmap(&event, &results);

        if self.best {
            let best: Vec<_> = best_cells(&heatmap).into_iter().cloned().collect();
            return Ok(match format {
                OutputFormat::Json => format_output(&best, format),
                OutputFormat::Pretty => pretty::format_best(&best),
            });
        }

        Ok(match format {
            OutputFormat::Json => format_output(&heatmap, format),
            OutputFormat::Pretty => pretty::format_heatmap(&event, &heatmap, config),
        })
    }
}
