//! CLI command definitions.

pub mod blocks;
pub mod demo;
pub mod drag;
pub mod grid;
pub mod heatmap;
pub mod toggle_date;
pub mod who;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Config;
use crate::error::Result;

/// Pick and aggregate availability for group polls.
#[derive(Debug, Parser)]
#[command(name = "slotsync")]
#[command(about = "Pick and aggregate availability for group polls", long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, env = "SLOTSYNC_FORMAT", default_value = "pretty", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the option grid of an event.
    Grid(grid::GridCommand),
    /// Print the event's time slots merged into contiguous blocks.
    Blocks(blocks::BlocksCommand),
    /// Run one drag gesture and print the resulting selection.
    Drag(drag::DragCommand),
    /// Toggle a whole day in a date-only event.
    ToggleDate(toggle_date::ToggleDateCommand),
    /// Aggregate everyone's picks into heat buckets.
    Heatmap(heatmap::HeatmapCommand),
    /// List the participants who picked a slot.
    Who(who::WhoCommand),
    /// Print a generated demo event with participant results.
    Demo(demo::DemoCommand),
}

impl Cli {
    /// Runs the selected command and returns the text to print.
    pub fn run(&self, config: &Config) -> Result<String> {
        match &self.command {
            Commands::Grid(cmd) => cmd.run(self.format),
            Commands::Blocks(cmd) => cmd.run(self.format),
            Commands::Drag(cmd) => cmd.run(self.format, self.quiet),
            Commands::ToggleDate(cmd) => cmd.run(self.format, self.quiet),
            Commands::Heatmap(cmd) => cmd.run(self.format, config),
            Commands::Who(cmd) => cmd.run(self.format),
            Commands::Demo(cmd) => cmd.run(self.format),
        }
    }
}
