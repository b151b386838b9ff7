//! Demo CLI command.

use chrono::{Local, NaiveDate};
use clap::Parser;
use serde::Serialize;
use slotsync_core::availability::{
    build_option_grid, generate_demo_event, generate_demo_picks, EventData, ParticipantPicks,
    SerializedEventData,
};

use crate::cli::OutputFormat;
use crate::error::{ClientError, Result};
use crate::output::format_output;

/// Print a generated demo event with participant results.
#[derive(Debug, Parser)]
pub struct DemoCommand {
    /// First offered date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Number of consecutive days offered.
    #[arg(long, default_value_t = 5)]
    pub days: u32,

    /// Number of participants to generate picks for.
    #[arg(long, default_value_t = 6)]
    pub participants: u32,
}

/// A demo event and the results collected for it.
#[derive(Debug, Serialize)]
pub struct DemoOutput {
    pub event: SerializedEventData,
    pub results: Vec<ParticipantPicks>,
}

impl DemoCommand {
    pub fn run(&self, format: OutputFormat) -> Result<String> {
        let start = self.start.unwrap_or_else(|| Local::now().date_naive());
        let serialized = generate_demo_event(start, self.days);
        let event = EventData::parse(serialized.clone())?;
        if event.available_dates.is_empty() {
            return Err(ClientError::InvalidInput(format!(
                "no demo dates fit between {} and 9999-12-31",
                start
            )));
        }
        let results = generate_demo_picks(&build_option_grid(&event), self.participants);

        tracing::info!(
            days = self.days,
            participants = results.len(),
            "Generated demo event"
        );
        Ok(format_output(
            &DemoOutput {
                event: serialized,
                results,
            },
            format,
        ))
    }
}
