//! Who CLI command.

use std::path::PathBuf;

use clap::Parser;
use slotsync_core::availability::{participants_for, participants_for_date, DateTimeRange};

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::io::load_results;
use crate::output::{format_output, pretty, WhoReport};

/// List the participants who picked a slot.
#[derive(Debug, Parser)]
pub struct WhoCommand {
    /// Results file: `[{ "name": ..., "picks": [...] }]`.
    #[arg(long)]
    pub results: PathBuf,

    /// Cell to look up (`YYYY-MM-DD_HH:MM-HH:MM`).
    #[arg(long)]
    pub cell: DateTimeRange,

    /// Match any pick on the cell's date, as date-only events do.
    #[arg(long)]
    pub by_date: bool,
}

impl WhoCommand {
    pub fn run(&self, format: OutputFormat) -> Result<String> {
        let results = load_results(&self.results)?;
        let names = if self.by_date {
            participants_for_date(&results, self.cell.date())
        } else {
            participants_for(&results, &self.cell)
        };

        let report = WhoReport {
            cell: self.cell,
            participants: names.into_iter().map(str::to_string).collect(),
            total: results.len(),
        };

        Ok(match format {
            OutputFormat::Json => format_output(&report, format),
            OutputFormat::Pretty => pretty::format_who(&report),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const RESULTS: &str = r#"[
        {"name":"Ana","picks":["2024-01-01_09:00-10:00"]},
        {"name":"Ben","picks":["2024-01-01_10:00-11:00"]},
        {"name":"Cy","picks":[]}
    ]"#;

    fn make_command(dir: &tempfile::TempDir, by_date: bool) -> WhoCommand {
        let results = dir.path().join("results.json");
        fs::write(&results, RESULTS).unwrap();
        WhoCommand {
            results,
            cell: "2024-01-01_09:00-10:00".parse().unwrap(),
            by_date,
        }
    }

    #[test]
    fn test_who_matches_exact_cell() {
        let dir = tempfile::tempdir().unwrap();
        let output = make_command(&dir, false).run(OutputFormat::Json).unwrap();

        assert_eq!(
            output,
            r#"{"cell":"2024-01-01_09:00-10:00","participants":["Ana"],"total":3}"#
        );
    }

    #[test]
    fn test_who_by_date() {
        let dir = tempfile::tempdir().unwrap();
        let output = make_command(&dir, true).run(OutputFormat::Pretty).unwrap();

        assert_eq!(output, "2024-01-01_09:00-10:00 (2 / 3)\n  Ana\n  Ben");
    }
}
