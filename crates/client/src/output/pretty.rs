//! Pretty output formatting.

use slotsync_core::availability::{
    DateTimeRange, DateValue, EventData, GridIndex, HeatCell, Selection, TimeBlock, TimeRange,
};

use super::{SelectionReport, WhoReport};
use crate::config::Config;

const COLUMN_WIDTH: usize = 11;

fn date_header(date: DateValue) -> String {
    format!("{} {:02}-{:02}", date.weekday(), date.month(), date.day())
}

fn row_label(event: &EventData, time: &TimeRange) -> String {
    if event.mode.is_date_only() {
        "all day".to_string()
    } else {
        time.to_string()
    }
}

/// Renders the grid with one column per date and one row per time slot.
fn render_table(event: &EventData, mut mark: impl FnMut(&DateTimeRange) -> String) -> String {
    let grid = GridIndex::new(event);
    let mut output = format!("{:width$}", "", width = COLUMN_WIDTH);
    for date in grid.dates() {
        output.push_str(&format!(" {:^width$}", date_header(*date), width = COLUMN_WIDTH));
    }
    for time in grid.times() {
        output.push('\n');
        output.push_str(&format!("{:width$}", row_label(event, time), width = COLUMN_WIDTH));
        for date in grid.dates() {
            let cell = DateTimeRange::new(*date, *time);
            output.push_str(&format!(" {:^width$}", mark(&cell), width = COLUMN_WIDTH));
        }
    }
    output
}

/// Format the option grid of an event, marking selected cells.
pub fn format_grid(event: &EventData, selection: &Selection) -> String {
    let mut output = format!("{} [{}]\n", event.title, event.mode);
    output.push_str(&"-".repeat(40));
    output.push('\n');
    output.push_str(&render_table(event, |cell| {
        if selection.contains(cell) {
            "[x]".to_string()
        } else {
            "[ ]".to_string()
        }
    }));
    output
}

/// Format merged time blocks with their slot labels.
pub fn format_blocks(blocks: &[TimeBlock]) -> String {
    if blocks.is_empty() {
        return "No time slots.".to_string();
    }
    let mut output = format!("BLOCKS ({})\n", blocks.len());
    output.push_str(&"-".repeat(40));
    for block in blocks {
        output.push_str(&format!("\n{}", block.start_labels().join("  ")));
        if let Some(end) = block.end_label() {
            output.push_str(&format!("  | {}", end));
        }
    }
    output
}

/// Format an edited selection with the grid and the change summary.
pub fn format_selection(event: &EventData, report: &SelectionReport) -> String {
    let mut output = format_grid(event, &report.selection);
    output.push_str(&format!(
        "\n\nSelected: {}  Added: {}  Removed: {}",
        report.selection.len(),
        report.delta.added.len(),
        report.delta.removed.len()
    ));
    output
}

/// Format a heatmap using the configured bucket glyphs.
pub fn format_heatmap(event: &EventData, heatmap: &[HeatCell], config: &Config) -> String {
    let mut output = format!("{} [{}]\n", event.title, event.mode);
    output.push_str(&"-".repeat(40));
    output.push('\n');
    output.push_str(&render_table(event, |cell| {
        heatmap
            .iter()
            .find(|heat| heat.cell == *cell)
            .map(|heat| {
                let glyph = config.glyph(heat.bucket).to_string().repeat(3);
                format!("{} {}", glyph, heat.label().replace(' ', ""))
            })
            .unwrap_or_default()
    }));

    let legend: Vec<String> = config
        .heat_glyphs
        .iter()
        .enumerate()
        .map(|(bucket, glyph)| format!("'{}'={}", glyph, bucket))
        .collect();
    output.push_str(&format!("\n\nLegend: {}", legend.join(" ")));
    output
}

/// Format the most popular cells.
pub fn format_best(best: &[HeatCell]) -> String {
    let Some(top) = best.first() else {
        return "Nobody has picked a slot yet.".to_string();
    };
    let mut output = format!("BEST SLOTS ({} / {})\n", top.count, top.total);
    output.push_str(&"-".repeat(40));
    for heat in best {
        output.push_str(&format!("\n{}", heat.cell));
    }
    output
}

/// Format the participants who picked a cell.
pub fn format_who(report: &WhoReport) -> String {
    let mut output = format!(
        "{} ({} / {})",
        report.cell,
        report.participants.len(),
        report.total
    );
    if report.participants.is_empty() {
        output.push_str("\n  Nobody picked this slot.");
    }
    for name in &report.participants {
        output.push_str(&format!("\n  {}", name));
    }
    output
}
