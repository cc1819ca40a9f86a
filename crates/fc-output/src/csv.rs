//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `step_summaries.csv`
//! - `agent_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, OutputResult, StepSummaryRow};

pub const SUMMARY_HEADER: [&str; 10] = [
    "step",
    "tick",
    "festival_secs",
    "drinks_sold",
    "cups_returned",
    "cups_dropped",
    "cups_collected",
    "cups_on_floor",
    "cups_minted",
    "total_reuses",
];

pub const SNAPSHOT_HEADER: [&str; 9] =
    ["step", "kind", "agent_id", "x", "y", "condition", "thirst", "inventory", "soil"];

/// Writes festival output to two CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    snapshots: Writer<File>,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) the two CSV files in it,
    /// and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut summaries = Writer::from_path(dir.join("step_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        Ok(Self { summaries, snapshots })
    }
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.step.to_string(),
                row.kind.as_str().to_string(),
                row.agent_id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.condition.to_string(),
                opt(row.thirst),
                opt(row.inventory),
                opt(row.soil),
            ])?;
        }
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.step.to_string(),
            row.tick.to_string(),
            row.festival_secs.to_string(),
            row.drinks_sold.to_string(),
            row.cups_returned.to_string(),
            row.cups_dropped.to_string(),
            row.cups_collected.to_string(),
            row.cups_on_floor.to_string(),
            row.cups_minted.to_string(),
            row.total_reuses.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.summaries.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
