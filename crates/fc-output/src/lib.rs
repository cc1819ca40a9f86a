//! `fc-output` — festival output writers.
//!
//! | Backend | Files created                                  |
//! |---------|------------------------------------------------|
//! | CSV     | `step_summaries.csv`, `agent_snapshots.csv`    |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SnapshotObserver`], which implements `fc_sim::FestivalObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fc_output::{CsvWriter, SnapshotObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SnapshotObserver::new(writer, &festival.config);
//! festival.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SnapshotObserver;
pub use row::{AgentKind, AgentSnapshotRow, StepSummaryRow};
pub use writer::OutputWriter;
