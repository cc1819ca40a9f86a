//! The `OutputWriter` trait implemented by export backends.

use crate::{AgentSnapshotRow, OutputResult, StepSummaryRow};

/// Sink for festival output rows.
///
/// Errors are stored by [`SnapshotObserver`][crate::SnapshotObserver] and
/// retrieved with its `take_error`, since observer hooks cannot fail.
pub trait OutputWriter {
    /// Write a batch of agent snapshot rows.
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()>;

    /// Write one step summary row.
    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Every call flushes, so it may follow each run on a shared writer.
    fn finish(&mut self) -> OutputResult<()>;
}
