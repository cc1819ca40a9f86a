//! `SnapshotObserver<W>` — bridges `FestivalObserver` to an `OutputWriter`.

use fc_core::{FestivalConfig, SimClock, Tick};
use fc_sim::{FestivalObserver, Snapshot, StepSummary};

use crate::row::{AgentSnapshotRow, StepSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`FestivalObserver`] that writes step summaries and agent snapshots
/// to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer hooks
/// have no return value.  After `festival.run()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct SnapshotObserver<W: OutputWriter> {
    writer:     W,
    clock:      SimClock,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SnapshotObserver<W> {
    /// Create an observer backed by `writer`, using `config` for festival
    /// time conversion.
    pub fn new(writer: W, config: &FestivalConfig) -> Self {
        Self { writer, clock: config.make_clock(), last_error: None }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Seconds after midnight at the start of `tick`.
    fn festival_secs(&self, tick: Tick) -> u64 {
        let clock = SimClock { current_tick: tick, ..self.clock.clone() };
        clock.gates_open_secs as u64 + clock.elapsed_secs()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> FestivalObserver for SnapshotObserver<W> {
    fn on_step_end(&mut self, tick: Tick, summary: &StepSummary) {
        let row = StepSummaryRow::new(summary, self.festival_secs(tick));
        let result = self.writer.write_step_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, _tick: Tick, snapshot: &Snapshot) {
        let rows = AgentSnapshotRow::from_snapshot(snapshot);
        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, _final_tick: Tick, _snapshot: &Snapshot) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
