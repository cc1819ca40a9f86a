//! Festival observer trait for progress reporting and data collection.

use fc_core::Tick;

use crate::{Snapshot, StepSummary};

/// Callbacks invoked by [`Festival::run`][crate::Festival::run] at step
/// boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers only ever see copies or
/// shared borrows of model state and cannot influence the run.
///
/// # Example — litter printer
///
/// ```rust,ignore
/// struct LitterPrinter;
///
/// impl FestivalObserver for LitterPrinter {
///     fn on_step_end(&mut self, tick: Tick, summary: &StepSummary) {
///         println!("{tick}: {} cups on the floor", summary.cups_on_floor);
///     }
/// }
/// ```
pub trait FestivalObserver {
    /// Called before any agent of `tick` is activated.
    fn on_step_start(&mut self, _tick: Tick) {}

    /// Called after every agent of `tick` has been activated.
    fn on_step_end(&mut self, _tick: Tick, _summary: &StepSummary) {}

    /// Called every `config.snapshot_interval` completed steps, after
    /// `on_step_end`.  `tick` is the first tick not yet executed.
    fn on_snapshot(&mut self, _tick: Tick, _snapshot: &Snapshot) {}

    /// Called once after the final step with the closing state.
    fn on_run_end(&mut self, _final_tick: Tick, _snapshot: &Snapshot) {}
}

/// A [`FestivalObserver`] that does nothing.
pub struct NoopObserver;

impl FestivalObserver for NoopObserver {}
