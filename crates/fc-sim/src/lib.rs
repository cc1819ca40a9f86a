//! `fc-sim` — the festival model and its step loop.
//!
//! # Step
//!
//! ```text
//! for step in 0..config.total_steps:
//!   ① Shuffle   — RandomActivation reorders the roster from the model RNG.
//!   ② Activate  — one agent at a time, in that order:
//!                   Visitor → VisitorBehavior::step with a fresh StepContext
//!                   Cup     → soils with `soil_chance` while on the floor
//!                   Stand   → nothing
//!   ③ Enroll    — cups minted during the step join the roster.
//!   ④ Report    — observer hooks, snapshots every `snapshot_interval` steps.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fc_core::FestivalConfig;
//! use fc_sim::{FestivalBuilder, NoopObserver};
//!
//! let mut festival = FestivalBuilder::new(FestivalConfig::default()).build()?;
//! festival.run(&mut NoopObserver)?;
//! let snapshot = festival.report();
//! println!("{} cups on the floor", snapshot.cups_on_floor);
//! ```

pub mod builder;
pub mod error;
pub mod festival;
pub mod ledger;
pub mod observer;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use builder::FestivalBuilder;
pub use error::{SimError, SimResult};
pub use festival::Festival;
pub use ledger::CupTally;
pub use observer::{FestivalObserver, NoopObserver};
pub use snapshot::{CellCondition, FloorCupRow, Snapshot, StandRow, StepSummary, VisitorRow};
