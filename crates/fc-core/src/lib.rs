//! `fc-core` — foundational types for the festival cup simulation.
//!
//! This crate is a dependency of every other `fc-*` crate.  It has no
//! `fc-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`ids`]    | `VisitorId`, `StandId`, `CupId`, `AgentRef`               |
//! | [`pos`]    | `GridPos`, `Boundary`                                     |
//! | [`time`]   | `Tick`, `SimClock`                                        |
//! | [`rng`]    | `SimRng`                                                  |
//! | [`config`] | `FestivalConfig`, `TraitDistribution`, `Policy`           |
//! | [`error`]  | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod config;
pub mod error;
pub mod ids;
pub mod pos;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{FestivalConfig, Policy, TraitDistribution};
pub use error::{CoreError, CoreResult};
pub use ids::{AgentRef, CupId, StandId, VisitorId};
pub use pos::{Boundary, GridPos};
pub use rng::SimRng;
pub use time::{SimClock, Tick};
