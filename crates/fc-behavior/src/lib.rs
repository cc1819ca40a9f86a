//! `fc-behavior` — visitor decisions and stand transactions.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                     |
//! |-----------------|--------------------------------------------------------------|
//! | [`context`]     | `StepContext<'a>` (mutable model state), `Counters`          |
//! | [`model`]       | `VisitorBehavior` trait                                      |
//! | [`festival`]    | `FestivalBehavior` — thirst, seeking, sipping, disposal      |
//! | [`decision`]    | drop probability and collection choice                       |
//! | [`transaction`] | `buy_drink`, `Sale` — returns and LIFO cup reuse             |
//! | [`idle`]        | `IdleBehavior` — wander only                                 |
//! | [`error`]       | `BehaviorError`, `BehaviorResult<T>`                         |
//!
//! # Design notes
//!
//! Visitors are stepped strictly one after another.  Each activation gets a
//! fresh `StepContext` borrowing the grid, stands, cup store, counters,
//! policy, and RNG of the model, so one visitor's drop is visible to the
//! next visitor's litter count within the same step.  Per-event logs are
//! emitted at `debug` level only when `Policy::verbose` is set.

pub mod context;
pub mod decision;
pub mod error;
pub mod festival;
pub mod idle;
pub mod model;
pub mod transaction;


pub use context::{Counters, StepContext};
pub use decision::{COLLECTABLE_SOIL_LIMIT, drop_probability, pick_collectable};
pub use error::{BehaviorError, BehaviorResult};
pub use festival::FestivalBehavior;
pub use idle::IdleBehavior;
pub use model::VisitorBehavior;
pub use transaction::{Sale, buy_drink};
