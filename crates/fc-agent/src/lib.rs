//! `fc-agent` — the entities of the festival cup simulation.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`cup`]     | `Cup`, `CupCondition`, volume and soil constants           |
//! | [`stand`]   | `Stand` with its LIFO return inventory                     |
//! | [`visitor`] | `Visitor`, `VisitorTraits`, `VisitorCondition`             |
//! | [`store`]   | `CupStore` (minting, id counter, lookups)                  |
//! | [`builder`] | `PopulationBuilder` (trait sampling)                       |
//!
//! Behavior lives in `fc-behavior`; the types here only guard their own
//! numeric bounds.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types.     |

pub mod builder;
pub mod cup;
pub mod stand;
pub mod store;
pub mod visitor;


pub use builder::PopulationBuilder;
pub use cup::{CUP_CAPACITY_ML, Cup, CupCondition, SOIL_STEP};
pub use stand::Stand;
pub use store::CupStore;
pub use visitor::{MAX_THIRST, Visitor, VisitorCondition, VisitorTraits};
