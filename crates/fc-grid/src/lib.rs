//! `fc-grid` — festival grid, neighborhood queries, and stand lookup.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`grid`]        | `MultiGrid` (multi-occupancy cells, torus or bounded)    |
//! | [`stand_index`] | `StandIndex` (R-tree nearest-stand search)               |
//! | [`error`]       | `GridError`, `GridResult<T>`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `fc-core` types.        |

pub mod error;
pub mod grid;
pub mod stand_index;


pub use error::{GridError, GridResult};
pub use grid::MultiGrid;
pub use stand_index::StandIndex;
