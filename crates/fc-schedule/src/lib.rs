//! `fc-schedule` — agent activation order for the festival cup simulation.
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`activation`] | `RandomActivation` (roster, per-step shuffled order)   |

pub mod activation;


pub use activation::RandomActivation;
