//! What a visitor does with an empty cup.
//!
//! | Disposition                          | Outcome                                       |
//! |--------------------------------------|-----------------------------------------------|
//! | `reluctance > cup_return_threshold`  | drop with `min(0.1 + litter / 5, 1.0)`        |
//! | otherwise                            | collect a floor cup with `collection_awareness` |
//!
//! Either way the visitor keeps its empty cup when the draw fails and hands
//! it in at the next purchase.

use fc_agent::CupStore;
use fc_core::{CupId, Policy};

/// Floor cups with soil at or above this are left alone by collectors.
pub const COLLECTABLE_SOIL_LIMIT: f32 = 0.7;

/// Drop probability with no litter in sight.
pub const BASE_DROP_PROBABILITY: f64 = 0.1;

/// Each visible floor cup adds `1 / LITTER_PER_CERTAINTY` to the drop
/// probability.
pub const LITTER_PER_CERTAINTY: f64 = 5.0;

/// Probability of dropping an empty cup with `litter` floor cups around.
///
/// ```
/// use fc_behavior::drop_probability;
/// assert_eq!(drop_probability(0), 0.1);
/// assert_eq!(drop_probability(20), 1.0);
/// ```
pub fn drop_probability(litter: usize) -> f64 {
    (BASE_DROP_PROBABILITY + litter as f64 / LITTER_PER_CERTAINTY).min(1.0)
}

/// Whether a visitor with this reluctance litters rather than collects.
#[inline]
pub fn prefers_dropping(reluctance: f32, policy: &Policy) -> bool {
    reluctance > policy.cup_return_threshold
}

/// The cup a collector would pick from `litter`: least soiled below
/// [`COLLECTABLE_SOIL_LIMIT`], lowest id on ties.
pub fn pick_collectable(cups: &CupStore, litter: &[CupId]) -> Option<CupId> {
    litter
        .iter()
        .filter_map(|&id| cups.get(id))
        .filter(|cup| cup.on_floor() && cup.soil() < COLLECTABLE_SOIL_LIMIT)
        .min_by(|a, b| a.soil().total_cmp(&b.soil()).then(a.id.cmp(&b.id)))
        .map(|cup| cup.id)
}
