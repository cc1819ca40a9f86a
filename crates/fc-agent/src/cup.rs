//! The reusable drink cup.

use fc_core::{CupId, SimRng};

/// Full volume of a freshly poured drink, in ml.
pub const CUP_CAPACITY_ML: f32 = 200.0;

/// Soil added by one soiling event.
pub const SOIL_STEP: f32 = 0.1;

/// Free-form status marker shown in reports.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CupCondition {
    /// Minted and handed over at a stand.
    #[default]
    New,
    /// Refilled from a stand's return inventory.
    Refilled,
    /// Handed back at a stand, waiting for reuse.
    Returned,
    /// Dropped on the floor.
    Littered,
    /// Picked up from the floor by a visitor.
    Collected,
}

impl CupCondition {
    pub fn as_str(self) -> &'static str {
        match self {
            CupCondition::New       => "new",
            CupCondition::Refilled  => "refilled",
            CupCondition::Returned  => "returned",
            CupCondition::Littered  => "littered",
            CupCondition::Collected => "collected",
        }
    }
}

impl std::fmt::Display for CupCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A drink container.
///
/// Every mutation keeps `remaining_ml` in `[0, CUP_CAPACITY_ML]` and `soil`
/// in `[0, 1]`.  Soil only grows, and only while the cup is on the floor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cup {
    pub id: CupId,
    remaining_ml: f32,
    soil: f32,
    on_floor: bool,
    reuse_count: u32,
    pub condition: CupCondition,
}

impl Cup {
    /// A new, full, clean cup.
    pub fn new(id: CupId) -> Self {
        Self {
            id,
            remaining_ml: CUP_CAPACITY_ML,
            soil: 0.0,
            on_floor: false,
            reuse_count: 0,
            condition: CupCondition::New,
        }
    }

    #[inline]
    pub fn remaining_ml(&self) -> f32 {
        self.remaining_ml
    }

    #[inline]
    pub fn soil(&self) -> f32 {
        self.soil
    }

    #[inline]
    pub fn on_floor(&self) -> bool {
        self.on_floor
    }

    #[inline]
    pub fn reuse_count(&self) -> u32 {
        self.reuse_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining_ml <= 0.0
    }

    /// Drink up to `amount` ml; returns what was actually drunk.
    pub fn sip(&mut self, amount: f32) -> f32 {
        let drunk = amount.max(0.0).min(self.remaining_ml);
        self.remaining_ml = (self.remaining_ml - drunk).clamp(0.0, CUP_CAPACITY_ML);
        drunk
    }

    /// Pour the rest away.
    pub fn empty_out(&mut self) {
        self.remaining_ml = 0.0;
    }

    /// Pour a full drink.  Soil and reuse count are untouched.
    pub fn fill(&mut self) {
        self.remaining_ml = CUP_CAPACITY_ML;
    }

    /// Fill a cup taken from a return inventory, counting the reuse.
    pub fn refill_for_reuse(&mut self) {
        self.fill();
        self.reuse_count += 1;
        self.condition = CupCondition::Refilled;
    }

    /// Mark the cup as lying on the floor.
    pub fn drop_to_floor(&mut self) {
        self.on_floor = true;
        self.condition = CupCondition::Littered;
    }

    /// Mark a floor cup as picked up.
    pub fn pick_up(&mut self) {
        self.on_floor = false;
        self.condition = CupCondition::Collected;
    }

    /// Mark the cup as handed in at a stand.
    pub fn mark_returned(&mut self) {
        self.on_floor = false;
        self.condition = CupCondition::Returned;
    }

    /// Add one soiling event, capped at fully soiled.
    pub fn add_soil(&mut self) {
        self.soil = (self.soil + SOIL_STEP).clamp(0.0, 1.0);
    }

    /// Per-step activation: a floor cup gets dirtier with probability
    /// `soil_chance`.  Cups off the floor do nothing and draw no randomness.
    pub fn step(&mut self, rng: &mut SimRng, soil_chance: f64) {
        if self.on_floor && rng.gen_bool(soil_chance) {
            self.add_soil();
        }
    }
}
