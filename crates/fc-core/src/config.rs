//! Festival configuration and the per-run policy derived from it.
//!
//! Typically built in code or deserialized (feature `serde`) from a TOML file
//! by the application crate, then passed to `fc_sim::FestivalBuilder`.

use rustc_hash::FxHashSet;

use crate::{Boundary, CoreError, CoreResult, GridPos, SimClock, Tick};

/// Normal distribution parameters for a per-visitor trait.
///
/// Samples are truncated at 0.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraitDistribution {
    pub mean: f32,
    pub sd: f32,
}

impl TraitDistribution {
    #[inline]
    pub const fn new(mean: f32, sd: f32) -> Self {
        Self { mean, sd }
    }

    /// A degenerate distribution: every sample equals `value`.
    #[inline]
    pub const fn fixed(value: f32) -> Self {
        Self { mean: value, sd: 0.0 }
    }
}

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FestivalConfig {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Edge behavior shared by random and goal-directed movement.
    pub boundary: Boundary,

    /// Number of visitors placed at random cells at construction.
    pub visitors: usize,
    /// Stand positions; must be distinct and inside the grid.
    pub stands: Vec<GridPos>,

    /// Drinks-per-cup exchange rate.  Visitors whose reluctance exceeds it
    /// litter; the rest collect.
    pub cup_return_threshold: f32,
    /// Per-visitor reluctance to return a cup.
    pub reluctance: TraitDistribution,
    /// Per-visitor thirst increase per step, on a 0–100 scale.
    pub thirst_rate: TraitDistribution,
    /// Per-visitor ml drunk per sip.
    pub sip_size: TraitDistribution,

    /// Probability that an eligible visitor picks up a littered cup.
    pub collection_awareness: f64,
    /// Per-step probability that a cup on the floor gets dirtier.
    pub soil_chance: f64,
    /// Cups scattered on random cells before the first step.
    pub initial_litter: usize,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
    /// Steps executed by `Festival::run`.
    pub total_steps: u64,
    /// Seconds per step, only used to label festival time.
    pub tick_duration_secs: u32,
    /// Seconds after midnight at which step 0 starts.
    pub gates_open_secs: u32,
    /// Emit a snapshot to observers every N steps.  0 disables snapshots.
    pub snapshot_interval: u64,
    /// Log individual sales, returns, drops and collections.
    pub verbose: bool,
}

impl Default for FestivalConfig {
    fn default() -> Self {
        Self {
            width:                10,
            height:               10,
            boundary:             Boundary::Torus,
            visitors:             8,
            stands:               vec![GridPos::new(0, 6), GridPos::new(9, 4)],
            cup_return_threshold: 1.0,
            reluctance:           TraitDistribution::new(1.0, 0.5),
            thirst_rate:          TraitDistribution::new(2.0, 0.5),
            sip_size:             TraitDistribution::new(25.0, 5.0),
            collection_awareness: 0.1,
            soil_chance:          0.2,
            initial_litter:       0,
            seed:                 42,
            total_steps:          200,
            tick_duration_secs:   60,
            gates_open_secs:      12 * 3_600,
            snapshot_interval:    1,
            verbose:              false,
        }
    }
}

impl FestivalConfig {
    /// Check every construction invariant.  A config that passes can always
    /// be turned into a model.
    pub fn validate(&self) -> CoreResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::EmptyGrid { width: self.width, height: self.height });
        }

        let mut seen = FxHashSet::default();
        for &pos in &self.stands {
            self.check_in_bounds(pos)?;
            if !seen.insert(pos) {
                return Err(CoreError::DuplicateStand(pos));
            }
        }

        check_probability("collection_awareness", self.collection_awareness)?;
        check_probability("soil_chance", self.soil_chance)?;

        check_non_negative("cup_return_threshold", self.cup_return_threshold)?;
        for (what, dist) in [
            ("reluctance", self.reluctance),
            ("thirst_rate", self.thirst_rate),
            ("sip_size", self.sip_size),
        ] {
            if !dist.mean.is_finite() {
                return Err(CoreError::Config(format!("{what} mean must be finite")));
            }
            check_non_negative(what, dist.sd)?;
        }

        if self.tick_duration_secs == 0 {
            return Err(CoreError::Config("tick_duration_secs must be positive".into()));
        }
        Ok(())
    }

    /// Error unless `pos` lies inside the configured grid.
    pub fn check_in_bounds(&self, pos: GridPos) -> CoreResult<()> {
        if pos.x < self.width && pos.y < self.height {
            Ok(())
        } else {
            Err(CoreError::OutOfBounds { pos, width: self.width, height: self.height })
        }
    }

    /// The tick at which `Festival::run` stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_steps)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.gates_open_secs, self.tick_duration_secs)
    }

    /// The immutable policy parameters read by agent behaviors.
    pub fn policy(&self) -> Policy {
        Policy {
            cup_return_threshold: self.cup_return_threshold,
            collection_awareness: self.collection_awareness,
            soil_chance:          self.soil_chance,
            verbose:              self.verbose,
        }
    }
}

fn check_probability(what: &'static str, value: f64) -> CoreResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(CoreError::Probability { what, value })
    }
}

fn check_non_negative(what: &'static str, value: f32) -> CoreResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CoreError::Negative { what, value })
    }
}

/// Global policy parameters, fixed for the duration of a run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Policy {
    pub cup_return_threshold: f32,
    pub collection_awareness: f64,
    pub soil_chance: f64,
    pub verbose: bool,
}

impl Default for Policy {
    fn default() -> Self {
        FestivalConfig::default().policy()
    }
}
