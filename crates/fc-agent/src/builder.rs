//! Fluent builder for the visitor population.
//!
//! # Usage
//!
//! ```rust
//! use fc_agent::PopulationBuilder;
//! use fc_core::{SimRng, TraitDistribution};
//!
//! let mut rng = SimRng::new(42);
//! let visitors = PopulationBuilder::new(100)
//!     .thirst_rate(TraitDistribution::new(2.0, 0.5))
//!     .build(&mut rng);
//!
//! assert_eq!(visitors.len(), 100);
//! assert!(visitors.iter().all(|v| v.thirst() == 0.0));
//! ```

use fc_core::{FestivalConfig, SimRng, TraitDistribution, VisitorId};

use crate::{Visitor, VisitorTraits};

/// Fluent builder for a `Vec<Visitor>` with sampled traits.
///
/// Traits are drawn per visitor in id order (reluctance, thirst rate, sip
/// size) from normal distributions truncated at 0.
pub struct PopulationBuilder {
    count:       usize,
    reluctance:  TraitDistribution,
    thirst_rate: TraitDistribution,
    sip_size:    TraitDistribution,
    overrides:   Option<Vec<VisitorTraits>>,
}

impl PopulationBuilder {
    /// Create a builder for `count` visitors with the default distributions.
    pub fn new(count: usize) -> Self {
        let defaults = FestivalConfig::default();
        Self {
            count,
            reluctance:  defaults.reluctance,
            thirst_rate: defaults.thirst_rate,
            sip_size:    defaults.sip_size,
            overrides:   None,
        }
    }

    /// Builder pre-loaded with the population settings of `config`.
    pub fn from_config(config: &FestivalConfig) -> Self {
        Self::new(config.visitors)
            .reluctance(config.reluctance)
            .thirst_rate(config.thirst_rate)
            .sip_size(config.sip_size)
    }

    pub fn reluctance(mut self, dist: TraitDistribution) -> Self {
        self.reluctance = dist;
        self
    }

    pub fn thirst_rate(mut self, dist: TraitDistribution) -> Self {
        self.thirst_rate = dist;
        self
    }

    pub fn sip_size(mut self, dist: TraitDistribution) -> Self {
        self.sip_size = dist;
        self
    }

    /// Use exactly these traits instead of sampling.  The population size
    /// becomes `traits.len()` and no randomness is consumed.
    pub fn traits(mut self, traits: Vec<VisitorTraits>) -> Self {
        self.count = traits.len();
        self.overrides = Some(traits);
        self
    }

    /// Sample one visitor's traits.
    pub fn sample_traits(&self, rng: &mut SimRng) -> VisitorTraits {
        let mut draw = |d: TraitDistribution| rng.normal_non_negative(d.mean as f64, d.sd as f64) as f32;
        VisitorTraits {
            reluctance:  draw(self.reluctance),
            thirst_rate: draw(self.thirst_rate),
            sip_size:    draw(self.sip_size),
        }
    }

    /// Construct the visitors.  All start with zero thirst and no cup.
    pub fn build(mut self, rng: &mut SimRng) -> Vec<Visitor> {
        let traits = match self.overrides.take() {
            Some(t) => t,
            None => (0..self.count).map(|_| self.sample_traits(rng)).collect(),
        };
        traits
            .into_iter()
            .enumerate()
            .map(|(i, t)| Visitor::new(VisitorId(i as u32), t))
            .collect()
    }
}
