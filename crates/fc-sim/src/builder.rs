//! Fluent builder for constructing a [`Festival`].

use fc_agent::{CupStore, PopulationBuilder, Stand, VisitorTraits};
use fc_behavior::{Counters, FestivalBehavior, VisitorBehavior};
use fc_core::{AgentRef, FestivalConfig, GridPos, SimRng, StandId};
use fc_grid::{MultiGrid, StandIndex};
use fc_schedule::RandomActivation;

use crate::{Festival, SimError, SimResult};

/// Fluent builder for [`Festival<B>`].
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                                   |
/// |--------------------------|-------------------------------------------|
/// | `.behavior(b)`           | `FestivalBehavior::default()`             |
/// | `.visitor_traits(v)`     | sampled from the config distributions     |
/// | `.initial_positions(v)`  | uniformly random cells                    |
///
/// # Randomness
///
/// Construction draws from the festival RNG in a fixed order: all visitor
/// traits, then all visitor positions, then initial litter positions.
/// Overridden inputs consume no draws.
///
/// # Example
///
/// ```rust,ignore
/// let mut festival = FestivalBuilder::new(FestivalConfig::default()).build()?;
/// festival.run(&mut NoopObserver)?;
/// ```
pub struct FestivalBuilder<B: VisitorBehavior = FestivalBehavior> {
    config:    FestivalConfig,
    traits:    Option<Vec<VisitorTraits>>,
    positions: Option<Vec<GridPos>>,
    behavior:  B,
}

impl FestivalBuilder<FestivalBehavior> {
    pub fn new(config: FestivalConfig) -> Self {
        Self { config, traits: None, positions: None, behavior: FestivalBehavior::default() }
    }
}

impl<B: VisitorBehavior> FestivalBuilder<B> {
    /// Swap the visitor decision logic.
    pub fn behavior<B2: VisitorBehavior>(self, behavior: B2) -> FestivalBuilder<B2> {
        FestivalBuilder {
            config:    self.config,
            traits:    self.traits,
            positions: self.positions,
            behavior,
        }
    }

    /// Give every visitor fixed traits (must be length `config.visitors`).
    pub fn visitor_traits(mut self, traits: Vec<VisitorTraits>) -> Self {
        self.traits = Some(traits);
        self
    }

    /// Start every visitor on a chosen cell (must be length
    /// `config.visitors`, all inside the grid).
    pub fn initial_positions(mut self, positions: Vec<GridPos>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Validate inputs, place everyone, and return a ready-to-run
    /// [`Festival`].  Nothing is built when any input is invalid.
    pub fn build(self) -> SimResult<Festival<B>> {
        let config = self.config;
        config.validate()?;
        let n = config.visitors;

        // ── Validate overrides ────────────────────────────────────────────
        if let Some(t) = &self.traits {
            if t.len() != n {
                return Err(SimError::VisitorCountMismatch { expected: n, got: t.len(), what: "visitor traits" });
            }
        }
        if let Some(p) = &self.positions {
            if p.len() != n {
                return Err(SimError::VisitorCountMismatch { expected: n, got: p.len(), what: "initial positions" });
            }
            for &pos in p {
                config.check_in_bounds(pos)?;
            }
        }

        let mut rng = SimRng::new(config.seed);

        // ── Visitors ──────────────────────────────────────────────────────
        let mut population = PopulationBuilder::from_config(&config);
        if let Some(t) = self.traits {
            population = population.traits(t);
        }
        let visitors = population.build(&mut rng);

        let positions = match self.positions {
            Some(p) => p,
            None => (0..n).map(|_| random_cell(&mut rng, &config)).collect(),
        };

        // ── Grid and stands ───────────────────────────────────────────────
        let mut grid = MultiGrid::new(config.width, config.height, config.boundary);
        let mut schedule = RandomActivation::new();
        for (v, &pos) in visitors.iter().zip(&positions) {
            grid.place(AgentRef::Visitor(v.id), pos)?;
            schedule.add(AgentRef::Visitor(v.id));
        }

        let stands: Vec<Stand> = config
            .stands
            .iter()
            .enumerate()
            .map(|(i, &pos)| Stand::new(StandId(i as u32), pos))
            .collect();
        for s in &stands {
            grid.place(AgentRef::Stand(s.id), s.pos)?;
            schedule.add(AgentRef::Stand(s.id));
        }
        let stand_index = StandIndex::new(&config.stands);

        let litter = config.initial_litter;
        let mut festival = Festival {
            clock: config.make_clock(),
            policy: config.policy(),
            config,
            grid,
            visitors,
            stands,
            stand_index,
            cups: CupStore::new(),
            counters: Counters::default(),
            schedule,
            rng,
            behavior: self.behavior,
        };

        // ── Initial litter ────────────────────────────────────────────────
        for _ in 0..litter {
            let pos = random_cell(&mut festival.rng, &festival.config);
            festival.scatter_cup(pos)?;
        }

        Ok(festival)
    }
}

fn random_cell(rng: &mut SimRng, config: &FestivalConfig) -> GridPos {
    let x = rng.gen_range(0..config.width);
    let y = rng.gen_range(0..config.height);
    GridPos::new(x, y)
}
