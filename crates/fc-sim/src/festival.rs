//! The `Festival` model and its step loop.

use fc_agent::{CupStore, Stand, Visitor};
use fc_behavior::{Counters, FestivalBehavior, StepContext, VisitorBehavior};
use fc_core::{AgentRef, CupId, FestivalConfig, GridPos, Policy, SimClock, SimRng, Tick, VisitorId};
use fc_grid::{MultiGrid, StandIndex};
use fc_schedule::RandomActivation;
use tracing::{info, trace};

use crate::{
    CellCondition, FestivalObserver, FloorCupRow, SimError, SimResult, Snapshot, StandRow,
    StepSummary, VisitorRow,
};

/// The festival world: grid, visitors, stands, cups, counters, and the one
/// RNG every stochastic draw comes from.
///
/// Each [`step`][Self::step]:
///
/// 1. shuffles the activation roster (every visitor, stand, and cup);
/// 2. activates the agents one at a time in that order: visitors run their
///    `VisitorBehavior`, floor cups may soil, stands do nothing;
/// 3. adds cups minted during the step to the roster;
/// 4. advances the clock.
///
/// Create via [`FestivalBuilder`][crate::FestivalBuilder].
pub struct Festival<B: VisitorBehavior = FestivalBehavior> {
    /// Configuration the festival was built from.
    pub config: FestivalConfig,

    /// Tracks the current tick and maps it to festival time of day.
    pub clock: SimClock,

    pub(crate) policy:      Policy,
    pub(crate) grid:        MultiGrid,
    /// Indexed by `VisitorId`.
    pub(crate) visitors:    Vec<Visitor>,
    /// Indexed by `StandId`.
    pub(crate) stands:      Vec<Stand>,
    pub(crate) stand_index: StandIndex,
    pub(crate) cups:        CupStore,
    pub(crate) counters:    Counters,
    pub(crate) schedule:    RandomActivation,
    pub(crate) rng:         SimRng,
    pub(crate) behavior:    B,
}

impl<B: VisitorBehavior> Festival<B> {
    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance the festival by one step.
    ///
    /// An error leaves the model partway through the step; the run should
    /// be abandoned.
    pub fn step(&mut self) -> SimResult<StepSummary> {
        let tick = self.clock.current_tick;
        let before = self.counters;
        let minted_before = self.cups.len();

        let order = self.schedule.begin_step(&mut self.rng);
        for &agent in &order {
            self.activate(agent, tick)?;
        }

        let new_cups: Vec<CupId> = self.cups.ids_since(minted_before).collect();
        for &id in &new_cups {
            self.schedule.add(AgentRef::Cup(id));
        }
        self.clock.advance();

        let after = self.counters;
        let summary = StepSummary {
            step:           self.schedule.steps(),
            tick,
            activated:      order.len(),
            new_cups:       new_cups.len() as u64,
            cups_returned:  after.cups_returned - before.cups_returned,
            drinks_sold:    after.drinks_sold - before.drinks_sold,
            cups_dropped:   after.cups_dropped - before.cups_dropped,
            cups_collected: after.cups_collected - before.cups_collected,
            cups_on_floor:  after.cups_on_floor,
            cups_minted:    self.cups.len() as u64,
            total_reuses:   self.cups.total_reuses(),
        };
        trace!(
            %tick,
            activated = summary.activated,
            sold = summary.drinks_sold,
            dropped = summary.cups_dropped,
            on_floor = summary.cups_on_floor,
            "step done"
        );
        Ok(summary)
    }

    fn activate(&mut self, agent: AgentRef, tick: Tick) -> SimResult<()> {
        match agent {
            AgentRef::Visitor(id) => {
                let Self { grid, visitors, stands, stand_index, cups, counters, policy, rng, behavior, .. } =
                    self;
                let visitor = visitors.get_mut(id.index()).ok_or(SimError::UnknownAgent(agent))?;
                let mut ctx = StepContext {
                    tick,
                    grid,
                    stands: stands.as_mut_slice(),
                    stand_index,
                    cups,
                    counters,
                    policy,
                    rng,
                };
                behavior.step(visitor, &mut ctx)?;
            }
            AgentRef::Stand(id) => {
                if id.index() >= self.stands.len() {
                    return Err(SimError::UnknownAgent(agent));
                }
            }
            AgentRef::Cup(id) => {
                let cup = self.cups.get_mut(id).ok_or(SimError::UnknownAgent(agent))?;
                cup.step(&mut self.rng, self.policy.soil_chance);
            }
        }
        Ok(())
    }

    /// Run from the current tick until `config.total_steps` steps are done.
    ///
    /// Calls observer hooks at every step boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: FestivalObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let end = self.config.end_tick();
        info!(
            behavior = self.behavior.name(),
            visitors = self.visitors.len(),
            stands = self.stands.len(),
            seed = self.config.seed,
            steps = end.since(self.clock.current_tick),
            "festival run starting"
        );
        while self.clock.current_tick < end {
            self.step_observed(observer)?;
        }
        self.finish(observer);
        Ok(())
    }

    /// Run exactly `n` more steps, ignoring `config.total_steps`.
    pub fn run_steps<O: FestivalObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step_observed(observer)?;
        }
        self.finish(observer);
        Ok(())
    }

    fn step_observed<O: FestivalObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let tick = self.clock.current_tick;
        observer.on_step_start(tick);
        let summary = self.step()?;
        observer.on_step_end(tick, &summary);
        let interval = self.config.snapshot_interval;
        if interval > 0 && summary.step.is_multiple_of(interval) {
            observer.on_snapshot(self.clock.current_tick, &self.report());
        }
        Ok(())
    }

    fn finish<O: FestivalObserver>(&self, observer: &mut O) {
        let snapshot = self.report();
        info!(
            tick = %self.clock.current_tick,
            cups_minted = snapshot.cups_minted,
            cups_on_floor = snapshot.cups_on_floor,
            cups_returned = snapshot.cups_returned,
            total_reuses = snapshot.total_reuses,
            "festival run finished"
        );
        observer.on_run_end(self.clock.current_tick, &snapshot);
    }

    // ── Setup helpers ─────────────────────────────────────────────────────

    /// Mint a cup and leave it empty on the floor at `pos`.
    ///
    /// Used for initial litter; the cup joins the activation roster
    /// immediately.
    pub fn scatter_cup(&mut self, pos: GridPos) -> SimResult<CupId> {
        if !self.grid.contains(pos) {
            return Err(SimError::Grid(fc_grid::GridError::OutOfBounds {
                pos,
                width: self.grid.width(),
                height: self.grid.height(),
            }));
        }
        let id = self.cups.mint();
        if let Some(cup) = self.cups.get_mut(id) {
            cup.empty_out();
            cup.drop_to_floor();
        }
        self.grid.place(AgentRef::Cup(id), pos)?;
        self.counters.cups_on_floor += 1;
        self.schedule.add(AgentRef::Cup(id));
        Ok(id)
    }

    // ── Reporting ─────────────────────────────────────────────────────────

    /// Copy out the current state.  Pure: two calls without a step in
    /// between return equal snapshots.
    pub fn report(&self) -> Snapshot {
        let width = self.grid.width();
        let height = self.grid.height();
        let mut cells = vec![CellCondition::Empty; width as usize * height as usize];
        let mut mark = |pos: GridPos, c: CellCondition| {
            let idx = pos.y as usize * width as usize + pos.x as usize;
            if let Some(cell) = cells.get_mut(idx) {
                *cell = cell.merge(c);
            }
        };

        let visitors: Vec<VisitorRow> = self
            .visitors
            .iter()
            .filter_map(|v| {
                let pos = self.grid.position_of(AgentRef::Visitor(v.id))?;
                Some(VisitorRow {
                    id:        v.id,
                    pos,
                    condition: v.condition(),
                    thirst:    v.thirst(),
                    seeking:   v.seeking_drink,
                    held_cup:  v.held_cup,
                    bagged:    v.collected.len(),
                })
            })
            .collect();
        for row in &visitors {
            mark(row.pos, row.condition.into());
        }

        let stands: Vec<StandRow> = self
            .stands
            .iter()
            .map(|s| StandRow {
                id:          s.id,
                pos:         s.pos,
                inventory:   s.inventory_len(),
                drinks_sold: s.drinks_sold,
            })
            .collect();
        for row in &stands {
            mark(row.pos, CellCondition::Stand);
        }

        let floor_cups: Vec<FloorCupRow> = self
            .cups
            .iter()
            .filter(|c| c.on_floor())
            .filter_map(|c| {
                Some(FloorCupRow {
                    id:          c.id,
                    pos:         self.grid.position_of(AgentRef::Cup(c.id))?,
                    soil:        c.soil(),
                    reuse_count: c.reuse_count(),
                })
            })
            .collect();

        Snapshot {
            step: self.schedule.steps(),
            clock: self.clock.clone(),
            width,
            height,
            cups_on_floor: self.counters.cups_on_floor,
            cups_minted: self.cups.len() as u64,
            cups_returned: self.counters.cups_returned,
            total_reuses: self.cups.total_reuses(),
            drinks_sold: self.counters.drinks_sold,
            cups_dropped: self.counters.cups_dropped,
            cups_collected: self.counters.cups_collected,
            cells,
            visitors,
            stands,
            floor_cups,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn visitors(&self) -> &[Visitor] {
        &self.visitors
    }

    pub fn visitor(&self, id: VisitorId) -> Option<&Visitor> {
        self.visitors.get(id.index())
    }

    /// Cell of a visitor.
    pub fn visitor_pos(&self, id: VisitorId) -> Option<GridPos> {
        self.grid.position_of(AgentRef::Visitor(id))
    }

    pub fn stands(&self) -> &[Stand] {
        &self.stands
    }

    pub fn cups(&self) -> &CupStore {
        &self.cups
    }

    pub fn grid(&self) -> &MultiGrid {
        &self.grid
    }

    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn schedule(&self) -> &RandomActivation {
        &self.schedule
    }

    pub fn behavior(&self) -> &B {
        &self.behavior
    }

    /// Steps completed so far.
    pub fn steps(&self) -> u64 {
        self.schedule.steps()
    }
}
