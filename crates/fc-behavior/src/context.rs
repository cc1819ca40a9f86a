//! Mutable simulation state handed to every visitor step.

use fc_agent::{Cup, CupStore, Stand};
use fc_core::{AgentRef, CupId, GridPos, Policy, SimRng, StandId, Tick};
use fc_grid::{MultiGrid, StandIndex};

use crate::{BehaviorError, BehaviorResult};

/// Running totals kept by the model.
///
/// `cups_on_floor` is maintained incrementally by drops and pickups and is
/// checked against a recount of the cup store by `Festival::verify_ledger`.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Counters {
    pub cups_returned:  u64,
    pub cups_on_floor:  u64,
    pub drinks_sold:    u64,
    pub cups_dropped:   u64,
    pub cups_collected: u64,
}

/// Everything a visitor may read or change during its activation.
///
/// Built by fc-sim from disjoint borrows of the model for each visitor
/// activation; the visitor itself is borrowed separately.  This is the only
/// path through which behavior code touches shared state.
pub struct StepContext<'a> {
    /// Tick being executed.
    pub tick: Tick,

    pub grid:        &'a mut MultiGrid,
    /// Indexed by `StandId`.
    pub stands:      &'a mut [Stand],
    pub stand_index: &'a StandIndex,
    pub cups:        &'a mut CupStore,
    pub counters:    &'a mut Counters,
    pub policy:      &'a Policy,
    pub rng:         &'a mut SimRng,
}

impl<'a> StepContext<'a> {
    // ── Lookups ───────────────────────────────────────────────────────────

    pub fn cup(&self, id: CupId) -> BehaviorResult<&Cup> {
        self.cups.get(id).ok_or(BehaviorError::UnknownCup(id))
    }

    pub fn cup_mut(&mut self, id: CupId) -> BehaviorResult<&mut Cup> {
        self.cups.get_mut(id).ok_or(BehaviorError::UnknownCup(id))
    }

    pub fn stand_mut(&mut self, id: StandId) -> BehaviorResult<&mut Stand> {
        self.stands.get_mut(id.index()).ok_or(BehaviorError::UnknownStand(id))
    }

    /// Cell of a placed agent.
    pub fn position_of(&self, agent: AgentRef) -> BehaviorResult<GridPos> {
        self.grid
            .position_of(agent)
            .ok_or(BehaviorError::Grid(fc_grid::GridError::NotPlaced(agent)))
    }

    /// Floor cups in the radius-1 Moore neighborhood of `pos`, own cell
    /// included, in row-major cell order.
    pub fn litter_around(&self, pos: GridPos) -> Vec<CupId> {
        self.grid
            .neighbors(pos, true, true, 1)
            .into_iter()
            .filter_map(AgentRef::as_cup)
            .collect()
    }

    // ── Movement ──────────────────────────────────────────────────────────

    /// Move `agent` to a uniformly chosen cell of its Moore neighborhood,
    /// staying put being one of the options.
    pub fn random_step(&mut self, agent: AgentRef) -> BehaviorResult<GridPos> {
        let from = self.position_of(agent)?;
        let options = self.grid.neighborhood(from, true, true, 1);
        let to = self.rng.choose(&options).copied().unwrap_or(from);
        self.grid.move_to(agent, to)?;
        Ok(to)
    }

    /// Move `agent` one cell toward `goal` along both axes.
    pub fn step_toward(&mut self, agent: AgentRef, goal: GridPos) -> BehaviorResult<GridPos> {
        let to = self.position_of(agent)?.step_toward(goal);
        self.grid.move_to(agent, to)?;
        Ok(to)
    }
}
