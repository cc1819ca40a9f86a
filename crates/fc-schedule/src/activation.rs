//! `RandomActivation` — every agent once per step, in a fresh random order.
//!
//! # Ordering
//!
//! One agent's action changes what later agents in the same step see (a
//! dropped cup raises the neighbors' litter count, a returned cup is the
//! next one refilled).  The model therefore steps agents strictly one at a
//! time.  The roster is the list of everything that gets activated; each
//! step it is copied, shuffled from the model RNG, and consumed in order.
//!
//! Agents added during a step are not in that step's order: they are first
//! activated on the following step.

use fc_core::{AgentRef, SimRng};
use rustc_hash::FxHashSet;

/// Roster of scheduled agents plus a step counter.
#[derive(Default, Clone, Debug)]
pub struct RandomActivation {
    roster:    Vec<AgentRef>,
    /// Membership mirror of `roster`.
    scheduled: FxHashSet<AgentRef>,
    steps:     u64,
}

impl RandomActivation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `agent` for activation from the next step on.
    ///
    /// Adding an agent that is already scheduled is a no-op.
    pub fn add(&mut self, agent: AgentRef) {
        if self.scheduled.insert(agent) {
            self.roster.push(agent);
        }
    }

    /// Stop activating `agent`.  Returns `false` if it was not scheduled.
    pub fn remove(&mut self, agent: AgentRef) -> bool {
        if !self.scheduled.remove(&agent) {
            return false;
        }
        match self.roster.iter().position(|&a| a == agent) {
            Some(i) => {
                self.roster.remove(i);
                true
            }
            None => false,
        }
    }

    /// Start a step: return this step's activation order and count the step.
    pub fn begin_step(&mut self, rng: &mut SimRng) -> Vec<AgentRef> {
        let mut order = self.roster.clone();
        rng.shuffle(&mut order);
        self.steps += 1;
        order
    }

    /// Steps started so far.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Scheduled agents in registration order.
    #[inline]
    pub fn roster(&self) -> &[AgentRef] {
        &self.roster
    }

    #[inline]
    pub fn contains(&self, agent: AgentRef) -> bool {
        self.scheduled.contains(&agent)
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// Number of scheduled agents matching `pred`, e.g. `AgentRef::is_cup`.
    pub fn count_where(&self, pred: impl Fn(AgentRef) -> bool) -> usize {
        self.roster.iter().filter(|&&a| pred(a)).count()
    }
}
