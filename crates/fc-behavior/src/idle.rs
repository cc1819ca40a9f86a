//! A behavior that only wanders.

use fc_agent::Visitor;
use fc_core::AgentRef;

use crate::{BehaviorResult, StepContext, VisitorBehavior};

/// Visitors take a random step and get thirstier, nothing else.
///
/// Useful as a baseline crowd in tests: they never buy, drop, or collect,
/// so the cup ledger stays exactly as it was set up.
pub struct IdleBehavior;

impl VisitorBehavior for IdleBehavior {
    fn step(&self, visitor: &mut Visitor, ctx: &mut StepContext<'_>) -> BehaviorResult<()> {
        ctx.random_step(AgentRef::Visitor(visitor.id))?;
        visitor.grow_thirst();
        Ok(())
    }

    fn name(&self) -> &'static str {
        "idle"
    }
}
