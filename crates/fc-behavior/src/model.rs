//! The `VisitorBehavior` trait: how a visitor spends one activation.

use fc_agent::Visitor;

use crate::{BehaviorResult, StepContext};

/// Pluggable visitor decision logic.
///
/// Called once per visitor per step, in the scheduler's shuffled order.
/// All shared state goes through `ctx`; the visitor's own state is the
/// `&mut Visitor`.  Implementations must draw every random number from
/// `ctx.rng` so runs replay from the seed.
///
/// # Example
///
/// ```rust,ignore
/// struct Wanderer;
///
/// impl VisitorBehavior for Wanderer {
///     fn step(&self, visitor: &mut Visitor, ctx: &mut StepContext<'_>) -> BehaviorResult<()> {
///         ctx.random_step(visitor.id.into())?;
///         visitor.grow_thirst();
///         Ok(())
///     }
/// }
/// ```
pub trait VisitorBehavior {
    fn step(&self, visitor: &mut Visitor, ctx: &mut StepContext<'_>) -> BehaviorResult<()>;

    /// Short label used in run logs.
    fn name(&self) -> &'static str {
        "custom"
    }
}
