//! `FestivalBehavior` — the canonical visitor state machine.
//!
//! One activation runs three phases in order:
//!
//! 1. **Act**, first matching rule wins:
//!    - already seeking a drink: walk toward the nearest stand, or buy when
//!      standing on it;
//!    - thirst above `drink_threshold` with no cup or an empty cup: commit to
//!      seeking (and take the first seeking step) only above
//!      `seek_threshold` and if the festival has stands, otherwise wander;
//!    - thirst above `drink_threshold` with drink left: sip, then wander;
//!    - otherwise wander.
//! 2. **Dispose**, only while holding an empty cup: drop it or collect a
//!    floor cup (see [`decision`][crate::decision]).
//! 3. **Thirst** grows by the visitor's rate, saturating at 100.

use fc_agent::Visitor;
use fc_core::{AgentRef, CupId};
use tracing::debug;

use crate::{
    BehaviorError, BehaviorResult, StepContext, VisitorBehavior, buy_drink,
    decision::{drop_probability, pick_collectable, prefers_dropping},
};

/// Thresholds of the visitor state machine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FestivalBehavior {
    /// Thirst above which a visitor does something about it.
    pub drink_threshold: f32,
    /// Thirst above which a visitor without a drink heads for a stand.
    pub seek_threshold:  f32,
    /// Thirst removed by one sip, regardless of sip size.
    pub sip_relief:      f32,
}

impl Default for FestivalBehavior {
    fn default() -> Self {
        Self { drink_threshold: 50.0, seek_threshold: 80.0, sip_relief: 20.0 }
    }
}

impl VisitorBehavior for FestivalBehavior {
    fn step(&self, visitor: &mut Visitor, ctx: &mut StepContext<'_>) -> BehaviorResult<()> {
        let me = AgentRef::Visitor(visitor.id);

        if visitor.seeking_drink {
            self.seek_drink(visitor, ctx)?;
        } else if visitor.thirst() > self.drink_threshold {
            match self.drink_left(visitor, ctx)? {
                Some(_) => {
                    self.sip(visitor, ctx)?;
                    ctx.random_step(me)?;
                }
                None if visitor.thirst() > self.seek_threshold && !ctx.stand_index.is_empty() => {
                    visitor.seeking_drink = true;
                    self.seek_drink(visitor, ctx)?;
                }
                None => {
                    ctx.random_step(me)?;
                }
            }
        } else {
            ctx.random_step(me)?;
        }

        self.dispose(visitor, ctx)?;
        visitor.grow_thirst();
        Ok(())
    }

    fn name(&self) -> &'static str {
        "festival"
    }
}

impl FestivalBehavior {
    /// The held cup if it still has drink in it.
    fn drink_left(&self, visitor: &Visitor, ctx: &StepContext<'_>) -> BehaviorResult<Option<CupId>> {
        match visitor.held_cup {
            Some(id) if !ctx.cup(id)?.is_empty() => Ok(Some(id)),
            _ => Ok(None),
        }
    }

    /// Buy at the nearest stand when on it, otherwise take one step toward it.
    fn seek_drink(&self, visitor: &mut Visitor, ctx: &mut StepContext<'_>) -> BehaviorResult<()> {
        let me = AgentRef::Visitor(visitor.id);
        let here = ctx.position_of(me)?;
        let (stand, goal) = ctx
            .stand_index
            .nearest(here)
            .ok_or(BehaviorError::NoStands(visitor.id))?;

        if here == goal {
            let sale = buy_drink(visitor, stand, ctx)?;
            if ctx.policy.verbose {
                debug!(
                    tick = %ctx.tick,
                    visitor = %visitor.id,
                    %stand,
                    cup = %sale.cup,
                    reused = sale.reused,
                    returned = sale.returned,
                    "bought drink"
                );
            }
        } else {
            let to = ctx.step_toward(me, goal)?;
            if ctx.policy.verbose {
                debug!(tick = %ctx.tick, visitor = %visitor.id, from = %here, %to, %stand, "heading to stand");
            }
        }
        Ok(())
    }

    fn sip(&self, visitor: &mut Visitor, ctx: &mut StepContext<'_>) -> BehaviorResult<()> {
        let Some(id) = visitor.held_cup else { return Ok(()) };
        let drunk = ctx.cup_mut(id)?.sip(visitor.traits.sip_size);
        visitor.quench(self.sip_relief);
        if ctx.policy.verbose {
            debug!(tick = %ctx.tick, visitor = %visitor.id, cup = %id, drunk, thirst = visitor.thirst(), "sip");
        }
        Ok(())
    }

    /// Drop the empty held cup or collect one from the floor.
    ///
    /// Draws at most one random number, and none when the held cup is not
    /// empty or there is nothing to collect.
    fn dispose(&self, visitor: &mut Visitor, ctx: &mut StepContext<'_>) -> BehaviorResult<()> {
        let Some(held) = visitor.held_cup else { return Ok(()) };
        if !ctx.cup(held)?.is_empty() {
            return Ok(());
        }

        let me = AgentRef::Visitor(visitor.id);
        let here = ctx.position_of(me)?;
        let litter = ctx.litter_around(here);

        if prefers_dropping(visitor.traits.reluctance, ctx.policy) {
            let p = drop_probability(litter.len());
            if !ctx.rng.gen_bool(p) {
                return Ok(());
            }
            ctx.grid.place(AgentRef::Cup(held), here)?;
            ctx.cup_mut(held)?.drop_to_floor();
            visitor.held_cup = None;
            visitor.cups_dropped += 1;
            ctx.counters.cups_dropped += 1;
            ctx.counters.cups_on_floor += 1;
            if ctx.policy.verbose {
                debug!(tick = %ctx.tick, visitor = %visitor.id, cup = %held, at = %here, litter = litter.len(), p, "dropped cup");
            }
        } else {
            let Some(target) = pick_collectable(ctx.cups, &litter) else { return Ok(()) };
            if !ctx.rng.gen_bool(ctx.policy.collection_awareness) {
                return Ok(());
            }
            let from = ctx.grid.remove(AgentRef::Cup(target))?;
            ctx.cup_mut(target)?.pick_up();
            visitor.collected.push(target);
            visitor.cups_collected += 1;
            ctx.counters.cups_collected += 1;
            ctx.counters.cups_on_floor = ctx.counters.cups_on_floor.saturating_sub(1);
            if ctx.policy.verbose {
                debug!(tick = %ctx.tick, visitor = %visitor.id, cup = %target, %from, "collected cup");
            }
        }
        Ok(())
    }
}
