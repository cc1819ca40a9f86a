//! Stand transactions: hand in cups, get a full one back.

use fc_agent::Visitor;
use fc_core::{CupId, StandId};

use crate::{BehaviorResult, StepContext};

/// Outcome of one [`buy_drink`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sale {
    pub stand:    StandId,
    /// The cup the visitor now holds.
    pub cup:      CupId,
    /// `true` when `cup` came from the stand's inventory, `false` if minted.
    pub reused:   bool,
    /// Cups handed in during this sale.
    pub returned: u32,
}

/// Sell `visitor` a drink at `stand`.
///
/// 1. Cups in the visitor's collection bag are handed in, then the held
///    cup.  Each goes onto the stand's inventory and counts as returned.
/// 2. The most recently returned cup is refilled and handed over, or a new
///    cup is minted when the inventory is empty.
/// 3. The visitor stops seeking a drink.
pub fn buy_drink(
    visitor: &mut Visitor,
    stand:   StandId,
    ctx:     &mut StepContext<'_>,
) -> BehaviorResult<Sale> {
    let handed_in: Vec<CupId> = visitor
        .collected
        .drain(..)
        .chain(visitor.held_cup.take())
        .collect();

    for &id in &handed_in {
        ctx.cup_mut(id)?.mark_returned();
        ctx.stand_mut(stand)?.accept_return(id);
        ctx.counters.cups_returned += 1;
    }

    let (cup, reused) = match ctx.stand_mut(stand)?.take_reusable() {
        Some(id) => {
            ctx.cup_mut(id)?.refill_for_reuse();
            (id, true)
        }
        None => (ctx.cups.mint(), false),
    };

    ctx.stand_mut(stand)?.drinks_sold += 1;
    ctx.counters.drinks_sold += 1;
    visitor.held_cup = Some(cup);
    visitor.seeking_drink = false;
    visitor.drinks_bought += 1;

    Ok(Sale { stand, cup, reused, returned: handed_in.len() as u32 })
}
