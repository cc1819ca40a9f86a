//! Cup conservation audit.

use rustc_hash::FxHashMap;

use fc_core::{AgentRef, CupId};

use crate::{Festival, SimError, SimResult};
use fc_behavior::VisitorBehavior;

/// Where every minted cup currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CupTally {
    /// Held cups plus collected cups carried in bags.
    pub carried:      u64,
    pub in_inventory: u64,
    pub on_floor:     u64,
    pub minted:       u64,
}

impl CupTally {
    /// Cups accounted for in some location.
    #[inline]
    pub fn located(&self) -> u64 {
        self.carried + self.in_inventory + self.on_floor
    }

    /// `true` when no cup is missing or counted twice by total.
    #[inline]
    pub fn balances(&self) -> bool {
        self.located() == self.minted
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Owner {
    Visitor,
    Stand,
    Floor,
}

impl<B: VisitorBehavior> Festival<B> {
    /// Count cups per location.
    pub fn tally(&self) -> CupTally {
        CupTally {
            carried:      self.visitors.iter().map(|v| v.carried_cups().count() as u64).sum(),
            in_inventory: self.stands.iter().map(|s| s.inventory_len() as u64).sum(),
            on_floor:     self.cups.iter().filter(|c| c.on_floor()).count() as u64,
            minted:       self.cups.len() as u64,
        }
    }

    /// Check every cross-entity invariant of the model.
    ///
    /// - each minted cup has exactly one owner: a visitor's hand or bag, a
    ///   stand inventory, or a floor cell;
    /// - floor cups, and only they, are on the grid, at a valid cell;
    /// - thirst, volume, and soil lie within their bounds;
    /// - the floor counter matches a recount.
    ///
    /// Intended for tests and debug runs; it walks the whole model.
    pub fn verify_ledger(&self) -> SimResult<()> {
        let mut owner: FxHashMap<CupId, Owner> = FxHashMap::default();
        let mut claim = |id: CupId, who: Owner| -> SimResult<()> {
            match owner.insert(id, who) {
                None => Ok(()),
                Some(prev) => Err(SimError::Ledger(format!("{id} owned by both {prev:?} and {who:?}"))),
            }
        };

        for v in &self.visitors {
            if !(0.0..=fc_agent::MAX_THIRST).contains(&v.thirst()) {
                return Err(SimError::Ledger(format!("{} thirst {} out of range", v.id, v.thirst())));
            }
            for id in v.carried_cups() {
                claim(id, Owner::Visitor)?;
            }
        }
        for s in &self.stands {
            for &id in s.inventory() {
                claim(id, Owner::Stand)?;
            }
        }
        for cup in self.cups.iter() {
            if !(0.0..=fc_agent::CUP_CAPACITY_ML).contains(&cup.remaining_ml()) {
                return Err(SimError::Ledger(format!("{} volume {} out of range", cup.id, cup.remaining_ml())));
            }
            if !(0.0..=1.0).contains(&cup.soil()) {
                return Err(SimError::Ledger(format!("{} soil {} out of range", cup.id, cup.soil())));
            }
            let placed = self.grid.position_of(AgentRef::Cup(cup.id));
            match (cup.on_floor(), placed) {
                (true, Some(pos)) if self.grid.contains(pos) => claim(cup.id, Owner::Floor)?,
                (true, _) => return Err(SimError::Ledger(format!("{} on floor but not on the grid", cup.id))),
                (false, Some(pos)) => {
                    return Err(SimError::Ledger(format!("{} off the floor but placed at {pos}", cup.id)));
                }
                (false, None) => {}
            }
        }

        if let Some(id) = self.cups.iter().map(|c| c.id).find(|id| !owner.contains_key(id)) {
            return Err(SimError::Ledger(format!("{id} has no owner")));
        }
        if owner.len() != self.cups.len() {
            return Err(SimError::Ledger(format!(
                "{} cups owned but {} minted",
                owner.len(),
                self.cups.len()
            )));
        }

        let recount = self.cups.on_floor_count() as u64;
        if self.counters.cups_on_floor != recount {
            return Err(SimError::Ledger(format!(
                "floor counter says {} but {recount} cups are on the floor",
                self.counters.cups_on_floor
            )));
        }
        Ok(())
    }
}
