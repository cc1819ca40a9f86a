//! Drink stands and their return inventories.

use fc_core::{CupId, GridPos, StandId};

/// A fixed-position drink dispenser.
///
/// `inventory` is a LIFO stack of returned cups: the most recently returned
/// cup is the next one refilled.  Cups in it are never on the floor and never
/// held by a visitor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stand {
    pub id: StandId,
    pub pos: GridPos,
    inventory: Vec<CupId>,
    /// Drinks poured over the whole run.
    pub drinks_sold: u32,
}

impl Stand {
    pub fn new(id: StandId, pos: GridPos) -> Self {
        Self { id, pos, inventory: Vec::new(), drinks_sold: 0 }
    }

    /// Put a returned cup on top of the stack.
    #[inline]
    pub fn accept_return(&mut self, cup: CupId) {
        self.inventory.push(cup);
    }

    /// Take the most recently returned cup, if any.
    #[inline]
    pub fn take_reusable(&mut self) -> Option<CupId> {
        self.inventory.pop()
    }

    /// Returned cups waiting for reuse, oldest first.
    #[inline]
    pub fn inventory(&self) -> &[CupId] {
        &self.inventory
    }

    #[inline]
    pub fn inventory_len(&self) -> usize {
        self.inventory.len()
    }
}
