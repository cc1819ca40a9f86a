//! `CupStore` — every cup ever minted, addressed by `CupId`.
//!
//! Cups are never destroyed, so the store doubles as the model's cup-id
//! counter: `len()` is the number of cups minted so far and the next id is
//! `len() + 1`.  Ids start at 1 and are handed out strictly in order.

use fc_core::CupId;

use crate::Cup;

/// Append-only cup storage.
#[derive(Default, Clone, Debug)]
pub struct CupStore {
    cups: Vec<Cup>,
}

impl CupStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bump the id counter and create a new full, clean cup.
    pub fn mint(&mut self) -> CupId {
        let id = CupId(self.cups.len() as u32 + 1);
        self.cups.push(Cup::new(id));
        id
    }

    /// The id the next `mint` will return.
    pub fn next_id(&self) -> CupId {
        CupId(self.cups.len() as u32 + 1)
    }

    #[inline]
    fn slot(id: CupId) -> Option<usize> {
        id.index().checked_sub(1)
    }

    pub fn get(&self, id: CupId) -> Option<&Cup> {
        Self::slot(id).and_then(|i| self.cups.get(i))
    }

    pub fn get_mut(&mut self, id: CupId) -> Option<&mut Cup> {
        Self::slot(id).and_then(|i| self.cups.get_mut(i))
    }

    /// Number of cups minted.
    #[inline]
    pub fn len(&self) -> usize {
        self.cups.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cup> + '_ {
        self.cups.iter()
    }

    /// Ids of cups minted after the first `minted_before` cups.
    pub fn ids_since(&self, minted_before: usize) -> impl Iterator<Item = CupId> + '_ {
        self.cups.iter().skip(minted_before).map(|c| c.id)
    }

    /// Sum of all reuse counts: how many refills the stands have poured.
    pub fn total_reuses(&self) -> u64 {
        self.cups.iter().map(|c| c.reuse_count() as u64).sum()
    }

    /// Cups currently lying on the floor.
    pub fn on_floor_count(&self) -> usize {
        self.cups.iter().filter(|c| c.on_floor()).count()
    }
}
