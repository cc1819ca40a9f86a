//! Festival visitors: state and per-visitor traits.

use fc_core::{CupId, VisitorId};

/// Upper bound of the thirst scale.
pub const MAX_THIRST: f32 = 100.0;

/// Traits sampled once at creation and never changed.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisitorTraits {
    /// Equivalent drinks required before the visitor bothers to return a
    /// cup.  Compared against the cup-return threshold.
    pub reluctance: f32,
    /// Thirst gained per step.
    pub thirst_rate: f32,
    /// ml drunk per sip.
    pub sip_size: f32,
}

/// Reporting tag for a visitor, matching the grid legend.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisitorCondition {
    HasNoCup,
    HasCup,
}

impl VisitorCondition {
    pub fn as_str(self) -> &'static str {
        match self {
            VisitorCondition::HasNoCup => "has_no_cup",
            VisitorCondition::HasCup   => "has_cup",
        }
    }
}

/// A mobile visitor.
///
/// The visitor's position is owned by the grid; everything else about the
/// visitor lives here.  `thirst` stays in `[0, MAX_THIRST]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Visitor {
    pub id: VisitorId,
    pub traits: VisitorTraits,
    thirst: f32,
    /// The cup the visitor drinks from.
    pub held_cup: Option<CupId>,
    /// Littered cups picked up and carried to the next stand.
    pub collected: Vec<CupId>,
    /// Committed to walking to a stand; survives across steps.
    pub seeking_drink: bool,

    // ── Per-visitor tallies ──────────────────────────────────────────────
    pub drinks_bought: u32,
    pub cups_dropped: u32,
    pub cups_collected: u32,
}

impl Visitor {
    pub fn new(id: VisitorId, traits: VisitorTraits) -> Self {
        Self {
            id,
            traits,
            thirst: 0.0,
            held_cup: None,
            collected: Vec::new(),
            seeking_drink: false,
            drinks_bought: 0,
            cups_dropped: 0,
            cups_collected: 0,
        }
    }

    #[inline]
    pub fn thirst(&self) -> f32 {
        self.thirst
    }

    /// Overwrite thirst, clamped to the valid range.
    pub fn set_thirst(&mut self, thirst: f32) {
        self.thirst = thirst.clamp(0.0, MAX_THIRST);
    }

    /// Saturating per-step thirst increase.
    pub fn grow_thirst(&mut self) {
        self.set_thirst(self.thirst + self.traits.thirst_rate);
    }

    /// Lower thirst by at most `relief`, never below zero.
    pub fn quench(&mut self, relief: f32) {
        let relief = relief.max(0.0).min(self.thirst);
        self.set_thirst(self.thirst - relief);
    }

    pub fn condition(&self) -> VisitorCondition {
        if self.held_cup.is_some() {
            VisitorCondition::HasCup
        } else {
            VisitorCondition::HasNoCup
        }
    }

    /// Every cup this visitor carries: the held cup followed by the bag.
    pub fn carried_cups(&self) -> impl Iterator<Item = CupId> + '_ {
        self.held_cup.iter().copied().chain(self.collected.iter().copied())
    }
}
