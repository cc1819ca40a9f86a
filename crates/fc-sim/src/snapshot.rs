//! Read-only reporting view of a festival.
//!
//! A [`Snapshot`] is a plain value copied out of the model: consumers such
//! as CSV writers or the demo's grid printer can keep it around, compare
//! it, or ship it elsewhere without holding a borrow on the `Festival`.

use fc_agent::VisitorCondition;
use fc_core::{CupId, GridPos, SimClock, StandId, Tick, VisitorId};

/// What a grid cell shows, in display precedence order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum CellCondition {
    #[default]
    Empty,
    VisitorWithoutCup,
    VisitorWithCup,
    Stand,
}

impl CellCondition {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Empty             => "Empty",
            Self::VisitorWithoutCup => "HasNoCup",
            Self::VisitorWithCup    => "HasCup",
            Self::Stand             => "Stand",
        }
    }

    /// Combine two occupants of one cell, keeping the higher-precedence tag.
    #[inline]
    pub fn merge(self, other: CellCondition) -> CellCondition {
        if other.rank() > self.rank() { other } else { self }
    }

    fn rank(self) -> u8 {
        match self {
            Self::Empty             => 0,
            Self::VisitorWithoutCup => 1,
            Self::VisitorWithCup    => 2,
            Self::Stand             => 3,
        }
    }
}

impl From<VisitorCondition> for CellCondition {
    fn from(c: VisitorCondition) -> Self {
        match c {
            VisitorCondition::HasNoCup => Self::VisitorWithoutCup,
            VisitorCondition::HasCup   => Self::VisitorWithCup,
        }
    }
}

impl std::fmt::Display for CellCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Rows ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct VisitorRow {
    pub id:        VisitorId,
    pub pos:       GridPos,
    pub condition: VisitorCondition,
    pub thirst:    f32,
    pub seeking:   bool,
    pub held_cup:  Option<CupId>,
    /// Collected cups carried for return.
    pub bagged:    usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StandRow {
    pub id:          StandId,
    pub pos:         GridPos,
    pub inventory:   usize,
    pub drinks_sold: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloorCupRow {
    pub id:          CupId,
    pub pos:         GridPos,
    pub soil:        f32,
    pub reuse_count: u32,
}

// ── Snapshot ──────────────────────────────────────────────────────────────────

/// Festival state at a step boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// Steps completed.
    pub step:           u64,
    pub clock:          SimClock,
    pub width:          u32,
    pub height:         u32,

    pub cups_on_floor:  u64,
    /// Cups ever minted; cups are never destroyed, so this is also the
    /// number of cups in circulation.
    pub cups_minted:    u64,
    pub cups_returned:  u64,
    /// Sum of all cups' reuse counts.
    pub total_reuses:   u64,
    pub drinks_sold:    u64,
    pub cups_dropped:   u64,
    pub cups_collected: u64,

    /// Row-major, `width * height` entries.
    pub cells:          Vec<CellCondition>,
    pub visitors:       Vec<VisitorRow>,
    pub stands:         Vec<StandRow>,
    pub floor_cups:     Vec<FloorCupRow>,
}

impl Snapshot {
    /// Condition of the cell at `pos`, `Empty` outside the grid.
    pub fn cell(&self, pos: GridPos) -> CellCondition {
        if pos.x >= self.width || pos.y >= self.height {
            return CellCondition::Empty;
        }
        let idx = pos.y as usize * self.width as usize + pos.x as usize;
        self.cells.get(idx).copied().unwrap_or_default()
    }

    /// Number of cells showing `condition`.
    pub fn count_cells(&self, condition: CellCondition) -> usize {
        self.cells.iter().filter(|&&c| c == condition).count()
    }

    /// Visitors currently holding a cup.
    pub fn visitors_with_cup(&self) -> usize {
        self.visitors.iter().filter(|v| v.condition == VisitorCondition::HasCup).count()
    }
}

// ── StepSummary ───────────────────────────────────────────────────────────────

/// What happened during one step.  Event counts are deltas for this step,
/// levels are taken after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct StepSummary {
    /// Steps completed including this one.
    pub step:           u64,
    /// Tick that was executed.
    pub tick:           Tick,
    /// Agents activated (visitors, stands, cups).
    pub activated:      usize,

    pub new_cups:       u64,
    pub cups_returned:  u64,
    pub drinks_sold:    u64,
    pub cups_dropped:   u64,
    pub cups_collected: u64,

    pub cups_on_floor:  u64,
    pub cups_minted:    u64,
    pub total_reuses:   u64,
}
