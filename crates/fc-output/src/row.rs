//! Plain data row types written by output backends.

use fc_sim::{Snapshot, StepSummary};

/// Kind of agent in an [`AgentSnapshotRow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentKind {
    Visitor,
    Stand,
    Cup,
}

impl AgentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Visitor => "visitor",
            Self::Stand   => "stand",
            Self::Cup     => "cup",
        }
    }
}

/// One agent's state at a snapshot.  Columns that do not apply to the
/// agent's kind are `None` and written as empty fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub step:      u64,
    pub kind:      AgentKind,
    pub agent_id:  u32,
    pub x:         u32,
    pub y:         u32,
    /// `has_cup` / `has_no_cup` for visitors, `stand`, or the floor cup's
    /// condition.
    pub condition: &'static str,
    pub thirst:    Option<f32>,
    pub inventory: Option<u32>,
    pub soil:      Option<f32>,
}

impl AgentSnapshotRow {
    /// Flatten a snapshot: visitors, then stands, then floor cups.
    pub fn from_snapshot(snapshot: &Snapshot) -> Vec<AgentSnapshotRow> {
        let step = snapshot.step;
        let visitors = snapshot.visitors.iter().map(|v| AgentSnapshotRow {
            step,
            kind:      AgentKind::Visitor,
            agent_id:  v.id.0,
            x:         v.pos.x,
            y:         v.pos.y,
            condition: v.condition.as_str(),
            thirst:    Some(v.thirst),
            inventory: None,
            soil:      None,
        });
        let stands = snapshot.stands.iter().map(|s| AgentSnapshotRow {
            step,
            kind:      AgentKind::Stand,
            agent_id:  s.id.0,
            x:         s.pos.x,
            y:         s.pos.y,
            condition: "stand",
            thirst:    None,
            inventory: Some(s.inventory as u32),
            soil:      None,
        });
        let cups = snapshot.floor_cups.iter().map(|c| AgentSnapshotRow {
            step,
            kind:      AgentKind::Cup,
            agent_id:  c.id.0,
            x:         c.pos.x,
            y:         c.pos.y,
            condition: fc_agent::CupCondition::Littered.as_str(),
            thirst:    None,
            inventory: None,
            soil:      Some(c.soil),
        });
        visitors.chain(stands).chain(cups).collect()
    }
}

/// Summary statistics for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSummaryRow {
    pub step:           u64,
    pub tick:           u64,
    /// Seconds after midnight on the first festival day.
    pub festival_secs:  u64,
    pub drinks_sold:    u64,
    pub cups_returned:  u64,
    pub cups_dropped:   u64,
    pub cups_collected: u64,
    pub cups_on_floor:  u64,
    pub cups_minted:    u64,
    pub total_reuses:   u64,
}

impl StepSummaryRow {
    pub fn new(summary: &StepSummary, festival_secs: u64) -> Self {
        Self {
            step:           summary.step,
            tick:           summary.tick.0,
            festival_secs,
            drinks_sold:    summary.drinks_sold,
            cups_returned:  summary.cups_returned,
            cups_dropped:   summary.cups_dropped,
            cups_collected: summary.cups_collected,
            cups_on_floor:  summary.cups_on_floor,
            cups_minted:    summary.cups_minted,
            total_reuses:   summary.total_reuses,
        }
    }
}
