// Salary-cap accounting derived from the current lineup.

use serde::{Deserialize, Serialize};

use super::slot::Lineup;

/// Where the lineup stands against the cap. First matching rule wins:
/// over the cap is `Exceeded` even when every slot is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineupStatus {
    /// Total spend is over the cap.
    Exceeded,
    /// Every slot is filled without exceeding the cap.
    Complete,
    /// Open slots remain and the cap is not exceeded.
    InProgress,
}

/// Derived spending summary. Recomputed from the lineup on demand and never
/// stored as authoritative state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalarySummary {
    pub total_spent: u32,
    pub remaining: i64,
    pub open_slot_count: usize,
    /// Remaining budget per open slot; 0.0 when no slots are open. Goes
    /// negative when over the cap with slots still open, which makes every
    /// shortlist candidate unaffordable.
    pub average_per_open_slot: f64,
    pub status: LineupStatus,
}

/// Summarize spending for a lineup against a salary cap.
pub fn summarize(lineup: &Lineup, cap: u32) -> SalarySummary {
    let total_spent: u32 = lineup
        .slots()
        .iter()
        .filter_map(|s| s.player.as_ref())
        .map(|p| p.salary)
        .sum();
    let remaining = i64::from(cap) - i64::from(total_spent);
    let open_slot_count = lineup.open_count();
    let average_per_open_slot = if open_slot_count > 0 {
        remaining as f64 / open_slot_count as f64
    } else {
        0.0
    };

    let status = if remaining < 0 {
        LineupStatus::Exceeded
    } else if open_slot_count == 0 {
        LineupStatus::Complete
    } else {
        LineupStatus::InProgress
    };

    SalarySummary {
        total_spent,
        remaining,
        open_slot_count,
        average_per_open_slot,
        status,
    }
}
