// Per-open-slot shortlist: the best affordable, eligible, unselected player.

use serde::{Deserialize, Serialize};

use crate::catalog::PlayerRecord;
use crate::lineup::eligibility::EligibilityMap;
use crate::lineup::slot::Lineup;

/// Name rendered for a slot with no affordable candidate.
pub const OPEN_SLOT_PLACEHOLDER: &str = "--- Open Slot ---";

/// The shortlisted candidate's displayable fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortlistEntry {
    pub name: String,
    pub team: String,
    pub position: String,
    pub salary: u32,
    pub projected_points: f64,
    pub overall: i32,
    pub letter_grade: String,
}

impl ShortlistEntry {
    fn from_record(player: &PlayerRecord) -> Self {
        ShortlistEntry {
            name: player.name.clone(),
            team: player.team.clone(),
            position: player.position.clone(),
            salary: player.salary,
            projected_points: player.projected_points,
            overall: player.overall,
            letter_grade: player.letter_grade.clone(),
        }
    }
}

/// The shortlisted pick for one open slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Label of the open slot this entry is for.
    pub slot_label: String,
    /// The best candidate, or `None` when no eligible player is affordable.
    pub player: Option<ShortlistEntry>,
}

impl Recommendation {
    /// Display name for the row; placeholder entries render the fixed
    /// open-slot marker so callers can emit one row per open slot.
    pub fn display_name(&self) -> &str {
        self.player
            .as_ref()
            .map_or(OPEN_SLOT_PLACEHOLDER, |p| p.name.as_str())
    }
}

/// Pick the best affordable candidate for each open slot, in slot order.
///
/// A candidate must be eligible for the slot, not already selected, and
/// priced at or under the average budget per open slot. The highest
/// `overall` wins; ties keep the earliest catalog entry (strict `>`
/// comparison). A slot with an empty pool yields a placeholder entry
/// rather than being omitted.
pub fn recommend(
    catalog: &[PlayerRecord],
    lineup: &Lineup,
    eligibility: &EligibilityMap,
    avg_per_open_slot: f64,
    occupied_names: &[&str],
) -> Vec<Recommendation> {
    lineup
        .slots()
        .iter()
        .filter(|slot| slot.player.is_none())
        .map(|slot| {
            let mut best: Option<&PlayerRecord> = None;
            for player in catalog {
                if !eligibility.accepts(&slot.label, &player.position) {
                    continue;
                }
                if occupied_names.contains(&player.name.as_str()) {
                    continue;
                }
                if f64::from(player.salary) > avg_per_open_slot {
                    continue;
                }
                if best.is_none_or(|b| player.overall > b.overall) {
                    best = Some(player);
                }
            }
            Recommendation {
                slot_label: slot.label.clone(),
                player: best.map(ShortlistEntry::from_record),
            }
        })
        .collect()
}
