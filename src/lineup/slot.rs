// Lineup slots and first-fit assignment.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::eligibility::EligibilityMap;
use crate::catalog::PlayerRecord;

/// The displayable fields copied into a slot at assignment time.
///
/// This is a denormalized snapshot: later changes to the source catalog
/// record (a weight change re-deriving its letter grade, for instance) do
/// not propagate into an occupied slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotPlayer {
    pub name: String,
    pub team: String,
    pub salary: u32,
    pub projected_points: f64,
    pub letter_grade: String,
}

impl SlotPlayer {
    fn from_record(player: &PlayerRecord) -> Self {
        SlotPlayer {
            name: player.name.clone(),
            team: player.team.clone(),
            salary: player.salary,
            projected_points: player.projected_points,
            letter_grade: player.letter_grade.clone(),
        }
    }
}

/// One position in the roster template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupSlot {
    /// The configured label; never altered after construction.
    pub label: String,
    /// The player occupying this slot, if any.
    pub player: Option<SlotPlayer>,
}

/// Outcome of an assignment attempt. `NoEligibleOpenSlot` is a normal
/// result the caller may ignore or surface, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentOutcome {
    Assigned(usize),
    NoEligibleOpenSlot,
}

/// A fixed-size lineup of labeled slots. The slot count and labels are set
/// at construction and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lineup {
    slots: Vec<LineupSlot>,
}

impl Lineup {
    /// Create an empty lineup with one slot per configured label, in
    /// configuration order.
    pub fn new(slot_labels: &[String]) -> Self {
        Lineup {
            slots: slot_labels
                .iter()
                .map(|label| LineupSlot {
                    label: label.clone(),
                    player: None,
                })
                .collect(),
        }
    }

    pub fn slots(&self) -> &[LineupSlot] {
        &self.slots
    }

    /// Assign a player to the first empty slot whose label accepts the
    /// player's position code. On `NoEligibleOpenSlot` the lineup is
    /// unchanged.
    ///
    /// Precondition: the caller has checked that the player's name does not
    /// already occupy a slot (see [`Lineup::is_occupied_by`]); `assign`
    /// itself does not guard against duplicates.
    pub fn assign(
        &mut self,
        player: &PlayerRecord,
        eligibility: &EligibilityMap,
    ) -> AssignmentOutcome {
        let idx = self
            .slots
            .iter()
            .position(|s| s.player.is_none() && eligibility.accepts(&s.label, &player.position));
        match idx {
            Some(idx) => {
                self.slots[idx].player = Some(SlotPlayer::from_record(player));
                debug!(player = %player.name, slot = %self.slots[idx].label, "assigned player");
                AssignmentOutcome::Assigned(idx)
            }
            None => AssignmentOutcome::NoEligibleOpenSlot,
        }
    }

    /// Clear a slot back to empty; the label is untouched. Unassigning an
    /// already-empty slot or an out-of-range index is a no-op.
    pub fn unassign(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.player = None;
        }
    }

    /// Whether the named player currently occupies a slot.
    pub fn is_occupied_by(&self, name: &str) -> bool {
        self.slots
            .iter()
            .any(|s| s.player.as_ref().is_some_and(|p| p.name == name))
    }

    /// Names of all players currently in the lineup, in slot order.
    pub fn occupied_names(&self) -> Vec<&str> {
        self.slots
            .iter()
            .filter_map(|s| s.player.as_ref())
            .map(|p| p.name.as_str())
            .collect()
    }

    /// Whether some empty slot accepts the given position code.
    pub fn has_open_slot_for(&self, position: &str, eligibility: &EligibilityMap) -> bool {
        self.slots
            .iter()
            .any(|s| s.player.is_none() && eligibility.accepts(&s.label, position))
    }

    pub fn open_count(&self) -> usize {
        self.slots.iter().filter(|s| s.player.is_none()).count()
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.player.is_some()).count()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
