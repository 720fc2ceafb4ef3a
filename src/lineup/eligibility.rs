// Slot eligibility: which player position codes may fill which slot label.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Maps a slot label to the set of player position codes it accepts.
///
/// Labels absent from the map accept exactly their own code, so an empty
/// map degrades every slot to exact-label matching.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EligibilityMap {
    map: HashMap<String, Vec<String>>,
}

impl EligibilityMap {
    pub fn new(map: HashMap<String, Vec<String>>) -> Self {
        EligibilityMap { map }
    }

    /// Parse the configured map string.
    ///
    /// The feed carries pseudo-JSON with single quotes
    /// (e.g. `{'P': ['SP', 'RP']}`), normalized to valid JSON before
    /// parsing. A malformed string is logged and degrades to the empty map;
    /// it is never an error to the caller.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::default();
        }
        let normalized = raw.replace('\'', "\"");
        match serde_json::from_str::<HashMap<String, Vec<String>>>(&normalized) {
            Ok(map) => EligibilityMap { map },
            Err(err) => {
                warn!("failed to parse eligibility map, slots fall back to exact-label matching: {err}");
                Self::default()
            }
        }
    }

    /// Position codes allowed to fill a slot with the given label.
    pub fn allowed_positions(&self, label: &str) -> Vec<String> {
        self.map
            .get(label)
            .cloned()
            .unwrap_or_else(|| vec![label.to_string()])
    }

    /// Whether a player position code may fill a slot with the given label.
    /// Equivalent to `allowed_positions` membership without the allocation.
    pub fn accepts(&self, label: &str, position: &str) -> bool {
        match self.map.get(label) {
            Some(codes) => codes.iter().any(|c| c == position),
            None => label == position,
        }
    }
}
