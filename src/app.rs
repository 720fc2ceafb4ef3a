// Session state and command/query orchestration.
//
// Owns the only mutable state in the engine (the lineup, the filter state,
// and the score weight) and re-derives everything else on demand, so every
// query is a pure function of the current state. The external loader hands
// over one `Snapshot` at startup; afterwards no I/O happens here.

use serde::Deserialize;
use tracing::warn;

use crate::catalog::{AuxiliaryData, PlayerRecord};
use crate::config::{Config, ConfigError, RawConfig};
use crate::filter::{self, FilterState, SortKey};
use crate::lineup::budget::{self, SalarySummary};
use crate::lineup::slot::{AssignmentOutcome, Lineup, LineupSlot};
use crate::scoring::{self, DEFAULT_WEIGHT};
use crate::shortlist::{self, Recommendation};

/// The complete payload delivered once by the external loader. Fetching and
/// top-level response shape are the loader's concern; this is the contract
/// it delivers against.
#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
    pub config: RawConfig,
    pub players: Vec<PlayerRecord>,
    #[serde(default)]
    pub aux: AuxiliaryData,
}

/// A lineup construction session.
pub struct LineupApp {
    config: Config,
    catalog: Vec<PlayerRecord>,
    aux: AuxiliaryData,
    lineup: Lineup,
    filter: FilterState,
    weight: f64,
}

impl LineupApp {
    /// Build a session from a loader snapshot.
    ///
    /// Fails only on invalid configuration; a malformed eligibility map is
    /// recovered inside `Config::from_raw` and never surfaces here. The
    /// catalog is scored with the default weight before first use.
    pub fn new(snapshot: Snapshot) -> Result<Self, ConfigError> {
        let config = Config::from_raw(&snapshot.config)?;
        let lineup = Lineup::new(&config.slot_labels);
        let mut catalog = snapshot.players;
        scoring::rescore(&mut catalog, DEFAULT_WEIGHT);
        Ok(LineupApp {
            config,
            catalog,
            aux: snapshot.aux,
            lineup,
            filter: FilterState::default(),
            weight: DEFAULT_WEIGHT,
        })
    }

    // -----------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------

    /// Assign the named catalog player to the first eligible open slot.
    ///
    /// The slot engine's duplicate precondition is enforced here: a player
    /// already occupying a slot (or a name not in the catalog) is rejected
    /// as `NoEligibleOpenSlot` without touching the lineup.
    pub fn assign(&mut self, player_name: &str) -> AssignmentOutcome {
        let Some(player) = self.catalog.iter().find(|p| p.name == player_name) else {
            warn!(player = player_name, "assign requested for unknown player");
            return AssignmentOutcome::NoEligibleOpenSlot;
        };
        if self.lineup.is_occupied_by(player_name) {
            return AssignmentOutcome::NoEligibleOpenSlot;
        }
        self.lineup.assign(player, &self.config.eligibility)
    }

    /// Clear a slot by index. No-op for empty or out-of-range slots.
    pub fn unassign(&mut self, slot_index: usize) {
        self.lineup.unassign(slot_index);
    }

    /// Set the scoring weight (clamped to `[0, 1]`) and rescore the
    /// catalog. Occupied slots keep the letter grade copied at assignment
    /// time; the denormalized slot snapshot is not refreshed.
    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight.clamp(0.0, 1.0);
        scoring::rescore(&mut self.catalog, self.weight);
    }

    /// Toggle a position filter tag off or back on.
    pub fn toggle_tag(&mut self, tag: &str) {
        self.filter.toggle_tag(tag);
    }

    pub fn set_max_salary(&mut self, max_salary: Option<u32>) {
        self.filter.max_salary = max_salary;
    }

    /// Header-click sorting: the active key flips direction, a new key
    /// starts ascending.
    pub fn sort_by(&mut self, key: SortKey) {
        self.filter.sort_by(key);
    }

    // -----------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------

    /// The catalog narrowed and ordered by the current filter state.
    pub fn visible_players(&self) -> Vec<&PlayerRecord> {
        filter::visible_players(&self.catalog, &self.filter, &self.config.eligibility)
    }

    /// Current spending summary against the configured cap.
    pub fn summary(&self) -> SalarySummary {
        budget::summarize(&self.lineup, self.config.salary_cap)
    }

    /// Best affordable candidate per open slot, in slot order.
    pub fn shortlist(&self) -> Vec<Recommendation> {
        let summary = self.summary();
        let occupied = self.lineup.occupied_names();
        shortlist::recommend(
            &self.catalog,
            &self.lineup,
            &self.config.eligibility,
            summary.average_per_open_slot,
            &occupied,
        )
    }

    /// Whether a catalog player can currently be added: not already in the
    /// lineup, with some empty slot accepting their position code.
    pub fn can_assign(&self, player: &PlayerRecord) -> bool {
        !self.lineup.is_occupied_by(&player.name)
            && self
                .lineup
                .has_open_slot_for(&player.position, &self.config.eligibility)
    }

    // -----------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------

    pub fn slots(&self) -> &[LineupSlot] {
        self.lineup.slots()
    }

    pub fn catalog(&self) -> &[PlayerRecord] {
        &self.catalog
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn aux(&self) -> &AuxiliaryData {
        &self.aux
    }
}
