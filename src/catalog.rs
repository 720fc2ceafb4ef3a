// Player catalog records and auxiliary passthrough metadata.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One catalog entry as delivered by the external loader.
///
/// Serde field names match the feed's columns. `overall` and `letter_grade`
/// are derived by the scoring module after load (and again on every weight
/// change); an Overall column present in the feed is kept only as
/// `overall_raw`, the scoring fallback input. Records are never mutated
/// outside a rescore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "Player")]
    pub name: String,
    #[serde(rename = "Team", default)]
    pub team: String,
    #[serde(rename = "Pos")]
    pub position: String,
    #[serde(rename = "Salary", default)]
    pub salary: u32,
    #[serde(rename = "Fpts", default)]
    pub projected_points: f64,
    #[serde(rename = "Fpts Grade", default)]
    pub fpts_grade: Option<f64>,
    #[serde(rename = "Val Grade", default)]
    pub val_grade: Option<f64>,
    #[serde(rename = "Overall", default)]
    pub overall_raw: Option<f64>,
    #[serde(skip)]
    pub overall: i32,
    #[serde(skip)]
    pub letter_grade: String,
}

/// Game context for a team's upcoming matchup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub opponent: String,
    pub spread: f64,
    pub total: f64,
    #[serde(default)]
    pub game_time: Option<DateTime<Utc>>,
}

impl Matchup {
    /// Compact one-line summary, e.g. `"STL (7:05 PM) -1.5, OU 7.5"`.
    /// The spread is always signed; an unknown game time renders as `TBD`.
    pub fn summary(&self) -> String {
        let time = match self.game_time {
            Some(t) => t.format("%-I:%M %p").to_string(),
            None => "TBD".to_string(),
        };
        format!("{} ({}) {:+}, OU {}", self.opponent, time, self.spread, self.total)
    }
}

/// Injury notes and news notes keyed by player name, matchup context keyed
/// by team. Pure passthrough: no engine algorithm reads any of it, it only
/// rides along for presentation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuxiliaryData {
    #[serde(default)]
    pub injuries: HashMap<String, String>,
    #[serde(default)]
    pub news: HashMap<String, String>,
    #[serde(default)]
    pub matchups: HashMap<String, Matchup>,
}

impl AuxiliaryData {
    pub fn injury_note(&self, player_name: &str) -> Option<&str> {
        self.injuries.get(player_name).map(String::as_str)
    }

    pub fn news_note(&self, player_name: &str) -> Option<&str> {
        self.news.get(player_name).map(String::as_str)
    }

    pub fn matchup(&self, team: &str) -> Option<&Matchup> {
        self.matchups.get(team)
    }
}
