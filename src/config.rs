// Snapshot configuration: slot labels, salary cap, filter tags, and the
// raw eligibility map string delivered by the external loader.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::lineup::eligibility::EligibilityMap;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("validation error for field `{field}`: {message}")]
    Validation { field: String, message: String },
}

/// The configuration row exactly as the feed carries it. Serde field names
/// match the sheet columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawConfig {
    /// Comma-separated slot labels, in lineup order.
    #[serde(rename = "Lineup")]
    pub lineup: String,
    /// Comma-separated position filter tags.
    #[serde(rename = "Positions", default)]
    pub positions: String,
    #[serde(rename = "SalaryCap")]
    pub salary_cap: u32,
    /// Pseudo-JSON eligibility map using single quotes.
    #[serde(rename = "Map", default)]
    pub map: String,
}

/// Validated engine configuration. Built once at startup and read-only for
/// the rest of the session.
#[derive(Debug, Clone)]
pub struct Config {
    pub slot_labels: Vec<String>,
    pub salary_cap: u32,
    pub filter_tags: Vec<String>,
    pub eligibility: EligibilityMap,
}

impl Config {
    /// Validate and assemble the engine configuration.
    ///
    /// A malformed eligibility map is not an error: it degrades to
    /// exact-label matching (logged inside `EligibilityMap::parse`).
    pub fn from_raw(raw: &RawConfig) -> Result<Self, ConfigError> {
        let slot_labels = split_csv(&raw.lineup);
        if slot_labels.is_empty() {
            return Err(ConfigError::Validation {
                field: "Lineup".into(),
                message: "must list at least one slot label".into(),
            });
        }
        if raw.salary_cap == 0 {
            return Err(ConfigError::Validation {
                field: "SalaryCap".into(),
                message: "must be greater than 0".into(),
            });
        }

        Ok(Config {
            slot_labels,
            salary_cap: raw.salary_cap,
            filter_tags: split_csv(&raw.positions),
            eligibility: EligibilityMap::parse(&raw.map),
        })
    }
}

fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
