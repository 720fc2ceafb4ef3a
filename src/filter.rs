// Catalog narrowing and ordering driven by the user's filter state.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::catalog::PlayerRecord;
use crate::lineup::eligibility::EligibilityMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

/// A sortable column of the player table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Name,
    Team,
    Position,
    Salary,
    ProjectedPoints,
    FptsGrade,
    ValGrade,
    Overall,
    LetterGrade,
}

/// The value a sort key extracts from a record. Numeric keys distinguish
/// valid numbers from missing/NaN values: a valid number sorts before an
/// invalid one regardless of direction, and two invalid values compare
/// equal.
enum SortValue<'a> {
    Number(Option<f64>),
    Text(&'a str),
}

fn sort_value<'a>(player: &'a PlayerRecord, key: SortKey) -> SortValue<'a> {
    match key {
        SortKey::Name => SortValue::Text(&player.name),
        SortKey::Team => SortValue::Text(&player.team),
        SortKey::Position => SortValue::Text(&player.position),
        SortKey::LetterGrade => SortValue::Text(&player.letter_grade),
        SortKey::Salary => SortValue::Number(Some(f64::from(player.salary))),
        SortKey::Overall => SortValue::Number(Some(f64::from(player.overall))),
        SortKey::ProjectedPoints => SortValue::Number(finite(player.projected_points)),
        SortKey::FptsGrade => SortValue::Number(player.fpts_grade.and_then(finite)),
        SortKey::ValGrade => SortValue::Number(player.val_grade.and_then(finite)),
    }
}

fn finite(v: f64) -> Option<f64> {
    v.is_finite().then_some(v)
}

/// User-driven view state for the player table. Has no effect on lineup
/// contents; it only narrows and orders what is shown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Position filter tags the user toggled off.
    pub disabled_tags: Vec<String>,
    /// Upper salary bound; ignored unless positive.
    pub max_salary: Option<u32>,
    pub sort: Option<(SortKey, SortDirection)>,
}

impl FilterState {
    /// Toggle a position filter tag off or back on.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(idx) = self.disabled_tags.iter().position(|t| t == tag) {
            self.disabled_tags.remove(idx);
        } else {
            self.disabled_tags.push(tag.to_string());
        }
    }

    /// Header-click sort semantics: clicking the active key flips the
    /// direction, clicking a new key sorts ascending.
    pub fn sort_by(&mut self, key: SortKey) {
        self.sort = match self.sort {
            Some((current, dir)) if current == key => Some((key, dir.flip())),
            _ => Some((key, SortDirection::Ascending)),
        };
    }
}

/// Narrow and order the catalog by the active filters and sort key.
///
/// A disabled tag hides every position code it maps to, not just its own
/// label, so a code shared with a still-enabled tag stays hidden. Returns a
/// fresh list each call; the catalog is never mutated.
pub fn visible_players<'a>(
    catalog: &'a [PlayerRecord],
    filter: &FilterState,
    eligibility: &EligibilityMap,
) -> Vec<&'a PlayerRecord> {
    let mut list: Vec<&PlayerRecord> = catalog
        .iter()
        .filter(|p| {
            !filter
                .disabled_tags
                .iter()
                .any(|tag| eligibility.accepts(tag, &p.position))
        })
        .filter(|p| match filter.max_salary {
            Some(max) if max > 0 => p.salary <= max,
            _ => true,
        })
        .collect();

    if let Some((key, dir)) = filter.sort {
        list.sort_by(|a, b| compare(a, b, key, dir));
    }
    list
}

fn compare(a: &PlayerRecord, b: &PlayerRecord, key: SortKey, dir: SortDirection) -> Ordering {
    match (sort_value(a, key), sort_value(b, key)) {
        (SortValue::Text(x), SortValue::Text(y)) => dir.apply(x.cmp(y)),
        (SortValue::Number(x), SortValue::Number(y)) => match (x, y) {
            // Direction applies only between two valid numbers; invalid
            // values sort last either way.
            (Some(x), Some(y)) => dir.apply(x.partial_cmp(&y).unwrap_or(Ordering::Equal)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        // A key extracts the same variant for every record.
        _ => Ordering::Equal,
    }
}
