// Derived player quality: the Overall score and its letter grade.

use tracing::debug;

use crate::catalog::PlayerRecord;

/// Default blend between the Fpts grade and the value grade.
pub const DEFAULT_WEIGHT: f64 = 0.5;

/// Compute the Overall score and letter grade for a player.
///
/// `weight` is the share given to the value grade (0.0 = all Fpts grade,
/// 1.0 = all value grade). When either input grade is missing, a prior
/// Overall carried by the feed is used instead; with neither available the
/// score is 0 and no grade is shown.
pub fn score(player: &PlayerRecord, weight: f64) -> (i32, &'static str) {
    let overall = match (player.fpts_grade, player.val_grade) {
        (Some(fpts), Some(val)) if fpts.is_finite() && val.is_finite() => {
            (fpts * (1.0 - weight) + val * weight).round() as i32
        }
        _ => match player.overall_raw {
            Some(raw) if raw.is_finite() => raw.round() as i32,
            _ => 0,
        },
    };
    (overall, letter_grade(overall))
}

/// Bucket an Overall score into the 12-step academic scale.
/// Scores at or below zero carry no grade.
pub fn letter_grade(overall: i32) -> &'static str {
    if overall <= 0 {
        return "";
    }
    match overall {
        97.. => "A+",
        93.. => "A",
        90.. => "A-",
        87.. => "B+",
        83.. => "B",
        80.. => "B-",
        77.. => "C+",
        73.. => "C",
        70.. => "C-",
        67.. => "D+",
        63.. => "D",
        60.. => "D-",
        _ => "F",
    }
}

/// Recompute the derived fields for every catalog record.
///
/// Runs once at load and again on every weight change; nothing else
/// rewrites the catalog after load.
pub fn rescore(catalog: &mut [PlayerRecord], weight: f64) {
    for player in catalog.iter_mut() {
        let (overall, grade) = score(player, weight);
        player.overall = overall;
        player.letter_grade = grade.to_string();
    }
    debug!(count = catalog.len(), weight, "rescored catalog");
}
