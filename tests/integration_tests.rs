// Integration tests for the lineup assistant.
//
// These tests exercise the full engine end-to-end through the library
// crate's public API: snapshot deserialization, configuration validation,
// eligibility resolution, assignment, budget accounting, filtering, and the
// shortlist recommender working together over one session.

use lineup_assistant::app::{LineupApp, Snapshot};
use lineup_assistant::catalog::PlayerRecord;
use lineup_assistant::config::{Config, ConfigError, RawConfig};
use lineup_assistant::filter::SortKey;
use lineup_assistant::lineup::budget::LineupStatus;
use lineup_assistant::lineup::slot::AssignmentOutcome;
use lineup_assistant::shortlist::OPEN_SLOT_PLACEHOLDER;

// ===========================================================================
// Test helpers
// ===========================================================================

/// A small DFS-style snapshot with the feed's field names, as the external
/// loader would deliver after parsing the remote response.
fn snapshot_json() -> &'static str {
    r#"{
        "config": {
            "Lineup": "P,P,C,1B,OF,UTIL",
            "Positions": "P,C,1B,OF",
            "SalaryCap": 50000,
            "Map": "{'P': ['SP', 'RP'], 'OF': ['LF', 'CF', 'RF'], 'UTIL': ['C', '1B', 'LF', 'CF', 'RF']}"
        },
        "players": [
            {"Player": "Paul Skenes",   "Team": "PIT", "Pos": "SP", "Salary": 11000, "Fpts": 24.1, "Fpts Grade": 95.0, "Val Grade": 75.0},
            {"Player": "Edwin Diaz",    "Team": "NYM", "Pos": "RP", "Salary": 7000,  "Fpts": 12.4, "Fpts Grade": 70.0, "Val Grade": 80.0},
            {"Player": "Will Smith",    "Team": "LAD", "Pos": "C",  "Salary": 9000,  "Fpts": 14.8, "Fpts Grade": 82.0, "Val Grade": 64.0},
            {"Player": "Freddie Freeman", "Team": "LAD", "Pos": "1B", "Salary": 8500, "Fpts": 15.2, "Fpts Grade": 84.0, "Val Grade": 70.0},
            {"Player": "Corbin Carroll", "Team": "ARI", "Pos": "RF", "Salary": 8200, "Fpts": 16.0, "Fpts Grade": 86.0, "Val Grade": 78.0},
            {"Player": "Budget Bat",    "Team": "MIA", "Pos": "LF", "Salary": 3000,  "Fpts": 7.5,  "Overall": 52.0},
            {"Player": "Waiver Arm",    "Team": "OAK", "Pos": "RP", "Salary": 2500,  "Fpts": 5.1},
            {"Player": "Cheap Catcher", "Team": "COL", "Pos": "C",  "Salary": 2800,  "Fpts": 6.2,  "Fpts Grade": 48.0, "Val Grade": 66.0}
        ],
        "aux": {
            "injuries": {"Freddie Freeman": "Questionable (ankle)"},
            "news": {"Paul Skenes": "Confirmed starter for tonight"},
            "matchups": {"PIT": {"opponent": "STL", "spread": -1.5, "total": 7.5, "game_time": "2025-05-01T19:05:00Z"}}
        }
    }"#
}

fn app() -> LineupApp {
    let snapshot: Snapshot = serde_json::from_str(snapshot_json()).expect("snapshot parses");
    LineupApp::new(snapshot).expect("valid config")
}

// ===========================================================================
// Startup
// ===========================================================================

#[test]
fn snapshot_builds_a_scored_session() {
    let app = app();
    assert_eq!(app.slots().len(), 6);
    assert_eq!(app.config().salary_cap, 50000);
    assert_eq!(app.config().filter_tags, vec!["P", "C", "1B", "OF"]);

    // Catalog scored at the default weight: Skenes (95+75)/2 = 85 -> "B".
    let skenes = &app.catalog()[0];
    assert_eq!(skenes.overall, 85);
    assert_eq!(skenes.letter_grade, "B");
    // Feed Overall fallback: Budget Bat has only a prior Overall of 52.
    let budget_bat = &app.catalog()[5];
    assert_eq!(budget_bat.overall, 52);
    assert_eq!(budget_bat.letter_grade, "F");
    // No grades at all: Waiver Arm scores 0 and shows nothing.
    let waiver = &app.catalog()[6];
    assert_eq!(waiver.overall, 0);
    assert_eq!(waiver.letter_grade, "");

    // Auxiliary data rides along untouched.
    assert_eq!(
        app.aux().injury_note("Freddie Freeman"),
        Some("Questionable (ankle)")
    );
    assert_eq!(
        app.aux().matchup("PIT").unwrap().summary(),
        "STL (7:05 PM) -1.5, OU 7.5"
    );
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let raw = RawConfig {
        lineup: String::new(),
        positions: "P".to_string(),
        salary_cap: 50000,
        map: String::new(),
    };
    let err = Config::from_raw(&raw).unwrap_err();
    match err {
        ConfigError::Validation { field, .. } => assert_eq!(field, "Lineup"),
    }
}

#[test]
fn malformed_eligibility_map_degrades_but_session_still_works() {
    let mut snapshot: Snapshot = serde_json::from_str(snapshot_json()).unwrap();
    snapshot.config.map = "{'P': ['SP',".to_string();
    let mut app = LineupApp::new(snapshot).expect("parse failure is recovered");

    // Exact-label matching only: an SP no longer fits the P slot.
    assert_eq!(
        app.assign("Paul Skenes"),
        AssignmentOutcome::NoEligibleOpenSlot
    );
    // Exact matches still work.
    assert_eq!(app.assign("Will Smith"), AssignmentOutcome::Assigned(2));
}

// ===========================================================================
// A full session walkthrough
// ===========================================================================

#[test]
fn build_a_lineup_end_to_end() {
    let mut app = app();

    // First-fit: both P slots accept SP/RP, first one wins.
    assert_eq!(app.assign("Paul Skenes"), AssignmentOutcome::Assigned(0));
    assert_eq!(app.assign("Edwin Diaz"), AssignmentOutcome::Assigned(1));
    assert_eq!(app.assign("Will Smith"), AssignmentOutcome::Assigned(2));

    let summary = app.summary();
    assert_eq!(summary.total_spent, 27000);
    assert_eq!(summary.remaining, 23000);
    assert_eq!(summary.open_slot_count, 3);
    assert_eq!(summary.status, LineupStatus::InProgress);

    // Shortlist: one entry per open slot (1B, OF, UTIL), avg 23000/3.
    // Freeman (8500) and Carroll (8200) both cost more than the per-slot
    // average, so the 1B slot has no affordable candidate at all.
    let recs = app.shortlist();
    assert_eq!(recs.len(), 3);
    assert_eq!(recs[0].slot_label, "1B");
    assert_eq!(recs[0].display_name(), OPEN_SLOT_PLACEHOLDER);
    assert_eq!(recs[1].slot_label, "OF");
    assert_eq!(recs[1].display_name(), "Budget Bat");
    // UTIL: Cheap Catcher (57) edges out Budget Bat (52); Will Smith is
    // occupied and excluded.
    assert_eq!(recs[2].slot_label, "UTIL");
    assert_eq!(recs[2].display_name(), "Cheap Catcher");

    // Fill the rest and come in under the cap.
    assert_eq!(app.assign("Freddie Freeman"), AssignmentOutcome::Assigned(3));
    assert_eq!(app.assign("Corbin Carroll"), AssignmentOutcome::Assigned(4));
    assert_eq!(app.assign("Budget Bat"), AssignmentOutcome::Assigned(5));

    let summary = app.summary();
    assert_eq!(summary.open_slot_count, 0);
    assert_eq!(summary.status, LineupStatus::Complete);
    assert!(app.shortlist().is_empty());

    // Remove the catcher; the session picks up where it left off.
    app.unassign(2);
    let summary = app.summary();
    assert_eq!(summary.open_slot_count, 1);
    assert_eq!(summary.status, LineupStatus::InProgress);
    let recs = app.shortlist();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].slot_label, "C");
    assert_eq!(recs[0].display_name(), "Will Smith");
}

#[test]
fn over_cap_session_shows_placeholders() {
    let mut snapshot: Snapshot = serde_json::from_str(snapshot_json()).unwrap();
    snapshot.config.salary_cap = 20000;
    let mut app = LineupApp::new(snapshot).unwrap();

    app.assign("Paul Skenes"); // 11000
    app.assign("Will Smith"); // 9000
    app.assign("Freddie Freeman"); // 8500 -> 28500 total

    let summary = app.summary();
    assert_eq!(summary.remaining, -8500);
    assert_eq!(summary.status, LineupStatus::Exceeded);
    assert!(summary.average_per_open_slot < 0.0);

    // Nothing is affordable against a negative per-slot budget: every open
    // slot renders the placeholder row.
    let recs = app.shortlist();
    assert_eq!(recs.len(), 3);
    for rec in &recs {
        assert!(rec.player.is_none());
        assert_eq!(rec.display_name(), OPEN_SLOT_PLACEHOLDER);
    }
}

#[test]
fn no_eligible_open_slot_is_a_quiet_outcome() {
    let mut app = app();
    // Fill both pitcher slots.
    app.assign("Paul Skenes");
    app.assign("Edwin Diaz");
    // A third arm has nowhere to go (UTIL takes hitters only).
    assert_eq!(
        app.assign("Waiver Arm"),
        AssignmentOutcome::NoEligibleOpenSlot
    );
    assert_eq!(app.summary().total_spent, 18000);
}

// ===========================================================================
// Filtering and scoring interplay
// ===========================================================================

#[test]
fn disabled_tag_hides_mapped_codes_in_visible_list() {
    let mut app = app();
    app.toggle_tag("OF");
    let names: Vec<&str> = app.visible_players().iter().map(|p| p.name.as_str()).collect();
    // LF/CF/RF all hidden, everyone else shown.
    assert!(!names.contains(&"Corbin Carroll"));
    assert!(!names.contains(&"Budget Bat"));
    assert!(names.contains(&"Paul Skenes"));
    assert!(names.contains(&"Will Smith"));
}

#[test]
fn sort_toggling_and_invalid_values_last() {
    let mut app = app();
    app.sort_by(SortKey::ValGrade);
    let visible = app.visible_players();
    // Ascending by value grade; the two players without one come last.
    let first = visible.first().unwrap();
    assert_eq!(first.name, "Will Smith"); // 64 is the lowest value grade
    let tail: Vec<&str> = visible[visible.len() - 2..]
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert!(tail.contains(&"Budget Bat"));
    assert!(tail.contains(&"Waiver Arm"));

    // Clicking the same header flips to descending; invalid still last.
    app.sort_by(SortKey::ValGrade);
    let visible = app.visible_players();
    assert_eq!(visible.first().unwrap().name, "Edwin Diaz"); // 80
    let tail: Vec<&str> = visible[visible.len() - 2..]
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert!(tail.contains(&"Budget Bat"));
    assert!(tail.contains(&"Waiver Arm"));
}

#[test]
fn weight_change_reorders_the_shortlist() {
    // A higher cap so the per-slot average (66000/6 = 11000) keeps every
    // pitcher affordable for the empty lineup.
    let mut snapshot: Snapshot = serde_json::from_str(snapshot_json()).unwrap();
    snapshot.config.salary_cap = 66000;
    let mut app = LineupApp::new(snapshot).unwrap();

    // All weight on the value grade: Diaz (80) now outscores Skenes (75).
    app.set_weight(1.0);
    let recs = app.shortlist();
    let p_slot = recs.iter().find(|r| r.slot_label == "P").unwrap();
    assert_eq!(p_slot.display_name(), "Edwin Diaz");

    app.set_weight(0.0);
    let recs = app.shortlist();
    let p_slot = recs.iter().find(|r| r.slot_label == "P").unwrap();
    assert_eq!(p_slot.display_name(), "Paul Skenes");
}

#[test]
fn selectability_mirrors_lineup_state() {
    let mut app = app();
    let catalog: Vec<PlayerRecord> = app.catalog().to_vec();
    for player in &catalog {
        assert!(app.can_assign(player), "{} should start selectable", player.name);
    }

    app.assign("Paul Skenes");
    app.assign("Edwin Diaz");
    let skenes = catalog.iter().find(|p| p.name == "Paul Skenes").unwrap();
    let waiver = catalog.iter().find(|p| p.name == "Waiver Arm").unwrap();
    assert!(!app.can_assign(skenes), "occupied player is not selectable");
    assert!(!app.can_assign(waiver), "no open slot accepts an RP now");
}
