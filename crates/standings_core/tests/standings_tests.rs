//! End-to-end tests for the standings pipeline
//!
//! Covers:
//! - Tie-break scenarios through the parser
//! - Ordering properties over shuffled inputs
//! - Bracket seeding from a full table
//! - Malformed input

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use standings_core::{
    build_bracket, group, is_better, parse_records, rank, rank_standings, StandingsError,
    TeamRecord, TIE_BREAKERS,
};

const HEADER: &str = "Team,Division,W,L,Conf W,Conf L,Div W,Div L\n";

fn load(body: &str) -> Vec<TeamRecord> {
    parse_records(format!("{HEADER}{body}").as_bytes()).expect("valid standings")
}

fn names(teams: &[&TeamRecord]) -> Vec<String> {
    teams.iter().map(|t| t.name.clone()).collect()
}

fn all_keys_tied(a: &TeamRecord, b: &TeamRecord) -> bool {
    TIE_BREAKERS.iter().all(|key| key(a) == key(b))
}

// =============================================================================
// Tie-break scenarios
// =============================================================================

#[test]
fn test_overall_ratio_orders_division() {
    let records = load("Beta,East,8,4,5,2,3,1\nAlpha,East,10,2,6,1,4,0\n");
    let ranked = rank_standings(&group(&records));

    let east = ranked.get("East").unwrap();
    assert_eq!(names(&east.teams), vec!["Alpha", "Beta"]);
}

#[test]
fn test_conference_ratio_breaks_tie() {
    let records = load("Half,East,6,4,5,5,4,0\nSeventy,East,6,4,7,3,0,4\n");
    let ranked = rank_standings(&group(&records));

    let east = ranked.get("East").unwrap();
    assert_eq!(names(&east.teams), vec!["Seventy", "Half"]);
}

#[test]
fn test_full_tie_preserves_input_order() {
    let records = load("Second,East,6,4,7,3,2,2\nFirst,East,6,4,7,3,2,2\n");
    let ranked = rank_standings(&group(&records));

    let east = ranked.get("East").unwrap();
    assert_eq!(names(&east.teams), vec!["Second", "First"]);
}

#[test]
fn test_idle_team_sorts_last() {
    let records = load("Idle,East,0,0,0,0,0,0\nWinless,East,0,3,0,2,0,1\nOk,East,1,2,1,1,0,1\n");
    let ranked = rank_standings(&group(&records));

    let east = ranked.get("East").unwrap();
    assert_eq!(names(&east.teams), vec!["Ok", "Winless", "Idle"]);
}

// =============================================================================
// Ordering properties
// =============================================================================

/// Small counts so that ties on every key are common
fn random_team(rng: &mut StdRng, idx: usize) -> TeamRecord {
    TeamRecord {
        name: format!("T{idx:02}"),
        division: "Any".to_string(),
        wins: rng.gen_range(0..4),
        losses: rng.gen_range(0..4),
        conference_wins: rng.gen_range(0..3),
        conference_losses: rng.gen_range(0..3),
        division_wins: rng.gen_range(0..2),
        division_losses: rng.gen_range(0..2),
    }
}

#[test]
fn test_rank_properties_on_random_divisions() {
    let mut rng = StdRng::seed_from_u64(0x5EED);

    for round in 0..200 {
        let size = rng.gen_range(0..30);
        let mut teams: Vec<_> = (0..size).map(|i| random_team(&mut rng, i)).collect();
        teams.shuffle(&mut rng);
        let input: Vec<_> = teams.iter().collect();
        let position = |t: &TeamRecord| input.iter().position(|x| std::ptr::eq(*x, t)).unwrap();

        let ranked = rank(&input);

        // Permutation of the input
        let mut before = names(&input);
        let mut after = names(&ranked);
        before.sort();
        after.sort();
        assert_eq!(before, after, "round {round}");

        // Consistent with the comparator, stable among full ties
        for (i, a) in ranked.iter().enumerate() {
            for b in &ranked[i + 1..] {
                assert!(!is_better(b, a), "round {round}: {} before {}", a.name, b.name);
                if all_keys_tied(a, b) {
                    assert!(position(*a) < position(*b), "round {round}: unstable tie");
                } else {
                    assert!(is_better(a, b), "round {round}");
                }
            }
        }

        assert_eq!(rank(&ranked), ranked, "round {round}: not idempotent");
    }
}

#[test]
fn test_pipeline_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(7);
    let records: Vec<_> = (0..40)
        .map(|i| {
            let mut team = random_team(&mut rng, i);
            team.division = ["A", "B", "C", "D", "E"][i % 5].to_string();
            team
        })
        .collect();

    let first = rank_standings(&group(&records));
    let second = rank_standings(&group(&records));
    assert_eq!(first, second);
    assert_eq!(build_bracket(&first, 2), build_bracket(&second, 2));
}

// =============================================================================
// Bracket seeding
// =============================================================================

#[test]
fn test_bracket_from_full_table() {
    let records = load(
        "\
Celtics,Atlantic,64,18,41,11,12,4
Knicks,Atlantic,50,32,35,17,9,7
Bucks,Central,49,33,33,19,9,7
Cavaliers,Central,48,34,33,19,10,6
Magic,Southeast,47,35,33,19,12,4
Heat,Southeast,46,36,31,21,11,5
Thunder,Northwest,57,25,36,16,12,4
Nuggets,Northwest,57,25,33,19,10,6
",
    );
    let ranked = rank_standings(&group(&records));
    let bracket = build_bracket(&ranked, 2);

    // Pool: Celtics .780, Thunder .695, Nuggets .695 (worse conference), Knicks .610,
    // Bucks .598, Magic .573
    let seeds: Vec<_> = bracket.qualifiers.iter().map(|q| q.team.name.as_str()).collect();
    assert_eq!(
        seeds,
        vec!["Celtics", "Thunder", "Nuggets", "Knicks", "Bucks", "Magic"]
    );

    let lines: Vec<_> = bracket.matchups.iter().map(|m| m.to_string()).collect();
    assert_eq!(
        lines,
        vec!["Celtics vs Magic", "Thunder vs Bucks", "Nuggets vs Knicks"]
    );
    assert_eq!(bracket.matchups.len(), ranked.len() / 2 + 1);
}

// =============================================================================
// Malformed input
// =============================================================================

#[test]
fn test_seven_field_line_fails_fast() {
    let input = format!("{HEADER}Alpha,East,10,2,6,1,4,0\nBeta,East,8,4,5,2,3\nGamma,East,1,1,1,1,1,1\n");
    let err = parse_records(input.as_bytes()).unwrap_err();

    match err {
        StandingsError::MalformedInput { line, reason } => {
            assert_eq!(line, 3);
            assert!(reason.contains("expected 8 fields, found 7"), "{reason}");
        }
        other => panic!("expected MalformedInput, got {:?}", other),
    }
}
