//! Tie-break ranking within a division
//!
//! Teams are ordered by a lexicographic cascade over three ratios, highest
//! first:
//! 1. overall win ratio
//! 2. conference win ratio
//! 3. division win ratio
//!
//! Teams tied on all three keep their input order.

use std::cmp::Ordering;

use tracing::debug;

use crate::grouping::Standings;
use crate::record::TeamRecord;

pub type RatioKey = fn(&TeamRecord) -> f64;

/// Tie-break keys in priority order
pub const TIE_BREAKERS: [RatioKey; 3] = [
    TeamRecord::win_ratio,
    TeamRecord::conference_win_ratio,
    TeamRecord::division_win_ratio,
];

/// Compare two teams on the tie-break cascade.
///
/// `Greater` means `a` ranks ahead of `b`. `Equal` only when all three keys
/// tie.
pub fn compare(a: &TeamRecord, b: &TeamRecord) -> Ordering {
    TIE_BREAKERS
        .iter()
        .map(|key| key(a).total_cmp(&key(b)))
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Whether `a` ranks strictly ahead of `b`
pub fn is_better(a: &TeamRecord, b: &TeamRecord) -> bool {
    compare(a, b) == Ordering::Greater
}

/// Order teams best to worst, keeping input order among full ties.
pub fn rank<'a>(teams: &[&'a TeamRecord]) -> Vec<&'a TeamRecord> {
    let mut ranked = teams.to_vec();
    // sort_by is stable
    ranked.sort_by(|a, b| compare(b, a));
    ranked
}

/// Rank every division independently.
pub fn rank_standings<'a>(standings: &Standings<'a>) -> Standings<'a> {
    standings.map_teams(|teams| {
        let ranked = rank(teams);
        if let Some(leader) = ranked.first() {
            debug!(
                division = %leader.division,
                leader = %leader.name,
                teams = ranked.len(),
                "ranked division"
            );
        }
        ranked
    })
}

#[cfg(test)]
#[path = "ranker_tests.rs"]
mod ranker_tests;
