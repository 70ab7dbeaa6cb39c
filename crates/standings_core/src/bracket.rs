//! Opening-round bracket seeding
//!
//! Every division leader qualifies automatically. The runners-up of all
//! divisions are ranked against each other and the best of them fill the
//! wildcard spots. The combined pool is ranked once more and paired from
//! the outside in: best against worst, second-best against second-worst,
//! and so on. An odd pool leaves its median team without a matchup.

use std::fmt;

use tracing::{debug, warn};

use crate::grouping::Standings;
use crate::ranker::{compare, rank};
use crate::record::TeamRecord;

/// Wildcard spots in a standard bracket
pub const DEFAULT_WILDCARDS: usize = 2;

/// How a team earned its place in the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualification {
    /// Division leader
    Automatic,
    /// Best of the division runners-up
    Wildcard,
}

impl fmt::Display for Qualification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Qualification::Automatic => write!(f, "division winner"),
            Qualification::Wildcard => write!(f, "wildcard"),
        }
    }
}

/// A team in the bracket pool
#[derive(Debug, Clone, PartialEq)]
pub struct Qualifier<'a> {
    pub team: &'a TeamRecord,
    pub qualification: Qualification,
}

/// Two teams slated to meet. Neither side is the favourite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matchup {
    pub team1: String,
    pub team2: String,
}

impl fmt::Display for Matchup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.team1, self.team2)
    }
}

/// Seeded pool and the resulting opening round
#[derive(Debug, Clone, PartialEq)]
pub struct Bracket<'a> {
    /// Pool in seed order (index 0 = top seed)
    pub qualifiers: Vec<Qualifier<'a>>,
    pub matchups: Vec<Matchup>,
}

impl Bracket<'_> {
    /// The pool member left out of the pairing, if the pool is odd
    pub fn unpaired(&self) -> Option<&TeamRecord> {
        if self.qualifiers.len() % 2 == 1 {
            Some(self.qualifiers[self.qualifiers.len() / 2].team)
        } else {
            None
        }
    }
}

/// Build the bracket from divisions that are already ranked.
///
/// Divisions with a single team offer no runner-up, so the pool can hold
/// fewer than `divisions + wildcards` teams.
pub fn build_bracket<'a>(ranked: &Standings<'a>, wildcards: usize) -> Bracket<'a> {
    let leaders: Vec<_> = ranked.iter().filter_map(|d| d.at_rank(0)).collect();
    let runners_up: Vec<_> = ranked.iter().filter_map(|d| d.at_rank(1)).collect();

    let wildcard_teams: Vec<_> = rank(&runners_up).into_iter().take(wildcards).collect();
    if wildcard_teams.len() < wildcards {
        warn!(
            requested = wildcards,
            available = wildcard_teams.len(),
            "not enough division runners-up to fill the wildcard spots"
        );
    }

    let mut qualifiers: Vec<_> = leaders
        .iter()
        .map(|&team| Qualifier {
            team,
            qualification: Qualification::Automatic,
        })
        .chain(wildcard_teams.iter().map(|&team| Qualifier {
            team,
            qualification: Qualification::Wildcard,
        }))
        .collect();
    // Same cascade as `rank`; the stable sort keeps leaders ahead of tied wildcards
    qualifiers.sort_by(|a, b| compare(b.team, a.team));

    debug!(
        automatic = leaders.len(),
        wildcards = wildcard_teams.len(),
        "seeded bracket pool"
    );

    let seeded: Vec<_> = qualifiers.iter().map(|q| q.team).collect();
    let matchups = pair_outside_in(&seeded);
    Bracket {
        qualifiers,
        matchups,
    }
}

/// Pair best-remaining with worst-remaining until fewer than two are left.
pub fn pair_outside_in(seeded: &[&TeamRecord]) -> Vec<Matchup> {
    let half = seeded.len() / 2;
    seeded[..half]
        .iter()
        .zip(seeded.iter().rev())
        .map(|(best, worst)| Matchup {
            team1: best.name.clone(),
            team2: worst.name.clone(),
        })
        .collect()
}

#[cfg(test)]
#[path = "bracket_tests.rs"]
mod bracket_tests;
