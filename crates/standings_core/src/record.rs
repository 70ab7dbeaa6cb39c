//! Team records and their derived win ratios

use serde::Serialize;

/// Ratio reported for a category with no games played.
///
/// Sorts below every defined ratio, including 0.0.
pub const NO_GAMES_RATIO: f64 = f64::NEG_INFINITY;

/// One row of the standings table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamRecord {
    pub name: String,
    pub division: String,
    pub wins: u32,
    pub losses: u32,
    pub conference_wins: u32,
    pub conference_losses: u32,
    pub division_wins: u32,
    pub division_losses: u32,
}

impl TeamRecord {
    /// Overall wins / (wins + losses)
    pub fn win_ratio(&self) -> f64 {
        ratio(self.wins, self.losses)
    }

    pub fn conference_win_ratio(&self) -> f64 {
        ratio(self.conference_wins, self.conference_losses)
    }

    pub fn division_win_ratio(&self) -> f64 {
        ratio(self.division_wins, self.division_losses)
    }

    /// Overall record as "W-L"
    pub fn record(&self) -> String {
        format!("{}-{}", self.wins, self.losses)
    }

    pub fn conference_record(&self) -> String {
        format!("{}-{}", self.conference_wins, self.conference_losses)
    }

    pub fn division_record(&self) -> String {
        format!("{}-{}", self.division_wins, self.division_losses)
    }

    /// Snapshot of the record with its ratios, for structured dumps.
    pub fn summary(&self) -> TeamSummary<'_> {
        TeamSummary {
            record: self,
            win_ratio: defined(self.win_ratio()),
            conference_win_ratio: defined(self.conference_win_ratio()),
            division_win_ratio: defined(self.division_win_ratio()),
        }
    }
}

/// A [`TeamRecord`] flattened together with its derived ratios.
///
/// Ratios for categories with no games serialize as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct TeamSummary<'a> {
    #[serde(flatten)]
    pub record: &'a TeamRecord,
    pub win_ratio: Option<f64>,
    pub conference_win_ratio: Option<f64>,
    pub division_win_ratio: Option<f64>,
}

fn ratio(wins: u32, losses: u32) -> f64 {
    let games = u64::from(wins) + u64::from(losses);
    if games == 0 {
        return NO_GAMES_RATIO;
    }
    wins as f64 / games as f64
}

fn defined(ratio: f64) -> Option<f64> {
    ratio.is_finite().then_some(ratio)
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
