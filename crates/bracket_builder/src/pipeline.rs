//! Input → ranked tables → bracket

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, Write};
use tracing::info;

use standings_core::{build_bracket, group, parse_records, rank_standings};

use crate::config::BracketConfig;
use crate::report::{render_bracket, render_standings, standings_json, write_matchups};

/// Counts from a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub divisions: usize,
    pub teams: usize,
    pub matchups: usize,
}

/// Run the whole pipeline, writing console output to `out`.
///
/// The input is parsed completely before anything is written, so a malformed
/// table produces no output.
pub fn run<W: Write>(config: &BracketConfig, out: &mut W) -> Result<RunSummary> {
    let file = File::open(&config.input)
        .with_context(|| format!("failed to open standings {}", config.input.display()))?;
    let records = parse_records(BufReader::new(file))
        .with_context(|| format!("invalid standings in {}", config.input.display()))?;
    info!(teams = records.len(), input = %config.input.display(), "loaded standings");

    let ranked = rank_standings(&group(&records));
    let bracket = build_bracket(&ranked, config.wildcards);
    info!(
        divisions = ranked.len(),
        qualifiers = bracket.qualifiers.len(),
        matchups = bracket.matchups.len(),
        "built bracket"
    );

    if config.json_to_stdout() {
        writeln!(out, "{}", standings_json(&ranked)?)?;
    } else {
        write!(out, "{}", render_standings(&ranked))?;
        if config.show_bracket {
            write!(out, "{}", render_bracket(&bracket))?;
        }
        if let Some(path) = &config.json {
            std::fs::write(path, standings_json(&ranked)?)
                .with_context(|| format!("failed to write JSON to {}", path.display()))?;
            info!(path = %path.display(), "wrote standings JSON");
        }
    }

    if let Some(path) = &config.matchups {
        write_matchups(path, &bracket.matchups)?;
        info!(path = %path.display(), "wrote matchups");
    }

    Ok(RunSummary {
        divisions: ranked.len(),
        teams: ranked.team_count(),
        matchups: bracket.matchups.len(),
    })
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod pipeline_tests;
