//! Console tables, JSON dump and matchup file

use anyhow::{Context, Result};
use std::path::Path;

use standings_core::{Bracket, Division, Matchup, Standings};

const HEADERS: [&str; 5] = ["Team Name", "W-L", "Win %", "Conf W-L", "Div W-L"];

/// Columns rendered flush right
const NUMERIC: [bool; 5] = [false, false, true, false, false];

/// Win ratio to two decimals, `-` when no games were played
pub fn format_ratio(ratio: f64) -> String {
    if ratio.is_finite() {
        format!("{:.2}", ratio)
    } else {
        "-".to_string()
    }
}

fn division_rows(division: &Division<'_>) -> Vec<[String; 5]> {
    division
        .teams
        .iter()
        .map(|team| {
            [
                team.name.clone(),
                team.record(),
                format_ratio(team.win_ratio()),
                team.conference_record(),
                team.division_record(),
            ]
        })
        .collect()
}

fn rule(widths: &[usize; 5], left: char, mid: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            line.push(mid);
        }
        line.push_str(&"─".repeat(width + 2));
    }
    line.push(right);
    line.push('\n');
    line
}

fn row(cells: &[String; 5], widths: &[usize; 5]) -> String {
    let mut line = String::from("│");
    for ((cell, &width), &numeric) in cells.iter().zip(widths).zip(&NUMERIC) {
        let pad = width - cell.chars().count();
        if numeric {
            line.push_str(&format!(" {}{} │", " ".repeat(pad), cell));
        } else {
            line.push_str(&format!(" {}{} │", cell, " ".repeat(pad)));
        }
    }
    line.push('\n');
    line
}

/// One division as a rounded-border grid, headed by its name
pub fn render_division(division: &Division<'_>) -> String {
    let header = HEADERS.map(String::from);
    let rows = division_rows(division);

    let mut widths = HEADERS.map(|h| h.chars().count());
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = format!("{}\n", division.name);
    out.push_str(&rule(&widths, '╭', '┬', '╮'));
    out.push_str(&row(&header, &widths));
    out.push_str(&rule(&widths, '├', '┼', '┤'));
    for (i, cells) in rows.iter().enumerate() {
        if i > 0 {
            out.push_str(&rule(&widths, '├', '┼', '┤'));
        }
        out.push_str(&row(cells, &widths));
    }
    out.push_str(&rule(&widths, '╰', '┴', '╯'));
    out
}

/// Every division table, separated by blank lines
pub fn render_standings(standings: &Standings<'_>) -> String {
    let mut out = String::new();
    for division in standings {
        out.push_str(&render_division(division));
        out.push('\n');
    }
    out
}

/// Seeded pool and matchups as a text report
pub fn render_bracket(bracket: &Bracket<'_>) -> String {
    let mut report = String::new();
    report.push_str("=== Bracket ===\n\n");

    report.push_str(&format!(
        "{:>4}  {:<24} {:>7}  {}\n",
        "Seed", "Team", "Win %", "Qualified as"
    ));
    report.push_str(&"-".repeat(56));
    report.push('\n');
    for (seed, qualifier) in bracket.qualifiers.iter().enumerate() {
        report.push_str(&format!(
            "{:>4}  {:<24} {:>7}  {}\n",
            seed + 1,
            qualifier.team.name,
            format_ratio(qualifier.team.win_ratio()),
            qualifier.qualification
        ));
    }

    report.push_str("\nMatchups:\n");
    if bracket.matchups.is_empty() {
        report.push_str("  (none)\n");
    }
    for matchup in &bracket.matchups {
        report.push_str(&format!("  {}\n", matchup));
    }
    if let Some(team) = bracket.unpaired() {
        report.push_str(&format!("  {} has no opponent\n", team.name));
    }

    report
}

/// Ranked divisions as pretty-printed JSON
pub fn standings_json(standings: &Standings<'_>) -> Result<String> {
    serde_json::to_string_pretty(standings).context("failed to serialize standings")
}

/// One `"<team1> vs <team2>"` line per matchup
pub fn matchup_lines(matchups: &[Matchup]) -> String {
    matchups.iter().map(|m| format!("{}\n", m)).collect()
}

pub fn write_matchups(path: &Path, matchups: &[Matchup]) -> Result<()> {
    std::fs::write(path, matchup_lines(matchups))
        .with_context(|| format!("failed to write matchups to {}", path.display()))
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
