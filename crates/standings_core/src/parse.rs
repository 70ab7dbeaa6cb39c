//! Standings table parsing
//!
//! The table is comma-separated with one header line, followed by rows of
//! exactly eight fields:
//!
//! ```text
//! team, division, wins, losses, conf wins, conf losses, div wins, div losses
//! ```
//!
//! The first bad row aborts the whole parse; callers never see a partial
//! table.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::{Result, StandingsError};
use crate::record::TeamRecord;

/// Number of fields in every data row
pub const FIELD_COUNT: usize = 8;

const COUNT_FIELDS: [&str; 6] = [
    "wins",
    "losses",
    "conference wins",
    "conference losses",
    "division wins",
    "division losses",
];

/// Parse a full standings table, discarding its header line.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<TeamRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in reader.byte_records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        // Whitespace-only line, trimmed down to a single empty field
        if row.len() == 1 && row[0].is_empty() {
            continue;
        }
        let row = StringRecord::from_byte_record(row)
            .map_err(|_| StandingsError::malformed(line, "field is not valid UTF-8"))?;
        records.push(parse_row(&row, line)?);
    }

    debug!(teams = records.len(), "parsed standings");
    Ok(records)
}

fn parse_row(row: &StringRecord, line: u64) -> Result<TeamRecord> {
    if row.len() != FIELD_COUNT {
        return Err(StandingsError::malformed(
            line,
            format!("expected {} fields, found {}", FIELD_COUNT, row.len()),
        ));
    }

    let name = required_text(row, 0, "team name", line)?;
    let division = required_text(row, 1, "division", line)?;

    let mut counts = [0u32; 6];
    for (slot, (value, field)) in counts
        .iter_mut()
        .zip(row.iter().skip(2).zip(COUNT_FIELDS))
    {
        *slot = value.parse().map_err(|_| {
            StandingsError::malformed(
                line,
                format!("{} must be a non-negative integer, found `{}`", field, value),
            )
        })?;
    }
    let [wins, losses, conference_wins, conference_losses, division_wins, division_losses] =
        counts;

    Ok(TeamRecord {
        name,
        division,
        wins,
        losses,
        conference_wins,
        conference_losses,
        division_wins,
        division_losses,
    })
}

fn required_text(row: &StringRecord, idx: usize, field: &str, line: u64) -> Result<String> {
    match row.get(idx) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(StandingsError::malformed(line, format!("{} is empty", field))),
    }
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod parse_tests;
