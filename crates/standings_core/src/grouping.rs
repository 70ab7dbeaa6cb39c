//! Partitioning team records into divisions

use std::collections::HashMap;

use serde::Serialize;

use crate::record::TeamRecord;

/// A named, ordered collection of teams.
///
/// Teams are in input order until ranked, then in rank order (index 0 is the
/// division leader). A division always holds at least one team.
#[derive(Debug, Clone, PartialEq)]
pub struct Division<'a> {
    pub name: String,
    pub teams: Vec<&'a TeamRecord>,
}

impl<'a> Division<'a> {
    /// The team at `rank` (0 = best), if the division is that deep
    pub fn at_rank(&self, rank: usize) -> Option<&'a TeamRecord> {
        self.teams.get(rank).copied()
    }
}

/// Divisions keyed by name, iterated in the order each was first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Standings<'a> {
    divisions: Vec<Division<'a>>,
    index: HashMap<String, usize>,
}

impl<'a> Standings<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a team to its division, creating the division on first sight
    pub fn insert(&mut self, team: &'a TeamRecord) {
        match self.index.get(&team.division) {
            Some(&idx) => self.divisions[idx].teams.push(team),
            None => {
                self.index.insert(team.division.clone(), self.divisions.len());
                self.divisions.push(Division {
                    name: team.division.clone(),
                    teams: vec![team],
                });
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Division<'a>> {
        self.index.get(name).map(|&idx| &self.divisions[idx])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Division<'a>> {
        self.divisions.iter()
    }

    pub fn len(&self) -> usize {
        self.divisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.divisions.is_empty()
    }

    /// Total number of teams across all divisions
    pub fn team_count(&self) -> usize {
        self.divisions.iter().map(|d| d.teams.len()).sum()
    }

    /// Rebuild the standings with each division's teams replaced by `f`.
    ///
    /// `f` must return a reordering of the same teams; division order and
    /// names are kept.
    pub fn map_teams<F>(&self, mut f: F) -> Standings<'a>
    where
        F: FnMut(&[&'a TeamRecord]) -> Vec<&'a TeamRecord>,
    {
        Standings {
            divisions: self
                .divisions
                .iter()
                .map(|d| Division {
                    name: d.name.clone(),
                    teams: f(&d.teams),
                })
                .collect(),
            index: self.index.clone(),
        }
    }
}

impl<'s, 'a> IntoIterator for &'s Standings<'a> {
    type Item = &'s Division<'a>;
    type IntoIter = std::slice::Iter<'s, Division<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Serializes as `{ "<division>": [team, ...], ... }` in division order.
impl Serialize for Standings<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.divisions.len()))?;
        for division in &self.divisions {
            let teams: Vec<_> = division.teams.iter().map(|t| t.summary()).collect();
            map.serialize_entry(&division.name, &teams)?;
        }
        map.end()
    }
}

/// Partition `records` by division in a single pass.
///
/// No reordering and no deduplication: a team listed twice appears twice.
pub fn group(records: &[TeamRecord]) -> Standings<'_> {
    let mut standings = Standings::new();
    for record in records {
        standings.insert(record);
    }
    standings
}

#[cfg(test)]
#[path = "grouping_tests.rs"]
mod grouping_tests;
