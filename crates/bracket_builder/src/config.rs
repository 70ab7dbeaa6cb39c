//! Bracket builder configuration

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use standings_core::DEFAULT_WILDCARDS;

/// Default standings file, relative to the working directory
pub const DEFAULT_INPUT: &str = "data.csv";

/// Destination meaning "write to stdout"
pub const STDOUT_PATH: &str = "-";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BracketConfig {
    /// Standings table to read
    pub input: PathBuf,
    /// Number of division runners-up admitted as wildcards
    pub wildcards: usize,
    /// Where to write one matchup per line
    pub matchups: Option<PathBuf>,
    /// Where to write the ranked divisions as JSON (`-` for stdout)
    pub json: Option<PathBuf>,
    /// Print the seeded pool and matchups after the tables
    pub show_bracket: bool,
}

impl Default for BracketConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            wildcards: DEFAULT_WILDCARDS,
            matchups: None,
            json: None,
            show_bracket: true,
        }
    }
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub wildcards: Option<usize>,
    pub matchups: Option<PathBuf>,
    pub json: Option<PathBuf>,
    pub no_bracket: bool,
}

impl BracketConfig {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&contents).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(input) = overrides.input {
            self.input = input;
        }
        if let Some(wildcards) = overrides.wildcards {
            self.wildcards = wildcards;
        }
        if overrides.matchups.is_some() {
            self.matchups = overrides.matchups;
        }
        if overrides.json.is_some() {
            self.json = overrides.json;
        }
        if overrides.no_bracket {
            self.show_bracket = false;
        }
        self
    }

    /// Whether the JSON dump replaces the console tables on stdout
    pub fn json_to_stdout(&self) -> bool {
        self.json
            .as_deref()
            .is_some_and(|p| p == Path::new(STDOUT_PATH))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
