//! NBA bracket builder
//!
//! Reads a standings table, prints ranked division tables and seeds an
//! opening-round bracket. Ranking and seeding live in `standings_core`;
//! this crate owns configuration and all file and console output.
//!
//! # Usage
//!
//! ```bash
//! # Rank data.csv and print the tables and bracket
//! cargo run -p bracket_builder
//!
//! # Custom input, write matchups and a JSON dump
//! cargo run -p bracket_builder -- standings.csv --matchups round1.txt --json ranked.json
//! ```

mod config;
mod pipeline;
mod report;

pub use config::*;
pub use pipeline::*;
pub use report::*;
