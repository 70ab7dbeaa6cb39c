//! Division standings for the NBA bracket builder
//!
//! This crate provides:
//! - Parsing a standings table into typed team records
//! - Grouping records by division
//! - Ranking each division with the win / conference / division tie-break
//! - Seeding an opening-round bracket from the ranked divisions
//!
//! Nothing here touches the filesystem or stdout; callers own the I/O.
//!
//! # Usage
//!
//! ```
//! use standings_core::{build_bracket, group, parse_records, rank_standings};
//!
//! let csv = "\
//! Team,Division,W,L,CW,CL,DW,DL
//! Alpha,East,10,2,6,1,4,0
//! Beta,East,8,4,5,2,3,1
//! Gamma,West,9,3,5,2,2,2
//! Delta,West,4,8,2,5,1,3
//! ";
//!
//! let records = parse_records(csv.as_bytes()).unwrap();
//! let ranked = rank_standings(&group(&records));
//! let bracket = build_bracket(&ranked, 2);
//! assert_eq!(bracket.matchups[0].to_string(), "Alpha vs Delta");
//! ```

mod bracket;
mod error;
mod grouping;
mod parse;
mod ranker;
mod record;

pub use bracket::*;
pub use error::*;
pub use grouping::*;
pub use parse::*;
pub use ranker::*;
pub use record::*;
