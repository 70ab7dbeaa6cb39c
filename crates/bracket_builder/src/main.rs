//! Bracket builder CLI
//!
//! Rank division standings and seed the opening round.

use anyhow::Result;
use bracket_builder::{run, BracketConfig, Overrides};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "bracket_builder",
    version,
    about = "Rank division standings and build opening-round matchups"
)]
struct Cli {
    /// Standings CSV [default: data.csv]
    input: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of division runners-up admitted as wildcards
    #[arg(short, long)]
    wildcards: Option<usize>,

    /// Write one "<team> vs <team>" line per matchup to this file
    #[arg(short, long)]
    matchups: Option<PathBuf>,

    /// Dump ranked divisions as JSON to this file ("-" for stdout)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Only print the division tables
    #[arg(long)]
    no_bracket: bool,

    /// Log more (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            input: self.input.clone(),
            wildcards: self.wildcards,
            matchups: self.matchups.clone(),
            json: self.json.clone(),
            no_bracket: self.no_bracket,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<BracketConfig> {
    let base = match &cli.config {
        Some(path) => BracketConfig::load(path)?,
        None => BracketConfig::default(),
    };
    Ok(base.apply(cli.overrides()))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = load_config(&cli).and_then(|config| {
        let stdout = std::io::stdout();
        run(&config, &mut stdout.lock())
    });

    match result {
        Ok(summary) => {
            info!(
                divisions = summary.divisions,
                teams = summary.teams,
                matchups = summary.matchups,
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
