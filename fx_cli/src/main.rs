//! Round-robin fixture generator CLI.
//!
//! Reads the participant count and options from flags or environment,
//! generates the fixture and writes it as a table, CSV, HTML or JSON.

mod config;
mod output;

use anyhow::{Context, Error};
use fixture::{FixtureGenerator, expected_shape, export::ExportFormat};
use log::{info, warn};
use pico_args::Arguments;
use std::path::PathBuf;

use config::{CliConfig, CliOverrides};
use output::Destination;

const HELP: &str = "\
Generate a round-robin fixture (circle method)

USAGE:
  fx_cli [OPTIONS]

OPTIONS:
  --teams      N           Number of participants      [default: env FIXTURE_TEAMS or 6]
  --names      LIST        Comma-separated names, exactly N of them
  --bye-label  LABEL       Label for resting rows      [default: DESCANSA]
  --format     FORMAT      table | csv | html | json   [default: table]
  --out        PATH        Output file, or directory for the suggested file name

FLAGS:
  --double                 Home and away legs (double round-robin)
  --no-balance             Do not alternate home/away by round parity
  -h, --help               Print help information

ENVIRONMENT:
  FIXTURE_TEAMS, FIXTURE_NAMES, FIXTURE_DOUBLE_ROUND, FIXTURE_BALANCE,
  FIXTURE_BYE_LABEL, FIXTURE_FORMAT, FIXTURE_OUTPUT
  RUST_LOG                 Log level (logs go to stderr)
";

fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let overrides = CliOverrides {
        teams: pargs.opt_value_from_str("--teams")?,
        names: pargs.opt_value_from_str("--names")?,
        double_round: pargs.contains("--double").then_some(true),
        balance_home_away: pargs.contains("--no-balance").then_some(false),
        bye_label: pargs.opt_value_from_str("--bye-label")?,
        format: pargs.opt_value_from_str::<_, ExportFormat>("--format")?,
        output: pargs.opt_value_from_str::<_, PathBuf>("--out")?,
    };

    env_logger::builder()
        .format_target(false)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        warn!("Ignoring unexpected arguments: {:?}", remaining);
    }

    load_config(overrides)
        .and_then(|config| run(&config))
        .inspect_err(|e| log::error!("{e:#}"))
}

fn load_config(overrides: CliOverrides) -> Result<CliConfig, Error> {
    let config = CliConfig::from_env(overrides)?;
    config.validate()?;
    Ok(config)
}

fn run(config: &CliConfig) -> Result<(), Error> {
    let (rounds, tables) = expected_shape(config.teams, config.double_round);
    info!(
        "Generating fixture for {} participants ({} rounds, {} tables per round)",
        config.teams, rounds, tables
    );

    let generator = FixtureGenerator::new(config.fixture_config());
    let fixture = generator
        .generate(config.teams)
        .context("Invalid fixture request")?;

    let bytes = config
        .format
        .render(&fixture)
        .with_context(|| format!("Failed to render {} output", config.format))?;

    let destination = Destination::resolve(config.output.as_deref(), &fixture, config.format);
    destination.write(&bytes)?;

    info!(
        "Wrote {} rows as {} to {}",
        fixture.len(),
        config.format,
        destination
    );
    info!(
        "Total rounds: {} • Matches per round: {}",
        fixture.total_rounds(),
        fixture.tables_per_round()
    );

    Ok(())
}
