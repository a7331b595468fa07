//! Command-line front end for the tournament roster.
//!
//! Builds a roster from an options file, environment variables, and flags,
//! assigns random seeds, and prints the listing.

mod config;

use anyhow::{Context, Result};
use log::{info, warn};
use pico_args::Arguments;
use tourney_gen::TourneyGenerator;

use crate::config::{CliArgs, CliConfig};

const HELP: &str = "\
Build, seed, and print a tournament roster

USAGE:
  tg_cli [OPTIONS]

OPTIONS:
  --options      FILE        JSON tournament options  [default: env TG_OPTIONS_FILE]
  --game         NAME        Game being played  [default: env TG_GAME_NAME]
  --name         NAME        Tournament name  [default: env TG_TOURNEY_NAME]
  --type         TYPE        single or double  [default: env TG_TOURNEY_TYPE or single]
  --competitor   ID          Add a competitor (repeatable)
  --rng-seed     N           Seed the shuffle for reproducible draws  [default: env TG_RNG_SEED]

FLAGS:
  --no-seed                  Skip seed generation
  -h, --help                 Print help information

ENVIRONMENT:
  RUST_LOG                   Log level (e.g., debug)
  (A .env file in the working directory is loaded if present)
";

fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = CliArgs {
        options_path: pargs.opt_value_from_str("--options")?,
        game_name: pargs.opt_value_from_str("--game")?,
        tourney_name: pargs.opt_value_from_str("--name")?,
        tourney_type: pargs.opt_value_from_str("--type")?,
        competitors: pargs.values_from_str("--competitor")?,
        rng_seed: pargs.opt_value_from_str("--rng-seed")?,
        no_seed: pargs.contains("--no-seed"),
    };
    let remaining = pargs.finish();

    env_logger::builder().format_target(false).init();

    if !remaining.is_empty() {
        warn!("Ignoring unrecognised arguments: {remaining:?}");
    }

    let config = CliConfig::from_env(args).context("Failed to load configuration")?;
    run(config)
}

fn run(config: CliConfig) -> Result<()> {
    let mut generator =
        TourneyGenerator::new(config.options.clone()).context("Failed to create tournament")?;

    for id in &config.competitors {
        generator
            .try_add_competitor(id.as_str())
            .context("Failed to add competitor")?;
    }

    info!(
        "{} ({}) with {} competitor(s)",
        generator.game_name(),
        generator.config().tourney_type,
        generator.len()
    );

    config.apply_seeding(&mut generator);

    generator
        .print_competitors()
        .context("Failed to write roster")?;

    Ok(())
}
