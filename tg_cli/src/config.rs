//! CLI configuration management.
//!
//! Merges the options file, environment variables, and command-line flags into
//! one set of tournament options. Flags win over the environment, which wins
//! over the file.

use log::info;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tourney_gen::{
    SeedRandomizer, TournamentConfig, TournamentType, TourneyError, TourneyGenerator,
    TourneyOptions,
};

/// Values taken from the command line
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub options_path: Option<PathBuf>,
    pub game_name: Option<String>,
    pub tourney_name: Option<String>,
    pub tourney_type: Option<TournamentType>,
    pub competitors: Vec<String>,
    pub rng_seed: Option<u64>,
    pub no_seed: bool,
}

/// Resolved CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Tournament options handed to the generator
    pub options: TourneyOptions,
    /// Competitor ids appended after any listed in the options file
    pub competitors: Vec<String>,
    /// Fixed RNG seed for reproducible seeding
    pub rng_seed: Option<u64>,
    /// Skip seed generation entirely
    pub skip_seeding: bool,
}

impl CliConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns error if the options file cannot be read or a value is invalid
    pub fn from_env(args: CliArgs) -> Result<Self, ConfigError> {
        Self::resolve(args, |key| std::env::var(key).ok())
    }

    /// Resolve configuration against an arbitrary variable lookup
    pub fn resolve<F>(args: CliArgs, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let options_path = args
            .options_path
            .or_else(|| env("TG_OPTIONS_FILE").map(PathBuf::from));

        let mut options = match options_path {
            Some(path) => load_options(&path)?,
            None => TourneyOptions::default(),
        };

        if let Some(game_name) = args.game_name.or_else(|| env("TG_GAME_NAME")) {
            options.game_name = Some(game_name);
        }

        if let Some(tourney_name) = args.tourney_name.or_else(|| env("TG_TOURNEY_NAME")) {
            options.tourney_name = Some(tourney_name);
        }

        let tourney_type = match args.tourney_type {
            Some(tourney_type) => Some(tourney_type),
            None => parse_env(&env, "TG_TOURNEY_TYPE")?,
        };
        if tourney_type.is_some() {
            options.tourney_type = tourney_type;
        }

        let rng_seed = match args.rng_seed {
            Some(seed) => Some(seed),
            None => parse_env(&env, "TG_RNG_SEED")?,
        };

        Ok(Self {
            options,
            competitors: args.competitors,
            rng_seed,
            skip_seeding: args.no_seed,
        })
    }

    /// Whether the roster should receive fresh random seeds
    ///
    /// `--no-seed` always wins; otherwise the tournament's `randomize_seeds` flag decides.
    pub fn should_seed(&self, tournament: &TournamentConfig) -> bool {
        !self.skip_seeding && tournament.randomize_seeds
    }

    /// Seed the roster when enabled, returning whether seeds were drawn
    pub fn apply_seeding(&self, generator: &mut TourneyGenerator) -> bool {
        if !self.should_seed(generator.config()) {
            info!("Seed randomization disabled, keeping existing seeds");
            return false;
        }

        match self.rng_seed {
            Some(seed) => {
                info!("Seeding with fixed RNG seed {seed}");
                generator.generate_random_seeds_with(&mut SeedRandomizer::from_seed(seed));
            }
            None => {
                generator.generate_random_seeds();
            }
        }
        true
    }
}

/// Read tournament options from a JSON file
pub fn load_options(path: &Path) -> Result<TourneyOptions, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(TourneyOptions::from_json(&json)?)
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read options file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },

    #[error("Invalid tournament options: {0}")]
    Options(#[from] TourneyError),
}

/// Helper to parse an optional variable, rejecting values that do not parse
fn parse_env<T, F>(env: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    env(key)
        .map(|value| {
            value.parse().map_err(|e: T::Err| ConfigError::Invalid {
                var: key.to_string(),
                reason: e.to_string(),
            })
        })
        .transpose()
}
