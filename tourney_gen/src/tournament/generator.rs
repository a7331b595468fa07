//! Tournament roster holder: configuration plus an ordered competitor list.

use super::errors::{TourneyError, TourneyResult};
use super::models::{Competitor, TournamentConfig, TourneyOptions};
use crate::seeding::SeedRandomizer;
use log::{debug, error};
use rand::Rng;
use std::io::{self, Write};

/// Tournament generator
///
/// Owns the resolved [`TournamentConfig`], including its roster. Order of the
/// roster is significant: it drives both seed assignment and display numbering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourneyGenerator {
    config: TournamentConfig,
}

impl TourneyGenerator {
    /// Create a new generator from the supplied options
    ///
    /// # Errors
    ///
    /// Returns [`TourneyError::MissingGameName`] if no usable game name was supplied.
    /// Nothing is constructed in that case.
    pub fn new(options: TourneyOptions) -> TourneyResult<Self> {
        if !Self::validate_options(Some(&options)) {
            error!("You must provide at least a game name as a parameter to the constructor.");
            return Err(TourneyError::MissingGameName);
        }

        let config = TournamentConfig::from_options(options).inspect_err(|e| error!("{e}"))?;
        debug!(
            "Created {} tournament for {} with {} competitor(s)",
            config.tourney_type,
            config.game_name,
            config.competitors.len()
        );

        Ok(Self { config })
    }

    /// Create a new generator from a JSON options document
    pub fn from_json(json: &str) -> TourneyResult<Self> {
        Self::new(TourneyOptions::from_json(json)?)
    }

    /// Check options for the required parameters
    ///
    /// Returns `false` when the options are absent or carry no usable game name.
    pub fn validate_options(options: Option<&TourneyOptions>) -> bool {
        options.is_some_and(TourneyOptions::has_game_name)
    }

    /// Add a competitor to the end of the roster
    ///
    /// A competitor with a blank id is logged and dropped; the roster is left unchanged.
    pub fn add_competitor(&mut self, competitor: impl Into<Competitor>) -> &mut Self {
        if let Err(e) = self.try_add_competitor(competitor) {
            error!("{e}");
        }
        self
    }

    /// Add a competitor to the end of the roster, reporting rejection to the caller
    ///
    /// # Errors
    ///
    /// Returns [`TourneyError::InvalidCompetitor`] if the competitor id is blank
    pub fn try_add_competitor(
        &mut self,
        competitor: impl Into<Competitor>,
    ) -> TourneyResult<&mut Self> {
        let competitor = competitor.into();
        competitor.validate()?;

        debug!("Adding competitor {}", competitor.id);
        self.config.competitors.push(competitor);
        Ok(self)
    }

    /// Assign a fresh random permutation of `0..N` as seeds, in roster order
    pub fn generate_random_seeds(&mut self) -> &mut Self {
        self.generate_random_seeds_with(&mut SeedRandomizer::new())
    }

    /// Assign random seeds drawn from the given randomizer
    pub fn generate_random_seeds_with<R: Rng>(
        &mut self,
        randomizer: &mut SeedRandomizer<R>,
    ) -> &mut Self {
        let shuffled_seeds = randomizer.shuffle(self.seed_range());

        for (competitor, seed) in self.config.competitors.iter_mut().zip(shuffled_seeds) {
            competitor.seed = Some(seed);
        }

        debug!(
            "Assigned random seeds to {} competitor(s)",
            self.config.competitors.len()
        );
        self
    }

    /// Write one line per competitor to `out`
    ///
    /// Format: `Competitor #{index} - {id}`, followed by ` - Seed = {seed}` once seeded.
    pub fn display_competitors<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        for (index, competitor) in self.config.competitors.iter().enumerate() {
            write!(out, "Competitor #{index} - {}", competitor.id)?;
            if let Some(seed) = competitor.seed {
                write!(out, " - Seed = {seed}")?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// Write the roster listing to standard output
    pub fn print_competitors(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.display_competitors(&mut handle)?;
        handle.flush()
    }

    /// Seed numbers available for the current roster, `[0, 1, ..., N-1]`
    pub fn seed_range(&self) -> Vec<usize> {
        (0..self.config.competitors.len()).collect()
    }

    /// Get a competitor by roster position
    pub fn get_competitor(&self, index: usize) -> Option<&Competitor> {
        self.config.competitors.get(index)
    }

    /// Get the first competitor with the given id
    pub fn get_competitor_by_id(&self, id: &str) -> Option<&Competitor> {
        self.config.competitors.iter().find(|c| c.id == id)
    }

    /// Resolved configuration, roster included
    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    /// Name of the game being played
    pub fn game_name(&self) -> &str {
        &self.config.game_name
    }

    /// Roster in signup order
    pub fn competitors(&self) -> &[Competitor] {
        &self.config.competitors
    }

    /// Number of competitors on the roster
    pub fn len(&self) -> usize {
        self.config.competitors.len()
    }

    /// Whether the roster is empty
    pub fn is_empty(&self) -> bool {
        self.config.competitors.is_empty()
    }

    /// Consume the generator, returning its configuration
    pub fn into_config(self) -> TournamentConfig {
        self.config
    }
}
