//! # Tourney Gen
//!
//! Tournament configuration and competitor roster for single and double
//! elimination events.
//!
//! The library holds tournament metadata (game, type, dates, description),
//! keeps an ordered list of competitors, and assigns each competitor a seed
//! drawn from a uniform random permutation of `0..N`. Bracket construction and
//! match progression are left to callers.
//!
//! ## Core Modules
//!
//! - [`tournament`]: Options, resolved configuration, and the roster holder
//! - [`seeding`]: Uniform shuffling used for seed assignment
//!
//! ## Example
//!
//! ```
//! use tourney_gen::{TourneyGenerator, TourneyOptions};
//!
//! let mut generator = TourneyGenerator::new(TourneyOptions::new("Chess")).unwrap();
//! generator.add_competitor("a").add_competitor("b");
//!
//! let mut out = Vec::new();
//! generator.display_competitors(&mut out).unwrap();
//! assert_eq!(out, b"Competitor #0 - a\nCompetitor #1 - b\n");
//! ```

/// Random permutations for seed assignment.
pub mod seeding;
pub use seeding::SeedRandomizer;

/// Tournament options, configuration, and roster.
pub mod tournament;
pub use tournament::{
    Competitor, SignupType, TournamentConfig, TournamentType, TourneyError, TourneyGenerator,
    TourneyOptions, TourneyResult,
};
