//! Tournament module for single and double elimination rosters.
//!
//! This module provides:
//! - Tournament options and their resolution against defaults
//! - An ordered competitor roster with append and lookup
//! - Random seed assignment over the roster
//! - A plain-text roster listing
//!
//! ## Example
//!
//! ```
//! use tourney_gen::tournament::{TourneyGenerator, TourneyOptions};
//!
//! let mut generator = TourneyGenerator::new(TourneyOptions::new("Chess")).unwrap();
//! generator
//!     .add_competitor("a")
//!     .add_competitor("b")
//!     .add_competitor("c")
//!     .generate_random_seeds();
//!
//! let b = generator.get_competitor_by_id("b").unwrap();
//! assert!(b.seed.is_some_and(|seed| seed < 3));
//! ```

pub mod errors;
pub mod generator;
pub mod models;

pub use errors::{TourneyError, TourneyResult};
pub use generator::TourneyGenerator;
pub use models::{Competitor, SignupType, TournamentConfig, TournamentType, TourneyOptions};
