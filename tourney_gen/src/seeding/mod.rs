//! Seeding module: uniform random permutations for seed assignment.
//!
//! The free [`shuffle`] function is stateless; [`SeedRandomizer`] bundles a
//! generator so callers can inject a reproducible one.
//!
//! ## Example
//!
//! ```
//! use tourney_gen::seeding::SeedRandomizer;
//!
//! let mut randomizer = SeedRandomizer::from_seed(2024);
//! let mut seeds = randomizer.shuffled_range(8);
//! seeds.sort_unstable();
//! assert_eq!(seeds, (0..8).collect::<Vec<_>>());
//! ```

pub mod randomizer;

pub use randomizer::{SeedRandomizer, shuffle};
