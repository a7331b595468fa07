//! Roster Demo
//!
//! Builds a small chess tournament, seeds it, and prints the roster.

use tourney_gen::{Competitor, TournamentType, TourneyGenerator, TourneyOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Tournament Roster Example ===\n");

    // Example 1: Defaults
    println!("Example 1: Creating a tournament with defaults");
    let mut generator = TourneyGenerator::new(TourneyOptions::new("Chess"))?;
    let config = generator.config();
    println!("Game: {}", config.game_name);
    println!("Type: {}", config.tourney_type);
    println!("Signup: {}\n", config.signup_type);

    // Example 2: Signup and seeding
    println!("Example 2: Adding competitors and seeding");
    generator
        .add_competitor("a")
        .add_competitor("b")
        .add_competitor(Competitor::new("c"))
        .generate_random_seeds();
    generator.print_competitors()?;

    if let Some(b) = generator.get_competitor_by_id("b") {
        println!("\nCompetitor b drew seed {:?}\n", b.seed);
    }

    // Example 3: Missing game name
    println!("Example 3: Rejecting options without a game name");
    match TourneyGenerator::new(TourneyOptions::default()) {
        Ok(_) => println!("Unexpectedly created a tournament"),
        Err(e) => println!("Error: {e}\n"),
    }

    // Example 4: Options from JSON
    println!("Example 4: Loading options from JSON");
    let generator = TourneyGenerator::from_json(
        r#"{"gameName": "Smash", "tourneyType": 1, "thirdPlaceMatch": true}"#,
    )?;
    assert_eq!(
        generator.config().tourney_type,
        TournamentType::DoubleElimination
    );
    println!(
        "{} ({}), third place match: {}",
        generator.game_name(),
        generator.config().tourney_type,
        generator.config().third_place_match
    );

    Ok(())
}
