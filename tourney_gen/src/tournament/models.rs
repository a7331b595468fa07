//! Tournament data models: options, resolved configuration, competitors.

use super::errors::{TourneyError, TourneyResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Tournament type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TournamentType {
    /// Losers are out after one defeat
    #[default]
    SingleElimination,
    /// Losers drop to a losers bracket
    DoubleElimination,
}

impl TryFrom<u8> for TournamentType {
    type Error = TourneyError;

    fn try_from(code: u8) -> TourneyResult<Self> {
        match code {
            0 => Ok(TournamentType::SingleElimination),
            1 => Ok(TournamentType::DoubleElimination),
            other => Err(TourneyError::InvalidTournamentType(other)),
        }
    }
}

impl From<TournamentType> for u8 {
    fn from(value: TournamentType) -> Self {
        match value {
            TournamentType::SingleElimination => 0,
            TournamentType::DoubleElimination => 1,
        }
    }
}

impl std::fmt::Display for TournamentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentType::SingleElimination => write!(f, "single"),
            TournamentType::DoubleElimination => write!(f, "double"),
        }
    }
}

impl FromStr for TournamentType {
    type Err = TourneyError;

    fn from_str(s: &str) -> TourneyResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "single" | "single-elimination" => Ok(TournamentType::SingleElimination),
            "double" | "double-elimination" => Ok(TournamentType::DoubleElimination),
            other => match other.parse::<u8>() {
                Ok(code) => Self::try_from(code),
                Err(_) => Err(TourneyError::UnknownVariant(s.to_string())),
            },
        }
    }
}

/// Who performs the signup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SignupType {
    /// Competitors sign themselves up
    #[default]
    Competitor,
    /// The tournament creator enters competitors
    Creator,
}

impl TryFrom<u8> for SignupType {
    type Error = TourneyError;

    fn try_from(code: u8) -> TourneyResult<Self> {
        match code {
            0 => Ok(SignupType::Competitor),
            1 => Ok(SignupType::Creator),
            other => Err(TourneyError::InvalidSignupType(other)),
        }
    }
}

impl From<SignupType> for u8 {
    fn from(value: SignupType) -> Self {
        match value {
            SignupType::Competitor => 0,
            SignupType::Creator => 1,
        }
    }
}

impl std::fmt::Display for SignupType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignupType::Competitor => write!(f, "competitor"),
            SignupType::Creator => write!(f, "creator"),
        }
    }
}

impl FromStr for SignupType {
    type Err = TourneyError;

    fn from_str(s: &str) -> TourneyResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "competitor" => Ok(SignupType::Competitor),
            "creator" => Ok(SignupType::Creator),
            other => match other.parse::<u8>() {
                Ok(code) => Self::try_from(code),
                Err(_) => Err(TourneyError::UnknownVariant(s.to_string())),
            },
        }
    }
}

/// Reads an optional integer where any negative value (the `-1` sentinel) means unset.
fn negative_as_none<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<i64>::deserialize(deserializer)?;
    Ok(value.and_then(|v| usize::try_from(v).ok()))
}

/// A tournament entrant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    /// User id of the competitor
    pub id: String,
    /// Seed (rank) of the competitor, `None` until seeds are assigned
    #[serde(
        default,
        deserialize_with = "negative_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub seed: Option<usize>,
}

impl Competitor {
    /// Create an unseeded competitor
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            seed: None,
        }
    }

    /// Create a competitor with a pre-assigned seed
    pub fn with_seed(id: impl Into<String>, seed: usize) -> Self {
        Self {
            id: id.into(),
            seed: Some(seed),
        }
    }

    /// Whether a seed has been assigned
    pub fn is_seeded(&self) -> bool {
        self.seed.is_some()
    }

    /// Check the competitor can enter a roster
    ///
    /// # Errors
    ///
    /// Returns [`TourneyError::InvalidCompetitor`] if the id is blank
    pub fn validate(&self) -> TourneyResult<()> {
        if self.id.trim().is_empty() {
            return Err(TourneyError::InvalidCompetitor(
                "competitor id must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl From<&str> for Competitor {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Competitor {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

/// Options supplied when creating a tournament
///
/// Only `game_name` is required. Every other field falls back to the
/// defaults of [`TournamentConfig::new`] when left unset.
///
/// In JSON the tournament type may be written as `tourneyType` or
/// `tournamentType`, but not both in the same document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TourneyOptions {
    pub game_name: Option<String>,
    #[serde(alias = "tournamentType")]
    pub tourney_type: Option<TournamentType>,
    pub signup_type: Option<SignupType>,
    #[serde(deserialize_with = "negative_as_none")]
    pub competitor_count: Option<usize>,
    pub tourney_name: Option<String>,
    pub tourney_desc: Option<String>,
    pub hosted_date: Option<String>,
    pub signup_date: Option<String>,
    pub third_place_match: Option<bool>,
    pub randomize_seeds: Option<bool>,
    pub competitors: Option<Vec<Competitor>>,
}

impl TourneyOptions {
    /// Options carrying only the game name
    pub fn new(game_name: impl Into<String>) -> Self {
        Self {
            game_name: Some(game_name.into()),
            ..Self::default()
        }
    }

    /// Decode options from a JSON document using the camelCase field names
    pub fn from_json(json: &str) -> TourneyResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether a non-blank game name is present
    pub fn has_game_name(&self) -> bool {
        self.game_name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty())
    }

    /// Set the tournament type
    pub fn with_tourney_type(mut self, tourney_type: TournamentType) -> Self {
        self.tourney_type = Some(tourney_type);
        self
    }

    /// Set who performs the signup
    pub fn with_signup_type(mut self, signup_type: SignupType) -> Self {
        self.signup_type = Some(signup_type);
        self
    }

    /// Set the expected competitor count
    pub fn with_competitor_count(mut self, count: usize) -> Self {
        self.competitor_count = Some(count);
        self
    }

    /// Set the tournament name
    pub fn with_tourney_name(mut self, name: impl Into<String>) -> Self {
        self.tourney_name = Some(name.into());
        self
    }

    /// Set the tournament description
    pub fn with_tourney_desc(mut self, desc: impl Into<String>) -> Self {
        self.tourney_desc = Some(desc.into());
        self
    }

    /// Set the hosted date
    pub fn with_hosted_date(mut self, date: impl Into<String>) -> Self {
        self.hosted_date = Some(date.into());
        self
    }

    /// Set the signup date
    pub fn with_signup_date(mut self, date: impl Into<String>) -> Self {
        self.signup_date = Some(date.into());
        self
    }

    /// Enable or disable the third place match
    pub fn with_third_place_match(mut self, enabled: bool) -> Self {
        self.third_place_match = Some(enabled);
        self
    }

    /// Enable or disable seed randomization
    pub fn with_randomize_seeds(mut self, enabled: bool) -> Self {
        self.randomize_seeds = Some(enabled);
        self
    }

    /// Preload the roster
    pub fn with_competitors(mut self, competitors: Vec<Competitor>) -> Self {
        self.competitors = Some(competitors);
        self
    }
}

/// Resolved tournament configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentConfig {
    /// Name of the game being played
    pub game_name: String,
    /// Single or double elimination
    pub tourney_type: TournamentType,
    /// Who signs competitors up
    pub signup_type: SignupType,
    /// Expected number of competitors, `None` when unset
    #[serde(default, deserialize_with = "negative_as_none")]
    pub competitor_count: Option<usize>,
    /// Name of this specific tournament
    pub tourney_name: String,
    /// Free-form description
    pub tourney_desc: String,
    /// Date the tournament is hosted
    pub hosted_date: String,
    /// Date signups open
    pub signup_date: String,
    /// Whether a third place match is played
    pub third_place_match: bool,
    /// Whether seeds should be randomized (stored only, never consulted by the roster)
    pub randomize_seeds: bool,
    /// Ordered roster
    pub competitors: Vec<Competitor>,
}

impl TournamentConfig {
    /// Configuration with every optional field at its default
    pub fn new(game_name: impl Into<String>) -> Self {
        Self {
            game_name: game_name.into(),
            tourney_type: TournamentType::SingleElimination,
            signup_type: SignupType::Competitor,
            competitor_count: None,
            tourney_name: String::new(),
            tourney_desc: String::new(),
            hosted_date: String::new(),
            signup_date: String::new(),
            third_place_match: false,
            randomize_seeds: true,
            competitors: Vec::new(),
        }
    }

    /// Merge the supplied options over the defaults
    ///
    /// # Errors
    ///
    /// Returns [`TourneyError::MissingGameName`] if the options lack a non-blank game name,
    /// or [`TourneyError::InvalidCompetitor`] if a preloaded competitor has a blank id
    pub fn from_options(options: TourneyOptions) -> TourneyResult<Self> {
        if !options.has_game_name() {
            return Err(TourneyError::MissingGameName);
        }

        for competitor in options.competitors.iter().flatten() {
            competitor.validate()?;
        }

        let TourneyOptions {
            game_name,
            tourney_type,
            signup_type,
            competitor_count,
            tourney_name,
            tourney_desc,
            hosted_date,
            signup_date,
            third_place_match,
            randomize_seeds,
            competitors,
        } = options;

        let defaults = Self::new(game_name.unwrap_or_default());

        Ok(Self {
            tourney_type: tourney_type.unwrap_or(defaults.tourney_type),
            signup_type: signup_type.unwrap_or(defaults.signup_type),
            competitor_count: competitor_count.or(defaults.competitor_count),
            tourney_name: tourney_name.unwrap_or(defaults.tourney_name),
            tourney_desc: tourney_desc.unwrap_or(defaults.tourney_desc),
            hosted_date: hosted_date.unwrap_or(defaults.hosted_date),
            signup_date: signup_date.unwrap_or(defaults.signup_date),
            third_place_match: third_place_match.unwrap_or(defaults.third_place_match),
            randomize_seeds: randomize_seeds.unwrap_or(defaults.randomize_seeds),
            competitors: competitors.unwrap_or(defaults.competitors),
            game_name: defaults.game_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TournamentConfig::new("Chess");
        assert_eq!(config.game_name, "Chess");
        assert_eq!(config.tourney_type, TournamentType::SingleElimination);
        assert_eq!(config.signup_type, SignupType::Competitor);
        assert_eq!(config.competitor_count, None);
        assert!(config.tourney_name.is_empty());
        assert!(config.tourney_desc.is_empty());
        assert!(config.hosted_date.is_empty());
        assert!(config.signup_date.is_empty());
        assert!(!config.third_place_match);
        assert!(config.randomize_seeds);
        assert!(config.competitors.is_empty());
    }

    #[test]
    fn test_from_options_overrides_defaults() {
        let options = TourneyOptions::new("Smash")
            .with_tourney_type(TournamentType::DoubleElimination)
            .with_signup_type(SignupType::Creator)
            .with_competitor_count(16)
            .with_tourney_name("Weekly")
            .with_tourney_desc("Friday bracket")
            .with_hosted_date("2026-11-01")
            .with_signup_date("2026-10-20")
            .with_third_place_match(true)
            .with_randomize_seeds(false)
            .with_competitors(vec![Competitor::new("a")]);

        let config = TournamentConfig::from_options(options).unwrap();
        assert_eq!(config.game_name, "Smash");
        assert_eq!(config.tourney_type, TournamentType::DoubleElimination);
        assert_eq!(config.signup_type, SignupType::Creator);
        assert_eq!(config.competitor_count, Some(16));
        assert_eq!(config.tourney_name, "Weekly");
        assert_eq!(config.tourney_desc, "Friday bracket");
        assert_eq!(config.hosted_date, "2026-11-01");
        assert_eq!(config.signup_date, "2026-10-20");
        assert!(config.third_place_match);
        assert!(!config.randomize_seeds);
        assert_eq!(config.competitors, vec![Competitor::new("a")]);
    }

    #[test]
    fn test_from_options_requires_game_name() {
        let err = TournamentConfig::from_options(TourneyOptions::default()).unwrap_err();
        assert!(matches!(err, TourneyError::MissingGameName));

        let err = TournamentConfig::from_options(TourneyOptions::new("   ")).unwrap_err();
        assert!(matches!(err, TourneyError::MissingGameName));
    }

    #[test]
    fn test_from_options_rejects_blank_competitor() {
        let options = TourneyOptions::new("Chess")
            .with_competitors(vec![Competitor::new("a"), Competitor::new("  ")]);
        let err = TournamentConfig::from_options(options).unwrap_err();
        assert!(matches!(err, TourneyError::InvalidCompetitor(_)));
    }

    #[test]
    fn test_competitor_validate() {
        assert!(Competitor::new("a").validate().is_ok());
        assert!(matches!(
            Competitor::new("").validate(),
            Err(TourneyError::InvalidCompetitor(_))
        ));
    }

    #[test]
    fn test_options_from_json_rejects_both_type_keys() {
        let err = TourneyOptions::from_json(
            r#"{"gameName": "Chess", "tourneyType": 0, "tournamentType": 1}"#,
        )
        .unwrap_err();
        assert!(matches!(err, TourneyError::Json(_)));
    }

    #[test]
    fn test_options_from_json() {
        let options = TourneyOptions::from_json(
            r#"{
                "gameName": "Chess",
                "tournamentType": 1,
                "signupType": 1,
                "competitorCount": -1,
                "thirdPlaceMatch": true,
                "competitors": [{"id": "a", "seed": -1}, {"id": "b", "seed": 3}, {"id": "c"}]
            }"#,
        )
        .unwrap();

        assert_eq!(options.game_name.as_deref(), Some("Chess"));
        assert_eq!(options.tourney_type, Some(TournamentType::DoubleElimination));
        assert_eq!(options.signup_type, Some(SignupType::Creator));
        assert_eq!(options.competitor_count, None);
        assert_eq!(options.third_place_match, Some(true));

        let competitors = options.competitors.unwrap();
        assert_eq!(competitors[0], Competitor::new("a"));
        assert_eq!(competitors[1], Competitor::with_seed("b", 3));
        assert_eq!(competitors[2], Competitor::new("c"));
    }

    #[test]
    fn test_options_from_json_rejects_unknown_type() {
        let err = TourneyOptions::from_json(r#"{"gameName": "Chess", "tourneyType": 5}"#)
            .unwrap_err();
        assert!(matches!(err, TourneyError::Json(_)));
    }

    #[test]
    fn test_tournament_type_parsing() {
        assert_eq!(
            "double".parse::<TournamentType>().unwrap(),
            TournamentType::DoubleElimination
        );
        assert_eq!(
            "0".parse::<TournamentType>().unwrap(),
            TournamentType::SingleElimination
        );
        assert!(matches!(
            "2".parse::<TournamentType>(),
            Err(TourneyError::InvalidTournamentType(2))
        ));
        assert!(matches!(
            "swiss".parse::<TournamentType>(),
            Err(TourneyError::UnknownVariant(_))
        ));
        assert_eq!(TournamentType::DoubleElimination.to_string(), "double");
    }

    #[test]
    fn test_signup_type_parsing() {
        assert_eq!("creator".parse::<SignupType>().unwrap(), SignupType::Creator);
        assert_eq!("0".parse::<SignupType>().unwrap(), SignupType::Competitor);
        assert!(matches!(
            "9".parse::<SignupType>(),
            Err(TourneyError::InvalidSignupType(9))
        ));
    }

    #[test]
    fn test_config_serializes_type_codes() {
        let config = TournamentConfig::new("Chess");
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["tourneyType"], 0);
        assert_eq!(json["signupType"], 0);
        assert_eq!(json["gameName"], "Chess");
    }
}
