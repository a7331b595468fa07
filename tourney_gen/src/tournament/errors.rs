//! Tournament error types.

use thiserror::Error;

/// Tournament errors
#[derive(Debug, Error)]
pub enum TourneyError {
    /// Construction attempted without a usable game name
    #[error("You must provide at least a game name to create a tournament")]
    MissingGameName,

    /// Competitor rejected before being added to the roster
    #[error("Invalid competitor: {0}")]
    InvalidCompetitor(String),

    /// Tournament type code outside the known range
    #[error("Invalid tournament type: {0} (expected 0 = single, 1 = double)")]
    InvalidTournamentType(u8),

    /// Signup type code outside the known range
    #[error("Invalid signup type: {0} (expected 0 = competitor, 1 = creator)")]
    InvalidSignupType(u8),

    /// Unrecognised name when parsing an enumerated option
    #[error("Unknown variant: {0}")]
    UnknownVariant(String),

    /// Options document could not be decoded
    #[error("Failed to parse tournament options: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for tournament operations
pub type TourneyResult<T> = Result<T, TourneyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert!(
            TourneyError::MissingGameName
                .to_string()
                .contains("game name")
        );
        assert_eq!(
            TourneyError::InvalidTournamentType(7).to_string(),
            "Invalid tournament type: 7 (expected 0 = single, 1 = double)"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let err: TourneyError = serde_json::from_str::<u8>("not json").unwrap_err().into();
        assert!(matches!(err, TourneyError::Json(_)));
    }
}
