//! Fixture generation error types.

use thiserror::Error;

/// Result type for fixture operations
pub type FixtureResult<T> = Result<T, FixtureError>;

/// Fixture generation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    /// Tournament name, format or team list is absent or empty
    #[error("Missing required fields")]
    MissingRequiredFields,

    /// Format is present but not one the engine knows
    #[error("Unsupported format")]
    UnsupportedFormat(String),

    /// Not enough teams to play a tournament
    #[error("At least {needed} teams are required, got {actual}")]
    InsufficientTeams { needed: usize, actual: usize },

    /// Team list exceeds the configured limit
    #[error("Too many teams: {actual} (maximum is {max})")]
    TooManyTeams { max: usize, actual: usize },

    /// A team name is empty or whitespace
    #[error("Team name at position {index} is blank")]
    BlankTeamName { index: usize },

    /// The same team is listed twice
    #[error("Team listed more than once: {0}")]
    DuplicateTeam(String),

    /// A team name collides with the bye filler
    #[error("Team name is reserved: {0}")]
    ReservedTeamName(String),

    /// Generation produced something it should not have
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FixtureError {
    /// Whether the caller sent a bad request (as opposed to an engine fault)
    pub fn is_validation(&self) -> bool {
        !matches!(self, FixtureError::Internal(_))
    }

    /// Short machine-friendly reason, used as a metrics label
    pub fn reason(&self) -> &'static str {
        match self {
            FixtureError::MissingRequiredFields => "missing_fields",
            FixtureError::UnsupportedFormat(_) => "unsupported_format",
            FixtureError::InsufficientTeams { .. } => "insufficient_teams",
            FixtureError::TooManyTeams { .. } => "too_many_teams",
            FixtureError::BlankTeamName { .. } => "blank_team_name",
            FixtureError::DuplicateTeam(_) => "duplicate_team",
            FixtureError::ReservedTeamName(_) => "reserved_team_name",
            FixtureError::Internal(_) => "internal",
        }
    }
}
