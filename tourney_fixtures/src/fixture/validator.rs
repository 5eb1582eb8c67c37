//! Request validation.
//!
//! Presence checks come first so that an incomplete payload always reports
//! `Missing required fields`, whatever else is wrong with it. The format
//! string is not inspected here; the dispatcher resolves it.

use std::collections::HashSet;

use super::errors::{FixtureError, FixtureResult};
use super::models::{BYE, RawFixtureRequest};

/// Default lower bound on team count
pub const DEFAULT_MIN_TEAMS: usize = 2;

/// Default upper bound on team count
pub const DEFAULT_MAX_TEAMS: usize = 256;

/// Bounds applied to the team list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureLimits {
    /// Fewest teams accepted
    pub min_teams: usize,
    /// Most teams accepted
    pub max_teams: usize,
}

impl Default for FixtureLimits {
    fn default() -> Self {
        Self {
            min_teams: DEFAULT_MIN_TEAMS,
            max_teams: DEFAULT_MAX_TEAMS,
        }
    }
}

/// Checks that a fixture request is well-formed
#[derive(Debug, Clone, Default)]
pub struct RequestValidator {
    limits: FixtureLimits,
}

impl RequestValidator {
    pub fn new(limits: FixtureLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> FixtureLimits {
        self.limits
    }

    /// Validate a raw request
    ///
    /// # Errors
    ///
    /// - `MissingRequiredFields` if the name is absent or blank, the format is
    ///   absent, or the team list is absent or empty
    /// - `InsufficientTeams` / `TooManyTeams` if the team count is out of bounds
    /// - `BlankTeamName` / `DuplicateTeam` for unusable team entries
    /// - `ReservedTeamName` for a team named like the bye filler
    pub fn validate(&self, request: &RawFixtureRequest) -> FixtureResult<()> {
        let name_present = request
            .tournament_name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty());

        let teams = match (&request.teams, &request.format) {
            (Some(teams), Some(_)) if name_present && !teams.is_empty() => teams,
            _ => return Err(FixtureError::MissingRequiredFields),
        };

        if teams.len() < self.limits.min_teams {
            return Err(FixtureError::InsufficientTeams {
                needed: self.limits.min_teams,
                actual: teams.len(),
            });
        }

        if teams.len() > self.limits.max_teams {
            return Err(FixtureError::TooManyTeams {
                max: self.limits.max_teams,
                actual: teams.len(),
            });
        }

        let mut seen = HashSet::with_capacity(teams.len());
        for (index, team) in teams.iter().enumerate() {
            if team.trim().is_empty() {
                return Err(FixtureError::BlankTeamName { index });
            }
            if team.trim().eq_ignore_ascii_case(BYE) {
                return Err(FixtureError::ReservedTeamName(team.clone()));
            }
            if !seen.insert(team.as_str()) {
                return Err(FixtureError::DuplicateTeam(team.clone()));
            }
        }

        Ok(())
    }
}
