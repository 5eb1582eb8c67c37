//! Routes fixture requests to the generator for their format.

use super::errors::{FixtureError, FixtureResult};
use super::knockout::{BracketShape, KnockoutGenerator};
use super::models::{
    DEFAULT_VENUE, FixtureRequest, FixtureSet, RawFixtureRequest, TournamentFormat,
};
use super::round_robin::{expected_shape, generate_round_robin};
use super::shuffle::{RngShuffler, Shuffler};
use super::validator::{FixtureLimits, RequestValidator};

/// Validates requests and produces fixture sets
#[derive(Debug, Clone, Default)]
pub struct FixtureDispatcher {
    validator: RequestValidator,
}

impl FixtureDispatcher {
    pub fn new(limits: FixtureLimits) -> Self {
        Self {
            validator: RequestValidator::new(limits),
        }
    }

    pub fn limits(&self) -> FixtureLimits {
        self.validator.limits()
    }

    /// Validate a raw request and resolve its format and venue
    ///
    /// # Errors
    ///
    /// Any validation error, or `UnsupportedFormat` for an unknown format.
    pub fn prepare(&self, raw: &RawFixtureRequest) -> FixtureResult<FixtureRequest> {
        self.validator.validate(raw)?;

        let (Some(name), Some(format), Some(teams)) =
            (&raw.tournament_name, &raw.format, &raw.teams)
        else {
            return Err(FixtureError::MissingRequiredFields);
        };

        let format: TournamentFormat = format.parse()?;

        let venue = raw
            .venue
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_VENUE)
            .to_string();

        Ok(FixtureRequest {
            tournament_name: name.trim().to_string(),
            format,
            teams: teams.clone(),
            venue,
            start_date: raw.start_date.clone(),
            match_duration: raw.match_duration.clone(),
            finals: raw.finals.clone(),
        })
    }

    /// Generate fixtures using the thread-local random generator for knockout draws
    pub fn dispatch(&self, raw: &RawFixtureRequest) -> FixtureResult<FixtureSet> {
        self.dispatch_with(raw, &mut RngShuffler::thread())
    }

    /// Generate fixtures, drawing knockout brackets with the given shuffler
    pub fn dispatch_with<S: Shuffler>(
        &self,
        raw: &RawFixtureRequest,
        shuffler: &mut S,
    ) -> FixtureResult<FixtureSet> {
        let request = self.prepare(raw)?;
        generate(&request, shuffler)
    }
}

/// Generate the fixture set for an already validated request
pub fn generate<S: Shuffler>(
    request: &FixtureRequest,
    shuffler: &mut S,
) -> FixtureResult<FixtureSet> {
    let matches = match request.format {
        TournamentFormat::RoundRobin => generate_round_robin(&request.teams, &request.venue),
        TournamentFormat::Knockout => {
            KnockoutGenerator::new(shuffler).generate(&request.teams, &request.venue)
        }
    };

    let fixtures = FixtureSet::new(matches);
    check_shape(request, &fixtures)?;

    log::info!(
        "Generated {} fixtures for '{}' ({}, {} teams)",
        fixtures.len(),
        request.tournament_name,
        request.format,
        request.teams.len()
    );

    Ok(fixtures)
}

/// Confirm the generated set has the match and round counts its format implies
fn check_shape(request: &FixtureRequest, fixtures: &FixtureSet) -> FixtureResult<()> {
    let team_count = request.teams.len();
    let (matches, rounds) = match request.format {
        TournamentFormat::RoundRobin => expected_shape(team_count),
        TournamentFormat::Knockout => {
            let shape = BracketShape::for_teams(team_count);
            (shape.match_count(), shape.rounds as usize)
        }
    };

    if fixtures.len() != matches || fixtures.round_count() as usize != rounds {
        log::error!(
            "Fixture shape mismatch for {} teams ({}): expected {} matches over {} rounds, got {} over {}",
            team_count,
            request.format,
            matches,
            rounds,
            fixtures.len(),
            fixtures.round_count()
        );
        return Err(FixtureError::Internal(
            "Generated fixtures do not match the expected schedule shape".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::shuffle::PreserveOrder;

    #[test]
    fn test_prepare_defaults_venue() {
        let raw = RawFixtureRequest::new("  Spring Cup ", "knockout", &["A", "B"]);
        let request = FixtureDispatcher::default().prepare(&raw).unwrap();
        assert_eq!(request.tournament_name, "Spring Cup");
        assert_eq!(request.format, TournamentFormat::Knockout);
        assert_eq!(request.venue, DEFAULT_VENUE);

        let raw = raw.with_venue("   ");
        let request = FixtureDispatcher::default().prepare(&raw).unwrap();
        assert_eq!(request.venue, DEFAULT_VENUE);
    }

    #[test]
    fn test_prepare_keeps_unused_fields() {
        let mut raw = RawFixtureRequest::new("Cup", "round_robin", &["A", "B"]);
        raw.start_date = Some(serde_json::json!("2026-11-01"));
        raw.match_duration = Some(serde_json::json!(40));
        raw.finals = Some(serde_json::json!("top_two"));

        let request = FixtureDispatcher::default().prepare(&raw).unwrap();
        assert_eq!(request.start_date, Some(serde_json::json!("2026-11-01")));
        assert_eq!(request.match_duration, Some(serde_json::json!(40)));
        assert_eq!(request.finals, Some(serde_json::json!("top_two")));
    }

    #[test]
    fn test_unsupported_format() {
        let raw = RawFixtureRequest::new("Cup", "swiss", &["A", "B"]);
        let err = FixtureDispatcher::default().dispatch(&raw).unwrap_err();
        assert_eq!(err, FixtureError::UnsupportedFormat("swiss".to_string()));
        assert_eq!(err.to_string(), "Unsupported format");
    }

    #[test]
    fn test_missing_fields_win_over_unsupported_format() {
        let mut raw = RawFixtureRequest::new("Cup", "swiss", &[]);
        raw.teams = None;
        assert_eq!(
            FixtureDispatcher::default().dispatch(&raw),
            Err(FixtureError::MissingRequiredFields)
        );
    }

    #[test]
    fn test_dispatch_round_robin() {
        let raw = RawFixtureRequest::new("League", "round_robin", &["A", "B", "C", "D"])
            .with_venue("Oval");
        let fixtures = FixtureDispatcher::default().dispatch(&raw).unwrap();
        assert_eq!(fixtures.len(), 6);
        assert_eq!(fixtures.round_count(), 3);
        assert!(fixtures.iter().all(|m| m.venue == "Oval"));
    }

    #[test]
    fn test_dispatch_knockout_with_shuffler() {
        let raw = RawFixtureRequest::new("Cup", "knockout", &["A", "B", "C"]);
        let fixtures = FixtureDispatcher::default()
            .dispatch_with(&raw, &mut PreserveOrder)
            .unwrap();
        let labels: Vec<String> = fixtures.iter().map(|m| m.label()).collect();
        assert_eq!(
            labels,
            vec![
                "A vs B",
                "C vs Bye",
                "Winner of Match 1.1 vs Winner of Match 1.2"
            ]
        );
    }

    #[test]
    fn test_check_shape_rejects_truncated_set() {
        let raw = RawFixtureRequest::new("League", "round_robin", &["A", "B", "C", "D"]);
        let dispatcher = FixtureDispatcher::default();
        let request = dispatcher.prepare(&raw).unwrap();

        let mut matches = dispatcher.dispatch(&raw).unwrap().into_matches();
        matches.pop();

        let err = check_shape(&request, &FixtureSet::new(matches)).unwrap_err();
        assert!(matches!(err, FixtureError::Internal(_)));
        assert!(!err.is_validation());
    }
}
