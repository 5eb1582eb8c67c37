//! Fixture data models.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::errors::FixtureError;

/// Venue used when a request does not name one
pub const DEFAULT_VENUE: &str = "Main Ground";

/// Label of the filler opponent
pub const BYE: &str = "Bye";

/// Competition format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentFormat {
    /// Every team plays every other team once
    RoundRobin,
    /// Single elimination
    Knockout,
}

impl TournamentFormat {
    /// Wire name of the format
    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentFormat::RoundRobin => "round_robin",
            TournamentFormat::Knockout => "knockout",
        }
    }
}

impl fmt::Display for TournamentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TournamentFormat {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "round_robin" => Ok(TournamentFormat::RoundRobin),
            "knockout" => Ok(TournamentFormat::Knockout),
            other => Err(FixtureError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Request payload as it arrives from the caller.
///
/// Every field is optional so that absent fields are reported by the
/// validator instead of failing deserialization. Fields the engine does not
/// read are kept as raw JSON and accept any type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFixtureRequest {
    #[serde(default)]
    pub tournament_name: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub teams: Option<Vec<String>>,
    #[serde(default)]
    pub start_date: Option<Value>,
    /// Minutes per match
    #[serde(default)]
    pub match_duration: Option<Value>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub finals: Option<Value>,
}

impl RawFixtureRequest {
    /// Create a request carrying only the required fields
    pub fn new(tournament_name: &str, format: &str, teams: &[&str]) -> Self {
        Self {
            tournament_name: Some(tournament_name.to_string()),
            format: Some(format.to_string()),
            teams: Some(teams.iter().map(|t| t.to_string()).collect()),
            ..Self::default()
        }
    }

    /// Set the venue
    pub fn with_venue(mut self, venue: &str) -> Self {
        self.venue = Some(venue.to_string());
        self
    }
}

/// A validated request with its format resolved
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureRequest {
    pub tournament_name: String,
    pub format: TournamentFormat,
    pub teams: Vec<String>,
    pub venue: String,
    /// Accepted but not used for generation
    pub start_date: Option<Value>,
    /// Accepted but not used for generation
    pub match_duration: Option<Value>,
    /// Accepted but not used for generation
    pub finals: Option<Value>,
}

/// One side of a match
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Slot {
    /// A named team
    Team(String),
    /// Filler opponent; the other side advances
    Bye,
    /// Winner of an earlier knockout match (both 1-based)
    PendingWinner { round: u32, match_index: u32 },
}

impl Slot {
    /// Team name if this slot holds a real team
    pub fn team(&self) -> Option<&str> {
        match self {
            Slot::Team(name) => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn is_bye(&self) -> bool {
        matches!(self, Slot::Bye)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Team(name) => f.write_str(name),
            Slot::Bye => f.write_str(BYE),
            Slot::PendingWinner { round, match_index } => {
                write!(f, "Winner of Match {round}.{match_index}")
            }
        }
    }
}

/// A single scheduled match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub home: Slot,
    pub away: Slot,
    pub venue: String,
    /// Round number, starting at 1
    pub round: u32,
}

impl Match {
    pub fn new(home: Slot, away: Slot, venue: &str, round: u32) -> Self {
        Self {
            home,
            away,
            venue: venue.to_string(),
            round,
        }
    }

    /// Display label, e.g. `"Lions vs Tigers"`
    pub fn label(&self) -> String {
        format!("{} vs {}", self.home, self.away)
    }

    /// Whether one side is a bye
    pub fn has_bye(&self) -> bool {
        self.home.is_bye() || self.away.is_bye()
    }

    /// Whether the named team plays in this match
    pub fn involves(&self, team: &str) -> bool {
        self.home.team() == Some(team) || self.away.team() == Some(team)
    }
}

/// Wire form of a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "match")]
    pub label: String,
    pub venue: String,
    pub round: u32,
}

impl From<&Match> for MatchRecord {
    fn from(m: &Match) -> Self {
        Self {
            label: m.label(),
            venue: m.venue.clone(),
            round: m.round,
        }
    }
}

/// Ordered list of matches, grouped by ascending round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureSet {
    matches: Vec<Match>,
}

impl FixtureSet {
    pub fn new(matches: Vec<Match>) -> Self {
        Self { matches }
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Match> {
        self.matches.iter()
    }

    /// Highest round number (0 when empty)
    pub fn round_count(&self) -> u32 {
        self.matches.iter().map(|m| m.round).max().unwrap_or(0)
    }

    /// Matches tagged with the given round
    pub fn matches_in_round(&self, round: u32) -> Vec<&Match> {
        self.matches.iter().filter(|m| m.round == round).collect()
    }

    /// Number of matches in each round, indexed from round 1
    pub fn round_sizes(&self) -> Vec<usize> {
        (1..=self.round_count())
            .map(|r| self.matches_in_round(r).len())
            .collect()
    }

    /// Rounds in which the named team is drawn against a bye
    pub fn bye_rounds(&self, team: &str) -> Vec<u32> {
        self.matches
            .iter()
            .filter(|m| m.has_bye() && m.involves(team))
            .map(|m| m.round)
            .collect()
    }

    /// Wire form of every match, in order
    pub fn to_records(&self) -> Vec<MatchRecord> {
        self.matches.iter().map(MatchRecord::from).collect()
    }

    pub fn into_matches(self) -> Vec<Match> {
        self.matches
    }
}

impl IntoIterator for FixtureSet {
    type Item = Match;
    type IntoIter = std::vec::IntoIter<Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.into_iter()
    }
}

impl<'a> IntoIterator for &'a FixtureSet {
    type Item = &'a Match;
    type IntoIter = std::slice::Iter<'a, Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}
