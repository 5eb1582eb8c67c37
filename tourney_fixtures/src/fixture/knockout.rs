//! Single-elimination bracket generation.
//!
//! The field is shuffled, padded with byes up to the next power of two and
//! then walked round by round: consecutive slots are paired, and each pairing
//! feeds a `PendingWinner` placeholder into the following round until one
//! slot remains.
//!
//! Byes are never drawn against each other. The last `byes` teams of the draw
//! each get one, so a bye always means a real team advances unopposed.

use super::models::{Match, Slot};
use super::shuffle::Shuffler;

/// Bracket size and round count for a field of `team_count` teams
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketShape {
    /// Power of two holding every team
    pub slots: usize,
    /// Bye entries needed to fill the bracket
    pub byes: usize,
    /// Rounds until a champion is decided
    pub rounds: u32,
}

impl BracketShape {
    pub fn for_teams(team_count: usize) -> Self {
        let slots = team_count.max(1).next_power_of_two();
        Self {
            slots,
            byes: slots - team_count.max(1),
            rounds: slots.trailing_zeros(),
        }
    }

    /// Total matches across all rounds
    pub fn match_count(&self) -> usize {
        self.slots - 1
    }
}

/// Builds knockout brackets with an injected source of randomness
pub struct KnockoutGenerator<'a, S: Shuffler> {
    shuffler: &'a mut S,
}

impl<'a, S: Shuffler> KnockoutGenerator<'a, S> {
    pub fn new(shuffler: &'a mut S) -> Self {
        Self { shuffler }
    }

    /// Build the full bracket.
    ///
    /// A single team yields no matches.
    pub fn generate(&mut self, teams: &[String], venue: &str) -> Vec<Match> {
        let shape = BracketShape::for_teams(teams.len());

        let mut drawn: Vec<Slot> = teams.iter().cloned().map(Slot::Team).collect();
        self.shuffler.shuffle(&mut drawn);

        let contested = drawn.len().saturating_sub(shape.byes);
        let mut bracket = Vec::with_capacity(shape.slots);
        let mut drawn = drawn.into_iter();
        bracket.extend(drawn.by_ref().take(contested));
        for team in drawn {
            bracket.push(team);
            bracket.push(Slot::Bye);
        }

        let mut matches = Vec::with_capacity(shape.match_count());
        let mut current = bracket;
        let mut round = 1u32;

        while current.len() > 1 {
            let mut next = Vec::with_capacity(current.len() / 2);
            let mut slots = current.into_iter();
            let mut match_index = 1u32;

            while let (Some(home), Some(away)) = (slots.next(), slots.next()) {
                matches.push(Match::new(home, away, venue, round));
                next.push(Slot::PendingWinner { round, match_index });
                match_index += 1;
            }

            current = next;
            round += 1;
        }

        log::debug!(
            "Generated knockout: {} teams, {} byes, {} rounds, {} matches",
            teams.len(),
            shape.byes,
            shape.rounds,
            matches.len()
        );

        matches
    }
}
