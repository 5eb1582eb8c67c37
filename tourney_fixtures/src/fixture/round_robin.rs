//! Round-robin schedule generation using the circle method.
//!
//! The first slot stays fixed while the others rotate one step per round, so
//! every team meets every other team exactly once. An odd field is padded
//! with a bye; bye matches are part of the output.

use super::models::{Match, Slot};

/// Number of slots once the field is padded to an even count
pub fn padded_size(team_count: usize) -> usize {
    team_count + team_count % 2
}

/// Expected `(matches, rounds)` for a round-robin over `team_count` teams
pub fn expected_shape(team_count: usize) -> (usize, usize) {
    let n = padded_size(team_count);
    if n == 0 {
        return (0, 0);
    }
    (n * (n - 1) / 2, n - 1)
}

/// Build the full round-robin schedule.
///
/// Matches are returned round by round; within a round, position `i` is
/// paired with position `n - 1 - i`.
pub fn generate_round_robin(teams: &[String], venue: &str) -> Vec<Match> {
    let mut slots: Vec<Slot> = teams.iter().cloned().map(Slot::Team).collect();
    if slots.len() % 2 == 1 {
        slots.push(Slot::Bye);
    }

    let n = slots.len();
    if n < 2 {
        return Vec::new();
    }

    let (total, rounds) = expected_shape(teams.len());
    let mut matches = Vec::with_capacity(total);

    for round in 1..=rounds {
        for i in 0..n / 2 {
            matches.push(Match::new(
                slots[i].clone(),
                slots[n - 1 - i].clone(),
                venue,
                round as u32,
            ));
        }
        slots[1..].rotate_right(1);
    }

    log::debug!(
        "Generated round-robin: {} teams, {} rounds, {} matches",
        teams.len(),
        rounds,
        matches.len()
    );

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn labels(matches: &[Match]) -> Vec<String> {
        matches.iter().map(Match::label).collect()
    }

    #[test]
    fn test_four_team_schedule() {
        let matches = generate_round_robin(&names(&["A", "B", "C", "D"]), "Oval");
        assert_eq!(
            labels(&matches),
            vec![
                "A vs D", "B vs C", // round 1
                "A vs C", "D vs B", // round 2
                "A vs B", "C vs D", // round 3
            ]
        );
        let rounds: Vec<u32> = matches.iter().map(|m| m.round).collect();
        assert_eq!(rounds, vec![1, 1, 2, 2, 3, 3]);
        assert!(matches.iter().all(|m| m.venue == "Oval"));
    }

    #[test]
    fn test_odd_field_gets_bye() {
        let matches = generate_round_robin(&names(&["A", "B", "C"]), "Oval");
        assert_eq!(matches.len(), 6);
        assert_eq!(matches.iter().filter(|m| m.has_bye()).count(), 3);
        assert_eq!(matches.last().map(|m| m.round), Some(3));
    }

    #[test]
    fn test_single_team_plays_bye() {
        let matches = generate_round_robin(&names(&["Solo"]), "Oval");
        assert_eq!(labels(&matches), vec!["Solo vs Bye"]);
        assert_eq!(matches[0].round, 1);
    }

    #[test]
    fn test_empty_field() {
        assert!(generate_round_robin(&[], "Oval").is_empty());
        assert_eq!(expected_shape(0), (0, 0));
    }

    #[test]
    fn test_expected_shape() {
        assert_eq!(expected_shape(4), (6, 3));
        assert_eq!(expected_shape(5), (15, 5));
        assert_eq!(expected_shape(1), (1, 1));
    }

    #[test]
    fn test_deterministic() {
        let teams = names(&["A", "B", "C", "D", "E", "F"]);
        assert_eq!(
            generate_round_robin(&teams, "Oval"),
            generate_round_robin(&teams, "Oval")
        );
    }
}
