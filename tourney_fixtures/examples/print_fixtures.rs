//! Fixture Printing Example
//!
//! Demonstrates generating a round-robin schedule and a knockout bracket and
//! printing them round by round.

use tourney_fixtures::fixture::{FixtureDispatcher, FixtureSet, RawFixtureRequest, RngShuffler};

fn print_rounds(title: &str, fixtures: &FixtureSet) {
    println!("=== {title} ===");
    for round in 1..=fixtures.round_count() {
        println!("Round {round}");
        for m in fixtures.matches_in_round(round) {
            println!("  {} @ {}", m.label(), m.venue);
        }
    }
    println!();
}

fn main() {
    let dispatcher = FixtureDispatcher::default();

    // Example 1: five-team league, padded with a bye
    let league = RawFixtureRequest::new(
        "Sunday League",
        "round_robin",
        &["Lions", "Tigers", "Bears", "Wolves", "Hawks"],
    )
    .with_venue("Riverside");

    match dispatcher.dispatch(&league) {
        Ok(fixtures) => print_rounds("Round robin", &fixtures),
        Err(e) => eprintln!("Round robin failed: {e}"),
    }

    // Example 2: six-team cup with a reproducible draw
    let cup = RawFixtureRequest::new(
        "Spring Cup",
        "knockout",
        &["Lions", "Tigers", "Bears", "Wolves", "Hawks", "Sharks"],
    );

    match dispatcher.dispatch_with(&cup, &mut RngShuffler::seeded(2026)) {
        Ok(fixtures) => print_rounds("Knockout (seed 2026)", &fixtures),
        Err(e) => eprintln!("Knockout failed: {e}"),
    }

    // Example 3: what the caller sees for a bad request
    let bad = RawFixtureRequest::new("Spring Cup", "swiss", &["Lions", "Tigers"]);
    if let Err(e) = dispatcher.dispatch(&bad) {
        println!("Rejected: {e}");
    }
}
