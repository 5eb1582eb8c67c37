//! # Tourney Fixtures
//!
//! Fixture generation engine for amateur tournaments.
//!
//! Given a tournament name, a competition format and the participating team
//! names, the engine builds the ordered list of matches the tournament must
//! play. It is a pure transformation: no state is kept between calls and the
//! caller is responsible for persisting or displaying the result.
//!
//! ## Formats
//!
//! - **Round robin**: every team plays every other team once. Odd fields are
//!   padded with a bye and scheduled with the circle method, which keeps one
//!   team fixed and rotates the rest each round.
//! - **Knockout**: single elimination. The field is shuffled, byes fill the
//!   bracket to the next power of two, and later rounds refer to the winners
//!   of earlier matches (`"Winner of Match 1.2"`).
//!
//! ## Core Modules
//!
//! - [`fixture`]: request models, validation, generators and dispatch
//!
//! ## Example
//!
//! ```
//! use tourney_fixtures::{FixtureDispatcher, RawFixtureRequest};
//!
//! let request = RawFixtureRequest::new("League", "round_robin", &["A", "B", "C"]);
//! let fixtures = FixtureDispatcher::default().dispatch(&request).unwrap();
//!
//! // Three teams are padded to four: three rounds of two matches
//! assert_eq!(fixtures.len(), 6);
//! assert_eq!(fixtures.round_count(), 3);
//! ```

/// Fixture models, validation, generators and dispatch.
pub mod fixture;
pub use fixture::{
    FixtureDispatcher, FixtureError, FixtureLimits, FixtureRequest, FixtureResult, FixtureSet,
    Match, MatchRecord, RawFixtureRequest, Slot, TournamentFormat,
};
