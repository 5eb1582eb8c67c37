//! Fixture generation for round-robin and knockout tournaments.
//!
//! This module turns a list of team names into the ordered list of matches a
//! tournament must play:
//! - Request validation (required fields, team count bounds, duplicates)
//! - Round-robin schedules via the circle method
//! - Single-elimination brackets with byes and winner placeholders
//! - Format dispatch and result shape checks
//!
//! ## Example
//!
//! ```
//! use tourney_fixtures::fixture::{FixtureDispatcher, PreserveOrder, RawFixtureRequest};
//!
//! let request = RawFixtureRequest::new("Spring Cup", "knockout", &["A", "B", "C", "D"]);
//! let fixtures = FixtureDispatcher::default()
//!     .dispatch_with(&request, &mut PreserveOrder)
//!     .unwrap();
//!
//! assert_eq!(fixtures.len(), 3);
//! assert_eq!(fixtures.matches()[0].label(), "A vs B");
//! assert_eq!(
//!     fixtures.matches()[2].label(),
//!     "Winner of Match 1.1 vs Winner of Match 1.2"
//! );
//! ```

pub mod dispatcher;
pub mod errors;
pub mod knockout;
pub mod models;
pub mod round_robin;
pub mod shuffle;
pub mod validator;

pub use dispatcher::{FixtureDispatcher, generate};
pub use errors::{FixtureError, FixtureResult};
pub use knockout::{BracketShape, KnockoutGenerator};
pub use models::{
    BYE, DEFAULT_VENUE, FixtureRequest, FixtureSet, Match, MatchRecord, RawFixtureRequest, Slot,
    TournamentFormat,
};
pub use round_robin::generate_round_robin;
pub use shuffle::{PreserveOrder, RngShuffler, Shuffler};
pub use validator::{DEFAULT_MAX_TEAMS, DEFAULT_MIN_TEAMS, FixtureLimits, RequestValidator};
