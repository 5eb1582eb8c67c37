//! # TF Server
//!
//! HTTP boundary for the `tourney_fixtures` engine: JSON in, fixture list
//! out, with permissive CORS for the platform's browser client.

pub mod api;
pub mod config;
pub mod logging;
pub mod metrics;
