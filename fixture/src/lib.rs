//! # Fixture
//!
//! A round-robin tournament scheduler built on the circle method.
//!
//! Given a participant count (and optionally their names), the generator assigns
//! every pairing to a round and a table so that all tables of a round can be
//! played at the same time.
//!
//! ## Features
//!
//! - **Byes**: odd participant counts get a resting slot each round
//! - **Double round-robin**: a mirrored second leg with home/away reversed
//! - **Home/away balancing**: sides alternate on even rounds
//!
//! ## Core Modules
//!
//! - [`schedule`]: Fixture generation, models and validation errors
//! - [`export`]: CSV, HTML, JSON and plain-text renderings of a fixture
//!
//! ## Example
//!
//! ```
//! use fixture::{FixtureConfig, FixtureGenerator};
//!
//! let generator = FixtureGenerator::new(FixtureConfig::default());
//! let fixture = generator.generate(4).unwrap();
//!
//! assert_eq!(fixture.total_rounds(), 3);
//! assert_eq!(fixture.len(), 6);
//! ```

/// Export formats for generated fixtures.
pub mod export;

/// Round-robin generation, models and errors.
pub mod schedule;
pub use schedule::{
    DEFAULT_BYE_LABEL, Fixture, FixtureConfig, FixtureGenerator, MIN_PARTICIPANTS, Match,
    MatchNote, ParticipantSummary, ScheduleResult, ValidationError, expected_shape,
    generate_fixture,
};
