//! Round-robin schedule generation.
//!
//! This module provides the fixture generator and its data model:
//! - Participant resolution (custom names or synthesized `E1..En` labels)
//! - Circle-method pairing with a bye slot for odd counts
//! - Optional mirrored second leg (double round-robin)
//! - Home/away alternation by round parity
//! - Per-participant bookkeeping of home, away and bye slots
//!
//! ## Example
//!
//! ```
//! use fixture::schedule::{FixtureConfig, FixtureGenerator, MatchNote};
//!
//! let config = FixtureConfig::default()
//!     .with_names(["Tigres", "Leones", "Águilas"])
//!     .with_double_round(true);
//!
//! let fixture = FixtureGenerator::new(config).generate(3).unwrap();
//!
//! // Three teams are padded to four slots: 3 rounds per leg, 2 tables per round.
//! assert_eq!(fixture.total_rounds(), 6);
//! assert_eq!(fixture.tables_per_round(), 2);
//! assert_eq!(fixture.byes().count(), 6);
//! assert!(fixture.byes().all(|m| m.note == MatchNote::Bye));
//! ```

pub mod errors;
pub mod generator;
pub mod models;
pub mod summary;

pub use errors::{ScheduleResult, ValidationError};
pub use generator::{FixtureGenerator, generate_fixture};
pub use models::{
    DEFAULT_BYE_LABEL, Fixture, FixtureConfig, MIN_PARTICIPANTS, Match, MatchNote, expected_shape,
};
pub use summary::ParticipantSummary;
