//! Circle-method round-robin generator.

use log::{debug, trace};

use super::errors::{ScheduleResult, ValidationError};
use super::models::{Fixture, FixtureConfig, MIN_PARTICIPANTS, Match};

/// A seat in the rotating circle.
///
/// The resting slot is its own variant, so a participant whose label equals
/// the bye label is still scheduled as a real competitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Team(usize),
    Bye,
}

/// Fixture generator bound to a configuration
#[derive(Debug, Clone, Default)]
pub struct FixtureGenerator {
    config: FixtureConfig,
}

impl FixtureGenerator {
    /// Create a new generator
    pub fn new(config: FixtureConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FixtureConfig {
        &self.config
    }

    /// Generate the fixture for `n` participants
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if `n` is below 2 or the configured
    /// name list does not hold exactly `n` labels.
    pub fn generate(&self, n: usize) -> ScheduleResult<Fixture> {
        generate_fixture(n, &self.config)
    }
}

/// Generate a round-robin fixture for `n` participants.
///
/// Every pair of participants meets once per leg. When `n` is odd a bye slot
/// pads the circle and its opponent rests for the round.
///
/// # Errors
///
/// Returns [`ValidationError`] if `n` is below 2 or the configured name list
/// does not hold exactly `n` labels.
pub fn generate_fixture(n: usize, config: &FixtureConfig) -> ScheduleResult<Fixture> {
    let participants = resolve_participants(n, config)?;

    let mut circle: Vec<Slot> = (0..n).map(Slot::Team).collect();
    if n % 2 == 1 {
        circle.push(Slot::Bye);
    }

    let size = circle.len();
    let rounds = (size - 1) as u32;
    let tables = size / 2;
    let legs = if config.double_round { 2 } else { 1 };

    debug!(
        "Generating fixture: {} participants, {} slots, {} rounds x {} tables, {} leg(s)",
        n, size, rounds, tables, legs
    );

    let mut matches = Vec::with_capacity(rounds as usize * tables * legs);

    for round in 1..=rounds {
        for (seat, table) in (0..tables).zip(1u32..) {
            let entry = match (circle[seat], circle[size - 1 - seat]) {
                (Slot::Team(first), Slot::Team(second)) => {
                    let (home, away) = if config.balance_home_away && round % 2 == 0 {
                        (second, first)
                    } else {
                        (first, second)
                    };
                    Match::new(
                        round,
                        table,
                        participants[home].clone(),
                        participants[away].clone(),
                    )
                }
                (Slot::Team(resting), Slot::Bye) | (Slot::Bye, Slot::Team(resting)) => {
                    Match::bye(round, table, participants[resting].clone())
                }
                // A single bye slot is ever pushed, and seats pair distinct positions.
                (Slot::Bye, Slot::Bye) => unreachable!("bye slot paired with itself"),
            };
            matches.push(entry);
        }

        trace!("Round {} paired: {:?}", round, circle);

        // Keep the first seat fixed; the last seat moves to position 1.
        circle[1..].rotate_right(1);
    }

    if config.double_round {
        let second_leg: Vec<Match> = matches.iter().map(|m| m.mirrored(rounds)).collect();
        matches.extend(second_leg);
    }

    matches.sort_by_key(|m| (m.round, m.table));

    Ok(Fixture {
        participants,
        matches,
        rounds_per_leg: rounds,
        tables_per_round: tables as u32,
        double_round: config.double_round,
        bye_label: config.bye_label.clone(),
    })
}

/// Validate the request and produce the participant labels
fn resolve_participants(n: usize, config: &FixtureConfig) -> ScheduleResult<Vec<String>> {
    if n < MIN_PARTICIPANTS {
        return Err(ValidationError::TooFewParticipants {
            requested: n,
            min: MIN_PARTICIPANTS,
        });
    }

    match &config.names {
        Some(names) if names.len() != n => Err(ValidationError::NameCountMismatch {
            expected: n,
            actual: names.len(),
        }),
        Some(names) => Ok(names.clone()),
        None => Ok((1..=n).map(|i| format!("E{i}")).collect()),
    }
}
