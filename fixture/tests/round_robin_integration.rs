//! Integration tests for fixture generation
//!
//! These tests exercise the public API end to end: validation, schedule
//! shape, pair coverage and the concrete 4/5-team scenarios.

use fixture::{
    Fixture, FixtureConfig, FixtureGenerator, Match, MatchNote, ValidationError, expected_shape,
    generate_fixture,
};
use std::collections::{BTreeMap, BTreeSet};

fn unordered(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

fn pair_counts(fixture: &Fixture) -> BTreeMap<(String, String), usize> {
    let mut counts = BTreeMap::new();
    for m in fixture.matches().iter().filter(|m| !m.is_bye()) {
        *counts.entry(unordered(&m.home, &m.away)).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod validation_tests {
    use super::*;

    #[test]
    fn test_one_participant_fails() {
        let result = generate_fixture(1, &FixtureConfig::default());
        assert!(matches!(
            result,
            Err(ValidationError::TooFewParticipants { requested: 1, .. })
        ));
    }

    #[test]
    fn test_name_count_mismatch_fails() {
        let config = FixtureConfig::default().with_names(["A", "B"]);
        let result = FixtureGenerator::new(config).generate(4);
        assert!(matches!(
            result,
            Err(ValidationError::NameCountMismatch {
                expected: 4,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_error_message_is_human_readable() {
        let err = generate_fixture(0, &FixtureConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "At least 2 participants are required, got 0");
    }
}

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_four_teams_single_round() {
        let fixture = generate_fixture(4, &FixtureConfig::default()).unwrap();

        assert_eq!(fixture.total_rounds(), 3);
        assert_eq!(fixture.tables_per_round(), 2);
        assert_eq!(fixture.len(), 6);
        assert_eq!(fixture.byes().count(), 0);

        let counts = pair_counts(&fixture);
        assert_eq!(counts.len(), 6);
        assert!(counts.values().all(|&c| c == 1));
    }

    #[test]
    fn test_five_teams_with_byes() {
        let fixture = generate_fixture(5, &FixtureConfig::default()).unwrap();

        assert_eq!(fixture.total_rounds(), 5);
        assert_eq!(fixture.tables_per_round(), 3);
        assert_eq!(fixture.len(), 15);

        let counts = pair_counts(&fixture);
        assert_eq!(counts.len(), 10);
        assert!(counts.values().all(|&c| c == 1));

        let resting: BTreeSet<&str> = fixture.byes().map(|m| m.home.as_str()).collect();
        assert_eq!(fixture.byes().count(), 5);
        assert_eq!(resting, BTreeSet::from(["E1", "E2", "E3", "E4", "E5"]));

        for round in 1..=5 {
            assert_eq!(fixture.round(round).filter(|m| m.is_bye()).count(), 1);
        }
    }

    #[test]
    fn test_four_teams_double_round() {
        let config = FixtureConfig::default().with_double_round(true);
        let fixture = generate_fixture(4, &config).unwrap();

        assert_eq!(fixture.total_rounds(), 6);
        assert_eq!(fixture.rounds_per_leg(), 3);
        assert_eq!(fixture.len(), 12);

        let counts = pair_counts(&fixture);
        assert_eq!(counts.len(), 6);
        assert!(counts.values().all(|&c| c == 2));

        // Each pair meets once with each side at home
        let ordered: BTreeSet<(String, String)> = fixture
            .matches()
            .iter()
            .map(|m| (m.home.clone(), m.away.clone()))
            .collect();
        assert_eq!(ordered.len(), 12);
    }

    #[test]
    fn test_shape_matches_expected_shape() {
        for n in 2..=12 {
            for double_round in [false, true] {
                let config = FixtureConfig::default().with_double_round(double_round);
                let fixture = generate_fixture(n, &config).unwrap();
                let (rounds, tables) = expected_shape(n, double_round);
                assert_eq!(fixture.total_rounds(), rounds, "n={n}");
                assert_eq!(fixture.tables_per_round(), tables, "n={n}");
                assert_eq!(fixture.len(), (rounds * tables) as usize, "n={n}");
            }
        }
    }

    #[test]
    fn test_custom_names_flow_through() {
        let names = ["Tigres", "Leones", "Águilas", "Cóndores", "Pumas"];
        let config = FixtureConfig::default().with_names(names);
        let fixture = generate_fixture(5, &config).unwrap();

        assert_eq!(fixture.participants(), &names);
        for m in fixture.matches() {
            assert!(names.contains(&m.home.as_str()));
            if m.note == MatchNote::None {
                assert!(names.contains(&m.away.as_str()));
            }
        }
    }

    #[test]
    fn test_into_matches_preserves_order() {
        let fixture = generate_fixture(2, &FixtureConfig::default()).unwrap();
        assert_eq!(fixture.into_matches(), vec![Match::new(1, 1, "E1", "E2")]);
    }

    #[test]
    fn test_generation_from_many_threads() {
        let config = FixtureConfig::default().with_double_round(true);
        let reference = generate_fixture(8, &config).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let config = config.clone();
                std::thread::spawn(move || generate_fixture(8, &config).unwrap())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), reference);
        }
    }
}

#[test]
fn test_core_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Fixture>();
    assert_send_sync::<FixtureConfig>();
    assert_send_sync::<FixtureGenerator>();
    assert_send_sync::<ValidationError>();
}
