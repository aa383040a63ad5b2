//! Per-participant schedule bookkeeping.

use std::collections::HashMap;

use serde::Serialize;

use super::models::Fixture;

/// How often a participant is seated home, away, or rests
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantSummary {
    pub label: String,
    pub home: u32,
    pub away: u32,
    pub byes: u32,
}

impl ParticipantSummary {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            home: 0,
            away: 0,
            byes: 0,
        }
    }

    /// Matches actually played (byes excluded)
    pub fn played(&self) -> u32 {
        self.home + self.away
    }

    /// Positive when the participant hosts more than it visits
    pub fn home_away_difference(&self) -> i64 {
        i64::from(self.home) - i64::from(self.away)
    }
}

impl Fixture {
    /// Summaries in participant order.
    ///
    /// Rows are attributed by position in the participant list, so duplicate
    /// labels are counted against the first occurrence.
    pub fn participant_summaries(&self) -> Vec<ParticipantSummary> {
        let mut summaries: Vec<ParticipantSummary> = self
            .participants
            .iter()
            .map(|label| ParticipantSummary::new(label))
            .collect();

        let mut positions = HashMap::with_capacity(self.participants.len());
        for (i, label) in self.participants.iter().enumerate() {
            positions.entry(label.as_str()).or_insert(i);
        }
        let index_of = |label: &str| positions.get(label).copied();

        for m in &self.matches {
            let Some(home) = index_of(&m.home) else {
                continue;
            };
            if m.is_bye() {
                summaries[home].byes += 1;
                continue;
            }
            summaries[home].home += 1;
            if let Some(away) = index_of(&m.away) {
                summaries[away].away += 1;
            }
        }

        summaries
    }
}
