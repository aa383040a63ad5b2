//! Fixture data models.

use serde::{Deserialize, Serialize};

/// Label used for the resting slot when none is configured
pub const DEFAULT_BYE_LABEL: &str = "DESCANSA";

/// Smallest participant count a round-robin can be built for
pub const MIN_PARTICIPANTS: usize = 2;

/// Annotation attached to a match row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchNote {
    /// Regular pairing
    #[default]
    None,
    /// The home participant rests this round
    Bye,
}

impl MatchNote {
    pub fn is_bye(&self) -> bool {
        matches!(self, MatchNote::Bye)
    }
}

impl std::fmt::Display for MatchNote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchNote::None => write!(f, ""),
            MatchNote::Bye => write!(f, "BYE"),
        }
    }
}

/// A single table assignment within a round
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match {
    /// Round number (1-indexed)
    pub round: u32,
    /// Table number within the round (1-indexed)
    pub table: u32,
    /// Home participant, or the resting participant on a bye
    pub home: String,
    /// Away participant (empty on a bye)
    pub away: String,
    /// Bye marker
    pub note: MatchNote,
}

impl Match {
    /// Create a regular pairing
    pub fn new(round: u32, table: u32, home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            round,
            table,
            home: home.into(),
            away: away.into(),
            note: MatchNote::None,
        }
    }

    /// Create a bye row for a resting participant
    pub fn bye(round: u32, table: u32, resting: impl Into<String>) -> Self {
        Self {
            round,
            table,
            home: resting.into(),
            away: String::new(),
            note: MatchNote::Bye,
        }
    }

    pub fn is_bye(&self) -> bool {
        self.note.is_bye()
    }

    /// Labels of the real participants seated at this table
    pub fn participants(&self) -> impl Iterator<Item = &str> {
        let away = (!self.is_bye()).then_some(self.away.as_str());
        std::iter::once(self.home.as_str()).chain(away)
    }

    /// Whether `label` plays (or rests) at this table
    pub fn involves(&self, label: &str) -> bool {
        self.participants().any(|p| p == label)
    }

    /// Second-leg counterpart: same table, sides reversed, round shifted.
    ///
    /// Bye rows keep the resting participant at home.
    pub(crate) fn mirrored(&self, round_offset: u32) -> Self {
        let round = self.round + round_offset;
        if self.is_bye() {
            Self::bye(round, self.table, self.home.clone())
        } else {
            Self::new(round, self.table, self.away.clone(), self.home.clone())
        }
    }
}

/// Parameters for fixture generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureConfig {
    /// Custom participant labels (must be exactly `n` when present)
    pub names: Option<Vec<String>>,

    /// Append a mirrored second leg
    pub double_round: bool,

    /// Swap home/away on even rounds
    pub balance_home_away: bool,

    /// Label rendered for the resting slot
    pub bye_label: String,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            names: None,
            double_round: false,
            balance_home_away: true,
            bye_label: DEFAULT_BYE_LABEL.to_string(),
        }
    }
}

impl FixtureConfig {
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_double_round(mut self, double_round: bool) -> Self {
        self.double_round = double_round;
        self
    }

    pub fn with_balance_home_away(mut self, balance: bool) -> Self {
        self.balance_home_away = balance;
        self
    }

    pub fn with_bye_label(mut self, label: impl Into<String>) -> Self {
        self.bye_label = label.into();
        self
    }
}

/// A generated round-robin schedule.
///
/// Matches are sorted by `(round, table)`. The value is never mutated after
/// generation; accessors hand out shared references only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fixture {
    pub(crate) participants: Vec<String>,
    pub(crate) matches: Vec<Match>,
    pub(crate) rounds_per_leg: u32,
    pub(crate) tables_per_round: u32,
    pub(crate) double_round: bool,
    pub(crate) bye_label: String,
}

impl Fixture {
    /// Real participants in their original order (no bye slot)
    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn into_matches(self) -> Vec<Match> {
        self.matches
    }

    /// Number of rows, bye rows included
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Rounds in a single leg
    pub fn rounds_per_leg(&self) -> u32 {
        self.rounds_per_leg
    }

    /// Rounds across both legs when double round-robin is enabled
    pub fn total_rounds(&self) -> u32 {
        if self.double_round {
            self.rounds_per_leg * 2
        } else {
            self.rounds_per_leg
        }
    }

    pub fn tables_per_round(&self) -> u32 {
        self.tables_per_round
    }

    pub fn is_double_round(&self) -> bool {
        self.double_round
    }

    pub fn bye_label(&self) -> &str {
        &self.bye_label
    }

    /// Matches of a single round, in table order
    pub fn round(&self, round: u32) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(move |m| m.round == round)
    }

    /// Bye rows across the whole fixture
    pub fn byes(&self) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(|m| m.is_bye())
    }
}

/// Rounds and tables per round a fixture of `n` participants will have.
///
/// Odd counts are padded with a bye slot before the shape is computed.
pub fn expected_shape(n: usize, double_round: bool) -> (u32, u32) {
    let padded = (n + n % 2) as u32;
    let rounds = padded.saturating_sub(1);
    let rounds = if double_round { rounds * 2 } else { rounds };
    (rounds, padded / 2)
}
