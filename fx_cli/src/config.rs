//! CLI configuration management.
//!
//! Consolidates environment variable reads and command-line overrides into a
//! validated configuration.

use fixture::{DEFAULT_BYE_LABEL, FixtureConfig, export::ExportFormat};
use std::collections::HashSet;
use std::path::PathBuf;

/// Values given on the command line; each one wins over its env variable
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub teams: Option<usize>,
    pub names: Option<String>,
    pub double_round: Option<bool>,
    pub balance_home_away: Option<bool>,
    pub bye_label: Option<String>,
    pub format: Option<ExportFormat>,
    pub output: Option<PathBuf>,
}

/// Complete CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Number of participants
    pub teams: usize,
    /// Custom participant labels
    pub names: Option<Vec<String>>,
    /// Generate home and away legs
    pub double_round: bool,
    /// Alternate home/away by round parity
    pub balance_home_away: bool,
    /// Label shown for resting rows
    pub bye_label: String,
    /// Output format
    pub format: ExportFormat,
    /// Output file or directory (stdout when absent)
    pub output: Option<PathBuf>,
}

impl CliConfig {
    /// Load configuration from environment variables, applying overrides
    ///
    /// # Errors
    ///
    /// Returns error if `FIXTURE_FORMAT` names an unknown format
    pub fn from_env(overrides: CliOverrides) -> Result<Self, ConfigError> {
        Self::from_lookup(overrides, |key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(overrides: CliOverrides, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = match overrides.format {
            Some(format) => format,
            None => match lookup("FIXTURE_FORMAT") {
                Some(raw) => raw.parse().map_err(|e| ConfigError::Invalid {
                    var: "FIXTURE_FORMAT".to_string(),
                    reason: format!("{e}"),
                })?,
                None => ExportFormat::default(),
            },
        };

        let names = overrides
            .names
            .or_else(|| lookup("FIXTURE_NAMES"))
            .map(|raw| parse_names(&raw))
            .filter(|names| !names.is_empty());

        // Team count defaults to the number of names, so `--names` alone suffices
        let default_teams = names.as_ref().map_or(6, Vec::len);

        Ok(CliConfig {
            teams: overrides
                .teams
                .unwrap_or_else(|| parse_or(&lookup, "FIXTURE_TEAMS", default_teams)),
            names,
            double_round: overrides
                .double_round
                .unwrap_or_else(|| parse_or(&lookup, "FIXTURE_DOUBLE_ROUND", false)),
            balance_home_away: overrides
                .balance_home_away
                .unwrap_or_else(|| parse_or(&lookup, "FIXTURE_BALANCE", true)),
            bye_label: overrides
                .bye_label
                .or_else(|| lookup("FIXTURE_BYE_LABEL"))
                .unwrap_or_else(|| DEFAULT_BYE_LABEL.to_string()),
            format,
            output: overrides
                .output
                .or_else(|| lookup("FIXTURE_OUTPUT").map(PathBuf::from)),
        })
    }

    /// Validate configuration after loading
    ///
    /// Participant count and name count are left to the generator, which
    /// reports them as validation errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bye_label.trim().is_empty() {
            return Err(ConfigError::Invalid {
                var: "FIXTURE_BYE_LABEL".to_string(),
                reason: "Must not be empty".to_string(),
            });
        }

        if let Some(names) = &self.names {
            let mut seen = HashSet::new();
            if let Some(duplicate) = names.iter().find(|&name| !seen.insert(name)) {
                return Err(ConfigError::Invalid {
                    var: "FIXTURE_NAMES".to_string(),
                    reason: format!("Duplicate name: {duplicate}"),
                });
            }

            if names.iter().any(|name| name == &self.bye_label) {
                return Err(ConfigError::Invalid {
                    var: "FIXTURE_BYE_LABEL".to_string(),
                    reason: format!("Collides with a participant name ({})", self.bye_label),
                });
            }
        }

        Ok(())
    }

    /// Generator parameters for this configuration
    pub fn fixture_config(&self) -> FixtureConfig {
        FixtureConfig {
            names: self.names.clone(),
            double_round: self.double_round,
            balance_home_away: self.balance_home_away,
            bye_label: self.bye_label.clone(),
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// Split a comma-separated name list, trimming and dropping empty entries
pub fn parse_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Helper to parse a variable with default fallback
fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
