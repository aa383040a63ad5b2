//! Export format selection and file naming.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::csv_writer::to_csv_bytes;
use super::errors::{ExportError, ExportResult};
use super::html::to_html_now;
use super::rows::to_json;
use super::text_table::to_text_table;
use crate::schedule::Fixture;

/// Output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Table,
    Csv,
    Html,
    Json,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Table => write!(f, "table"),
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Html => write!(f, "html"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" | "txt" | "text" => Ok(ExportFormat::Table),
            "csv" => Ok(ExportFormat::Csv),
            "html" | "htm" => Ok(ExportFormat::Html),
            "json" => Ok(ExportFormat::Json),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Table => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Html => "html",
            ExportFormat::Json => "json",
        }
    }

    /// Suggested download name, e.g. `briscas_fixture_6_ida_vuelta.csv`
    pub fn file_name(&self, fixture: &Fixture) -> String {
        format!(
            "{}.{}",
            export_file_stem(fixture.participant_count(), fixture.is_double_round()),
            self.extension()
        )
    }

    /// Render the fixture in this format
    pub fn render(&self, fixture: &Fixture) -> ExportResult<Vec<u8>> {
        match self {
            ExportFormat::Table => Ok(to_text_table(fixture).into_bytes()),
            ExportFormat::Csv => to_csv_bytes(fixture),
            ExportFormat::Html => Ok(to_html_now(fixture).into_bytes()),
            ExportFormat::Json => Ok(to_json(fixture)?.into_bytes()),
        }
    }
}

/// File stem for exports of `n` participants
pub fn export_file_stem(n: usize, double_round: bool) -> String {
    if double_round {
        format!("briscas_fixture_{n}_ida_vuelta")
    } else {
        format!("briscas_fixture_{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{FixtureConfig, generate_fixture};

    #[test]
    fn test_parse_formats() {
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("HTML".parse::<ExportFormat>().unwrap(), ExportFormat::Html);
        assert_eq!(" json ".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("text".parse::<ExportFormat>().unwrap(), ExportFormat::Table);
    }

    #[test]
    fn test_parse_unknown_format() {
        let err = "xlsx".parse::<ExportFormat>().unwrap_err();
        assert!(matches!(err, ExportError::UnknownFormat(ref f) if f == "xlsx"));
    }

    #[test]
    fn test_display_round_trips_parse() {
        for format in [
            ExportFormat::Table,
            ExportFormat::Csv,
            ExportFormat::Html,
            ExportFormat::Json,
        ] {
            assert_eq!(format.to_string().parse::<ExportFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_export_file_stem() {
        assert_eq!(export_file_stem(6, false), "briscas_fixture_6");
        assert_eq!(export_file_stem(6, true), "briscas_fixture_6_ida_vuelta");
    }

    #[test]
    fn test_file_name_uses_extension() {
        let config = FixtureConfig::default().with_double_round(true);
        let fixture = generate_fixture(5, &config).unwrap();
        assert_eq!(
            ExportFormat::Html.file_name(&fixture),
            "briscas_fixture_5_ida_vuelta.html"
        );
    }

    #[test]
    fn test_render_csv_matches_direct_export() {
        let fixture = generate_fixture(4, &FixtureConfig::default()).unwrap();
        assert_eq!(
            ExportFormat::Csv.render(&fixture).unwrap(),
            to_csv_bytes(&fixture).unwrap()
        );
    }
}
