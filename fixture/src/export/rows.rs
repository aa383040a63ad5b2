//! Flat row view shared by every export format.

use serde::Serialize;

use super::errors::ExportResult;
use crate::schedule::Fixture;

/// One printable row, keyed by the column names used in exports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FixtureRow<'a> {
    #[serde(rename = "Ronda")]
    pub round: u32,
    #[serde(rename = "Mesa")]
    pub table: u32,
    #[serde(rename = "Local")]
    pub home: &'a str,
    #[serde(rename = "Visita")]
    pub away: &'a str,
    #[serde(rename = "Nota")]
    pub note: &'a str,
    #[serde(skip)]
    pub bye: bool,
}

impl FixtureRow<'_> {
    pub fn is_bye(&self) -> bool {
        self.bye
    }
}

/// Note written on bye rows when the fixture's bye label is blank
pub const FALLBACK_BYE_NOTE: &str = "BYE";

/// Rows in fixture order; bye rows carry the fixture's bye label as note
pub fn rows(fixture: &Fixture) -> impl Iterator<Item = FixtureRow<'_>> {
    let bye_note = match fixture.bye_label() {
        label if label.trim().is_empty() => FALLBACK_BYE_NOTE,
        label => label,
    };
    fixture.matches().iter().map(move |m| FixtureRow {
        round: m.round,
        table: m.table,
        home: &m.home,
        away: &m.away,
        note: if m.is_bye() { bye_note } else { "" },
        bye: m.is_bye(),
    })
}

/// Pretty-printed JSON array of rows
pub fn to_json(fixture: &Fixture) -> ExportResult<String> {
    let rows: Vec<FixtureRow<'_>> = rows(fixture).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{FixtureConfig, generate_fixture};

    #[test]
    fn test_bye_rows_use_bye_label() {
        let config = FixtureConfig::default().with_bye_label("LIBRE");
        let fixture = generate_fixture(3, &config).unwrap();
        let first = rows(&fixture).next().unwrap();
        assert_eq!(first.home, "E1");
        assert_eq!(first.away, "");
        assert_eq!(first.note, "LIBRE");
        assert!(first.is_bye());
    }

    #[test]
    fn test_blank_bye_label_still_marks_byes() {
        let config = FixtureConfig::default().with_bye_label("");
        let fixture = generate_fixture(3, &config).unwrap();
        let byes: Vec<FixtureRow<'_>> = rows(&fixture).filter(|row| row.is_bye()).collect();
        assert_eq!(byes.len(), fixture.byes().count());
        assert_eq!(byes.len(), 3);
        assert!(byes.iter().all(|row| row.note == FALLBACK_BYE_NOTE));
    }

    #[test]
    fn test_regular_rows_have_empty_note() {
        let fixture = generate_fixture(4, &FixtureConfig::default()).unwrap();
        assert!(rows(&fixture).all(|row| row.note.is_empty() && !row.is_bye()));
    }

    #[test]
    fn test_json_uses_column_names() {
        let fixture = generate_fixture(2, &FixtureConfig::default()).unwrap();
        let json = to_json(&fixture).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"Ronda": 1, "Mesa": 1, "Local": "E1", "Visita": "E2", "Nota": ""}
            ])
        );
    }
}
