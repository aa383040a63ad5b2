//! Fixture export formats.
//!
//! Renders a generated [`Fixture`](crate::Fixture) for people and spreadsheets:
//! - **CSV**: UTF-8 with byte-order mark, header `Ronda,Mesa,Local,Visita,Nota`
//! - **HTML**: standalone printable document, bye rows flagged
//! - **JSON**: the same rows as an array of objects
//! - **Table**: aligned plain text for terminals
//!
//! Bye rows carry the fixture's bye label in the `Nota` column.
//!
//! ## Example
//!
//! ```
//! use fixture::{FixtureConfig, generate_fixture};
//! use fixture::export::{ExportFormat, to_csv_bytes};
//!
//! let fixture = generate_fixture(3, &FixtureConfig::default()).unwrap();
//! let csv = to_csv_bytes(&fixture).unwrap();
//!
//! assert!(csv.starts_with(b"\xEF\xBB\xBF"));
//! assert_eq!(ExportFormat::Csv.file_name(&fixture), "briscas_fixture_3.csv");
//! ```

pub mod csv_writer;
pub mod errors;
pub mod format;
pub mod html;
pub mod rows;
pub mod text_table;

pub use csv_writer::{CSV_HEADER, UTF8_BOM, to_csv_bytes, write_csv};
pub use errors::{ExportError, ExportResult};
pub use format::{ExportFormat, export_file_stem};
pub use html::{to_html, to_html_now};
pub use rows::{FALLBACK_BYE_NOTE, FixtureRow, rows, to_json};
pub use text_table::to_text_table;
