//! CSV export.

use std::io::Write;

use csv::{Terminator, WriterBuilder};

use super::errors::ExportResult;
use super::rows::rows;
use crate::schedule::Fixture;

/// Column header written before any row
pub const CSV_HEADER: [&str; 5] = ["Ronda", "Mesa", "Local", "Visita", "Nota"];

/// Byte-order mark so spreadsheet tools detect UTF-8
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Render the fixture as CSV bytes prefixed with a UTF-8 byte-order mark
pub fn to_csv_bytes(fixture: &Fixture) -> ExportResult<Vec<u8>> {
    let mut buffer = UTF8_BOM.to_vec();
    write_csv(fixture, &mut buffer)?;
    Ok(buffer)
}

/// Write header and rows to `writer` (no byte-order mark).
///
/// Records end in CRLF and fields are quoted only when needed.
pub fn write_csv<W: Write>(fixture: &Fixture, writer: W) -> ExportResult<()> {
    let mut csv = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    csv.write_record(CSV_HEADER)?;
    for row in rows(fixture) {
        csv.write_record([
            row.round.to_string().as_str(),
            row.table.to_string().as_str(),
            row.home,
            row.away,
            row.note,
        ])?;
    }
    csv.flush()?;

    Ok(())
}
