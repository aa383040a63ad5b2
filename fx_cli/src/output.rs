//! Output destination handling.

use anyhow::{Context, Result};
use fixture::{Fixture, export::ExportFormat};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where rendered bytes go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// Resolve the configured output path.
    ///
    /// An existing directory receives the suggested file name for the fixture.
    pub fn resolve(output: Option<&Path>, fixture: &Fixture, format: ExportFormat) -> Self {
        match output {
            None => Destination::Stdout,
            Some(path) if path.is_dir() => Destination::File(path.join(format.file_name(fixture))),
            Some(path) => Destination::File(path.to_path_buf()),
        }
    }

    pub fn write(&self, bytes: &[u8]) -> Result<()> {
        match self {
            Destination::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(bytes).context("Failed to write to stdout")?;
                stdout.flush().context("Failed to flush stdout")
            }
            Destination::File(path) => std::fs::write(path, bytes)
                .with_context(|| format!("Failed to write {}", path.display())),
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Destination::Stdout => write!(f, "stdout"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}
