use crate::domain::model::PersonName;
use crate::domain::ports::WriteStrategy;
use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_FILE: &str = "sorted-names-list.txt";

/// Selects which destination a write strategy targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStrategyKind {
    Console,
    File,
}

impl WriteStrategyKind {
    /// Maps a config tag onto a destination. Unrecognized tags fall back to
    /// `File`; the fallback is part of the contract, not an accident.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "console" => WriteStrategyKind::Console,
            _ => WriteStrategyKind::File,
        }
    }
}

pub fn create_write_strategy(
    kind: WriteStrategyKind,
    output_path: Option<&str>,
) -> Box<dyn WriteStrategy> {
    match kind {
        WriteStrategyKind::Console => Box::new(ConsoleWriteStrategy),
        WriteStrategyKind::File => Box::new(FileWriteStrategy::new(
            output_path.unwrap_or(DEFAULT_OUTPUT_FILE),
        )),
    }
}

/// Writes each name to standard output, one per line.
pub struct ConsoleWriteStrategy;

impl WriteStrategy for ConsoleWriteStrategy {
    fn write(&self, names: &[PersonName]) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for name in names {
            writeln!(out, "{}", name)?;
        }
        Ok(())
    }
}

/// Writes each name to a file, one per line, truncating any existing
/// content. The file is created even for an empty batch. Parent directories
/// are not created, so an invalid path surfaces as an IO error.
pub struct FileWriteStrategy {
    path: PathBuf,
}

impl FileWriteStrategy {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WriteStrategy for FileWriteStrategy {
    fn write(&self, names: &[PersonName]) -> Result<()> {
        let mut contents = String::new();
        for name in names {
            contents.push_str(&name.to_string());
            contents.push('\n');
        }
        fs::write(&self.path, contents)?;
        tracing::debug!("Wrote {} names to {}", names.len(), self.path.display());
        Ok(())
    }
}
