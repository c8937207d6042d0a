use std::path::Path;

use serde_json::Value;

use hanlex_types::{CharacterEntry, Entry};

use crate::dictionary::Dictionary;
use crate::error::LoadError;

/// One raw record exactly as its source file carries it.
pub enum RawRecord<'a> {
    /// A line of a line-oriented source (slash format, line-delimited JSON).
    Line(&'a str),
    /// One value of a JSON object map.
    Json(&'a Value),
}

/// A parsed record, routed to the words or characters collection.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedEntry {
    Word(Entry),
    Character(CharacterEntry),
}

/// The per-source parser contract.
///
/// Each of the four source formats implements this independently; the
/// orchestration layer selects an implementation by pipeline
/// configuration, never by inspecting the data.
pub trait FormatParser {
    /// Read and fully parse one source into a fresh dictionary holding
    /// only that source's entries, tagged with a source-specific version
    /// label. Malformed records are skipped with a diagnostic; a missing
    /// file or an unparseable container aborts with an error.
    fn parse_file(&self, path: &Path) -> Result<Dictionary, LoadError>;

    /// Pure transformation of one raw record into zero or more canonical
    /// entries. Returns an empty vec when the record lacks a usable
    /// identifying field, e.g. an empty content string.
    fn parse_entry(&self, raw: RawRecord<'_>) -> Vec<ParsedEntry>;
}

/// Read a source file, distinguishing a missing path from other io failures.
pub fn read_source(path: &Path) -> Result<String, LoadError> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(LoadError::FileNotFound(path.display().to_string()))
        }
        Err(e) => Err(LoadError::IoError(e)),
    }
}
