//! Parser for CantoDict-style flat JSON dumps: one top-level object whose
//! values are character or compound records.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use hanlex_core::parser::{FormatParser, ParsedEntry, RawRecord, read_source};
use hanlex_core::{Dictionary, LoadError};
use hanlex_types::{CharacterEntry, Entry};

/// `[1] first sense [2] second sense` markers inside a definition field.
static SENSE_MARKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\d+\]").unwrap());

/// How records are routed to the character- or compound-shaped parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryShape {
    /// Route by the presence of `stroke_count`/`radical` fields.
    Auto,
    Character,
    Compound,
}

pub struct CantoDictParser {
    shape: EntryShape,
}

impl CantoDictParser {
    pub fn new(shape: EntryShape) -> Self {
        Self { shape }
    }

    fn is_character(&self, record: &Map<String, Value>) -> bool {
        match self.shape {
            EntryShape::Character => true,
            EntryShape::Compound => false,
            EntryShape::Auto => {
                record.contains_key("stroke_count") || record.contains_key("radical")
            }
        }
    }

    fn parse_compound(record: &Map<String, Value>, content: String) -> Entry {
        let notes = text_field(record, "notes");
        Entry {
            content,
            pinyin: split_readings(&text_field(record, "pinyin")),
            jyutping: split_readings(&text_field(record, "jyutping")),
            meaning: split_senses(&text_field(record, "definition")),
            notes: if notes.is_empty() { Vec::new() } else { vec![notes] },
            ..Entry::default()
        }
    }

    fn parse_character(record: &Map<String, Value>, content: String) -> CharacterEntry {
        CharacterEntry {
            entry: Self::parse_compound(record, content),
            radical: text_field(record, "radical"),
            stroke_count: text_field(record, "stroke_count"),
            variants: list_field(record, "variants"),
            similar: list_field(record, "similar"),
            freq: text_field(record, "google_frequency"),
            ..CharacterEntry::default()
        }
    }
}

impl FormatParser for CantoDictParser {
    fn parse_file(&self, path: &Path) -> Result<Dictionary, LoadError> {
        let text = read_source(path)?;
        let data: Map<String, Value> = serde_json::from_str(&text)
            .map_err(|e| LoadError::InvalidJson(path.display().to_string(), e))?;

        let mut dictionary = Dictionary::with_version("CantoDict-1.0");
        for record in data.values() {
            for entry in self.parse_entry(RawRecord::Json(record)) {
                dictionary.add(entry);
            }
        }

        tracing::info!(
            "parsed {} words and {} characters from {}",
            dictionary.word_count(),
            dictionary.character_count(),
            path.display()
        );
        Ok(dictionary)
    }

    fn parse_entry(&self, raw: RawRecord<'_>) -> Vec<ParsedEntry> {
        let RawRecord::Json(value) = raw else {
            return Vec::new();
        };
        let Some(record) = value.as_object() else {
            tracing::warn!("skipping non-object record");
            return Vec::new();
        };
        let content = text_field(record, "chinese");
        if content.is_empty() {
            return Vec::new();
        }
        if self.is_character(record) {
            vec![ParsedEntry::Character(Self::parse_character(
                record, content,
            ))]
        } else {
            vec![ParsedEntry::Word(Self::parse_compound(record, content))]
        }
    }
}

/// String-valued field, with numbers coerced to their display form.
fn text_field(record: &Map<String, Value>, key: &str) -> String {
    match record.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn list_field(record: &Map<String, Value>, key: &str) -> Vec<String> {
    record
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// The source joins multiple readings with spaces in one string.
fn split_readings(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

/// Fan a bracket-tagged definition out into separate meaning entries.
fn split_senses(raw: &str) -> Vec<String> {
    SENSE_MARKER_RE
        .split(raw)
        .map(str::trim)
        .filter(|sense| !sense.is_empty())
        .map(str::to_string)
        .collect()
}
