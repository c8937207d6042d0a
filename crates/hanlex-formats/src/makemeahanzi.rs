//! Parser for the MakeMeAHanzi character database: line-delimited JSON,
//! one character record per line.

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use hanlex_core::parser::{FormatParser, ParsedEntry, RawRecord, read_source};
use hanlex_core::{Dictionary, LoadError};
use hanlex_types::{CharacterEntry, Entry};

#[derive(Debug, Deserialize)]
struct RawCharacter {
    #[serde(default)]
    character: String,
    #[serde(default)]
    pinyin: Vec<String>,
    #[serde(default)]
    definition: String,
    #[serde(default)]
    decomposition: String,
    #[serde(default)]
    radical: String,
    #[serde(default)]
    etymology: Option<Map<String, Value>>,
}

pub struct MakeMeAHanziParser;

impl FormatParser for MakeMeAHanziParser {
    fn parse_file(&self, path: &Path) -> Result<Dictionary, LoadError> {
        let text = read_source(path)?;
        let mut dictionary = Dictionary::with_version("MakeMeAHanzi-1.0");

        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            for entry in self.parse_entry(RawRecord::Line(line)) {
                dictionary.add(entry);
            }
        }

        tracing::info!(
            "parsed {} characters from {}",
            dictionary.character_count(),
            path.display()
        );
        Ok(dictionary)
    }

    fn parse_entry(&self, raw: RawRecord<'_>) -> Vec<ParsedEntry> {
        let RawRecord::Line(line) = raw else {
            return Vec::new();
        };
        let record: RawCharacter = match serde_json::from_str(line) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("skipping malformed record: {e}");
                return Vec::new();
            }
        };
        if record.character.is_empty() {
            return Vec::new();
        }

        let meaning = if record.definition.is_empty() {
            Vec::new()
        } else {
            vec![record.definition]
        };

        vec![ParsedEntry::Character(CharacterEntry {
            entry: Entry {
                content: record.character,
                pinyin: record.pinyin,
                meaning,
                ..Entry::default()
            },
            decomposition: record.decomposition,
            radical: record.radical,
            etymology: record.etymology.unwrap_or_else(unset_etymology),
            ..CharacterEntry::default()
        })]
    }
}

/// Characters the source has no etymology for still carry the mapping,
/// with `type` and `hint` unset.
fn unset_etymology() -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("type".to_string(), Value::Null);
    map.insert("hint".to_string(), Value::Null);
    map
}
