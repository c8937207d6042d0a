//! Parser for the words.hk export: a nested JSON object map whose
//! pronunciations arrive decomposed into initial/nucleus/coda/tone
//! sub-fields and must be reassembled into jyutping syllables.

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use hanlex_core::parser::{FormatParser, ParsedEntry, RawRecord, read_source};
use hanlex_core::{Dictionary, LoadError};
use hanlex_types::Entry;

#[derive(Debug, Deserialize)]
struct RawWord {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    variants: Vec<RawVariant>,
    #[serde(default)]
    defs: Vec<RawDef>,
    #[serde(default)]
    labels: Vec<String>,
    #[serde(default)]
    poses: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawVariant {
    /// Written form.
    #[serde(default)]
    w: String,
    /// Pronunciation candidates, each a sequence of syllable records.
    #[serde(default)]
    p: Vec<Vec<RawSyllable>>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSyllable {
    #[serde(default)]
    initial: Option<String>,
    #[serde(default)]
    nucleus: Option<String>,
    #[serde(default)]
    coda: Option<String>,
    /// Tone tag; only its final character is the tone digit.
    #[serde(default)]
    tone: Option<String>,
}

/// Definition clauses per language, each a sequence of `[tag, text]`
/// items. `T` tags the primary gloss, `L` a usage example or label.
#[derive(Debug, Deserialize)]
struct RawDef {
    #[serde(default)]
    yue: Vec<Vec<(String, String)>>,
    #[serde(default)]
    eng: Vec<Vec<(String, String)>>,
}

pub struct WordsHkParser;

impl FormatParser for WordsHkParser {
    fn parse_file(&self, path: &Path) -> Result<Dictionary, LoadError> {
        let text = read_source(path)?;
        let data: Map<String, Value> = serde_json::from_str(&text)
            .map_err(|e| LoadError::InvalidJson(path.display().to_string(), e))?;

        let version = data
            .get("version")
            .and_then(Value::as_str)
            .unwrap_or("unknown");
        let mut dictionary = Dictionary::with_version(format!("WordsHK-{version}"));

        for (key, record) in &data {
            if key == "version" {
                continue;
            }
            for entry in self.parse_entry(RawRecord::Json(record)) {
                dictionary.add(entry);
            }
        }

        tracing::info!(
            "parsed {} words from {}",
            dictionary.word_count(),
            path.display()
        );
        Ok(dictionary)
    }

    fn parse_entry(&self, raw: RawRecord<'_>) -> Vec<ParsedEntry> {
        let RawRecord::Json(value) = raw else {
            return Vec::new();
        };
        let record: RawWord = match serde_json::from_value(value.clone()) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("skipping malformed record: {e}");
                return Vec::new();
            }
        };

        // The first variant supplies the written form and pronunciation.
        let Some(primary) = record.variants.first() else {
            return Vec::new();
        };
        if primary.w.is_empty() {
            return Vec::new();
        }
        let jyutping = reconstruct_jyutping(primary);
        if jyutping.is_empty() {
            return Vec::new();
        }
        let meaning = extract_meanings(&record.defs);
        if meaning.is_empty() {
            return Vec::new();
        }

        let mut notes = record.labels;
        notes.extend(record.poses);

        vec![ParsedEntry::Word(Entry {
            id: id_label(&record.id),
            content: primary.w.clone(),
            jyutping: vec![jyutping],
            meaning,
            notes,
            ..Entry::default()
        })]
    }
}

/// Rebuild one romanized reading from the first pronunciation candidate;
/// the remaining candidates are discarded.
fn reconstruct_jyutping(variant: &RawVariant) -> String {
    let Some(candidate) = variant.p.first() else {
        return String::new();
    };
    let syllables: Vec<String> = candidate.iter().filter_map(reconstruct_syllable).collect();
    syllables.join(" ")
}

/// initial + nucleus + coda with empty parts omitted, then the tone
/// digit, the whole lower-cased.
fn reconstruct_syllable(syllable: &RawSyllable) -> Option<String> {
    let mut assembled = String::new();
    for part in [&syllable.initial, &syllable.nucleus, &syllable.coda] {
        if let Some(part) = part {
            assembled.push_str(part);
        }
    }
    if let Some(tone) = &syllable.tone
        && let Some(digit) = tone.chars().last()
    {
        assembled.push(digit);
    }
    if assembled.is_empty() {
        None
    } else {
        Some(assembled.to_lowercase())
    }
}

/// Fold `T` glosses and `L` items of every def, Cantonese before English,
/// into one meaning sequence, splitting each gloss on `;`.
fn extract_meanings(defs: &[RawDef]) -> Vec<String> {
    let mut meanings = Vec::new();
    for def in defs {
        for clauses in [&def.yue, &def.eng] {
            for clause in clauses {
                for (tag, text) in clause {
                    if tag == "T" || tag == "L" {
                        meanings.extend(
                            text.split(';')
                                .map(str::trim)
                                .filter(|piece| !piece.is_empty())
                                .map(str::to_string),
                        );
                    }
                }
            }
        }
    }
    meanings
}

/// Source ids may be numbers; the canonical model keys ids as strings.
fn id_label(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}
