//! Parser for the slash-delimited CC-CEDICT line format, including the
//! CC-Canto extension that carries `{...}` jyutping readings.

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use hanlex_core::parser::{FormatParser, ParsedEntry, RawRecord, read_source};
use hanlex_core::{Dictionary, LoadError};
use hanlex_types::Entry;

static PINYIN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.*?)\]").unwrap());
static JYUTPING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{(.*?)\}").unwrap());
static META_PAIR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#! (\w+)=(.+)").unwrap());

pub struct CedictParser;

impl CedictParser {
    /// Comment lines carry two metadata shapes: `# KEY VALUE` and
    /// `#! key=value`.
    fn extract_metadata(text: &str) -> HashMap<String, String> {
        let mut metadata = HashMap::new();
        for line in text.lines() {
            if !line.starts_with('#') {
                continue;
            }
            if let Some(caps) = META_PAIR_RE.captures(line) {
                metadata.insert(caps[1].trim().to_string(), caps[2].trim().to_string());
                continue;
            }
            if let Some(rest) = line.strip_prefix("# ")
                && let Some((key, value)) = rest.split_once(' ')
            {
                let key = key.trim();
                if !key.is_empty() {
                    metadata.insert(key.to_string(), value.trim().to_string());
                }
            }
        }
        metadata
    }

    fn version_label(metadata: &HashMap<String, String>) -> String {
        ["Version", "version"]
            .iter()
            .find_map(|key| metadata.get(*key).filter(|v| !v.is_empty()))
            .cloned()
            .unwrap_or_default()
    }

    /// Split `TRADITIONAL SIMPLIFIED REST`, collapsing whitespace runs.
    /// Lines with fewer than three parts are not entries.
    fn split_head(line: &str) -> Option<(&str, &str, &str)> {
        let (traditional, rest) = line.trim_start().split_once(char::is_whitespace)?;
        let (simplified, rest) = rest.trim_start().split_once(char::is_whitespace)?;
        let rest = rest.trim_start();
        if rest.is_empty() {
            return None;
        }
        Some((traditional, simplified, rest))
    }

    fn parse_line(line: &str) -> Option<Entry> {
        let (traditional, simplified, rest) = Self::split_head(line)?;
        let (phonetic, meaning_part) = rest.split_once('/')?;

        let pinyin = capture(&PINYIN_RE, phonetic);
        let jyutping = capture(&JYUTPING_RE, phonetic);

        let (gloss_text, comment) = match meaning_part.split_once('#') {
            Some((glosses, comment)) => (glosses, comment.trim()),
            None => (meaning_part, ""),
        };
        // `M:` is the source's in-band escape for a literal slash inside
        // word-decomposition glosses.
        let unescaped = gloss_text.replace("M:", "/");
        let meaning: Vec<String> = unescaped
            .trim_matches([' ', '/'])
            .split('/')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect();

        Some(Entry {
            content: traditional.to_string(),
            simplified: simplified.to_string(),
            pinyin: reading(pinyin),
            jyutping: reading(jyutping),
            meaning,
            notes: if comment.is_empty() {
                Vec::new()
            } else {
                vec![comment.to_string()]
            },
            ..Entry::default()
        })
    }
}

impl FormatParser for CedictParser {
    fn parse_file(&self, path: &Path) -> Result<Dictionary, LoadError> {
        let text = read_source(path)?;
        let metadata = Self::extract_metadata(&text);
        let mut dictionary = Dictionary::with_version(Self::version_label(&metadata));

        for line in text.lines() {
            for entry in self.parse_entry(RawRecord::Line(line)) {
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
        let RawRecord::Line(line) = raw else {
            return Vec::new();
        };
        if line.starts_with('#') || line.trim().is_empty() {
            return Vec::new();
        }
        match Self::parse_line(line) {
            Some(entry) if !entry.content.is_empty() => vec![ParsedEntry::Word(entry)],
            _ => Vec::new(),
        }
    }
}

fn capture(re: &Regex, text: &str) -> String {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

fn reading(text: String) -> Vec<String> {
    if text.is_empty() { Vec::new() } else { vec![text] }
}
