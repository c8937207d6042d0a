use std::fs;

use serde_json::json;

use hanlex_core::LoadError;
use hanlex_core::parser::{FormatParser, ParsedEntry, RawRecord};

use crate::{CantoDictParser, EntryShape};

#[test]
fn auto_mode_routes_by_character_fields() {
    let parser = CantoDictParser::new(EntryShape::Auto);

    let character = json!({"chinese": "水", "radical": "水"});
    assert!(matches!(
        parser.parse_entry(RawRecord::Json(&character)).as_slice(),
        [ParsedEntry::Character(_)]
    ));

    let compound = json!({"chinese": "你好", "definition": "hello"});
    assert!(matches!(
        parser.parse_entry(RawRecord::Json(&compound)).as_slice(),
        [ParsedEntry::Word(_)]
    ));
}

#[test]
fn explicit_shape_overrides_detection() {
    let parser = CantoDictParser::new(EntryShape::Compound);
    let record = json!({"chinese": "水", "radical": "水", "stroke_count": 4});

    assert!(matches!(
        parser.parse_entry(RawRecord::Json(&record)).as_slice(),
        [ParsedEntry::Word(_)]
    ));
}

#[test]
fn character_records_carry_structural_fields() {
    let parser = CantoDictParser::new(EntryShape::Character);
    let record = json!({
        "chinese": "水",
        "pinyin": "shui3",
        "jyutping": "seoi2",
        "definition": "[1] water [2] liquid",
        "radical": "水",
        "stroke_count": 4,
        "variants": ["氵"],
        "similar": ["永"],
        "google_frequency": 123456,
        "notes": "common"
    });

    let entries = parser.parse_entry(RawRecord::Json(&record));
    let [ParsedEntry::Character(character)] = entries.as_slice() else {
        panic!("expected one character");
    };
    assert_eq!(character.entry.content, "水");
    assert_eq!(character.entry.pinyin, vec!["shui3"]);
    assert_eq!(character.entry.jyutping, vec!["seoi2"]);
    assert_eq!(character.entry.meaning, vec!["water", "liquid"]);
    assert_eq!(character.entry.notes, vec!["common"]);
    assert_eq!(character.radical, "水");
    assert_eq!(character.stroke_count, "4");
    assert_eq!(character.variants, vec!["氵"]);
    assert_eq!(character.similar, vec!["永"]);
    assert_eq!(character.freq, "123456");
}

#[test]
fn whitespace_joined_readings_become_sequences() {
    let parser = CantoDictParser::new(EntryShape::Compound);
    let record = json!({"chinese": "唔該", "jyutping": "m4 goi1", "definition": "please"});

    let parsed = parser.parse_entry(RawRecord::Json(&record));
    let [ParsedEntry::Word(word)] = parsed.as_slice()
    else {
        panic!("expected one word");
    };
    assert_eq!(word.jyutping, vec!["m4", "goi1"]);
}

#[test]
fn records_without_content_are_dropped() {
    let parser = CantoDictParser::new(EntryShape::Auto);
    let record = json!({"definition": "orphan gloss"});
    assert!(parser.parse_entry(RawRecord::Json(&record)).is_empty());
}

#[test]
fn parse_file_splits_words_and_characters() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("detail.json");
    let data = json!({
        "1": {"chinese": "水", "radical": "水", "stroke_count": 4},
        "2": {"chinese": "你好", "definition": "hello"}
    });
    fs::write(&path, serde_json::to_string(&data).unwrap()).unwrap();

    let dictionary = CantoDictParser::new(EntryShape::Auto)
        .parse_file(&path)
        .unwrap();
    assert_eq!(dictionary.version, "CantoDict-1.0");
    assert_eq!(dictionary.character_count(), 1);
    assert_eq!(dictionary.word_count(), 1);
}

#[test]
fn parse_file_rejects_invalid_container() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("detail.json");
    fs::write(&path, "not json").unwrap();

    let result = CantoDictParser::new(EntryShape::Auto).parse_file(&path);
    assert!(matches!(result, Err(LoadError::InvalidJson(_, _))));
}
