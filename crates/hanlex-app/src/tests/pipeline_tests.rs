use std::fs;
use std::path::Path;

use serde_json::{Value, json};

use hanlex_formats::EntryShape;

use crate::pipeline::{Pipeline, Source};

fn write_cedict(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("cedict.txt");
    fs::write(
        &path,
        "# Version 1.2\n愛 爱 [ai4] {oi3} /to love/\n你好 你好 [ni3 hao3] /hello/\n",
    )
    .unwrap();
    path
}

fn write_characters(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("detail-characters.json");
    let data = json!({
        "1": {"chinese": "水", "jyutping": "seoi2", "definition": "[1] water", "radical": "水", "stroke_count": 4}
    });
    fs::write(&path, serde_json::to_string(&data).unwrap()).unwrap();
    path
}

fn write_makemeahanzi(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("dictionary.txt");
    fs::write(
        &path,
        "{\"character\":\"水\",\"definition\":\"water, liquid\",\"pinyin\":[\"shuǐ\"],\"decomposition\":\"⿱丨水\",\"radical\":\"水\"}\n",
    )
    .unwrap();
    path
}

fn run_and_read(pipeline: Pipeline, output: &Path) -> Value {
    pipeline.run().unwrap();
    serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap()
}

#[test]
fn pipeline_merges_characters_across_sources() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.json");

    let pipeline = Pipeline::new(
        "test",
        vec![
            Source::CantoDict(write_characters(dir.path()), EntryShape::Character),
            Source::MakeMeAHanzi(write_makemeahanzi(dir.path())),
        ],
        output.clone(),
    );
    let artifact = run_and_read(pipeline, &output);

    let characters = artifact["characters"].as_array().unwrap();
    assert_eq!(characters.len(), 1);
    let water = &characters[0];
    assert_eq!(water["content"], "水");
    // First source filled the scalar; the later one only appended.
    assert_eq!(water["stroke_count"], "4");
    assert_eq!(water["decomposition"], "⿱丨水");
    assert_eq!(water["meaning"], json!(["water", "water, liquid"]));
}

#[test]
fn pipeline_version_comes_from_the_first_source() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.json");

    let pipeline = Pipeline::new(
        "test",
        vec![
            Source::Cedict(write_cedict(dir.path())),
            Source::MakeMeAHanzi(write_makemeahanzi(dir.path())),
        ],
        output.clone(),
    );
    let artifact = run_and_read(pipeline, &output);

    assert_eq!(artifact["version"], "1.2");
    assert_eq!(artifact["words"].as_array().unwrap().len(), 2);
}

#[test]
fn failed_source_does_not_abort_the_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.json");

    let pipeline = Pipeline::new(
        "test",
        vec![
            Source::Cedict(dir.path().join("no-such-file.u8")),
            Source::MakeMeAHanzi(write_makemeahanzi(dir.path())),
        ],
        output.clone(),
    );
    let artifact = run_and_read(pipeline, &output);

    assert_eq!(artifact["version"], "MakeMeAHanzi-1.0");
    assert!(artifact["words"].as_array().unwrap().is_empty());
    assert_eq!(artifact["characters"].as_array().unwrap().len(), 1);
}

#[test]
fn artifact_text_is_not_ascii_escaped() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.json");

    let pipeline = Pipeline::new(
        "test",
        vec![Source::Cedict(write_cedict(dir.path()))],
        output.clone(),
    );
    pipeline.run().unwrap();

    let raw = fs::read_to_string(&output).unwrap();
    assert!(raw.contains("愛"));
    assert!(!raw.contains("\\u"));
}
