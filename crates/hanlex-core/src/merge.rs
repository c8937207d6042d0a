//! Field-policy-driven merge of two character entries sharing the same
//! written form.

use std::collections::HashSet;
use std::mem;

use serde_json::{Map, Value};

use hanlex_types::CharacterEntry;

/// The mergeable attributes of a character entry, applied in this order.
/// `id` and `content` are deliberately absent and never change.
#[derive(Debug, Clone, Copy)]
enum MergeField {
    Etymology,
    Decomposition,
    Meaning,
    Pinyin,
    Jyutping,
    Notes,
    Radical,
    StrokeCount,
    Variants,
    Similar,
}

const MERGE_FIELDS: &[MergeField] = &[
    MergeField::Etymology,
    MergeField::Decomposition,
    MergeField::Meaning,
    MergeField::Pinyin,
    MergeField::Jyutping,
    MergeField::Notes,
    MergeField::Radical,
    MergeField::StrokeCount,
    MergeField::Variants,
    MergeField::Similar,
];

/// Combine `incoming` into `existing` and return the updated record.
///
/// Policy per field kind: sequences append then dedup keeping the first
/// occurrence, mappings shallow-merge with incoming keys overwriting,
/// scalars fill only while the existing value is empty. Not commutative;
/// callers rely on source arrival order.
pub fn resolve_same(existing: CharacterEntry, incoming: CharacterEntry) -> CharacterEntry {
    let mut merged = existing;
    let mut incoming = incoming;

    for field in MERGE_FIELDS {
        match field {
            MergeField::Etymology => {
                merge_mapping(&mut merged.etymology, mem::take(&mut incoming.etymology))
            }
            MergeField::Decomposition => merge_scalar(
                &mut merged.decomposition,
                mem::take(&mut incoming.decomposition),
            ),
            MergeField::Meaning => merge_sequence(
                &mut merged.entry.meaning,
                mem::take(&mut incoming.entry.meaning),
            ),
            MergeField::Pinyin => merge_sequence(
                &mut merged.entry.pinyin,
                mem::take(&mut incoming.entry.pinyin),
            ),
            MergeField::Jyutping => merge_sequence(
                &mut merged.entry.jyutping,
                mem::take(&mut incoming.entry.jyutping),
            ),
            MergeField::Notes => merge_sequence(
                &mut merged.entry.notes,
                mem::take(&mut incoming.entry.notes),
            ),
            MergeField::Radical => {
                merge_scalar(&mut merged.radical, mem::take(&mut incoming.radical))
            }
            MergeField::StrokeCount => merge_scalar(
                &mut merged.stroke_count,
                mem::take(&mut incoming.stroke_count),
            ),
            MergeField::Variants => {
                merge_sequence(&mut merged.variants, mem::take(&mut incoming.variants))
            }
            MergeField::Similar => {
                merge_sequence(&mut merged.similar, mem::take(&mut incoming.similar))
            }
        }
    }

    merged
}

/// Empty existing sequence is replaced outright; otherwise append, then
/// keep only the first instance of each distinct value.
fn merge_sequence(existing: &mut Vec<String>, incoming: Vec<String>) {
    if existing.is_empty() {
        *existing = incoming;
        return;
    }
    existing.extend(incoming);
    let mut seen = HashSet::new();
    existing.retain(|value| seen.insert(value.clone()));
}

/// Shallow merge; keys present on both sides take the incoming value.
fn merge_mapping(existing: &mut Map<String, Value>, incoming: Map<String, Value>) {
    if existing.is_empty() {
        *existing = incoming;
        return;
    }
    for (key, value) in incoming {
        existing.insert(key, value);
    }
}

/// First source wins: replace only while the existing value is empty.
fn merge_scalar(existing: &mut String, incoming: String) {
    if existing.is_empty() {
        *existing = incoming;
    }
}
