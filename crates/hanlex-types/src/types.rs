use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One canonical word/compound record.
///
/// Constructed by parsers with a struct literal over `..Entry::default()`;
/// every field defaults to empty. An empty `id` means the aggregate
/// allocates one at insertion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    /// Traditional/primary written form. The dedup key for characters.
    pub content: String,
    /// Alternate written form, may be empty.
    pub simplified: String,
    pub pinyin: Vec<String>,
    pub jyutping: Vec<String>,
    /// Ordered glosses; order is significant and preserved across merges.
    pub meaning: Vec<String>,
    pub notes: Vec<String>,
}

/// Canonical record for a single ideograph, carrying structural and
/// etymological attributes beyond a plain [`Entry`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterEntry {
    #[serde(flatten)]
    pub entry: Entry,
    /// Ideographic structural breakdown string.
    pub decomposition: String,
    pub radical: String,
    /// Open mapping; carries at least `type` and `hint` keys when the
    /// source supplies etymology data.
    pub etymology: Map<String, Value>,
    /// Kept as text; sources disagree on whether this is a number.
    pub stroke_count: String,
    pub variants: Vec<String>,
    pub similar: Vec<String>,
    /// Corpus frequency, unit depends on the source.
    pub freq: String,
}

/// The serialized artifact shape: one flattened dictionary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputDictionary {
    pub version: String,
    pub words: Vec<Entry>,
    pub characters: Vec<CharacterEntry>,
}
