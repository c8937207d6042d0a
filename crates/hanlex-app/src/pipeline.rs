//! Named ingestion pipelines: fixed, ordered source sequences feeding one
//! shared aggregate. Order matters; the merge engine's scalar fill and
//! sequence append both depend on arrival order.

use std::path::{Path, PathBuf};

use hanlex_core::{Dictionary, FormatParser, LoadError};
use hanlex_formats::{CantoDictParser, CedictParser, EntryShape, MakeMeAHanziParser, WordsHkParser};

use crate::output;

/// One ingestion source: which parser to apply to which file.
#[derive(Debug, Clone)]
pub enum Source {
    Cedict(PathBuf),
    CantoDict(PathBuf, EntryShape),
    MakeMeAHanzi(PathBuf),
    WordsHk(PathBuf),
}

impl Source {
    pub fn path(&self) -> &Path {
        match self {
            Source::Cedict(path)
            | Source::CantoDict(path, _)
            | Source::MakeMeAHanzi(path)
            | Source::WordsHk(path) => path,
        }
    }

    fn parse(&self) -> Result<Dictionary, LoadError> {
        match self {
            Source::Cedict(path) => CedictParser.parse_file(path),
            Source::CantoDict(path, shape) => CantoDictParser::new(*shape).parse_file(path),
            Source::MakeMeAHanzi(path) => MakeMeAHanziParser.parse_file(path),
            Source::WordsHk(path) => WordsHkParser.parse_file(path),
        }
    }
}

/// A named, ordered sequence of source ingestions producing one artifact.
pub struct Pipeline {
    name: &'static str,
    sources: Vec<Source>,
    output: PathBuf,
}

pub fn cantonese() -> Pipeline {
    Pipeline::new(
        "cantonese",
        vec![
            Source::Cedict("public/cccanto-webdist.txt".into()),
            Source::WordsHk("public/wordshk_data.json".into()),
            Source::CantoDict("public/detail-compounds.json".into(), EntryShape::Compound),
            Source::CantoDict("public/detail-characters.json".into(), EntryShape::Character),
            Source::MakeMeAHanzi("public/dictionary.txt".into()),
        ],
        "public/cantodict.json".into(),
    )
}

pub fn mandarin() -> Pipeline {
    Pipeline::new(
        "mandarin",
        vec![
            Source::Cedict("public/cedict_ts.u8".into()),
            Source::MakeMeAHanzi("public/dictionary.txt".into()),
        ],
        "public/chinese.json".into(),
    )
}

impl Pipeline {
    pub fn new(name: &'static str, sources: Vec<Source>, output: PathBuf) -> Self {
        Self {
            name,
            sources,
            output,
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// Run every source in order into one shared aggregate, then write
    /// the flattened artifact. A source that fails to load is skipped;
    /// the artifact still carries what the other sources contributed.
    pub fn run(&self) -> anyhow::Result<()> {
        tracing::info!("running {} pipeline", self.name);

        let mut aggregate = Dictionary::new();
        for source in &self.sources {
            match source.parse() {
                Ok(parsed) => aggregate.absorb(parsed),
                Err(e) => {
                    tracing::error!("skipping source {}: {e}", source.path().display());
                }
            }
        }

        output::write(aggregate, &self.output)
    }
}
