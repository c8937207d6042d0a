pub mod types;

pub use types::{CharacterEntry, Entry, OutputDictionary};
