pub mod cantodict;
pub mod cedict;
pub mod makemeahanzi;
pub mod wordshk;

pub use cantodict::{CantoDictParser, EntryShape};
pub use cedict::CedictParser;
pub use makemeahanzi::MakeMeAHanziParser;
pub use wordshk::WordsHkParser;

#[cfg(test)]
mod tests;
