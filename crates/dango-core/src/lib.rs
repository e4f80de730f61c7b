//! Groups the morphemes produced by a Japanese morphological analyzer into
//! words suitable for language learners.
//!
//! An analyzer splits inflected verbs and adjectives into a stem followed by
//! auxiliary fragments (`読み` + `ませ` + `ん` + `でし` + `た`). The
//! [`fsm::StateMachine`] configured by [`rules`] fuses them back together, and
//! [`pos::PosClassifier`] maps each word onto a coarse [`pos::PartOfSpeech`].

pub mod aggregate;
pub mod fsm;
pub mod morpheme;
pub mod pos;
pub mod rules;
#[cfg(test)]
mod testutil;
pub mod tokenizer;
pub mod unicode;
pub mod word;

pub use aggregate::WordAggregator;
pub use morpheme::{Analyzer, Lexicon, Morpheme, NoLexicon, PosPath};
pub use pos::{PartOfSpeech, PosClassifier};
pub use tokenizer::Tokenizer;
pub use word::Word;
