//! Morpheme-to-word aggregation.

use tracing::{debug, debug_span};

use crate::fsm::StateMachine;
use crate::morpheme::{Lexicon, Morpheme};
use crate::pos::PosClassifier;
use crate::rules::{self, RulesError};
use crate::unicode::katakana_to_hiragana;
use crate::word::Word;

/// Groups morphemes into [`Word`]s with a configured state machine and
/// classifies each word.
///
/// Build once and reuse: neither `aggregate` nor `group` mutates the
/// aggregator, so a single instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct WordAggregator {
    machine: StateMachine,
    classifier: PosClassifier,
}

impl WordAggregator {
    pub fn new(machine: StateMachine, classifier: PosClassifier) -> Self {
        Self {
            machine,
            classifier,
        }
    }

    /// Aggregator for the built-in rule set and POS table.
    pub fn with_default_rules() -> Result<Self, RulesError> {
        Ok(Self::new(
            rules::default_state_machine()?,
            PosClassifier::default(),
        ))
    }

    pub fn machine(&self) -> &StateMachine {
        &self.machine
    }

    pub fn classifier(&self) -> &PosClassifier {
        &self.classifier
    }

    /// Split morphemes into word groups without building words.
    pub fn group(&self, morphemes: Vec<Morpheme>) -> Vec<Vec<Morpheme>> {
        self.machine.run(morphemes)
    }

    /// Group morphemes into words, resolving each word's dictionary-form
    /// reading through `lexicon`.
    pub fn aggregate(&self, morphemes: Vec<Morpheme>, lexicon: &dyn Lexicon) -> Vec<Word> {
        let _span = debug_span!("aggregate", morphemes = morphemes.len()).entered();
        let words: Vec<Word> = self
            .group(morphemes)
            .into_iter()
            .map(|group| {
                let reading = group.first().map(|m| dictionary_form_reading(m, lexicon));
                Word::new(group, reading, &self.classifier)
            })
            .collect();
        debug!(words = words.len());
        words
    }
}

/// Hiragana reading of a morpheme's dictionary form.
///
/// A morpheme without a dictionary-form id is its own dictionary form. For
/// the rest the analyzer only knows the reading through its lexicon; a
/// missing entry falls back to the morpheme's surface reading.
pub fn dictionary_form_reading(morpheme: &Morpheme, lexicon: &dyn Lexicon) -> String {
    let reading = match morpheme.dictionary_form_id {
        None => None,
        Some(id) => {
            let found = lexicon.reading(id);
            if found.is_none() {
                debug!(id, surface = %morpheme.surface, "dictionary form not in lexicon");
            }
            found
        }
    };
    katakana_to_hiragana(reading.as_deref().unwrap_or(&morpheme.reading))
}
