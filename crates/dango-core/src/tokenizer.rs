use tracing::debug_span;

use crate::aggregate::WordAggregator;
use crate::morpheme::Analyzer;
use crate::rules::RulesError;
use crate::word::Word;

/// Splits text into learner-facing [`Word`]s: the analyzer segments, the
/// aggregator groups and classifies.
#[derive(Debug)]
pub struct Tokenizer<A> {
    analyzer: A,
    aggregator: WordAggregator,
}

impl<A: Analyzer> Tokenizer<A> {
    /// Tokenizer using the built-in aggregation rules.
    pub fn new(analyzer: A) -> Result<Self, RulesError> {
        Ok(Self::with_aggregator(
            analyzer,
            WordAggregator::with_default_rules()?,
        ))
    }

    pub fn with_aggregator(analyzer: A, aggregator: WordAggregator) -> Self {
        Self {
            analyzer,
            aggregator,
        }
    }

    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    pub fn aggregator(&self) -> &WordAggregator {
        &self.aggregator
    }

    /// Split `text` into words, in order. Empty text yields no words.
    pub fn tokenize(&self, text: &str) -> Vec<Word> {
        let _span = debug_span!("tokenize", len = text.len()).entered();
        let morphemes = self.analyzer.segment(text);
        self.aggregator.aggregate(morphemes, &self.analyzer)
    }
}
