//! Coarse part-of-speech categories and the longest-prefix classifier that
//! maps Sudachi tag paths onto them.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::morpheme::{PosPath, POS_SEPARATOR};

/// Longest tag prefix the classifier distinguishes.
pub const MAX_PREFIX_LEVELS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartOfSpeech {
    AdjectivalNoun,
    Adjective,
    Adverb,
    AuxiliaryVerb,
    Conjunction,
    Counter,
    Interjection,
    Name,
    Noun,
    Number,
    Particle,
    PlaceName,
    Prefix,
    PreNounAdjectival,
    Pronoun,
    Suffix,
    Symbol,
    Unknown,
    Verb,
    Whitespace,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 20] = [
        Self::AdjectivalNoun,
        Self::Adjective,
        Self::Adverb,
        Self::AuxiliaryVerb,
        Self::Conjunction,
        Self::Counter,
        Self::Interjection,
        Self::Name,
        Self::Noun,
        Self::Number,
        Self::Particle,
        Self::PlaceName,
        Self::Prefix,
        Self::PreNounAdjectival,
        Self::Pronoun,
        Self::Suffix,
        Self::Symbol,
        Self::Unknown,
        Self::Verb,
        Self::Whitespace,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AdjectivalNoun => "ADJECTIVAL_NOUN",
            Self::Adjective => "ADJECTIVE",
            Self::Adverb => "ADVERB",
            Self::AuxiliaryVerb => "AUXILIARY_VERB",
            Self::Conjunction => "CONJUNCTION",
            Self::Counter => "COUNTER",
            Self::Interjection => "INTERJECTION",
            Self::Name => "NAME",
            Self::Noun => "NOUN",
            Self::Number => "NUMBER",
            Self::Particle => "PARTICLE",
            Self::PlaceName => "PLACE_NAME",
            Self::Prefix => "PREFIX",
            Self::PreNounAdjectival => "PRE_NOUN_ADJECTIVAL",
            Self::Pronoun => "PRONOUN",
            Self::Suffix => "SUFFIX",
            Self::Symbol => "SYMBOL",
            Self::Unknown => "UNKNOWN",
            Self::Verb => "VERB",
            Self::Whitespace => "WHITESPACE",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartOfSpeech {
    type Err = PosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| PosError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PosError {
    #[error("unknown part-of-speech category: {0}")]
    UnknownCategory(String),
    #[error("prefix {prefix:?} must have between 1 and 3 non-empty levels")]
    InvalidPrefix { prefix: Vec<String> },
    #[error("duplicate prefix {0:?}")]
    DuplicatePrefix(String),
}

/// Built-in mapping from Sudachi tag prefixes to categories. Broad one-level
/// entries coexist with narrower overrides for the same family.
const SUDACHI_POS_TABLE: &[(&[&str], PartOfSpeech)] = &[
    (&["代名詞"], PartOfSpeech::Pronoun),
    (&["副詞"], PartOfSpeech::Adverb),
    // The okurigana of an inflection rather than auxiliary verbs proper. They
    // are normally absorbed by aggregation.
    (&["助動詞"], PartOfSpeech::AuxiliaryVerb),
    (&["助詞"], PartOfSpeech::Particle),
    (&["動詞"], PartOfSpeech::Verb),
    (&["名詞"], PartOfSpeech::Noun),
    (&["名詞", "固有名詞", "人名"], PartOfSpeech::Name),
    (&["名詞", "固有名詞", "地名"], PartOfSpeech::PlaceName),
    (&["名詞", "数詞"], PartOfSpeech::Number),
    (&["名詞", "普通名詞", "助数詞可能"], PartOfSpeech::Counter),
    (&["形容詞"], PartOfSpeech::Adjective),
    (&["形状詞"], PartOfSpeech::AdjectivalNoun),
    (&["感動詞"], PartOfSpeech::Interjection),
    (&["接尾辞"], PartOfSpeech::Suffix),
    (&["接尾辞", "名詞的", "助数詞"], PartOfSpeech::Counter),
    (&["接続詞"], PartOfSpeech::Conjunction),
    (&["接頭辞"], PartOfSpeech::Prefix),
    (&["空白"], PartOfSpeech::Whitespace),
    (&["補助記号"], PartOfSpeech::Symbol),
    (&["記号"], PartOfSpeech::Symbol),
    (&["連体詞"], PartOfSpeech::PreNounAdjectival),
];

/// Longest-prefix classifier from tag paths to [`PartOfSpeech`].
///
/// Prefixes are stored comma-joined so a lookup tries at most
/// [`MAX_PREFIX_LEVELS`] slices of the input path, longest first, without
/// allocating.
#[derive(Debug, Clone)]
pub struct PosClassifier {
    prefixes: HashMap<String, PartOfSpeech>,
}

impl PosClassifier {
    pub fn new<I, P, S>(entries: I) -> Result<Self, PosError>
    where
        I: IntoIterator<Item = (P, PartOfSpeech)>,
        P: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut prefixes = HashMap::new();
        for (path, pos) in entries {
            let levels: Vec<String> = path.into_iter().map(|s| s.as_ref().to_string()).collect();
            let valid = (1..=MAX_PREFIX_LEVELS).contains(&levels.len())
                && levels
                    .iter()
                    .all(|l| !l.is_empty() && !l.contains(POS_SEPARATOR));
            if !valid {
                return Err(PosError::InvalidPrefix { prefix: levels });
            }
            let key = levels.join(",");
            if prefixes.insert(key.clone(), pos).is_some() {
                return Err(PosError::DuplicatePrefix(key));
            }
        }
        Ok(Self { prefixes })
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Classify a tag path. Levels are compared literally; the longest
    /// registered prefix wins and paths with no registered prefix are
    /// [`PartOfSpeech::Unknown`].
    pub fn classify(&self, path: PosPath<'_>) -> PartOfSpeech {
        (1..=MAX_PREFIX_LEVELS)
            .rev()
            .filter_map(|n| path.prefix(n))
            .find_map(|key| self.prefixes.get(key).copied())
            .unwrap_or(PartOfSpeech::Unknown)
    }
}

impl Default for PosClassifier {
    fn default() -> Self {
        let prefixes = SUDACHI_POS_TABLE
            .iter()
            .map(|(path, pos)| (path.join(","), *pos))
            .collect();
        Self { prefixes }
    }
}
