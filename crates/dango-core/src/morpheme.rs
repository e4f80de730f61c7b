//! Morphemes and the analyzer that produces them.
//!
//! Segmentation and dictionary lookup are the analyzer's job; this crate only
//! consumes its output through the [`Analyzer`] and [`Lexicon`] traits.

use std::borrow::Cow;

/// Number of POS levels that make up a feature key.
pub const FEATURE_LEVELS: usize = 4;

/// Separator between POS levels in a tag string.
pub const POS_SEPARATOR: char = ',';

/// Wildcard level used by the analyzer for "no further detail".
pub const WILDCARD: &str = "*";

/// A single morpheme as returned by the analyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme {
    pub surface: String,
    /// Reading in the analyzer's native kana (katakana for Sudachi).
    pub reading: String,
    pub dictionary_form: String,
    /// Word id of the dictionary-form entry, or `None` when this morpheme is
    /// already the dictionary form.
    pub dictionary_form_id: Option<u32>,
    /// Comma-joined tag string, e.g. `動詞,一般,*,*,五段-マ行,連用形-一般`.
    pub pos: String,
}

impl Morpheme {
    pub fn pos_path(&self) -> PosPath<'_> {
        PosPath::new(&self.pos)
    }
}

/// Borrowed view over a comma-joined POS tag string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PosPath<'a>(&'a str);

impl<'a> PosPath<'a> {
    pub fn new(pos: &'a str) -> Self {
        Self(pos)
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Levels in order. Empty levels are kept as they are, the same way
    /// [`PosPath::prefix`] keeps them; only an empty path has no levels.
    pub fn levels(&self) -> impl Iterator<Item = &'a str> {
        let path = self.0;
        (!path.is_empty())
            .then(|| path.split(POS_SEPARATOR))
            .into_iter()
            .flatten()
    }

    /// The first `n` levels as a slice of the tag string, or `None` if the
    /// path has fewer than `n` levels.
    pub fn prefix(&self, n: usize) -> Option<&'a str> {
        if n == 0 || self.0.is_empty() {
            return None;
        }
        match self.0.match_indices(POS_SEPARATOR).nth(n - 1) {
            Some((end, _)) => Some(&self.0[..end]),
            None if self.0.split(POS_SEPARATOR).count() == n => Some(self.0),
            None => None,
        }
    }

    /// The four-level key used for transition lookup. Paths shorter than four
    /// levels are padded with `*`.
    pub fn feature_key(&self) -> Cow<'a, str> {
        if let Some(key) = self.prefix(FEATURE_LEVELS) {
            return Cow::Borrowed(key);
        }
        let mut levels: Vec<&str> = self.levels().collect();
        levels.resize(FEATURE_LEVELS, WILDCARD);
        Cow::Owned(levels.join(","))
    }
}

/// Input to the aggregation state machine: anything that can report the
/// four-level feature key it should be matched on.
pub trait Features {
    fn feature_key(&self) -> Cow<'_, str>;
}

impl Features for Morpheme {
    fn feature_key(&self) -> Cow<'_, str> {
        self.pos_path().feature_key()
    }
}

impl<T: Features + ?Sized> Features for &T {
    fn feature_key(&self) -> Cow<'_, str> {
        (**self).feature_key()
    }
}

/// Identifier-keyed side table of the analyzer's dictionary.
pub trait Lexicon {
    /// Reading of the entry with the given word id, in the analyzer's native
    /// kana.
    fn reading(&self, word_id: u32) -> Option<String>;
}

/// A lexicon with no entries. Every lookup falls back to the morpheme's own
/// reading.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLexicon;

impl Lexicon for NoLexicon {
    fn reading(&self, _word_id: u32) -> Option<String> {
        None
    }
}

/// A morphological analyzer.
pub trait Analyzer: Lexicon {
    /// Segment `text` into morphemes covering the whole input in order.
    /// Empty input yields no morphemes.
    fn segment(&self, text: &str) -> Vec<Morpheme>;
}
