use crate::morpheme::Morpheme;
use crate::pos::{PartOfSpeech, PosClassifier};
use crate::unicode::katakana_to_hiragana;

/// A learner-facing word: one aggregated group of morphemes.
///
/// The first morpheme anchors the word. Its dictionary form and tag path
/// determine [`Word::dictionary_form`] and [`Word::part_of_speech`]; later
/// morphemes only contribute to the surface and its reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    morphemes: Vec<Morpheme>,
    dictionary_form_reading: Option<String>,
    part_of_speech: PartOfSpeech,
}

impl Word {
    /// Build a word from a morpheme group and a precomputed reading of its
    /// dictionary form. The group's part of speech is classified once here.
    pub fn new(
        morphemes: Vec<Morpheme>,
        dictionary_form_reading: Option<String>,
        classifier: &PosClassifier,
    ) -> Self {
        let part_of_speech = morphemes
            .first()
            .map_or(PartOfSpeech::Unknown, |m| classifier.classify(m.pos_path()));
        Self {
            morphemes,
            dictionary_form_reading,
            part_of_speech,
        }
    }

    /// The morphemes the word is made up of.
    pub fn morphemes(&self) -> &[Morpheme] {
        &self.morphemes
    }

    pub fn into_morphemes(self) -> Vec<Morpheme> {
        self.morphemes
    }

    /// The surface representation of the word.
    pub fn surface(&self) -> String {
        self.morphemes.iter().map(|m| m.surface.as_str()).collect()
    }

    /// The hiragana reading of the surface representation.
    pub fn surface_reading(&self) -> String {
        let reading: String = self.morphemes.iter().map(|m| m.reading.as_str()).collect();
        katakana_to_hiragana(&reading)
    }

    /// The dictionary form of the first morpheme, or `""` for an empty word.
    pub fn dictionary_form(&self) -> &str {
        self.morphemes
            .first()
            .map_or("", |m| m.dictionary_form.as_str())
    }

    /// The hiragana reading of [`Word::dictionary_form`], if it was supplied.
    pub fn dictionary_form_reading(&self) -> Option<&str> {
        self.dictionary_form_reading.as_deref()
    }

    pub fn part_of_speech(&self) -> PartOfSpeech {
        self.part_of_speech
    }

    pub fn is_whitespace(&self) -> bool {
        self.part_of_speech == PartOfSpeech::Whitespace
    }
}
