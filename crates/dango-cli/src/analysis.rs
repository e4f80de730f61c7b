//! Reader for pre-analyzed text.
//!
//! One morpheme per line, tab-separated:
//!
//! ```text
//! surface  pos  normalized  dictionary_form  reading  [extra...]
//! ```
//!
//! The first five fields are the ones `sudachi -a` prints. `pos` is the
//! comma-joined Sudachi tag string. Trailing fields are ignored except one
//! of the form `dictionary_form_word_id=<n>`, which names the lexicon entry
//! of the dictionary form. Sudachi's own trailing columns (dictionary id,
//! synonym groups, `(OOV)`) carry no word id and are skipped.
//!
//! Without that field, or with `dictionary_form_word_id=-1`, the morpheme is
//! already its own dictionary form. A line consisting of `EOS` ends a
//! sentence. Blank lines and lines starting with `#` are skipped.

use std::io::{self, BufRead};

use dango_core::Morpheme;

const EOS: &str = "EOS";
const MIN_FIELDS: usize = 5;
const WORD_ID_KEY: &str = "dictionary_form_word_id=";

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: expected at least 5 tab-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: empty part-of-speech")]
    EmptyPos { line: usize },

    #[error("line {line}: invalid dictionary form word id {value:?}")]
    InvalidWordId { line: usize, value: String },
}

/// Parse one morpheme line. `line_no` is 1-based and only used in errors.
pub fn parse_line(line: &str, line_no: usize) -> Result<Morpheme, AnalysisError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < MIN_FIELDS {
        return Err(AnalysisError::FieldCount {
            line: line_no,
            found: fields.len(),
        });
    }
    if fields[1].is_empty() {
        return Err(AnalysisError::EmptyPos { line: line_no });
    }

    let word_id = fields[MIN_FIELDS..]
        .iter()
        .find_map(|f| f.trim().strip_prefix(WORD_ID_KEY));
    let dictionary_form_id = match word_id {
        None | Some("-1") => None,
        Some(value) => Some(value.parse::<u32>().map_err(|_| {
            AnalysisError::InvalidWordId {
                line: line_no,
                value: value.to_string(),
            }
        })?),
    };

    Ok(Morpheme {
        surface: fields[0].to_string(),
        pos: fields[1].to_string(),
        dictionary_form: fields[3].to_string(),
        reading: fields[4].to_string(),
        dictionary_form_id,
    })
}

/// Iterator over the sentences of an analysis stream.
///
/// A trailing sentence without a closing `EOS` is still yielded. Two `EOS`
/// lines in a row yield an empty sentence, so blank input lines survive the
/// analyzer round trip.
pub struct Sentences<R> {
    lines: io::Lines<R>,
    line_no: usize,
    done: bool,
}

impl<R: BufRead> Sentences<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for Sentences<R> {
    type Item = Result<Vec<Morpheme>, AnalysisError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut sentence = Vec::new();
        loop {
            let Some(line) = self.lines.next() else {
                self.done = true;
                return (!sentence.is_empty()).then_some(Ok(sentence));
            };
            self.line_no += 1;
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
            };
            let line = line.trim_end_matches('\r');
            if line == EOS {
                return Some(Ok(sentence));
            }
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match parse_line(line, self.line_no) {
                Ok(m) => sentence.push(m),
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

/// Read every sentence of an analysis document.
pub fn parse_analysis(content: &str) -> Result<Vec<Vec<Morpheme>>, AnalysisError> {
    Sentences::new(content.as_bytes()).collect()
}
