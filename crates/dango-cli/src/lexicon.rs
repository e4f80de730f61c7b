use std::fs;
use std::path::Path;

use dango_core::Lexicon;
use tracing::debug;

/// Column holding the katakana reading in SudachiDict lexicon CSV.
const READING_COLUMN: usize = 11;

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected at least 12 columns, found {found}")]
    Columns { line: usize, found: usize },
}

/// Word-id to reading table loaded from a SudachiDict lexicon CSV.
///
/// Ids count data lines from zero in file order, matching the ids an
/// analyzer built from the same CSV reports for dictionary forms.
#[derive(Debug, Default)]
pub struct CsvLexicon {
    readings: Vec<String>,
}

impl CsvLexicon {
    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let content = fs::read_to_string(path)?;
        let lexicon = Self::parse(&content)?;
        debug!(path = %path.display(), entries = lexicon.len(), "lexicon loaded");
        Ok(lexicon)
    }

    pub fn parse(content: &str) -> Result<Self, LexiconError> {
        let mut readings = Vec::new();
        for (i, line) in content.lines().enumerate() {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() <= READING_COLUMN {
                return Err(LexiconError::Columns {
                    line: i + 1,
                    found: fields.len(),
                });
            }
            readings.push(fields[READING_COLUMN].to_string());
        }
        Ok(Self { readings })
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

impl Lexicon for CsvLexicon {
    fn reading(&self, word_id: u32) -> Option<String> {
        let index = usize::try_from(word_id).ok()?;
        self.readings.get(index).cloned()
    }
}
