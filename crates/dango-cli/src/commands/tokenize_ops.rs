use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::process;

use dango_core::{Lexicon, NoLexicon, PartOfSpeech, PosClassifier, Word, WordAggregator};
use serde::Serialize;
use tracing::debug;

use crate::analysis::{AnalysisError, Sentences};
use crate::lexicon::CsvLexicon;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub struct TokenizeOptions {
    pub lexicon: Option<String>,
    pub rules: Option<String>,
    pub json: bool,
    pub keep_whitespace: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenizeError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TokenizeError {
    fn is_broken_pipe(&self) -> bool {
        match self {
            Self::Io(e) => e.kind() == io::ErrorKind::BrokenPipe,
            Self::Json(e) => e.io_error_kind() == Some(io::ErrorKind::BrokenPipe),
            Self::Analysis(_) => false,
        }
    }
}

#[derive(Serialize)]
struct WordRecord<'a> {
    surface: String,
    surface_reading: String,
    dictionary_form: &'a str,
    dictionary_form_reading: Option<&'a str>,
    part_of_speech: PartOfSpeech,
}

impl<'a> From<&'a Word> for WordRecord<'a> {
    fn from(w: &'a Word) -> Self {
        Self {
            surface: w.surface(),
            surface_reading: w.surface_reading(),
            dictionary_form: w.dictionary_form(),
            dictionary_form_reading: w.dictionary_form_reading(),
            part_of_speech: w.part_of_speech(),
        }
    }
}

pub fn tokenize(file: Option<&str>, opts: &TokenizeOptions) {
    let machine = match &opts.rules {
        Some(path) => {
            let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
            die!(dango_core::rules::parse_rules_toml(&content), "Error: {}")
        }
        None => die!(dango_core::rules::default_state_machine(), "Error: {}"),
    };
    let aggregator = WordAggregator::new(machine, PosClassifier::default());

    let lexicon: Box<dyn Lexicon> = match &opts.lexicon {
        Some(path) => Box::new(die!(
            CsvLexicon::load(Path::new(path)),
            "Error reading {path}: {}"
        )),
        None => Box::new(NoLexicon),
    };

    let input: Box<dyn BufRead> = match file {
        Some(path) => Box::new(BufReader::new(die!(
            File::open(path),
            "Error reading {path}: {}"
        ))),
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = write_sentences(input, &mut out, &aggregator, lexicon.as_ref(), opts)
        .and_then(|()| out.flush().map_err(TokenizeError::from));
    if let Err(e) = result {
        if e.is_broken_pipe() {
            debug!("stdout closed");
            return;
        }
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Aggregate every sentence read from `input` and write one line per
/// sentence to `out`.
pub fn write_sentences<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    aggregator: &WordAggregator,
    lexicon: &dyn Lexicon,
    opts: &TokenizeOptions,
) -> Result<(), TokenizeError> {
    for sentence in Sentences::new(input) {
        let words = aggregator.aggregate(sentence?, lexicon);
        let words: Vec<&Word> = words
            .iter()
            .filter(|w| opts.keep_whitespace || !w.is_whitespace())
            .collect();
        if opts.json {
            let records: Vec<WordRecord<'_>> = words.iter().map(|w| WordRecord::from(*w)).collect();
            serde_json::to_writer(&mut *out, &records)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", join_surfaces(&words))?;
        }
    }
    Ok(())
}

fn join_surfaces(words: &[&Word]) -> String {
    words
        .iter()
        .map(|w| w.surface())
        .collect::<Vec<_>>()
        .join(" ")
}
