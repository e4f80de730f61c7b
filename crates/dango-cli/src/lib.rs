//! Command-line front end for `dango_core`: reads pre-analyzed text and a
//! Sudachi lexicon, prints aggregated words.

pub mod analysis;
pub mod commands;
pub mod lexicon;
pub mod trace_init;
