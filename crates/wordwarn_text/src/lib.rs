//! # wordwarn_text
//!
//! Text analysis for wordwarn: turning the raw value of a text leaf into
//! candidate words, deciding which of them are offending, and splitting the
//! leaf into plain and marked runs.

mod classifier;
mod pattern;
mod tokenizer;

pub use classifier::{LengthRange, offending_words};
pub use pattern::{OffendingPattern, TextError, TextRun, escape_for_pattern};
pub use tokenizer::{extract_word, is_word_char, words};
