//! Scan command implementation

use std::path::Path;

use miette::Result;
use wordwarn_core::Highlighter;

use super::{load_document, resolve_options};
use crate::cli::{Cli, OptionArgs, OutputFormat};
use crate::output::output_words;

/// Returns true if any offending word was found.
pub fn run_scan(cli: &Cli, file: &Path, args: &OptionArgs, format: OutputFormat) -> Result<bool> {
    let options = resolve_options(cli, args, false)?;
    let doc = load_document(file)?;

    let words = Highlighter::new().scan(&doc, &options)?;
    output_words(file, &words, &options, format)?;

    Ok(!words.is_empty())
}
