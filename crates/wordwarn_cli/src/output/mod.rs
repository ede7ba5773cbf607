//! Output formatting module

mod json;
mod text;

use std::path::Path;

use miette::Result;
use wordwarn_core::HighlightOptions;

use crate::cli::OutputFormat;

pub fn output_words(
    path: &Path,
    words: &[String],
    options: &HighlightOptions,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => json::output_json(path, words, options)?,
        OutputFormat::Text => text::output_text(path, words, options),
    }
    Ok(())
}
