//! JSON output formatter

use std::path::Path;

use miette::{IntoDiagnostic, Result};
use wordwarn_core::HighlightOptions;

pub fn output_json(path: &Path, words: &[String], options: &HighlightOptions) -> Result<()> {
    let output = serde_json::json!({
        "path": path.display().to_string(),
        "minLength": options.min_length,
        "maxLength": options.max_length,
        "isInclusive": options.is_inclusive,
        "words": words,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&output).into_diagnostic()?
    );
    Ok(())
}
