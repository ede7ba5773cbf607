//! Remove command implementation

use std::path::Path;

use miette::Result;
use tracing::{info, warn};
use wordwarn_core::Highlighter;

use super::{load_document, write_document};

pub fn run_remove(file: &Path, output: Option<&Path>) -> Result<()> {
    let mut doc = load_document(file)?;

    let report = Highlighter::new().remove(&mut doc);
    if report.skipped > 0 {
        warn!("{} markers could not be removed", report.skipped);
    }
    info!("{}: {} markers removed", file.display(), report.restored);

    write_document(&doc, output)
}
