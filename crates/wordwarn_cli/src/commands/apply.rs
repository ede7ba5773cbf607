//! Apply command implementation

use std::path::Path;

use miette::Result;
use tracing::info;
use wordwarn_core::Highlighter;

use super::{load_document, resolve_options, write_document};
use crate::cli::{Cli, OptionArgs};

pub fn run_apply(
    cli: &Cli,
    file: &Path,
    args: &OptionArgs,
    reset: bool,
    output: Option<&Path>,
) -> Result<()> {
    let options = resolve_options(cli, args, reset)?;
    let mut doc = load_document(file)?;

    let report = Highlighter::new().apply(&mut doc, &options)?;
    if let Some(removed) = report.removed {
        info!("Reset {} existing markers", removed.restored);
    }
    info!(
        "{}: {} words highlighted in {} text nodes",
        file.display(),
        report.markers_created,
        report.rewritten_nodes
    );

    write_document(&doc, output)
}
