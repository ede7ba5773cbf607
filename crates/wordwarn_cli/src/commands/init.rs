//! Init command implementation

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};
use tracing::info;
use wordwarn_core::HighlightOptions;

const DEFAULT_CONFIG: &str = r#"{
  "$schema": "https://github.com/simorgh3196/wordwarn/schemas/v1/options.json",
  // Words with at least this many characters are highlighted.
  "minLength": 12,
  "maxLength": 80,
  "isInclusive": true,
  "highlightColor": "hotpink",
  "textColor": "white"
}
"#;

pub fn run_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(HighlightOptions::CONFIG_FILES[0]);

    loop {
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&config_path)
        {
            Ok(mut file) => {
                file.write_all(DEFAULT_CONFIG.as_bytes()).into_diagnostic()?;
                info!("Created {}", config_path.display());
                return Ok(());
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                if !force {
                    return Err(miette::miette!(
                        "Config file already exists. Use --force to overwrite."
                    ));
                }

                match std::fs::remove_file(&config_path) {
                    Ok(()) => {}
                    Err(e) if e.kind() == ErrorKind::NotFound => {}
                    Err(e) => return Err(e).into_diagnostic(),
                }
            }
            Err(e) => return Err(e).into_diagnostic(),
        }
    }
}
