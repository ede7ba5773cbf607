//! Command implementations

mod apply;
mod init;
mod remove;
mod scan;

pub use apply::run_apply;
pub use init::run_init;
pub use remove::run_remove;
pub use scan::run_scan;

use std::fs;
use std::path::Path;

use miette::{IntoDiagnostic, Result, WrapErr};
use serde_json::{Map, Value};
use tracing::{debug, info};
use wordwarn_core::{HighlightOptions, find_config, read_options_file};
use wordwarn_dom::Document;
use wordwarn_html::{HtmlParser, Parser, PlainTextParser, serialize};

use crate::cli::{Cli, OptionArgs};

/// Reads `path` and parses it according to its extension.
pub fn load_document(path: &Path) -> Result<Document> {
    let source = fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    let text = PlainTextParser::new();
    let doc = if text.can_parse(extension) {
        debug!("Parsing {} as plain text", path.display());
        text.parse(&source)
    } else {
        HtmlParser::for_source(&source).parse(&source)
    };

    doc.into_diagnostic()
        .wrap_err_with(|| format!("Failed to parse {}", path.display()))
}

/// Serializes `doc` to `output`, or to stdout.
pub fn write_document(doc: &Document, output: Option<&Path>) -> Result<()> {
    let html = serialize(doc);
    match output {
        Some(path) => {
            fs::write(path, html)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", html),
    }
    Ok(())
}

/// Builds the options from the configuration file, overlaid with the flags.
pub fn resolve_options(cli: &Cli, args: &OptionArgs, reset: bool) -> Result<HighlightOptions> {
    let mut object = match &cli.config {
        Some(path) => read_options_file(path).into_diagnostic()?,
        None => match find_config(".") {
            Some(path) => {
                info!("Using config: {}", path.display());
                read_options_file(&path).into_diagnostic()?
            }
            None => Map::new(),
        },
    };

    overlay_flags(&mut object, args, reset);

    Ok(HighlightOptions::from_value(&Value::Object(object))?)
}

fn overlay_flags(object: &mut Map<String, Value>, args: &OptionArgs, reset: bool) {
    if let Some(min) = args.min_length {
        object.insert("minLength".to_string(), Value::from(min));
    }
    if let Some(max) = args.max_length {
        object.insert("maxLength".to_string(), Value::from(max));
    }
    if args.exclusive {
        object.insert("isInclusive".to_string(), Value::Bool(false));
    }
    if let Some(color) = &args.highlight_color {
        object.insert("highlightColor".to_string(), Value::from(color.as_str()));
    }
    if let Some(color) = &args.text_color {
        object.insert("textColor".to_string(), Value::from(color.as_str()));
    }
    if reset {
        object.insert("reset".to_string(), Value::Bool(true));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flags_override_config_values() {
        let mut object = json!({ "minLength": 4, "highlightColor": "red", "reset": false })
            .as_object()
            .cloned()
            .unwrap();
        let args = OptionArgs {
            min_length: Some(7),
            exclusive: true,
            text_color: Some("black".to_string()),
            ..OptionArgs::default()
        };

        overlay_flags(&mut object, &args, true);

        assert_eq!(
            Value::Object(object),
            json!({
                "minLength": 7,
                "highlightColor": "red",
                "isInclusive": false,
                "textColor": "black",
                "reset": true
            })
        );
    }

    #[test]
    fn test_unset_flags_keep_config_values() {
        let mut object = json!({ "minLength": 4, "isInclusive": false })
            .as_object()
            .cloned()
            .unwrap();

        overlay_flags(&mut object, &OptionArgs::default(), false);

        assert_eq!(
            Value::Object(object),
            json!({ "minLength": 4, "isInclusive": false })
        );
    }
}
