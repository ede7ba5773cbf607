//! Positional JavaScript arguments to highlight options.

use serde_json::{Map, Value};
use wordwarn_core::{HighlightOptions, HighlightReport, Highlighter, ValidationError};
use wordwarn_dom::DomTree;

/// Option names, in the order `applyHighlights` takes them.
const ARGUMENT_NAMES: [&str; 6] = [
    "minLength",
    "maxLength",
    "isInclusive",
    "highlightColor",
    "textColor",
    "reset",
];

/// Builds options from positional arguments. `None` stands for an
/// `undefined` argument and takes the default.
pub fn options_from_arguments(
    arguments: impl IntoIterator<Item = Option<Value>>,
) -> Result<HighlightOptions, ValidationError> {
    let object: Map<String, Value> = ARGUMENT_NAMES
        .iter()
        .zip(arguments)
        .filter_map(|(name, value)| value.map(|value| (name.to_string(), value)))
        .collect();

    HighlightOptions::from_value(&Value::Object(object))
}

/// Validates positional arguments, then highlights `tree` with them.
///
/// Nothing in `tree` changes when the arguments are rejected.
pub fn apply_arguments<T: DomTree>(
    tree: &mut T,
    arguments: impl IntoIterator<Item = Option<Value>>,
) -> Result<HighlightReport, ValidationError> {
    let options = options_from_arguments(arguments)?;
    Highlighter::new().apply(tree, &options)
}
