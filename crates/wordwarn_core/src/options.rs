//! Highlight options.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use jsonc_parser::ParseOptions;
use jsonschema::Validator;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use wordwarn_text::LengthRange;

use crate::marker::marker_style;
use crate::{HighlightError, ValidationError};

// Embed the schema
const SCHEMA_JSON: &str = include_str!("../../../schemas/v1/options.json");
static OPTIONS_SCHEMA: OnceLock<Result<Validator, String>> = OnceLock::new();

/// Longest word the highlighter looks for by default (long German compounds).
pub const DEFAULT_MAX_LENGTH: usize = 80;
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "hotpink";
pub const DEFAULT_TEXT_COLOR: &str = "white";

/// Options of one highlighting pass.
///
/// `min_length` is required; every other field has a default. Values built
/// in code are checked by [`validate`](Self::validate), untyped input goes
/// through [`from_value`](Self::from_value), which checks types as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightOptions {
    /// Lower length bound. Required.
    pub min_length: usize,

    /// Upper length bound.
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    /// Whether boundary lengths count as offending.
    #[serde(default = "default_is_inclusive")]
    pub is_inclusive: bool,

    /// CSS background color of the markers.
    #[serde(default = "default_highlight_color")]
    pub highlight_color: String,

    /// CSS text color of the markers.
    #[serde(default = "default_text_color")]
    pub text_color: String,

    /// Remove existing markers before highlighting.
    #[serde(default)]
    pub reset: bool,
}

fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}

fn default_is_inclusive() -> bool {
    true
}

fn default_highlight_color() -> String {
    DEFAULT_HIGHLIGHT_COLOR.to_string()
}

fn default_text_color() -> String {
    DEFAULT_TEXT_COLOR.to_string()
}

impl HighlightOptions {
    /// Configuration file names, in lookup order.
    pub const CONFIG_FILES: &'static [&'static str] = &[".wordwarn.jsonc", ".wordwarn.json"];

    /// Creates options with the given lower bound and defaults for the rest.
    pub fn new(min_length: usize) -> Self {
        Self {
            min_length,
            max_length: DEFAULT_MAX_LENGTH,
            is_inclusive: true,
            highlight_color: default_highlight_color(),
            text_color: default_text_color(),
            reset: false,
        }
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_inclusive(mut self, is_inclusive: bool) -> Self {
        self.is_inclusive = is_inclusive;
        self
    }

    pub fn with_colors(
        mut self,
        highlight_color: impl Into<String>,
        text_color: impl Into<String>,
    ) -> Self {
        self.highlight_color = highlight_color.into();
        self.text_color = text_color.into();
        self
    }

    pub fn with_reset(mut self, reset: bool) -> Self {
        self.reset = reset;
        self
    }

    /// Returns the length predicate these options describe.
    pub fn range(&self) -> LengthRange {
        LengthRange {
            min: self.min_length,
            max: self.max_length,
            inclusive: self.is_inclusive,
        }
    }

    /// Returns the inline style written on every marker.
    pub fn marker_style(&self) -> String {
        marker_style(&self.highlight_color, &self.text_color)
    }

    /// Checks the invariants the type system cannot express.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_length < self.min_length {
            return Err(ValidationError::InvertedRange {
                min: self.min_length,
                max: self.max_length,
            });
        }
        Ok(())
    }

    /// Builds options from an untyped JSON object, checking every field's type.
    ///
    /// ```rust
    /// use wordwarn_core::{HighlightOptions, ValidationError};
    ///
    /// let options = HighlightOptions::from_value(&serde_json::json!({ "minLength": 8 })).unwrap();
    /// assert_eq!(options.max_length, 80);
    ///
    /// let err = HighlightOptions::from_value(&serde_json::json!({ "minLength": "8" })).unwrap_err();
    /// assert!(matches!(err, ValidationError::Schema { .. }));
    /// ```
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let schema = options_schema()?;

        if let Err(e) = schema.validate(value) {
            return Err(ValidationError::schema(
                e.to_string(),
                e.instance_path().to_string(),
            ));
        }

        let options: Self = serde_json::from_value(value.clone())
            .map_err(|e| ValidationError::Invalid(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Parses options from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| ValidationError::Json(e.to_string()))?;
        Self::from_value(&value)
    }

    /// Loads options from a `.wordwarn.json` / `.wordwarn.jsonc` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, HighlightError> {
        let object = read_options_file(path)?;
        Ok(Self::from_value(&Value::Object(object))?)
    }
}

fn options_schema() -> Result<&'static Validator, ValidationError> {
    OPTIONS_SCHEMA
        .get_or_init(|| {
            let schema_json: Value = serde_json::from_str(SCHEMA_JSON)
                .map_err(|e| format!("Invalid embedded options schema: {}", e))?;
            Validator::new(&schema_json)
                .map_err(|e| format!("Invalid options schema compilation: {}", e))
        })
        .as_ref()
        .map_err(|e| ValidationError::schema(e.clone(), ""))
}

/// Reads an options file (comments allowed) as a JSON object without
/// validating it, so callers can overlay values before validation.
pub fn read_options_file(path: impl AsRef<Path>) -> Result<Map<String, Value>, HighlightError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        HighlightError::config(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let value = jsonc_parser::parse_to_serde_value(&content, &ParseOptions::default())
        .map_err(|e| HighlightError::config(format!("Failed to parse {}: {}", path.display(), e)))?
        .unwrap_or_else(|| Value::Object(Map::new()));

    match value {
        Value::Object(object) => Ok(object),
        _ => Err(HighlightError::config(format!(
            "{} must contain a JSON object",
            path.display()
        ))),
    }
}

/// Looks for a configuration file in `dir`.
pub fn find_config(dir: impl AsRef<Path>) -> Option<PathBuf> {
    HighlightOptions::CONFIG_FILES
        .iter()
        .map(|name| dir.as_ref().join(name))
        .find(|path| path.is_file())
}
