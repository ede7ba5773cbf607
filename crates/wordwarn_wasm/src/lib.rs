//! # wordwarn_wasm
//!
//! Browser entry points for wordwarn.
//!
//! `applyHighlights` and `removeHighlights` run the highlighting engine on
//! the live page. Neither throws: invalid options and DOM failures are
//! written to `console.error` and the page is left as it was.

mod arguments;
mod browser;

pub use arguments::{apply_arguments, options_from_arguments};
pub use browser::BrowserDom;

use serde_json::Value;
use wasm_bindgen::prelude::*;
use wordwarn_core::{Highlighter, ValidationError};

/// Writes `e` to the browser console.
fn report_error(e: impl std::fmt::Display) {
    web_sys::console::error_1(&JsValue::from_str(&e.to_string()));
}

/// Converts one positional argument. `undefined` becomes `None`.
fn js_argument(value: JsValue) -> Result<Option<Value>, ValidationError> {
    if value.is_undefined() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(|e| ValidationError::Invalid(e.to_string()))
}

fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Highlights every word of the page whose length falls in the range.
///
/// Returns the pass report as an object, or `null` after reporting an error.
#[wasm_bindgen(js_name = applyHighlights)]
pub fn apply_highlights(
    min_length: JsValue,
    max_length: JsValue,
    is_inclusive: JsValue,
    highlight_color: JsValue,
    text_color: JsValue,
    reset: JsValue,
) -> JsValue {
    set_panic_hook();

    let arguments = [
        min_length,
        max_length,
        is_inclusive,
        highlight_color,
        text_color,
        reset,
    ]
    .into_iter()
    .map(js_argument)
    .collect::<Result<Vec<_>, _>>();

    let arguments = match arguments {
        Ok(arguments) => arguments,
        Err(e) => {
            report_error(&e);
            return JsValue::NULL;
        }
    };

    let mut dom = match BrowserDom::from_window() {
        Ok(dom) => dom,
        Err(e) => {
            report_error(&e);
            return JsValue::NULL;
        }
    };

    match apply_arguments(&mut dom, arguments) {
        Ok(report) => serde_wasm_bindgen::to_value(&report).unwrap_or(JsValue::UNDEFINED),
        Err(e) => {
            report_error(&e);
            JsValue::NULL
        }
    }
}

/// Removes every marker from the page.
///
/// Returns the removal report as an object, or `null` without a document.
#[wasm_bindgen(js_name = removeHighlights)]
pub fn remove_highlights() -> JsValue {
    set_panic_hook();

    match BrowserDom::from_window() {
        Ok(mut dom) => {
            let report = Highlighter::new().remove(&mut dom);
            serde_wasm_bindgen::to_value(&report).unwrap_or(JsValue::UNDEFINED)
        }
        Err(e) => {
            report_error(&e);
            JsValue::NULL
        }
    }
}
