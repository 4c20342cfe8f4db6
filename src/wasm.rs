//! WASM bindings for relatex
//!
//! This module provides JavaScript-accessible functions for label graph to
//! LaTeX conversion, used by in-browser recognizer clients.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

/// Conversion options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize, Default)]
pub struct G2LConvertOptions {
    /// Wrap the output in `$ ... $`
    #[serde(default)]
    pub delimiters: bool,
    /// Trim surrounding whitespace from the output
    #[serde(default)]
    pub trim: bool,
}

/// Conversion result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct ConvertResult {
    /// The converted LaTeX output
    pub output: String,
    /// Whether the conversion was successful (always true; conversion is total)
    pub success: bool,
    /// Warnings during conversion
    pub warnings: Vec<String>,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert a label graph to LaTeX
///
/// # Arguments
/// * `input` - whitespace-delimited label graph text
///
/// # Returns
/// LaTeX markup
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "graphToLatex")]
pub fn graph_to_latex_wasm(input: &str) -> String {
    crate::graph_to_latex(input)
}

/// Convert a label graph to LaTeX with options, returning output and warnings
///
/// # Arguments
/// * `input` - whitespace-delimited label graph text
/// * `options` - `{ delimiters?: bool, trim?: bool }`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "graphToLatexWithOptions")]
pub fn graph_to_latex_with_options_wasm(input: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let wasm_opts: G2LConvertOptions =
        serde_wasm_bindgen::from_value(options).unwrap_or_default();
    let options = crate::G2LOptions {
        math_delimiters: wasm_opts.delimiters,
        trim_output: wasm_opts.trim,
    };

    let result = crate::graph_to_latex_with_diagnostics(input, &options);
    let output = ConvertResult {
        output: result.output,
        success: true,
        warnings: result.format_warnings(),
    };

    serde_wasm_bindgen::to_value(&output).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Detect whether the input is a label graph or already LaTeX
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "detectFormat")]
pub fn detect_format_wasm(input: &str) -> String {
    crate::detect_format(input).to_string()
}

/// Analyze a label graph for recognizer noise without converting it
///
/// Returns the formatted diagnostic report (no ANSI colors).
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "checkGraph")]
pub fn check_graph_wasm(input: &str) -> String {
    let result = crate::check_graph(input);
    crate::format_diagnostics(&result, false)
}
