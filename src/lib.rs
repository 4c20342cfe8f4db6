//! # relatex
//!
//! Relation-graph to LaTeX converter for handwritten math recognition
//! pipelines.
//!
//! The recognizer labels a handwritten expression as a flat stream of
//! symbols joined by spatial relation keywords (`Right`, `Sub`, `Sup`,
//! `Below`, `Inside`, `Above`, `NoRel`, `COMMA`). This crate
//! deterministically reconstructs nested, brace-balanced LaTeX from that
//! stream.
//!
//! ## Features
//!
//! - **Total conversion**: any input produces output; malformed streams
//!   degrade to best-effort LaTeX plus warnings, never an error
//! - **Balanced braces**: every opened group is closed, even for truncated
//!   input
//! - **Fraction detection**: the `A NoRel - Below B` bar-fraction pattern
//!   becomes `\frac{A}{B}`
//! - **Diagnostics**: advisory checks for recognizer noise (casing slips,
//!   dangling fractions, literal braces)
//! - **WASM support**: compiles to WebAssembly for in-browser recognizer
//!   clients
//!
//! ## Usage Examples
//!
//! ```rust
//! use relatex::graph_to_latex;
//!
//! assert_eq!(graph_to_latex("a Sub b"), "a_{b}");
//! assert_eq!(graph_to_latex("x Sup 2"), "x^{2}");
//! assert_eq!(graph_to_latex("2 NoRel - Below 3"), "\\frac{2}{3}");
//! assert_eq!(graph_to_latex("\\sum Below i NoRel"), "\\sum_{i}");
//! ```
//!
//! With diagnostics:
//!
//! ```rust
//! use relatex::{graph_to_latex_with_diagnostics, G2LOptions};
//!
//! let result = graph_to_latex_with_diagnostics("a Sub b", &G2LOptions::default());
//! assert_eq!(result.output, "a_{b}");
//! assert!(result.has_warnings()); // trailing Sub scope was force-closed
//! ```

/// Core conversion modules
pub mod core;

/// Data layer - static vocabularies
pub mod data;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core conversion functions
pub use crate::core::graph2latex;
pub use crate::core::graph2latex::{
    graph_to_latex, graph_to_latex_with_diagnostics, graph_to_latex_with_options,
    ConversionResult, ConversionWarning, G2LOptions, WarningKind,
};

// Re-export data modules
pub use data::symbols;
pub use data::symbols::{is_function_symbol, is_relation};

// Re-export utilities
pub use utils::diagnostics;
pub use utils::diagnostics::{check_graph, format_diagnostics, CheckResult, DiagnosticLevel};
pub use utils::error::ConversionError;
pub use utils::files::{convert_label_file, write_latex_lines};

/// Detect input format
///
/// Returns "label-graph", "latex", or "unknown" based on content analysis.
/// Pipeline callers use this to route mixed recognizer output: raw label
/// graphs go through the converter, already-rendered LaTeX does not.
pub fn detect_format(input: &str) -> &'static str {
    let mut graph_score: i32 = 0;
    let mut latex_score: i32 = 0;

    for token in input.split_whitespace() {
        if is_relation(token) {
            graph_score += 2;
        } else if token.contains('{') || token.contains('}') {
            latex_score += 2;
        } else if token.contains('^') || token.contains('_') {
            latex_score += 1;
        }
        // Backslash commands appear in both formats and score neither
    }

    if graph_score > latex_score {
        "label-graph"
    } else if latex_score > graph_score {
        "latex"
    } else {
        "unknown"
    }
}
