//! Core conversion modules
//!
//! This module contains the main conversion engine:
//! - `graph2latex`: label graph to LaTeX converter

pub mod graph2latex;

// Re-export main types and functions from graph2latex
pub use graph2latex::{
    graph_to_latex, graph_to_latex_with_diagnostics, graph_to_latex_with_options,
    ConversionResult, ConversionWarning, ConvertContext, G2LOptions, MarkerKind, RelKind,
    ScopeFrame, Token, WarningKind,
};
