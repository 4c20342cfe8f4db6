//! Static vocabularies for label graph conversion
//!
//! The relation vocabulary and the pass-through function vocabulary are
//! closed sets fixed by the recognizer's label format, so they live in
//! compile-time `phf` maps.

use crate::core::graph2latex::token::RelKind;
use lazy_static::lazy_static;
use phf::{phf_map, phf_set};
use std::collections::HashMap;

/// Relation keyword to kind mapping.
///
/// Exact, case-sensitive matches only. Anything not in this map is a plain
/// symbol and passes through verbatim.
pub static RELATIONS: phf::Map<&'static str, RelKind> = phf_map! {
    "Right" => RelKind::Right,
    "NoRel" => RelKind::NoRel,
    "Sup" => RelKind::Sup,
    "Sub" => RelKind::Sub,
    "Below" => RelKind::Below,
    "Inside" => RelKind::Inside,
    "Above" => RelKind::Above,
    "COMMA" => RelKind::Comma,
};

/// LaTeX commands and constants the recognizer is trained to emit.
///
/// Emission treats these like any other symbol (verbatim pass-through);
/// the set exists for diagnostics and format detection.
pub static FUNCTION_VOCAB: phf::Set<&'static str> = phf_set! {
    "\\sqrt",
    "\\sin",
    "\\sum",
    "\\int",
    "\\cos",
    "\\log",
    "\\lim",
    "\\tan",
    "\\frac",
    "\\alpha",
    "\\beta",
    "\\gamma",
    "\\delta",
    "\\theta",
    "\\pi",
    "\\sigma",
    "\\phi",
    "\\omega",
    "\\infty",
    "\\rightarrow",
    "\\leftarrow",
    "\\leq",
    "\\geq",
    "\\neq",
    "\\times",
    "\\div",
    "\\pm",
    "\\mp",
};

lazy_static! {
    /// Common casing slips for relation keywords, mapped to the canonical
    /// form. Noisy recognizer output frequently drops or doubles the
    /// capital letter; these never convert as relations, so the check
    /// layer flags them with a suggestion.
    pub static ref RELATION_NEAR_MISSES: HashMap<String, &'static str> = {
        let mut m = HashMap::new();
        for key in RELATIONS.keys() {
            let lower = key.to_lowercase();
            if lower != *key {
                m.insert(lower, *key);
            }
            let upper = key.to_uppercase();
            if upper != *key {
                m.insert(upper, *key);
            }
        }
        // "Comma" reads like a keyword but the label format spells it COMMA
        m.insert("Comma".to_string(), "COMMA");
        m
    };
}

/// Whether a token is a relation keyword.
pub fn is_relation(token: &str) -> bool {
    RELATIONS.contains_key(token)
}

/// Whether a token is one of the known function/constant commands.
pub fn is_function_symbol(token: &str) -> bool {
    FUNCTION_VOCAB.contains(token)
}
