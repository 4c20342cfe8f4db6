//! Data layer - static vocabularies
//!
//! This module contains the closed vocabularies fixed by the recognizer's
//! label format:
//! - Relation keyword mappings
//! - Pass-through function/constant commands
//! - Near-miss lookup for diagnostics

pub mod symbols;

// Re-export commonly used items
pub use symbols::{
    is_function_symbol, is_relation, FUNCTION_VOCAB, RELATIONS, RELATION_NEAR_MISSES,
};
