//! Conversion context and options for label graph to LaTeX conversion
//!
//! This module handles state management, output buffering, and conversion
//! options. A context is created fresh for every conversion call and owns
//! all mutable state, so separate calls share nothing.

use super::{ConversionWarning, WarningKind};

/// Options for label graph to LaTeX conversion
///
/// Options only affect output wrapping; the transition rules themselves are
/// fixed by the label format and are not configurable.
#[derive(Debug, Clone)]
pub struct G2LOptions {
    /// Wrap the result in `$ ... $` for downstream renderers
    pub math_delimiters: bool,
    /// Trim leading/trailing whitespace from the result. Off by default:
    /// a trailing `Right` legitimately produces a trailing space.
    pub trim_output: bool,
}

impl Default for G2LOptions {
    fn default() -> Self {
        Self {
            math_delimiters: false,
            trim_output: false,
        }
    }
}

impl G2LOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for renderer-facing output: `$ ... $` wrapped and trimmed
    pub fn delimited() -> Self {
        Self {
            math_delimiters: true,
            trim_output: true,
        }
    }
}

/// Why a brace group is currently open.
///
/// A frame is pushed for every `{` the emitter writes and popped for every
/// `}`; the stack depth always equals the number of unmatched opening
/// braces in the output buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeFrame {
    /// Opened by `Sub` (`_{`)
    Subscript,
    /// Opened by `Sup` (`^{`)
    Superscript,
    /// Opened by `Inside` (`{`)
    Inside,
    /// Opened by `Below` (`_{`)
    BelowGroup,
    /// Opened by `Above` (`\frac{`), awaiting the numerator/denominator split
    FractionNumerator,
    /// Denominator group after `NoRel` split the `Above` fraction
    FractionDenominator,
}

/// Initial capacity for output buffer (reduces reallocations)
const INITIAL_BUFFER_CAPACITY: usize = 256;

/// Conversion context for tracking state during conversion
pub struct ConvertContext {
    /// Output buffer
    pub output: String,
    /// Stack of open scope frames
    pub scopes: Vec<ScopeFrame>,
    /// Collected warnings during conversion
    pub warnings: Vec<ConversionWarning>,
    /// Conversion options
    pub options: G2LOptions,
}

impl ConvertContext {
    /// Create a new context with pre-allocated buffer
    pub fn new() -> Self {
        Self::with_options(G2LOptions::default())
    }

    /// Create a new context with the given options
    pub fn with_options(options: G2LOptions) -> Self {
        Self {
            output: String::with_capacity(INITIAL_BUFFER_CAPACITY),
            scopes: Vec::new(),
            warnings: Vec::new(),
            options,
        }
    }

    /// Push a fragment to the output buffer
    pub fn push(&mut self, s: &str) {
        self.output.push_str(s);
    }

    /// Open a scope (the caller has just emitted its opening brace)
    pub fn open_scope(&mut self, frame: ScopeFrame) {
        self.scopes.push(frame);
    }

    /// Peek the innermost open scope without popping
    pub fn peek_scope(&self) -> Option<ScopeFrame> {
        self.scopes.last().copied()
    }

    /// Close the innermost open scope (the caller emits its `}`)
    pub fn close_scope(&mut self) -> Option<ScopeFrame> {
        self.scopes.pop()
    }

    /// Number of currently open scopes
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Record a warning
    pub fn warn(&mut self, kind: WarningKind, message: impl Into<String>, token_index: Option<usize>) {
        self.warnings.push(ConversionWarning {
            kind,
            message: message.into(),
            token_index,
        });
    }

    /// Finalize the output according to the options.
    ///
    /// The scope stack must already be empty (the emitter's finish pass
    /// force-closes it); this only applies output wrapping.
    pub fn finalize(self) -> String {
        debug_assert!(self.scopes.is_empty(), "finalize called with open scopes");

        let body = if self.options.trim_output {
            self.output.trim()
        } else {
            self.output.as_str()
        };

        if self.options.math_delimiters {
            let mut result = String::with_capacity(body.len() + 2);
            result.push('$');
            result.push_str(body);
            result.push('$');
            result
        } else {
            body.to_string()
        }
    }
}

impl Default for ConvertContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default() {
        let opts = G2LOptions::new();
        assert!(!opts.math_delimiters);
        assert!(!opts.trim_output);
    }

    #[test]
    fn test_options_delimited() {
        let opts = G2LOptions::delimited();
        assert!(opts.math_delimiters);
        assert!(opts.trim_output);
    }

    #[test]
    fn test_context_push() {
        let mut ctx = ConvertContext::new();
        ctx.push("x^{");
        ctx.push("2");
        assert_eq!(ctx.output, "x^{2");
    }

    #[test]
    fn test_scope_stack_is_lifo() {
        let mut ctx = ConvertContext::new();
        ctx.open_scope(ScopeFrame::Inside);
        ctx.open_scope(ScopeFrame::Superscript);
        assert_eq!(ctx.depth(), 2);
        assert_eq!(ctx.peek_scope(), Some(ScopeFrame::Superscript));
        assert_eq!(ctx.close_scope(), Some(ScopeFrame::Superscript));
        assert_eq!(ctx.close_scope(), Some(ScopeFrame::Inside));
        assert_eq!(ctx.close_scope(), None);
    }

    #[test]
    fn test_finalize_plain() {
        let mut ctx = ConvertContext::new();
        ctx.push("a ");
        assert_eq!(ctx.finalize(), "a ");
    }

    #[test]
    fn test_finalize_delimited_and_trimmed() {
        let mut ctx = ConvertContext::with_options(G2LOptions::delimited());
        ctx.push("a ");
        assert_eq!(ctx.finalize(), "$a$");
    }
}
