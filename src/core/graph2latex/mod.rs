//! Label graph to LaTeX converter
//!
//! Converts the flat relation-graph label format produced by the
//! handwriting recognizer into nested LaTeX markup. The pipeline is three
//! ordered stages over a per-call context:
//!
//! 1. tokenize: whitespace split + classification into a closed enum
//! 2. rewrite: fraction pattern detection (`A NoRel - Below B`)
//! 3. emit: stack-driven brace management, then force-close
//!
//! Conversion is total: any input string produces an output string with
//! balanced braces. Malformed input degrades to best-effort output plus
//! warnings, never an error.

pub mod context;
pub mod emit;
pub mod rewrite;
pub mod token;

pub use context::{ConvertContext, G2LOptions, ScopeFrame};
pub use token::{MarkerKind, RelKind, Token};

// =============================================================================
// Warning System
// =============================================================================

/// Kind of warning generated during label graph conversion.
///
/// Warnings are advisory: they classify the repairs the converter applied
/// to keep the output well-formed, and never change or suppress output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Input ended with open scopes; the finish pass closed them
    UnclosedScope,
    /// A literal `{` or `}` input token was dropped
    DiscardedBrace,
    /// Fraction pattern head without a valid denominator
    DanglingFraction,
}

impl std::fmt::Display for WarningKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WarningKind::UnclosedScope => write!(f, "unclosed scope"),
            WarningKind::DiscardedBrace => write!(f, "discarded brace"),
            WarningKind::DanglingFraction => write!(f, "dangling fraction"),
        }
    }
}

/// A warning generated during label graph conversion.
#[derive(Debug, Clone)]
pub struct ConversionWarning {
    /// The kind of warning (for programmatic handling)
    pub kind: WarningKind,
    /// Human-readable warning message
    pub message: String,
    /// Index of the offending token in the token stream, when known
    pub token_index: Option<usize>,
}

impl std::fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(index) = self.token_index {
            write!(f, "[{}] token {}: {}", self.kind, index, self.message)
        } else {
            write!(f, "[{}] {}", self.kind, self.message)
        }
    }
}

/// Result of a conversion with diagnostics.
#[derive(Debug, Clone)]
pub struct ConversionResult {
    /// The converted LaTeX output
    pub output: String,
    /// Warnings generated during conversion
    pub warnings: Vec<ConversionWarning>,
}

impl ConversionResult {
    /// Create a successful result with no warnings.
    pub fn ok(output: String) -> Self {
        Self {
            output,
            warnings: Vec::new(),
        }
    }

    /// Create a result with warnings.
    pub fn with_warnings(output: String, warnings: Vec<ConversionWarning>) -> Self {
        Self { output, warnings }
    }

    /// Check if there are any warnings.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Get warnings as formatted strings.
    pub fn format_warnings(&self) -> Vec<String> {
        self.warnings.iter().map(|w| w.to_string()).collect()
    }
}

// =============================================================================
// Conversion entry points
// =============================================================================

fn run(input: &str, options: &G2LOptions) -> (String, Vec<ConversionWarning>) {
    let mut ctx = ConvertContext::with_options(options.clone());

    let raw: Vec<Token> = token::tokenize(input).collect();
    let rewritten = rewrite::rewrite_fractions(&raw, &mut ctx);
    emit::emit_all(&rewritten, &mut ctx);

    let warnings = std::mem::take(&mut ctx.warnings);
    (ctx.finalize(), warnings)
}

/// Convert a label graph to LaTeX
pub fn graph_to_latex(input: &str) -> String {
    graph_to_latex_with_options(input, &G2LOptions::default())
}

/// Convert a label graph to LaTeX with options
pub fn graph_to_latex_with_options(input: &str, options: &G2LOptions) -> String {
    run(input, options).0
}

/// Convert a label graph to LaTeX, returning full diagnostics.
///
/// This is the recommended function for library/integration use: the
/// output is identical to [`graph_to_latex_with_options`], plus the
/// warnings the converter recorded while repairing malformed input.
pub fn graph_to_latex_with_diagnostics(input: &str, options: &G2LOptions) -> ConversionResult {
    let (output, warnings) = run(input, options);
    ConversionResult::with_warnings(output, warnings)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_basic_subscript() {
        assert_eq!(graph_to_latex("a Sub b"), "a_{b}");
    }

    #[test]
    fn test_basic_superscript() {
        assert_eq!(graph_to_latex("x Sup 2"), "x^{2}");
    }

    #[test]
    fn test_fraction_from_pattern() {
        assert_eq!(graph_to_latex("2 NoRel - Below 3"), "\\frac{2}{3}");
    }

    #[test]
    fn test_chained_fractions() {
        assert_eq!(
            graph_to_latex("2 NoRel - Below 3 NoRel + NoRel 1 NoRel - Below 2"),
            "\\frac{2}{3} + \\frac{1}{2}"
        );
    }

    #[test]
    fn test_sum_with_below_limit() {
        assert_eq!(graph_to_latex("\\sum Below i Right = Right 1"), "\\sum_{i = 1}");
    }

    #[test]
    fn test_sqrt_inside() {
        assert_eq!(
            graph_to_latex("\\sqrt Inside x Sup 2 NoRel + Right y Sup 2"),
            "\\sqrt{x^{2}+ y^{2}}"
        );
    }

    #[test]
    fn test_integral_pass_through() {
        assert_eq!(graph_to_latex("\\int Right d Right x"), "\\int d x");
    }

    #[test]
    fn test_sub_then_sup_composition() {
        assert_eq!(
            graph_to_latex("a Sub b NoRel + Right b Sup c"),
            "a_{b}+ b^{c}"
        );
    }

    #[test]
    fn test_adjacent_subscript_closure() {
        assert_eq!(graph_to_latex("a Sub i NoRel j"), "a_{i}j");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(graph_to_latex(""), "");
    }

    #[test]
    fn test_options_delimiters() {
        let opts = G2LOptions {
            math_delimiters: true,
            ..Default::default()
        };
        assert_eq!(graph_to_latex_with_options("a Sub b", &opts), "$a_{b}$");
    }

    #[test]
    fn test_diagnostics_clean_input_has_no_warnings() {
        let result = graph_to_latex_with_diagnostics("a Sub b NoRel", &G2LOptions::default());
        assert_eq!(result.output, "a_{b}");
        assert!(!result.has_warnings());
    }

    #[test]
    fn test_diagnostics_unclosed_scope() {
        let result = graph_to_latex_with_diagnostics("a Sub b", &G2LOptions::default());
        assert_eq!(result.output, "a_{b}");
        assert!(result.has_warnings());
        assert_eq!(result.warnings[0].kind, WarningKind::UnclosedScope);
    }

    #[test]
    fn test_diagnostics_output_matches_plain_conversion() {
        let input = "{ a Sub b NoRel - Below";
        let plain = graph_to_latex(input);
        let diag = graph_to_latex_with_diagnostics(input, &G2LOptions::default());
        assert_eq!(plain, diag.output);
    }

    #[test]
    fn test_warning_display() {
        let warning = ConversionWarning {
            kind: WarningKind::DiscardedBrace,
            message: "literal '{' token discarded".to_string(),
            token_index: Some(3),
        };
        assert_eq!(
            warning.to_string(),
            "[discarded brace] token 3: literal '{' token discarded"
        );
    }

    #[test]
    fn test_brace_balance_over_malformed_corpus() {
        let corpus = [
            "",
            "Sub",
            "NoRel NoRel NoRel",
            "a Sub b Sup c Inside d",
            "2 NoRel - Below",
            "} { a Sub",
            "Above Above Above x",
            "\\sum Below i Right = Right 1 Sub",
            "x Sup Sup Sup",
            "a Sub i NoRel j NoRel k",
        ];
        for input in corpus {
            let output = graph_to_latex(input);
            let opens = output.matches('{').count();
            let closes = output.matches('}').count();
            assert_eq!(opens, closes, "unbalanced braces for {:?}: {:?}", input, output);
        }
    }
}
