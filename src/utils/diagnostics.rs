//! Label graph diagnostics
//!
//! Analyzes a label graph without converting it. The converter never
//! rejects input, so everything here is advisory: casing slips in relation
//! keywords, literal braces that will be dropped, scopes that will be
//! force-closed, fraction patterns missing a denominator.
//!
//! ## Example
//!
//! ```rust
//! use relatex::diagnostics::check_graph;
//!
//! let result = check_graph("a sub b");
//! assert!(result.has_warnings());
//! ```

use crate::core::graph2latex::RelKind;
use crate::data::symbols::{is_relation, FUNCTION_VOCAB, RELATIONS, RELATION_NEAR_MISSES};
use fxhash::FxHashMap;
use std::fmt;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    /// Informational note
    Info,
    /// Warning - the converter will repair this silently
    Warning,
    /// Error - reserved; the converter is total and currently never errors
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Info => write!(f, "info"),
            DiagnosticLevel::Warning => write!(f, "warning"),
            DiagnosticLevel::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic message
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level
    pub level: DiagnosticLevel,
    /// Human-readable message
    pub message: String,
    /// Index of the token in the whitespace-split stream (0-based)
    pub token_index: Option<usize>,
    /// The offending token text
    pub token: Option<String>,
    /// Suggested fix
    pub suggestion: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            token_index: None,
            token: None,
            suggestion: None,
        }
    }

    /// Attach the offending token
    pub fn with_token(mut self, index: usize, token: impl Into<String>) -> Self {
        self.token_index = Some(index);
        self.token = Some(token.into());
        self
    }

    /// Attach a suggested fix
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.level)?;
        if let (Some(index), Some(token)) = (self.token_index, &self.token) {
            write!(f, " token {} '{}':", index, token)?;
        }
        write!(f, " {}", self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " ({})", suggestion)?;
        }
        Ok(())
    }
}

/// Result of analyzing a label graph
#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckResult {
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.level == DiagnosticLevel::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.level >= DiagnosticLevel::Warning)
    }
}

/// Relations that open a scope when emitted
fn opens_scope(kind: RelKind) -> bool {
    matches!(
        kind,
        RelKind::Sub | RelKind::Sup | RelKind::Inside | RelKind::Above | RelKind::Below
    )
}

/// Analyze a label graph for likely recognizer noise and silent repairs.
pub fn check_graph(input: &str) -> CheckResult {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let mut diagnostics = Vec::new();

    if tokens.is_empty() {
        return CheckResult { diagnostics };
    }

    if is_relation(tokens[0]) {
        diagnostics.push(
            Diagnostic::new(
                DiagnosticLevel::Info,
                "leading relation keyword has no symbol to attach to",
            )
            .with_token(0, tokens[0]),
        );
    }

    let mut unknown_commands: FxHashMap<&str, usize> = FxHashMap::default();

    for (index, tok) in tokens.iter().enumerate() {
        if let Some(canonical) = RELATION_NEAR_MISSES.get(*tok) {
            diagnostics.push(
                Diagnostic::new(
                    DiagnosticLevel::Warning,
                    "token converts as a plain symbol, not a relation",
                )
                .with_token(index, *tok)
                .with_suggestion(format!("did you mean '{}'", canonical)),
            );
        } else if *tok == "{" || *tok == "}" {
            diagnostics.push(
                Diagnostic::new(
                    DiagnosticLevel::Info,
                    "literal brace tokens are discarded during conversion",
                )
                .with_token(index, *tok),
            );
        } else if tok.starts_with('\\') && !FUNCTION_VOCAB.contains(tok) {
            *unknown_commands.entry(*tok).or_insert(0) += 1;
        }
    }

    // Fraction heads the rewriter will refuse: [A, NoRel, -, Below] with no
    // operand in the denominator slot
    for j in 0..tokens.len() {
        let head = !is_relation(tokens[j])
            && tokens.get(j + 1) == Some(&"NoRel")
            && tokens.get(j + 2) == Some(&"-")
            && tokens.get(j + 3) == Some(&"Below");
        if head {
            let denominator = tokens.get(j + 4);
            if denominator.is_none() || denominator.is_some_and(|t| is_relation(t)) {
                diagnostics.push(
                    Diagnostic::new(
                        DiagnosticLevel::Warning,
                        "fraction pattern without denominator; '- Below' converts literally",
                    )
                    .with_token(j, tokens[j]),
                );
            }
        }
    }

    if let Some(last) = tokens.last() {
        if let Some(&kind) = RELATIONS.get(last) {
            if opens_scope(kind) {
                diagnostics.push(
                    Diagnostic::new(
                        DiagnosticLevel::Warning,
                        "trailing relation opens a scope that will be force-closed",
                    )
                    .with_token(tokens.len() - 1, *last),
                );
            }
        }
    }

    let mut unknown: Vec<(&str, usize)> = unknown_commands.into_iter().collect();
    unknown.sort_unstable();
    for (command, count) in unknown {
        diagnostics.push(
            Diagnostic::new(
                DiagnosticLevel::Info,
                format!(
                    "command outside the recognizer vocabulary ({} occurrence(s)), passed through verbatim",
                    count
                ),
            )
            .with_token(
                tokens.iter().position(|t| *t == command).unwrap_or(0),
                command,
            ),
        );
    }

    diagnostics.sort_by_key(|d| d.token_index.unwrap_or(0));

    CheckResult { diagnostics }
}

/// Format a check result for terminal output.
pub fn format_diagnostics(result: &CheckResult, color: bool) -> String {
    if result.is_empty() {
        return "No issues found.".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!("{} issue(s) found:\n", result.diagnostics.len()));

    for diag in &result.diagnostics {
        let (color_code, reset) = if color {
            let code = match diag.level {
                DiagnosticLevel::Error => "\x1b[31m",
                DiagnosticLevel::Warning => "\x1b[33m",
                DiagnosticLevel::Info => "\x1b[36m",
            };
            (code, "\x1b[0m")
        } else {
            ("", "")
        };

        out.push_str(&format!("  {}{}{}\n", color_code, diag, reset));
    }

    out
}
