//! Fraction pattern rewriting
//!
//! The label format has no fraction keyword: a horizontal bar fraction is
//! encoded as two operands joined by a literal `-` flanked by `NoRel` and
//! `Below`. This pass detects that shape up front and replaces it with
//! explicit begin/mid/end markers, so the emitter never has to infer
//! fraction structure from context.

use super::context::ConvertContext;
use super::token::{MarkerKind, RelKind, Token};
use super::WarningKind;

/// Whether the slice starts with the 4-token fraction head
/// `[operand, NoRel, "-", Below]`.
fn is_fraction_head(tokens: &[Token]) -> bool {
    matches!(
        tokens,
        [
            Token::Symbol(_),
            Token::Relation(RelKind::NoRel),
            Token::Symbol(bar),
            Token::Relation(RelKind::Below),
            ..
        ] if bar == "-"
    )
}

/// Rewrite `[A, NoRel, "-", Below, B]` into
/// `[FracStart, A, FracMid, B, FracEnd]`.
///
/// Single forward scan, order-preserving, no backtracking past a rewritten
/// group. A head with no valid denominator (stream ends, or the next token
/// is itself a relation keyword) emits the numerator candidate alone and
/// leaves `NoRel - Below` to be reprocessed as ordinary tokens.
pub fn rewrite_fractions(tokens: &[Token], ctx: &mut ConvertContext) -> Vec<Token> {
    let mut rewritten = Vec::with_capacity(tokens.len());
    let mut j = 0;

    while j < tokens.len() {
        if is_fraction_head(&tokens[j..]) {
            match tokens.get(j + 4) {
                Some(Token::Symbol(denominator)) => {
                    rewritten.push(Token::Marker(MarkerKind::FracStart));
                    rewritten.push(tokens[j].clone());
                    rewritten.push(Token::Marker(MarkerKind::FracMid));
                    rewritten.push(Token::Symbol(denominator.clone()));
                    rewritten.push(Token::Marker(MarkerKind::FracEnd));
                    j += 5;
                    continue;
                }
                _ => {
                    // No denominator follows; keep the numerator candidate
                    // and let the relation tokens convert on their own.
                    ctx.warn(
                        WarningKind::DanglingFraction,
                        "fraction pattern without denominator",
                        Some(j),
                    );
                }
            }
        }

        rewritten.push(tokens[j].clone());
        j += 1;
    }

    rewritten
}

#[cfg(test)]
mod tests {
    use super::super::token::tokenize;
    use super::*;

    fn rewrite(input: &str) -> Vec<Token> {
        let tokens: Vec<Token> = tokenize(input).collect();
        let mut ctx = ConvertContext::new();
        rewrite_fractions(&tokens, &mut ctx)
    }

    fn sym(s: &str) -> Token {
        Token::Symbol(s.to_string())
    }

    #[test]
    fn test_basic_fraction_rewrite() {
        assert_eq!(
            rewrite("2 NoRel - Below 3"),
            vec![
                Token::Marker(MarkerKind::FracStart),
                sym("2"),
                Token::Marker(MarkerKind::FracMid),
                sym("3"),
                Token::Marker(MarkerKind::FracEnd),
            ]
        );
    }

    #[test]
    fn test_chained_fractions_both_rewritten() {
        let tokens = rewrite("2 NoRel - Below 3 NoRel + NoRel 1 NoRel - Below 2");
        let starts = tokens
            .iter()
            .filter(|t| **t == Token::Marker(MarkerKind::FracStart))
            .count();
        assert_eq!(starts, 2);
        // The connective between the fractions survives untouched
        assert!(tokens.contains(&sym("+")));
    }

    #[test]
    fn test_no_match_passes_through() {
        let input = "a Sub b NoRel + Right c";
        let tokens: Vec<Token> = tokenize(input).collect();
        assert_eq!(rewrite(input), tokens);
    }

    #[test]
    fn test_partial_match_missing_denominator() {
        // Pattern head matches but the stream ends at Below
        let tokens = rewrite("2 NoRel - Below");
        assert_eq!(
            tokens,
            vec![
                sym("2"),
                Token::Relation(RelKind::NoRel),
                sym("-"),
                Token::Relation(RelKind::Below),
            ]
        );
    }

    #[test]
    fn test_partial_match_relation_denominator() {
        // A relation keyword cannot be a denominator
        let tokens = rewrite("2 NoRel - Below Right x");
        assert_eq!(
            tokens,
            vec![
                sym("2"),
                Token::Relation(RelKind::NoRel),
                sym("-"),
                Token::Relation(RelKind::Below),
                Token::Relation(RelKind::Right),
                sym("x"),
            ]
        );
    }

    #[test]
    fn test_partial_match_records_warning() {
        let tokens: Vec<Token> = tokenize("2 NoRel - Below").collect();
        let mut ctx = ConvertContext::new();
        rewrite_fractions(&tokens, &mut ctx);
        assert_eq!(ctx.warnings.len(), 1);
        assert_eq!(ctx.warnings[0].kind, WarningKind::DanglingFraction);
    }

    #[test]
    fn test_relation_numerator_never_matches() {
        // The numerator slot must hold an operand, not a relation keyword
        let tokens = rewrite("Right NoRel - Below 3");
        assert_eq!(tokens[0], Token::Relation(RelKind::Right));
        assert!(!tokens.contains(&Token::Marker(MarkerKind::FracStart)));
    }

    #[test]
    fn test_minus_required_between_norel_and_below() {
        let tokens = rewrite("2 NoRel + Below 3");
        assert!(!tokens.contains(&Token::Marker(MarkerKind::FracStart)));
    }
}
