//! Stack-based LaTeX emission
//!
//! Consumes the rewritten token sequence left to right. Relation tokens
//! open brace groups and push a frame recording why; `NoRel` closes the
//! innermost group according to the frame on top of the stack. After the
//! stream is exhausted a finish pass force-closes whatever is still open,
//! so the returned string is brace-balanced for any input.

use super::context::{ConvertContext, ScopeFrame};
use super::token::{MarkerKind, RelKind, Token};
use super::WarningKind;

/// Apply one token's transition to the context.
pub fn emit_token(token: &Token, index: usize, ctx: &mut ConvertContext) {
    match token {
        Token::Marker(MarkerKind::FracStart) => ctx.push("\\frac{"),
        Token::Marker(MarkerKind::FracMid) => ctx.push("}{"),
        Token::Marker(MarkerKind::FracEnd) => ctx.push("}"),

        Token::Relation(RelKind::Right) => ctx.push(" "),
        Token::Relation(RelKind::Comma) => ctx.push(","),

        Token::Relation(RelKind::Sub) => {
            ctx.push("_{");
            ctx.open_scope(ScopeFrame::Subscript);
        }
        Token::Relation(RelKind::Sup) => {
            ctx.push("^{");
            ctx.open_scope(ScopeFrame::Superscript);
        }
        Token::Relation(RelKind::Above) => {
            ctx.push("\\frac{");
            ctx.open_scope(ScopeFrame::FractionNumerator);
        }
        Token::Relation(RelKind::Inside) => {
            ctx.push("{");
            ctx.open_scope(ScopeFrame::Inside);
        }
        // Uniform for limit operators (\sum, \int, \lim) and standalone use
        Token::Relation(RelKind::Below) => {
            ctx.push("_{");
            ctx.open_scope(ScopeFrame::BelowGroup);
        }

        Token::Relation(RelKind::NoRel) => match ctx.peek_scope() {
            Some(ScopeFrame::FractionNumerator) => {
                ctx.push("}{");
                ctx.close_scope();
                ctx.open_scope(ScopeFrame::FractionDenominator);
            }
            Some(
                ScopeFrame::BelowGroup
                | ScopeFrame::Inside
                | ScopeFrame::Subscript
                | ScopeFrame::Superscript,
            ) => {
                ctx.push("}");
                ctx.close_scope();
            }
            Some(ScopeFrame::FractionDenominator) => {
                ctx.push("}");
                ctx.close_scope();
            }
            // Plain separator when nothing is open
            None => ctx.push(" "),
        },

        Token::Symbol(s) if s == "{" || s == "}" => {
            // Braces are managed by the scope stack, never passed through
            ctx.warn(
                WarningKind::DiscardedBrace,
                format!("literal '{}' token discarded", s),
                Some(index),
            );
        }
        Token::Symbol(s) => ctx.push(s),
    }
}

/// Force-close every scope still open after the stream ends.
pub fn close_remaining(ctx: &mut ConvertContext) {
    let open = ctx.depth();
    if open > 0 {
        ctx.warn(
            WarningKind::UnclosedScope,
            format!("input ended with {} open scope(s), force-closed", open),
            None,
        );
    }
    while ctx.close_scope().is_some() {
        ctx.push("}");
    }
}

/// Emit the whole rewritten sequence, then balance the braces.
pub fn emit_all(tokens: &[Token], ctx: &mut ConvertContext) {
    for (index, token) in tokens.iter().enumerate() {
        emit_token(token, index, ctx);
    }
    close_remaining(ctx);
}
