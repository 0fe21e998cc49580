use super::{is_horizontal_whitespace, is_line_end, peek};
use crate::{Lexer, TokenKind};

/// Collapses a run of whitespace containing a newline into one zero-width line boundary.
///
/// The whitespace itself is skipped. Fails on whitespace that doesn't reach a newline or the end
/// of input, leaving it for the other scanners.
pub(super) fn scan_line_boundary<L: Lexer + ?Sized>(lexer: &mut L) -> Option<TokenKind> {
    let mut saw_newline = false;
    loop {
        match peek(lexer) {
            None => {
                saw_newline = true;
                break;
            }
            Some(c) if is_line_end(c) => {
                saw_newline = true;
                lexer.advance_exclude();
            }
            Some(c) if is_horizontal_whitespace(c) => lexer.advance_exclude(),
            Some(_) => break,
        }
    }
    lexer.mark_boundary();
    saw_newline.then_some(TokenKind::LineBoundary)
}
