use super::{is_horizontal_whitespace, is_line_end, peek};
use crate::{Lexer, TokenKind, ValidKinds};

/// Scans the subject of a suffixed header, from just after the keyword up to the closing `]`.
///
/// Surrounding whitespace is trimmed from the token; whitespace between words is kept. Only
/// `[Include]` may have an empty subject.
pub(super) fn scan_suffix<L: Lexer + ?Sized>(
    lexer: &mut L,
    valid: ValidKinds,
) -> Option<TokenKind> {
    let mut saw_text = false;
    loop {
        match peek(lexer) {
            None | Some(']') => break,
            Some(c) if is_line_end(c) => break,
            Some(c) if is_horizontal_whitespace(c) => {
                if saw_text {
                    lexer.advance_include();
                } else {
                    lexer.advance_exclude();
                }
            }
            Some(_) => {
                lexer.advance_include();
                lexer.mark_boundary();
                saw_text = true;
            }
        }
    }

    if !saw_text {
        lexer.mark_boundary();
        return valid.has(TokenKind::IncludeSuffix).then_some(TokenKind::IncludeSuffix);
    }
    TokenKind::SUFFIXED.into_iter().find(|&kind| valid.has(kind))
}
