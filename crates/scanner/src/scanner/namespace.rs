//! Namespace paths: `\path\to\ini\` references.

use super::{is_line_end, peek};
use crate::{Lexer, TokenKind, ValidKinds};

const SEPARATOR: char = '\\';

/// Returns `true` if `c` can never appear inside a namespace path.
///
/// These are the operators of the surrounding expression language.
#[inline]
const fn is_path_terminator(c: char) -> bool {
    matches!(c, '=' | '&' | '|' | '+' | '-' | '/' | '*' | '<' | '>' | '%' | '!') || is_line_end(c)
}

pub(super) fn scan_namespace<L: Lexer + ?Sized>(
    lexer: &mut L,
    valid: ValidKinds,
) -> Option<TokenKind> {
    if valid.has(TokenKind::NamespaceStart) {
        scan_separator(lexer, TokenKind::NamespaceStart)
    } else if valid.has(TokenKind::NamespaceContent) {
        scan_content(lexer)
    } else {
        scan_separator(lexer, TokenKind::NamespaceEnd)
    }
}

fn scan_separator<L: Lexer + ?Sized>(lexer: &mut L, kind: TokenKind) -> Option<TokenKind> {
    if peek(lexer) != Some(SEPARATOR) {
        return None;
    }
    lexer.advance_include();
    Some(kind)
}

/// Scans the path between the opening and the closing separator.
///
/// The content ends before the last separator seen when an operator or the end of the line is
/// reached, so inner separators stay part of it.
fn scan_content<L: Lexer + ?Sized>(lexer: &mut L) -> Option<TokenKind> {
    let mut saw_separator = false;
    loop {
        match peek(lexer) {
            // Unterminated path.
            None if !saw_separator => return None,
            None => return Some(TokenKind::NamespaceContent),
            Some('$') => {
                lexer.advance_include();
                // `$\` is a variable reference cut off by the path boundary.
                if peek(lexer) == Some(SEPARATOR) {
                    return None;
                }
            }
            Some(SEPARATOR) => {
                lexer.mark_boundary();
                lexer.advance_include();
                saw_separator = true;
            }
            Some(c) if is_path_terminator(c) => {
                if !saw_separator {
                    lexer.mark_boundary();
                }
                return Some(TokenKind::NamespaceContent);
            }
            Some(_) => lexer.advance_include(),
        }
    }
}
