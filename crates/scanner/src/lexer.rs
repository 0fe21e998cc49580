//! The host lexer interface, and a reference host over a string slice.
//!
//! An external scanner never owns its input. The parsing host hands it a lexer positioned at the
//! current parse position; the scanner reads one character of lookahead at a time, consumes
//! characters into (or out of) the pending token, and declares where the token ends. The token
//! end may lie behind the read position: characters read after the last [`mark_boundary`] call
//! are looked at, but not made part of the token.
//!
//! [`mark_boundary`]: Lexer::mark_boundary

use crate::{Scanner, TokenKind, ValidKinds};
use std::{fmt, str::Chars};

/// Character returned by [`Lexer::lookahead`] at the end of input.
pub const EOF_CHAR: char = '\0';

/// The lexer interface a parsing host exposes to the external scanner.
pub trait Lexer {
    /// Returns the current unread character, or [`EOF_CHAR`] at the end of input.
    ///
    /// Getting [`EOF_CHAR`] doesn't always mean the end of input, it should be checked with
    /// [`at_end`](Self::at_end).
    fn lookahead(&self) -> char;

    /// Returns `true` if there is nothing more to read.
    fn at_end(&self) -> bool;

    /// Consumes the current character as part of the pending token.
    fn advance_include(&mut self);

    /// Consumes the current character without making it part of the pending token.
    ///
    /// The pending token restarts after the skipped character.
    fn advance_exclude(&mut self);

    /// Declares that the pending token ends at the current read position.
    ///
    /// May be called any number of times; the last call before the scanner returns wins.
    fn mark_boundary(&mut self);
}

/// A token produced by one successful scan call.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// Byte offset of the first character of the token.
    pub start: u32,
    /// Byte offset one past the last character of the token.
    pub end: u32,
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}..{}", self.kind, self.start, self.end)
    }
}

impl Token {
    /// Returns the length of the token in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` if the token is zero-width.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the source text of the token.
    #[inline]
    pub fn text<'src>(&self, src: &'src str) -> &'src str {
        &src[self.start as usize..self.end as usize]
    }
}

/// A host lexer over a string slice.
///
/// Reproduces the boundary semantics of the tree-sitter lexer: skipped characters move the
/// token start, [`mark_boundary`](Lexer::mark_boundary) fixes the token end, and a failed scan
/// leaves the read position where the call began. Between scan calls the owner can consume
/// grammar-level text with [`bump_str`](Self::bump_str) and [`eat_while`](Self::eat_while).
#[derive(Clone)]
pub struct StrLexer<'src> {
    src: &'src str,
    /// Iterator over the unread chars.
    chars: Chars<'src>,
    /// Byte offset where the pending token starts.
    token_start: usize,
    /// Byte offset of the last boundary mark, if any.
    token_end: Option<usize>,
}

impl fmt::Debug for StrLexer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrLexer")
            .field("pos", &self.pos())
            .field("token_start", &self.token_start)
            .field("token_end", &self.token_end)
            .finish()
    }
}

impl<'src> StrLexer<'src> {
    /// Creates a new lexer over the given input string slice.
    pub fn new(src: &'src str) -> Self {
        Self { src, chars: src.chars(), token_start: 0, token_end: None }
    }

    /// Returns the whole input.
    #[inline]
    pub fn src(&self) -> &'src str {
        self.src
    }

    /// Returns the remaining input as a string slice.
    #[inline]
    pub fn rest(&self) -> &'src str {
        self.chars.as_str()
    }

    /// Returns the current read position, in bytes.
    #[inline]
    pub fn pos(&self) -> usize {
        self.src.len() - self.chars.as_str().len()
    }

    /// Runs one scan call, like the host does when the parser needs an external token.
    ///
    /// On success the read position moves to the end of the returned token. On failure the read
    /// position is restored to where it was before the call.
    pub fn next_token(&mut self, scanner: &mut Scanner, valid: ValidKinds) -> Option<Token> {
        let checkpoint = self.chars.clone();
        self.token_start = self.pos();
        self.token_end = None;

        let Some(kind) = scanner.scan(self, valid) else {
            self.chars = checkpoint;
            return None;
        };

        let end = self.token_end.unwrap_or_else(|| self.pos()).max(self.token_start);
        let token = Token { kind, start: self.token_start as u32, end: end as u32 };
        self.seek(end);
        Some(token)
    }

    /// Consumes `s` if the remaining input starts with it.
    pub fn bump_str(&mut self, s: &str) -> bool {
        if self.rest().starts_with(s) {
            self.ignore_bytes(s.len());
            true
        } else {
            false
        }
    }

    /// Consumes `s` if the remaining input starts with it, ignoring ASCII case.
    pub fn bump_str_ignore_case(&mut self, s: &str) -> bool {
        match self.rest().get(..s.len()) {
            Some(head) if head.eq_ignore_ascii_case(s) => {
                self.ignore_bytes(s.len());
                true
            }
            _ => false,
        }
    }

    /// Eats symbols while predicate returns true or until the end of input is reached.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_eof() && predicate(self.first()) {
            self.chars.next();
        }
    }

    /// Peeks the next symbol from the input stream without consuming it.
    fn first(&self) -> char {
        self.chars.clone().next().unwrap_or(EOF_CHAR)
    }

    /// Checks if there is nothing more to consume.
    fn is_eof(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    /// Advances `n` bytes.
    fn ignore_bytes(&mut self, n: usize) {
        self.chars = self.rest()[n..].chars();
    }

    /// Moves the read position to the absolute byte offset `pos`.
    fn seek(&mut self, pos: usize) {
        self.chars = self.src[pos..].chars();
    }
}

impl Lexer for StrLexer<'_> {
    #[inline]
    fn lookahead(&self) -> char {
        self.first()
    }

    #[inline]
    fn at_end(&self) -> bool {
        self.is_eof()
    }

    #[inline]
    fn advance_include(&mut self) {
        self.chars.next();
    }

    #[inline]
    fn advance_exclude(&mut self) {
        self.chars.next();
        self.token_start = self.pos();
    }

    #[inline]
    fn mark_boundary(&mut self) {
        self.token_end = Some(self.pos());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_behind_read_position() {
        let mut lexer = StrLexer::new("  abc def");
        lexer.advance_exclude();
        lexer.advance_exclude();
        assert_eq!(lexer.token_start, 2);
        lexer.advance_include();
        lexer.advance_include();
        lexer.advance_include();
        lexer.mark_boundary();
        lexer.advance_include();
        lexer.advance_include();
        assert_eq!(lexer.lookahead(), 'e');
        assert_eq!(lexer.token_end, Some(5));
        assert_eq!(lexer.pos(), 7);
    }

    #[test]
    fn end_of_input() {
        let mut lexer = StrLexer::new("é");
        assert!(!lexer.at_end());
        assert_eq!(lexer.lookahead(), 'é');
        lexer.advance_include();
        assert!(lexer.at_end());
        assert_eq!(lexer.lookahead(), EOF_CHAR);
        assert_eq!(lexer.pos(), 2);
        // Advancing past the end is a no-op.
        lexer.advance_include();
        assert_eq!(lexer.pos(), 2);
    }

    #[test]
    fn grammar_helpers() {
        let mut lexer = StrLexer::new("[ShaderOverride1]");
        assert!(lexer.bump_str("["));
        assert!(!lexer.bump_str("shader"));
        assert!(lexer.bump_str_ignore_case("shaderOVERRIDE"));
        lexer.eat_while(|c| c != ']');
        assert_eq!(lexer.rest(), "]");
        assert!(!lexer.bump_str_ignore_case("]]"));
    }
}
