//! Lines of free-form section content, and the section headers that end them.

use super::{Scanner, is_horizontal_whitespace, is_line_end, peek};
use crate::{
    Lexer, MAX_WORD_LEN, TokenKind, ValidKinds,
    section::{longest_keyword_len, match_keyword},
};
use migoto_config::MatchMode;

impl Scanner {
    /// Scans one line of section content.
    ///
    /// Leading whitespace is skipped. A line starting with `;` is a comment and a line with no
    /// text is blank; both give a zero-width token so they don't end the enclosing section. A
    /// line starting with `[` and a known section name gives a zero-width [`HeaderStart`] before
    /// the `[`. Anything else is content up to, but not including, the line end.
    ///
    /// [`HeaderStart`]: TokenKind::HeaderStart
    pub(super) fn scan_line<L: Lexer + ?Sized>(
        &mut self,
        lexer: &mut L,
        valid: ValidKinds,
    ) -> Option<TokenKind> {
        let mut saw_text = false;
        loop {
            let c = match peek(lexer) {
                Some(c) if !is_line_end(c) => c,
                _ => break,
            };
            if saw_text {
                lexer.advance_include();
                continue;
            }

            match c {
                c if is_horizontal_whitespace(c) => lexer.advance_exclude(),
                ';' => {
                    lexer.mark_boundary();
                    return line_kind(valid);
                }
                '[' => {
                    lexer.mark_boundary();
                    lexer.advance_include();
                    if self.probe_header(lexer) {
                        return valid.has(TokenKind::HeaderStart).then_some(TokenKind::HeaderStart);
                    }
                    saw_text = true;
                }
                _ => {
                    lexer.advance_include();
                    saw_text = true;
                }
            }
        }

        lexer.mark_boundary();
        line_kind(valid)
    }

    /// Checks whether the header name after a `[` starts with a known section name.
    ///
    /// Consumes interior whitespace and the probed name. Collection stops at the first
    /// non-alphabetic character, so `[Key 1]` probes `Key` but `[Ke y]` probes only `Ke`.
    fn probe_header<L: Lexer + ?Sized>(&mut self, lexer: &mut L) -> bool {
        while peek(lexer).is_some_and(is_horizontal_whitespace) {
            lexer.advance_include();
        }

        let Some(first) = peek(lexer) else { return false };
        let max_len = match self.config.match_mode {
            MatchMode::Exact => longest_keyword_len(first),
            MatchMode::Substring if first.is_ascii_alphabetic() => MAX_WORD_LEN,
            MatchMode::Substring => 0,
        };
        if max_len == 0 {
            return false;
        }

        self.word.reset();
        while self.word.len() < max_len {
            match peek(lexer) {
                Some(c) if c.is_ascii_alphabetic() => {
                    self.word.push(c);
                    lexer.advance_include();
                }
                _ => break,
            }
        }
        let keyword = match_keyword(&self.word, self.config.match_mode);
        self.word.reset();
        keyword.is_some()
    }
}

fn line_kind(valid: ValidKinds) -> Option<TokenKind> {
    valid.has(TokenKind::ExternalLine).then_some(TokenKind::ExternalLine)
}
