//! The external scanner: persistent state and the dispatcher.

use crate::{Lexer, StateError, TokenKind, ValidKinds, WordBuffer};
use migoto_config::ScannerConfig;
use tracing::{instrument, trace};

mod line;
mod namespace;
mod newline;
mod regex;
mod suffix;


/// Returns `true` if `c` ends a line. `\r` counts, so that CRLF line endings stay out of tokens.
#[inline]
const fn is_line_end(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

/// Returns `true` if `c` is whitespace within a line.
#[inline]
const fn is_horizontal_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t')
}

/// Returns the current character, or `None` at the end of input.
#[inline]
fn peek<L: Lexer + ?Sized>(lexer: &L) -> Option<char> {
    if lexer.at_end() { None } else { Some(lexer.lookahead()) }
}

/// External scanner for the 3Dmigoto INI grammar.
///
/// Resolves the tokens the grammar can't: where free-form section content ends, whether a `[`
/// starts a section header, the subject of suffixed headers, the `[ShaderRegex...]` header
/// variants, namespace paths and line boundaries.
///
/// The only state carried between calls is a [`WordBuffer`], which is empty whenever
/// [`scan`](Self::scan) returns.
#[derive(Clone, Debug, Default)]
pub struct Scanner {
    config: ScannerConfig,
    word: WordBuffer,
}

impl Scanner {
    /// Creates a new scanner with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new scanner with the given configuration.
    pub fn with_config(config: ScannerConfig) -> Self {
        Self { config, word: WordBuffer::new() }
    }

    /// Returns the scanner's configuration.
    #[inline]
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Returns the word accumulator.
    #[inline]
    pub fn word(&self) -> &WordBuffer {
        &self.word
    }

    /// Scans one token.
    ///
    /// `valid` is the set of kinds the grammar accepts at the current position. Returns the kind
    /// of the scanned token, which is always in `valid`, or `None` if no token was recognized. The
    /// token ends at the lexer's last boundary mark.
    #[instrument(name = "scan", level = "trace", skip_all, fields(valid = ?valid))]
    pub fn scan<L: Lexer + ?Sized>(
        &mut self,
        lexer: &mut L,
        valid: ValidKinds,
    ) -> Option<TokenKind> {
        if valid.contains(ValidKinds::ERROR_SENTINEL) {
            trace!("grammar is recovering from an error");
            return None;
        }

        let kind = if valid.has(TokenKind::LineBoundary) {
            newline::scan_line_boundary(lexer)
        } else if valid.intersects(ValidKinds::NAMESPACE) {
            namespace::scan_namespace(lexer, valid)
        } else if valid.intersects(ValidKinds::SUFFIXED) {
            suffix::scan_suffix(lexer, valid)
        } else if valid.intersects(ValidKinds::REGEX) {
            self.scan_regex(lexer, valid)
        } else if valid.intersects(ValidKinds::LINE) {
            self.scan_line(lexer, valid)
        } else {
            None
        };
        self.word.reset();

        debug_assert!(kind.is_none_or(|kind| valid.has(kind)), "{kind:?} is not in {valid:?}");
        match kind {
            Some(kind) => trace!(%kind, "accepted"),
            None => trace!("rejected"),
        }
        kind
    }

    /// Writes the scanner state to `buf`, returning the number of bytes written.
    ///
    /// Returns 0, meaning "nothing to restore", if the state doesn't fit in `buf` or in the
    /// configured serialization budget.
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        let budget = self.config.serialization_budget.min(buf.len());
        match self.word.serialize(&mut buf[..budget]) {
            Some(len) => len,
            None => {
                let len = self.word.serialized_len();
                trace!(len, budget, "state exceeds serialization budget");
                0
            }
        }
    }

    /// Restores the scanner state from bytes written by [`serialize`](Self::serialize).
    ///
    /// An empty slice resets the state.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is not a serialized state. This is a host/scanner protocol violation,
    /// not a property of the scanned text.
    pub fn deserialize(&mut self, bytes: &[u8]) {
        if let Err(err) = self.try_deserialize(bytes) {
            panic!("corrupt external scanner state: {err}");
        }
    }

    /// Restores the scanner state from bytes written by [`serialize`](Self::serialize).
    ///
    /// On error the state is left unchanged.
    pub fn try_deserialize(&mut self, bytes: &[u8]) -> Result<(), StateError> {
        self.word = WordBuffer::deserialize(bytes)?;
        Ok(())
    }
}
