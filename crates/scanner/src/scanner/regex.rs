//! `[ShaderRegex...]` headers.
//!
//! Four header kinds share the `ShaderRegex` keyword and differ only in a dotted suffix:
//!
//! - `[ShaderRegexName]` is the command list,
//! - `[ShaderRegexName.InsertDeclarations]`,
//! - `[ShaderRegexName.Pattern]`,
//! - `[ShaderRegexName.Pattern.Replace]`.
//!
//! The name is scanned by a small state machine that only ever looks at the current character.

use super::{Scanner, is_line_end, peek};
use crate::{Lexer, TokenKind, ValidKinds, WordBuffer};

const INSERT_DECLARATIONS: &str = "insertdeclarations";
const PATTERN: &str = "pattern";
const REPLACE: &str = "replace";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Inside the section name, or in a dotted part that can't be a known suffix.
    NotSearching,
    /// Just after a `.`.
    GeneralSearch,
    /// Accumulating a word that started with `i`.
    InsertSearch,
    /// Accumulating a word that started with `p`.
    PatternSearch,
    /// Accumulating the word after `.Pattern.`.
    ReplaceSearch,
}

/// What the driver does with the current character after a [`RegexMachine::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    /// Consume the character and keep going.
    Advance,
    /// The header name ends before the current character.
    Finish(TokenKind),
}

/// The `[ShaderRegex...]` name state machine.
///
/// Independent of the lexer: [`step`](Self::step) is fed one character at a time, with `None` at
/// the end of input.
#[derive(Debug)]
struct RegexMachine<'a> {
    state: State,
    word: &'a mut WordBuffer,
}

impl<'a> RegexMachine<'a> {
    fn new(word: &'a mut WordBuffer) -> Self {
        word.reset();
        Self { state: State::NotSearching, word }
    }

    fn step(&mut self, c: Option<char>) -> Step {
        let c = match c {
            // Truncated input: fall back to the command list.
            None => return Step::Finish(TokenKind::RegexCommandList),
            Some(c) if c == ']' || is_line_end(c) => return Step::Finish(self.resolve()),
            Some(c) => c,
        };

        match self.state {
            State::NotSearching => {
                if c == '.' {
                    self.state = State::GeneralSearch;
                }
            }
            State::GeneralSearch => {
                self.state = match c {
                    'i' | 'I' => State::InsertSearch,
                    'p' | 'P' => State::PatternSearch,
                    _ => State::NotSearching,
                };
                if self.state != State::NotSearching {
                    self.word.push(c);
                }
            }
            State::InsertSearch | State::ReplaceSearch => {
                if c == '.' {
                    self.abandon();
                } else {
                    self.word.push(c);
                }
            }
            State::PatternSearch => {
                if c == '.' {
                    if self.word.eq_ignore_ascii_case(PATTERN) {
                        self.word.reset();
                        self.state = State::ReplaceSearch;
                    } else {
                        self.abandon();
                    }
                } else {
                    self.word.push(c);
                }
            }
        }
        Step::Advance
    }

    /// Returns the kind for a name that ends in the current state.
    fn resolve(&self) -> TokenKind {
        let (keyword, kind) = match self.state {
            State::InsertSearch => (INSERT_DECLARATIONS, TokenKind::RegexInsertDeclarations),
            State::PatternSearch => (PATTERN, TokenKind::RegexPattern),
            State::ReplaceSearch => (REPLACE, TokenKind::RegexPatternReplace),
            State::NotSearching | State::GeneralSearch => return TokenKind::RegexCommandList,
        };
        if self.word.eq_ignore_ascii_case(keyword) { kind } else { TokenKind::RegexCommandList }
    }

    fn abandon(&mut self) {
        self.word.reset();
        self.state = State::NotSearching;
    }
}

impl Scanner {
    /// Scans a `[ShaderRegex...]` header name, from just after the `[` up to the closing `]`.
    pub(super) fn scan_regex<L: Lexer + ?Sized>(
        &mut self,
        lexer: &mut L,
        valid: ValidKinds,
    ) -> Option<TokenKind> {
        let mut machine = RegexMachine::new(&mut self.word);
        loop {
            match machine.step(peek(lexer)) {
                Step::Advance => lexer.advance_include(),
                Step::Finish(kind) => {
                    lexer.mark_boundary();
                    return valid.has(kind).then_some(kind);
                }
            }
        }
    }
}
