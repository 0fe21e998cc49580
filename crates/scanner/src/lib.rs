//! External scanner for the 3Dmigoto INI tree-sitter grammar.
//!
//! 3Dmigoto INI files mix plain `key = value` sections with headers that embed small languages of
//! their own: `[ShaderRegexName.Pattern.Replace]`, `[KeyToggleHUD]`, `\namespace\path\`
//! references. The grammar's own lexer can't tell which of these starts at a given position, so
//! the parser asks the [`Scanner`] instead, passing the set of [`TokenKind`]s it would accept.
//!
//! The parsing host is abstracted by the [`Lexer`] trait. [`StrLexer`] implements it over a
//! string, with the same token boundary rules as tree-sitter.

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod error;
pub use error::StateError;

mod kind;
pub use kind::{TokenKind, ValidKinds};

pub mod lexer;
pub use lexer::{Lexer, StrLexer, Token};

mod scanner;
pub use scanner::Scanner;

pub mod section;

mod word;
pub use word::{MAX_WORD_LEN, WordBuffer};

// Convenience re-exports.
pub use migoto_config as config;
