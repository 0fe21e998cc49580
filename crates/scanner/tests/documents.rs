//! Drives the scanner the way the grammar does, over whole documents.

#![allow(unused_crate_dependencies)]

use expect_test::{Expect, expect};
use migoto_scanner::{
    Scanner, StrLexer, TokenKind, ValidKinds,
    section::{SECTION_NAMES, header_suffix_kinds},
};
use std::fmt::Write;

/// A minimal grammar host: blank lines, comments, content lines, and section headers.
struct Host<'src> {
    lexer: StrLexer<'src>,
    scanner: Scanner,
    /// Round-trip the scanner state through its serialized form before every call.
    reload: bool,
    out: String,
}

impl<'src> Host<'src> {
    fn new(src: &'src str) -> Self {
        Self {
            lexer: StrLexer::new(src),
            scanner: Scanner::new(),
            reload: false,
            out: String::new(),
        }
    }

    fn scan(&mut self, valid: ValidKinds) -> Option<TokenKind> {
        if self.reload {
            let mut buf = [0; 1024];
            let len = self.scanner.serialize(&mut buf);
            self.scanner = Scanner::new();
            self.scanner.deserialize(&buf[..len]);
        }
        let token = self.lexer.next_token(&mut self.scanner, valid)?;
        if token.kind != TokenKind::LineBoundary {
            writeln!(self.out, "{} {:?}", token.kind, token.text(self.lexer.src())).unwrap();
        }
        Some(token.kind)
    }

    fn skip_line(&mut self) {
        self.lexer.eat_while(|c| c != '\n');
    }

    fn document(mut self) -> String {
        loop {
            self.scan(ValidKinds::LINE_BOUNDARY);
            if self.lexer.rest().is_empty() {
                break;
            }
            let pos = self.lexer.pos();
            match self.scan(ValidKinds::LINE) {
                Some(TokenKind::HeaderStart) => self.header(),
                Some(TokenKind::ExternalLine) => self.skip_line(),
                kind => panic!("unexpected {kind:?} at {pos}: {:?}", self.lexer.rest()),
            }
        }
        self.out
    }

    fn header(&mut self) {
        assert!(self.lexer.bump_str("["));
        self.lexer.eat_while(|c| c == ' ' || c == '\t');
        let mut names = SECTION_NAMES.to_vec();
        names.sort_by_key(|name| std::cmp::Reverse(name.len()));
        let keyword = names
            .into_iter()
            .find(|name| self.lexer.bump_str_ignore_case(name))
            .expect("header start without a keyword");
        writeln!(self.out, "keyword {keyword}").unwrap();

        let kinds = header_suffix_kinds(keyword);
        if !kinds.is_empty() {
            self.scan(kinds).expect("header suffix");
        }
        self.skip_line();
    }
}

fn check(src: &str, expect: Expect) {
    let actual = Host::new(src).document();
    let reloaded = Host { reload: true, ..Host::new(src) }.document();
    assert_eq!(actual, reloaded);
    expect.assert_eq(&actual);
}

#[test]
fn mod_ini() {
    check(
        "\
; Toggle the HUD
[Constants]
global $active = 0

[KeyToggleHUD]
key = VK_F1
  type = cycle

[ShaderRegexFog.Pattern.Replace]
[Include]
[TextureOverrideBody]
hash = 1234abcd
    ; indented comment
[ Present ]
run = CommandListHUD
",
        expect![[r#"
            external_line ""
            header_start ""
            keyword constants
            external_line "global $active = 0"
            header_start ""
            keyword key
            key_suffix "ToggleHUD"
            external_line "key = VK_F1"
            external_line "type = cycle"
            header_start ""
            keyword shaderregex
            regex_pattern_replace "Fog.Pattern.Replace"
            header_start ""
            keyword include
            include_suffix ""
            header_start ""
            keyword textureoverride
            command_list_suffix "Body"
            external_line "hash = 1234abcd"
            external_line ""
            header_start ""
            keyword present
            external_line "run = CommandListHUD"
        "#]],
    );
}

#[test]
fn unknown_sections_stay_in_content() {
    check(
        "\
[Present]
run = 1
[NotASection]
[ShaderOverride1]\r
hash = 2\r
",
        expect![[r#"
            header_start ""
            keyword present
            external_line "run = 1"
            external_line "[NotASection]"
            header_start ""
            keyword shaderoverride
            command_list_suffix "1"
            external_line "hash = 2"
        "#]],
    );
}

#[test]
fn namespaced_variable() {
    let src = "$\\mods\\hud.ini\\active = 1";
    let mut lexer = StrLexer::new(src);
    let mut scanner = Scanner::new();
    let mut tokens = Vec::new();

    assert!(lexer.bump_str("$"));
    let path =
        [ValidKinds::NAMESPACE_START, ValidKinds::NAMESPACE_CONTENT, ValidKinds::NAMESPACE_END];
    for valid in path {
        let token = lexer.next_token(&mut scanner, valid).expect("namespace token");
        tokens.push(format!("{token:?} {:?}", token.text(src)));
    }
    lexer.eat_while(char::is_alphanumeric);
    assert_eq!(lexer.rest(), " = 1");

    expect![[r#"
        [
            "namespace_start@1..2 \"\\\\\"",
            "namespace_content@2..14 \"mods\\\\hud.ini\"",
            "namespace_end@14..15 \"\\\\\"",
        ]
    "#]]
    .assert_debug_eq(&tokens);
}
