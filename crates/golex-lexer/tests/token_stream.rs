//! Token stream properties over arbitrary input.

use golex_lexer::lexer::{Lexer, Token, TokenKind};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn lex_all(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Source fragments that each lex to exactly one token.
fn fragment() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "+", "-", "*", "/", "%", "&", "|", "^", "<", ">", "=", "!", "(", ")", "[", "]", "{", "}",
        ";", ",", ".", "func", "return", "clean", "x", "_tmp", "αβ", "42", "0600", "0xBadFace",
        "3.14", "1E6", "0.", "?", "9lives", "@",
    ])
}

fn whitespace_run() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec![' ', '\t', '\r', '\n']), 1..4)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn whitespace_is_transparent(
        parts in prop::collection::vec((fragment(), whitespace_run()), 0..24),
        leading in whitespace_run(),
    ) {
        let plain: Vec<&str> = parts.iter().map(|(frag, _)| *frag).collect();
        let baseline = lex_all(&plain.join(" "));

        let mut spaced = leading;
        for (frag, ws) in &parts {
            spaced.push_str(frag);
            spaced.push_str(ws);
        }
        prop_assert_eq!(lex_all(&spaced), baseline);
    }

    #[test]
    fn literals_reassemble_the_input(source in any::<String>()) {
        let tokens = lex_all(&source);
        let (last, rest) = tokens.split_last().expect("stream always ends with Eof");
        prop_assert!(last.is_eof());
        prop_assert!(rest.iter().all(|t| !t.is_eof()));

        let joined: String = rest.iter().map(|t| t.literal.as_str()).collect();
        let expected: String = source
            .chars()
            .filter(|c| !matches!(c, ' ' | '\t' | '\r' | '\n'))
            .collect();
        prop_assert_eq!(joined, expected);
    }

    #[test]
    fn every_token_consumes_input(source in any::<String>()) {
        let tokens = lex_all(&source);
        prop_assert!(tokens.len() <= source.len() + 1);
        prop_assert!(tokens.iter().all(|t| !t.literal.is_empty()));
    }

    #[test]
    fn eof_repeats_forever(source in "[a-z0-9+?. ]{0,32}", extra in 1usize..16) {
        let mut lexer = Lexer::new(&source);
        while !lexer.next_token().is_eof() {}
        for _ in 0..extra {
            prop_assert_eq!(lexer.next_token(), Token::eof());
        }
    }
}

#[test]
fn end_to_end_scenario() {
    let tokens = lex_all("+ - foo123 42 3.14 ?\n");
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Plus, "+"),
            Token::new(TokenKind::Minus, "-"),
            Token::new(TokenKind::Identifier, "foo123"),
            Token::new(TokenKind::IntLiteral, "42"),
            Token::new(TokenKind::FloatLiteral, "3.14"),
            Token::new(TokenKind::Illegal, "?"),
            Token::eof(),
        ]
    );
}

#[test]
fn literal_forms() {
    let cases = [
        ("42", TokenKind::IntLiteral),
        ("0600", TokenKind::IntLiteral),
        ("0xBadFace", TokenKind::IntLiteral),
        ("170141183460469231731687303715884105727", TokenKind::IntLiteral),
        ("0.", TokenKind::FloatLiteral),
        ("72.40", TokenKind::FloatLiteral),
        ("072.40", TokenKind::FloatLiteral),
        ("2.71828", TokenKind::FloatLiteral),
        ("1E6", TokenKind::FloatLiteral),
        ("a", TokenKind::Identifier),
        ("_x9", TokenKind::Identifier),
        ("ThisVariableIsExported", TokenKind::Identifier),
        ("αβ", TokenKind::Identifier),
    ];
    for (source, kind) in cases {
        assert_eq!(
            lex_all(source),
            vec![Token::new(kind, source), Token::eof()],
            "{source:?}"
        );
    }
}

#[test]
fn tokenize_matches_iteration() {
    let source = "for i = 0; i < 10; i = i + 1 { total = total * 2.5e3 }";
    let (tokens, diags) = Lexer::new(source).tokenize();
    assert!(diags.is_empty());
    assert_eq!(tokens, lex_all(source));
}

#[test]
fn tokens_serialize_as_json() {
    let tokens = lex_all("x 1");
    let json = serde_json::to_value(&tokens).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "kind": "Identifier", "literal": "x" },
            { "kind": "IntLiteral", "literal": "1" },
            { "kind": "Eof", "literal": "\u{0}" },
        ])
    );
}

#[test]
fn lexers_run_independently_on_threads() {
    let source = String::from("func main() { return 0x1F; }");
    let expected = lex_all(&source);
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| lex_all(&source))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
