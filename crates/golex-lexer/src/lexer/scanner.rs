use golex_common::DiagnosticBag;
use tracing::{debug, trace};

use super::classify::{classify, diagnose};
use super::cursor::Cursor;
use super::token::{Token, TokenKind};

/// Hand-written lexer for the language.
///
/// Symbols are lexed one byte at a time; every other run of bytes up to the
/// next delimiter is a word, classified as a keyword, identifier, integer,
/// float or illegal token. The lexer never fails: after the input is
/// exhausted every call returns [`TokenKind::Eof`].
pub struct Lexer<'src> {
    cursor: Cursor<'src>,
    /// Set once the iterator has yielded its end-of-input token.
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            finished: false,
        }
    }

    /// Tokenize the entire source, returning all tokens (ending with
    /// [`TokenKind::Eof`]) and one diagnostic per suspicious token.
    pub fn tokenize(mut self) -> (Vec<Token>, DiagnosticBag) {
        let mut tokens = Vec::new();
        let mut diagnostics = DiagnosticBag::new();
        loop {
            let token = self.next_token();
            trace!(kind = ?token.kind, literal = %token.literal.escape_debug(), "token");
            if let Some(diag) = diagnose(&token) {
                diagnostics.report(diag);
            }
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        debug!(
            tokens = tokens.len(),
            errors = diagnostics.error_count(),
            "tokenized source"
        );
        (tokens, diagnostics)
    }

    /// Scan the next token.
    pub fn next_token(&mut self) -> Token {
        self.cursor.eat_while(is_whitespace);

        if self.cursor.is_eof() {
            return Token::eof();
        }

        let ch = self.cursor.current();
        if let Some(kind) = TokenKind::symbol_from_byte(ch) {
            self.cursor.bump();
            return Token::new(kind, char::from(ch).to_string());
        }

        let word = self.scan_word();
        Token::new(classify(word), word)
    }

    /// Consume bytes up to the next delimiter. The byte under the cursor is
    /// never a delimiter here, so at least one byte is consumed.
    fn scan_word(&mut self) -> &'src str {
        let start = self.cursor.offset();
        self.cursor.eat_while(|b| !is_delimiter(b));
        self.cursor.slice_from(start)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields every token up to and including the first end-of-input token.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.is_eof();
        Some(token)
    }
}

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Whitespace and every symbol byte except `.`, which stays inside words so
/// that `3.14` reaches the float recognizer whole.
fn is_delimiter(b: u8) -> bool {
    is_whitespace(b) || (b != b'.' && TokenKind::symbol_from_byte(b).is_some())
}
