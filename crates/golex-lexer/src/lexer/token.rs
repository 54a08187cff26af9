use serde::Serialize;
use std::fmt;

/// Literal carried by the end-of-input token.
pub const EOF_LITERAL: &str = "\0";

/// A single token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    pub fn eof() -> Self {
        Self {
            kind: TokenKind::Eof,
            literal: EOF_LITERAL.to_string(),
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.literal)
    }
}

/// All token kinds of the language.
///
/// The compound operators and `StringLiteral` are part of the vocabulary but
/// the scanner never produces them: symbols are lexed one byte at a time and
/// quotes fall through to the word classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // === Identifiers ===
    Identifier,

    // === Keywords ===
    Break,
    Default,
    Func,
    Interface,
    Case,
    Defer,
    Clean,
    Map,
    Struct,
    Else,
    Goto,
    Package,
    Switch,
    Const,
    Fallthrough,
    If,
    Range,
    Type,
    Continue,
    For,
    Import,
    Return,
    Var,

    // === Operators ===
    Plus,                // +
    Minus,               // -
    Star,                // *
    Slash,               // /
    Percent,             // %
    Amp,                 // &
    Pipe,                // |
    Caret,               // ^
    LessLess,            // <<
    GreaterGreater,      // >>
    PlusEqual,           // +=
    StarEqual,           // *=
    SlashEqual,          // /=
    PercentEqual,        // %=
    AmpEqual,            // &=
    PipeEqual,           // |=
    CaretEqual,          // ^=
    LessLessEqual,       // <<=
    GreaterGreaterEqual, // >>=
    AmpAmp,              // &&
    PipePipe,            // ||
    PlusPlus,            // ++
    MinusMinus,          // --
    EqualEqual,          // ==
    Less,                // <
    Greater,             // >
    Equal,               // =
    Bang,                // !
    BangEqual,           // !=
    LessEqual,           // <=
    GreaterEqual,        // >=

    // === Delimiters ===
    LeftParen,    // (
    RightParen,   // )
    LeftBracket,  // [
    RightBracket, // ]
    LeftBrace,    // {
    RightBrace,   // }
    Semicolon,    // ;
    Comma,        // ,
    Dot,          // .

    // === Literals ===
    IntLiteral,
    FloatLiteral,
    StringLiteral,

    // === Special ===
    Eof,
    Illegal,
}

impl TokenKind {
    /// Try to match a word to a keyword.
    pub fn keyword_from_str(s: &str) -> Option<TokenKind> {
        match s {
            "break" => Some(TokenKind::Break),
            "default" => Some(TokenKind::Default),
            "func" => Some(TokenKind::Func),
            "interface" => Some(TokenKind::Interface),
            "case" => Some(TokenKind::Case),
            "defer" => Some(TokenKind::Defer),
            "clean" => Some(TokenKind::Clean),
            "map" => Some(TokenKind::Map),
            "struct" => Some(TokenKind::Struct),
            "else" => Some(TokenKind::Else),
            "goto" => Some(TokenKind::Goto),
            "package" => Some(TokenKind::Package),
            "switch" => Some(TokenKind::Switch),
            "const" => Some(TokenKind::Const),
            "fallthrough" => Some(TokenKind::Fallthrough),
            "if" => Some(TokenKind::If),
            "range" => Some(TokenKind::Range),
            "type" => Some(TokenKind::Type),
            "continue" => Some(TokenKind::Continue),
            "for" => Some(TokenKind::For),
            "import" => Some(TokenKind::Import),
            "return" => Some(TokenKind::Return),
            "var" => Some(TokenKind::Var),
            _ => None,
        }
    }

    /// Map a single-byte symbol to its kind.
    pub fn symbol_from_byte(b: u8) -> Option<TokenKind> {
        match b {
            b'+' => Some(TokenKind::Plus),
            b'-' => Some(TokenKind::Minus),
            b'*' => Some(TokenKind::Star),
            b'/' => Some(TokenKind::Slash),
            b'%' => Some(TokenKind::Percent),
            b'&' => Some(TokenKind::Amp),
            b'|' => Some(TokenKind::Pipe),
            b'^' => Some(TokenKind::Caret),
            b'<' => Some(TokenKind::Less),
            b'>' => Some(TokenKind::Greater),
            b'=' => Some(TokenKind::Equal),
            b'!' => Some(TokenKind::Bang),
            b'(' => Some(TokenKind::LeftParen),
            b'[' => Some(TokenKind::LeftBracket),
            b'{' => Some(TokenKind::LeftBrace),
            b',' => Some(TokenKind::Comma),
            b'.' => Some(TokenKind::Dot),
            b')' => Some(TokenKind::RightParen),
            b']' => Some(TokenKind::RightBracket),
            b'}' => Some(TokenKind::RightBrace),
            b';' => Some(TokenKind::Semicolon),
            _ => None,
        }
    }
}
