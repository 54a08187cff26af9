//! Lexer for a small Go-like language.
//!
//! ```
//! use golex_lexer::lexer::{Lexer, TokenKind};
//!
//! let kinds: Vec<_> = Lexer::new("x + 1").map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Identifier, TokenKind::Plus, TokenKind::IntLiteral, TokenKind::Eof]
//! );
//! ```

pub mod lexer;
