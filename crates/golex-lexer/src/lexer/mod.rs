pub mod classify;
pub mod cursor;
pub mod token;

mod scanner;

pub use classify::classify;
pub use scanner::Lexer;
pub use token::{Token, TokenKind};
