//! Word classification.
//!
//! A word is a maximal run of non-delimiter bytes. The recognizers overlap
//! (`case` is also a valid identifier, `42` is also a valid float), so the
//! order in [`classify`] is the precedence.

use golex_common::Diagnostic;
use unicode_general_category::{get_general_category, GeneralCategory};

use super::token::{Token, TokenKind};

/// Decide the kind of a word.
///
/// Tried in order: keyword table, identifier, integer, floating point.
/// Anything else is [`TokenKind::Illegal`].
pub fn classify(word: &str) -> TokenKind {
    if let Some(keyword) = TokenKind::keyword_from_str(word) {
        keyword
    } else if is_identifier(word) {
        TokenKind::Identifier
    } else if is_integer(word) {
        TokenKind::IntLiteral
    } else if is_float(word) {
        TokenKind::FloatLiteral
    } else {
        TokenKind::Illegal
    }
}

/// `[_a-zA-Z\p{L}][_a-zA-Z0-9\p{L}]*`
pub fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) if is_ident_start(c) => chars.all(is_ident_continue),
        _ => false,
    }
}

/// `0`, a run of decimal digits, or `0x`/`0X` followed by alphanumerics.
///
/// The hex form accepts any ASCII letter after the prefix; `0xZZ` is an
/// integer literal here and left for later stages to reject.
pub fn is_integer(word: &str) -> bool {
    if let Some(digits) = word
        .strip_prefix("0x")
        .or_else(|| word.strip_prefix("0X"))
    {
        return !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_alphanumeric());
    }
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit())
}

/// `digits* ('.' digits*)? ([eE] digits+)?` with at least one mantissa digit.
pub fn is_float(word: &str) -> bool {
    let bytes = word.as_bytes();
    let mut pos = eat_digits(bytes, 0);
    let mut mantissa_digits = pos;

    if bytes.get(pos) == Some(&b'.') {
        let frac_start = pos + 1;
        pos = eat_digits(bytes, frac_start);
        mantissa_digits += pos - frac_start;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let exp_start = pos + 1;
        pos = eat_digits(bytes, exp_start);
        if pos == exp_start {
            return false;
        }
    }

    mantissa_digits > 0 && pos == bytes.len()
}

/// Explain a token the classifier found suspicious.
///
/// Returns an error for illegal tokens and a warning for hex literals
/// holding letters beyond `f`; `None` for everything else.
pub fn diagnose(token: &Token) -> Option<Diagnostic> {
    let word = token.literal.as_str();
    match token.kind {
        TokenKind::Illegal => {
            let diag = Diagnostic::error(format!("illegal token '{}'", word.escape_debug()));
            let suggestion = if word == "0x" || word == "0X" {
                Some("a hexadecimal literal needs at least one digit after '0x'")
            } else if has_empty_exponent(word) {
                Some("an exponent needs at least one digit")
            } else if word.starts_with(|c: char| c.is_ascii_digit())
                && word.chars().any(is_ident_start)
            {
                Some("identifiers cannot start with a digit")
            } else {
                None
            };
            Some(match suggestion {
                Some(help) => diag.with_suggestion(help),
                None => diag,
            })
        }
        TokenKind::IntLiteral if is_loose_hex(word) => Some(Diagnostic::warning(format!(
            "integer literal '{}' contains non-hexadecimal digits",
            word
        ))),
        _ => None,
    }
}

fn eat_digits(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    pos
}

/// A mantissa followed by `e`/`E` and nothing else, e.g. `1e` or `2.5E`.
fn has_empty_exponent(word: &str) -> bool {
    match word.strip_suffix(&['e', 'E'][..]) {
        Some(mantissa) => is_float(mantissa),
        None => false,
    }
}

fn is_loose_hex(word: &str) -> bool {
    word.len() > 2
        && (word.starts_with("0x") || word.starts_with("0X"))
        && !word[2..].bytes().all(|b| b.is_ascii_hexdigit())
}

fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic() || (!c.is_ascii() && is_unicode_letter(c))
}

/// General category L (`Lu`, `Ll`, `Lt`, `Lm`, `Lo`). Letter numbers, marks
/// and other alphabetic symbols are not letters.
fn is_unicode_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}
