//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance, with or without a payload

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's payload (optional, defaults to `TokenValue::None`)
/// * `$position` - Position of the token's first character
///
/// # Example
///
/// ```ignore
/// let plus = MK_TOKEN!(TokenKind::Plus, position);
/// let number = MK_TOKEN!(TokenKind::Number, TokenValue::Number(42), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $position:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $crate::lexer::tokens::TokenValue::None,
            position: $position,
        }
    };
    ($kind:expr, $value:expr, $position:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            position: $position,
        }
    };
}
