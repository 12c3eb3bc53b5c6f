//! Utility macros for the compiler.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The token's source text
/// * `$position` - Line and column where the token starts
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntLiteral, "42".to_string(), Position::new(1, 9));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $position:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            position: $position,
        }
    };
}
