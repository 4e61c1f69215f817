//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! Keeps token construction in the scanner down to a single line.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenType
/// * `$lexeme` - The exact source text of the token
/// * `$line` - The 1-based line the token starts on
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenType::Separator, String::from("^"), 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $line:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            literal: None,
            line: $line,
        }
    };
}
