//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance, deriving its length from the value
//! - `MK_ALTERNATION!` - Joins sub-patterns into one alternation group
//!
//! These macros reduce boilerplate in the rule table and token builder.

/// Creates a Token instance.
///
/// The length is the character count of `$value`, not its byte length, so
/// non-ASCII lexemes report the length a reader would count.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!("number".to_string(), "number".to_string(), "42".to_string(), 1, 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $name:expr, $value:expr, $start:expr, $position:expr) => {{
        let value: String = $value;
        Token {
            kind: $kind,
            name: $name,
            length: value.chars().count(),
            value,
            start: $start,
            position: $position,
        }
    }};
}

/// Joins an iterator of sub-patterns into a single `(a|b|c)` alternation.
///
/// Sub-patterns are tried left to right at each position, so longer
/// literals that share a prefix must come first.
///
/// # Example
///
/// ```ignore
/// let pattern = MK_ALTERNATION!(["==", "!=", ">"]);
/// assert_eq!(pattern, "(==|!=|>)");
/// ```
#[macro_export]
macro_rules! MK_ALTERNATION {
    ($patterns:expr) => {
        format!(
            "({})",
            $patterns.into_iter().collect::<Vec<_>>().join("|")
        )
    };
}
