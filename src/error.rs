/// Parsing errors.
///
/// Defines all error types that can occur while turning a line into an
/// expression tree: unrecognized characters, unbalanced parentheses, missing
/// operands or operators, and literals that do not fit an `i64`.
pub mod parse_error;
/// Arithmetic errors.
///
/// Contains the errors raised while evaluating an expression tree, such as
/// division by zero or integer overflow.
pub mod arithmetic_error;

use thiserror::Error;

pub use arithmetic_error::ArithmeticError;
pub use parse_error::ParseError;

/// Any failure of a single evaluation call.
///
/// Both variants are terminal for the call that produced them; there is no
/// partial result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The line could not be turned into an expression tree.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression tree could not be evaluated.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

impl Error {
    /// Byte offset of the failure in the input line, for parse errors.
    ///
    /// ## Example
    /// ```
    /// use linecalc::evaluate;
    ///
    /// assert_eq!(evaluate("1 ? 2").unwrap_err().offset(), Some(2));
    /// assert_eq!(evaluate("5 / 0").unwrap_err().offset(), None);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::Parse(e) => Some(e.offset()),
            Self::Arithmetic(_) => None,
        }
    }
}
