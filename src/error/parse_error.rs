use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant carries the byte offset in the input line where the problem
/// was detected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The lexer met a character that starts no token.
    #[error("Error at offset {offset}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        offset:    usize,
    },
    /// A `)` was found with no open `(` before it.
    #[error("Error at offset {offset}: Closing parenthesis ')' has no matching '('.")]
    UnmatchedRightParen {
        /// Byte offset of the parenthesis.
        offset: usize,
    },
    /// A `(` was never closed.
    #[error("Error at offset {offset}: Expected closing parenthesis ')' but none found.")]
    UnclosedLeftParen {
        /// Byte offset of the unclosed parenthesis.
        offset: usize,
    },
    /// A line or sub-expression contained no tokens, e.g. `1 +` or `()`.
    #[error("Error at offset {offset}: Expected an expression but found nothing.")]
    EmptyExpression {
        /// Byte offset where the expression should have started.
        offset: usize,
    },
    /// A token other than a number was found where an operand belongs.
    #[error("Error at offset {offset}: Expected a number, found '{token}'.")]
    ExpectedOperand {
        /// Text of the token.
        token:  String,
        /// Byte offset of the token.
        offset: usize,
    },
    /// Two operands follow each other with no operator between them.
    #[error("Error at offset {offset}: Missing operator before this operand.")]
    MissingOperator {
        /// Byte offset of the second operand.
        offset: usize,
    },
    /// A numeric literal does not fit in a 64-bit signed integer.
    #[error("Error at offset {offset}: Literal {literal} is too large.")]
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
        /// Byte offset of the literal.
        offset:  usize,
    },
    /// The expression nests operators or parentheses too deeply.
    #[error("Error at offset {offset}: Expression is nested too deeply.")]
    TooDeep {
        /// Byte offset of the sub-expression that exceeded the limit.
        offset: usize,
    },
}

impl ParseError {
    /// Byte offset in the input line where the error was detected.
    ///
    /// ## Example
    /// ```
    /// use linecalc::error::ParseError;
    ///
    /// let err = ParseError::UnmatchedRightParen { offset: 4 };
    /// assert_eq!(err.offset(), 4);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { offset, .. }
            | Self::UnmatchedRightParen { offset }
            | Self::UnclosedLeftParen { offset }
            | Self::EmptyExpression { offset }
            | Self::ExpectedOperand { offset, .. }
            | Self::MissingOperator { offset }
            | Self::LiteralTooLarge { offset, .. }
            | Self::TooDeep { offset } => *offset,
        }
    }
}
