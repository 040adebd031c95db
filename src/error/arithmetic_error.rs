use thiserror::Error;

use crate::ast::Operator;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Attempted division by zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// The result of an operation does not fit in a 64-bit signed integer.
    #[error("Integer overflow while computing {left} {op} {right}.")]
    Overflow {
        /// The operator that overflowed.
        op:    Operator,
        /// Left operand.
        left:  i64,
        /// Right operand.
        right: i64,
    },
}
