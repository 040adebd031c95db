use crate::{ast::Expr, error::ArithmeticError, interpreter::evaluator::binary::eval_binary};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `ArithmeticError` describing the failure.
pub type EvalResult<T> = Result<T, ArithmeticError>;

impl Expr {
    /// Evaluates the tree and returns its integer value.
    ///
    /// The left subtree of a node is always evaluated before the right one.
    ///
    /// # Errors
    /// Returns the first [`ArithmeticError`] met, such as division by zero.
    ///
    /// # Example
    /// ```
    /// use linecalc::ast::{Expr, Operator};
    ///
    /// let expr = Expr::binary(Operator::Subtraction,
    ///                         Expr::binary(Operator::Subtraction, Expr::Value(8), Expr::Value(3)),
    ///                         Expr::Value(2));
    /// assert_eq!(expr.evaluate(), Ok(3));
    /// ```
    pub fn evaluate(&self) -> EvalResult<i64> {
        match self {
            Self::Value(n) => Ok(*n),
            Self::BinaryOp { op, left, right } => {
                let left = left.evaluate()?;
                let right = right.evaluate()?;
                eval_binary(*op, left, right)
            },
        }
    }
}
