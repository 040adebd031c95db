use crate::{
    ast::Operator,
    error::ArithmeticError,
    interpreter::evaluator::{core::EvalResult, power::eval_pow},
};

/// Applies a binary operator to two evaluated operands.
///
/// Addition, subtraction and multiplication are checked and report
/// `Overflow`. Division truncates toward zero; a zero divisor is reported as
/// `DivisionByZero`, and `i64::MIN / -1` as `Overflow`. Power delegates to
/// [`eval_pow`].
///
/// # Example
/// ```
/// use linecalc::{
///     ast::Operator,
///     error::ArithmeticError,
///     interpreter::evaluator::binary::eval_binary,
/// };
///
/// assert_eq!(eval_binary(Operator::Division, 7, 2), Ok(3));
/// assert_eq!(eval_binary(Operator::Division, -7, 2), Ok(-3));
/// assert_eq!(eval_binary(Operator::Division, 5, 0), Err(ArithmeticError::DivisionByZero));
/// ```
pub fn eval_binary(op: Operator, left: i64, right: i64) -> EvalResult<i64> {
    let overflow = ArithmeticError::Overflow { op, left, right };

    match op {
        Operator::Power => eval_pow(left, right),
        Operator::Product => left.checked_mul(right).ok_or(overflow),
        Operator::Division => {
            if right == 0 {
                Err(ArithmeticError::DivisionByZero)
            } else {
                left.checked_div(right).ok_or(overflow)
            }
        },
        Operator::Addition => left.checked_add(right).ok_or(overflow),
        Operator::Subtraction => left.checked_sub(right).ok_or(overflow),
    }
}
