use crate::{
    ast::Operator,
    error::ArithmeticError,
    interpreter::evaluator::core::EvalResult,
    util::num::{f64_to_i64_truncated, i64_to_f64_checked},
};

/// Evaluates `base ^ exponent`.
///
/// Both operands are converted to `f64`, raised with `powf`, and the result
/// is truncated toward zero. Negative exponents therefore yield `0` for any
/// base with magnitude above one.
///
/// # Errors
/// `DivisionByZero` for zero raised to a negative exponent.
/// `Overflow` if an operand is not exactly representable as an `f64`, or if
/// the result is not finite or falls outside the `i64` range.
///
/// # Example
/// ```
/// use linecalc::interpreter::evaluator::power::eval_pow;
///
/// assert_eq!(eval_pow(2, 10), Ok(1024));
/// assert_eq!(eval_pow(2, -1), Ok(0));
/// assert!(eval_pow(10, 30).is_err());
/// assert!(eval_pow(0, -1).is_err());
/// ```
pub fn eval_pow(base: i64, exponent: i64) -> EvalResult<i64> {
    let overflow = ArithmeticError::Overflow { op:    Operator::Power,
                                               left:  base,
                                               right: exponent, };

    if base == 0 && exponent < 0 {
        return Err(ArithmeticError::DivisionByZero);
    }

    let b = i64_to_f64_checked(base, overflow)?;
    let e = i64_to_f64_checked(exponent, overflow)?;

    f64_to_i64_truncated(b.powf(e), overflow)
}
