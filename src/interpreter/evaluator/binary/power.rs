use crate::{
    ast::{BinaryOperator, Position},
    error::ErlError,
    interpreter::{
        evaluator::{
            binary::scalar::{integral_or_float, unsupported_operands},
            core::EvalResult,
        },
        value::core::Value,
    },
};

/// Evaluates an exponentiation operation.
///
/// Integer bases with non-negative Integer exponents use checked integer
/// arithmetic. Every other numeric pair is computed in floating point; for
/// two Integers the result is demoted back to Integer when it is integral.
/// A result that is not a finite real number, such as a fractional power of
/// a negative base, is an evaluation error.
///
/// # Parameters
/// - `base`: The base value.
/// - `exponent`: The exponent value.
/// - `position`: Position of the `^`, for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the result of `base ^ exponent`.
///
/// # Example
/// ```
/// use erl::{
///     ast::Position,
///     interpreter::{evaluator::binary::power::eval_pow, value::core::Value},
/// };
///
/// let position = Position::default();
///
/// assert_eq!(eval_pow(&Value::Integer(2), &Value::Integer(10), position).unwrap(), Value::Integer(1024));
/// assert_eq!(eval_pow(&Value::Integer(2), &Value::Integer(-1), position).unwrap(), Value::Float(0.5));
/// assert_eq!(eval_pow(&Value::Integer(-1), &Value::Integer(5_000_000_001), position).unwrap(), Value::Integer(-1));
/// assert!(eval_pow(&Value::Integer(2), &Value::Integer(5_000_000_000), position).is_err());
/// assert!(eval_pow(&Value::Integer(-8), &Value::Float(0.5), position).is_err());
/// ```
pub fn eval_pow(base: &Value, exponent: &Value, position: Position) -> EvalResult<Value> {
    let overflow = || ErlError::evaluation(format!("Integer overflow in '{base} ^ {exponent}'"), position);

    match (base, exponent) {
        (Value::Integer(b), Value::Integer(e)) if *e >= 0 => {
            let result = match (u32::try_from(*e), *b) {
                (Ok(e), b) => b.checked_pow(e),
                // Exponents past u32 only fit for bases whose powers stay put.
                (Err(_), b @ (0 | 1)) => Some(b),
                (Err(_), -1) => Some(if e % 2 == 0 { 1 } else { -1 }),
                (Err(_), _) => None,
            };
            result.map(Value::Integer).ok_or_else(overflow)
        },
        _ => {
            let (Some(b), Some(e)) = (base.as_float(), exponent.as_float()) else {
                return Err(unsupported_operands(BinaryOperator::Exponent, base, exponent, position));
            };

            let result = b.powf(e);
            if !result.is_finite() {
                return Err(ErlError::evaluation(format!("'{base} ^ {exponent}' has no real result"),
                                                position));
            }

            if matches!((base, exponent), (Value::Integer(_), Value::Integer(_))) {
                Ok(integral_or_float(result))
            } else {
                Ok(Value::Float(result))
            }
        },
    }
}
