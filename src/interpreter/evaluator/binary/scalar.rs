use crate::{
    ast::{BinaryOperator, Position},
    error::ErlError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::{f64_to_i64_exact, i64_to_f64},
};

/// Evaluates `+`, `-`, `*`, `/`, `MOD` and `DIV`.
///
/// Two Integers use checked integer arithmetic and stay Integer, except for
/// `/` with a remainder, which yields a Float. Any Float operand promotes
/// the operation to Float. `+` on two Strings concatenates. A zero right
/// operand of `/`, `MOD` or `DIV` is an evaluation error for every numeric
/// type.
///
/// `DIV` rounds toward negative infinity; `MOD` takes the sign of the
/// dividend.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Position of the operator, for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the computed scalar.
///
/// # Example
/// ```
/// use erl::{
///     ast::{BinaryOperator, Position},
///     interpreter::{evaluator::binary::scalar::eval_scalar_op, value::core::Value},
/// };
///
/// let position = Position::default();
/// let apply = |op, a: i64, b: i64| eval_scalar_op(op, &Value::Integer(a), &Value::Integer(b), position);
///
/// assert_eq!(apply(BinaryOperator::Divide, 6, 3).unwrap(), Value::Integer(2));
/// assert_eq!(apply(BinaryOperator::Divide, 7, 2).unwrap(), Value::Float(3.5));
/// assert_eq!(apply(BinaryOperator::IntegerDivide, -7, 2).unwrap(), Value::Integer(-4));
/// assert_eq!(apply(BinaryOperator::Modulus, -7, 2).unwrap(), Value::Integer(-1));
/// assert!(apply(BinaryOperator::Modulus, 7, 0).is_err());
/// ```
pub fn eval_scalar_op(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      position: Position)
                      -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => integer_op(op, *a, *b, position),
        (Value::String(a), Value::String(b)) if op == BinaryOperator::Add => {
            Ok(Value::String(format!("{a}{b}")))
        },
        _ => match (left.as_float(), right.as_float()) {
            (Some(a), Some(b)) => float_op(op, a, b, position),
            _ => Err(unsupported_operands(op, left, right, position)),
        },
    }
}

fn integer_op(op: BinaryOperator, a: i64, b: i64, position: Position) -> EvalResult<Value> {
    let overflow = || ErlError::evaluation(format!("Integer overflow in '{a} {op} {b}'"), position);

    if b == 0 && is_division(op) {
        return Err(division_by_zero(op, position));
    }

    let result = match op {
        BinaryOperator::Add => a.checked_add(b),
        BinaryOperator::Minus => a.checked_sub(b),
        BinaryOperator::Multiply => a.checked_mul(b),
        BinaryOperator::Divide => {
            if a.wrapping_rem(b) != 0 {
                return Ok(Value::Float(i64_to_f64(a) / i64_to_f64(b)));
            }
            a.checked_div(b)
        },
        BinaryOperator::Modulus => Some(a.wrapping_rem(b)),
        BinaryOperator::IntegerDivide => a.checked_div(b).map(|quotient| {
                                                             let remainder = a.wrapping_rem(b);
                                                             if remainder != 0 && (remainder < 0) != (b < 0) {
                                                                 quotient - 1
                                                             } else {
                                                                 quotient
                                                             }
                                                         }),
        _ => return Err(unsupported_operands(op, &Value::Integer(a), &Value::Integer(b), position)),
    };

    result.map(Value::Integer).ok_or_else(overflow)
}

fn float_op(op: BinaryOperator, a: f64, b: f64, position: Position) -> EvalResult<Value> {
    if b == 0.0 && is_division(op) {
        return Err(division_by_zero(op, position));
    }

    let result = match op {
        BinaryOperator::Add => a + b,
        BinaryOperator::Minus => a - b,
        BinaryOperator::Multiply => a * b,
        BinaryOperator::Divide => a / b,
        BinaryOperator::Modulus => a % b,
        BinaryOperator::IntegerDivide => (a / b).floor(),
        _ => return Err(unsupported_operands(op, &Value::Float(a), &Value::Float(b), position)),
    };
    Ok(Value::Float(result))
}

const fn is_division(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Divide | BinaryOperator::Modulus | BinaryOperator::IntegerDivide)
}

fn division_by_zero(op: BinaryOperator, position: Position) -> ErlError {
    let message = match op {
        BinaryOperator::Modulus => "Modulo by zero",
        _ => "Division by zero",
    };
    ErlError::evaluation(message, position)
}

/// The type error for an operator applied to operands it does not accept.
pub fn unsupported_operands(op: impl std::fmt::Display,
                            left: &Value,
                            right: &Value,
                            position: Position)
                            -> ErlError {
    ErlError::type_error(format!("Unsupported operand types for '{op}': {} and {}",
                                 left.type_name(),
                                 right.type_name()),
                         position)
}

/// Demotes an integral float result of two Integer operands back to
/// Integer.
pub(crate) fn integral_or_float(value: f64) -> Value {
    f64_to_i64_exact(value).map_or(Value::Float(value), Value::Integer)
}
