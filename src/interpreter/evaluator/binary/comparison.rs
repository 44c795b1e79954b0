use std::cmp::Ordering;

use crate::{
    ast::{ComparisonOperator, Position},
    error::ErlError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a comparison between two values.
///
/// Numbers compare by value across Integer and Float. Strings compare
/// lexicographically and accept all six operators. Booleans only accept
/// `==` and `!=`. Every other pairing is a type error, so `1 == "1"` fails
/// instead of quietly yielding `False`.
///
/// # Parameters
/// - `op`: The comparison operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Position of the operator, for error reporting.
///
/// # Returns
/// A `Value::Boolean` with the outcome.
///
/// # Example
/// ```
/// use erl::{
///     ast::{ComparisonOperator, Position},
///     interpreter::{evaluator::binary::comparison::eval_comparison, value::core::Value},
/// };
///
/// let position = Position::default();
///
/// let result = eval_comparison(ComparisonOperator::Less, &Value::Integer(2), &Value::Float(2.5), position);
/// assert_eq!(result.unwrap(), Value::Boolean(true));
///
/// let result = eval_comparison(ComparisonOperator::Less, &Value::Boolean(true), &Value::Boolean(false), position);
/// assert!(result.is_err());
/// ```
pub fn eval_comparison(op: ComparisonOperator,
                       left: &Value,
                       right: &Value,
                       position: Position)
                       -> EvalResult<Value> {
    let ordering = match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Boolean(a), Value::Boolean(b)) => {
            if !matches!(op, ComparisonOperator::Equal | ComparisonOperator::NotEqual) {
                return Err(ErlError::type_error(format!("Booleans cannot be compared with '{op}'"),
                                                position));
            }
            Some(a.cmp(b))
        },
        _ => match (left.as_float(), right.as_float()) {
            (Some(a), Some(b)) => a.partial_cmp(&b),
            _ => {
                return Err(ErlError::type_error(format!("Cannot compare {} with {} using '{op}'",
                                                        left.type_name(),
                                                        right.type_name()),
                                                position));
            },
        },
    };

    Ok(Value::Boolean(ordering.map_or(op == ComparisonOperator::NotEqual, |ordering| {
                                          holds(op, ordering)
                                      })))
}

const fn holds(op: ComparisonOperator, ordering: Ordering) -> bool {
    match op {
        ComparisonOperator::Equal => ordering.is_eq(),
        ComparisonOperator::NotEqual => ordering.is_ne(),
        ComparisonOperator::Less => ordering.is_lt(),
        ComparisonOperator::LessEqual => ordering.is_le(),
        ComparisonOperator::Greater => ordering.is_gt(),
        ComparisonOperator::GreaterEqual => ordering.is_ge(),
    }
}
