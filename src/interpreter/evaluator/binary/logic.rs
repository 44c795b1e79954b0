use crate::{
    ast::{BinaryOperator, Position},
    interpreter::{
        evaluator::{binary::scalar::unsupported_operands, core::EvalResult},
        value::core::Value,
    },
};

/// Evaluates `AND` or `OR`.
///
/// Both operands have already been evaluated and must be Booleans.
///
/// # Example
/// ```
/// use erl::{
///     ast::{BinaryOperator, Position},
///     interpreter::{evaluator::binary::logic::eval_logic, value::core::Value},
/// };
///
/// let a = Value::Boolean(true);
/// let b = Value::Boolean(false);
///
/// let result = eval_logic(BinaryOperator::Or, &a, &b, Position::default());
/// assert_eq!(result.unwrap(), Value::Boolean(true));
/// assert!(eval_logic(BinaryOperator::And, &a, &Value::Integer(1), Position::default()).is_err());
/// ```
pub fn eval_logic(op: BinaryOperator,
                  left: &Value,
                  right: &Value,
                  position: Position)
                  -> EvalResult<Value> {
    let what = format!("Operand of '{op}'");
    let a = left.as_boolean(&what, position)?;
    let b = right.as_boolean(&what, position)?;

    match op {
        BinaryOperator::And => Ok(Value::Boolean(a && b)),
        BinaryOperator::Or => Ok(Value::Boolean(a || b)),
        _ => Err(unsupported_operands(op, left, right, position)),
    }
}
