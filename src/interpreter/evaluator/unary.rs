use crate::{
    ast::{Node, Position, UnaryOperator},
    error::ErlError,
    interpreter::{
        console::Console,
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl<C: Console> Context<C> {
    /// Evaluates a unary operator node after evaluating its operand.
    pub(crate) fn eval_unary_op(&mut self,
                                op: UnaryOperator,
                                operand: &Node,
                                position: Position)
                                -> EvalResult<Value> {
        let value = self.eval_value(operand)?;
        eval_unary(op, &value, position)
    }
}

/// Evaluates a unary operation on a value.
///
/// Supported operators:
/// - `Plus`: numeric identity; the operand must be a number.
/// - `Negate`: numeric negation. Negating the smallest Integer overflows.
/// - `Not`: Boolean negation; the operand must be a Boolean.
///
/// # Parameters
/// - `op`: Unary operator.
/// - `value`: Input value.
/// - `position`: Position of the operator, for error reporting.
///
/// # Returns
/// The computed `Value` wrapped in `EvalResult`.
///
/// # Example
/// ```
/// use erl::{
///     ast::{Position, UnaryOperator},
///     interpreter::{evaluator::unary::eval_unary, value::core::Value},
/// };
///
/// let position = Position::default();
///
/// let v = eval_unary(UnaryOperator::Negate, &Value::Integer(5), position).unwrap();
/// assert_eq!(v, Value::Integer(-5));
///
/// let v = eval_unary(UnaryOperator::Not, &Value::Boolean(false), position).unwrap();
/// assert_eq!(v, Value::Boolean(true));
///
/// assert!(eval_unary(UnaryOperator::Negate, &Value::from("text"), position).is_err());
/// ```
pub fn eval_unary(op: UnaryOperator, value: &Value, position: Position) -> EvalResult<Value> {
    match (op, value) {
        (UnaryOperator::Plus, _) if value.is_numeric() => Ok(value.clone()),
        (UnaryOperator::Negate, Value::Integer(n)) => {
            n.checked_neg()
             .map(Value::Integer)
             .ok_or_else(|| ErlError::evaluation(format!("Integer overflow in '-{n}'"), position))
        },
        (UnaryOperator::Negate, Value::Float(x)) => Ok(Value::Float(-x)),
        (UnaryOperator::Not, _) => Ok(Value::Boolean(!value.as_boolean("Operand of 'NOT'", position)?)),
        (_, other) => Err(ErlError::type_error(format!("Operand of '{op}' must be numeric, found {}",
                                                       other.type_name()),
                                               position)),
    }
}
