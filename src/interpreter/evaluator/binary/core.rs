use crate::{
    ast::{BinaryOperator, Node, Position},
    interpreter::{
        console::Console,
        evaluator::{
            binary::{comparison::eval_comparison, logic::eval_logic, power::eval_pow, scalar::eval_scalar_op},
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
};

impl<C: Console> Context<C> {
    /// Evaluates a binary operator node.
    ///
    /// The left operand is evaluated before the right one, and both must
    /// produce a value. An error in either operand is returned before the
    /// operator is applied.
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Node,
                                 op: BinaryOperator,
                                 right: &Node,
                                 position: Position)
                                 -> EvalResult<Value> {
        let left = self.eval_value(left)?;
        let right = self.eval_value(right)?;
        eval_binary(op, &left, &right, position)
    }
}

/// Evaluates a binary operation between two values.
///
/// Arithmetic operators go to [`eval_scalar_op`], `^` to [`eval_pow`],
/// comparisons to [`eval_comparison`] and `AND`/`OR` to [`eval_logic`].
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Position of the operator, for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the evaluated result.
///
/// # Example
/// ```
/// use erl::{
///     ast::{BinaryOperator, Position},
///     interpreter::{evaluator::binary::core::eval_binary, value::core::Value},
/// };
///
/// let position = Position::default();
///
/// let sum = eval_binary(BinaryOperator::Add, &Value::Integer(3), &Value::Integer(4), position);
/// assert_eq!(sum.unwrap(), Value::Integer(7));
///
/// let mixed = eval_binary(BinaryOperator::Add, &Value::Integer(3), &Value::Float(0.5), position);
/// assert_eq!(mixed.unwrap(), Value::Float(3.5));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   position: Position)
                   -> EvalResult<Value> {
    match op {
        BinaryOperator::Add
        | BinaryOperator::Minus
        | BinaryOperator::Multiply
        | BinaryOperator::Divide
        | BinaryOperator::Modulus
        | BinaryOperator::IntegerDivide => eval_scalar_op(op, left, right, position),
        BinaryOperator::Exponent => eval_pow(left, right, position),
        BinaryOperator::Comparison(comparison) => eval_comparison(comparison, left, right, position),
        BinaryOperator::And | BinaryOperator::Or => eval_logic(op, left, right, position),
    }
}
