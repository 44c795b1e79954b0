use rand::Rng;

use crate::{
    ast::Position,
    error::ErlError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{argument_type_error, check_arity},
        },
        value::core::Value,
    },
};

/// Draws a uniformly distributed random number between two bounds.
///
/// With two Integer bounds the result is an Integer in `[min, max]`, both
/// ends included. If either bound is a Float the result is a Float in
/// `[min, max)`, or exactly `min` when the bounds are equal.
///
/// # Errors
/// - Wrong number of arguments.
/// - A non-numeric bound.
/// - `min > max`, or a bound that is not finite.
///
/// # Example
/// ```
/// use erl::{
///     ast::Position,
///     interpreter::{evaluator::function::random::random, value::core::Value},
/// };
///
/// let position = Position::default();
///
/// let Value::Integer(n) = random(&[Value::Integer(1), Value::Integer(6)], position).unwrap() else {
///     panic!("expected an Integer");
/// };
/// assert!((1..=6).contains(&n));
///
/// let Value::Float(x) = random(&[Value::Integer(0), Value::Float(1.0)], position).unwrap() else {
///     panic!("expected a Float");
/// };
/// assert!((0.0..1.0).contains(&x));
///
/// assert!(random(&[Value::Integer(6), Value::Integer(1)], position).is_err());
/// ```
pub fn random(args: &[Value], position: Position) -> EvalResult<Value> {
    check_arity("random", args, 2, position)?;
    let mut rng = rand::thread_rng();

    if let (Value::Integer(min), Value::Integer(max)) = (&args[0], &args[1]) {
        if min > max {
            return Err(empty_range(&args[0], &args[1], position));
        }
        return Ok(Value::Integer(rng.gen_range(*min..=*max)));
    }

    let min = bound(&args[0], position)?;
    let max = bound(&args[1], position)?;
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(empty_range(&args[0], &args[1], position));
    }
    if min == max {
        return Ok(Value::Float(min));
    }
    Ok(Value::Float(rng.gen_range(min..max)))
}

fn bound(value: &Value, position: Position) -> EvalResult<f64> {
    value.as_float()
         .ok_or_else(|| argument_type_error("random", "numeric bounds", value, position))
}

fn empty_range(min: &Value, max: &Value, position: Position) -> ErlError {
    ErlError::evaluation(format!("'random' cannot draw from {min} to {max}"), position)
}
