use std::{io, ops::RangeInclusive};

use crate::{
    ast::Position,
    error::ErlError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Checks that `name` received exactly `expected` arguments.
///
/// ## Example
/// ```
/// use erl::{
///     ast::Position,
///     interpreter::{evaluator::utils::check_arity, value::core::Value},
/// };
///
/// let args = vec![Value::Integer(2), Value::Integer(1)];
///
/// assert!(check_arity("random", &args, 2, Position::default()).is_ok());
/// assert!(check_arity("print", &args, 1, Position::default()).is_err());
/// ```
pub fn check_arity<T>(name: &str, args: &[T], expected: usize, position: Position) -> EvalResult<()> {
    check_arity_range(name, args, expected..=expected, position)
}

/// Checks that the number of arguments passed to `name` lies in `accepted`.
pub fn check_arity_range<T>(name: &str,
                            args: &[T],
                            accepted: RangeInclusive<usize>,
                            position: Position)
                            -> EvalResult<()> {
    if accepted.contains(&args.len()) {
        return Ok(());
    }

    let expected = if accepted.start() == accepted.end() {
        accepted.start().to_string()
    } else {
        format!("{} to {}", accepted.start(), accepted.end())
    };
    Err(ErlError::evaluation(format!("'{name}' expects {expected} argument(s), found {}",
                                     args.len()),
                             position))
}

/// The type error for an argument a subroutine does not accept.
pub fn argument_type_error(name: &str, expected: &str, found: &Value, position: Position) -> ErlError {
    ErlError::type_error(format!("'{name}' expects {expected}, found {}", found.type_name()),
                         position)
}

/// Wraps a console failure as an evaluation error of the statement that
/// triggered it.
pub fn console_error(error: &io::Error, position: Position) -> ErlError {
    ErlError::evaluation(format!("Console error: {error}"), position)
}
