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
    util::num::i64_to_char_checked,
};

/// `asc(s)`: the code point of a one-character String.
///
/// # Example
/// ```
/// use erl::{
///     ast::Position,
///     interpreter::{evaluator::function::character::asc, value::core::Value},
/// };
///
/// assert_eq!(asc(&[Value::from("A")], Position::default()).unwrap(), Value::Integer(65));
/// assert!(asc(&[Value::from("AB")], Position::default()).is_err());
/// ```
pub fn asc(args: &[Value], position: Position) -> EvalResult<Value> {
    check_arity("asc", args, 1, position)?;
    let Value::String(text) = &args[0] else {
        return Err(argument_type_error("asc", "a String", &args[0], position));
    };

    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Value::Integer(i64::from(u32::from(c)))),
        _ => Err(ErlError::evaluation(format!("'asc' expects a single character, found {} characters",
                                              text.chars().count()),
                                      position)),
    }
}

/// `chr(n)`: the one-character String for a code point.
///
/// # Example
/// ```
/// use erl::{
///     ast::Position,
///     interpreter::{evaluator::function::character::chr, value::core::Value},
/// };
///
/// assert_eq!(chr(&[Value::Integer(97)], Position::default()).unwrap(), Value::from("a"));
/// assert!(chr(&[Value::Integer(-1)], Position::default()).is_err());
/// ```
pub fn chr(args: &[Value], position: Position) -> EvalResult<Value> {
    check_arity("chr", args, 1, position)?;
    let Value::Integer(code) = &args[0] else {
        return Err(argument_type_error("chr", "an Integer", &args[0], position));
    };

    let invalid = ErlError::evaluation(format!("{code} is not a valid character code"), position);
    i64_to_char_checked(*code, invalid).map(|c| Value::String(c.to_string()))
}
