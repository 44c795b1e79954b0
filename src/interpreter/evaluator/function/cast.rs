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
    util::num::{f64_to_i64_checked, i64_to_f64},
};

/// `str(x)`: the display form of any value.
///
/// # Example
/// ```
/// use erl::{
///     ast::Position,
///     interpreter::{evaluator::function::cast::to_str, value::core::Value},
/// };
///
/// assert_eq!(to_str(&[Value::Float(2.0)], Position::default()).unwrap(), Value::from("2.0"));
/// ```
pub fn to_str(args: &[Value], position: Position) -> EvalResult<Value> {
    check_arity("str", args, 1, position)?;
    Ok(Value::String(args[0].to_string()))
}

/// `int(x)`: converts to an Integer.
///
/// Floats are truncated toward zero, Booleans become `1` or `0` and Strings
/// are parsed as decimal integers after trimming surrounding whitespace.
///
/// # Example
/// ```
/// use erl::{
///     ast::Position,
///     interpreter::{evaluator::function::cast::to_int, value::core::Value},
/// };
///
/// let position = Position::default();
///
/// assert_eq!(to_int(&[Value::Float(-3.7)], position).unwrap(), Value::Integer(-3));
/// assert_eq!(to_int(&[Value::from(" 42 ")], position).unwrap(), Value::Integer(42));
/// assert!(to_int(&[Value::from("4.2")], position).is_err());
/// ```
pub fn to_int(args: &[Value], position: Position) -> EvalResult<Value> {
    check_arity("int", args, 1, position)?;
    let value = &args[0];
    match value {
        Value::Integer(n) => Ok(Value::Integer(*n)),
        Value::Float(x) => f64_to_i64_checked(*x, cannot_convert(value, "Integer", position)).map(Value::Integer),
        Value::Boolean(b) => Ok(Value::Integer(i64::from(*b))),
        Value::String(s) => s.trim()
                             .parse::<i64>()
                             .map(Value::Integer)
                             .map_err(|_| cannot_convert(value, "Integer", position)),
        Value::Subroutine(_) => Err(argument_type_error("int", "a scalar value", value, position)),
    }
}

/// `float(x)`: converts to a Float.
///
/// Strings must hold a finite decimal number; `inf` and `nan` spellings are
/// rejected.
///
/// # Example
/// ```
/// use erl::{
///     ast::Position,
///     interpreter::{evaluator::function::cast::to_float, value::core::Value},
/// };
///
/// let position = Position::default();
///
/// assert_eq!(to_float(&[Value::Integer(3)], position).unwrap(), Value::Float(3.0));
/// assert_eq!(to_float(&[Value::from("2.5")], position).unwrap(), Value::Float(2.5));
/// assert!(to_float(&[Value::from("two")], position).is_err());
/// assert!(to_float(&[Value::from("inf")], position).is_err());
/// assert!(to_float(&[Value::from("NaN")], position).is_err());
/// ```
pub fn to_float(args: &[Value], position: Position) -> EvalResult<Value> {
    check_arity("float", args, 1, position)?;
    let value = &args[0];
    match value {
        Value::Integer(n) => Ok(Value::Float(i64_to_f64(*n))),
        Value::Float(x) => Ok(Value::Float(*x)),
        Value::Boolean(b) => Ok(Value::Float(if *b { 1.0 } else { 0.0 })),
        Value::String(s) => s.trim()
                             .parse::<f64>()
                             .ok()
                             .filter(|x| x.is_finite())
                             .map(Value::Float)
                             .ok_or_else(|| cannot_convert(value, "Float", position)),
        Value::Subroutine(_) => Err(argument_type_error("float", "a scalar value", value, position)),
    }
}

/// `bool(x)`: converts to a Boolean.
///
/// Numbers are `True` when non-zero. Strings must read exactly `True` or
/// `False`.
pub fn to_bool(args: &[Value], position: Position) -> EvalResult<Value> {
    check_arity("bool", args, 1, position)?;
    let value = &args[0];
    match value {
        Value::Boolean(b) => Ok(Value::Boolean(*b)),
        Value::Integer(n) => Ok(Value::Boolean(*n != 0)),
        Value::Float(x) => Ok(Value::Boolean(*x != 0.0)),
        Value::String(s) => match s.trim() {
            "True" => Ok(Value::Boolean(true)),
            "False" => Ok(Value::Boolean(false)),
            _ => Err(cannot_convert(value, "Boolean", position)),
        },
        Value::Subroutine(_) => Err(argument_type_error("bool", "a scalar value", value, position)),
    }
}

fn cannot_convert(value: &Value, target: &str, position: Position) -> ErlError {
    let shown = match value {
        Value::String(s) => format!("\"{s}\""),
        other => other.to_string(),
    };
    ErlError::evaluation(format!("Cannot convert {shown} to {target}"), position)
}
