use std::fmt;

use crate::{
    ast::{LiteralValue, Position},
    error::ErlError,
    interpreter::{evaluator::core::EvalResult, value::subroutine::Subroutine},
    util::num::i64_to_f64,
};

/// Represents a runtime value in the interpreter.
///
/// Literals evaluate to the matching scalar variant; subroutine definitions
/// and native built-ins evaluate to [`Value::Subroutine`], which is what a
/// call expression expects to find in callee position.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit floating-point number.
    Float(f64),
    /// `True` or `False`. Produced by comparisons and logical operators and
    /// required by every condition.
    Boolean(bool),
    /// A text value.
    String(String),
    /// A callable user-defined or native subroutine.
    Subroutine(Subroutine),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<Subroutine> for Value {
    fn from(v: Subroutine) -> Self {
        Self::Subroutine(v)
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(n) => Self::Integer(*n),
            LiteralValue::Float(x) => Self::Float(*x),
            LiteralValue::Boolean(b) => Self::Boolean(*b),
            LiteralValue::String(s) => Self::String(s.clone()),
        }
    }
}

impl Value {
    /// The user-facing name of this value's type, as used in error messages.
    ///
    /// # Example
    /// ```
    /// use erl::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "Integer");
    /// assert_eq!(Value::from("a").type_name(), "String");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "Integer",
            Self::Float(_) => "Float",
            Self::Boolean(_) => "Boolean",
            Self::String(_) => "String",
            Self::Subroutine(_) => "Subroutine",
        }
    }

    /// `true` for `Integer` and `Float`.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    /// Reads the value as an `f64` when it is numeric.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(i64_to_f64(*n)),
            Self::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Converts the value to `bool`, or returns a type error naming `what`
    /// needed the Boolean.
    ///
    /// Used for the conditions of `if`, `while`, `until` and for `AND`/`OR`
    /// operands.
    ///
    /// # Example
    /// ```
    /// use erl::{ast::Position, interpreter::value::core::Value};
    ///
    /// let position = Position::default();
    /// assert!(Value::Boolean(true).as_boolean("condition", position).unwrap());
    /// assert!(Value::Integer(1).as_boolean("condition", position).is_err());
    /// ```
    pub fn as_boolean(&self, what: &str, position: Position) -> EvalResult<bool> {
        match self {
            Self::Boolean(b) => Ok(*b),
            other => {
                Err(ErlError::type_error(format!("{what} must be Boolean, found {}",
                                                 other.type_name()),
                                         position))
            },
        }
    }

    /// Converts the value to `i64`, or returns a type error naming `what`
    /// needed the Integer.
    pub fn as_integer(&self, what: &str, position: Position) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            other => {
                Err(ErlError::type_error(format!("{what} must be Integer, found {}",
                                                 other.type_name()),
                                         position))
            },
        }
    }
}

/// Formats a float so that it always reads back as a float.
///
/// Integral values keep a trailing `.0` (`3.0`, not `3`), which is what keeps
/// the Integer/Float distinction visible in output.
///
/// # Example
/// ```
/// use erl::interpreter::value::core::format_float;
///
/// assert_eq!(format_float(3.0), "3.0");
/// assert_eq!(format_float(0.25), "0.25");
/// assert_eq!(format_float(-2.0), "-2.0");
/// ```
#[must_use]
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let text = value.to_string();
    if text.contains(['.', 'e', 'E']) {
        text
    } else {
        format!("{text}.0")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{}", format_float(*x)),
            Self::Boolean(true) => write!(f, "True"),
            Self::Boolean(false) => write!(f, "False"),
            Self::String(s) => write!(f, "{s}"),
            Self::Subroutine(s) => write!(f, "{s}"),
        }
    }
}
