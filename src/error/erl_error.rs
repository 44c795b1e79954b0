use thiserror::Error;

use crate::ast::Position;

/// The five error families an ERL program can raise.
///
/// Useful for matching on the family of an [`ErlError`] without caring about
/// its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Raised by the lexer.
    Lexical,
    /// Raised by the parser.
    Syntax,
    /// Undeclared names and constant reassignment.
    Identifier,
    /// Operand, condition or argument of the wrong type.
    Type,
    /// Every other runtime failure.
    Evaluation,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Lexical => "Lexical",
            Self::Syntax => "Syntax",
            Self::Identifier => "Identifier",
            Self::Type => "Type",
            Self::Evaluation => "Evaluation",
        };
        write!(f, "{name}")
    }
}

/// Represents every error that can occur while lexing, parsing or evaluating
/// a program.
///
/// The taxonomy is deliberately flat. Every variant carries the source
/// [`Position`] it refers to, which is all that is needed to render a caret
/// diagnostic (see [`ErlError::render`]).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErlError {
    /// Unrecognised character, malformed number or unterminated string.
    #[error("Lexical Error: {message} ({position})")]
    Lexical {
        /// Human readable description.
        message:  String,
        /// Where the offending character is.
        position: Position,
    },
    /// Malformed grammar, unterminated block or mismatched terminator.
    #[error("Syntax Error: {message} ({position})")]
    Syntax {
        /// Human readable description.
        message:         String,
        /// Where parsing failed.
        position:        Position,
        /// Set when a block ran into the end of the input before its
        /// terminator keyword.
        at_end_of_input: bool,
    },
    /// Use of an unassigned name or reassignment of a constant.
    #[error("Identifier Error: {message} ({position})")]
    Identifier {
        /// The offending name.
        name:     String,
        /// Human readable description.
        message:  String,
        /// Where the name appears.
        position: Position,
    },
    /// Operand, condition or argument type mismatch.
    #[error("Type Error: {message} ({position})")]
    Type {
        /// Human readable description.
        message:  String,
        /// The operator or call that rejected its operands.
        position: Position,
    },
    /// Domain errors, arity mismatches, call stack overflow and missing
    /// subroutine results.
    #[error("Evaluation Error: {message} ({position})")]
    Evaluation {
        /// Human readable description.
        message:  String,
        /// The operator or call that failed.
        position: Position,
    },
}

impl ErlError {
    pub fn lexical(message: impl Into<String>, position: Position) -> Self {
        Self::Lexical { message: message.into(),
                        position }
    }

    pub fn syntax(message: impl Into<String>, position: Position) -> Self {
        Self::Syntax { message: message.into(),
                       position,
                       at_end_of_input: false }
    }

    /// A syntax error for a block whose terminator never arrived.
    pub fn unterminated(message: impl Into<String>, position: Position) -> Self {
        Self::Syntax { message: message.into(),
                       position,
                       at_end_of_input: true }
    }

    pub fn identifier(name: impl Into<String>, message: impl Into<String>, position: Position) -> Self {
        Self::Identifier { name: name.into(),
                           message: message.into(),
                           position }
    }

    /// The error raised when a name has no value in either table.
    pub fn undeclared(name: &str, position: Position) -> Self {
        Self::identifier(name, format!("'{name}' has not been declared"), position)
    }

    pub fn type_error(message: impl Into<String>, position: Position) -> Self {
        Self::Type { message: message.into(),
                     position }
    }

    pub fn evaluation(message: impl Into<String>, position: Position) -> Self {
        Self::Evaluation { message: message.into(),
                           position }
    }

    /// Returns the family of this error.
    ///
    /// ## Example
    /// ```
    /// use erl::{
    ///     ast::Position,
    ///     error::{ErlError, ErrorKind},
    /// };
    ///
    /// let error = ErlError::evaluation("division by zero", Position::new(0, 2));
    /// assert_eq!(error.kind(), ErrorKind::Evaluation);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lexical { .. } => ErrorKind::Lexical,
            Self::Syntax { .. } => ErrorKind::Syntax,
            Self::Identifier { .. } => ErrorKind::Identifier,
            Self::Type { .. } => ErrorKind::Type,
            Self::Evaluation { .. } => ErrorKind::Evaluation,
        }
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Lexical { position, .. }
            | Self::Syntax { position, .. }
            | Self::Identifier { position, .. }
            | Self::Type { position, .. }
            | Self::Evaluation { position, .. } => *position,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Lexical { message, .. }
            | Self::Syntax { message, .. }
            | Self::Identifier { message, .. }
            | Self::Type { message, .. }
            | Self::Evaluation { message, .. } => message,
        }
    }

    /// `true` for syntax errors caused by input ending inside a block.
    #[must_use]
    pub const fn is_at_end_of_input(&self) -> bool {
        matches!(self, Self::Syntax { at_end_of_input: true, .. })
    }
}
