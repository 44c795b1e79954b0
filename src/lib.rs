//! # erl
//!
//! erl is an interpreter for ERL, a small line-oriented teaching language
//! with integers, floats, booleans and strings, `if`/`while`/`do`/`for`
//! blocks, procedures and functions with their own call scope, and a handful
//! of native subroutines. Source text goes through a lexer, a
//! recursive-descent parser and a tree-walking evaluator.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ErlError,
    interpreter::{console::Console, evaluator::core::Context},
};

/// Defines the structure of parsed code.
///
/// This module declares [`ast::Node`] and its payload types, which represent
/// the syntactic structure of a program as a tree. The AST is built by the
/// parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement variants for all language constructs.
/// - Attaches a source [`ast::Position`] to every node for error reporting.
pub mod ast;
/// Provides the error type for lexing, parsing and evaluation.
///
/// Every failure is an [`error::ErlError`] of one of five kinds, carrying a
/// message and the source position it refers to.
///
/// # Responsibilities
/// - Defines the flat error taxonomy.
/// - Renders the caret diagnostic that points into the offending line.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and the console seam.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Provides entry points for parsing and running programs.
pub mod interpreter;
/// The interactive shell.
pub mod repl;
/// General utilities for safe numeric conversion.
pub mod util;

/// Runs a whole program against `console`.
///
/// The source is split into lines and executed statement by statement with a
/// fresh [`Context`]. Execution stops at the first error.
///
/// # Errors
/// Returns the first lexical, syntax, identifier, type or evaluation error.
///
/// # Examples
/// ```
/// use erl::{error::ErrorKind, interpreter::console::BufferConsole, run_source};
///
/// let mut console = BufferConsole::new();
/// run_source("x = 2 + 2\nprint(x)", &mut console).unwrap();
/// assert_eq!(console.output(), ["4"]);
///
/// // 'y' is never assigned.
/// let error = run_source("print(y)", &mut console).unwrap_err();
/// assert_eq!(error.kind(), ErrorKind::Identifier);
/// ```
pub fn run_source<C: Console>(source: &str, console: C) -> Result<(), ErlError> {
    let lines: Vec<&str> = source.lines().collect();
    Context::with_console(console).run(&lines)
}
