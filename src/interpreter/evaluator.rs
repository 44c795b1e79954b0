/// Core evaluation logic and context management.
///
/// Contains the runtime [`core::Context`], statement execution, expression
/// evaluation, name resolution and assignment.
pub mod core;

/// Binary operator evaluation logic.
///
/// Handles arithmetic with Integer/Float promotion, string concatenation,
/// exponentiation, comparisons and the logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements numeric identity, negation and logical `NOT`.
pub mod unary;

/// Evaluation of `if`, `while` and `do`/`until`.
pub mod control;

/// Evaluation of counted `for` loops.
///
/// Checks the loop header, fixes the direction and drives the loop
/// variable through the body.
pub mod for_loop;

/// Subroutine calls.
///
/// Handles user-defined and native calls, argument checking, call scopes and
/// the call depth limit.
pub mod function;

/// Utility functions for evaluation.
///
/// Arity checks and error constructors shared by the natives.
pub mod utils;
