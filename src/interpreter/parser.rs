/// The parser cursor and its entry points.
///
/// Defines [`core::Parser`], which walks the per-line token lists produced by
/// the lexer and hands out one top-level statement at a time.
pub mod core;

/// Binary expression levels.
///
/// Implements the precedence ladder from logical chains down to
/// exponentiation.
pub mod binary;

/// Factors and prefix operators.
///
/// Parses literals, identifiers, bracketed expressions, unary signs and
/// call suffixes.
pub mod unary;

/// Block constructs.
///
/// Parses `if`, `while`, `do`/`until`, `for` and subroutine definitions,
/// including their multi-line bodies and terminators.
pub mod block;

/// Statement dispatch.
///
/// Chooses the construct a line starts, and parses assignments and `return`.
pub mod statement;

/// Shared parsing helpers.
pub mod utils;
