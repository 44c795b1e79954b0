/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads each source line and produces the tokens of that line,
/// each tagged with its position: numbers, strings, identifiers, keywords,
/// operators and brackets. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts every line into a list of positioned tokens.
/// - Handles numeric and string literals, keywords and two-character
///   operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser walks the per-line token lists and returns one top-level
/// statement at a time, consuming as many lines as a block construct needs.
///
/// # Responsibilities
/// - Converts tokens into [`crate::ast::Node`] trees.
/// - Validates grammar and block structure, reporting errors with positions.
/// - Applies operator precedence and associativity.
pub mod parser;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, evaluates expressions, runs control flow and
/// subroutine calls, and manages the global table and the active call scope.
///
/// # Responsibilities
/// - Evaluates every node kind.
/// - Applies the numeric promotion and type rules of each operator.
/// - Reports runtime errors such as division by zero or type mismatches.
pub mod evaluator;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: Integer, Float, Boolean, String and
///   Subroutine.
/// - Provides the display form used by `print` and `str`.
/// - Provides checked access to the Boolean and Integer payloads.
pub mod value;
/// Symbol tables and their slots.
///
/// Implements name binding and the rule that a `const` name can be assigned
/// only once per table.
pub mod symbol_table;
/// The collaborator programs read from and write to.
pub mod console;
