/// Operator dispatch.
///
/// Evaluates both operands of a binary node and routes the operator to the
/// matching rule set.
pub mod core;

/// Arithmetic on numbers and string concatenation.
pub mod scalar;

/// Exponentiation.
pub mod power;

/// The six comparison operators.
pub mod comparison;

/// `AND` and `OR`.
pub mod logic;
