/// Caret diagnostics.
///
/// Renders an error against the source line it points into, producing the
/// "source line / caret at column" pair shown to the user.
pub mod diagnostic;
/// The error taxonomy.
///
/// Defines [`ErlError`], the single error type shared by the lexer, the parser
/// and the evaluator, and [`ErrorKind`] for matching on its family.
pub mod erl_error;

pub use erl_error::{ErlError, ErrorKind};
