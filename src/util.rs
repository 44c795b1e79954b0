/// Numeric conversion helpers.
///
/// Conversions between `i64`, `f64` and `char` that either succeed without
/// surprises or report failure, so the evaluator never relies on a silently
/// saturating `as` cast.
pub mod num;
/// Stack growth limits shared by every recursive walk.
///
/// The parser, the expression evaluator and user-defined calls recurse once
/// per nesting level of the program. Each goes through
/// [`stacker::maybe_grow`] with these limits, so nesting depth is bounded by
/// memory rather than by the native thread stack.
pub mod stack;
