/// Subroutine values.
///
/// Defines [`subroutine::Subroutine`], the callable runtime value, and the
/// fixed set of native built-ins it can wrap.
pub mod subroutine;

pub mod core;
