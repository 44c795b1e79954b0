/// Subroutine calls.
///
/// Evaluates the callee and the arguments, then runs user-defined
/// subroutines in a fresh call scope or hands natives to [`native`].
pub mod core;

/// Native subroutine dispatch.
pub mod native;

/// The `print` native.
///
/// Writes the display form of a value to the console.
pub mod print;

/// The `input` native.
///
/// Reads one line from the console, optionally after a prompt.
pub mod input;

/// The `random` native.
pub mod random;

/// The `str`, `int`, `float` and `bool` casts.
pub mod cast;

/// `asc` and `chr`, the conversions between characters and code points.
pub mod character;
