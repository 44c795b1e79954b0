use tracing::trace;

use crate::{
    ast::Position,
    interpreter::{
        console::Console,
        evaluator::{
            core::{Context, EvalResult},
            function::{cast, character, random},
        },
        value::{core::Value, subroutine::NativeSubroutine},
    },
};

impl<C: Console> Context<C> {
    /// Calls a native subroutine with already evaluated arguments.
    ///
    /// Each native checks its own argument count and types. `print` is the
    /// only native that returns no value.
    pub(crate) fn call_native(&mut self,
                              native: NativeSubroutine,
                              args: &[Value],
                              position: Position)
                              -> EvalResult<Option<Value>> {
        trace!(name = native.name(), args = args.len(), "calling native");
        let value = match native {
            NativeSubroutine::Print => {
                self.print(args, position)?;
                return Ok(None);
            },
            NativeSubroutine::Input => self.input(args, position)?,
            NativeSubroutine::Random => random::random(args, position)?,
            NativeSubroutine::Str => cast::to_str(args, position)?,
            NativeSubroutine::Int => cast::to_int(args, position)?,
            NativeSubroutine::Float => cast::to_float(args, position)?,
            NativeSubroutine::Bool => cast::to_bool(args, position)?,
            NativeSubroutine::Asc => character::asc(args, position)?,
            NativeSubroutine::Chr => character::chr(args, position)?,
        };
        Ok(Some(value))
    }
}
