use crate::{
    ast::Position,
    interpreter::{
        console::Console,
        evaluator::{
            core::{Context, EvalResult},
            utils::{check_arity, console_error},
        },
        value::core::Value,
    },
};

impl<C: Console> Context<C> {
    /// Writes the display form of a value as one console line.
    ///
    /// Accepts exactly one argument of any type.
    ///
    /// # Example
    /// ```
    /// use erl::interpreter::{console::BufferConsole, evaluator::core::Context};
    ///
    /// let mut context = Context::with_console(BufferConsole::new());
    /// context.run(&["print(1 / 4)", "print(2.0)", "print(3 > 2)", "print(\"done\")"]).unwrap();
    ///
    /// assert_eq!(context.console().output(), ["0.25", "2.0", "True", "done"]);
    /// ```
    pub(crate) fn print(&mut self, args: &[Value], position: Position) -> EvalResult<()> {
        check_arity("print", args, 1, position)?;

        self.console_mut()
            .write_line(&args[0].to_string())
            .map_err(|error| console_error(&error, position))
    }
}
