use crate::{
    ast::Position,
    interpreter::{
        console::Console,
        evaluator::{
            core::{Context, EvalResult},
            utils::{argument_type_error, check_arity_range, console_error},
        },
        value::core::Value,
    },
};

impl<C: Console> Context<C> {
    /// Reads one line from the console.
    ///
    /// Takes an optional String prompt, shown before reading. The line comes
    /// back as a String without its terminator.
    ///
    /// # Example
    /// ```
    /// use erl::interpreter::{console::BufferConsole, evaluator::core::Context};
    ///
    /// let mut context = Context::with_console(BufferConsole::with_input(["Ada"]));
    /// context.run(&["name = input(\"Name? \")", "print(\"Hello \" + name)"]).unwrap();
    ///
    /// assert_eq!(context.console().prompts(), ["Name? "]);
    /// assert_eq!(context.console().output(), ["Hello Ada"]);
    /// ```
    pub(crate) fn input(&mut self, args: &[Value], position: Position) -> EvalResult<Value> {
        check_arity_range("input", args, 0..=1, position)?;

        let prompt = match args.first() {
            None => "",
            Some(Value::String(prompt)) => prompt.as_str(),
            Some(other) => return Err(argument_type_error("input", "a String prompt", other, position)),
        };

        self.console_mut()
            .read_line(prompt)
            .map(Value::String)
            .map_err(|error| console_error(&error, position))
    }
}
