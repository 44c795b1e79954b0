use crate::{
    ast::{ForLoop, Node, Position},
    error::ErlError,
    interpreter::{
        console::Console,
        evaluator::core::{Context, EvalResult, Flow},
        value::core::Value,
    },
};

impl<C: Console> Context<C> {
    /// Executes a counted `for` loop.
    ///
    /// The start, end and step expressions are evaluated once, in that
    /// order, and must all be Integers. A positive step counts up and needs
    /// `start <= end`; a negative step counts down and needs `start >= end`.
    /// A zero step, or a step pointing away from the end, is an evaluation
    /// error raised before the first pass.
    ///
    /// The loop keeps its own counter. Before every pass the counter is
    /// written to the loop variable, so assignments to the variable inside
    /// the body do not change the sequence, and after the loop the variable
    /// holds the value of the last pass.
    ///
    /// # Parameters
    /// - `context`: Loop header and body.
    /// - `position`: Position of the `for` keyword.
    ///
    /// # Returns
    /// [`Flow::Return`] if the body returned, otherwise `Flow::Normal(None)`.
    ///
    /// # Example
    /// ```
    /// use erl::interpreter::{console::BufferConsole, evaluator::core::Context};
    ///
    /// let mut context = Context::with_console(BufferConsole::new());
    /// context.run(&["for i = 5 to 1 step -2", "  print(i)", "next i"]).unwrap();
    ///
    /// assert_eq!(context.console().output(), ["5", "3", "1"]);
    /// ```
    pub(crate) fn execute_for(&mut self, context: &ForLoop, position: Position) -> EvalResult<Flow> {
        let start = self.eval_loop_bound(&context.start, "'for' start value")?;
        let end = self.eval_loop_bound(&context.end, "'for' end value")?;
        let step = self.eval_loop_bound(&context.step, "'for' step")?;

        if step == 0 {
            return Err(ErlError::evaluation("'for' step cannot be zero", context.step.position()));
        }
        let ascending = step > 0;
        if (ascending && start > end) || (!ascending && start < end) {
            return Err(ErlError::evaluation(format!("'for' loop from {start} to {end} cannot be reached with step {step}"),
                                            position));
        }

        let mut counter = start;
        loop {
            self.assign(&context.variable, Value::Integer(counter), position)?;
            if let Flow::Return(value) = self.execute_block(&context.body)? {
                return Ok(Flow::Return(value));
            }

            match counter.checked_add(step) {
                Some(next) if (ascending && next <= end) || (!ascending && next >= end) => {
                    counter = next;
                },
                _ => return Ok(Flow::Normal(None)),
            }
        }
    }

    fn eval_loop_bound(&mut self, node: &Node, what: &str) -> EvalResult<i64> {
        self.eval_value(node)?
            .as_integer(what, node.position())
    }
}
