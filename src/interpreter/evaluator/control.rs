use crate::{
    ast::{IfCase, Node},
    interpreter::{
        console::Console,
        evaluator::core::{Context, EvalResult, Flow},
    },
};

impl<C: Console> Context<C> {
    /// Evaluates `node` and requires a Boolean; `what` names the construct
    /// in the type error.
    pub(crate) fn eval_condition(&mut self, node: &Node, what: &str) -> EvalResult<bool> {
        self.eval_value(node)?
            .as_boolean(what, node.position())
    }

    /// Executes an `if` chain.
    ///
    /// Conditions are evaluated in order until one is `True`; only that
    /// case's body runs. When none is, the `else` body runs if present.
    ///
    /// # Example
    /// ```
    /// use erl::interpreter::{console::BufferConsole, evaluator::core::Context};
    ///
    /// let mut context = Context::with_console(BufferConsole::new());
    /// context.run(&["x = 2",
    ///               "if x > 3 then",
    ///               "  print(\"big\")",
    ///               "elseif x > 1 then",
    ///               "  print(\"medium\")",
    ///               "else",
    ///               "  print(\"small\")",
    ///               "endif"])
    ///        .unwrap();
    ///
    /// assert_eq!(context.console().output(), ["medium"]);
    /// ```
    pub(crate) fn execute_if(&mut self, cases: &[IfCase], else_body: Option<&[Node]>) -> EvalResult<Flow> {
        for case in cases {
            if self.eval_condition(&case.condition, "'if' condition")? {
                return self.execute_block(&case.body);
            }
        }
        match else_body {
            Some(body) => self.execute_block(body),
            None => Ok(Flow::Normal(None)),
        }
    }

    /// Executes a `while` loop; the condition is checked before each pass.
    pub(crate) fn execute_while(&mut self, condition: &Node, body: &[Node]) -> EvalResult<Flow> {
        while self.eval_condition(condition, "'while' condition")? {
            if let Flow::Return(value) = self.execute_block(body)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Normal(None))
    }

    /// Executes a `do` ... `until` loop; the body runs at least once and the
    /// loop ends when the condition becomes `True`.
    pub(crate) fn execute_do_until(&mut self, condition: &Node, body: &[Node]) -> EvalResult<Flow> {
        loop {
            if let Flow::Return(value) = self.execute_block(body)? {
                return Ok(Flow::Return(value));
            }
            if self.eval_condition(condition, "'until' condition")? {
                return Ok(Flow::Normal(None));
            }
        }
    }
}
