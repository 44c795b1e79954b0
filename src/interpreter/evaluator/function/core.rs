use std::rc::Rc;

use tracing::debug;

use crate::{
    ast::{Node, Position, SubroutineDef},
    error::ErlError,
    interpreter::{
        console::Console,
        evaluator::{
            core::{Context, EvalResult, Flow, MAX_CALL_DEPTH},
            utils::check_arity,
        },
        symbol_table::SymbolTable,
        value::{core::Value, subroutine::Subroutine},
    },
    util::stack::{STACK_GROW_SIZE, STACK_RED_ZONE},
};

impl<C: Console> Context<C> {
    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first and must be a subroutine. The arguments
    /// are then evaluated left to right in the caller's scope; an error in
    /// any of them aborts the call before it starts.
    ///
    /// # Parameters
    /// - `callee`: Expression producing the subroutine.
    /// - `arguments`: Argument expressions.
    /// - `position`: Position of the call's opening bracket.
    ///
    /// # Returns
    /// The value the subroutine returned, or `None` when it returned nothing.
    pub(crate) fn eval_call(&mut self,
                            callee: &Node,
                            arguments: &[Node],
                            position: Position)
                            -> EvalResult<Option<Value>> {
        let subroutine = match self.eval_value(callee)? {
            Value::Subroutine(subroutine) => subroutine,
            other => {
                return Err(ErlError::type_error(format!("{} value '{other}' is not callable",
                                                        other.type_name()),
                                                position));
            },
        };

        let mut args = Vec::with_capacity(arguments.len());
        for argument in arguments {
            args.push(self.eval_value(argument)?);
        }

        match subroutine {
            Subroutine::Native(native) => self.call_native(native, &args, position),
            Subroutine::User(definition) => self.call_user_defined(&definition, args, position),
        }
    }

    /// Executes a user-defined subroutine.
    ///
    /// Parameters are bound positionally in a fresh call scope that replaces
    /// the caller's for the duration of the body. The caller's scope and the
    /// call depth are restored on every exit path, including errors.
    ///
    /// # Errors
    /// - Wrong number of arguments.
    /// - More than [`MAX_CALL_DEPTH`] nested calls.
    /// - Any error raised by the body.
    ///
    /// # Example
    /// ```
    /// use erl::interpreter::{console::BufferConsole, evaluator::core::Context};
    ///
    /// let mut context = Context::with_console(BufferConsole::new());
    /// context.run(&["function fact(n)",
    ///               "  if n <= 1 then",
    ///               "    return 1",
    ///               "  endif",
    ///               "  return n * fact(n - 1)",
    ///               "endfunction",
    ///               "print(fact(10))"])
    ///        .unwrap();
    ///
    /// assert_eq!(context.console().output(), ["3628800"]);
    /// assert_eq!(context.depth(), 0);
    /// ```
    fn call_user_defined(&mut self,
                         definition: &Rc<SubroutineDef>,
                         args: Vec<Value>,
                         position: Position)
                         -> EvalResult<Option<Value>> {
        check_arity(&definition.name, &args, definition.params.len(), position)?;
        if self.depth() >= MAX_CALL_DEPTH {
            return Err(ErlError::evaluation(format!("Call stack exceeded: more than {MAX_CALL_DEPTH} nested calls"),
                                            position));
        }

        let mut scope = SymbolTable::new();
        for (param, arg) in definition.params.iter().zip(args) {
            scope.assign(param, arg, false, position)?;
        }

        let caller = self.enter_scope(scope);
        debug!(name = %definition.name, depth = self.depth(), "entered subroutine");
        let flow = stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || {
            self.execute_block(&definition.body)
        });
        debug!(name = %definition.name, depth = self.depth(), "leaving subroutine");
        self.leave_scope(caller);

        match flow? {
            Flow::Normal(value) | Flow::Return(value) => Ok(value),
        }
    }
}
