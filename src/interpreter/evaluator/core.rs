use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    ast::{Identifier, Node, Position, SubroutineDef},
    error::ErlError,
    interpreter::{
        console::{Console, StdConsole},
        evaluator::utils::console_error,
        parser::core::Parser,
        symbol_table::SymbolTable,
        value::{
            core::Value,
            subroutine::{NativeSubroutine, Subroutine},
        },
    },
    util::stack::{STACK_GROW_SIZE, STACK_RED_ZONE},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`ErlError`] describing the failure.
pub type EvalResult<T> = Result<T, ErlError>;

/// Maximum number of nested user-defined subroutine invocations.
pub const MAX_CALL_DEPTH: usize = 1500;

/// How a statement finished.
///
/// `return` travels up through enclosing blocks and loops as
/// [`Flow::Return`] until the call that owns it turns it back into a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Continue with the next statement. Carries the value of an expression
    /// statement, if it produced one.
    Normal(Option<Value>),
    /// A `return` is unwinding to the innermost subroutine call.
    Return(Option<Value>),
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the global table that lives for
/// the whole run, the call scope of the subroutine currently executing (if
/// any), the call depth and the console the program talks to.
///
/// ## Usage
///
/// A `Context` is created once per independent run. Running more source
/// through the same context (as the interactive shell does) keeps every
/// global binding alive between runs.
///
/// ## Example
/// ```
/// use erl::interpreter::{console::BufferConsole, evaluator::core::Context};
///
/// let mut context = Context::with_console(BufferConsole::new());
/// context.run(&["x = 2", "print(x * 21)"]).unwrap();
///
/// assert_eq!(context.console().output(), ["42"]);
/// ```
#[derive(Debug)]
pub struct Context<C: Console = StdConsole> {
    globals: SymbolTable,
    scope:   Option<SymbolTable>,
    depth:   usize,
    echo:    bool,
    console: C,
}

impl Context {
    /// Creates a context that talks to stdout and stdin.
    #[must_use]
    pub fn new() -> Self {
        Self::with_console(StdConsole)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Console> Context<C> {
    /// Creates a context with an empty global table around `console`.
    pub fn with_console(console: C) -> Self {
        Self { globals: SymbolTable::new(),
               scope: None,
               depth: 0,
               echo: false,
               console }
    }

    /// Makes top-level expression statements write their value to the
    /// console.
    #[must_use]
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub const fn console(&self) -> &C {
        &self.console
    }

    pub const fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub const fn globals(&self) -> &SymbolTable {
        &self.globals
    }

    /// The number of user-defined subroutine calls currently active.
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Tokenizes, parses and executes a whole program.
    ///
    /// The program is tokenized up front; statements are then parsed and
    /// executed one at a time in source order. The first error of any kind
    /// stops the run, so the statements before it keep their effects.
    ///
    /// # Parameters
    /// - `lines`: The program text, one entry per source line.
    ///
    /// # Errors
    /// Returns the first lexical, syntax or runtime error.
    pub fn run<S: AsRef<str>>(&mut self, lines: &[S]) -> EvalResult<()> {
        debug!(lines = lines.len(), "run started");
        let mut parser = Parser::from_source(lines)?;
        while let Some(node) = parser.parse_next()? {
            self.execute_top_level(&node)?;
        }
        debug!("run finished");
        Ok(())
    }

    /// Executes one top-level statement and echoes its value when echo is
    /// enabled.
    ///
    /// # Returns
    /// The value of an expression statement, or `None`.
    pub fn execute_top_level(&mut self, node: &Node) -> EvalResult<Option<Value>> {
        trace!(position = %node.position(), "executing statement");
        let value = match self.execute(node)? {
            Flow::Normal(value) | Flow::Return(value) => value,
        };
        if self.echo
           && let Some(value) = &value
        {
            self.console
                .write_line(&value.to_string())
                .map_err(|error| console_error(&error, node.position()))?;
        }
        Ok(value)
    }

    /// Executes a single statement.
    ///
    /// Handles assignments, subroutine definitions, `return`, the control
    /// constructs and plain expression statements.
    ///
    /// # Returns
    /// [`Flow::Return`] when a `return` ran, otherwise [`Flow::Normal`].
    pub fn execute(&mut self, node: &Node) -> EvalResult<Flow> {
        match node {
            Node::Assignment { target,
                               value,
                               position, } => {
                let value = self.eval_value(value)?;
                self.assign(target, value, *position)?;
                Ok(Flow::Normal(None))
            },
            Node::SubroutineDefinition { definition,
                                         position, } => {
                self.define_subroutine(definition, *position)?;
                Ok(Flow::Normal(None))
            },
            Node::Return { value, .. } => {
                let value = match value {
                    Some(expression) => Some(self.eval_value(expression)?),
                    None => None,
                };
                Ok(Flow::Return(value))
            },
            Node::If { cases, else_body, .. } => self.execute_if(cases, else_body.as_deref()),
            Node::While { condition, body, .. } => self.execute_while(condition, body),
            Node::DoUntil { condition, body, .. } => self.execute_do_until(condition, body),
            Node::For { context, position } => self.execute_for(context, *position),
            expression => Ok(Flow::Normal(self.eval(expression)?)),
        }
    }

    /// Executes statements in order, stopping early when one returns.
    pub fn execute_block(&mut self, body: &[Node]) -> EvalResult<Flow> {
        for statement in body {
            if let Flow::Return(value) = self.execute(statement)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Normal(None))
    }

    /// Evaluates an expression node.
    ///
    /// Switches to a fresh stack segment when the current one runs low, so
    /// deeply nested expressions cannot overflow the native stack.
    ///
    /// # Returns
    /// `Some(Value)` for expressions that produce a value, or `None` for a
    /// call to a subroutine that returned nothing.
    pub fn eval(&mut self, node: &Node) -> EvalResult<Option<Value>> {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || self.eval_inner(node))
    }

    fn eval_inner(&mut self, node: &Node) -> EvalResult<Option<Value>> {
        match node {
            Node::Literal { value, .. } => Ok(Some(Value::from(value))),
            Node::Identifier { identifier,
                               position, } => self.lookup(&identifier.name, *position).map(Some),
            Node::BinaryOp { left,
                             op,
                             right,
                             position, } => self.eval_binary_op(left, *op, right, *position).map(Some),
            Node::UnaryOp { op,
                            operand,
                            position, } => self.eval_unary_op(*op, operand, *position).map(Some),
            Node::Call { callee,
                         arguments,
                         position, } => self.eval_call(callee, arguments, *position),
            statement => {
                Err(ErlError::evaluation("A statement cannot be used as a value", statement.position()))
            },
        }
    }

    /// Evaluates a subexpression and ensures that it produces a value.
    ///
    /// # Errors
    /// Besides the errors of the expression itself, fails with an evaluation
    /// error when the expression is a call that returned no value.
    pub fn eval_value(&mut self, node: &Node) -> EvalResult<Value> {
        self.eval(node)?.ok_or_else(|| missing_value(node))
    }

    /// Resolves a name: the active call scope first, then the global table,
    /// then the native subroutines.
    ///
    /// # Errors
    /// Returns an identifier error when no table holds a value for `name`
    /// and it is not a native.
    pub fn lookup(&self, name: &str, position: Position) -> EvalResult<Value> {
        if let Some(value) = self.scope.as_ref().and_then(|scope| scope.lookup(name)) {
            return Ok(value.clone());
        }
        if let Some(value) = self.globals.lookup(name) {
            return Ok(value.clone());
        }
        NativeSubroutine::from_name(name).map(|native| Value::Subroutine(Subroutine::Native(native)))
                                         .ok_or_else(|| ErlError::undeclared(name, position))
    }

    /// Binds `value` to `target`.
    ///
    /// A `global` target always writes the global table; otherwise the
    /// active call scope is written, or the global table at the top level.
    pub fn assign(&mut self, target: &Identifier, value: Value, position: Position) -> EvalResult<()> {
        let table = match &mut self.scope {
            Some(scope) if !target.global => scope,
            _ => &mut self.globals,
        };
        table.assign(&target.name, value, target.constant, position)
    }

    fn define_subroutine(&mut self, definition: &Rc<SubroutineDef>, position: Position) -> EvalResult<()> {
        debug!(name = %definition.name,
               kind = %definition.kind,
               params = definition.params.len(),
               "defining subroutine");
        let value = Value::Subroutine(Subroutine::User(Rc::clone(definition)));
        self.assign(&Identifier::plain(definition.name.as_str()), value, position)
    }

    /// Installs `scope` as the active call scope, returning the caller's.
    pub(crate) fn enter_scope(&mut self, scope: SymbolTable) -> Option<SymbolTable> {
        self.depth += 1;
        self.scope.replace(scope)
    }

    /// Reinstates the caller's scope saved by [`Context::enter_scope`].
    pub(crate) fn leave_scope(&mut self, caller: Option<SymbolTable>) {
        self.depth -= 1;
        self.scope = caller;
    }
}

fn missing_value(node: &Node) -> ErlError {
    let message = match node {
        Node::Call { callee, .. } => match callee.as_ref() {
            Node::Identifier { identifier, .. } => {
                format!("'{}' did not return a value", identifier.name)
            },
            _ => "Subroutine call did not return a value".to_string(),
        },
        _ => "Expression did not produce a value".to_string(),
    };
    ErlError::evaluation(message, node.position())
}
