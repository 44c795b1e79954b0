use std::{fmt, mem, rc::Rc};

use crate::interpreter::value::core::format_float;

/// A location in the program text.
///
/// Both fields are zero-based: `line` indexes the source line list handed to
/// the lexer and `column` counts characters from the start of that line. The
/// [`Display`](fmt::Display) form is one-based for humans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Zero-based source line index.
    pub line:   usize,
    /// Zero-based character column within the line.
    pub column: usize,
}

impl Position {
    /// Creates a new position.
    ///
    /// ## Example
    /// ```
    /// use erl::ast::Position;
    ///
    /// let position = Position::new(2, 4);
    /// assert_eq!(position.to_string(), "line 3, column 5");
    /// ```
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line + 1, self.column + 1)
    }
}

/// Represents a literal value in the language.
///
/// Literals are the only leaves that carry data straight from the source text.
/// Each one becomes the matching runtime value when evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal, e.g. `42`.
    Integer(i64),
    /// A 64-bit floating-point literal, e.g. `3.0`.
    Float(f64),
    /// `True` or `False`.
    Boolean(bool),
    /// A quoted string literal without its quotes.
    String(String),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{}", format_float(*x)),
            Self::Boolean(true) => write!(f, "True"),
            Self::Boolean(false) => write!(f, "False"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

/// A name together with the qualifiers written at its binding site.
///
/// `constant` and `global` are only ever set on the left-hand side of an
/// assignment (`const x = 1`, `global y = 2`); identifiers in expressions
/// always carry `false` for both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// The identifier's name.
    pub name:     String,
    /// Declared with `const`.
    pub constant: bool,
    /// Declared with `global`.
    pub global:   bool,
}

impl Identifier {
    /// Creates an unqualified identifier.
    #[must_use]
    pub fn plain(name: impl Into<String>) -> Self {
        Self { name:     name.into(),
               constant: false,
               global:   false, }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Minus,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
    /// Exponentiation (`^`)
    Exponent,
    /// Remainder (`MOD`)
    Modulus,
    /// Floor division (`DIV`)
    IntegerDivide,
    /// Logical conjunction (`AND`)
    And,
    /// Logical disjunction (`OR`)
    Or,
    /// One of the six comparisons.
    Comparison(ComparisonOperator),
}

/// The comparison operators accepted at the comparison precedence level.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Numeric identity (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Negate,
    /// Logical negation (`NOT x`).
    Not,
}

/// Distinguishes the two flavours of user-defined subroutine.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SubroutineKind {
    /// Opened with `procedure`, closed with `endprocedure`.
    Procedure,
    /// Opened with `function`, closed with `endfunction`.
    Function,
}

impl SubroutineKind {
    /// The keyword that closes a definition of this kind.
    #[must_use]
    pub const fn terminator(self) -> &'static str {
        match self {
            Self::Procedure => "endprocedure",
            Self::Function => "endfunction",
        }
    }
}

impl fmt::Display for SubroutineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Procedure => write!(f, "procedure"),
            Self::Function => write!(f, "function"),
        }
    }
}

/// A user-defined subroutine as written in the source.
///
/// The definition is shared between the AST node that introduces it and
/// every runtime value that refers to it, hence the `Rc` in
/// [`Node::SubroutineDefinition`].
#[derive(Debug, Clone, PartialEq)]
pub struct SubroutineDef {
    /// The name the subroutine is bound to.
    pub name:   String,
    /// `procedure` or `function`.
    pub kind:   SubroutineKind,
    /// Parameter names in declaration order.
    pub params: Vec<String>,
    /// Body statements in source order.
    pub body:   Vec<Node>,
}

/// One `if`/`elseif` arm.
#[derive(Debug, Clone, PartialEq)]
pub struct IfCase {
    /// Must evaluate to a Boolean.
    pub condition: Node,
    /// Statements run when `condition` is the first true one.
    pub body:      Vec<Node>,
}

/// Header and body of a counted `for` loop.
#[derive(Debug, Clone, PartialEq)]
pub struct ForLoop {
    /// The loop variable.
    pub variable: Identifier,
    /// Initial value expression.
    pub start:    Box<Node>,
    /// Inclusive bound expression.
    pub end:      Box<Node>,
    /// Step expression; `1` when the header has no `step` clause.
    pub step:     Box<Node>,
    /// Statements executed on each pass.
    pub body:     Vec<Node>,
}

/// An abstract syntax tree node.
///
/// `Node` is a closed set of variants covering expressions and statements
/// alike. Every node records the [`Position`] of the token that introduced it
/// so errors raised while evaluating it can point back into the source.
/// Children are owned exclusively by their parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A literal value.
    Literal {
        /// The constant value.
        value:    LiteralValue,
        /// Source position.
        position: Position,
    },
    /// A reference to a named value.
    Identifier {
        /// Name and qualifiers.
        identifier: Identifier,
        /// Source position.
        position:   Position,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator token.
        position: Position,
    },
    /// A prefix operation.
    UnaryOp {
        /// The operator.
        op:       UnaryOperator,
        /// The operand.
        operand:  Box<Self>,
        /// Position of the operator token.
        position: Position,
    },
    /// `target = value`, optionally qualified with `const`/`global`.
    Assignment {
        /// The identifier being bound.
        target:   Identifier,
        /// The value expression.
        value:    Box<Self>,
        /// Position of the target identifier.
        position: Position,
    },
    /// `callee(arguments...)`
    Call {
        /// The expression producing the subroutine.
        callee:    Box<Self>,
        /// Argument expressions in source order.
        arguments: Vec<Self>,
        /// Position of the opening bracket.
        position:  Position,
    },
    /// A `procedure` or `function` definition.
    SubroutineDefinition {
        /// The shared definition.
        definition: Rc<SubroutineDef>,
        /// Position of the opening keyword.
        position:   Position,
    },
    /// `return` with an optional value.
    Return {
        /// The returned expression, if any.
        value:    Option<Box<Self>>,
        /// Position of the `return` keyword.
        position: Position,
    },
    /// `if` / `elseif` / `else` / `endif`.
    If {
        /// The `if` arm followed by every `elseif` arm.
        cases:     Vec<IfCase>,
        /// The `else` body, when present.
        else_body: Option<Vec<Self>>,
        /// Position of the `if` keyword.
        position:  Position,
    },
    /// `while condition` ... `endwhile`.
    While {
        /// Checked before every pass.
        condition: Box<Self>,
        /// Loop body.
        body:      Vec<Self>,
        /// Position of the `while` keyword.
        position:  Position,
    },
    /// `do` ... `until condition`.
    DoUntil {
        /// Checked after every pass.
        condition: Box<Self>,
        /// Loop body.
        body:      Vec<Self>,
        /// Position of the `do` keyword.
        position:  Position,
    },
    /// `for variable = start to end [step s]` ... `next variable`.
    For {
        /// Loop header and body.
        context:  ForLoop,
        /// Position of the `for` keyword.
        position: Position,
    },
}

impl Node {
    /// Gets the source position of `self`.
    ///
    /// ## Example
    /// ```
    /// use erl::ast::{Identifier, Node, Position};
    ///
    /// let node = Node::Identifier { identifier: Identifier::plain("x"),
    ///                               position:   Position::new(4, 2), };
    ///
    /// assert_eq!(node.position(), Position::new(4, 2));
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Literal { position, .. }
            | Self::Identifier { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::Assignment { position, .. }
            | Self::Call { position, .. }
            | Self::SubroutineDefinition { position, .. }
            | Self::Return { position, .. }
            | Self::If { position, .. }
            | Self::While { position, .. }
            | Self::DoUntil { position, .. }
            | Self::For { position, .. } => *position,
        }
    }
}

impl Node {
    /// Moves the operand subtrees of an expression node onto `pending`,
    /// leaving literal placeholders behind.
    fn detach_operands(&mut self, pending: &mut Vec<Self>) {
        match self {
            Self::BinaryOp { left, right, .. } => {
                pending.push(detach(left));
                pending.push(detach(right));
            },
            Self::UnaryOp { operand, .. } => pending.push(detach(operand)),
            Self::Call { callee, arguments, .. } => {
                pending.push(detach(callee));
                pending.append(arguments);
            },
            _ => {},
        }
    }
}

/// Expression trees are torn down iteratively; a long operator chain is as
/// deep as it is long.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_operands(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_operands(&mut pending);
        }
    }
}

fn detach(node: &mut Node) -> Node {
    mem::replace(node,
                 Node::Literal { value:    LiteralValue::Integer(0),
                                 position: Position::default(), })
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Minus => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Exponent => "^",
            Self::Modulus => "MOD",
            Self::IntegerDivide => "DIV",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Comparison(op) => return write!(f, "{op}"),
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "NOT"),
        }
    }
}
