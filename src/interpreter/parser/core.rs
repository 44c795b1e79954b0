use crate::{
    ast::{Node, Position, SubroutineKind},
    error::ErlError,
    interpreter::lexer::{Lexeme, Token, tokenize},
};

pub type ParseResult<T> = Result<T, ErlError>;

/// Recursive-descent parser over per-line token lists.
///
/// The parser hands out one top-level statement per [`Parser::parse_next`]
/// call. Statements are line oriented: a simple statement must use up its
/// line, and block constructs consume their header line, every body line and
/// the line holding their terminator keyword.
///
/// ## Example
/// ```
/// use erl::{ast::Node, interpreter::parser::core::Parser};
///
/// let mut parser = Parser::from_source(&["x = 1", "", "while x < 3", "  x = x + 1", "endwhile"]).unwrap();
///
/// assert!(matches!(parser.parse_next().unwrap(), Some(Node::Assignment { .. })));
/// assert!(matches!(parser.parse_next().unwrap(), Some(Node::While { .. })));
/// assert_eq!(parser.parse_next().unwrap(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Parser {
    lines:                  Vec<Vec<Lexeme>>,
    line:                   usize,
    index:                  usize,
    previous:               Position,
    /// The kind of the subroutine whose body is being parsed, if any.
    pub(super) subroutine: Option<SubroutineKind>,
}

impl Parser {
    /// Creates a parser over already tokenized lines.
    #[must_use]
    pub fn new(lines: Vec<Vec<Lexeme>>) -> Self {
        Self { lines,
               line: 0,
               index: 0,
               previous: Position::default(),
               subroutine: None }
    }

    /// Tokenizes `lines` and creates a parser over the result.
    ///
    /// # Errors
    /// Returns the first lexical error in the program.
    pub fn from_source<S: AsRef<str>>(lines: &[S]) -> ParseResult<Self> {
        Ok(Self::new(tokenize(lines)?))
    }

    /// Parses the next top-level statement.
    ///
    /// Blank and comment-only lines are skipped. Returns `Ok(None)` once the
    /// input is exhausted.
    ///
    /// # Errors
    /// Returns an [`ErlError::Syntax`] describing the first grammar violation.
    pub fn parse_next(&mut self) -> ParseResult<Option<Node>> {
        if !self.skip_blank_lines() {
            return Ok(None);
        }
        self.parse_statement().map(Some)
    }

    /// Parses every remaining statement.
    ///
    /// # Errors
    /// Stops at, and returns, the first syntax error.
    pub fn parse_all(&mut self) -> ParseResult<Vec<Node>> {
        let mut nodes = Vec::new();
        while let Some(node) = self.parse_next()? {
            nodes.push(node);
        }
        Ok(nodes)
    }

    /// Moves to the next line holding at least one token. Returns `false`
    /// when the input is exhausted.
    pub(super) fn skip_blank_lines(&mut self) -> bool {
        while self.lines
                  .get(self.line)
                  .is_some_and(Vec::is_empty)
        {
            self.line += 1;
            self.index = 0;
        }
        self.line < self.lines.len()
    }

    pub(super) fn peek_lexeme(&self) -> Option<&Lexeme> {
        self.lines.get(self.line)?.get(self.index)
    }

    pub(super) fn peek(&self) -> Option<&Token> {
        self.peek_lexeme().map(|(token, _)| token)
    }

    /// Looks `offset` tokens past the current one on the same line.
    pub(super) fn peek_at(&self, offset: usize) -> Option<&Token> {
        self.lines
            .get(self.line)?
            .get(self.index + offset)
            .map(|(token, _)| token)
    }

    pub(super) fn check(&self, token: &Token) -> bool {
        self.peek() == Some(token)
    }

    pub(super) fn at_line_end(&self) -> bool {
        self.peek_lexeme().is_none()
    }

    /// Consumes the current token.
    pub(super) fn advance(&mut self) -> Option<Lexeme> {
        let lexeme = self.peek_lexeme()?.clone();
        self.index += 1;
        self.previous = lexeme.1;
        Some(lexeme)
    }

    /// Consumes the current token and returns its position.
    pub(super) fn advance_position(&mut self) -> Position {
        self.advance().map_or(self.previous, |(_, position)| position)
    }

    /// Consumes `token` or fails with `message`.
    pub(super) fn expect(&mut self, token: &Token, message: &str) -> ParseResult<Position> {
        match self.peek_lexeme() {
            Some((found, _)) if found == token => Ok(self.advance_position()),
            Some((found, position)) => {
                Err(ErlError::syntax(format!("{message}, found '{found}'"), *position))
            },
            None => Err(ErlError::syntax(message, self.previous)),
        }
    }

    /// Requires the current line to be used up and moves to the next one.
    pub(super) fn finish_line(&mut self) -> ParseResult<()> {
        if let Some((token, position)) = self.peek_lexeme() {
            return Err(ErlError::syntax(format!("Unexpected token '{token}'"), *position));
        }
        self.line += 1;
        self.index = 0;
        Ok(())
    }

    /// Position of the most recently consumed token.
    pub(super) const fn previous(&self) -> Position {
        self.previous
    }

    /// The error for a line that ends where an operand was required.
    pub(super) fn incomplete(&self) -> ErlError {
        ErlError::syntax("Incomplete input", self.previous)
    }

    /// Fails with "incomplete input" when the current line is used up.
    pub(super) fn require_more(&self) -> ParseResult<()> {
        if self.at_line_end() {
            return Err(self.incomplete());
        }
        Ok(())
    }
}
