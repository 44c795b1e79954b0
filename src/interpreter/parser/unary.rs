use crate::{
    ast::{Identifier, LiteralValue, Node, Position, UnaryOperator},
    error::ErlError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
    util::stack::{STACK_GROW_SIZE, STACK_RED_ZONE},
};

impl Parser {
    /// Parses a factor, the tightest binding expression form.
    ///
    /// The rule is: `factor := ("+" | "-") factor | primary call*`, where a
    /// primary is a literal, an identifier or a bracketed chain.
    ///
    /// A unary sign applies to the whole factor after it, call suffixes
    /// included, so `-f(2)` negates the call result.
    ///
    /// # Returns
    /// The parsed node, or a syntax error when the line ends early or the
    /// next token cannot start an operand.
    pub(super) fn parse_factor(&mut self) -> ParseResult<Node> {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || self.parse_factor_inner())
    }

    fn parse_factor_inner(&mut self) -> ParseResult<Node> {
        let Some((token, position)) = self.advance() else {
            return Err(self.incomplete());
        };

        let primary = match token {
            Token::Plus | Token::Minus => {
                let op = if token == Token::Plus { UnaryOperator::Plus } else { UnaryOperator::Negate };
                self.require_more()?;
                let operand = self.parse_factor()?;
                return Ok(Node::UnaryOp { op,
                                          operand: Box::new(operand),
                                          position });
            },
            Token::Integer(n) => literal(n, position),
            Token::Float(x) => literal(x, position),
            Token::Boolean(b) => literal(b, position),
            Token::Str(s) => Node::Literal { value: LiteralValue::String(s),
                                             position },
            Token::Identifier(name) => Node::Identifier { identifier: Identifier::plain(name),
                                                          position },
            Token::LParen => {
                self.require_more()?;
                let inner = self.parse_statement_chain()?;
                self.expect(&Token::RParen, "Expected ')' to close '('")?;
                inner
            },
            other => {
                return Err(ErlError::syntax(format!("Unexpected token '{other}'"), position));
            },
        };

        self.parse_call_chain(primary)
    }

    /// Wraps `callee` in one `Node::Call` per `(args)` group that follows it.
    fn parse_call_chain(&mut self, callee: Node) -> ParseResult<Node> {
        let mut node = callee;
        while self.check(&Token::LParen) {
            let position = self.advance_position();
            let arguments = self.parse_comma_separated(position, Self::parse_statement_chain)?;
            node = Node::Call { callee: Box::new(node),
                                arguments,
                                position };
        }
        Ok(node)
    }
}

fn literal(value: impl Into<LiteralValue>, position: Position) -> Node {
    Node::Literal { value: value.into(),
                    position }
}
