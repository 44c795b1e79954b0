use crate::{
    ast::{BinaryOperator, ComparisonOperator, Node, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
    util::stack::{STACK_GROW_SIZE, STACK_RED_ZONE},
};

impl Parser {
    /// Parses a full expression: comparisons joined by `AND` / `OR`.
    ///
    /// The rule is: `chain := comparison (("AND" | "OR") comparison)*`
    ///
    /// Both operators share one level and associate to the left.
    pub(super) fn parse_statement_chain(&mut self) -> ParseResult<Node> {
        self.parse_binary(Self::parse_comparison, |token| match token {
                                                      Token::And => Some(BinaryOperator::And),
                                                      Token::Or => Some(BinaryOperator::Or),
                                                      _ => None,
                                                  })
    }

    /// Parses comparisons and the `NOT` prefix.
    ///
    /// The rule is: `comparison := "NOT" comparison | expression (cmp
    /// expression)*`
    ///
    /// `NOT` binds looser than the comparison operators and tighter than
    /// `AND` / `OR`, so `NOT a == b AND c` reads as `(NOT (a == b)) AND c`.
    pub(super) fn parse_comparison(&mut self) -> ParseResult<Node> {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || self.parse_comparison_inner())
    }

    fn parse_comparison_inner(&mut self) -> ParseResult<Node> {
        if self.check(&Token::Not) {
            let position = self.advance_position();
            self.require_more()?;
            let operand = self.parse_comparison()?;
            return Ok(Node::UnaryOp { op: UnaryOperator::Not,
                                      operand: Box::new(operand),
                                      position });
        }
        self.parse_binary(Self::parse_expression, comparison_operator)
    }

    /// Parses addition and subtraction.
    ///
    /// The rule is: `expression := term (("+" | "-") term)*`
    pub(super) fn parse_expression(&mut self) -> ParseResult<Node> {
        self.parse_binary(Self::parse_term, |token| match token {
                                                Token::Plus => Some(BinaryOperator::Add),
                                                Token::Minus => Some(BinaryOperator::Minus),
                                                _ => None,
                                            })
    }

    /// Parses multiplication-level operators.
    ///
    /// The rule is: `term := exponent (("*" | "/" | "MOD" | "DIV") exponent)*`
    pub(super) fn parse_term(&mut self) -> ParseResult<Node> {
        self.parse_binary(Self::parse_exponent, |token| match token {
                                                    Token::Star => Some(BinaryOperator::Multiply),
                                                    Token::Slash => Some(BinaryOperator::Divide),
                                                    Token::Mod => Some(BinaryOperator::Modulus),
                                                    Token::Div => Some(BinaryOperator::IntegerDivide),
                                                    _ => None,
                                                })
    }

    /// Parses exponentiation.
    ///
    /// The rule is: `exponent := factor ("^" factor)*`
    ///
    /// `^` is left-associative like every other binary operator here:
    /// `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2`.
    pub(super) fn parse_exponent(&mut self) -> ParseResult<Node> {
        self.parse_binary(Self::parse_factor, |token| match token {
                                                  Token::Caret => Some(BinaryOperator::Exponent),
                                                  _ => None,
                                              })
    }

    /// Shared loop for every left-associative level.
    ///
    /// # Parameters
    /// - `next`: Parses one operand at the next tighter level.
    /// - `accept`: Maps the tokens of this level to their operator.
    ///
    /// # Returns
    /// The left-folded `Node::BinaryOp` tree, positioned at each operator.
    fn parse_binary(&mut self,
                    next: fn(&mut Self) -> ParseResult<Node>,
                    accept: fn(&Token) -> Option<BinaryOperator>)
                    -> ParseResult<Node> {
        let mut left = next(self)?;
        while let Some(op) = self.peek().and_then(accept) {
            let position = self.advance_position();
            self.require_more()?;
            let right = next(self)?;
            left = Node::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
        }
        Ok(left)
    }
}

fn comparison_operator(token: &Token) -> Option<BinaryOperator> {
    let op = match token {
        Token::EqualEqual => ComparisonOperator::Equal,
        Token::BangEqual => ComparisonOperator::NotEqual,
        Token::Less => ComparisonOperator::Less,
        Token::LessEqual => ComparisonOperator::LessEqual,
        Token::Greater => ComparisonOperator::Greater,
        Token::GreaterEqual => ComparisonOperator::GreaterEqual,
        _ => return None,
    };
    Some(BinaryOperator::Comparison(op))
}
