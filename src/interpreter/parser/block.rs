use std::rc::Rc;

use crate::{
    ast::{ForLoop, Identifier, IfCase, LiteralValue, Node, Position, SubroutineDef, SubroutineKind},
    error::ErlError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

/// A parsed block body together with the keyword that ended it.
struct Body {
    statements: Vec<Node>,
    terminator: Token,
    position:   Position,
}

impl Parser {
    /// Parses statements line by line until a line starts with one of
    /// `terminators`.
    ///
    /// The terminator token itself is consumed; whatever follows it on that
    /// line is left for the caller.
    ///
    /// # Parameters
    /// - `terminators`: Keywords that end this body.
    /// - `opener`: The keyword that opened the block and its position.
    /// - `expected`: The terminator named when input runs out.
    ///
    /// # Returns
    /// The body, or an end-of-input syntax error positioned at the opener.
    fn parse_body(&mut self,
                  terminators: &[Token],
                  opener: (&str, Position),
                  expected: &str)
                  -> ParseResult<Body> {
        let mut statements = Vec::new();
        loop {
            if !self.skip_blank_lines() {
                let (keyword, position) = opener;
                return Err(ErlError::unterminated(format!("Expected '{expected}' to close '{keyword}' on line {}",
                                                          position.line + 1),
                                                  position));
            }

            if let Some((token, position)) = self.peek_lexeme()
               && terminators.contains(token)
            {
                let (terminator, position) = (token.clone(), *position);
                self.advance();
                return Ok(Body { statements,
                                 terminator,
                                 position });
            }

            statements.push(self.parse_statement()?);
        }
    }

    /// Parses a condition that must be followed by `then` and the end of the
    /// line.
    fn parse_guarded_condition(&mut self) -> ParseResult<Node> {
        self.require_more()?;
        let condition = self.parse_statement_chain()?;
        self.expect(&Token::Then, "Expected 'then' after the condition")?;
        self.finish_line()?;
        Ok(condition)
    }

    /// Parses an `if` / `elseif` / `else` / `endif` chain.
    ///
    /// # Example
    /// ```
    /// use erl::{ast::Node, interpreter::parser::core::Parser};
    ///
    /// let source = ["if x > 3 then", "  y = 1", "elseif x > 1 then", "  y = 2", "else", "  y = 3", "endif"];
    /// let node = Parser::from_source(&source).unwrap().parse_next().unwrap();
    ///
    /// let Some(Node::If { cases, else_body, .. }) = &node else { panic!("expected an if") };
    /// assert_eq!(cases.len(), 2);
    /// assert_eq!(else_body.as_ref().map(Vec::len), Some(1));
    /// ```
    pub(super) fn parse_if(&mut self) -> ParseResult<Node> {
        let position = self.advance_position();
        let arms = [Token::ElseIf, Token::Else, Token::EndIf];
        let mut cases = Vec::new();
        let mut condition = self.parse_guarded_condition()?;

        loop {
            let body = self.parse_body(&arms, ("if", position), "endif")?;
            cases.push(IfCase { condition,
                                body: body.statements });

            match body.terminator {
                Token::ElseIf => condition = self.parse_guarded_condition()?,
                Token::Else => {
                    self.finish_line()?;
                    let else_body = self.parse_body(&arms, ("if", position), "endif")?;
                    if else_body.terminator != Token::EndIf {
                        return Err(ErlError::syntax(format!("'{}' cannot follow 'else'",
                                                            else_body.terminator),
                                                    else_body.position));
                    }
                    self.finish_line()?;
                    return Ok(Node::If { cases,
                                         else_body: Some(else_body.statements),
                                         position });
                },
                _ => {
                    self.finish_line()?;
                    return Ok(Node::If { cases,
                                         else_body: None,
                                         position });
                },
            }
        }
    }

    /// Parses `while condition` ... `endwhile`.
    pub(super) fn parse_while(&mut self) -> ParseResult<Node> {
        let position = self.advance_position();
        self.require_more()?;
        let condition = self.parse_statement_chain()?;
        self.finish_line()?;

        let body = self.parse_body(&[Token::EndWhile], ("while", position), "endwhile")?;
        self.finish_line()?;

        Ok(Node::While { condition: Box::new(condition),
                         body: body.statements,
                         position })
    }

    /// Parses `do` ... `until condition`.
    pub(super) fn parse_do_until(&mut self) -> ParseResult<Node> {
        let position = self.advance_position();
        self.finish_line()?;

        let body = self.parse_body(&[Token::Until], ("do", position), "until")?;
        if self.at_line_end() {
            return Err(ErlError::syntax("Expected a condition after 'until'", body.position));
        }
        let condition = self.parse_statement_chain()?;
        self.finish_line()?;

        Ok(Node::DoUntil { condition: Box::new(condition),
                           body: body.statements,
                           position })
    }

    /// Parses `for name = start to end [step s]` ... `next name`.
    ///
    /// Without a `step` clause the step is the literal `1`. The name after
    /// `next` must match the loop variable.
    pub(super) fn parse_for(&mut self) -> ParseResult<Node> {
        let position = self.advance_position();
        let (name, _) = self.parse_name("a loop variable")?;
        self.expect(&Token::Assign, "Expected '=' after the loop variable")?;
        self.require_more()?;
        let start = self.parse_statement_chain()?;
        self.expect(&Token::To, "Expected 'to' in 'for' header")?;
        self.require_more()?;
        let end = self.parse_statement_chain()?;
        let step = if self.check(&Token::Step) {
            self.advance();
            self.require_more()?;
            self.parse_statement_chain()?
        } else {
            Node::Literal { value: LiteralValue::Integer(1),
                            position }
        };
        self.finish_line()?;

        let terminator = format!("next {name}");
        let body = self.parse_body(&[Token::Next], ("for", position), &terminator)?;
        let (next_name, next_position) = self.parse_name("the loop variable after 'next'")?;
        if next_name != name {
            return Err(ErlError::syntax(format!("Expected '{terminator}', found 'next {next_name}'"),
                                        next_position));
        }
        self.finish_line()?;

        Ok(Node::For { context: ForLoop { variable: Identifier::plain(name),
                                          start:    Box::new(start),
                                          end:      Box::new(end),
                                          step:     Box::new(step),
                                          body:     body.statements, },
                       position })
    }

    /// Parses a `procedure` or `function` definition.
    ///
    /// Definitions cannot nest. While the body is parsed, `return` becomes
    /// legal, and the body must close with the terminator of its own kind.
    pub(super) fn parse_subroutine(&mut self, kind: SubroutineKind) -> ParseResult<Node> {
        let position = self.advance_position();
        if self.subroutine.is_some() {
            return Err(ErlError::syntax("Subroutines cannot be defined inside another subroutine",
                                        position));
        }

        let (name, _) = self.parse_name("a subroutine name")?;
        let open = self.expect(&Token::LParen, "Expected '(' after the subroutine name")?;
        let params = self.parse_parameters(open)?;
        self.finish_line()?;

        let keyword = kind.to_string();
        self.subroutine = Some(kind);
        let body = self.parse_body(&[Token::EndProcedure, Token::EndFunction],
                                   (&keyword, position),
                                   kind.terminator());
        self.subroutine = None;
        let body = body?;

        let expected = match kind {
            SubroutineKind::Procedure => Token::EndProcedure,
            SubroutineKind::Function => Token::EndFunction,
        };
        if body.terminator != expected {
            return Err(ErlError::syntax(format!("Expected '{expected}', found '{}'", body.terminator),
                                        body.position));
        }
        self.finish_line()?;

        let definition = SubroutineDef { name,
                                         kind,
                                         params,
                                         body: body.statements };
        Ok(Node::SubroutineDefinition { definition: Rc::new(definition),
                                        position })
    }
}
