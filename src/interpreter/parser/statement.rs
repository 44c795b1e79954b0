use crate::{
    ast::{Identifier, Node, Position, SubroutineKind},
    error::ErlError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser {
    /// Parses the statement that starts at the current line.
    ///
    /// Dispatches on the first token:
    /// - `if`, `while`, `do`, `for`, `procedure`, `function` open a block.
    /// - `return` is only accepted inside a subroutine body.
    /// - `const` / `global`, or an identifier followed by `=`, start an
    ///   assignment.
    /// - A block keyword with no open construct, or a binary operator, is a
    ///   syntax error.
    /// - Anything else is an expression statement filling the whole line.
    pub(super) fn parse_statement(&mut self) -> ParseResult<Node> {
        let Some((token, position)) = self.peek_lexeme().cloned() else {
            return Err(self.incomplete());
        };

        match token {
            Token::If => self.parse_if(),
            Token::While => self.parse_while(),
            Token::Do => self.parse_do_until(),
            Token::For => self.parse_for(),
            Token::Procedure => self.parse_subroutine(SubroutineKind::Procedure),
            Token::Function => self.parse_subroutine(SubroutineKind::Function),
            Token::Return => self.parse_return(),
            Token::Const | Token::Global => self.parse_assignment(),
            Token::Identifier(_) if self.peek_at(1) == Some(&Token::Assign) => self.parse_assignment(),
            ref keyword if keyword.is_block_keyword() => Err(stray_keyword(keyword, position)),
            ref operator if operator.is_binary_operator() => {
                Err(ErlError::syntax(format!("A statement cannot start with '{operator}'"), position))
            },
            _ => {
                let expression = self.parse_statement_chain()?;
                self.finish_line()?;
                Ok(expression)
            },
        }
    }

    /// Parses `[const] [global] name = value`.
    ///
    /// The qualifiers may appear in either order, each at most once.
    fn parse_assignment(&mut self) -> ParseResult<Node> {
        let mut constant = false;
        let mut global = false;
        loop {
            let (qualifier, flag) = match self.peek() {
                Some(Token::Const) => ("const", &mut constant),
                Some(Token::Global) => ("global", &mut global),
                _ => break,
            };
            let position = self.advance_position();
            if *flag {
                return Err(ErlError::syntax(format!("Repeated qualifier '{qualifier}'"), position));
            }
            *flag = true;
        }

        let (name, position) = self.parse_name("a variable name")?;
        let assign = self.expect(&Token::Assign, "Expected '=' in assignment")?;
        if self.at_line_end() {
            return Err(ErlError::syntax("Expected a value after '='", assign));
        }
        let value = self.parse_statement_chain()?;
        self.finish_line()?;

        Ok(Node::Assignment { target: Identifier { name,
                                                   constant,
                                                   global },
                              value: Box::new(value),
                              position })
    }

    /// Parses `return` or `return value`.
    ///
    /// A bare `return` is allowed in both subroutine kinds; only a function
    /// may return a value.
    fn parse_return(&mut self) -> ParseResult<Node> {
        let position = self.advance_position();
        let Some(kind) = self.subroutine else {
            return Err(ErlError::syntax("'return' outside of a subroutine", position));
        };

        let value = if self.at_line_end() {
            None
        } else if kind == SubroutineKind::Procedure {
            return Err(ErlError::syntax("A procedure cannot return a value", position));
        } else {
            Some(Box::new(self.parse_statement_chain()?))
        };
        self.finish_line()?;

        Ok(Node::Return { value, position })
    }
}

fn stray_keyword(keyword: &Token, position: Position) -> ErlError {
    let opener = match keyword {
        Token::ElseIf | Token::Else | Token::EndIf => "if",
        Token::EndWhile => "while",
        Token::Until => "do",
        Token::Next => "for",
        Token::EndProcedure => "procedure",
        Token::EndFunction => "function",
        _ => {
            return ErlError::syntax(format!("A statement cannot start with '{keyword}'"), position);
        },
    };
    ErlError::syntax(format!("'{keyword}' without a matching '{opener}'"), position)
}
