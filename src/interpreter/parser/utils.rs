use crate::{
    ast::Position,
    error::ErlError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser {
    /// Parses a comma-separated list whose `(` has already been consumed,
    /// through the closing `)`.
    ///
    /// # Parameters
    /// - `open`: Position of the `(`; used when the list is never closed.
    /// - `parse_item`: Parses one element.
    ///
    /// # Returns
    /// The elements in source order. `()` yields an empty list; a dangling
    /// comma or a missing `)` is a syntax error.
    pub(super) fn parse_comma_separated<T>(&mut self,
                                           open: Position,
                                           parse_item: impl Fn(&mut Self) -> ParseResult<T>)
                                           -> ParseResult<Vec<T>> {
        let mut items = Vec::new();
        if self.check(&Token::RParen) {
            self.advance();
            return Ok(items);
        }

        loop {
            if self.at_line_end() {
                return Err(unclosed(open));
            }
            items.push(parse_item(self)?);

            match self.advance() {
                Some((Token::RParen, _)) => return Ok(items),
                Some((Token::Comma, comma)) => {
                    if self.at_line_end() || self.check(&Token::RParen) {
                        return Err(ErlError::syntax("Expected an item after ','", comma));
                    }
                },
                Some((token, position)) => {
                    return Err(ErlError::syntax(format!("Expected ',' or ')', found '{token}'"),
                                                position));
                },
                None => return Err(unclosed(open)),
            }
        }
    }

    /// Consumes an identifier token and returns its name and position.
    ///
    /// `what` names the expected item in the error message, e.g. "a loop
    /// variable".
    pub(super) fn parse_name(&mut self, what: &str) -> ParseResult<(String, Position)> {
        match self.advance() {
            Some((Token::Identifier(name), position)) => Ok((name, position)),
            Some((token, position)) => {
                Err(ErlError::syntax(format!("Expected {what}, found '{token}'"), position))
            },
            None => Err(ErlError::syntax(format!("Expected {what}"), self.previous())),
        }
    }

    /// Parses a parameter list and rejects repeated names.
    pub(super) fn parse_parameters(&mut self, open: Position) -> ParseResult<Vec<String>> {
        let params = self.parse_comma_separated(open, |parser| parser.parse_name("a parameter name"))?;

        let mut names: Vec<String> = Vec::with_capacity(params.len());
        for (name, position) in params {
            if names.contains(&name) {
                return Err(ErlError::syntax(format!("Duplicate parameter '{name}'"), position));
            }
            names.push(name);
        }
        Ok(names)
    }
}

fn unclosed(open: Position) -> ErlError {
    ErlError::syntax("Expected ')' to close '('", open)
}
