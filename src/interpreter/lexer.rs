use std::{fmt, ops::Range};

use logos::Logos;

use crate::{ast::Position, error::ErlError};

/// A token paired with the position of its first character.
pub type Lexeme = (Token, Position);

/// Why a slice of source text could not be turned into a token.
///
/// Logos yields this as its error type; [`tokenize_line`] turns it into an
/// [`ErlError::Lexical`] carrying the offending position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// No token starts with this character.
    #[default]
    UnexpectedCharacter,
    /// A number containing a second `.`.
    MalformedNumber,
    /// An integer literal that does not fit in 64 bits.
    IntegerTooLarge,
    /// A string literal with no closing quote on its line.
    UnterminatedString,
}

/// Represents a lexical token in an ERL source line.
///
/// Keywords are case-sensitive: logical and arithmetic word operators are
/// upper case (`AND`, `OR`, `NOT`, `MOD`, `DIV`), Boolean literals are
/// capitalised (`True`, `False`) and block keywords are lower case.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexErrorKind)]
pub enum Token {
    /// Floating-point literal with exactly one `.`, such as `3.0` or `2.`.
    #[regex(r"[0-9]+\.[0-9]*", parse_float)]
    #[regex(r"[0-9]+\.[0-9]*\.", malformed_number)]
    Float(f64),
    /// Integer literal such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// String literal in single or double quotes.
    #[regex(r#""[^"]*""#, parse_string)]
    #[regex(r"'[^']*'", parse_string)]
    #[regex(r#""[^"]*"#, unterminated_string)]
    #[regex(r"'[^']*", unterminated_string)]
    Str(String),
    /// `True` or `False`.
    #[token("True", parse_bool)]
    #[token("False", parse_bool)]
    Boolean(bool),
    /// `if`
    #[token("if")]
    If,
    /// `then`
    #[token("then")]
    Then,
    /// `elseif`
    #[token("elseif")]
    ElseIf,
    /// `else`
    #[token("else")]
    Else,
    /// `endif`
    #[token("endif")]
    EndIf,
    /// `while`
    #[token("while")]
    While,
    /// `endwhile`
    #[token("endwhile")]
    EndWhile,
    /// `do`
    #[token("do")]
    Do,
    /// `until`
    #[token("until")]
    Until,
    /// `for`
    #[token("for")]
    For,
    /// `to`
    #[token("to")]
    To,
    /// `step`
    #[token("step")]
    Step,
    /// `next`
    #[token("next")]
    Next,
    /// `procedure`
    #[token("procedure")]
    Procedure,
    /// `endprocedure`
    #[token("endprocedure")]
    EndProcedure,
    /// `function`
    #[token("function")]
    Function,
    /// `endfunction`
    #[token("endfunction")]
    EndFunction,
    /// `return`
    #[token("return")]
    Return,
    /// `const`
    #[token("const")]
    Const,
    /// `global`
    #[token("global")]
    Global,
    /// `AND`
    #[token("AND")]
    And,
    /// `OR`
    #[token("OR")]
    Or,
    /// `NOT`
    #[token("NOT")]
    Not,
    /// `MOD`
    #[token("MOD")]
    Mod,
    /// `DIV`
    #[token("DIV")]
    Div,
    /// Identifier tokens; variable or subroutine names such as `total`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Assign,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `// Comments` run to the end of the line.
    #[regex(r"//[^\n]*", logos::skip)]
    Comment,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl Token {
    /// `true` for keywords that close or continue a block and therefore can
    /// never start a statement of their own.
    #[must_use]
    pub const fn is_block_keyword(&self) -> bool {
        matches!(self,
                 Self::ElseIf
                 | Self::Else
                 | Self::EndIf
                 | Self::EndWhile
                 | Self::Until
                 | Self::Next
                 | Self::EndProcedure
                 | Self::EndFunction
                 | Self::Then
                 | Self::To
                 | Self::Step)
    }

    /// `true` for tokens that only make sense between two operands.
    #[must_use]
    pub const fn is_binary_operator(&self) -> bool {
        matches!(self,
                 Self::Star
                 | Self::Slash
                 | Self::Caret
                 | Self::Mod
                 | Self::Div
                 | Self::And
                 | Self::Or
                 | Self::Assign
                 | Self::EqualEqual
                 | Self::BangEqual
                 | Self::Less
                 | Self::LessEqual
                 | Self::Greater
                 | Self::GreaterEqual)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Float(x) => return write!(f, "{x:?}"),
            Self::Integer(n) => return write!(f, "{n}"),
            Self::Str(s) => return write!(f, "\"{s}\""),
            Self::Boolean(true) => "True",
            Self::Boolean(false) => "False",
            Self::Identifier(name) => return write!(f, "{name}"),
            Self::If => "if",
            Self::Then => "then",
            Self::ElseIf => "elseif",
            Self::Else => "else",
            Self::EndIf => "endif",
            Self::While => "while",
            Self::EndWhile => "endwhile",
            Self::Do => "do",
            Self::Until => "until",
            Self::For => "for",
            Self::To => "to",
            Self::Step => "step",
            Self::Next => "next",
            Self::Procedure => "procedure",
            Self::EndProcedure => "endprocedure",
            Self::Function => "function",
            Self::EndFunction => "endfunction",
            Self::Return => "return",
            Self::Const => "const",
            Self::Global => "global",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::Mod => "MOD",
            Self::Div => "DIV",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Caret => "^",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Comma => ",",
            Self::Assign => "=",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Comment => "//",
            Self::Ignored => " ",
        };
        write!(f, "{text}")
    }
}

/// Converts a whole program into per-line token lists.
///
/// Each source line is scanned independently; the outer vector has one entry
/// per input line, so blank and comment-only lines produce empty lists. The
/// first lexical error anywhere in the program aborts the scan.
///
/// # Errors
/// Returns [`ErlError::Lexical`] for unrecognised characters (including a
/// bare `!`), numbers with a second `.`, oversized integers and unterminated
/// strings.
///
/// # Example
/// ```
/// use erl::interpreter::lexer::{Token, tokenize};
///
/// let lines = tokenize(&["x = 1 // one", "", "print(x)"]).unwrap();
///
/// assert_eq!(lines.len(), 3);
/// assert_eq!(lines[0].len(), 3);
/// assert!(lines[1].is_empty());
/// assert_eq!(lines[2][0].0, Token::Identifier("print".to_string()));
///
/// assert!(tokenize(&["x = 1.2.3"]).is_err());
/// assert!(tokenize(&["x = 'open"]).is_err());
/// assert!(tokenize(&["!x"]).is_err());
/// ```
pub fn tokenize<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Vec<Lexeme>>, ErlError> {
    lines.iter()
         .enumerate()
         .map(|(index, line)| tokenize_line(line.as_ref(), index))
         .collect()
}

/// Scans a single source line.
///
/// `line` is the zero-based index recorded in every produced [`Position`].
///
/// # Errors
/// See [`tokenize`].
pub fn tokenize_line(source: &str, line: usize) -> Result<Vec<Lexeme>, ErlError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => tokens.push((token, Position::new(line, column_of(source, span.start)))),
            Err(kind) => return Err(lex_error(&kind, source, line, span)),
        }
    }

    Ok(tokens)
}

/// Converts a byte offset into a character column.
fn column_of(source: &str, offset: usize) -> usize {
    source.get(..offset).map_or(0, |prefix| prefix.chars().count())
}

fn lex_error(kind: &LexErrorKind, source: &str, line: usize, span: Range<usize>) -> ErlError {
    let slice = source.get(span.clone()).unwrap_or_default();
    let start = Position::new(line, column_of(source, span.start));

    match kind {
        LexErrorKind::UnexpectedCharacter => match slice.chars().next() {
            Some('!') => ErlError::lexical("Expected '=' after '!'", start),
            Some(c) => ErlError::lexical(format!("Unexpected character '{c}'"), start),
            None => ErlError::lexical("Unexpected end of line", start),
        },
        LexErrorKind::MalformedNumber => {
            // The second '.' is the last character of the slice.
            let column = column_of(source, span.end).saturating_sub(1);
            ErlError::lexical("Unexpected character '.' in number",
                              Position::new(line, column))
        },
        LexErrorKind::IntegerTooLarge => {
            ErlError::lexical(format!("Integer literal {slice} is too large"), start)
        },
        LexErrorKind::UnterminatedString => {
            ErlError::lexical("Unterminated string literal", start)
        },
    }
}

fn parse_float(lex: &logos::Lexer<Token>) -> Result<f64, LexErrorKind> {
    lex.slice().parse().map_err(|_| LexErrorKind::MalformedNumber)
}

fn malformed_number(_: &logos::Lexer<Token>) -> Result<f64, LexErrorKind> {
    Err(LexErrorKind::MalformedNumber)
}

fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexErrorKind> {
    lex.slice().parse().map_err(|_| LexErrorKind::IntegerTooLarge)
}

/// Strips the surrounding quotes.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice.get(1..slice.len() - 1).unwrap_or_default().to_string()
}

fn unterminated_string(_: &logos::Lexer<Token>) -> Result<String, LexErrorKind> {
    Err(LexErrorKind::UnterminatedString)
}

fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "True" => Some(true),
        "False" => Some(false),
        _ => None,
    }
}
