use crate::{
    ast::{Expr, Statement},
    error::SyntaxError,
    interpreter::{
        lexer::{Lexer, Token},
        parser::{binary::parse_additive, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// How many parentheses and prefix operators may enclose a single factor.
///
/// Parsing, evaluating and dropping an expression recurse once per level, so
/// the limit keeps all three within a small, fixed amount of stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// A recursive-descent parser over a lazily lexed token stream.
///
/// The parser holds at most one token of lookahead. A token is only pulled
/// from the lexer when the grammar needs to look at it, so a statement can be
/// evaluated before any text after its `;` has been lexed.
pub struct Parser<'src> {
    lexer:   Lexer<'src>,
    current: Option<(Token, usize)>,
    depth:   usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source`. No token is lexed yet.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:   Lexer::new(source),
               current: None,
               depth:   0, }
    }

    /// Returns the current lookahead token and its offset without consuming
    /// it.
    ///
    /// # Errors
    /// Propagates lexical errors raised while fetching the token.
    pub fn peek(&mut self) -> ParseResult<(&Token, usize)> {
        let token = match self.current.take() {
            Some(token) => token,
            None => self.lexer.next_token()?,
        };
        let (token, offset) = &*self.current.insert(token);
        Ok((token, *offset))
    }

    /// Consumes and returns the current lookahead token.
    ///
    /// # Errors
    /// Propagates lexical errors raised while fetching the token.
    pub fn advance(&mut self) -> ParseResult<(Token, usize)> {
        match self.current.take() {
            Some(token) => Ok(token),
            None => self.lexer.next_token(),
        }
    }

    /// Enters one more level of nesting for the construct starting at
    /// `offset`.
    ///
    /// # Errors
    /// Returns `SyntaxError::NestingTooDeep` past [`MAX_NESTING_DEPTH`].
    pub(in crate::interpreter::parser) fn enter(&mut self, offset: usize) -> ParseResult<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(SyntaxError::NestingTooDeep { offset });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves `levels` levels of nesting entered with [`Parser::enter`].
    pub(in crate::interpreter::parser) const fn leave(&mut self, levels: usize) {
        self.depth -= levels;
    }

    /// Returns `true` once only [`Token::End`] remains.
    ///
    /// # Errors
    /// Propagates lexical errors raised while fetching the token.
    pub fn at_end(&mut self) -> ParseResult<bool> {
        Ok(matches!(self.peek()?, (Token::End, _)))
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition and subtraction, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `parser`: Parser positioned at the first token of the expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    parse_additive(parser)
}

/// Parses every statement of a program without evaluating anything.
///
/// Grammar: `program := assignment* END`
///
/// # Errors
/// Returns the first lexical or grammatical error in the source.
///
/// # Example
/// ```
/// use assignlang::{ast::Statement, interpreter::parser::core::parse_program};
///
/// let program = parse_program("a = 1; b = a * 2;").unwrap();
/// assert_eq!(program.len(), 2);
/// assert!(matches!(&program[1], Statement::Assignment { name, .. } if name == "b"));
///
/// assert!(parse_program("a = 1").is_err());
/// ```
pub fn parse_program(source: &str) -> ParseResult<Vec<Statement>> {
    let mut parser = Parser::new(source);
    let mut statements = Vec::new();
    while !parser.at_end()? {
        statements.push(parse_statement(&mut parser)?);
    }
    Ok(statements)
}
