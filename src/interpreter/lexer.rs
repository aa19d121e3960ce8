use logos::Logos;
use tracing::trace;

use crate::{error::SyntaxError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Whitespace of any kind separates tokens and is never produced itself.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\n\r\x0B\x0C]+")]
pub enum Token {
    /// Identifier tokens; variable names such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Integer literal tokens, kept as their decimal text, such as `42`.
    ///
    /// A literal never carries a sign and never starts with `0` unless it is
    /// exactly `0`.
    #[regex(r"[0-9]+", lex_number)]
    Number(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `=`
    #[token("=")]
    Assign,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// End of input. Returned forever once the source is exhausted.
    End,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Number(text) => write!(f, "number {text}"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Assign => write!(f, "'='"),
            Self::Semicolon => write!(f, "';'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::End => write!(f, "end of input"),
        }
    }
}

/// Lexical failures reported by the generated `logos` lexer.
///
/// `logos` produces the default variant for any input no token pattern
/// matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexError {
    /// No token starts with the current character.
    #[default]
    InvalidCharacter,
    /// A multi-digit literal started with `0`.
    LeadingZero,
}

/// Validates a run of digits matched by the `Number` pattern.
///
/// `0` on its own is accepted. Any longer run starting with `0` is rejected,
/// so `01` and `00` fail rather than lexing as two literals.
fn lex_number(lex: &logos::Lexer<Token>) -> Result<String, LexError> {
    let slice = lex.slice();
    if slice.len() > 1 && slice.starts_with('0') {
        return Err(LexError::LeadingZero);
    }
    Ok(slice.to_string())
}

/// A pull-based lexer over one program's source text.
///
/// Tokens are produced on demand by [`Lexer::next_token`]. The cursor only
/// ever moves forward.
pub struct Lexer<'src> {
    inner:     logos::Lexer<'src, Token>,
    exhausted: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:     Token::lexer(source),
               exhausted: false, }
    }

    /// Produces the next token together with its byte offset in the source.
    ///
    /// Once the input is exhausted, every further call returns
    /// [`Token::End`] at the offset of the end of the source.
    ///
    /// # Errors
    /// - `SyntaxError::InvalidCharacter` for a character no token starts with.
    /// - `SyntaxError::LeadingZero` for a literal such as `007`.
    ///
    /// # Example
    /// ```
    /// use assignlang::interpreter::lexer::{Lexer, Token};
    ///
    /// let mut lexer = Lexer::new("x = 0;");
    /// assert_eq!(lexer.next_token().unwrap(), (Token::Identifier("x".into()), 0));
    /// assert_eq!(lexer.next_token().unwrap(), (Token::Assign, 2));
    /// assert_eq!(lexer.next_token().unwrap(), (Token::Number("0".into()), 4));
    /// assert_eq!(lexer.next_token().unwrap(), (Token::Semicolon, 5));
    /// assert_eq!(lexer.next_token().unwrap(), (Token::End, 6));
    /// assert_eq!(lexer.next_token().unwrap(), (Token::End, 6));
    /// ```
    pub fn next_token(&mut self) -> ParseResult<(Token, usize)> {
        if self.exhausted {
            return Ok((Token::End, self.inner.source().len()));
        }

        match self.inner.next() {
            Some(Ok(token)) => {
                let offset = self.inner.span().start;
                trace!(%token, offset, "lexed token");
                Ok((token, offset))
            },
            Some(Err(error)) => {
                let offset = self.inner.span().start;
                Err(match error {
                        LexError::InvalidCharacter => {
                            SyntaxError::InvalidCharacter { character: self.inner
                                                                           .slice()
                                                                           .chars()
                                                                           .next()
                                                                           .unwrap_or_default(),
                                                            offset }
                        },
                        LexError::LeadingZero => {
                            SyntaxError::LeadingZero { literal: self.inner.slice().to_string(),
                                                       offset }
                        },
                    })
            },
            None => {
                self.exhausted = true;
                Ok((Token::End, self.inner.source().len()))
            },
        }
    }
}

/// Lexes a whole source text into its token stream.
///
/// The trailing [`Token::End`] is not included. Lexing is a pure function
/// of the input, so lexing the same text twice yields the same stream.
///
/// # Errors
/// Returns the first lexical error in the source.
///
/// # Example
/// ```
/// use assignlang::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("a=-b").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();
/// assert_eq!(kinds,
///            vec![Token::Identifier("a".into()),
///                 Token::Assign,
///                 Token::Minus,
///                 Token::Identifier("b".into())]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        match lexer.next_token()? {
            (Token::End, _) => return Ok(tokens),
            token => tokens.push(token),
        }
    }
}
