use crate::{
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

/// Consumes the current token if it equals `expected`.
///
/// Only meaningful for tokens without a payload, such as `=` or `;`.
///
/// # Parameters
/// - `parser`: Parser positioned at the required token.
/// - `expected`: The token the grammar requires.
///
/// # Errors
/// Returns `SyntaxError::UnexpectedToken` naming both tokens if the current
/// token differs.
pub(in crate::interpreter::parser) fn expect_token(parser: &mut Parser<'_>,
                                                   expected: &Token)
                                                   -> ParseResult<()> {
    let (token, offset) = parser.peek()?;
    if token != expected {
        return Err(SyntaxError::UnexpectedToken { expected: expected.to_string(),
                                                  found: token.to_string(),
                                                  offset });
    }
    parser.advance()?;
    Ok(())
}

/// Parses a plain identifier and returns its name and offset.
///
/// # Errors
/// Returns `SyntaxError::UnexpectedToken` if the current token is not an
/// identifier.
pub(in crate::interpreter::parser) fn parse_identifier(parser: &mut Parser<'_>)
                                                       -> ParseResult<(String, usize)> {
    match parser.advance()? {
        (Token::Identifier(name), offset) => Ok((name, offset)),
        (tok, offset) => Err(SyntaxError::UnexpectedToken { expected: "identifier".to_string(),
                                                            found: tok.to_string(),
                                                            offset }),
    }
}
