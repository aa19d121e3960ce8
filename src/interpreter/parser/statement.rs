use crate::{
    ast::Statement,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Parser, parse_expression},
            utils::{expect_token, parse_identifier},
        },
    },
};

/// Parses a single assignment statement.
///
/// Grammar: `assignment := IDENTIFIER "=" expression ";"`
///
/// Every statement in the language is an assignment, so any other leading
/// token is reported as a missing identifier.
///
/// # Parameters
/// - `parser`: Parser positioned at the start of the statement.
///
/// # Returns
/// A [`Statement::Assignment`] node.
///
/// # Errors
/// Returns a `SyntaxError` if any required token is missing or the
/// right-hand side is malformed.
pub fn parse_statement(parser: &mut Parser<'_>) -> ParseResult<Statement> {
    let (name, offset) = parse_identifier(parser)?;
    expect_token(parser, &Token::Assign)?;
    let value = parse_expression(parser)?;
    expect_token(parser, &Token::Semicolon)?;

    Ok(Statement::Assignment { name,
                               value,
                               offset })
}
