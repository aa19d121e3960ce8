use crate::{
    ast::{Expr, UnaryOperator},
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, parse_expression},
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `+` (identity) and `-` (negation). Unary
/// operators are right-associative and may be stacked, so `- -x` parses as
/// `-( -x )`. The operators are collected in a loop and each one counts as a
/// level of nesting.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | primary
/// ```
/// # Parameters
/// - `parser`: Parser positioned at the start of a factor.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
///
/// # Errors
/// Returns `SyntaxError::NestingTooDeep` when too many operators and
/// parentheses enclose the primary expression.
pub(crate) fn parse_unary(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    let mut prefixes = Vec::new();
    loop {
        let (token, offset) = parser.peek()?;
        let op = match token {
            Token::Plus => UnaryOperator::Plus,
            Token::Minus => UnaryOperator::Negate,
            _ => break,
        };
        parser.enter(offset)?;
        parser.advance()?;
        prefixes.push((op, offset));
    }

    let primary = parse_primary(parser)?;
    parser.leave(prefixes.len());

    Ok(prefixes.into_iter()
               .rev()
               .fold(primary, |expr, (op, offset)| Expr::UnaryOp { op,
                                                                   expr: Box::new(expr),
                                                                   offset }))
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | IDENTIFIER
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `parser`: Parser positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `SyntaxError` on failure.
pub(crate) fn parse_primary(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    match parser.peek()? {
        (Token::Number(_), _) => parse_literal(parser),
        (Token::Identifier(_), _) => parse_variable(parser),
        (Token::LParen, _) => parse_grouping(parser),
        (tok, offset) => Err(SyntaxError::InvalidFactor { found: tok.to_string(),
                                                          offset }),
    }
}

/// Parses an integer literal into an `i64`.
///
/// # Errors
/// Returns `SyntaxError::LiteralTooLarge` when the digits do not fit into an
/// `i64`.
fn parse_literal(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    let (Token::Number(text), offset) = parser.advance()? else {
        unreachable!("parse_literal is only called on a number token")
    };

    let value = text.parse::<i64>()
                    .map_err(|_| SyntaxError::LiteralTooLarge { literal: text.clone(),
                                                                offset })?;
    Ok(Expr::Literal { value, offset })
}

fn parse_variable(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    let (Token::Identifier(name), offset) = parser.advance()? else {
        unreachable!("parse_variable is only called on an identifier token")
    };

    Ok(Expr::Variable { name, offset })
}

/// Parses a parenthesized expression `( expression )`.
///
/// # Errors
/// - `SyntaxError::ExpectedClosingParen` if the group is not closed.
/// - `SyntaxError::NestingTooDeep` if the group is nested too deeply.
fn parse_grouping(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    let (_, offset) = parser.advance()?;
    parser.enter(offset)?;
    let expr = parse_expression(parser)?;
    parser.leave(1);
    match parser.peek()? {
        (Token::RParen, _) => {
            parser.advance()?;
            Ok(expr)
        },
        (_, offset) => Err(SyntaxError::ExpectedClosingParen { offset }),
    }
}
