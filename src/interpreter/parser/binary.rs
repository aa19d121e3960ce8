use crate::{
    ast::{BinaryOperator, Expr, Operation},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Parser},
            unary::parse_unary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `parser`: Parser positioned at the first term.
///
/// # Returns
/// An `Expr::BinaryOp` chain, or the single term when no operator follows.
pub fn parse_additive(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    parse_chain(parser,
                |op| matches!(op, BinaryOperator::Add | BinaryOperator::Sub),
                parse_multiplicative)
}

/// Parses multiplication expressions.
///
/// The rule is: `multiplicative := unary ("*" unary)*`
///
/// # Parameters
/// - `parser`: Parser positioned at the first factor.
///
/// # Returns
/// An `Expr::BinaryOp` chain of `Mul` operations, or the single factor.
pub fn parse_multiplicative(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    parse_chain(parser,
                |op| matches!(op, BinaryOperator::Mul),
                parse_unary)
}

/// Parses `operand (op operand)*` for the operators accepted by `accepts`.
///
/// The operations are collected in a loop into one flat
/// [`Expr::BinaryOp`] node.
fn parse_chain(parser: &mut Parser<'_>,
               accepts: impl Fn(BinaryOperator) -> bool,
               parse_operand: impl Fn(&mut Parser<'_>) -> ParseResult<Expr>)
               -> ParseResult<Expr> {
    let first = parse_operand(parser)?;
    let mut rest = Vec::new();
    loop {
        let (token, offset) = parser.peek()?;
        if let Some(op) = token_to_binary_operator(token)
           && accepts(op)
        {
            parser.advance()?;
            let operand = parse_operand(parser)?;
            rest.push(Operation { op,
                                  operand,
                                  offset });
            continue;
        }
        break;
    }

    if rest.is_empty() {
        return Ok(first);
    }
    Ok(Expr::BinaryOp { first: Box::new(first),
                        rest })
}

/// Maps a token to its corresponding binary operator.
///
/// # Example
/// ```
/// use assignlang::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Star), Some(BinaryOperator::Mul));
/// assert_eq!(token_to_binary_operator(&Token::Assign), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        _ => None,
    }
}
