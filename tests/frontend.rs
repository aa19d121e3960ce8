use assignlang::{
    ast::{BinaryOperator, Expr, Operation, Statement, UnaryOperator},
    error::SyntaxError,
    interpreter::{
        lexer::{Lexer, Token, tokenize},
        parser::core::{MAX_NESTING_DEPTH, parse_program},
    },
};
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<Token> {
    tokenize(source).unwrap()
                    .into_iter()
                    .map(|(token, _)| token)
                    .collect()
}

fn ident(name: &str) -> Token {
    Token::Identifier(name.to_string())
}

fn number(text: &str) -> Token {
    Token::Number(text.to_string())
}

#[test]
fn lexes_every_token_kind() {
    assert_eq!(kinds("a_1 = (0 + 12) * -x;"),
               vec![ident("a_1"),
                    Token::Assign,
                    Token::LParen,
                    number("0"),
                    Token::Plus,
                    number("12"),
                    Token::RParen,
                    Token::Star,
                    Token::Minus,
                    ident("x"),
                    Token::Semicolon]);
}

#[test]
fn identifiers_are_greedy() {
    assert_eq!(kinds("abc123_ d"), vec![ident("abc123_"), ident("d")]);
    assert_eq!(kinds("_"), vec![ident("_")]);
}

#[test]
fn zero_followed_by_non_digit_is_a_literal() {
    assert_eq!(kinds("0x"), vec![number("0"), ident("x")]);
    assert_eq!(kinds("0;"), vec![number("0"), Token::Semicolon]);
}

#[test]
fn digits_followed_by_letters_split() {
    assert_eq!(kinds("12ab"), vec![number("12"), ident("ab")]);
}

#[test]
fn leading_zero_is_a_syntax_error() {
    assert!(matches!(tokenize("x = 012;"),
                     Err(SyntaxError::LeadingZero { ref literal, offset: 4 }) if literal == "012"));
}

#[test]
fn invalid_character_is_a_syntax_error() {
    assert!(matches!(tokenize("x = 1 % 2;"),
                     Err(SyntaxError::InvalidCharacter { character: '%',
                                                        offset:    6, })));
    assert!(matches!(tokenize("x == 1"), Ok(_)));
}

#[test]
fn end_is_returned_forever() {
    let mut lexer = Lexer::new("  \t\n  ");
    for _ in 0..3 {
        assert_eq!(lexer.next_token().unwrap(), (Token::End, 6));
    }
}

#[test]
fn lexing_is_repeatable() {
    let source = "x = 1; y = (x + 2) * -x; z = y - 0;";
    assert_eq!(tokenize(source).unwrap(), tokenize(source).unwrap());
}

fn rhs(source: &str) -> Expr {
    let mut program = parse_program(source).unwrap();
    assert_eq!(program.len(), 1);
    match program.remove(0) {
        Statement::Assignment { value, .. } => value,
    }
}

fn lit(value: i64, offset: usize) -> Expr {
    Expr::Literal { value, offset }
}

#[test]
fn parses_precedence_into_tree() {
    // x = 1 + 2 * 3;
    // 0123456789012
    let product = Expr::BinaryOp { first: Box::new(lit(2, 8)),
                                   rest:  vec![Operation { op:      BinaryOperator::Mul,
                                                           operand: lit(3, 12),
                                                           offset:  10, }], };
    let expected = Expr::BinaryOp { first: Box::new(lit(1, 4)),
                                    rest:  vec![Operation { op:      BinaryOperator::Add,
                                                            operand: product,
                                                            offset:  6, }], };
    assert_eq!(rhs("x = 1 + 2 * 3;"), expected);
}

#[test]
fn parses_same_level_operators_into_one_chain() {
    let Expr::BinaryOp { first, rest } = rhs("x = 1 - 2 + 3;") else {
        panic!("expected a binary operation");
    };
    assert_eq!(*first, lit(1, 4));
    let ops: Vec<_> = rest.iter().map(|operation| operation.op).collect();
    assert_eq!(ops, vec![BinaryOperator::Sub, BinaryOperator::Add]);
}

#[test]
fn single_factor_is_not_wrapped() {
    assert_eq!(rhs("x = 5;"), lit(5, 4));
}

#[test]
fn parses_stacked_unary_operators() {
    let expected = Expr::UnaryOp { op:     UnaryOperator::Negate,
                                   expr:   Box::new(Expr::UnaryOp { op:     UnaryOperator::Plus,
                                                                    expr:   Box::new(Expr::Variable { name:   "y".to_string(),
                                                                                                      offset: 6, }),
                                                                    offset: 5, }),
                                   offset: 4, };
    assert_eq!(rhs("x = -+y;"), expected);
}

#[test]
fn parentheses_do_not_create_nodes() {
    assert_eq!(rhs("x = ((7));"), lit(7, 6));
}

#[test]
fn parse_program_does_not_evaluate() {
    let program = parse_program("a = b; b = a * 9223372036854775807;").unwrap();
    assert_eq!(program.len(), 2);
}

#[test]
fn reports_parse_errors() {
    assert!(matches!(parse_program("x = (1 + 2;"),
                     Err(SyntaxError::ExpectedClosingParen { offset: 10 })));
    assert!(matches!(parse_program("x = 1 + ;"),
                     Err(SyntaxError::InvalidFactor { offset: 8, .. })));
    assert!(matches!(parse_program("x = 1"),
                     Err(SyntaxError::UnexpectedToken { offset: 5, .. })));
    assert!(matches!(parse_program("x = 99999999999999999999;"),
                     Err(SyntaxError::LiteralTooLarge { .. })));
    assert!(matches!(parse_program("(x) = 1;"),
                     Err(SyntaxError::UnexpectedToken { offset: 0, .. })));
}

#[test]
fn nesting_limit_is_enforced() {
    let limit = MAX_NESTING_DEPTH;

    let within = format!("x = {}1;", "-".repeat(limit));
    assert!(parse_program(&within).is_ok());

    // The first operator beyond the limit sits at offset 4 + limit.
    let beyond = format!("x = {}1;", "-".repeat(limit + 1));
    assert!(matches!(parse_program(&beyond),
                     Err(SyntaxError::NestingTooDeep { offset }) if offset == 4 + limit));

    let parens = format!("x = {}1{};", "(".repeat(limit + 1), ")".repeat(limit + 1));
    assert!(matches!(parse_program(&parens), Err(SyntaxError::NestingTooDeep { .. })));
}

#[test]
fn empty_program_has_no_statements() {
    assert!(parse_program("").unwrap().is_empty());
    assert!(parse_program(" \n\t").unwrap().is_empty());
}
