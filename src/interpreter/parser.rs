/// Parser state and the expression entry point.
///
/// Holds the single token of lookahead and the top-level entry points for
/// parsing statements and whole programs.
pub mod core;

/// Prefix operators and primary expressions.
///
/// Handles unary `+`/`-`, literals, variable references and parenthesized
/// groups.
pub mod unary;

/// Binary operator parsing.
///
/// Builds left-associative trees for the additive and multiplicative levels.
pub mod binary;

/// Statement parsing.
pub mod statement;

/// Shared helpers for matching required tokens.
pub mod utils;
