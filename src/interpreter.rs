/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST of one statement at a time, performs the
/// checked integer arithmetic, and commits assignments to the variable store.
///
/// # Responsibilities
/// - Evaluates expressions against the current variable state.
/// - Rejects reads of variables that were never assigned.
/// - Reports integer overflow instead of wrapping.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces tokens on demand:
/// identifiers, integer literals, operators and punctuation.
///
/// # Responsibilities
/// - Skips whitespace between tokens.
/// - Rejects invalid characters and literals with leading zeros.
/// - Reports the byte offset of every token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer with one token of lookahead and
/// constructs one assignment statement at a time.
///
/// # Responsibilities
/// - Converts tokens into expression and statement nodes.
/// - Encodes operator precedence: `*` binds tighter than `+` and `-`.
/// - Validates grammar, reporting errors with their source offset.
pub mod parser;
/// Variable bindings and their initialization state.
pub mod store;
