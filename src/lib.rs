//! # assignlang
//!
//! assignlang is an interpreter for a tiny language of integer assignments
//! written in Rust. A program is a sequence of statements such as
//! `total = (a + b) * -2;`. After the last statement, the final value of
//! every assigned variable is reported.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::{info, warn};

use crate::{
    error::{Error, ErrorKind},
    interpreter::{
        evaluator::core::Context,
        parser::{core::Parser, statement::parse_statement},
    },
    io::{LineSink, SourceReader},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` types that represent an
/// assignment as a tree. The AST is built by the parser and traversed by the
/// evaluator.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines every error that can abort a program: lexical and
/// grammatical errors, reads of uninitialized variables, and integer
/// overflow. Each error carries the byte offset where it was detected.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Classifies errors into an [`ErrorKind`] for logging and callers.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the lexing, parsing and evaluation of programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and the
///   variable store.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Reading programs and writing output lines.
pub mod io;

/// The only line printed when a program fails, whatever the cause.
pub const ERROR_LINE: &str = "error";

/// How a program run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// All statements executed and the variables were printed.
    Success,
    /// The program was aborted; only [`ERROR_LINE`] was printed.
    Failed(ErrorKind),
}

/// Executes every statement of `source` in a fresh context.
///
/// Statements are parsed and executed one at a time. The first error of any
/// kind aborts the program; the context is then discarded, so no partial
/// state escapes.
///
/// # Errors
/// Returns the first syntax or runtime error.
///
/// # Examples
/// ```
/// use assignlang::{error::ErrorKind, execute};
///
/// let context = execute("x = 2 + 3 * 4; y = -(x - 20);").unwrap();
/// let values: Vec<_> = context.store.enumerate().collect();
/// assert_eq!(values, vec![("x", 14), ("y", 6)]);
///
/// // 'z' is never assigned.
/// let error = execute("y = z;").unwrap_err();
/// assert_eq!(error.kind(), ErrorKind::Uninitialized);
/// ```
pub fn execute(source: &str) -> Result<Context, Error> {
    let mut context = Context::new();
    let mut parser = Parser::new(source);
    let mut statements = 0_usize;

    while !parser.at_end()? {
        let statement = parse_statement(&mut parser)?;
        context.eval_statement(&statement)?;
        statements += 1;
    }

    info!(statements, variables = context.store.enumerate().count(), "program finished");
    Ok(context)
}

/// Reads a program, executes it, and prints the result.
///
/// On success every initialized variable is printed as `name = value`, one
/// per line, in the order of first assignment. On failure the single line
/// [`ERROR_LINE`] is printed and nothing else.
///
/// # Errors
/// Only I/O failures of `reader` or `sink` are returned as errors. Program
/// errors are reported through [`Outcome::Failed`].
///
/// # Examples
/// ```
/// use assignlang::{Outcome, io::ReaderSource, run};
///
/// let mut lines = Vec::new();
/// let mut source = ReaderSource::new("a = 1;\nb = a + 1;\n".as_bytes());
/// assert_eq!(run(&mut source, &mut lines).unwrap(), Outcome::Success);
/// assert_eq!(lines, vec!["a = 1", "b = 2"]);
/// ```
pub fn run(reader: &mut impl SourceReader,
           sink: &mut impl LineSink)
           -> std::io::Result<Outcome> {
    let source = reader.read_full_source()?;

    match execute(&source) {
        Ok(context) => {
            for (name, value) in context.store.enumerate() {
                sink.print_line(&format!("{name} = {value}"))?;
            }
            Ok(Outcome::Success)
        },
        Err(e) => {
            warn!(kind = %e.kind(), offset = e.offset(), "{e}");
            sink.print_line(ERROR_LINE)?;
            Ok(Outcome::Failed(e.kind()))
        },
    }
}
