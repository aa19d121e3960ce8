/// Syntax errors.
///
/// Defines all error types that can occur while lexing and parsing source
/// code: invalid characters, malformed literals, and tokens out of place.
pub mod syntax_error;
/// Runtime errors.
///
/// Contains the error types raised while evaluating an assignment, such as
/// reading a variable that was never assigned or overflowing an integer.
pub mod runtime_error;

pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

/// The broad category of a fatal error.
///
/// Users only ever see the generic error line; the kind is kept for logging
/// and for callers embedding the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed token stream or grammar violation.
    Syntax,
    /// A variable was read before any successful assignment to it.
    Uninitialized,
    /// A literal or an intermediate result does not fit in an `i64`.
    Overflow,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax => write!(f, "syntax error"),
            Self::Uninitialized => write!(f, "uninitialized variable"),
            Self::Overflow => write!(f, "integer overflow"),
        }
    }
}

/// Any error that aborts the execution of a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Raised by the lexer or the parser.
    Syntax(SyntaxError),
    /// Raised by the evaluator.
    Runtime(RuntimeError),
}

impl Error {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Syntax(SyntaxError::LiteralTooLarge { .. }) => ErrorKind::Overflow,
            Self::Syntax(_) => ErrorKind::Syntax,
            Self::Runtime(RuntimeError::Uninitialized { .. }) => ErrorKind::Uninitialized,
            Self::Runtime(RuntimeError::Overflow { .. }) => ErrorKind::Overflow,
        }
    }

    /// Byte offset in the source where the error was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Syntax(e) => e.offset(),
            Self::Runtime(e) => e.offset(),
        }
    }
}

impl From<SyntaxError> for Error {
    fn from(value: SyntaxError) -> Self {
        Self::Syntax(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
