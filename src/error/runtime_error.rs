#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that has never been assigned.
    Uninitialized {
        /// The name of the variable.
        name:   String,
        /// Byte offset of the reference.
        offset: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The operation that overflowed, such as `9223372036854775807 + 1`.
        details: String,
        /// Byte offset of the operator.
        offset:  usize,
    },
}

impl RuntimeError {
    /// Byte offset in the source where the error was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Uninitialized { offset, .. } | Self::Overflow { offset, .. } => *offset,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uninitialized { name, offset } => write!(f,
                                                           "Error at offset {offset}: Use of uninitialized variable '{name}'."),
            Self::Overflow { details, offset } => write!(f,
                                                         "Error at offset {offset}: Integer overflow while computing {details}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
