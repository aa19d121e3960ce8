#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum SyntaxError {
    /// A character that cannot start any token.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        offset:    usize,
    },
    /// An integer literal with more than one digit started with `0`.
    LeadingZero {
        /// The literal as written.
        literal: String,
        /// Byte offset of the literal.
        offset:  usize,
    },
    /// A required token was not found.
    UnexpectedToken {
        /// Description of what the grammar required.
        expected: String,
        /// The token encountered instead.
        found:    String,
        /// Byte offset of the token encountered.
        offset:   usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Byte offset of the token found instead.
        offset: usize,
    },
    /// A token that cannot begin a factor.
    InvalidFactor {
        /// The token encountered.
        found:  String,
        /// Byte offset of the token.
        offset: usize,
    },
    /// Too many parentheses or prefix operators enclose a factor.
    NestingTooDeep {
        /// Byte offset of the token that exceeded the limit.
        offset: usize,
    },
    /// An integer literal too large to be represented as an `i64`.
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
        /// Byte offset of the literal.
        offset:  usize,
    },
}

impl SyntaxError {
    /// Byte offset in the source where the error was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::InvalidCharacter { offset, .. }
            | Self::LeadingZero { offset, .. }
            | Self::UnexpectedToken { offset, .. }
            | Self::ExpectedClosingParen { offset }
            | Self::NestingTooDeep { offset }
            | Self::InvalidFactor { offset, .. }
            | Self::LiteralTooLarge { offset, .. } => *offset,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, offset } => {
                write!(f, "Error at offset {offset}: Invalid character {character:?}.")
            },
            Self::LeadingZero { literal, offset } => write!(f,
                                                            "Error at offset {offset}: Leading zeros not allowed in literal {literal}."),
            Self::UnexpectedToken { expected,
                                    found,
                                    offset, } => write!(f,
                                                        "Error at offset {offset}: Expected {expected}, found {found}."),
            Self::ExpectedClosingParen { offset } => write!(f,
                                                            "Error at offset {offset}: Expected closing parenthesis ')' but none found."),
            Self::InvalidFactor { found, offset } => {
                write!(f, "Error at offset {offset}: Invalid factor {found}.")
            },
            Self::NestingTooDeep { offset } => {
                write!(f, "Error at offset {offset}: Expression is nested too deeply.")
            },
            Self::LiteralTooLarge { literal, offset } => {
                write!(f, "Error at offset {offset}: Literal {literal} is too large.")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
