/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context owning the
/// variable store, and statement execution.
pub mod core;

/// Unary operator evaluation.
///
/// Implements identity and negation of integers, with overflow checking.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements checked 64-bit addition, subtraction and multiplication.
pub mod binary;
