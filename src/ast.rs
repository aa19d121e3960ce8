/// Prefix operators accepted in front of a factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `+x`, the identity.
    Plus,
    /// `-x`
    Negate,
}

/// Infix arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
        };
        write!(f, "{symbol}")
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Nodes record the byte offset of the token they were built from, which is
/// used for error reporting during evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal such as `42`.
    Literal {
        /// The literal's value.
        value:  i64,
        /// Byte offset of the literal.
        offset: usize,
    },
    /// A reference to a variable.
    Variable {
        /// The variable name.
        name:   String,
        /// Byte offset of the identifier.
        offset: usize,
    },
    /// A prefix operation such as `-x`.
    UnaryOp {
        /// The operator.
        op:     UnaryOperator,
        /// The operand.
        expr:   Box<Self>,
        /// Byte offset of the operator.
        offset: usize,
    },
    /// A left-associative chain of operations at one precedence level, such
    /// as `a - b + c` or `a * b * c`.
    ///
    /// Chains are flat, so a long run of terms does not deepen the tree.
    BinaryOp {
        /// The leftmost operand.
        first: Box<Self>,
        /// The remaining operations, applied from left to right.
        rest:  Vec<Operation>,
    },
}

/// One step of a [`Expr::BinaryOp`] chain: an operator and its right-hand
/// operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// The operator.
    pub op:      BinaryOperator,
    /// The right-hand operand.
    pub operand: Expr,
    /// Byte offset of the operator.
    pub offset:  usize,
}

/// A top-level statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `name = value;`
    Assignment {
        /// The assigned variable.
        name:   String,
        /// The right-hand side.
        value:  Expr,
        /// Byte offset of the target identifier.
        offset: usize,
    },
}
