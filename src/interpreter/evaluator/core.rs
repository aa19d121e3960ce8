use tracing::debug;

use crate::{
    ast::{Expr, Operation, Statement},
    error::RuntimeError,
    interpreter::store::VariableStore,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// Each context exclusively owns its variable store, so independent programs
/// run in independent contexts never observe each other's variables.
#[derive(Debug, Default)]
pub struct Context {
    /// Every variable assigned so far.
    pub store: VariableStore,
}

impl Context {
    /// Creates a new evaluation context with an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression.
    ///
    /// # Errors
    /// - `RuntimeError::Uninitialized` when a referenced variable has never
    ///   been assigned.
    /// - `RuntimeError::Overflow` when an intermediate result does not fit in
    ///   an `i64`.
    pub fn eval(&self, expr: &Expr) -> EvalResult<i64> {
        match expr {
            Expr::Literal { value, .. } => Ok(*value),
            Expr::Variable { name, offset } => self.eval_variable(name, *offset),
            Expr::UnaryOp { op, expr, offset } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, value, *offset)
            },
            Expr::BinaryOp { first, rest } => {
                let mut result = self.eval(first)?;
                for Operation { op, operand, offset } in rest {
                    let operand = self.eval(operand)?;
                    result = Self::eval_binary(*op, result, operand, *offset)?;
                }
                Ok(result)
            },
        }
    }

    fn eval_variable(&self, name: &str, offset: usize) -> EvalResult<i64> {
        let binding = self.store.get(name);
        if !binding.initialized {
            return Err(RuntimeError::Uninitialized { name: name.to_string(),
                                                     offset });
        }
        Ok(binding.value)
    }

    /// Executes a single statement.
    ///
    /// The right-hand side of an assignment is evaluated completely before
    /// the store is touched, so a failing statement leaves every binding as
    /// it was.
    ///
    /// # Returns
    /// The value that was assigned.
    ///
    /// # Example
    /// ```
    /// use assignlang::{
    ///     ast::{Expr, Operation, Statement},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let mut context = Context::new();
    /// let statement = Statement::Assignment { name:   "x".to_string(),
    ///                                         value:  Expr::Literal { value: 7, offset: 4 },
    ///                                         offset: 0, };
    /// assert_eq!(context.eval_statement(&statement).unwrap(), 7);
    /// assert_eq!(context.store.get("x").value, 7);
    /// ```
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<i64> {
        match statement {
            Statement::Assignment { name, value, .. } => {
                let value = self.eval(value)?;
                self.store.set(name, value);
                debug!(name = name.as_str(), value, "assigned variable");
                Ok(value)
            },
        }
    }
}
