use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// Negating `i64::MIN` is reported as an overflow.
    ///
    /// # Example
    /// ```
    /// use assignlang::{ast::UnaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_unary(UnaryOperator::Negate, 5, 0).unwrap(), -5);
    /// assert_eq!(Context::eval_unary(UnaryOperator::Plus, -5, 0).unwrap(), -5);
    /// assert!(Context::eval_unary(UnaryOperator::Negate, i64::MIN, 0).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: i64, offset: usize) -> EvalResult<i64> {
        match op {
            UnaryOperator::Plus => Ok(value),
            UnaryOperator::Negate => {
                value.checked_neg()
                     .ok_or_else(|| RuntimeError::Overflow { details: format!("-({value})"),
                                                             offset })
            },
        }
    }
}
