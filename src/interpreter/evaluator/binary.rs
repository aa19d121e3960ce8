use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Evaluates a binary arithmetic operation on two integers.
    ///
    /// All arithmetic is checked: a result outside the `i64` range is an
    /// error rather than a wrapped value.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `offset`: Byte offset of the operator for error reporting.
    ///
    /// # Example
    /// ```
    /// use assignlang::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Sub, 2, 5, 0).unwrap(), -3);
    /// assert!(Context::eval_binary(BinaryOperator::Mul, i64::MAX, 2, 0).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: i64,
                       right: i64,
                       offset: usize)
                       -> EvalResult<i64> {
        let result = match op {
            BinaryOperator::Add => left.checked_add(right),
            BinaryOperator::Sub => left.checked_sub(right),
            BinaryOperator::Mul => left.checked_mul(right),
        };

        result.ok_or_else(|| RuntimeError::Overflow { details: format!("{left} {op} {right}"),
                                                      offset })
    }
}
