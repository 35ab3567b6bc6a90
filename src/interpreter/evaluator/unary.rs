use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates a prefix operation on a value.
///
/// Supported operators:
/// - `Not`: logical negation under truthiness. `!true` is `false`, `!null`
///   is `true`, and every other value, including `0`, negates to `false`.
/// - `Negate`: integer negation. Applying it to anything but an integer is
///   an unknown-operator error.
///
/// # Parameters
/// - `op`: Prefix operator.
/// - `right`: The operand value.
///
/// # Returns
/// The computed `Value` wrapped in `EvalResult`.
pub(in crate::interpreter::evaluator) fn eval_unary(
    op: UnaryOperator,
    right: &Value,
) -> EvalResult<Value> {
    match op {
        UnaryOperator::Not => Ok(Value::Boolean(match right {
            Value::Boolean(value) => !value,
            Value::Null => true,
            _ => false,
        })),
        UnaryOperator::Negate => match right {
            Value::Integer(value) => Ok(Value::Integer(-value)),
            _ => Err(RuntimeError::UnknownPrefixOperator {
                op,
                right: right.type_name(),
            }),
        },
    }
}
