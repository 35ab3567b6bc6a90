use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates an infix operation on two values.
///
/// Dispatch order, which callers rely on for error classification:
/// 1. Two integers: full arithmetic and comparison support.
/// 2. Two strings: only `+` (concatenation) is defined; any other operator
///    is an unknown-operator error.
/// 3. `==` and `!=` on anything else compare by value identity, which is
///    meaningful for booleans and `null` and always `false` across types.
/// 4. Operands of different types: a type-mismatch error.
/// 5. Same type, unsupported operator: an unknown-operator error.
///
/// # Parameters
/// - `op`: The infix operator.
/// - `left`: Left operand value.
/// - `right`: Right operand value.
///
/// # Returns
/// The computed `Value` wrapped in `EvalResult`.
pub(in crate::interpreter::evaluator) fn eval_binary(
    op: BinaryOperator,
    left: Value,
    right: Value,
) -> EvalResult<Value> {
    let type_names = (left.type_name(), right.type_name());

    match (left, right) {
        (Value::Integer(left), Value::Integer(right)) => eval_integer_binary(op, left, right),
        (Value::String(left), Value::String(right)) => match op {
            BinaryOperator::Add => Ok(Value::String(left + &right)),
            _ => Err(RuntimeError::UnknownInfixOperator {
                left: type_names.0,
                op,
                right: type_names.1,
            }),
        },
        (left, right) => match op {
            BinaryOperator::Equal => Ok(Value::Boolean(left == right)),
            BinaryOperator::NotEqual => Ok(Value::Boolean(left != right)),
            _ if type_names.0 != type_names.1 => Err(RuntimeError::TypeMismatch {
                left: type_names.0,
                op,
                right: type_names.1,
            }),
            _ => Err(RuntimeError::UnknownInfixOperator {
                left: type_names.0,
                op,
                right: type_names.1,
            }),
        },
    }
}

/// Integer arithmetic and comparisons.
///
/// Division truncates toward zero. Division by zero is a runtime error, not
/// a host-level fault.
fn eval_integer_binary(op: BinaryOperator, left: i64, right: i64) -> EvalResult<Value> {
    match op {
        BinaryOperator::Add => Ok(Value::Integer(left + right)),
        BinaryOperator::Sub => Ok(Value::Integer(left - right)),
        BinaryOperator::Mul => Ok(Value::Integer(left * right)),
        BinaryOperator::Div => {
            if right == 0 {
                Err(RuntimeError::DivisionByZero)
            } else {
                Ok(Value::Integer(left / right))
            }
        }
        BinaryOperator::Less => Ok(Value::Boolean(left < right)),
        BinaryOperator::Greater => Ok(Value::Boolean(left > right)),
        BinaryOperator::Equal => Ok(Value::Boolean(left == right)),
        BinaryOperator::NotEqual => Ok(Value::Boolean(left != right)),
    }
}
