use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{eval_block, EvalResult},
        value::Value,
    },
};

/// Applies a function value to already-evaluated arguments.
///
/// A fresh environment is created enclosing the function's *captured*
/// environment (not the caller's), each parameter is bound to its argument
/// by position, and the body is evaluated in that environment. A trailing
/// return marker is unwrapped, so a call always yields the plain value.
///
/// # Parameters
/// - `function`: The callee value; anything but a function is an error.
/// - `arguments`: Argument values, already evaluated left to right.
///
/// # Returns
/// The function's result wrapped in `EvalResult`.
///
/// # Errors
/// - `NotAFunction` when the callee is not a function value.
/// - `WrongNumberOfArguments` when the argument count does not match the
///   parameter count.
/// - Any runtime error raised by the body.
pub(in crate::interpreter::evaluator) fn apply_function(
    function: &Value,
    arguments: Vec<Value>,
) -> EvalResult<Value> {
    let Value::Function(function) = function else {
        return Err(RuntimeError::NotAFunction {
            type_name: function.type_name(),
        });
    };

    if arguments.len() != function.parameters.len() {
        return Err(RuntimeError::WrongNumberOfArguments {
            expected: function.parameters.len(),
            got: arguments.len(),
        });
    }

    let mut scope = Environment::new_enclosed(Rc::clone(&function.env));
    for (parameter, argument) in function.parameters.iter().zip(arguments) {
        scope.set(parameter.clone(), argument);
    }

    let result = eval_block(&function.body, &Rc::new(RefCell::new(scope)))?;

    Ok(unwrap_return_value(result))
}

fn unwrap_return_value(value: Value) -> Value {
    match value {
        Value::ReturnValue(value) => *value,
        value => value,
    }
}
