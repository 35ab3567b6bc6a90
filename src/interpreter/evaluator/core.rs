use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    ast::{BlockStatement, Expression, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{binary::eval_binary, function::apply_function, unary::eval_unary},
        value::{Function, Value},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or the
/// `RuntimeError` describing the failure. The error propagates unchanged
/// through every enclosing evaluation step, so the first failure aborts the
/// rest of the program.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a whole program against the given environment.
///
/// Statements run in order; the value of the last one is the value of the
/// program, and an empty program evaluates to `null`. A `return` at the top
/// level stops execution early and yields its unwrapped value. The first
/// runtime error stops execution and is returned as the result.
///
/// Evaluation is pure with respect to the AST: the same program can be run
/// any number of times, against the same or fresh environments, and all
/// state lives in the environments passed in.
///
/// # Parameters
/// - `program`: The parsed program to run.
/// - `env`: The global environment for this run.
///
/// # Returns
/// The value of the last executed statement.
pub fn eval_program(program: &Program, env: &Rc<RefCell<Environment>>) -> EvalResult<Value> {
    let mut result = Value::Null;

    for statement in &program.statements {
        result = eval_statement(statement, env)?;

        if let Value::ReturnValue(value) = result {
            return Ok(*value);
        }
    }

    Ok(result)
}

/// Evaluates the statements of a block in order.
///
/// Like program evaluation, but a return marker is passed through *wrapped*:
/// every enclosing block must also stop early, and only the function or
/// program boundary unwraps it. This is how `return` travels out of nested
/// blocks without a dedicated control-flow mechanism.
pub(in crate::interpreter::evaluator) fn eval_block(
    block: &BlockStatement,
    env: &Rc<RefCell<Environment>>,
) -> EvalResult<Value> {
    let mut result = Value::Null;

    for statement in &block.statements {
        result = eval_statement(statement, env)?;

        if matches!(result, Value::ReturnValue(_)) {
            return Ok(result);
        }
    }

    Ok(result)
}

fn eval_statement(statement: &Statement, env: &Rc<RefCell<Environment>>) -> EvalResult<Value> {
    match statement {
        Statement::Let { name, value } => {
            let value = eval_expression(value, env)?;
            env.borrow_mut().set(name.clone(), value.clone());
            Ok(value)
        }
        Statement::Return(expression) => {
            let value = eval_expression(expression, env)?;
            Ok(Value::ReturnValue(Box::new(value)))
        }
        Statement::Expression(expression) => eval_expression(expression, env),
    }
}

/// Evaluates a single expression against the given environment.
///
/// Dispatches over the full closed set of expression forms; the `match` is
/// exhaustive, so adding a variant without handling it here fails to
/// compile.
fn eval_expression(expression: &Expression, env: &Rc<RefCell<Environment>>) -> EvalResult<Value> {
    match expression {
        Expression::IntegerLiteral(value) => Ok(Value::Integer(*value)),
        Expression::StringLiteral(value) => Ok(Value::String(value.clone())),
        Expression::Boolean(value) => Ok(Value::Boolean(*value)),
        Expression::Identifier(name) => eval_identifier(name, env),
        Expression::Prefix { op, right } => {
            let right = eval_expression(right, env)?;
            eval_unary(*op, &right)
        }
        Expression::Infix { left, op, right } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            eval_binary(*op, left, right)
        }
        Expression::If {
            condition,
            consequence,
            alternative,
        } => eval_if_expression(condition, consequence, alternative.as_ref(), env),
        Expression::FunctionLiteral { parameters, body } => {
            // The function captures the environment it is defined in, not
            // the one it will be called from.
            Ok(Value::Function(Rc::new(Function {
                parameters: parameters.clone(),
                body: body.clone(),
                env: Rc::clone(env),
            })))
        }
        Expression::Call {
            function,
            arguments,
        } => {
            let function = eval_expression(function, env)?;

            // Arguments evaluate left to right; the `?` stops at the first
            // failing one.
            let mut values = Vec::with_capacity(arguments.len());
            for argument in arguments {
                values.push(eval_expression(argument, env)?);
            }

            apply_function(&function, values)
        }
    }
}

/// Chooses a branch by the truthiness of the condition.
///
/// A falsy condition with no `else` branch evaluates to `null`.
fn eval_if_expression(
    condition: &Expression,
    consequence: &BlockStatement,
    alternative: Option<&BlockStatement>,
    env: &Rc<RefCell<Environment>>,
) -> EvalResult<Value> {
    let condition = eval_expression(condition, env)?;

    if condition.is_truthy() {
        eval_block(consequence, env)
    } else if let Some(alternative) = alternative {
        eval_block(alternative, env)
    } else {
        Ok(Value::Null)
    }
}

fn eval_identifier(name: &str, env: &Rc<RefCell<Environment>>) -> EvalResult<Value> {
    env.borrow()
        .get(name)
        .ok_or_else(|| RuntimeError::IdentifierNotFound {
            name: name.to_string(),
        })
}
