use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::{ast::BlockStatement, interpreter::environment::Environment};

/// A runtime value produced by evaluation.
///
/// The set of variants is closed. Values are immutable once created; the one
/// exception is a function's captured environment, which is a shared
/// reference, not a copy, so later writes to that environment are visible
/// through the closure.
///
/// `ReturnValue` is a control-flow signal rather than a first-class value:
/// block evaluation wraps the result of a `return` statement in it so that
/// enclosing blocks stop early, and it is unwrapped again at function and
/// program boundaries. User code never observes it.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// An immutable string.
    String(String),
    /// A boolean.
    Boolean(bool),
    /// The absence of a value, e.g. a falsy `if` without an `else`.
    Null,
    /// Marker carrying the value of an executed `return` statement.
    ReturnValue(Box<Value>),
    /// A function with its captured environment.
    Function(Rc<Function>),
}

/// A function value: parameter names, a body, and a reference to the
/// environment the literal was evaluated in.
///
/// Capturing the *defining* environment rather than the call-site
/// environment is what implements closures: the body can keep reading
/// bindings of an enclosing call after that call has returned.
pub struct Function {
    /// The parameter names, in declaration order.
    pub parameters: Vec<String>,
    /// The function body.
    pub body: BlockStatement,
    /// The environment the function literal was evaluated in.
    pub env: Rc<RefCell<Environment>>,
}

impl Value {
    /// The type name used in error messages, such as `INTEGER` or
    /// `BOOLEAN`.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::String(_) => "STRING",
            Self::Boolean(_) => "BOOLEAN",
            Self::Null => "NULL",
            Self::ReturnValue(_) => "RETURN_VALUE",
            Self::Function(_) => "FUNCTION",
        }
    }

    /// The conditional interpretation of a value: `null` and `false` are
    /// falsy, every other value (including `0`) is truthy.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Boolean(false))
    }
}

impl PartialEq for Value {
    /// Equality between values of the same type is structural, except for
    /// functions, which compare by identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => left == right,
            (Self::String(left), Self::String(right)) => left == right,
            (Self::Boolean(left), Self::Boolean(right)) => left == right,
            (Self::Null, Self::Null) => true,
            (Self::ReturnValue(left), Self::ReturnValue(right)) => left == right,
            (Self::Function(left), Self::Function(right)) => Rc::ptr_eq(left, right),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::String(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Null => write!(f, "null"),
            Self::ReturnValue(value) => write!(f, "{value}"),
            Self::Function(function) => {
                write!(
                    f,
                    "fn({}) {{\n  {}\n}}",
                    function.parameters.join(", "),
                    function.body
                )
            }
        }
    }
}

// The captured environment is omitted: a closure environment can refer back
// to the function value that holds it.
impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("parameters", &self.parameters)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}
