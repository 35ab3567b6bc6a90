use crate::ast::{BinaryOperator, UnaryOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can be raised during evaluation.
///
/// A runtime error aborts the remaining statements of the program that
/// produced it, but it is an ordinary value for the host: the interpreter
/// reports it and carries on.
pub enum RuntimeError {
    /// An infix operator was applied to operands of different types.
    TypeMismatch {
        /// Type name of the left operand.
        left: &'static str,
        /// The operator.
        op: BinaryOperator,
        /// Type name of the right operand.
        right: &'static str,
    },
    /// An infix operator is not defined for the operand types.
    UnknownInfixOperator {
        /// Type name of the left operand.
        left: &'static str,
        /// The operator.
        op: BinaryOperator,
        /// Type name of the right operand.
        right: &'static str,
    },
    /// A prefix operator is not defined for the operand type.
    UnknownPrefixOperator {
        /// The operator.
        op: UnaryOperator,
        /// Type name of the operand.
        right: &'static str,
    },
    /// Tried to use an unbound identifier.
    IdentifierNotFound {
        /// The name that was looked up.
        name: String,
    },
    /// Tried to call a value that is not a function.
    NotAFunction {
        /// Type name of the called value.
        type_name: &'static str,
    },
    /// Attempted integer division by zero.
    DivisionByZero,
    /// A function was called with the wrong number of arguments.
    WrongNumberOfArguments {
        /// The number of parameters the function declares.
        expected: usize,
        /// The number of arguments supplied.
        got: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { left, op, right } => {
                write!(f, "type mismatch: {left} {op} {right}")
            }
            Self::UnknownInfixOperator { left, op, right } => {
                write!(f, "unknown operator: {left} {op} {right}")
            }
            Self::UnknownPrefixOperator { op, right } => {
                write!(f, "unknown operator: {op}{right}")
            }
            Self::IdentifierNotFound { name } => {
                write!(f, "identifier not found: {name}")
            }
            Self::NotAFunction { type_name } => {
                write!(f, "not a function: {type_name}")
            }
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::WrongNumberOfArguments { expected, got } => {
                write!(
                    f,
                    "wrong number of arguments: expected {expected}, got {got}"
                )
            }
        }
    }
}

impl std::error::Error for RuntimeError {}
