/// Parsing errors.
///
/// Defines all error types that can occur while parsing source code into an
/// AST. Parse errors include unexpected tokens, tokens with no registered
/// prefix parse function, malformed integer literals, and unclosed
/// parameter or argument lists.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include type mismatches, unknown operators, unbound identifiers,
/// calls of non-function values, division by zero, and arity mismatches.
pub mod runtime_error;

pub use parse_error::{ParseError, ParseErrorList};
pub use runtime_error::RuntimeError;
