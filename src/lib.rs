//! # monkey
//!
//! monkey is a tree-walking interpreter for the Monkey programming language.
//! It scans, parses, and evaluates Monkey source code with support for
//! integers, booleans, strings, variable bindings, conditionals, and
//! first-class functions with closures.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    error::ParseErrorList,
    interpreter::{
        environment::Environment,
        evaluator::core::eval_program,
        lexer::Lexer,
        parser::Parser,
        value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression types that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Provides typed operator enums shared by the parser and the evaluator.
/// - Renders nodes back to their canonical textual form via `Display`.
pub mod ast;
/// Provides error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// evaluating code. It standardizes error reporting and carries detailed
/// information about failures. The two categories are deliberately separate:
/// syntax errors are collected by the parser, runtime errors are returned by
/// the evaluator.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Renders each error to the exact human-readable message the language
///   reports.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and variable environments to provide a complete runtime
/// for Monkey source code. It exposes the public API for interpreting
/// programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, environment,
///   and value types.
/// - Provides entry points for scanning, parsing, and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Interactive read-evaluate-print loop.
///
/// Reads lines from an input stream, runs each through the full pipeline
/// against a single persistent environment, and writes results or error
/// reports to an output stream. This is a front end only; it contains no
/// language semantics.
pub mod repl;

/// Parses and evaluates a full Monkey program, returning the final value.
///
/// This function runs the entire pipeline on the provided source string: it
/// scans the text into tokens, parses the token stream into a program, and
/// evaluates the program against a fresh global environment. The value of the
/// last statement is returned.
///
/// A program that produced any syntax errors is never evaluated; the whole
/// ordered error list is returned instead.
///
/// # Errors
/// Returns an error if the source contains syntax errors or if evaluation
/// raises a runtime error.
///
/// # Examples
/// ```
/// use monkey::{get_result, interpreter::value::Value};
///
/// let value = get_result("let double = fn(x) { x * 2 }; double(21)").unwrap();
/// assert_eq!(value, Value::Integer(42));
///
/// // An unbound identifier is a runtime error.
/// assert!(get_result("let y = x + 1").is_err());
/// ```
pub fn get_result(source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        return Err(Box::new(ParseErrorList::new(parser.errors().to_vec())));
    }

    let env = Rc::new(RefCell::new(Environment::new()));
    let value = eval_program(&program, &env)?;

    Ok(value)
}
