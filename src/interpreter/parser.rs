/// Core parsing machinery.
///
/// Contains the parser state (the two-token window over the lexer), the
/// operator precedence table, and the precedence-climbing expression loop
/// that drives all expression parsing.
pub mod core;

/// Expression parsing.
///
/// Implements the per-token prefix and infix parse functions: literals,
/// identifiers, prefix and infix operators, grouped expressions,
/// conditionals, function literals, and calls.
pub mod expression;

/// Statement parsing.
///
/// Implements parsing for `let` statements, `return` statements, bare
/// expression statements, and brace-delimited blocks.
pub mod statement;

pub use core::Parser;
