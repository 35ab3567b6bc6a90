/// Core evaluation logic.
///
/// Contains the entry point for whole programs, statement and block
/// sequencing with return propagation, and the expression dispatcher.
pub mod core;

/// Prefix operator evaluation.
///
/// Handles the two operations that take a single operand: logical negation
/// under truthiness and integer negation.
pub mod unary;

/// Infix operator evaluation.
///
/// Implements evaluation for all infix operations: integer arithmetic and
/// comparisons, string concatenation, and the equality fallback for the
/// remaining value types.
pub mod binary;

/// Function application.
///
/// Binds arguments in a fresh environment enclosing the function's captured
/// environment, evaluates the body there, and unwraps a trailing return
/// marker.
pub mod function;
