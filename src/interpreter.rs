/// The environment module implements name resolution scopes.
///
/// An environment maps names to runtime values and optionally links to an
/// enclosing environment, forming the lookup chain used for variable scoping
/// and closure capture. Environments are shared between the call stack and
/// any closures that capture them.
///
/// # Responsibilities
/// - Stores bindings introduced with `let` and function parameters.
/// - Resolves names innermost first, walking the outer chain on a miss.
/// - Provides the enclosed-environment constructor used at function call
///   time.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and logical operations, manages variable state, and
/// produces results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles bindings, functions, closures, and control flow.
/// - Reports runtime errors such as type mismatches or unbound identifiers.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// integers, strings, identifiers, operators, delimiters, and keywords. This
/// is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind and literal
///   text.
/// - Handles integer and string literals, identifiers, and operators.
/// - Emits an illegal token for unrecognized input instead of failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements. Expressions are parsed by operator precedence, so later
/// phases can rely on correct associativity and nesting.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Collects syntax errors in order and recovers at statement boundaries.
/// - Supports arithmetic, conditionals, function literals, calls, and more.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types produced during execution:
/// integers, booleans, strings, the null value, the internal return-value
/// marker, and function values with their captured environments. It also
/// provides type names for error reporting and the textual rendering shown
/// by the REPL.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements truthiness, equality, and display semantics.
/// - Defines the function value with its captured environment reference.
pub mod value;
