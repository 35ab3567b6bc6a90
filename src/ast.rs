use std::fmt;

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expression` covers every expression form in the language, from literals
/// and identifiers to operator applications, conditionals, function literals,
/// and calls. Each variant models a distinct syntactic construct. Nodes are
/// fully formed when constructed and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// Reference to a binding by name.
    Identifier(String),
    /// A 64-bit signed integer literal.
    IntegerLiteral(i64),
    /// A string literal. The text between the quotes; no escape sequences.
    StringLiteral(String),
    /// A boolean literal value: `true` or `false`.
    Boolean(bool),
    /// A prefix operator applied to an operand, such as `!ok` or `-x`.
    Prefix {
        /// The prefix operator.
        op: UnaryOperator,
        /// The operand expression.
        right: Box<Self>,
    },
    /// An infix operator applied to two operands, such as `a + b`.
    Infix {
        /// Left operand.
        left: Box<Self>,
        /// The operator.
        op: BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Conditional expression with an optional `else` branch.
    If {
        /// The condition expression.
        condition: Box<Self>,
        /// Block evaluated when the condition is truthy.
        consequence: BlockStatement,
        /// Block evaluated when the condition is falsy, if present.
        alternative: Option<BlockStatement>,
    },
    /// A function literal such as `fn(x, y) { x + y; }`.
    FunctionLiteral {
        /// The parameter names.
        parameters: Vec<String>,
        /// The function body.
        body: BlockStatement,
    },
    /// A call expression: a callee followed by an argument list.
    Call {
        /// The expression that evaluates to the function being called.
        function: Box<Self>,
        /// Arguments to the function.
        arguments: Vec<Self>,
    },
}

/// Represents a top-level statement.
///
/// Statements are the units a program is made of. Blocks are carried
/// separately by the nodes that own them (`if`, `fn`); see
/// [`BlockStatement`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A binding introduced with `let`.
    Let {
        /// The name being bound.
        name: String,
        /// The bound value expression.
        value: Expression,
    },
    /// An explicit `return` with its value expression.
    Return(Expression),
    /// A standalone expression evaluated for its result.
    Expression(Expression),
}

/// A brace-delimited sequence of statements, as found in `if` branches and
/// function bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStatement {
    /// Statements inside the block.
    pub statements: Vec<Statement>,
}

/// The AST root: an ordered sequence of top-level statements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// The top-level statements, in source order.
    pub statements: Vec<Statement>,
}

/// Represents a prefix (unary) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Logical negation (`!x`).
    Not,
    /// Arithmetic negation (`-x`).
    Negate,
}

/// Represents an infix (binary) operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Not => "!",
            Self::Negate => "-",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(name) => write!(f, "{name}"),
            Self::IntegerLiteral(value) => write!(f, "{value}"),
            Self::StringLiteral(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Prefix { op, right } => write!(f, "({op}{right})"),
            Self::Infix { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if{condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            }
            Self::FunctionLiteral { parameters, body } => {
                write!(f, "fn({}) {body}", parameters.join(", "))
            }
            Self::Call {
                function,
                arguments,
            } => {
                let arguments = arguments
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{function}({arguments})")
            }
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return(value) => write!(f, "return {value};"),
            Self::Expression(expression) => write!(f, "{expression}"),
        }
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}
