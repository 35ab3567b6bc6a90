use crate::{
    ast::{BinaryOperator, Expression, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Applies the prefix parse function for the current token.
    ///
    /// Every token kind that can begin an expression has an arm here:
    /// identifiers, the three literal forms, the two prefix operators,
    /// grouped expressions, conditionals, and function literals. A token
    /// with no arm cannot begin an expression and is reported as such; the
    /// enclosing statement is then abandoned.
    pub(in crate::interpreter::parser) fn parse_prefix(&mut self) -> ParseResult<Expression> {
        match self.cur_token.kind {
            TokenKind::Ident => Ok(Expression::Identifier(self.cur_token.literal.clone())),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::Str => Ok(Expression::StringLiteral(self.cur_token.literal.clone())),
            TokenKind::True | TokenKind::False => {
                Ok(Expression::Boolean(self.cur_token_is(TokenKind::True)))
            }
            TokenKind::Bang => self.parse_prefix_expression(UnaryOperator::Not),
            TokenKind::Minus => self.parse_prefix_expression(UnaryOperator::Negate),
            TokenKind::Lparen => self.parse_grouped_expression(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Function => self.parse_function_literal(),
            kind => Err(ParseError::NoPrefixParseFn { kind }),
        }
    }

    /// Maps a token kind to the infix operator it stands for, if any.
    pub(in crate::interpreter::parser) const fn infix_operator(
        kind: TokenKind,
    ) -> Option<BinaryOperator> {
        match kind {
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Minus => Some(BinaryOperator::Sub),
            TokenKind::Asterisk => Some(BinaryOperator::Mul),
            TokenKind::Slash => Some(BinaryOperator::Div),
            TokenKind::Lt => Some(BinaryOperator::Less),
            TokenKind::Gt => Some(BinaryOperator::Greater),
            TokenKind::Eq => Some(BinaryOperator::Equal),
            TokenKind::NotEq => Some(BinaryOperator::NotEqual),
            _ => None,
        }
    }

    fn parse_integer_literal(&self) -> ParseResult<Expression> {
        let literal = &self.cur_token.literal;
        literal
            .parse()
            .map(Expression::IntegerLiteral)
            .map_err(|_| ParseError::InvalidIntegerLiteral {
                literal: literal.clone(),
            })
    }

    /// Parses the operand of a prefix operator.
    ///
    /// The operand is parsed at prefix precedence, so prefix operators bind
    /// tighter than any infix operator: `-a * b` is `((-a) * b)`.
    fn parse_prefix_expression(&mut self, op: UnaryOperator) -> ParseResult<Expression> {
        self.next_token();

        let right = self.parse_expression(Precedence::Prefix)?;

        Ok(Expression::Prefix {
            op,
            right: Box::new(right),
        })
    }

    /// Folds `left` into an infix expression with the operator at the
    /// current token.
    ///
    /// The right-hand side is parsed at the operator's own precedence level,
    /// which yields left associativity for chains of equal precedence.
    pub(in crate::interpreter::parser) fn parse_infix_expression(
        &mut self,
        op: BinaryOperator,
        left: Expression,
    ) -> ParseResult<Expression> {
        let precedence = self.cur_precedence();
        self.next_token();

        let right = self.parse_expression(precedence)?;

        Ok(Expression::Infix {
            left: Box::new(left),
            op,
            right: Box::new(right),
        })
    }

    /// Parses `( <expression> )`.
    ///
    /// The inner expression restarts at lowest precedence, which is how
    /// grouping overrides operator precedence. No node is built for the
    /// parentheses themselves.
    fn parse_grouped_expression(&mut self) -> ParseResult<Expression> {
        self.next_token();

        let expression = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::Rparen)?;

        Ok(expression)
    }

    /// Parses `if ( <condition> ) { <consequence> }` with an optional
    /// `else { <alternative> }`.
    ///
    /// The `else` branch attaches only when the token immediately following
    /// the consequence block is `else`.
    fn parse_if_expression(&mut self) -> ParseResult<Expression> {
        self.expect_peek(TokenKind::Lparen)?;
        self.next_token();

        let condition = self.parse_expression(Precedence::Lowest)?;

        self.expect_peek(TokenKind::Rparen)?;
        self.expect_peek(TokenKind::Lbrace)?;

        let consequence = self.parse_block_statement()?;

        let alternative = if self.peek_token_is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::Lbrace)?;
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Ok(Expression::If {
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    /// Parses `fn ( <parameters> ) { <body> }`.
    fn parse_function_literal(&mut self) -> ParseResult<Expression> {
        self.expect_peek(TokenKind::Lparen)?;

        let parameters = self.parse_function_parameters()?;

        self.expect_peek(TokenKind::Lbrace)?;

        let body = self.parse_block_statement()?;

        Ok(Expression::FunctionLiteral { parameters, body })
    }

    /// Parses a comma-separated identifier list up to `)`.
    ///
    /// A list that is not properly closed is an
    /// [`ParseError::UnclosedParameterList`], which aborts the whole parse
    /// pass rather than recovering at the next statement.
    fn parse_function_parameters(&mut self) -> ParseResult<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek_token_is(TokenKind::Rparen) {
            self.next_token();
            return Ok(parameters);
        }

        self.next_token();
        parameters.push(self.parse_parameter_name()?);

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            parameters.push(self.parse_parameter_name()?);
        }

        if !self.peek_token_is(TokenKind::Rparen) {
            return Err(ParseError::UnclosedParameterList);
        }
        self.next_token();

        Ok(parameters)
    }

    fn parse_parameter_name(&self) -> ParseResult<String> {
        if self.cur_token_is(TokenKind::Ident) {
            Ok(self.cur_token.literal.clone())
        } else {
            Err(ParseError::UnexpectedToken {
                expected: TokenKind::Ident,
                got: self.cur_token.kind,
            })
        }
    }

    /// Folds `left` into a call expression.
    ///
    /// The current token is the `(` that follows the callee expression.
    pub(in crate::interpreter::parser) fn parse_call_expression(
        &mut self,
        function: Expression,
    ) -> ParseResult<Expression> {
        let arguments = self.parse_call_arguments()?;

        Ok(Expression::Call {
            function: Box::new(function),
            arguments,
        })
    }

    /// Parses a comma-separated expression list up to `)`.
    ///
    /// Each argument restarts at lowest precedence. A list that is not
    /// properly closed is an [`ParseError::UnclosedArgumentList`], which
    /// aborts the whole parse pass.
    fn parse_call_arguments(&mut self) -> ParseResult<Vec<Expression>> {
        let mut arguments = Vec::new();

        if self.peek_token_is(TokenKind::Rparen) {
            self.next_token();
            return Ok(arguments);
        }

        self.next_token();
        arguments.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            arguments.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.peek_token_is(TokenKind::Rparen) {
            return Err(ParseError::UnclosedArgumentList);
        }
        self.next_token();

        Ok(arguments)
    }
}
