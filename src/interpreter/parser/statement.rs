use crate::{
    ast::{BlockStatement, Statement},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - a `let` binding,
    /// - a `return` statement,
    /// - a bare expression statement.
    ///
    /// The first token decides the form; anything that is not a keyword
    /// statement is parsed as an expression statement.
    ///
    /// # Returns
    /// A parsed [`Statement`] node.
    ///
    /// # Errors
    /// Returns the `ParseError` that made the statement unparseable.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.cur_token.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses a binding of the form `let <identifier> = <expression>;`.
    ///
    /// The identifier and the `=` are required checkpoints; a wrong token at
    /// either position aborts the statement. After the value expression the
    /// parser moves on to the terminating `;`.
    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        self.expect_peek(TokenKind::Ident)?;
        let name = self.cur_token.literal.clone();

        self.expect_peek(TokenKind::Assign)?;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_to_semicolon();

        Ok(Statement::Let { name, value })
    }

    /// Parses a statement of the form `return <expression>;`.
    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_to_semicolon();

        Ok(Statement::Return(value))
    }

    /// Parses a bare expression used as a statement.
    ///
    /// The terminating `;` is optional, so the last expression of a block or
    /// program does not need one.
    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let expression = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Ok(Statement::Expression(expression))
    }

    /// Parses statements until `}` or the end of input.
    ///
    /// The current token is the opening `{` on entry and the closing `}` on
    /// exit.
    pub(in crate::interpreter::parser) fn parse_block_statement(
        &mut self,
    ) -> ParseResult<BlockStatement> {
        let mut statements = Vec::new();
        self.next_token();

        while !self.cur_token_is(TokenKind::Rbrace) && !self.cur_token_is(TokenKind::Eof) {
            statements.push(self.parse_statement()?);
            self.next_token();
        }

        Ok(BlockStatement { statements })
    }
}
