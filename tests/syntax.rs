use monkey::{
    ast::{BinaryOperator, Expression, Program, Statement},
    interpreter::{
        lexer::{Lexer, TokenKind},
        parser::Parser,
    },
};

fn lex_all(src: &str) -> Vec<(TokenKind, String)> {
    let mut lexer = Lexer::new(src);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token();
        if token.kind == TokenKind::Eof {
            break;
        }
        tokens.push((token.kind, token.literal));
    }

    tokens
}

fn assert_tokens(src: &str, expected: &[(TokenKind, &str)]) {
    let expected = expected
        .iter()
        .map(|(kind, literal)| (*kind, (*literal).to_string()))
        .collect::<Vec<_>>();
    assert_eq!(lex_all(src), expected, "{src}");
}

fn parse(src: &str) -> Program {
    let mut parser = Parser::new(Lexer::new(src));
    let program = parser.parse_program();
    assert!(
        parser.errors().is_empty(),
        "unexpected parse errors for {src:?}: {:?}",
        parser.errors()
    );
    program
}

fn parse_error_messages(src: &str) -> Vec<String> {
    let mut parser = Parser::new(Lexer::new(src));
    parser.parse_program();
    parser.errors().iter().map(ToString::to_string).collect()
}

#[test]
fn next_token() {
    let src = r#"
      let five = 5;
      let ten = 10;

      let add = fn(x, y) {
        x + y;
      };

      let result = add(five, ten);

      !-/*5;
      5 < 10 > 5;

      if (5 < 10) {
        return true;
      } else {
        return false;
      }

      10 == 10;
      10 != 9;
      "foo bar";
    "#;

    use TokenKind::{
        Assign, Asterisk, Bang, Comma, Else, Eq, False, Function, Gt, Ident, If, Int, Lbrace, Let,
        Lparen, Lt, Minus, NotEq, Plus, Rbrace, Return, Rparen, Semicolon, Slash, Str, True,
    };

    assert_tokens(
        src,
        &[
            (Let, "let"),
            (Ident, "five"),
            (Assign, "="),
            (Int, "5"),
            (Semicolon, ";"),
            (Let, "let"),
            (Ident, "ten"),
            (Assign, "="),
            (Int, "10"),
            (Semicolon, ";"),
            (Let, "let"),
            (Ident, "add"),
            (Assign, "="),
            (Function, "fn"),
            (Lparen, "("),
            (Ident, "x"),
            (Comma, ","),
            (Ident, "y"),
            (Rparen, ")"),
            (Lbrace, "{"),
            (Ident, "x"),
            (Plus, "+"),
            (Ident, "y"),
            (Semicolon, ";"),
            (Rbrace, "}"),
            (Semicolon, ";"),
            (Let, "let"),
            (Ident, "result"),
            (Assign, "="),
            (Ident, "add"),
            (Lparen, "("),
            (Ident, "five"),
            (Comma, ","),
            (Ident, "ten"),
            (Rparen, ")"),
            (Semicolon, ";"),
            (Bang, "!"),
            (Minus, "-"),
            (Slash, "/"),
            (Asterisk, "*"),
            (Int, "5"),
            (Semicolon, ";"),
            (Int, "5"),
            (Lt, "<"),
            (Int, "10"),
            (Gt, ">"),
            (Int, "5"),
            (Semicolon, ";"),
            (If, "if"),
            (Lparen, "("),
            (Int, "5"),
            (Lt, "<"),
            (Int, "10"),
            (Rparen, ")"),
            (Lbrace, "{"),
            (Return, "return"),
            (True, "true"),
            (Semicolon, ";"),
            (Rbrace, "}"),
            (Else, "else"),
            (Lbrace, "{"),
            (Return, "return"),
            (False, "false"),
            (Semicolon, ";"),
            (Rbrace, "}"),
            (Int, "10"),
            (Eq, "=="),
            (Int, "10"),
            (Semicolon, ";"),
            (Int, "10"),
            (NotEq, "!="),
            (Int, "9"),
            (Semicolon, ";"),
            (Str, "foo bar"),
            (Semicolon, ";"),
        ],
    );
}

#[test]
fn end_of_input_is_idempotent() {
    let mut lexer = Lexer::new("1");
    assert_eq!(lexer.next_token().kind, TokenKind::Int);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn unrecognized_characters_become_illegal_tokens() {
    assert_tokens(
        "@ ~ 1",
        &[
            (TokenKind::Illegal, "@"),
            (TokenKind::Illegal, "~"),
            (TokenKind::Int, "1"),
        ],
    );
}

#[test]
fn identifiers_are_letters_and_underscores() {
    assert_tokens(
        "_foo foo123",
        &[
            (TokenKind::Ident, "_foo"),
            (TokenKind::Ident, "foo"),
            (TokenKind::Int, "123"),
        ],
    );
}

#[test]
fn string_literals_drop_their_quotes() {
    assert_tokens(
        r#""hello" """#,
        &[(TokenKind::Str, "hello"), (TokenKind::Str, "")],
    );
}

#[test]
fn keywords_win_over_identifiers() {
    assert_tokens(
        "fn fnord let lettuce",
        &[
            (TokenKind::Function, "fn"),
            (TokenKind::Ident, "fnord"),
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "lettuce"),
        ],
    );
}

#[test]
fn operator_precedence_rendering() {
    let cases = [
        ("-a * b", "((-a) * b)"),
        ("!-a", "(!(-a))"),
        ("a + b + c", "((a + b) + c)"),
        ("a + b - c", "((a + b) - c)"),
        ("a * b * c", "((a * b) * c)"),
        ("a * b / c", "((a * b) / c)"),
        ("a + b / c", "(a + (b / c))"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
        ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
        ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
        (
            "3 + 4 * 5 == 3 * 1 + 4 * 5",
            "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
        ),
        ("true", "true"),
        ("false", "false"),
        ("3 > 5 == false", "((3 > 5) == false)"),
        ("3 < 5 == true", "((3 < 5) == true)"),
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
        ("(5 + 5) * 2", "((5 + 5) * 2)"),
        ("2 / (5 + 5)", "(2 / (5 + 5))"),
        ("(5 + 5) * 2 * (5 + 5)", "(((5 + 5) * 2) * (5 + 5))"),
        ("-(5 + 5)", "(-(5 + 5))"),
        ("!(true == true)", "(!(true == true))"),
        ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
        (
            "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
            "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
        ),
        ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
    ];

    for (input, expected) in cases {
        assert_eq!(parse(input).to_string(), expected, "{input}");
    }
}

#[test]
fn rendering_is_stable_under_reparsing() {
    // Block-carrying nodes render without their braces, so the fixpoint
    // property is over expression statements.
    for src in [
        "let x = -a * b;",
        "return add(1, 2 * 3);",
        "(5 + 5) * 2 * (5 + 5)",
        "!(true == true)",
        "5 < 10 > 5;",
    ] {
        let rendered = parse(src).to_string();
        assert_eq!(parse(&rendered).to_string(), rendered, "{src}");
    }
}

#[test]
fn let_statements_parse() {
    let cases = [
        ("let x = 5;", "x", Expression::IntegerLiteral(5)),
        ("let y = true;", "y", Expression::Boolean(true)),
        (
            "let foobar = y;",
            "foobar",
            Expression::Identifier("y".to_string()),
        ),
    ];

    for (input, name, value) in cases {
        assert_eq!(
            parse(input).statements,
            vec![Statement::Let {
                name: name.to_string(),
                value,
            }],
            "{input}"
        );
    }
}

#[test]
fn return_statements_parse() {
    let cases = [
        ("return 10;", Expression::IntegerLiteral(10)),
        ("return true;", Expression::Boolean(true)),
        (
            "return foobar;",
            Expression::Identifier("foobar".to_string()),
        ),
    ];

    for (input, value) in cases {
        assert_eq!(
            parse(input).statements,
            vec![Statement::Return(value)],
            "{input}"
        );
    }
}

#[test]
fn if_expression_parses_without_alternative() {
    let program = parse("if (x < y) { x }");

    let Statement::Expression(Expression::If {
        condition,
        consequence,
        alternative,
    }) = &program.statements[0]
    else {
        panic!("not an if expression: {program:?}");
    };

    assert_eq!(condition.to_string(), "(x < y)");
    assert_eq!(consequence.statements.len(), 1);
    assert!(alternative.is_none());
}

#[test]
fn else_attaches_only_directly_after_the_consequence() {
    let program = parse("if (x < y) { x } else { y }");

    let Statement::Expression(Expression::If { alternative, .. }) = &program.statements[0] else {
        panic!("not an if expression: {program:?}");
    };
    assert_eq!(alternative.as_ref().unwrap().to_string(), "y");

    // A statement boundary between the blocks leaves the `if` without an
    // alternative; the `else` is then a syntax error of its own.
    let errors = parse_error_messages("if (x < y) { x }; else { y }");
    assert_eq!(errors, vec!["no prefix parse function for ELSE found"]);
}

#[test]
fn function_literal_parses() {
    let program = parse("fn(x, y) { x + y; }");

    let Statement::Expression(Expression::FunctionLiteral { parameters, body }) =
        &program.statements[0]
    else {
        panic!("not a function literal: {program:?}");
    };

    assert_eq!(parameters, &["x", "y"]);
    assert_eq!(body.to_string(), "(x + y)");
}

#[test]
fn function_parameter_lists_parse() {
    let cases: [(&str, &[&str]); 3] = [
        ("fn() {};", &[]),
        ("fn(x) {};", &["x"]),
        ("fn(x, y, z) {};", &["x", "y", "z"]),
    ];

    for (input, expected) in cases {
        let program = parse(input);
        let Statement::Expression(Expression::FunctionLiteral { parameters, .. }) =
            &program.statements[0]
        else {
            panic!("not a function literal: {program:?}");
        };
        assert_eq!(parameters, expected, "{input}");
    }
}

#[test]
fn call_expression_parses() {
    let program = parse("add(1, 2 * 3, 4 + 5);");

    let Statement::Expression(Expression::Call {
        function,
        arguments,
    }) = &program.statements[0]
    else {
        panic!("not a call expression: {program:?}");
    };

    assert_eq!(function.to_string(), "add");
    assert_eq!(arguments.len(), 3);
    assert_eq!(arguments[0], Expression::IntegerLiteral(1));
    assert_eq!(arguments[1].to_string(), "(2 * 3)");
    assert_eq!(arguments[2].to_string(), "(4 + 5)");
}

#[test]
fn infix_operators_parse() {
    let cases = [
        ("5 + 5;", BinaryOperator::Add),
        ("5 - 5;", BinaryOperator::Sub),
        ("5 * 5;", BinaryOperator::Mul),
        ("5 / 5;", BinaryOperator::Div),
        ("5 < 5;", BinaryOperator::Less),
        ("5 > 5;", BinaryOperator::Greater),
        ("5 == 5;", BinaryOperator::Equal),
        ("5 != 5;", BinaryOperator::NotEqual),
    ];

    for (input, expected) in cases {
        let program = parse(input);
        let Statement::Expression(Expression::Infix { op, .. }) = &program.statements[0] else {
            panic!("not an infix expression: {program:?}");
        };
        assert_eq!(*op, expected, "{input}");
    }
}

#[test]
fn trailing_semicolons_are_optional() {
    assert_eq!(parse("5").statements.len(), 1);
    assert_eq!(parse("5;").statements.len(), 1);
}

#[test]
fn a_missing_assign_is_reported() {
    let errors = parse_error_messages("let x 5;");
    assert_eq!(errors, vec!["expected next token to be =, got INT instead"]);
}

#[test]
fn parsing_recovers_at_the_next_semicolon() {
    let mut parser = Parser::new(Lexer::new("let x 5; let y = 10; y;"));
    let program = parser.parse_program();

    assert_eq!(parser.errors().len(), 1);
    assert_eq!(program.statements.len(), 2);
}

#[test]
fn one_pass_reports_several_errors() {
    let errors = parse_error_messages("let x 5; let = 10; let 838383;");
    assert_eq!(
        errors,
        vec![
            "expected next token to be =, got INT instead",
            "expected next token to be IDENT, got = instead",
            "expected next token to be IDENT, got INT instead",
        ]
    );
}

#[test]
fn a_token_without_a_prefix_parse_function_is_reported() {
    let errors = parse_error_messages("+");
    assert_eq!(errors, vec!["no prefix parse function for + found"]);
}

#[test]
fn illegal_tokens_are_rejected_by_the_parser() {
    let errors = parse_error_messages("let x = @;");
    assert_eq!(errors, vec!["no prefix parse function for ILLEGAL found"]);
}

#[test]
fn a_missing_closing_paren_is_reported() {
    let errors = parse_error_messages("(1");
    assert_eq!(errors, vec!["expected next token to be ), got EOF instead"]);
}

#[test]
fn an_unclosed_parameter_list_aborts_the_parse() {
    let mut parser = Parser::new(Lexer::new("let f = fn(x y) { x }; let z = 1;"));
    let program = parser.parse_program();

    assert_eq!(parser.errors().len(), 1);
    assert!(parser.errors()[0].is_fatal());
    assert_eq!(
        parser.errors()[0].to_string(),
        "function parameter list is not closed with )"
    );
    assert!(program.statements.is_empty());
}

#[test]
fn an_unclosed_argument_list_aborts_the_parse() {
    let mut parser = Parser::new(Lexer::new("add(1, 2"));
    parser.parse_program();

    assert_eq!(parser.errors().len(), 1);
    assert!(parser.errors()[0].is_fatal());
    assert_eq!(
        parser.errors()[0].to_string(),
        "call argument list is not closed with )"
    );
}
