use logos::Logos;

/// Classifies a lexical token.
///
/// A token kind is a minimal but meaningful unit of text recognized by the
/// lexer. This enum defines all recognized kinds in the language; the
/// recognizer for each is attached to its variant.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenKind {
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    Lparen,
    /// `)`
    #[token(")")]
    Rparen,
    /// `{`
    #[token("{")]
    Lbrace,
    /// `}`
    #[token("}")]
    Rbrace,
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// Identifier tokens; binding names such as `x` or `newAdder`. A maximal
    /// run of letters or underscores; digits are not part of identifiers.
    #[regex(r"[a-zA-Z_]+")]
    Ident,
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Int,
    /// String literal tokens, such as `"hello"`. No escape sequences; the
    /// literal runs to the next `"`.
    #[regex(r#""[^"]*""#)]
    Str,

    /// A character the grammar does not cover. Never produced by the
    /// recognizer; the lexer maps recognition failures to this kind.
    Illegal,
    /// End of input. The lexer keeps producing this kind once the source is
    /// exhausted.
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Lparen => "(",
            Self::Rparen => ")",
            Self::Lbrace => "{",
            Self::Rbrace => "}",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::Str => "STRING",
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
        };
        write!(f, "{name}")
    }
}

/// A lexical token: its kind and the literal text it was read from.
///
/// String tokens carry the text between the quotes; the end-of-input token
/// carries an empty literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token classification.
    pub kind: TokenKind,
    /// The literal source text.
    pub literal: String,
}

impl Token {
    pub(crate) fn eof() -> Self {
        Self {
            kind: TokenKind::Eof,
            literal: String::new(),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", self.kind, self.literal)
    }
}

/// Turns source text into a stream of tokens.
///
/// The lexer yields exactly one token per [`Lexer::next_token`] call and
/// keeps yielding the end-of-input token once the source is exhausted, so
/// callers never need a separate end check. Whitespace is skipped before
/// every token. Unrecognized characters become [`TokenKind::Illegal`] tokens
/// rather than errors; rejecting them is left to the parser.
pub struct Lexer<'src> {
    tokens: logos::Lexer<'src, TokenKind>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            tokens: TokenKind::lexer(source),
        }
    }

    /// Scans the next token and returns it.
    ///
    /// Past the end of input this keeps returning an [`TokenKind::Eof`]
    /// token.
    pub fn next_token(&mut self) -> Token {
        match self.tokens.next() {
            None => Token::eof(),
            Some(Ok(TokenKind::Str)) => {
                let slice = self.tokens.slice();
                Token {
                    kind: TokenKind::Str,
                    literal: slice[1..slice.len() - 1].to_string(),
                }
            }
            Some(Ok(kind)) => Token {
                kind,
                literal: self.tokens.slice().to_string(),
            },
            Some(Err(())) => Token {
                kind: TokenKind::Illegal,
                literal: self.tokens.slice().to_string(),
            },
        }
    }
}
