use std::fmt;

use minigo_diagnostic::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Token<'src> {
    pub value: TokenValue<'src>,
    pub line: usize,

    #[serde(rename = "type")]
    pub kind: TokenKind,

    #[serde(skip)]
    pub lexeme: &'src str,
    #[serde(skip)]
    pub span: Span,
}

/// What a token carries: integer literals that fit in an `i64` are parsed,
/// everything else (larger integers included) keeps its lexeme verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(untagged)]
pub enum TokenValue<'src> {
    Integer(i64),
    Lexeme(&'src str),
}

impl fmt::Display for TokenValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Integer(n) => write!(f, "{n}"),
            TokenValue::Lexeme(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    Package,
    Import,
    Func,
    Fmt,
    Println,

    Identifier,
    Number,
    String,

    Plus,
    Minus,
    Times,
    Divide,

    LParen,
    RParen,
    LBrace,
    RBrace,

    Semicolon,
    Period,
}

impl TokenKind {
    /// Every kind, in the order the count table lists them.
    pub const ALL: [TokenKind; 18] = [
        TokenKind::Package,
        TokenKind::Import,
        TokenKind::Func,
        TokenKind::Fmt,
        TokenKind::Println,
        TokenKind::Identifier,
        TokenKind::Number,
        TokenKind::String,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Times,
        TokenKind::Divide,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::Semicolon,
        TokenKind::Period,
    ];

    pub fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "package" => Some(TokenKind::Package),
            "import" => Some(TokenKind::Import),
            "func" => Some(TokenKind::Func),
            "fmt" => Some(TokenKind::Fmt),
            "Println" => Some(TokenKind::Println),
            _ => None,
        }
    }

    /// The type name used in token listings and the count table.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Package => "PACKAGE",
            TokenKind::Import => "IMPORT",
            TokenKind::Func => "FUNC",
            TokenKind::Fmt => "FMT",
            TokenKind::Println => "PRINTLN",
            TokenKind::Identifier => "ID",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Times => "TIMES",
            TokenKind::Divide => "DIVIDE",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Period => "PERIOD",
        }
    }

    /// A human readable description for error messages.
    pub fn token_name(self) -> &'static str {
        match self {
            TokenKind::Package => "keyword `package`",
            TokenKind::Import => "keyword `import`",
            TokenKind::Func => "keyword `func`",
            TokenKind::Fmt => "keyword `fmt`",
            TokenKind::Println => "keyword `Println`",
            TokenKind::Identifier => "an identifier",
            TokenKind::Number => "an integer",
            TokenKind::String => "a string literal",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Times => "`*`",
            TokenKind::Divide => "`/`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Period => "`.`",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl serde::Serialize for TokenKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}
