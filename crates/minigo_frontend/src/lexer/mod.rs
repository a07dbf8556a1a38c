
use std::str::Chars;

use minigo_diagnostic::span::Span;
use minigo_diagnostic::{Diagnostic, IntoDiagnostic, Snippet};

use crate::token::*;
use crate::utils::peek::Peek;

#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LexerError {
    pub kind: LexerErrorKind,
    pub span: Span,
    pub line: usize,
}

#[derive(serde::Serialize, thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexerErrorKind {
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),
}

impl IntoDiagnostic for LexerError {
    fn into_diagnostic(self) -> Diagnostic {
        Diagnostic::error()
            .with_message("lexical error")
            .with_snippet(Snippet::new(self.kind.to_string(), self.span))
    }
}

/// Splits source text into tokens on demand.
///
/// Lexical errors never stop the lexer: the offending input is skipped and
/// the error recorded, retrievable through [`Lexer::errors`].
pub struct Lexer<'src> {
    errors: Vec<LexerError>,

    all: &'src str,
    chars: Chars<'src>,

    token_start: usize,
    line: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            errors: vec![],

            all: source,
            chars: source.chars(),

            token_start: 0,
            line: 1,
        }
    }

    pub fn lex(mut self) -> (TokenIter<'src>, Vec<LexerError>) {
        let tokens: Vec<_> = self.by_ref().collect();

        let iter = TokenIter {
            tokens: tokens.into_iter(),
            eof_span: Span::empty(self.all.len()),
        };

        (iter, self.errors)
    }

    pub fn errors(&self) -> &[LexerError] {
        &self.errors
    }

    fn lex_token(&mut self) -> Option<Token<'src>> {
        loop {
            self.token_start = self.byte_pos();

            let (kind, value) = match self.chars.next()? {
                '\n' => {
                    self.line += 1;
                    continue;
                }

                ' ' | '\t' => continue,

                '+' => (TokenKind::Plus, None),
                '-' => (TokenKind::Minus, None),
                '*' => (TokenKind::Times, None),
                '/' => (TokenKind::Divide, None),

                '(' => (TokenKind::LParen, None),
                ')' => (TokenKind::RParen, None),
                '{' => (TokenKind::LBrace, None),
                '}' => (TokenKind::RBrace, None),

                ';' => (TokenKind::Semicolon, None),
                '.' => (TokenKind::Period, None),

                '"' if self.lex_string() => (TokenKind::String, None),

                ch @ '0'..='9' => (TokenKind::Number, self.lex_integer(ch)),

                ch if is_ident_start(ch) => (self.lex_alpha(), None),

                ch => {
                    self.report_error(LexerErrorKind::UnexpectedChar(ch));
                    continue;
                }
            };

            let lexeme = &self.all[self.token_start..self.byte_pos()];

            let token = Token {
                value: value.unwrap_or(TokenValue::Lexeme(lexeme)),
                line: self.line,
                kind,
                lexeme,
                span: Span::new(self.token_start, self.byte_pos()),
            };

            return Some(token);
        }
    }

    /// Consumes the rest of a string literal whose opening quote was just
    /// read. Leaves the cursor untouched if the literal is not closed on this
    /// line.
    fn lex_string(&mut self) -> bool {
        let mut lookahead = self.chars.clone();

        loop {
            match lookahead.next() {
                Some('"') => {
                    self.chars = lookahead;
                    return true;
                }

                Some('\\') => {
                    if matches!(lookahead.next(), Some('\n') | None) {
                        return false;
                    }
                }

                Some('\n') | None => return false,

                Some(_) => {}
            }
        }
    }

    /// Consumes a digit run. Returns its value, or `None` when it does not fit
    /// in an `i64` and the token keeps its digits instead.
    fn lex_integer(&mut self, first: char) -> Option<TokenValue<'src>> {
        let mut n = Some(digit_value(first));

        while let Some(ch @ '0'..='9') = self.chars.peek() {
            self.chars.next();

            n = n.and_then(|n| n.checked_mul(10));
            n = n.and_then(|n| n.checked_add(digit_value(ch)));
        }

        if n.is_none() {
            tracing::debug!(line = self.line, "integer literal wider than 64 bits");
        }

        n.map(TokenValue::Integer)
    }

    fn lex_alpha(&mut self) -> TokenKind {
        while matches!(self.chars.peek(), Some(ch) if is_ident(ch)) {
            self.chars.next();
        }

        let s = &self.all[self.token_start..self.byte_pos()];
        TokenKind::from_keyword(s).unwrap_or(TokenKind::Identifier)
    }

    fn byte_pos(&self) -> usize {
        self.all.len() - self.chars.as_str().len()
    }

    fn report_error(&mut self, kind: LexerErrorKind) {
        let span = Span::new(self.token_start, self.byte_pos());
        tracing::debug!(line = self.line, start = span.start, "{kind}, skipping");

        self.errors.push(LexerError {
            kind,
            span,
            line: self.line,
        });
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lex_token()
    }
}

fn is_ident_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_ident(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn digit_value(ch: char) -> i64 {
    ch as i64 - '0' as i64
}

/// Tokens produced by a finished lexer, with one token of lookahead.
pub struct TokenIter<'src> {
    tokens: std::vec::IntoIter<Token<'src>>,
    eof_span: Span,
}

impl<'src> TokenIter<'src> {
    pub fn eof_span(&self) -> Span {
        self.eof_span
    }

    pub fn as_slice(&self) -> &[Token<'src>] {
        self.tokens.as_slice()
    }
}

impl<'src> Iterator for TokenIter<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }
}

impl Peek for TokenIter<'_> {
    fn peek(&self) -> Option<Self::Item> {
        self.tokens.as_slice().first().copied()
    }
}
