#[cfg(test)]
mod tests;

use minigo_diagnostic::span::Span;
use minigo_diagnostic::{Diagnostic, IntoDiagnostic, Snippet};

use crate::ast::*;
use crate::lexer::TokenIter;
use crate::token::{Token, TokenKind};
use crate::utils::peek::Peek;

#[derive(serde::Serialize, thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("syntax error at '{found}' on line {line}: expected {expected}")]
    Unexpected {
        expected: &'static str,
        found: String,
        line: usize,
        span: Span,
    },

    #[error("syntax error: incomplete input, expected {expected}")]
    IncompleteInput { expected: &'static str, span: Span },
}

impl SyntaxError {
    pub fn expected(&self) -> &'static str {
        match self {
            SyntaxError::Unexpected { expected, .. }
            | SyntaxError::IncompleteInput { expected, .. } => expected,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            SyntaxError::Unexpected { span, .. } | SyntaxError::IncompleteInput { span, .. } => {
                *span
            }
        }
    }

    /// The line of the offending token, if input did not simply run out.
    pub fn line(&self) -> Option<usize> {
        match self {
            SyntaxError::Unexpected { line, .. } => Some(*line),
            SyntaxError::IncompleteInput { .. } => None,
        }
    }
}

impl IntoDiagnostic for SyntaxError {
    fn into_diagnostic(self) -> Diagnostic {
        let label = match &self {
            SyntaxError::Unexpected { expected, .. } => format!("expected {expected}"),
            SyntaxError::IncompleteInput { expected, .. } => {
                format!("input ended, expected {expected}")
            }
        };

        Diagnostic::error()
            .with_message(self.to_string())
            .with_snippet(Snippet::new(label, self.span()))
    }
}

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Recognizes the fixed four-production grammar:
///
/// ```text
/// Program      := PACKAGE ID SEMICOLON ImportDecl FuncDecl
/// ImportDecl   := IMPORT STRING SEMICOLON
/// FuncDecl     := FUNC ID LPAREN RPAREN LBRACE Statement RBRACE
/// Statement    := FMT PERIOD PRINTLN LPAREN STRING RPAREN
/// ```
///
/// There is no recovery: the first token that does not fit aborts the parse.
pub struct Parser<'src> {
    tokens: TokenIter<'src>,
}

impl<'src> Parser<'src> {
    pub fn new(tokens: TokenIter<'src>) -> Self {
        Self { tokens }
    }

    pub fn parse(mut self) -> ParseResult<Program<'src>> {
        let program = self.parse_program()?;
        self.expect_end()?;
        Ok(program)
    }

    fn parse_program(&mut self) -> ParseResult<Program<'src>> {
        self.expect(TokenKind::Package)?;
        let package_name = self.expect_lexeme(TokenKind::Identifier)?;
        self.expect(TokenKind::Semicolon)?;

        let import = self.parse_import_decl()?;
        let function = self.parse_func_decl()?;

        Ok(Program {
            package_name,
            import,
            function,
        })
    }

    fn parse_import_decl(&mut self) -> ParseResult<ImportDecl<'src>> {
        self.expect(TokenKind::Import)?;
        let path = self.expect_lexeme(TokenKind::String)?;
        self.expect(TokenKind::Semicolon)?;

        Ok(ImportDecl { path })
    }

    fn parse_func_decl(&mut self) -> ParseResult<FuncDecl<'src>> {
        self.expect(TokenKind::Func)?;
        let name = self.expect_lexeme(TokenKind::Identifier)?;

        self.expect(TokenKind::LParen)?;
        self.expect(TokenKind::RParen)?;

        self.expect(TokenKind::LBrace)?;
        let body = self.parse_statement()?;
        self.expect(TokenKind::RBrace)?;

        Ok(FuncDecl { name, body })
    }

    fn parse_statement(&mut self) -> ParseResult<Statement<'src>> {
        self.expect(TokenKind::Fmt)?;
        self.expect(TokenKind::Period)?;
        self.expect(TokenKind::Println)?;

        self.expect(TokenKind::LParen)?;
        let argument = self.expect_lexeme(TokenKind::String)?;
        self.expect(TokenKind::RParen)?;

        Ok(Statement { argument })
    }

    fn expect(&mut self, kind: TokenKind) -> ParseResult<Token<'src>> {
        match self.tokens.peek() {
            Some(t) if t.kind == kind => {
                self.tokens.next();
                Ok(t)
            }

            other => Err(self.error_expected(kind.token_name(), other)),
        }
    }

    fn expect_lexeme(&mut self, kind: TokenKind) -> ParseResult<&'src str> {
        self.expect(kind).map(|t| t.lexeme)
    }

    fn expect_end(&mut self) -> ParseResult<()> {
        if self.tokens.at_end() {
            Ok(())
        } else {
            Err(self.error_expected("end of input", self.tokens.peek()))
        }
    }

    fn error_expected(&self, expected: &'static str, found: Option<Token>) -> SyntaxError {
        tracing::trace!(expected, found = ?found.map(|t| t.kind), "recognition failed");

        match found {
            Some(token) => SyntaxError::Unexpected {
                expected,
                found: token.value.to_string(),
                line: token.line,
                span: token.span,
            },
            None => SyntaxError::IncompleteInput {
                expected,
                span: self.tokens.eof_span(),
            },
        }
    }
}
