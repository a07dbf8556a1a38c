use serde::ser::SerializeStruct;

use crate::ast::Program;
use crate::counter::{self, TokenCounts};
use crate::lexer::{Lexer, LexerError};
use crate::parser::SyntaxError;
use crate::token::Token;

/// Everything one analysis of a source text produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis<'src> {
    pub tokens: Vec<Token<'src>>,
    pub counts: TokenCounts,
    pub lexer_errors: Vec<LexerError>,
    pub recognition: Result<Program<'src>, SyntaxError>,
}

impl<'src> Analysis<'src> {
    pub fn run(source: &'src str) -> Self {
        let (tokens, lexer_errors) = Lexer::new(source).lex();
        let tokens: Vec<_> = tokens.collect();
        let counts = counter::count(&tokens);

        let recognition = crate::recognize(source);

        tracing::debug!(
            tokens = tokens.len(),
            lexer_errors = lexer_errors.len(),
            recognized = recognition.is_ok(),
            "analyzed source"
        );

        Self {
            tokens,
            counts,
            lexer_errors,
            recognition,
        }
    }

    pub fn program(&self) -> Option<&Program<'src>> {
        self.recognition.as_ref().ok()
    }

    pub fn syntax_error(&self) -> Option<&SyntaxError> {
        self.recognition.as_ref().err()
    }

    pub fn is_ok(&self) -> bool {
        self.recognition.is_ok()
    }
}

/// Serializes as `{ tokens, counts, syntax_error }`, the syntax error
/// rendered as its message or `null`.
impl serde::Serialize for Analysis<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut s = serializer.serialize_struct("Analysis", 3)?;

        s.serialize_field("tokens", &self.tokens)?;
        s.serialize_field("counts", &self.counts)?;
        s.serialize_field(
            "syntax_error",
            &self.syntax_error().map(ToString::to_string),
        )?;

        s.end()
    }
}
