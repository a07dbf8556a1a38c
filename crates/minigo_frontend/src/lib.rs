#[macro_use]
extern crate macro_rules_attribute;

mod analysis;
mod counter;
mod lexer;
mod parser;
mod utils;

pub mod ast;
pub mod token;


pub use analysis::Analysis;
pub use counter::{count, TokenCounts, OTHER_BUCKET};
pub use lexer::{Lexer, LexerError, LexerErrorKind, TokenIter};
pub use parser::{ParseResult, SyntaxError};

use ast::Program;
use parser::Parser;

derive_alias! {
    #[derive(Node!)] = #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)];
}

/// Lazily tokenizes `source`. Lexical errors accumulate on the returned
/// lexer.
pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

pub fn lex(source: &str) -> (TokenIter<'_>, Vec<LexerError>) {
    Lexer::new(source).lex()
}

/// Recognizes `source` against the fixed grammar, tokenizing it afresh.
/// Lexical errors are not reported here; the characters are simply skipped.
pub fn recognize(source: &str) -> ParseResult<Program<'_>> {
    let (tokens, _) = lex(source);
    Parser::new(tokens).parse()
}

/// Tokenizes, counts and recognizes `source`. Never fails: errors are part
/// of the returned [`Analysis`].
pub fn analyze(source: &str) -> Analysis<'_> {
    Analysis::run(source)
}
