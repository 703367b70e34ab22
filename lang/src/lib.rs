// lamviz-lang/src/lib.rs
// Surface-syntax core for the lamviz visualizer.
//
// Pipeline, each stage consuming the previous stage's output:
// - lexer: raw text → tokens
// - normalizer: optional token-stream desugaring (not in the default path)
// - parser: tokens → expression tree
// - surface: tokens → canonical display text

pub mod ast;
pub mod lexer;
pub mod normalizer;
pub mod parser;
pub mod surface;

pub use ast::{Expr, Variable};
pub use lexer::{tokenize, LexError, Lexer, Token};
pub use normalizer::{normalize_tokens, NormalizeError};
pub use parser::{parse_ast, ParseError, Parser};
pub use surface::tokens_to_string;

use std::fmt;

/// Any failure the pipeline can produce. The first error aborts the
/// remaining stages; the caller shows the message verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Lex(LexError),
    Parse(ParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Lex(err) => err.fmt(f),
            Error::Parse(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Error::Lex(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<NormalizeError> for Error {
    fn from(err: NormalizeError) -> Self {
        Error::Parse(err.into())
    }
}

/// Convenience: source text → expression tree (the visualizer's default
/// path; the normalizer is not involved).
pub fn parse(source: &str) -> Result<Expr, Error> {
    let tokens = tokenize(source)?;
    Ok(parse_ast(tokens)?)
}

/// Convenience: source text → explicitly bracketed token rendering.
pub fn normalized_form(source: &str) -> Result<String, Error> {
    let tokens = tokenize(source)?;
    let normalized = normalize_tokens(&tokens)?;
    Ok(tokens_to_string(&normalized))
}
