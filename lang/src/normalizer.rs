// lang/src/normalizer.rs
//
// Token-stream desugaring, independent of the parser. Two rewrites:
// - parameter lists: `λx y` becomes `λx. λy` (re-currying)
// - bodies: implicit juxtaposition gets explicit brackets, `a b`
//   becomes `a ( b )`
//
// A single forward pass appends to a fresh output vector; the input is
// never mutated and never spliced mid-iteration.

use crate::lexer::Token;
use crate::parser::ParseError;
use std::fmt;

// Scanning mode: between a `λ` and its `.` we are in the parameter
// list, everywhere else in a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Param,
    Body,
}

/// Rewrite a token sequence into the strict grammar the parser expects.
///
/// Fails only when a parameter list is open and no `.` exists anywhere
/// in the input, so the abstraction can never get a body.
pub fn normalize_tokens(tokens: &[Token]) -> Result<Vec<Token>, NormalizeError> {
    let has_dot = tokens.iter().any(|t| matches!(t, Token::Dot));
    let mut out = Vec::with_capacity(tokens.len());
    let mut mode = Mode::Body;
    let mut pending_close = 0usize;

    let mut i = 0;
    while i < tokens.len() {
        let curr = &tokens[i];
        let next = tokens.get(i + 1);

        match curr {
            Token::Lambda => {
                mode = Mode::Param;
                out.push(Token::Lambda);
                i += 1;
                continue;
            }
            Token::Dot => {
                mode = Mode::Body;
                out.push(Token::Dot);
                i += 1;
                continue;
            }
            _ => {}
        }

        match mode {
            Mode::Param => {
                if !has_dot {
                    return Err(NormalizeError::MissingBody);
                }
                out.push(curr.clone());
                // Two adjacent parameter variables get a `. λ` between
                // them; the synthetic tokens do not change the mode, so
                // longer lists keep re-currying pairwise.
                if matches!(curr, Token::Variable { .. })
                    && matches!(next, Some(Token::Variable { .. }))
                {
                    out.push(Token::Dot);
                    out.push(Token::Lambda);
                }
                i += 1;
            }
            Mode::Body => {
                out.push(curr.clone());
                let starts_pair = matches!(curr, Token::Variable { .. } | Token::ParenClose)
                    && matches!(next, Some(Token::Variable { .. }));
                if starts_pair {
                    out.push(Token::ParenOpen);
                    pending_close += 1;
                    if let Some(argument) = next {
                        out.push(argument.clone());
                    }
                    i += 2;
                } else {
                    i += 1;
                }
                // The close lands right after the token that followed
                // the open; an application chain is bracketed pairwise,
                // not nested.
                if pending_close > 0 {
                    out.push(Token::ParenClose);
                    pending_close -= 1;
                }
            }
        }
    }

    // Flush whatever is still scheduled at end of stream.
    for _ in 0..pending_close {
        out.push(Token::ParenClose);
    }
    Ok(out)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    MissingBody,
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeError::MissingBody => write!(f, "expected a body after lambda parameters"),
        }
    }
}

impl std::error::Error for NormalizeError {}

// The normalizer's only failure is a parse-family condition: the stream
// ends while a parameter list still waits for its '.'.
impl From<NormalizeError> for ParseError {
    fn from(_: NormalizeError) -> Self {
        ParseError::UnexpectedEof {
            expected: "'.' after lambda parameters".to_string(),
        }
    }
}
