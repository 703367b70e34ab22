// lang/src/lexer.rs
use serde::Serialize;
use std::fmt;

/// One lexical unit of lambda-calculus surface syntax.
///
/// Tokens carry no positions; the order of the sequence is the only
/// structure at this stage. Serializes with a `type` tag so the token
/// dump matches what the visualizer's debug pane expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Token {
    Lambda,
    Dot,
    ParenOpen,
    ParenClose,
    Variable { name: String },
}

impl Token {
    /// Canonical glyph. Every accepted binder spelling renders as `λ`.
    pub fn glyph(&self) -> &str {
        match self {
            Token::Lambda => "λ",
            Token::Dot => ".",
            Token::ParenOpen => "(",
            Token::ParenClose => ")",
            Token::Variable { name } => name,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            let Some(ch) = self.peek_char() else { break };
            let token = match ch {
                'λ' | '\\' | '%' => {
                    self.advance();
                    Token::Lambda
                }
                '.' => {
                    self.advance();
                    Token::Dot
                }
                '(' => {
                    self.advance();
                    Token::ParenOpen
                }
                ')' => {
                    self.advance();
                    Token::ParenClose
                }
                'a'..='z' | 'A'..='Z' | '_' => self.read_ident(),
                _ => return Err(LexError::UnexpectedCharacter(ch)),
            };
            tokens.push(token);
        }
        Ok(tokens)
    }

    // Maximal [A-Za-z_][A-Za-z0-9_]* run; "x9_a" is one token.
    fn read_ident(&mut self) -> Token {
        let start = self.pos;
        self.advance();
        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                self.advance();
            } else {
                break;
            }
        }
        Token::Variable {
            name: self.source[start..self.pos].to_string(),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.peek_char() {
            self.pos += ch.len_utf8();
        }
    }
}

/// Scan raw text into tokens, failing on the first unrecognized character.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).tokenize()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    UnexpectedCharacter(char),
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnexpectedCharacter(ch) => write!(f, "Unexpected character: {ch}"),
        }
    }
}

impl std::error::Error for LexError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str) -> Token {
        Token::Variable {
            name: name.to_string(),
        }
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert_eq!(tokenize("").unwrap(), vec![]);
        assert_eq!(tokenize("  \t\n").unwrap(), vec![]);
    }

    #[test]
    fn all_binder_glyphs_lex_as_lambda() {
        for glyph in ["λ", "\\", "%"] {
            let input = format!("{glyph}x.x");
            assert_eq!(
                tokenize(&input).unwrap(),
                vec![Token::Lambda, var("x"), Token::Dot, var("x")],
            );
        }
    }

    #[test]
    fn identifier_run_is_one_token() {
        assert_eq!(tokenize("x9_a").unwrap(), vec![var("x9_a")]);
        assert_eq!(tokenize("_tmp0").unwrap(), vec![var("_tmp0")]);
        assert_eq!(tokenize("foo bar").unwrap(), vec![var("foo"), var("bar")]);
    }

    #[test]
    fn whitespace_only_separates() {
        assert_eq!(
            tokenize(" ( x ) ").unwrap(),
            vec![Token::ParenOpen, var("x"), Token::ParenClose],
        );
    }

    #[test]
    fn unexpected_character_fails_with_no_partial_output() {
        assert_eq!(tokenize("x#"), Err(LexError::UnexpectedCharacter('#')));
        assert_eq!(tokenize("1x"), Err(LexError::UnexpectedCharacter('1')));
    }

    #[test]
    fn token_json_shape() {
        let tokens = tokenize("(x)").unwrap();
        let json = serde_json::to_value(&tokens).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "type": "paren-open" },
                { "type": "variable", "name": "x" },
                { "type": "paren-close" },
            ]),
        );
    }
}
