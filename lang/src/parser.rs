// lang/src/parser.rs
use crate::ast::{Expr, Variable};
use crate::lexer::Token;
use std::fmt;

/// Recursive-descent parser over an immutable token sequence.
///
/// One monotonically advancing cursor, one token of lookahead, no
/// backtracking. On any failure the whole parse is abandoned; a partial
/// tree is never returned.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse the entire stream as one expression. Leftover tokens after
    /// a complete expression are an error.
    pub fn parse(mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expr()?;
        match self.peek() {
            Some(token) => Err(ParseError::TrailingTokens(token.clone())),
            None => Ok(expr),
        }
    }

    // Expression ::= Abstraction | Application
    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        if matches!(self.peek(), Some(Token::Lambda)) {
            return self.parse_abstraction();
        }
        self.parse_application()
    }

    // Abstraction ::= 'λ' Variable+ '.' Expression
    //
    // `λx y z. B` folds right-to-left into nested single-parameter
    // nodes: Abstraction(x, Abstraction(y, Abstraction(z, B))).
    fn parse_abstraction(&mut self) -> Result<Expr, ParseError> {
        self.expect(&Token::Lambda, "'λ'")?;
        let mut params = Vec::new();
        while let Some(Token::Variable { name }) = self.peek() {
            params.push(Variable::new(name.clone()));
            self.pos += 1;
        }
        if params.is_empty() {
            return Err(ParseError::MissingParameter);
        }
        self.expect(&Token::Dot, "'.' after lambda parameters")?;
        // The body is maximally greedy.
        let mut expr = self.parse_expr()?;
        for param in params.into_iter().rev() {
            expr = Expr::abstraction(param, expr);
        }
        Ok(expr)
    }

    // Application ::= Atom (Atom)*
    //
    // Left-associative: `f x y` is `(f x) y`. A `)`, `.` or the end of
    // the stream terminates the chain without being consumed.
    fn parse_application(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_atom()?;
        while matches!(
            self.peek(),
            Some(Token::Variable { .. } | Token::ParenOpen | Token::Lambda)
        ) {
            let argument = self.parse_atom()?;
            expr = Expr::application(expr, argument);
        }
        Ok(expr)
    }

    // Atom ::= '(' Expression ')' | Abstraction | Variable
    fn parse_atom(&mut self) -> Result<Expr, ParseError> {
        match self.peek() {
            Some(Token::ParenOpen) => {
                self.pos += 1;
                let expr = self.parse_expr()?;
                match self.peek() {
                    Some(Token::ParenClose) => {
                        self.pos += 1;
                        Ok(expr)
                    }
                    _ => Err(ParseError::UnclosedParen),
                }
            }
            Some(Token::Lambda) => self.parse_abstraction(),
            Some(Token::Variable { name }) => {
                let name = name.clone();
                self.pos += 1;
                Ok(Expr::variable(name))
            }
            Some(other) => Err(ParseError::UnexpectedToken {
                expected: "an expression".to_string(),
                found: other.clone(),
            }),
            None => Err(ParseError::UnexpectedEof {
                expected: "an expression".to_string(),
            }),
        }
    }

    fn expect(&mut self, want: &Token, expected: &str) -> Result<(), ParseError> {
        match self.peek() {
            Some(token) if token == want => {
                self.pos += 1;
                Ok(())
            }
            Some(token) => Err(ParseError::UnexpectedToken {
                expected: expected.to_string(),
                found: token.clone(),
            }),
            None => Err(ParseError::UnexpectedEof {
                expected: expected.to_string(),
            }),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }
}

/// Parse a token sequence into a single expression tree.
pub fn parse_ast(tokens: Vec<Token>) -> Result<Expr, ParseError> {
    Parser::new(tokens).parse()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnexpectedToken { expected: String, found: Token },
    UnexpectedEof { expected: String },
    MissingParameter,
    UnclosedParen,
    TrailingTokens(Token),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken { expected, found } => {
                write!(f, "expected {expected}, found '{found}'")
            }
            ParseError::UnexpectedEof { expected } => {
                write!(f, "expected {expected}, found end of input")
            }
            ParseError::MissingParameter => {
                write!(f, "expected at least one parameter after 'λ'")
            }
            ParseError::UnclosedParen => write!(f, "expected ')' to close the group"),
            ParseError::TrailingTokens(token) => {
                write!(f, "unexpected token after the expression: '{token}'")
            }
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn parse_str(input: &str) -> Result<Expr, ParseError> {
        parse_ast(tokenize(input).unwrap())
    }

    #[test]
    fn empty_stream_is_unexpected_eof() {
        assert!(matches!(
            parse_str(""),
            Err(ParseError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn lambda_without_parameters_is_missing_parameter() {
        assert_eq!(parse_str("λ.x"), Err(ParseError::MissingParameter));
        assert_eq!(parse_str("λ(x).x"), Err(ParseError::MissingParameter));
    }

    #[test]
    fn lambda_without_dot_is_unexpected_token() {
        assert_eq!(
            parse_str("λx (y)"),
            Err(ParseError::UnexpectedToken {
                expected: "'.' after lambda parameters".to_string(),
                found: Token::ParenOpen,
            }),
        );
        assert!(matches!(
            parse_str("λx"),
            Err(ParseError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn unclosed_group_is_reported_for_eof_and_for_stray_tokens() {
        assert_eq!(parse_str("(x"), Err(ParseError::UnclosedParen));
        assert_eq!(parse_str("(x ."), Err(ParseError::UnclosedParen));
    }

    #[test]
    fn leftover_tokens_are_trailing() {
        assert_eq!(
            parse_str("x)"),
            Err(ParseError::TrailingTokens(Token::ParenClose)),
        );
        assert_eq!(
            parse_str("(x y) . z"),
            Err(ParseError::TrailingTokens(Token::Dot)),
        );
    }

    #[test]
    fn lambda_argument_binds_greedily() {
        // `f λx. x y` applies f to one abstraction whose body is `x y`.
        assert_eq!(
            parse_str("f λx. x y").unwrap(),
            Expr::application(
                Expr::variable("f"),
                Expr::abstraction(
                    Variable::new("x"),
                    Expr::application(Expr::variable("x"), Expr::variable("y")),
                ),
            ),
        );
    }

    #[test]
    fn dot_terminates_an_application_chain_inside_a_body() {
        assert_eq!(
            parse_str("λf. λx. f x").unwrap(),
            Expr::abstraction(
                Variable::new("f"),
                Expr::abstraction(
                    Variable::new("x"),
                    Expr::application(Expr::variable("f"), Expr::variable("x")),
                ),
            ),
        );
    }

    #[test]
    fn error_messages_render_for_the_visualizer() {
        let err = parse_str("λx λy. x").unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected '.' after lambda parameters, found 'λ'",
        );
        assert_eq!(
            parse_str("").unwrap_err().to_string(),
            "expected an expression, found end of input",
        );
    }
}
