// lang/src/surface.rs
use crate::lexer::Token;

/// Render a token sequence back to canonical display text.
///
/// Each token is preceded by a single space, the first one included —
/// the visualizer's "reconstructed" debug line depends on that exact
/// shape. This is a function of the tokens only, never of the original
/// string's whitespace, and it does not re-derive any structure.
pub fn tokens_to_string(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push(' ');
        out.push_str(token.glyph());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    #[test]
    fn reconstruction_goldens() {
        let cases = vec![
            ("", ""),
            ("x", " x"),
            ("λx. x", " λ x . x"),
            ("\\f.%x. f (f x)", " λ f . λ x . f ( f x )"),
            ("(x y) z", " ( x y ) z"),
        ];
        for (input, expected) in cases {
            let tokens = tokenize(input).expect("tokenize");
            assert_eq!(tokens_to_string(&tokens), expected, "input: {input}");
        }
    }

    #[test]
    fn reconstruction_ignores_source_whitespace() {
        let a = tokenize("x  y").unwrap();
        let b = tokenize(" x\ny ").unwrap();
        assert_eq!(tokens_to_string(&a), tokens_to_string(&b));
        assert_eq!(tokens_to_string(&a), " x y");
    }
}
