// lang/examples/parse_and_dump.rs
use lamviz_lang::{normalized_form, parse, tokenize, tokens_to_string};

fn main() {
    let source = "λf x. f (f x)";
    println!("--- source ---\n{source}");

    let tokens = tokenize(source).expect("tokenize failed");
    println!("\n--- reconstructed ---\n{}", tokens_to_string(&tokens));

    let ast = parse(source).expect("parse failed");
    let json = serde_json::to_string_pretty(&ast).expect("serialize failed");
    println!("\n--- ast ---\n{json}");

    let bracketed = normalized_form("a b c").expect("normalize failed");
    println!("\n--- normalized `a b c` ---\n{bracketed}");
}
