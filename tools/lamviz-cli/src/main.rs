// tools/lamviz-cli/src/main.rs
// Command-line stand-in for the visualizer: runs the surface-syntax
// pipeline on one expression and prints what the UI would consume.

use std::io::Read;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use lamviz_lang as lang;

#[derive(Parser)]
#[command(name = "lamviz-cli")]
#[command(about = "Inspect the lamviz lambda-calculus surface-syntax pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an expression and print the AST as JSON
    Ast {
        /// Expression text; read from stdin when omitted
        expr: Option<String>,
        /// Print compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Tokenize an expression; print the token JSON and the reconstructed text
    Tokens {
        expr: Option<String>,
    },
    /// Desugar the token stream and print the explicit bracketed rendering
    Normalize {
        expr: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Ast { expr, compact } => {
            let source = read_source(expr)?;
            let ast = lang::parse(&source).map_err(|err| err.to_string())?;
            let json = if compact {
                serde_json::to_string(&ast)
            } else {
                serde_json::to_string_pretty(&ast)
            };
            println!("{}", json.map_err(|err| err.to_string())?);
        }
        Commands::Tokens { expr } => {
            let source = read_source(expr)?;
            let tokens = lang::tokenize(&source).map_err(|err| err.to_string())?;
            let json = serde_json::to_string(&tokens).map_err(|err| err.to_string())?;
            println!("{json}");
            println!("{}", lang::tokens_to_string(&tokens));
        }
        Commands::Normalize { expr } => {
            let source = read_source(expr)?;
            let rendered = lang::normalized_form(&source).map_err(|err| err.to_string())?;
            println!("{rendered}");
        }
    }
    Ok(())
}

fn read_source(expr: Option<String>) -> Result<String, String> {
    match expr {
        Some(expr) => Ok(expr),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|err| err.to_string())?;
            Ok(buf)
        }
    }
}
