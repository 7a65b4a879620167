//! CLI tool to inspect, validate, and format Rill source files.

use std::fs;
use std::process::ExitCode;

use rill_syntax::Stmt;

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        eprintln!("Usage: rill <command> [files...]");
        eprintln!();
        eprintln!("Commands:");
        eprintln!("  tokens    Print the token stream of Rill source file(s)");
        eprintln!("  validate  Check if Rill source file(s) parse");
        eprintln!("  fmt       Format Rill source file(s) and print to stdout");
        eprintln!("  check     Check if Rill source file(s) are formatted");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  rill tokens main.rill");
        eprintln!("  rill validate main.rill");
        eprintln!("  rill fmt main.rill");
        eprintln!("  rill check main.rill");
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    let files = &args[2..];

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in files {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        match command {
            "tokens" => match rill_syntax::tokenize(&content) {
                Ok(tokens) => {
                    for token in &tokens {
                        println!(
                            "{}:{}\t{}\t{:?}",
                            token.span.line, token.span.column, token.kind, token.lexeme
                        );
                    }
                }
                Err(e) => {
                    eprintln!("{path}: {e}");
                    had_error = true;
                }
            },
            "validate" => match rill_syntax::parse_source(&content) {
                Ok(program) => {
                    let statements = program.len();
                    let functions = program
                        .iter()
                        .filter(|s| matches!(s, Stmt::Function { .. }))
                        .count();
                    eprintln!(
                        "{path}: valid ({statements} top-level statement(s), \
                         {functions} function(s))"
                    );
                }
                Err(e) => {
                    eprintln!("{path}: {e}");
                    had_error = true;
                }
            },
            "fmt" => match rill_syntax::parse_source(&content) {
                Ok(program) => {
                    print!("{}", rill_syntax::format(&program));
                }
                Err(e) => {
                    eprintln!("{path}: {e}");
                    had_error = true;
                }
            },
            "check" => match rill_syntax::parse_source(&content) {
                Ok(program) => {
                    let formatted = rill_syntax::format(&program);
                    if formatted == content {
                        eprintln!("{path}: formatted");
                    } else {
                        eprintln!("{path}: not formatted");
                        had_error = true;
                    }
                }
                Err(e) => {
                    eprintln!("{path}: {e}");
                    had_error = true;
                }
            },
            _ => {
                eprintln!("Unknown command: {command}");
                return ExitCode::from(2);
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
