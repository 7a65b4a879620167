//! Rill lexer, parser, and formatter.
//!
//! The front end of the Rill language: a scanner that turns source text
//! into a position-tagged token stream, a recursive-descent parser that
//! builds a typed AST from that stream, and a formatter that renders the
//! AST back to canonical source text.
//!
//! # Quick start
//!
//! ## Tokenize and parse a program
//!
//! ```
//! use rill_syntax::{tokenize, parse, Stmt};
//!
//! let source = "int x = 1\nx = x + 2\n";
//! let tokens = tokenize(source).unwrap();
//! let program = parse(&tokens).unwrap();
//! assert_eq!(program.len(), 2);
//! assert!(matches!(program[0], Stmt::VarDecl { .. }));
//! ```
//!
//! ## Parse and re-format in one step
//!
//! ```
//! use rill_syntax::{parse_source, format};
//!
//! let source = "fn add int(int a, int b) {\n\treturn a + b\n}\n";
//! let program = parse_source(source).unwrap();
//! assert_eq!(format(&program), source);
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod ast;
pub mod formatter;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod vocab;

pub use ast::{Expr, Param, Stmt};
pub use formatter::format;
pub use lexer::{LexError, LexErrorKind, tokenize};
pub use parser::{ParseError, ParseErrorKind, parse};
pub use token::{Span, Token, TokenKind};

/// Unified error type covering both lexing and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A lexer error.
    #[error("{0}")]
    Lex(#[from] LexError),
    /// A parser error.
    #[error("{0}")]
    Parse(#[from] ParseError),
}

/// Tokenize and parse a Rill source string in one step.
pub fn parse_source(input: &str) -> Result<Vec<Stmt>, Error> {
    let tokens = tokenize(input)?;
    Ok(parse(&tokens)?)
}
