use std::fmt;

/// Source location for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Reserved word (`fn`, `int`, `if`, ...).
    Keyword,
    /// User-defined name.
    Identifier,
    /// Integer literal (`42`).
    Integer,
    /// Floating-point literal (`3.5`).
    Float,
    /// Double-quoted string literal; quotes are not part of the lexeme.
    String,
    /// Boolean literal (`true` or `false`).
    Boolean,
    /// Symbolic or textual operator (`+`, `==`, `and`, ...).
    Operator,
    /// Single-character punctuation (`(`, `)`, `{`, `}`, `,`, `.`, `[`, `]`).
    Punctuation,
    /// End-of-input marker; always the final token, with an empty lexeme.
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Keyword => "keyword",
            Self::Identifier => "identifier",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Operator => "operator",
            Self::Punctuation => "punctuation",
            Self::Eof => "end of input",
        };
        f.write_str(name)
    }
}

/// A single token with its kind, lexeme, and source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
}

impl fmt::Display for Token {
    /// Renders the token the way diagnostics quote it: the lexeme in
    /// single quotes, or `end of input` for the final marker.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => f.write_str("end of input"),
            _ => write!(f, "'{}'", self.lexeme),
        }
    }
}
