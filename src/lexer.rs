use std::fmt;

use crate::token::{Span, Token, TokenKind};
use crate::vocab;

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Character that cannot start any token.
    UnexpectedCharacter(char),
    /// String literal with no closing quote before end of input.
    UnterminatedString,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter(ch) => {
                write!(f, "unexpected character: {ch}")
            }
            Self::UnterminatedString => {
                write!(f, "unterminated string")
            }
        }
    }
}

/// Error produced during lexing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", span.line, span.column)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// Tokenize Rill source text into a sequence of tokens.
///
/// The returned sequence always ends with exactly one `Eof` token.
///
/// # Errors
///
/// Returns `LexError` on an unrecognized character or an unterminated
/// string literal. Scanning stops at the first error; no partial
/// sequence is returned.
#[tracing::instrument(skip_all, fields(source_len = input.len()))]
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).tokenize()
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
}

impl Lexer {
    fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let start = if chars.first() == Some(&'\u{FEFF}') {
            1
        } else {
            0
        };
        Self {
            chars,
            pos: start,
            line: 1,
            col: 1,
        }
    }

    fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            match ch {
                c if c.is_whitespace() => self.advance(),
                c if vocab::is_single_char_operator(c) => {
                    tokens.push(self.read_operator());
                }
                c if c.is_ascii_digit() => {
                    tokens.push(self.read_number());
                }
                '"' => {
                    tokens.push(self.read_string()?);
                }
                c if c.is_ascii_alphabetic() || c == '_' => {
                    tokens.push(self.read_word());
                }
                c if vocab::is_punctuation(c) => {
                    tokens.push(self.make_token(TokenKind::Punctuation, c.to_string()));
                    self.advance();
                }
                c => {
                    return Err(LexError {
                        kind: LexErrorKind::UnexpectedCharacter(c),
                        span: self.span(),
                    });
                }
            }
        }

        tokens.push(self.make_token(TokenKind::Eof, String::new()));
        Ok(tokens)
    }

    const fn span(&self) -> Span {
        Span {
            line: self.line,
            column: self.col,
        }
    }

    const fn make_token(&self, kind: TokenKind, lexeme: String) -> Token {
        Token {
            kind,
            lexeme,
            span: self.span(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn advance(&mut self) {
        if self.pos < self.chars.len() {
            if self.chars[self.pos] == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
            self.pos += 1;
        }
    }

    /// Maximal munch: the two-character combination is tried against the
    /// multi-character operator table before settling for one character.
    fn read_operator(&mut self) -> Token {
        let span = self.span();
        let first = self.chars[self.pos];

        if let Some(second) = self.peek_at(1) {
            let pair = format!("{first}{second}");
            if vocab::is_multi_char_operator(&pair) {
                self.advance();
                self.advance();
                return Token {
                    kind: TokenKind::Operator,
                    lexeme: pair,
                    span,
                };
            }
        }

        self.advance();
        Token {
            kind: TokenKind::Operator,
            lexeme: first.to_string(),
            span,
        }
    }

    /// Digits, then a fractional part only when a `.` is directly followed
    /// by another digit. A trailing `.` is left for the punctuation rule.
    fn read_number(&mut self) -> Token {
        let span = self.span();
        let start = self.pos;

        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        let mut is_float = false;
        if self.peek() == Some('.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
            is_float = true;
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let lexeme: String = self.chars[start..self.pos].iter().collect();
        Token {
            kind: if is_float {
                TokenKind::Float
            } else {
                TokenKind::Integer
            },
            lexeme,
            span,
        }
    }

    /// Content is taken verbatim, newlines included; no escape sequences.
    /// The recorded position is the first content character.
    fn read_string(&mut self) -> Result<Token, LexError> {
        self.advance(); // skip opening quote
        let span = self.span();
        let start = self.pos;

        loop {
            match self.peek() {
                None => {
                    return Err(LexError {
                        kind: LexErrorKind::UnterminatedString,
                        span,
                    });
                }
                Some('"') => break,
                Some(_) => self.advance(),
            }
        }

        let lexeme: String = self.chars[start..self.pos].iter().collect();
        self.advance(); // skip closing quote

        Ok(Token {
            kind: TokenKind::String,
            lexeme,
            span,
        })
    }

    fn read_word(&mut self) -> Token {
        let span = self.span();
        let start = self.pos;

        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let word: String = self.chars[start..self.pos].iter().collect();
        let kind = if vocab::is_keyword(&word) {
            TokenKind::Keyword
        } else if vocab::is_textual_operator(&word) {
            TokenKind::Operator
        } else if word == "true" || word == "false" {
            TokenKind::Boolean
        } else {
            TokenKind::Identifier
        };

        Token {
            kind,
            lexeme: word,
            span,
        }
    }
}
