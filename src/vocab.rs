//! Fixed vocabulary of the Rill language.
//!
//! Every table is compile-time constant data, referenced read-only by the
//! lexer and parser. Changing the language surface means changing these
//! tables, not the scanning or parsing logic.

/// Reserved words.
pub const KEYWORDS: &[&str] = &[
    "fn", "int", "float", "string", "bool", "arr", "if", "else", "while", "return",
];

/// Word-shaped operators, lexed as `Operator` tokens.
pub const TEXTUAL_OPERATORS: &[&str] = &["and", "or", "not", "is"];

/// Type keywords accepted in variable declarations, parameter lists, and
/// return types. `arr` is reserved but not declarable.
pub const DECLARABLE_TYPES: &[&str] = &["int", "float", "bool", "string"];

/// Characters that can begin a symbolic operator.
pub const SINGLE_CHAR_OPERATORS: &[char] = &[
    '+', '-', '*', '/', '%', '=', '!', '<', '>', '&', '|', '^',
];

/// Two-character operators, tried by maximal munch before falling back to a
/// single-character operator.
pub const MULTI_CHAR_OPERATORS: &[&str] = &[
    "==", "!=", "<=", ">=", "&&", "||", "++", "--", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=",
    "->",
];

/// Single-character punctuation.
pub const PUNCTUATION: &[char] = &['(', ')', '{', '}', ',', '.', '[', ']'];

#[must_use]
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

#[must_use]
pub fn is_textual_operator(word: &str) -> bool {
    TEXTUAL_OPERATORS.contains(&word)
}

#[must_use]
pub fn is_declarable_type(word: &str) -> bool {
    DECLARABLE_TYPES.contains(&word)
}

#[must_use]
pub fn is_single_char_operator(c: char) -> bool {
    SINGLE_CHAR_OPERATORS.contains(&c)
}

#[must_use]
pub fn is_multi_char_operator(pair: &str) -> bool {
    MULTI_CHAR_OPERATORS.contains(&pair)
}

#[must_use]
pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(&c)
}
