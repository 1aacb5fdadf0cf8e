//! Shared formatter errors and helpers.

use thiserror::Error;

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Constant name is not a valid JavaScript identifier.
    #[error("Invalid constant name: {0:?}")]
    InvalidIdentifier(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Words that cannot name a binding in strict-mode ECMAScript modules.
const RESERVED_WORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Returns true if `name` is a plain ASCII JavaScript identifier.
///
/// The first character must be a letter, `_` or `$`; the rest may also
/// contain digits. Reserved words are rejected.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let is_start = |c: char| c.is_ascii_alphabetic() || c == '_' || c == '$';
    is_start(first)
        && chars.all(|c| is_start(c) || c.is_ascii_digit())
        && !RESERVED_WORDS.contains(&name)
}
