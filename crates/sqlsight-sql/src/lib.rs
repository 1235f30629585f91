//! SqlSight SQL front end - tokenization for the sqlsight language server
//!
//! This crate turns a SQL string into a stream of typed tokens carrying
//! precise source positions, which the language server's parsing,
//! completion, hover and diagnostics stages consume.
//!
//! # Architecture
//!
//! Tokenization is a single left-to-right pass:
//! 1. A character source feeds the scanner one character at a time, with a
//!    single slot of pushback.
//! 2. The scanner selects a lexical production per leading character and
//!    emits tokens, consulting a [`dialects::Dialect`] to classify words.
//! 3. A position cursor tracks 1-based line/column so every token records
//!    the half-open source range it covers.
//!
//! Whitespace and comments are emitted as tokens rather than discarded;
//! editor features need every source character accounted for.
//!
//! # Example
//!
//! ```
//! use sqlsight_sql::{tokenize, DialectType, KeywordKind, TokenKind};
//!
//! let tokens = tokenize("SELECT id FROM account", DialectType::Generic).unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::SQLKeyword);
//! assert_eq!(tokens[0].as_word().unwrap().kind, KeywordKind::DML);
//! ```

pub mod dialects;
pub mod error;
pub mod tokenizer;
pub mod tokens;

pub use dialects::{Dialect, DialectType, KeywordKind};
pub use error::{Error, Result};
pub use tokenizer::Tokenizer;
pub use tokens::{Pos, SQLComment, SQLWord, Token, TokenKind, TokenValue};

/// Tokenize a SQL string with the given dialect.
///
/// # Arguments
/// * `sql` - The SQL string to tokenize
/// * `dialect` - The dialect used for keyword classification
///
/// # Returns
/// The ordered token vector, or the first lexical error encountered.
///
/// # Example
/// ```
/// use sqlsight_sql::{tokenize, DialectType};
///
/// let tokens = tokenize("SELECT 1", DialectType::Generic).unwrap();
/// assert_eq!(tokens.len(), 3);
/// ```
pub fn tokenize(sql: &str, dialect: DialectType) -> Result<Vec<Token>> {
    Tokenizer::new(sql, dialect.dialect()).tokenize()
}
