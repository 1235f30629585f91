//! Error types for sqlsight-sql

use crate::tokens::Pos;
use thiserror::Error;

/// The result type for tokenization operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during tokenization.
///
/// All variants are fatal: scanning halts at the reported position and no
/// tokens are returned. Unrecognized characters are not errors; they are
/// emitted as `Char` tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// End of input reached while scanning a `'...'` or `N'...'` body
    #[error("Unterminated string literal at line {line}, column {column}")]
    UnterminatedStringLiteral { line: usize, column: usize },

    /// End of input reached before `*/`
    #[error("Unterminated block comment at line {line}, column {column}")]
    UnterminatedBlockComment { line: usize, column: usize },

    /// End of input inside a `"..."`, `` `...` `` or `[...]` identifier
    #[error(
        "Expected close delimiter '{delimiter}' before end of input at line {line}, column {column}"
    )]
    UnterminatedQuotedIdentifier {
        delimiter: char,
        line: usize,
        column: usize,
    },
}

impl Error {
    /// Create an unterminated string literal error
    pub fn unterminated_string(pos: Pos) -> Self {
        Error::UnterminatedStringLiteral {
            line: pos.line,
            column: pos.col,
        }
    }

    /// Create an unterminated block comment error
    pub fn unterminated_block_comment(pos: Pos) -> Self {
        Error::UnterminatedBlockComment {
            line: pos.line,
            column: pos.col,
        }
    }

    /// Create an unterminated quoted identifier error
    pub fn unterminated_quoted_identifier(delimiter: char, pos: Pos) -> Self {
        Error::UnterminatedQuotedIdentifier {
            delimiter,
            line: pos.line,
            column: pos.col,
        }
    }

    /// The position at which scanning stopped.
    pub fn pos(&self) -> Pos {
        match *self {
            Error::UnterminatedStringLiteral { line, column }
            | Error::UnterminatedBlockComment { line, column }
            | Error::UnterminatedQuotedIdentifier { line, column, .. } => Pos::new(line, column),
        }
    }
}
