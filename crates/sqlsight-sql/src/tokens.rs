//! Token types for SQL tokenization
//!
//! This module defines the token data model produced by the tokenizer:
//! source positions, the closed set of token kinds, and the structured
//! word payload carried by keyword and identifier tokens.

use crate::dialects::KeywordKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in the source SQL.
///
/// Both `line` and `col` are 1-based. Columns advance by one per ordinary
/// character and by a fixed four per tab character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub col: usize,
}

impl Pos {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// The position of the first character of any input.
    pub fn start() -> Self {
        Self::new(1, 1)
    }
}

impl Default for Pos {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// All token kinds emitted by the tokenizer.
///
/// Whitespace and comments are emitted as ordinary tokens rather than
/// skipped; editor features downstream rely on every source character being
/// covered by some token's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// A single whitespace character (`\r\n` collapses into one token)
    Whitespace,
    /// A `--` or `/* */` comment, markers stripped
    Comment,
    /// An unsigned numeric literal, e.g. `123` or `1.5`
    Number,
    /// A character that matched no other production
    Char,
    /// Single quoted string: `'string'`
    SingleQuotedString,
    /// National string literal: `N'string'`
    NationalStringLiteral,
    /// A keyword or (optionally quoted) identifier, carrying [`SQLWord`]
    #[serde(rename = "SQL_KEYWORD")]
    SQLKeyword,
    Comma,
    Semicolon,
    Colon,
    /// `::`, the cast operator
    DoubleColon,
    Period,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Plus,
    Minus,
    Mult,
    Div,
    Mod,
    Eq,
    /// `<>` or `!=`
    Neq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    Backslash,
    Ampersand,
    Pipe,
    Caret,
    Tilde,
    ExclamationMark,
    AtSign,
    /// `?`, a positional parameter marker
    Placeholder,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Whitespace => "Whitespace",
            TokenKind::Comment => "Comment",
            TokenKind::Number => "Number",
            TokenKind::Char => "Char",
            TokenKind::SingleQuotedString => "SingleQuotedString",
            TokenKind::NationalStringLiteral => "NationalStringLiteral",
            TokenKind::SQLKeyword => "SQLKeyword",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::DoubleColon => "::",
            TokenKind::Period => ".",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Mult => "*",
            TokenKind::Div => "/",
            TokenKind::Mod => "%",
            TokenKind::Eq => "=",
            TokenKind::Neq => "<>",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::LtEq => "<=",
            TokenKind::GtEq => ">=",
            TokenKind::Backslash => "\\",
            TokenKind::Ampersand => "&",
            TokenKind::Pipe => "|",
            TokenKind::Caret => "^",
            TokenKind::Tilde => "~",
            TokenKind::ExclamationMark => "!",
            TokenKind::AtSign => "@",
            TokenKind::Placeholder => "?",
        };
        f.write_str(name)
    }
}

/// The structured payload of a [`TokenKind::SQLKeyword`] token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SQLWord {
    /// The surface form as it appeared in source, without enclosing quotes
    pub value: String,
    /// The ASCII-uppercased form used for dialect lookup
    pub keyword: String,
    /// The opening quote character when the identifier was quoted:
    /// `"`, `` ` `` or `[`
    pub quote_style: Option<char>,
    /// The dialect classification of `keyword`
    pub kind: KeywordKind,
}

impl SQLWord {
    /// The closing delimiter paired with an opening quote character.
    pub fn matching_end_quote(quote_style: char) -> char {
        match quote_style {
            '[' => ']',
            other => other,
        }
    }
}

impl fmt::Display for SQLWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quote_style {
            Some(quote) => write!(
                f,
                "{}{}{}",
                quote,
                self.value,
                Self::matching_end_quote(quote)
            ),
            None => f.write_str(&self.value),
        }
    }
}

/// The body of a [`TokenKind::Comment`] token, tagged with the delimiter
/// style that produced it so the original lexeme can be reconstructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SQLComment {
    /// `--` to end of line
    Line(String),
    /// `/* ... */`
    Block(String),
}

impl SQLComment {
    /// The comment body without its markers.
    pub fn text(&self) -> &str {
        match self {
            SQLComment::Line(text) | SQLComment::Block(text) => text,
        }
    }
}

impl fmt::Display for SQLComment {
    /// Restores the comment markers. The newline terminating a line comment
    /// is not part of the comment token, so none is appended here.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SQLComment::Line(text) => write!(f, "--{text}"),
            SQLComment::Block(text) => write!(f, "/*{text}*/"),
        }
    }
}

/// The value carried by a token: a plain lexeme, a structured word for
/// keyword/identifier tokens, or a delimiter-tagged comment body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Text(String),
    Word(SQLWord),
    Comment(SQLComment),
}

/// A token in the SQL token stream.
///
/// `from` and `to` delimit the half-open source range `[from, to)` covered
/// by the token; `to` is the position of the first character after it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's value
    pub value: TokenValue,
    /// Position of the first character of the token
    pub from: Pos,
    /// Position one past the last character of the token
    pub to: Pos,
}

impl Token {
    /// Create a token carrying a plain text value.
    pub fn new(kind: TokenKind, value: impl Into<String>, from: Pos, to: Pos) -> Self {
        Self {
            kind,
            value: TokenValue::Text(value.into()),
            from,
            to,
        }
    }

    /// Create a keyword/identifier token carrying a [`SQLWord`].
    pub fn word(word: SQLWord, from: Pos, to: Pos) -> Self {
        Self {
            kind: TokenKind::SQLKeyword,
            value: TokenValue::Word(word),
            from,
            to,
        }
    }

    /// Create a comment token carrying a [`SQLComment`].
    pub fn comment(comment: SQLComment, from: Pos, to: Pos) -> Self {
        Self {
            kind: TokenKind::Comment,
            value: TokenValue::Comment(comment),
            from,
            to,
        }
    }

    /// The word payload, if this is a keyword/identifier token.
    pub fn as_word(&self) -> Option<&SQLWord> {
        match &self.value {
            TokenValue::Word(word) => Some(word),
            _ => None,
        }
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }

    pub fn is_comment(&self) -> bool {
        self.kind == TokenKind::Comment
    }

    /// Reconstruct the source lexeme for this token, restoring the
    /// delimiters stripped from string, identifier and comment values.
    pub fn text(&self) -> String {
        match &self.value {
            TokenValue::Word(word) => word.to_string(),
            TokenValue::Comment(comment) => comment.to_string(),
            TokenValue::Text(text) => match self.kind {
                TokenKind::SingleQuotedString => format!("'{text}'"),
                TokenKind::NationalStringLiteral => format!("N'{text}'"),
                _ => text.clone(),
            },
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
