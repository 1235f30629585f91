//! SQL dialects
//!
//! A dialect supplies the two things the tokenizer cannot decide on its own:
//! how to classify a word once it has been scanned, and which characters may
//! start or continue an unquoted identifier. Concrete dialects are plain unit
//! structs; the trait's default methods implement the standard SQL rules, so
//! a dialect only overrides what actually differs.
//!
//! # Example
//!
//! ```
//! use sqlsight_sql::dialects::{Dialect, KeywordKind};
//!
//! /// A dialect that treats `-` as an identifier character.
//! struct KebabDialect;
//!
//! impl Dialect for KebabDialect {
//!     fn is_identifier_part(&self, ch: char) -> bool {
//!         ch.is_ascii_alphanumeric() || ch == '_' || ch == '-'
//!     }
//! }
//!
//! assert_eq!(KebabDialect.classify("SELECT"), KeywordKind::DML);
//! ```

mod generic;
mod mysql;
mod postgres;
mod tsql;

pub use generic::GenericDialect;
pub use mysql::MySQLDialect;
pub use postgres::PostgreSQLDialect;
pub use tsql::TSQLDialect;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Classification of a scanned word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KeywordKind {
    /// A data manipulation statement verb (SELECT, INSERT, ...)
    #[serde(rename = "DML")]
    DML,
    /// A data definition statement verb (CREATE, DROP, ...)
    #[serde(rename = "DDL")]
    DDL,
    /// A reserved word outside the DML/DDL verb sets
    Matched,
    /// An ordinary identifier
    Unmatched,
}

/// Keyword classification and identifier rules for one SQL dialect.
///
/// `classify` is consulted once per scanned word, after the surface form has
/// been ASCII-uppercased. Quoted identifiers are classified the same way as
/// bare words.
pub trait Dialect {
    /// Classify an uppercased word.
    fn classify(&self, keyword: &str) -> KeywordKind {
        standard_keyword_kind(keyword)
    }

    /// Whether `ch` may start an unquoted identifier.
    fn is_identifier_start(&self, ch: char) -> bool {
        ch.is_ascii_alphabetic() || ch == '_'
    }

    /// Whether `ch` may continue an unquoted identifier.
    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_ascii_alphanumeric() || ch == '_'
    }
}

/// The set of supported dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectType {
    #[default]
    Generic,
    MySQL,
    PostgreSQL,
    TSQL,
}

impl DialectType {
    /// The dialect implementation for this type.
    pub fn dialect(self) -> &'static dyn Dialect {
        match self {
            DialectType::Generic => &GenericDialect,
            DialectType::MySQL => &MySQLDialect,
            DialectType::PostgreSQL => &PostgreSQLDialect,
            DialectType::TSQL => &TSQLDialect,
        }
    }
}

/// Look up a word in the standard keyword table.
pub fn standard_keyword_kind(keyword: &str) -> KeywordKind {
    STANDARD_KEYWORDS
        .get(keyword)
        .copied()
        .unwrap_or(KeywordKind::Unmatched)
}

static STANDARD_KEYWORDS: LazyLock<HashMap<&'static str, KeywordKind>> = LazyLock::new(|| {
    let mut keywords = HashMap::new();
    for kw in DML_KEYWORDS {
        keywords.insert(*kw, KeywordKind::DML);
    }
    for kw in DDL_KEYWORDS {
        keywords.insert(*kw, KeywordKind::DDL);
    }
    for kw in RESERVED_KEYWORDS {
        keywords.insert(*kw, KeywordKind::Matched);
    }
    keywords
});

const DML_KEYWORDS: &[&str] = &["SELECT", "INSERT", "UPDATE", "DELETE"];

const DDL_KEYWORDS: &[&str] = &["CREATE", "DROP", "ALTER", "TRUNCATE"];

const RESERVED_KEYWORDS: &[&str] = &[
    "ALL",
    "AND",
    "ANY",
    "AS",
    "ASC",
    "BEGIN",
    "BETWEEN",
    "BIGINT",
    "BOOLEAN",
    "BOTH",
    "BY",
    "CASE",
    "CAST",
    "CHAR",
    "CHARACTER",
    "CHECK",
    "COLLATE",
    "COLUMN",
    "COMMIT",
    "CONSTRAINT",
    "COUNT",
    "CROSS",
    "CURRENT",
    "CURRENT_DATE",
    "CURRENT_TIME",
    "CURRENT_TIMESTAMP",
    "CURRENT_USER",
    "DATE",
    "DECIMAL",
    "DEFAULT",
    "DESC",
    "DISTINCT",
    "DOUBLE",
    "ELSE",
    "END",
    "EXCEPT",
    "EXISTS",
    "EXTRACT",
    "FALSE",
    "FETCH",
    "FILTER",
    "FLOAT",
    "FOR",
    "FOREIGN",
    "FROM",
    "FULL",
    "GRANT",
    "GROUP",
    "HAVING",
    "IN",
    "INDEX",
    "INNER",
    "INT",
    "INTEGER",
    "INTERSECT",
    "INTERVAL",
    "INTO",
    "IS",
    "JOIN",
    "KEY",
    "LEADING",
    "LEFT",
    "LIKE",
    "LIMIT",
    "LOCALTIME",
    "LOCALTIMESTAMP",
    "NATURAL",
    "NOT",
    "NULL",
    "NUMERIC",
    "OFFSET",
    "ON",
    "ONLY",
    "OR",
    "ORDER",
    "OUTER",
    "OVER",
    "OVERLAPS",
    "PARTITION",
    "PRECISION",
    "PRIMARY",
    "RANGE",
    "REAL",
    "REFERENCES",
    "RELEASE",
    "REVOKE",
    "RIGHT",
    "ROLLBACK",
    "ROW",
    "ROWS",
    "SAVEPOINT",
    "SESSION_USER",
    "SET",
    "SMALLINT",
    "SOME",
    "SYMMETRIC",
    "TABLE",
    "TEXT",
    "THEN",
    "TIME",
    "TIMESTAMP",
    "TO",
    "TRAILING",
    "TRANSACTION",
    "TRUE",
    "UNION",
    "UNIQUE",
    "UNKNOWN",
    "USING",
    "VALUES",
    "VARCHAR",
    "VARYING",
    "VIEW",
    "WHEN",
    "WHERE",
    "WINDOW",
    "WITH",
    "WITHIN",
];
