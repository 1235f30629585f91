//! MySQL Dialect
//!
//! Backtick identifier quoting is already handled by the scanner; this
//! dialect adds the MySQL reserved words missing from the standard table.

use super::{standard_keyword_kind, Dialect, KeywordKind};

/// MySQL dialect
pub struct MySQLDialect;

const MYSQL_KEYWORDS: &[&str] = &[
    "AUTO_INCREMENT",
    "BINARY",
    "CHANGE",
    "DATABASES",
    "DIV",
    "DUAL",
    "ENGINE",
    "FULLTEXT",
    "IGNORE",
    "LOCK",
    "LOW_PRIORITY",
    "MEDIUMINT",
    "REGEXP",
    "RLIKE",
    "SHOW",
    "STRAIGHT_JOIN",
    "TINYINT",
    "UNLOCK",
    "UNSIGNED",
    "USE",
    "ZEROFILL",
];

impl Dialect for MySQLDialect {
    fn classify(&self, keyword: &str) -> KeywordKind {
        match standard_keyword_kind(keyword) {
            KeywordKind::Unmatched if MYSQL_KEYWORDS.contains(&keyword) => KeywordKind::Matched,
            kind => kind,
        }
    }
}
