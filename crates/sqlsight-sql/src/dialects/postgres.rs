//! PostgreSQL Dialect
//!
//! Adds PostgreSQL reserved words and accepts `$` inside unquoted
//! identifiers.

use super::{standard_keyword_kind, Dialect, KeywordKind};

/// PostgreSQL dialect
pub struct PostgreSQLDialect;

const POSTGRES_KEYWORDS: &[&str] = &[
    "ANALYZE",
    "CONCURRENTLY",
    "CONFLICT",
    "FREEZE",
    "ILIKE",
    "ISNULL",
    "LATERAL",
    "NOTNULL",
    "RETURNING",
    "SIMILAR",
    "VACUUM",
    "VERBOSE",
];

impl Dialect for PostgreSQLDialect {
    fn classify(&self, keyword: &str) -> KeywordKind {
        match standard_keyword_kind(keyword) {
            KeywordKind::Unmatched if POSTGRES_KEYWORDS.contains(&keyword) => KeywordKind::Matched,
            kind => kind,
        }
    }

    fn is_identifier_part(&self, ch: char) -> bool {
        ch.is_ascii_alphanumeric() || ch == '_' || ch == '$'
    }
}
