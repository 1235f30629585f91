//! Transact-SQL Dialect
//!
//! Bracket identifier quoting is already handled by the scanner; this
//! dialect adds the T-SQL reserved words missing from the standard table.

use super::{standard_keyword_kind, Dialect, KeywordKind};

/// Microsoft SQL Server (Transact-SQL) dialect
pub struct TSQLDialect;

const TSQL_KEYWORDS: &[&str] = &[
    "CLUSTERED",
    "DATETIME2",
    "EXEC",
    "IDENTITY",
    "NOLOCK",
    "NONCLUSTERED",
    "NVARCHAR",
    "PIVOT",
    "ROWGUIDCOL",
    "TOP",
    "UNPIVOT",
];

impl Dialect for TSQLDialect {
    fn classify(&self, keyword: &str) -> KeywordKind {
        match standard_keyword_kind(keyword) {
            KeywordKind::Unmatched if TSQL_KEYWORDS.contains(&keyword) => KeywordKind::Matched,
            kind => kind,
        }
    }
}
