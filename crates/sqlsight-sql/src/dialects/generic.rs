//! Generic SQL Dialect

use super::Dialect;

/// Generic SQL dialect (ANSI SQL)
pub struct GenericDialect;

impl Dialect for GenericDialect {}
