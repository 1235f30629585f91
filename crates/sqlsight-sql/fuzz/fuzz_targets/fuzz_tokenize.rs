#![no_main]

use libfuzzer_sys::fuzz_target;
use sqlsight_sql::{tokenize, DialectType};

fuzz_target!(|data: &[u8]| {
    if let Ok(sql) = std::str::from_utf8(data) {
        let dialects = [
            DialectType::Generic,
            DialectType::MySQL,
            DialectType::PostgreSQL,
            DialectType::TSQL,
        ];

        for dialect in dialects {
            // The tokenizer should never panic, regardless of input.
            let _ = tokenize(sql, dialect);
        }
    }
});
