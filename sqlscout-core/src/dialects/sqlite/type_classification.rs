//! Declared-type classification for SQLite.
//!
//! Classification is a pure lookup against fixed allow-lists of type-name
//! spellings, case-insensitive. Text types match by prefix: numeric
//! arguments in parentheses following a type name (e.g. `VARCHAR(255)`)
//! are ignored by SQLite, so `VARCHAR(255)` and `VARCHAR(2)` declare the
//! same type (<https://www.sqlite.org/datatype3.html>).
//!
//! Names outside all three lists (e.g. `BLOB`, `REAL`) are unrecognized:
//! the scanner skips type-specific metrics for those columns.

/// Text type-name prefixes.
const TEXT_TYPE_PREFIXES: [&str; 8] = [
    "CHARACTER",
    "VARCHAR",
    "VARYING CHARACTER",
    "NCHAR",
    "NATIVE CHARACTER",
    "NVARCHAR",
    "TEXT",
    "CLOB",
];

/// Numeric type names, matched exactly.
const NUMERIC_TYPES: [&str; 9] = [
    "INT",
    "INTEGER",
    "TINYINT",
    "SMALLINT",
    "MEDIUMINT",
    "BIGINT",
    "UNSIGNED BIG INT",
    "INT2",
    "INT8",
];

/// Temporal type names, matched exactly.
const TEMPORAL_TYPES: [&str; 6] = [
    "DATE",
    "DATETIMEOFFSET",
    "DATETIME2",
    "SMALLDATETIME",
    "DATETIME",
    "TIME",
];

/// Whether the declared type name is character data.
pub fn is_text_type(declared_type: &str) -> bool {
    let upper = declared_type.trim().to_uppercase();
    TEXT_TYPE_PREFIXES
        .iter()
        .any(|prefix| upper.starts_with(prefix))
}

/// Whether the declared type name is numeric data.
pub fn is_numeric_type(declared_type: &str) -> bool {
    let upper = declared_type.trim().to_uppercase();
    NUMERIC_TYPES.contains(&upper.as_str())
}

/// Whether the declared type name is date/time data.
pub fn is_temporal_type(declared_type: &str) -> bool {
    let upper = declared_type.trim().to_uppercase();
    TEMPORAL_TYPES.contains(&upper.as_str())
}
