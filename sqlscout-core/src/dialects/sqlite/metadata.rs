//! Catalog queries for SQLite schema introspection.
//!
//! SQLite has no `information_schema`; both queries here use the
//! backend-native pragma table-valued functions instead:
//! - `pragma_table_list` (SQLite >= 3.37) lists tables per attached
//!   database and carries a `schema` column
//! - `pragma_table_info('t')` lists the columns of one table
//!
//! Internal `sqlite_*` tables are excluded from table listings.

use crate::dialects::helpers::escape_string_literal;

/// SQL listing the tables of the given attached database.
///
/// The schema name is matched case-insensitively. `filter` is an optional
/// LIKE pattern on the table name; `limit` caps the row count.
pub fn table_metadata_query(schema: &str, limit: Option<u64>, filter: Option<&str>) -> String {
    let mut sql = format!(
        "SELECT name\nFROM pragma_table_list\nWHERE lower(schema) = lower('{}')\n  AND type = 'table'\n  AND name NOT LIKE 'sqlite_%'",
        escape_string_literal(schema)
    );

    if let Some(pattern) = filter {
        sql.push_str(&format!(
            "\n  AND name LIKE '{}'",
            escape_string_literal(pattern)
        ));
    }
    if let Some(limit) = limit {
        sql.push_str(&format!("\nLIMIT {}", limit));
    }

    sql
}

/// SQL listing each column of `table_name` with its declared type and
/// nullability. A zero `notnull` flag renders as `'YES'` (nullable), any
/// non-zero flag as `'NO'`.
pub fn column_metadata_query(table_name: &str) -> String {
    format!(
        "SELECT name, type,\n  CASE \"notnull\" WHEN 0 THEN 'YES' ELSE 'NO' END AS is_nullable\nFROM pragma_table_info('{}')",
        escape_string_literal(table_name)
    )
}
