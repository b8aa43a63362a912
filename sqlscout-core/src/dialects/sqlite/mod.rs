//! SQLite dialect implementation.
//!
//! # Module Structure
//! - `connection`: dbfile validation and `AnyPool` creation
//! - `metadata`: catalog queries via `pragma_table_list` / `pragma_table_info`
//! - `type_classification`: declared-type allow-lists
//! - `expressions`: SQL expression fragments, with approximations where
//!   SQLite has no native operator
//!
//! # SQLite-Specific Notes
//! - Schema introspection uses the backend-native pragma table-valued
//!   functions; SQLite has no `information_schema`.
//! - The "schema" in SQLite terms is the attached database name, `main`
//!   by default.
//! - Supports both file-based and in-memory databases; a single pooled
//!   connection is sufficient (and required for `:memory:`).

pub mod connection;
pub mod expressions;
pub mod metadata;
pub mod type_classification;


use super::config::ConnectionParams;
use super::{BackendType, Dialect, NumericTextFormat, SqlOperation};
use crate::Result;
use async_trait::async_trait;
use sqlx::AnyPool;
use std::collections::BTreeMap;

/// Default database file used in generated example configuration.
const DEFAULT_DBFILE: &str = "example.db";

/// Environment variable holding the database file path.
const ENV_DBFILE: &str = "SQLITE_DBFILE";

/// Dialect adapter for SQLite.
///
/// Holds the database file path and target schema read at construction
/// time; immutable afterwards. Construction performs no I/O — the file is
/// first touched by [`Dialect::open_connection`].
#[derive(Debug, Clone)]
pub struct SqliteDialect {
    dbfile: String,
    schema: String,
}

impl SqliteDialect {
    /// Required connection field: path to the database file.
    pub const FIELD_DBFILE: &'static str = "dbfile";

    /// Optional connection field: attached database to scan.
    pub const FIELD_SCHEMA: &'static str = "schema";

    /// Constructs the dialect from connection parameters.
    ///
    /// # Errors
    /// Returns a configuration error when `dbfile` is missing or empty, or
    /// when it names a non-SQLite connection URL.
    pub fn from_params(params: &ConnectionParams) -> Result<Self> {
        let dbfile = params.required(Self::FIELD_DBFILE)?.to_string();
        connection::validate_dbfile(&dbfile)?;

        let schema = params
            .optional(Self::FIELD_SCHEMA)
            .unwrap_or("main")
            .to_string();

        Ok(Self { dbfile, schema })
    }

    /// Path (or `:memory:` designator) of the database file.
    pub fn dbfile(&self) -> &str {
        &self.dbfile
    }

    /// Whether the dialect targets an in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.dbfile.contains(":memory:") || self.dbfile.contains("mode=memory")
    }
}

#[async_trait]
impl Dialect for SqliteDialect {
    fn backend_type(&self) -> BackendType {
        BackendType::SQLite
    }

    fn schema(&self) -> &str {
        &self.schema
    }

    fn default_connection_properties(&self, _params: &ConnectionParams) -> serde_json::Value {
        serde_json::json!({
            "type": BackendType::SQLite.tag(),
            "dbfile": DEFAULT_DBFILE,
        })
    }

    fn default_env_vars(&self, params: &ConnectionParams) -> BTreeMap<String, String> {
        let dbfile = params
            .optional(Self::FIELD_DBFILE)
            .unwrap_or(DEFAULT_DBFILE);
        BTreeMap::from([(ENV_DBFILE.to_string(), dbfile.to_string())])
    }

    async fn open_connection(&self) -> Result<AnyPool> {
        connection::open_pool(&self.dbfile).await
    }

    fn table_metadata_query(
        &self,
        schema: &str,
        limit: Option<u64>,
        filter: Option<&str>,
    ) -> String {
        metadata::table_metadata_query(schema, limit, filter)
    }

    fn column_metadata_query(&self, table_name: &str) -> String {
        metadata::column_metadata_query(table_name)
    }

    fn is_text_type(&self, declared_type: &str) -> bool {
        type_classification::is_text_type(declared_type)
    }

    fn is_numeric_type(&self, declared_type: &str) -> bool {
        type_classification::is_numeric_type(declared_type)
    }

    fn is_temporal_type(&self, declared_type: &str) -> bool {
        type_classification::is_temporal_type(declared_type)
    }

    fn supports_operation(&self, operation: SqlOperation) -> bool {
        matches!(
            operation,
            SqlOperation::Length | SqlOperation::Limit | SqlOperation::CastTextToNumber
        )
        // RegexpLike, Variance and StdDev are rendered as approximations;
        // see the expressions module.
    }

    fn expr_regexp_like(&self, expr: &str, pattern: &str) -> String {
        expressions::regexp_like(expr, pattern)
    }

    fn expr_variance(&self, expr: &str) -> String {
        expressions::variance(expr)
    }

    fn expr_stddev(&self, expr: &str) -> String {
        expressions::stddev(expr)
    }

    fn expr_cast_text_to_number(
        &self,
        quoted_column: &str,
        format: NumericTextFormat,
    ) -> String {
        expressions::cast_text_to_number(quoted_column, format)
    }
}
