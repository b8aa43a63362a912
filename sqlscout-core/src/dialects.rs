//! Dialect contract and registry for translating scan operations into SQL.
//!
//! Every database backend the scanner can talk to gets one [`Dialect`]
//! implementation. A dialect owns the connection parameters for its backend
//! and produces three kinds of output: a live connection handle, SQL text
//! for schema introspection, and SQL expression fragments for the
//! statistical and text operations the scan engine composes into metric
//! queries. Implementations are selected at runtime through a registry
//! keyed on the backend tag.

pub mod config;
pub mod helpers;

#[cfg(feature = "sqlite")]
pub mod sqlite;

use crate::{Result, error::SqlScoutError};
use async_trait::async_trait;
use config::ConnectionParams;
use sqlx::AnyPool;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Database backends a dialect can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendType {
    /// SQLite embedded database
    SQLite,
}

impl BackendType {
    /// The lowercase tag identifying this backend in configuration files
    /// and in the dialect registry.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::SQLite => "sqlite",
        }
    }
}

impl std::fmt::Display for BackendType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for BackendType {
    type Err = SqlScoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::SQLite),
            other => Err(SqlScoutError::unsupported_backend(other)),
        }
    }
}

/// Semantic category of a declared column type.
///
/// Classification works on the type name reported by the backend's own
/// catalog, not on the values stored in the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticType {
    /// Character data (CHAR, VARCHAR, TEXT, ...)
    Text,
    /// Numeric data (INTEGER, BIGINT, ...)
    Numeric,
    /// Date/time data (DATE, DATETIME, TIME, ...)
    Temporal,
}

/// Abstract SQL operations a dialect renders into backend-specific text.
///
/// Used with [`Dialect::supports_operation`] to distinguish operations the
/// backend evaluates exactly from ones the dialect can only approximate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlOperation {
    /// Regular-expression match on a text expression
    RegexpLike,
    /// Character length of a text expression
    Length,
    /// Statistical variance of a numeric expression
    Variance,
    /// Standard deviation of a numeric expression
    StdDev,
    /// Row-limiting clause
    Limit,
    /// Cast of text data to a numeric value
    CastTextToNumber,
}

/// Expected textual layout of numbers stored in a text column, used when
/// casting text to a numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericTextFormat {
    /// Whole numbers only ("42")
    Whole,
    /// Decimal numbers with a point separator ("3.14")
    DecimalPoint,
    /// Decimal numbers with a comma separator ("3,14")
    DecimalComma,
}

/// Contract every backend dialect implements.
///
/// A dialect is created once per scan configuration and is immutable after
/// construction. All string-producing operations are pure and total for
/// well-formed input; only [`Dialect::open_connection`] performs I/O.
/// Expression operands are already-quoted column references or SQL
/// literals supplied by the caller.
///
/// The trait is object-safe so the scanner can hold `Box<dyn Dialect>`
/// resolved from the registry.
#[async_trait]
pub trait Dialect: Send + Sync {
    /// The backend this dialect produces SQL for.
    fn backend_type(&self) -> BackendType;

    /// The target schema the scan is configured against.
    fn schema(&self) -> &str;

    /// Canonical connection properties for this backend, used when
    /// generating example scan configuration. Pure; performs no I/O.
    fn default_connection_properties(&self, params: &ConnectionParams) -> serde_json::Value;

    /// Canonical environment variable assignments for this backend, used
    /// when generating example environment files. Pure; performs no I/O.
    fn default_env_vars(&self, params: &ConnectionParams) -> BTreeMap<String, String>;

    /// Opens a live connection handle from the stored parameters.
    ///
    /// Any underlying driver failure is wrapped into
    /// [`SqlScoutError::Connection`]; the native error type never reaches
    /// callers. The caller owns the returned pool and closes it when the
    /// scan ends.
    ///
    /// # Errors
    /// Returns a connection error if the backend cannot be reached.
    async fn open_connection(&self) -> Result<AnyPool>;

    /// Cheap liveness probe against an open handle.
    ///
    /// # Errors
    /// Returns a connection error if the probe query fails.
    async fn test_connection(&self, pool: &AnyPool) -> Result<()> {
        let value: i64 = sqlx::query_scalar("SELECT 1")
            .fetch_one(pool)
            .await
            .map_err(|e| SqlScoutError::connection_failed("liveness probe failed", e))?;

        if value != 1 {
            return Err(SqlScoutError::configuration(
                "liveness probe returned an unexpected result",
            ));
        }

        Ok(())
    }

    /// SQL listing the tables of `schema`, matched case-insensitively.
    ///
    /// `limit` caps the number of rows returned; `filter` is an optional
    /// LIKE pattern applied to the table name.
    fn table_metadata_query(
        &self,
        schema: &str,
        limit: Option<u64>,
        filter: Option<&str>,
    ) -> String;

    /// SQL listing each column of `table_name` with its name, declared
    /// type, and nullability rendered as `'YES'` / `'NO'`.
    fn column_metadata_query(&self, table_name: &str) -> String;

    /// Whether the declared type name is character data for this backend.
    fn is_text_type(&self, declared_type: &str) -> bool;

    /// Whether the declared type name is numeric data for this backend.
    fn is_numeric_type(&self, declared_type: &str) -> bool;

    /// Whether the declared type name is date/time data for this backend.
    fn is_temporal_type(&self, declared_type: &str) -> bool;

    /// Classifies a declared type name into its semantic category, or
    /// `None` when the backend can report the name but the dialect does
    /// not recognize it.
    fn classify_declared_type(&self, declared_type: &str) -> Option<SemanticType> {
        if self.is_text_type(declared_type) {
            Some(SemanticType::Text)
        } else if self.is_numeric_type(declared_type) {
            Some(SemanticType::Numeric)
        } else if self.is_temporal_type(declared_type) {
            Some(SemanticType::Temporal)
        } else {
            None
        }
    }

    /// Wraps `name` in the backend's identifier-quoting syntax.
    fn quote_identifier(&self, name: &str) -> String {
        helpers::quote_identifier_ansi(name)
    }

    /// Whether the backend evaluates `operation` natively.
    ///
    /// When this returns `false` the corresponding `expr_*` method still
    /// produces valid SQL, but the result is an approximation and a
    /// diagnostic warning is emitted when the fragment is rendered.
    fn supports_operation(&self, operation: SqlOperation) -> bool;

    /// SQL fragment matching `expr` against a pattern.
    fn expr_regexp_like(&self, expr: &str, pattern: &str) -> String;

    /// SQL fragment computing the character length of `expr`.
    fn expr_length(&self, expr: &str) -> String {
        format!("LENGTH({})", expr)
    }

    /// SQL fragment computing the variance of `expr`.
    fn expr_variance(&self, expr: &str) -> String;

    /// SQL fragment computing the standard deviation of `expr`.
    fn expr_stddev(&self, expr: &str) -> String;

    /// Row-limiting clause capping a result set at `count` rows.
    fn expr_limit(&self, count: u64) -> String {
        format!("LIMIT {}", count)
    }

    /// Full query selecting at most `count` rows from `table` (already
    /// quoted by the caller).
    fn select_with_limit(&self, table: &str, count: u64) -> String {
        format!("SELECT * FROM {} {}", table, self.expr_limit(count))
    }

    /// Full query fetching a single row from `table`, used to probe that a
    /// table is readable before scanning it.
    fn first_row_query(&self, table: &str) -> String {
        self.select_with_limit(table, 1)
    }

    /// SQL fragment casting a text column to a numeric value, given the
    /// textual number layout declared for the column.
    fn expr_cast_text_to_number(
        &self,
        quoted_column: &str,
        format: NumericTextFormat,
    ) -> String;
}

/// Constructor signature stored in the registry.
///
/// Construction reads configuration only; it must not perform I/O.
pub type DialectConstructor = fn(&ConnectionParams) -> Result<Box<dyn Dialect>>;

/// Registry resolving backend tags to dialect constructors.
///
/// Tags are matched case-insensitively. The default registry contains every
/// backend compiled into this build; embedders can register additional
/// dialects under their own tags.
pub struct DialectRegistry {
    constructors: BTreeMap<&'static str, DialectConstructor>,
}

impl DialectRegistry {
    /// Creates a registry with no backends registered.
    pub fn empty() -> Self {
        Self {
            constructors: BTreeMap::new(),
        }
    }

    /// Creates a registry pre-populated with the backends compiled into
    /// this build.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();

        #[cfg(feature = "sqlite")]
        registry.register(BackendType::SQLite.tag(), |params| {
            Ok(Box::new(sqlite::SqliteDialect::from_params(params)?) as Box<dyn Dialect>)
        });

        registry
    }

    /// Registers a constructor under a backend tag, replacing any previous
    /// registration for the same tag.
    pub fn register(&mut self, tag: &'static str, constructor: DialectConstructor) {
        self.constructors.insert(tag, constructor);
    }

    /// Backend tags currently registered, in sorted order.
    pub fn backend_tags(&self) -> Vec<&'static str> {
        self.constructors.keys().copied().collect()
    }

    /// Constructs the dialect registered under `tag`.
    ///
    /// # Errors
    /// Returns [`SqlScoutError::UnsupportedBackend`] when no dialect is
    /// registered for the tag, or a configuration error when required
    /// connection fields are missing.
    pub fn create(&self, tag: &str, params: &ConnectionParams) -> Result<Box<dyn Dialect>> {
        let lookup = tag.to_ascii_lowercase();
        let constructor = self
            .constructors
            .get(lookup.as_str())
            .ok_or_else(|| SqlScoutError::unsupported_backend(tag))?;
        constructor(params)
    }
}

impl Default for DialectRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Constructs a dialect from the default registry.
///
/// # Errors
/// Returns [`SqlScoutError::UnsupportedBackend`] for an unknown tag, or a
/// configuration error when required connection fields are missing.
///
/// # Example
/// ```rust
/// use sqlscout_core::{ConnectionParams, Dialect, dialects::create_dialect};
///
/// # fn example() -> sqlscout_core::Result<()> {
/// let params = ConnectionParams::new().with("dbfile", "example.db");
/// let dialect = create_dialect("sqlite", &params)?;
/// assert_eq!(dialect.backend_type().tag(), "sqlite");
/// # Ok(())
/// # }
/// ```
pub fn create_dialect(tag: &str, params: &ConnectionParams) -> Result<Box<dyn Dialect>> {
    DialectRegistry::with_defaults().create(tag, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_type_tag_round_trip() {
        let parsed: BackendType = "sqlite".parse().unwrap();
        assert_eq!(parsed, BackendType::SQLite);
        assert_eq!(parsed.tag(), "sqlite");

        let parsed: BackendType = "SQLite".parse().unwrap();
        assert_eq!(parsed, BackendType::SQLite);

        assert!("oracle".parse::<BackendType>().is_err());
    }

    #[test]
    fn test_registry_defaults_contain_compiled_backends() {
        let registry = DialectRegistry::with_defaults();

        #[cfg(feature = "sqlite")]
        assert!(registry.backend_tags().contains(&"sqlite"));
    }

    #[test]
    fn test_registry_unknown_tag_is_unsupported_backend() {
        let registry = DialectRegistry::with_defaults();
        let params = ConnectionParams::new();

        let result = registry.create("oracle", &params);
        assert!(matches!(
            result,
            Err(SqlScoutError::UnsupportedBackend { .. })
        ));
    }

    #[cfg(feature = "sqlite")]
    #[test]
    fn test_registry_tag_is_case_insensitive() {
        let registry = DialectRegistry::with_defaults();
        let params = ConnectionParams::new().with("dbfile", "example.db");

        let dialect = registry.create("SQLITE", &params).unwrap();
        assert_eq!(dialect.backend_type(), BackendType::SQLite);
    }

    #[cfg(feature = "sqlite")]
    #[test]
    fn test_create_dialect_missing_required_field() {
        let result = create_dialect("sqlite", &ConnectionParams::new());
        assert!(matches!(
            result,
            Err(SqlScoutError::Configuration { .. })
        ));
    }
}
