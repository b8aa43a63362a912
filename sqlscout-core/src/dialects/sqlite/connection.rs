//! SQLite connection handling.
//!
//! SQLite is file-based, so connection handling reduces to validating the
//! configured `dbfile` and opening a pooled handle. The pool is capped at
//! one connection: a second connection to `:memory:` would see a different
//! database, and the embedded driver gains nothing from concurrency here.
//!
//! # Accepted `dbfile` forms
//! - Plain file path: `/var/data/warehouse.db`, `./local.sqlite`
//! - In-memory: `:memory:`
//! - URL: `sqlite:///var/data/warehouse.db`, `sqlite::memory:`

use crate::{Result, error::SqlScoutError};
use sqlx::AnyPool;
use sqlx::any::AnyPoolOptions;
use std::time::Duration;
use url::Url;

/// How long to wait for the database file to open.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Validates the configured `dbfile` without touching the filesystem.
///
/// Only syntactic validation happens at construction time; a missing or
/// unreadable file surfaces later as a connection error.
///
/// # Errors
/// Returns a configuration error when `dbfile` carries a non-SQLite URL
/// scheme.
pub fn validate_dbfile(dbfile: &str) -> Result<()> {
    if dbfile == ":memory:" || !dbfile.contains("://") {
        return Ok(());
    }

    match Url::parse(dbfile) {
        Ok(url) if url.scheme() == "sqlite" => Ok(()),
        Ok(url) => Err(SqlScoutError::configuration(format!(
            "dbfile must be a file path or sqlite:// URL, got scheme '{}'",
            url.scheme()
        ))),
        Err(_) => Err(SqlScoutError::configuration(
            "dbfile looks like a URL but could not be parsed",
        )),
    }
}

/// Normalizes a `dbfile` value to the URL form the driver expects.
pub(crate) fn normalize_url(dbfile: &str) -> String {
    if dbfile == ":memory:" {
        return "sqlite::memory:".to_string();
    }
    if dbfile.starts_with("sqlite:") {
        return dbfile.to_string();
    }
    format!("sqlite://{}", dbfile)
}

/// Opens a pooled connection to the database file.
///
/// # Errors
/// Any driver failure is wrapped into [`SqlScoutError::Connection`]; the
/// native sqlx error never reaches callers.
pub async fn open_pool(dbfile: &str) -> Result<AnyPool> {
    sqlx::any::install_default_drivers();

    let url = normalize_url(dbfile);

    AnyPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(CONNECT_TIMEOUT)
        .connect(&url)
        .await
        .map_err(|e| SqlScoutError::connection_failed("failed to open SQLite database", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_dbfile_accepts_paths_and_memory() {
        assert!(validate_dbfile(":memory:").is_ok());
        assert!(validate_dbfile("/var/data/warehouse.db").is_ok());
        assert!(validate_dbfile("./local.sqlite").is_ok());
        assert!(validate_dbfile("data.sqlite3").is_ok());
        assert!(validate_dbfile("sqlite:///var/data/warehouse.db").is_ok());
        assert!(validate_dbfile("sqlite::memory:").is_ok());
    }

    #[test]
    fn test_validate_dbfile_rejects_foreign_schemes() {
        assert!(validate_dbfile("postgres://localhost/db").is_err());
        assert!(validate_dbfile("mysql://localhost/db").is_err());
    }

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url(":memory:"), "sqlite::memory:");
        assert_eq!(
            normalize_url("sqlite:///var/data/warehouse.db"),
            "sqlite:///var/data/warehouse.db"
        );
        assert_eq!(
            normalize_url("/var/data/warehouse.db"),
            "sqlite:///var/data/warehouse.db"
        );
    }
}
