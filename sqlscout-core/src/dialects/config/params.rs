//! Connection parameter mapping.
//!
//! A dialect is constructed from a flat mapping of named string fields
//! (for example `dbfile` for an embedded engine, or host and credentials
//! for networked engines). Values come from the scan configuration file
//! and may be overlaid from environment variables.

use crate::{Result, error::SqlScoutError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named connection fields for one backend.
///
/// Field order is stable (sorted) so generated example configuration is
/// deterministic. Construction-time validation lives in the dialects:
/// each dialect declares which fields it requires via
/// [`ConnectionParams::required`].
///
/// # Example
/// ```rust
/// use sqlscout_core::ConnectionParams;
///
/// let params = ConnectionParams::new().with("dbfile", "warehouse.db");
/// assert_eq!(params.required("dbfile").unwrap(), "warehouse.db");
/// assert!(params.required("host").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionParams {
    #[serde(flatten)]
    values: BTreeMap<String, String>,
}

impl ConnectionParams {
    /// Creates an empty parameter mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set a field.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(field.into(), value.into());
        self
    }

    /// Sets a field on an existing mapping.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    /// Returns the value of an optional field, if present and non-empty.
    pub fn optional(&self, field: &str) -> Option<&str> {
        self.values
            .get(field)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Returns the value of a required field.
    ///
    /// # Errors
    /// Returns a configuration error when the field is absent or resolves
    /// to an empty string.
    pub fn required(&self, field: &str) -> Result<&str> {
        self.optional(field)
            .ok_or_else(|| SqlScoutError::missing_field(field))
    }

    /// Overlays values from the process environment.
    ///
    /// `env_vars` maps field names to environment variable names, the way
    /// a dialect's `default_env_vars` reports them. A variable that is set
    /// to a non-empty value replaces the corresponding field.
    pub fn overlay_env(&mut self, env_vars: &BTreeMap<String, String>) {
        self.overlay_env_with(env_vars, |name| std::env::var(name).ok());
    }

    /// Overlay driven by an explicit lookup, so callers and tests can
    /// substitute their own environment source.
    pub fn overlay_env_with<F>(&mut self, env_vars: &BTreeMap<String, String>, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        for (field, env_name) in env_vars {
            if let Some(value) = lookup(env_name)
                && !value.is_empty()
            {
                self.values.insert(field.clone(), value);
            }
        }
    }

    /// Iterates over the fields in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(field, value)| (field.as_str(), value.as_str()))
    }

    /// Whether no fields are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_field_present() {
        let params = ConnectionParams::new().with("dbfile", "warehouse.db");
        assert_eq!(params.required("dbfile").unwrap(), "warehouse.db");
    }

    #[test]
    fn test_required_field_missing() {
        let params = ConnectionParams::new();
        let error = params.required("dbfile").unwrap_err();
        assert!(matches!(error, SqlScoutError::Configuration { .. }));
        assert!(error.to_string().contains("dbfile"));
    }

    #[test]
    fn test_required_field_empty_is_missing() {
        let params = ConnectionParams::new().with("dbfile", "");
        assert!(params.required("dbfile").is_err());
        assert_eq!(params.optional("dbfile"), None);
    }

    #[test]
    fn test_overlay_env_replaces_fields() {
        let mut params = ConnectionParams::new().with("dbfile", "default.db");
        let env_vars = BTreeMap::from([("dbfile".to_string(), "SQLITE_DBFILE".to_string())]);

        params.overlay_env_with(&env_vars, |name| {
            (name == "SQLITE_DBFILE").then(|| "/var/data/prod.db".to_string())
        });

        assert_eq!(params.required("dbfile").unwrap(), "/var/data/prod.db");
    }

    #[test]
    fn test_overlay_env_ignores_unset_and_empty() {
        let mut params = ConnectionParams::new().with("dbfile", "default.db");
        let env_vars = BTreeMap::from([("dbfile".to_string(), "SQLITE_DBFILE".to_string())]);

        params.overlay_env_with(&env_vars, |_| None);
        assert_eq!(params.required("dbfile").unwrap(), "default.db");

        params.overlay_env_with(&env_vars, |_| Some(String::new()));
        assert_eq!(params.required("dbfile").unwrap(), "default.db");
    }

    #[test]
    fn test_serde_round_trip() {
        let params = ConnectionParams::new()
            .with("dbfile", "warehouse.db")
            .with("schema", "main");

        let json = serde_json::to_string(&params).unwrap();
        let back: ConnectionParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
