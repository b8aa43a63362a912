//! Dialect adapter layer for the SQLScout data-quality scanner.
//!
//! The scanner drives table scans, computes metrics, and evaluates
//! data-quality checks against many database backends. This crate owns the
//! piece every backend needs: a [`dialects::Dialect`] implementation that
//! turns a small set of abstract operations — metadata queries, declared
//! type classification, SQL expression generation — into SQL text valid
//! for one specific engine, plus the registry that resolves a backend tag
//! to its dialect.
//!
//! # Architecture
//! - One object-safe trait per concern the scanner consumes
//! - One conforming dialect per backend, selected by tag through
//!   [`dialects::DialectRegistry`]
//! - Backend-agnostic error wrapping: native driver errors never cross
//!   the crate boundary

pub mod dialects;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use dialects::{
    BackendType, Dialect, DialectRegistry, NumericTextFormat, SemanticType, SqlOperation,
    config::ConnectionParams, create_dialect,
};
pub use error::{Result, SqlScoutError};
