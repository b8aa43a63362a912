//! Configuration types for dialect adapters.
//!
//! Dialects are constructed from a [`ConnectionParams`] mapping sourced
//! from scan configuration files or environment variables. Credentials are
//! ordinary string values here; nothing in this module logs or serializes
//! them on its own.

mod params;

pub use params::ConnectionParams;
