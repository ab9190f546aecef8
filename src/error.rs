//! Error Handling Infrastructure
//!
//! This module defines all error types used throughout Roster.
//!
//! # Error Categories
//! - `ConnectionFailed`: the database could not be opened or was lost
//! - `QueryFailed`: a statement failed to prepare or execute
//! - `ConstraintViolation`: a write violated a store-level constraint
//! - `ConfigError`: database path resolution or config file errors
//! - `PromptFailed`: terminal I/O failure while prompting
//!
//! Only the salary-format check is handled inline by the prompt layer;
//! every other error propagates unmodified to the top-level runner, which
//! prints it and exits non-zero.

use thiserror::Error;

/// Main error type for Roster operations
#[derive(Error, Debug)]
pub enum RosterError {
    /// Database connection failed (missing file, locked, lost mid-query)
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Statement preparation or execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A write violated a foreign-key or other store constraint
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Configuration error (no database path, invalid config file)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Terminal prompt could not be read or rendered
    #[error("Prompt failed: {0}")]
    PromptFailed(String),
}

impl RosterError {
    /// Create a connection failed error
    pub fn connection_failed(message: impl Into<String>) -> Self {
        Self::ConnectionFailed(message.into())
    }

    /// Create a query failed error
    pub fn query_failed(message: impl Into<String>) -> Self {
        Self::QueryFailed(message.into())
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// Classify a driver error from statement execution.
    ///
    /// Constraint failures (foreign keys, NOT NULL) get their own variant so
    /// the top-level runner can name them; everything else is a plain query
    /// failure.
    pub fn from_query(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(inner, _)
                if inner.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Self::ConstraintViolation(err.to_string())
            }
            _ => Self::QueryFailed(err.to_string()),
        }
    }
}

impl From<dialoguer::Error> for RosterError {
    fn from(err: dialoguer::Error) -> Self {
        Self::PromptFailed(err.to_string())
    }
}

/// Result type alias for Roster operations
pub type Result<T> = std::result::Result<T, RosterError>;
