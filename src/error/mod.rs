//! Error types for the Appetite console client.
//!
//! This module provides the error handling system shared by the client, services and flows.
//! Each domain gets its own error type (API outcomes, configuration, session storage, form
//! validation) and all of them are aggregated into [`Error`] so callers can use `?` across
//! layers. The `Display` output of every variant is the message shown to the operator; no
//! caller is expected to interpret anything beyond that string.

pub mod api;
pub mod config;
pub mod storage;
pub mod validation;

use thiserror::Error;

use crate::error::{
    api::{ApiError, ErrorCategory},
    config::ConfigError,
    storage::StorageError,
    validation::ValidationError,
};

/// Main error type for the Appetite console client.
///
/// Aggregates all domain-specific error types into a single type. Uses `thiserror`'s
/// `#[from]` attribute so the underlying errors convert automatically via `?`.
///
/// # Error Categories
/// - API errors (classified HTTP outcomes, timeouts, network failures)
/// - Configuration errors (invalid environment variables)
/// - Storage errors (persisted session could not be read or written)
/// - Validation errors (form input rejected before any request is sent)
#[derive(Error, Debug)]
pub enum Error {
    /// Classified outcome of a request to the backend.
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Configuration error (invalid environment variable value).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Persisted session storage error.
    #[error(transparent)]
    StorageError(#[from] StorageError),
    /// Input rejected locally, no request was issued.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
}

impl Error {
    /// Returns the API error category when this error came from the backend exchange.
    ///
    /// # Returns
    /// - `Some(ErrorCategory)` - For [`Error::ApiError`]
    /// - `None` - For errors raised locally (config, storage, validation)
    pub fn api_category(&self) -> Option<ErrorCategory> {
        match self {
            Self::ApiError(err) => Some(err.category()),
            _ => None,
        }
    }
}
