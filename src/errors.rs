/*!
 * Error types for the dolmetscher application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when calling the remote translation endpoint
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Response arrived but carried no usable translation
    #[error("Empty translation in API response")]
    EmptyResponse,
}

/// Errors that can occur when talking to a record store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Error when making a request to the hosted store fails
    #[error("Store request failed: {0}")]
    RequestFailed(String),

    /// Error returned by the hosted store itself
    #[error("Store responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the store
        message: String,
    },

    /// Error when decoding records from a store response
    #[error("Failed to decode store response: {0}")]
    ParseError(String),

    /// Error from the local database
    #[error("Local storage error: {0}")]
    Storage(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from the translation endpoint
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from a record store
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Error from configuration handling
    #[error("Config error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::Config(error.to_string())
    }
}
