//! Error types for rendering and document retrieval

use std::io;
use thiserror::Error;

/// Errors that can occur while selecting or configuring a format
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// The format has no option with this name
    #[error("Format '{format}' has no option '{option}'")]
    UnknownOption { format: String, option: String },
    /// An option was given a value the format does not understand
    #[error("Invalid value '{value}' for option '{option}' of format '{format}'")]
    InvalidOption {
        format: String,
        option: String,
        value: String,
    },
}

/// Errors raised by a [`DocumentStore`](crate::store::DocumentStore) when the
/// text behind an identifier cannot be fetched.
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// Nothing is stored under the identifier
    #[error("Document '{0}' not found")]
    NotFound(String),
    /// The identifier cannot be resolved by this store (absolute path, `..`, empty)
    #[error("Invalid document identifier '{0}'")]
    InvalidIdentifier(String),
    /// The document exists but could not be read
    #[error("Failed to read document '{identifier}': {source}")]
    Io {
        identifier: String,
        #[source]
        source: io::Error,
    },
}

impl RetrievalError {
    /// The identifier the failed fetch was made with.
    pub fn identifier(&self) -> &str {
        match self {
            RetrievalError::NotFound(id) | RetrievalError::InvalidIdentifier(id) => id,
            RetrievalError::Io { identifier, .. } => identifier,
        }
    }
}
