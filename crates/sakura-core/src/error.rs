//! Error types for the invitation library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all invitation operations.
///
/// Every variant is recoverable: callers are expected to report it to the
/// user and keep the session alive.
#[derive(Error, Debug)]
pub enum InvitationError {
    /// A stored value could not be parsed into the expected structure
    #[error("Could not read stored data for '{key}': {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    /// A value could not be serialized for storage
    #[error("Serialization error: {source}")]
    Serialization { source: serde_json::Error },
    /// No invitation is stored under the given identifier
    #[error("No invitation found with ID {id}")]
    NotFound { id: String },
    /// Writing or removing a value in the store failed
    #[error("Failed to write '{key}': {message}")]
    StoreWrite { key: String, message: String },
    /// Reading a value from the store failed
    #[error("Failed to read '{key}': {message}")]
    StoreRead { key: String, message: String },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// The wizard was asked to do something its current step does not allow
    #[error("Cannot {action} from the {step} step")]
    InvalidTransition { action: String, step: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> InvitationError {
        InvitationError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> InvitationError {
        InvitationError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl InvitationError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a decode error for the value stored under `key`.
    pub fn decode(key: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            key: key.into(),
            source,
        }
    }

    /// Creates a not-found error for an invitation identifier.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Returns true for errors the user can retry without changing input.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::StoreWrite { .. } | Self::StoreRead { .. } | Self::Database { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| InvitationError::database(message).with_source(e))
    }
}

/// Result type alias for invitation operations
pub type Result<T> = std::result::Result<T, InvitationError>;
