use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Table '{0}' already exists")]
    TableAlreadyExists(String),
    #[error("Table '{0}' not found")]
    TableNotFound(String),
    #[error("Table '{table_name}' did not become active after {attempts} attempts")]
    TableActivationTimeout { table_name: String, attempts: u32 },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
