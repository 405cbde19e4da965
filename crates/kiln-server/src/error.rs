//! Error types for the Kiln server.

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// IO error (binding, serving).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Kiln core error (toolchain setup).
    #[error("Core error: {0}")]
    Core(#[from] kiln_core::Error),

    /// Host/port did not form a socket address.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
}

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
