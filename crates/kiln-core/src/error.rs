//! Error types for kiln-core.

use std::time::Duration;

use thiserror::Error;

/// Result type for kiln-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while servicing a compile request.
///
/// These carry internal detail (I/O causes, raw diagnostics) and are only
/// logged. Callers see the text from [`Error::caller_message`].
#[derive(Debug, Error)]
pub enum Error {
    /// The temp workspace could not be created or the source could not be staged.
    #[error("failed to allocate workspace: {0}")]
    Allocation(#[source] std::io::Error),

    /// The toolchain rejected the source. Holds the raw diagnostic text.
    #[error("compilation failed: {0}")]
    Compilation(String),

    /// The compiler reported success but its output could not be read back.
    #[error("failed to read compiled artifact: {0}")]
    ArtifactRead(#[source] std::io::Error),

    /// The compiler failed without printing anything.
    #[error("compiler exited with code {code:?} and no diagnostics")]
    NoDiagnostics { code: Option<i32> },

    /// The compiler process could not be started.
    #[error("failed to launch compiler: {0}")]
    Launch(#[source] std::io::Error),

    /// The compiler ran longer than the configured limit and was killed.
    #[error("compiler timed out after {0:?}")]
    Timeout(Duration),

    /// Toolchain lookup or configuration error.
    #[error("toolchain error: {0}")]
    Toolchain(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Message safe to return to a caller.
    ///
    /// Only compiler diagnostics are passed through, and those are sanitized
    /// against `input_path` first. Everything else maps to a fixed message.
    pub fn caller_message(&self, input_path: Option<&str>) -> String {
        match self {
            Self::Allocation(_) => "could not allocate a compile workspace".to_string(),
            Self::Compilation(raw) => match input_path {
                Some(path) => crate::compile::sanitize(raw, path),
                None => raw.clone(),
            },
            Self::ArtifactRead(_) | Self::NoDiagnostics { .. } => {
                "compiled output could not be read".to_string()
            }
            Self::Launch(_) | Self::Toolchain(_) => "compiler is unavailable".to_string(),
            Self::Timeout(limit) => format!("compilation timed out after {limit:?}"),
            Self::Io(_) => "internal I/O error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compilation_message_is_sanitized() {
        let err = Error::Compilation("Error at /tmp/kiln-abc.elm: unexpected token".into());
        assert_eq!(
            err.caller_message(Some("/tmp/kiln-abc.elm")),
            "Error at : unexpected token"
        );
    }

    #[test]
    fn test_io_causes_are_not_exposed() {
        let io = std::io::Error::other("/var/secret/path is full");
        for err in [Error::Allocation(io), Error::ArtifactRead(std::io::Error::other("/x/y.js"))] {
            let msg = err.caller_message(Some("/x/y.elm"));
            assert!(!msg.contains('/'), "leaked detail: {msg}");
        }
    }

    #[test]
    fn test_timeout_message() {
        let err = Error::Timeout(Duration::from_secs(30));
        assert_eq!(err.caller_message(None), "compilation timed out after 30s");
    }

    #[test]
    fn test_sub_second_timeout_message() {
        let err = Error::Timeout(Duration::from_millis(500));
        assert_eq!(err.caller_message(None), "compilation timed out after 500ms");
    }
}
