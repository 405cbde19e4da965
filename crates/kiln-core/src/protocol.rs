//! Request and result messages exchanged with callers.

use serde::{Deserialize, Serialize};

/// A unit of source code to compile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileRequest {
    /// Caller-defined identifier, echoed back unchanged.
    pub id: String,
    /// Full source text handed to the toolchain.
    #[serde(alias = "elm")]
    pub source: String,
}

impl CompileRequest {
    /// Create a new request.
    pub fn new(id: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
        }
    }
}

/// Outcome of a compile request.
///
/// Serialized without a tag, so callers see either `{"id", "output"}` or
/// `{"id", "error"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompileResult {
    /// Compilation succeeded.
    Success {
        /// Request identifier.
        id: String,
        /// Rendered HTML document embedding the compiled artifact.
        output: String,
    },

    /// Compilation or one of its surrounding steps failed.
    Failure {
        /// Request identifier.
        id: String,
        /// Sanitized, caller-safe error text.
        error: String,
    },
}

impl CompileResult {
    /// Identifier of the originating request.
    pub fn id(&self) -> &str {
        match self {
            Self::Success { id, .. } | Self::Failure { id, .. } => id,
        }
    }

    /// Returns true if compilation succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The rendered document, if compilation succeeded.
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Success { output, .. } => Some(output),
            Self::Failure { .. } => None,
        }
    }

    /// The error message, if compilation failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure { error, .. } => Some(error),
            Self::Success { .. } => None,
        }
    }
}
