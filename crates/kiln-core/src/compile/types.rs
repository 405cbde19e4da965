//! Configuration types for the compile pipeline.

use std::path::PathBuf;
use std::time::Duration;

/// How to invoke the external toolchain.
#[derive(Debug, Clone)]
pub struct ToolchainConfig {
    /// Program name or path. Bare names are resolved on `PATH`.
    pub program: PathBuf,

    /// Fixed flags passed before `--output=<path> <input>`.
    pub flags: Vec<String>,

    /// Working directory for the compiler (where it keeps its package cache).
    pub working_dir: Option<PathBuf>,

    /// Kill the compiler if it runs longer than this.
    pub timeout: Option<Duration>,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("elm-make"),
            flags: vec!["--yes".to_string()],
            working_dir: None,
            timeout: None,
        }
    }
}

/// Where and how per-request temp files are created.
#[derive(Debug, Clone)]
pub struct WorkspaceConfig {
    /// Directory the temp files live in.
    pub root: PathBuf,

    /// Extension for the staged source file.
    pub source_suffix: String,

    /// Extension for the compiled artifact. The toolchain picks its output
    /// format from this.
    pub artifact_suffix: String,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            root: std::env::temp_dir(),
            source_suffix: ".elm".to_string(),
            artifact_suffix: ".js".to_string(),
        }
    }
}

/// Configuration for the request handler.
#[derive(Debug, Clone, Default)]
pub struct CompilerConfig {
    /// Toolchain invocation.
    pub toolchain: ToolchainConfig,

    /// Temp workspace layout.
    pub workspace: WorkspaceConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_toolchain() {
        let config = ToolchainConfig::default();
        assert_eq!(config.program, PathBuf::from("elm-make"));
        assert_eq!(config.flags, vec!["--yes"]);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_default_workspace() {
        let config = WorkspaceConfig::default();
        assert_eq!(config.root, std::env::temp_dir());
        assert_eq!(config.artifact_suffix, ".js");
    }
}
