//! Per-request temp workspace.
//!
//! Each request gets its own temp directory, created with an exclusive open so
//! concurrent allocations never collide. The staged source lives inside it and
//! the artifact path is only named, not created: a compiler that writes
//! nothing leaves nothing to read back. The whole directory is deleted when
//! the [`Workspace`] is dropped.

use std::fs::File;
use std::path::{Path, PathBuf};

use tempfile::{Builder, TempDir};

use crate::error::{Error, Result};

use super::types::WorkspaceConfig;

const PREFIX: &str = "kiln-";
const SOURCE_STEM: &str = "source";
const ARTIFACT_STEM: &str = "out";

/// Temp input/output pair owned by a single compile request.
#[derive(Debug)]
pub struct Workspace {
    input: PathBuf,
    output: PathBuf,
    // Dropped last; removes both files.
    dir: TempDir,
}

impl Workspace {
    /// Allocate a fresh workspace under `config.root`.
    ///
    /// File creation runs on the blocking pool so that staging does not stall
    /// other requests.
    pub async fn allocate(config: &WorkspaceConfig) -> Result<Self> {
        let config = config.clone();
        tokio::task::spawn_blocking(move || Self::allocate_blocking(&config))
            .await
            .map_err(|e| Error::Allocation(std::io::Error::other(e)))?
    }

    fn allocate_blocking(config: &WorkspaceConfig) -> Result<Self> {
        let dir = Builder::new()
            .prefix(PREFIX)
            .tempdir_in(&config.root)
            .map_err(Error::Allocation)?;

        let input = dir
            .path()
            .join(format!("{SOURCE_STEM}{}", config.source_suffix));
        File::create_new(&input).map_err(Error::Allocation)?;

        let output = dir
            .path()
            .join(format!("{ARTIFACT_STEM}{}", config.artifact_suffix));

        Ok(Self { input, output, dir })
    }

    /// Write the request source into the input file.
    pub async fn stage(&self, source: &str) -> Result<()> {
        tokio::fs::write(self.input_path(), source)
            .await
            .map_err(Error::Allocation)
    }

    /// Read the compiled artifact back.
    ///
    /// Fails with [`Error::ArtifactRead`] if the toolchain never wrote it.
    pub async fn read_artifact(&self) -> Result<String> {
        tokio::fs::read_to_string(self.output_path())
            .await
            .map_err(Error::ArtifactRead)
    }

    /// Path of the staged source file.
    pub fn input_path(&self) -> &Path {
        &self.input
    }

    /// Path the toolchain writes its artifact to.
    pub fn output_path(&self) -> &Path {
        &self.output
    }

    /// Directory holding both files.
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}
