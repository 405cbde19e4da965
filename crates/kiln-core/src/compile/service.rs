//! Compile request handler.
//!
//! Drives one request through its lifecycle:
//!
//! ```text
//! Received → WorkspaceAllocated → Compiling → Succeeded | Failed
//! ```
//!
//! Workspace allocation and source staging happen outside the gate, so queued
//! requests are ready to compile as soon as the gate frees up.

use std::sync::Arc;
use std::time::Instant;

use crate::error::{Error, Result};
use crate::protocol::{CompileRequest, CompileResult};

use super::gate::{CompileGate, millis};
use super::render::render;
use super::toolchain::{ProcessToolchain, Toolchain};
use super::types::{CompilerConfig, WorkspaceConfig};
use super::workspace::Workspace;

/// Turns compile requests into compile results.
///
/// Cheap to share behind an `Arc`; every method takes `&self`.
pub struct Compiler<T> {
    toolchain: T,
    workspace: WorkspaceConfig,
    gate: Arc<CompileGate>,
}

impl Compiler<ProcessToolchain> {
    /// Create a compiler for a real toolchain, using the process-wide gate.
    pub fn from_config(config: &CompilerConfig) -> Result<Self> {
        let toolchain = ProcessToolchain::new(&config.toolchain)?;
        Ok(Self::new(toolchain, config.workspace.clone()))
    }
}

impl<T: Toolchain> Compiler<T> {
    /// Create a compiler that serializes through [`CompileGate::global`].
    pub fn new(toolchain: T, workspace: WorkspaceConfig) -> Self {
        Self::with_gate(toolchain, workspace, CompileGate::global())
    }

    /// Create a compiler with an explicit gate.
    pub fn with_gate(toolchain: T, workspace: WorkspaceConfig, gate: Arc<CompileGate>) -> Self {
        Self {
            toolchain,
            workspace,
            gate,
        }
    }

    /// The gate this compiler serializes through.
    pub fn gate(&self) -> &Arc<CompileGate> {
        &self.gate
    }

    /// The toolchain this compiler drives.
    pub fn toolchain(&self) -> &T {
        &self.toolchain
    }

    /// Handle a request. Never fails: every error becomes a
    /// [`CompileResult::Failure`] carrying the request id.
    pub async fn handle(&self, request: CompileRequest) -> CompileResult {
        let CompileRequest { id, source } = request;
        let start = Instant::now();
        tracing::debug!(%id, bytes = source.len(), "compile request received");

        let workspace = match self.prepare(&source).await {
            Ok(workspace) => workspace,
            Err(e) => {
                tracing::error!(%id, "workspace allocation failed: {}", e);
                return CompileResult::Failure {
                    error: e.caller_message(None),
                    id,
                };
            }
        };
        tracing::debug!(%id, "workspace allocated");

        let outcome = self
            .gate
            .with_exclusive(|| async {
                tracing::debug!(%id, "compiling");
                self.toolchain
                    .compile(workspace.input_path(), workspace.output_path())
                    .await?;
                workspace.read_artifact().await
            })
            .await;

        let elapsed_ms = millis(start);
        match outcome {
            Ok(artifact) => {
                tracing::info!(%id, elapsed_ms, "compilation succeeded");
                CompileResult::Success {
                    output: render(&artifact),
                    id,
                }
            }
            Err(e) => {
                if matches!(e, Error::Compilation(_)) {
                    tracing::info!(%id, elapsed_ms, "compilation rejected source");
                } else {
                    tracing::warn!(%id, elapsed_ms, "compilation failed: {}", e);
                }
                let input = workspace.input_path().to_string_lossy();
                CompileResult::Failure {
                    error: e.caller_message(Some(input.as_ref())),
                    id,
                }
            }
        }
        // `workspace` drops here, removing both temp files.
    }

    async fn prepare(&self, source: &str) -> Result<Workspace> {
        let workspace = Workspace::allocate(&self.workspace).await?;
        workspace.stage(source).await?;
        Ok(workspace)
    }
}
