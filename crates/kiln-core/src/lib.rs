//! Core engine for the Kiln snippet compilation service.
//!
//! This crate provides:
//! - Per-request temp workspaces for compiler input and output
//! - Toolchain invocation as a subprocess with output capture
//! - A process-wide gate so only one compiler runs at a time
//! - Diagnostic sanitization and HTML rendering of compiled output
//! - The request handler that drives all of the above

pub mod compile;
pub mod error;
pub mod protocol;

pub use compile::{
    CompileGate, Compiler, CompilerConfig, ProcessToolchain, Toolchain, ToolchainConfig,
    Workspace, WorkspaceConfig, render, sanitize,
};
pub use error::{Error, Result};
pub use protocol::{CompileRequest, CompileResult};
