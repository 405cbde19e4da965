//! Compile-request pipeline.
//!
//! This module provides:
//! - Workspace allocation (temp source + artifact files)
//! - Toolchain invocation (`elm-make` by default)
//! - The process-wide compile gate
//! - Diagnostic sanitization and output rendering
//! - The request handler tying them together
//!
//! # Architecture
//!
//! ```text
//! CompileRequest
//!     │
//!     ├── Workspace::allocate ──► stage source
//!     │
//!     └── CompileGate ──► Toolchain::compile ──► read artifact
//!                                 │                   │
//!                                 ▼                   ▼
//!                             sanitize()          render()
//!                                 │                   │
//!                                 └──► CompileResult ◄┘
//! ```

mod gate;
mod render;
mod sanitize;
mod service;
mod toolchain;
mod types;
mod workspace;

pub use gate::CompileGate;
pub use render::{AUTO_RUN, STYLESHEET, render};
pub use sanitize::sanitize;
pub use service::Compiler;
pub use toolchain::{ProcessToolchain, Toolchain};
pub use types::{CompilerConfig, ToolchainConfig, WorkspaceConfig};
pub use workspace::Workspace;
