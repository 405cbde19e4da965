//! Kiln CLI - single-flight compilation service.

mod colors;
mod compile;
mod serve;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use kiln_core::{CompilerConfig, ToolchainConfig, WorkspaceConfig};

#[derive(Parser)]
#[command(name = "kiln")]
#[command(about = "Compile source snippets into runnable HTML documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the compile server
    Serve {
        /// Host address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        #[command(flatten)]
        toolchain: ToolchainArgs,
    },

    /// Compile a single file and emit the rendered document
    Compile {
        /// Path to the source file
        file: PathBuf,

        /// Request id echoed in JSON output
        #[arg(long, default_value = "cli")]
        id: String,

        /// Write the document here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the raw JSON result
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        toolchain: ToolchainArgs,
    },
}

/// Options shared by every command that runs the compiler.
#[derive(Args)]
struct ToolchainArgs {
    /// Compiler program
    #[arg(long, default_value = "elm-make")]
    toolchain: PathBuf,

    /// Flag passed to the compiler (repeatable; replaces the default `--yes`)
    #[arg(long = "flag", allow_hyphen_values = true)]
    flags: Vec<String>,

    /// Directory the compiler runs in
    #[arg(long)]
    work_dir: Option<PathBuf>,

    /// Directory for per-request temp files
    #[arg(long)]
    temp_dir: Option<PathBuf>,

    /// Kill the compiler after this many seconds
    #[arg(long)]
    timeout: Option<u64>,
}

impl ToolchainArgs {
    fn into_config(self) -> CompilerConfig {
        let defaults = ToolchainConfig::default();
        let toolchain = ToolchainConfig {
            program: self.toolchain,
            flags: if self.flags.is_empty() {
                defaults.flags
            } else {
                self.flags
            },
            working_dir: self.work_dir,
            timeout: self.timeout.map(Duration::from_secs),
        };

        let mut workspace = WorkspaceConfig::default();
        if let Some(root) = self.temp_dir {
            workspace.root = root;
        }

        CompilerConfig {
            toolchain,
            workspace,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing::Level::DEBUG.into())
    } else {
        tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Serve {
            host,
            port,
            toolchain,
        } => {
            serve::execute(host, port, toolchain.into_config()).await?;
        }

        Commands::Compile {
            file,
            id,
            output,
            json,
            toolchain,
        } => {
            compile::execute(&file, id, output.as_deref(), json, toolchain.into_config()).await?;
        }
    }

    Ok(())
}
