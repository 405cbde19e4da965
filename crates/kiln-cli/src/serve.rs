//! Serve command implementation for Kiln CLI.

use kiln_core::{Compiler, CompilerConfig};
use kiln_server::ServerConfig;

use crate::colors;

/// Start the compile server.
pub async fn execute(host: String, port: u16, config: CompilerConfig) -> anyhow::Result<()> {
    let compiler = Compiler::from_config(&config)?;
    let server = ServerConfig { host, port };

    println!("\n{}Kiln Server{}", colors::BOLD, colors::RESET);
    println!("{}", "─".repeat(50));
    println!(
        "{}  ◆ Compiler:{} {}",
        colors::CYAN,
        colors::RESET,
        compiler.toolchain().program().display()
    );
    println!(
        "{}  ◆ Endpoint:{} POST http://{}:{}/compile",
        colors::CYAN,
        colors::RESET,
        server.host,
        server.port
    );
    println!("{}", "─".repeat(50));
    println!("{}Press Ctrl+C to stop{}", colors::GREEN, colors::RESET);
    println!();

    kiln_server::serve(compiler, server).await?;

    Ok(())
}
