//! One-shot compile command.

use std::fs;
use std::path::Path;

use anyhow::Context;
use kiln_core::{CompileRequest, CompileResult, Compiler, CompilerConfig};

use crate::colors;

/// Compile `file` and write the rendered document.
///
/// A rejected compile is returned as an error so the process exits non-zero.
pub async fn execute(
    file: &Path,
    id: String,
    output: Option<&Path>,
    json: bool,
    config: CompilerConfig,
) -> anyhow::Result<()> {
    let source = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let compiler = Compiler::from_config(&config)?;

    let result = compiler.handle(CompileRequest::new(id, source)).await;

    if json {
        println!("{}", serde_json::to_string(&result)?);
        if !result.is_success() {
            anyhow::bail!("Compilation failed");
        }
        return Ok(());
    }

    match result {
        CompileResult::Success { output: document, .. } => match output {
            Some(path) => {
                fs::write(path, document)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                eprintln!(
                    "{}✓ Wrote {}{}",
                    colors::GREEN,
                    path.display(),
                    colors::RESET
                );
            }
            None => print!("{}", document),
        },
        CompileResult::Failure { error, .. } => {
            eprintln!("{}✗ Compilation failed{}", colors::RED, colors::RESET);
            anyhow::bail!("{}", error);
        }
    }

    Ok(())
}
