//! External toolchain invocation.
//!
//! The toolchain is run as `<program> <flags...> --output=<output> <input>`.
//! Only the exit status, the combined diagnostic text and the artifact file
//! are relied upon.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::error::{Error, Result};

use super::types::ToolchainConfig;

/// Something that turns a source file into a compiled artifact.
///
/// Implementations report rejected source as [`Error::Compilation`] with the
/// raw diagnostic text, untouched.
pub trait Toolchain: Send + Sync {
    /// Compile `input`, writing the artifact to `output`.
    fn compile(&self, input: &Path, output: &Path) -> impl Future<Output = Result<()>> + Send;
}

/// Toolchain backed by a real compiler subprocess.
#[derive(Debug, Clone)]
pub struct ProcessToolchain {
    /// Resolved path to the compiler binary
    program: PathBuf,

    /// Flags passed before the output and input arguments
    flags: Vec<String>,

    /// Directory the compiler runs in
    working_dir: Option<PathBuf>,

    /// Upper bound on a single invocation
    timeout: Option<Duration>,
}

impl ProcessToolchain {
    /// Create a toolchain, resolving the program on `PATH`.
    pub fn new(config: &ToolchainConfig) -> Result<Self> {
        let program = which::which(&config.program).map_err(|e| {
            Error::Toolchain(format!("{} not found: {}", config.program.display(), e))
        })?;

        if let Some(dir) = &config.working_dir {
            if !dir.is_dir() {
                return Err(Error::Toolchain(format!(
                    "working directory {} does not exist",
                    dir.display()
                )));
            }
        }

        tracing::debug!("Using toolchain at {}", program.display());

        Ok(Self {
            program,
            flags: config.flags.clone(),
            working_dir: config.working_dir.clone(),
            timeout: config.timeout,
        })
    }

    /// Get the resolved compiler path.
    pub fn program(&self) -> &Path {
        &self.program
    }

    fn command(&self, input: &Path, output: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.flags)
            .arg(format!("--output={}", output.display()))
            .arg(input)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl Toolchain for ProcessToolchain {
    async fn compile(&self, input: &Path, output: &Path) -> Result<()> {
        let child = self.command(input, output).spawn().map_err(Error::Launch)?;

        // Dropping the wait future on timeout drops the child, which kills it.
        let finished = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, child.wait_with_output())
                .await
                .map_err(|_| Error::Timeout(limit))?,
            None => child.wait_with_output().await,
        }?;

        if finished.status.success() {
            return Ok(());
        }

        let mut diagnostics = String::from_utf8_lossy(&finished.stdout).into_owned();
        diagnostics.push_str(&String::from_utf8_lossy(&finished.stderr));

        if diagnostics.trim().is_empty() {
            return Err(Error::NoDiagnostics {
                code: finished.status.code(),
            });
        }

        tracing::debug!(code = ?finished.status.code(), "toolchain rejected source");
        Err(Error::Compilation(diagnostics))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// A `sh -c` script acting as the compiler: `$1` is `--output=...`, `$2` the input.
    fn script(body: &str) -> ToolchainConfig {
        ToolchainConfig {
            program: PathBuf::from("sh"),
            flags: vec!["-c".into(), body.into(), "fake-compiler".into()],
            working_dir: None,
            timeout: None,
        }
    }

    fn files(temp: &TempDir) -> (PathBuf, PathBuf) {
        let input = temp.path().join("Main.elm");
        let output = temp.path().join("out.js");
        std::fs::write(&input, "console.log(1)").unwrap();
        (input, output)
    }

    #[tokio::test]
    async fn test_success_writes_artifact() {
        let temp = TempDir::new().unwrap();
        let (input, output) = files(&temp);
        let toolchain = ProcessToolchain::new(&script(r#"cp "$2" "${1#--output=}""#)).unwrap();

        toolchain.compile(&input, &output).await.unwrap();
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "console.log(1)");
    }

    #[tokio::test]
    async fn test_failure_keeps_raw_diagnostics() {
        let temp = TempDir::new().unwrap();
        let (input, output) = files(&temp);
        let toolchain = ProcessToolchain::new(&script(
            r#"echo "Error at $2: unexpected token" >&2; exit 1"#,
        ))
        .unwrap();

        match toolchain.compile(&input, &output).await {
            Err(Error::Compilation(raw)) => {
                assert_eq!(raw, format!("Error at {}: unexpected token\n", input.display()));
            }
            other => panic!("expected compilation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_combines_stdout_and_stderr() {
        let temp = TempDir::new().unwrap();
        let (input, output) = files(&temp);
        let toolchain =
            ProcessToolchain::new(&script("printf out; printf err >&2; exit 1")).unwrap();

        match toolchain.compile(&input, &output).await {
            Err(Error::Compilation(raw)) => assert_eq!(raw, "outerr"),
            other => panic!("expected compilation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_silent_failure() {
        let temp = TempDir::new().unwrap();
        let (input, output) = files(&temp);
        let toolchain = ProcessToolchain::new(&script("exit 3")).unwrap();

        let err = toolchain.compile(&input, &output).await.unwrap_err();
        assert!(matches!(err, Error::NoDiagnostics { code: Some(3) }));
    }

    #[tokio::test]
    async fn test_timeout_kills_compiler() {
        let temp = TempDir::new().unwrap();
        let (input, output) = files(&temp);
        let mut config = script("sleep 5");
        config.timeout = Some(Duration::from_millis(100));
        let toolchain = ProcessToolchain::new(&config).unwrap();

        let started = std::time::Instant::now();
        let err = toolchain.compile(&input, &output).await.unwrap_err();
        assert!(matches!(err, Error::Timeout(_)));
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[tokio::test]
    async fn test_runs_in_working_dir() {
        let temp = TempDir::new().unwrap();
        let (input, output) = files(&temp);
        let work = TempDir::new().unwrap();
        let mut config = script(r#"pwd > "${1#--output=}""#);
        config.working_dir = Some(work.path().to_path_buf());
        let toolchain = ProcessToolchain::new(&config).unwrap();

        toolchain.compile(&input, &output).await.unwrap();
        let pwd = std::fs::read_to_string(&output).unwrap();
        assert_eq!(
            std::fs::canonicalize(pwd.trim()).unwrap(),
            std::fs::canonicalize(work.path()).unwrap()
        );
    }

    #[test]
    fn test_missing_program() {
        let config = ToolchainConfig {
            program: PathBuf::from("kiln-no-such-compiler"),
            ..Default::default()
        };
        let err = ProcessToolchain::new(&config).unwrap_err();
        assert!(matches!(err, Error::Toolchain(_)));
    }
}
