//! End-to-end tests for the kiln CLI.
//!
//! A `sh -c` script stands in for the compiler: `$1` is `--output=<path>`,
//! `$2` the staged source.

#![cfg(unix)]
#![allow(deprecated)] // Allow deprecated Command::cargo_bin for tests

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const COPY: &str = r#"cp "$2" "${1#--output=}""#;
const REJECT: &str = r#"echo "Error at $2: unexpected token" >&2; exit 1"#;

struct TestSource {
    temp_dir: TempDir,
    path: PathBuf,
}

impl TestSource {
    fn new(source: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("Main.elm");
        fs::write(&path, source).expect("Failed to write source");
        Self { temp_dir, path }
    }

    fn kiln(&self, script: &str) -> Command {
        let mut cmd = Command::cargo_bin("kiln").unwrap();
        cmd.arg("compile")
            .arg(&self.path)
            .args(["--toolchain", "sh", "--flag=-c", "--flag", script, "--flag", "fake"]);
        cmd
    }
}

#[test]
fn test_compile_to_stdout() {
    let source = TestSource::new("console.log(1)");
    source
        .kiln(COPY)
        .assert()
        .success()
        .stdout(predicate::str::contains("console.log(1)"))
        .stdout(predicate::str::contains("Elm.Main.fullscreen();"));
}

#[test]
fn test_compile_to_file() {
    let source = TestSource::new("console.log(2)");
    let out = source.temp_dir.path().join("index.html");
    source.kiln(COPY).arg("-o").arg(&out).assert().success();

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("console.log(2)"));
}

#[test]
fn test_compile_error_hides_temp_path() {
    let source = TestSource::new("main =");
    source
        .kiln(REJECT)
        .args(["--json", "--id", "req-9"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            r#"{"id":"req-9","error":"Error at : unexpected token\n"}"#,
        ));
}

#[test]
fn test_compile_error_exits_nonzero() {
    let source = TestSource::new("main =");
    source
        .kiln(REJECT)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Compilation failed"))
        .stderr(predicate::str::contains("Error at : unexpected token"));
}

#[test]
fn test_missing_toolchain() {
    let source = TestSource::new("main =");
    Command::cargo_bin("kiln")
        .unwrap()
        .arg("compile")
        .arg(&source.path)
        .args(["--toolchain", "kiln-no-such-compiler"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
