//! Shared helpers for black-box specs.

#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::Value;
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;

/// A temporary working directory with its own board store
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root
    pub fn file(&self, rel: &str, content: &str) -> &Self {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
        self
    }

    /// `rb` running in the project, store at the default location
    pub fn rb(&self) -> Cli {
        let mut cmd = Command::cargo_bin("rb").unwrap();
        cmd.current_dir(self.path())
            .env_remove("RB_STORE_PATH")
            .env_remove("RB_PHASES")
            .env_remove("RUST_LOG");
        Cli { cmd }
    }

    /// Run `rb --format json <args>`, expect success, parse stdout
    pub fn json(&self, args: &[&str]) -> Value {
        self.rb().args(&["--format", "json"]).args(args).passes().json()
    }
}

pub struct Cli {
    cmd: Command,
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    #[track_caller]
    pub fn passes(mut self) -> Run {
        let output = self.cmd.output().unwrap();
        let run = Run { output };
        assert!(
            run.output.status.success(),
            "expected success, got {:?}\nstdout:\n{}\nstderr:\n{}",
            run.output.status.code(),
            run.stdout(),
            run.stderr()
        );
        run
    }

    #[track_caller]
    pub fn fails(mut self) -> Run {
        let output = self.cmd.output().unwrap();
        let run = Run { output };
        assert!(
            !run.output.status.success(),
            "expected failure\nstdout:\n{}",
            run.stdout()
        );
        run
    }
}

pub struct Run {
    output: Output,
}

impl Run {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn code(&self) -> Option<i32> {
        self.output.status.code()
    }

    #[track_caller]
    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout missing {:?}:\n{}",
            expected,
            stdout
        );
        self
    }

    #[track_caller]
    pub fn stdout_lacks(self, unexpected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            !stdout.contains(unexpected),
            "stdout has {:?}:\n{}",
            unexpected,
            stdout
        );
        self
    }

    #[track_caller]
    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr missing {:?}:\n{}",
            expected,
            stderr
        );
        self
    }

    #[track_caller]
    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    #[track_caller]
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.stdout()).unwrap()
    }
}

/// String field of a JSON object
pub fn field<'a>(value: &'a Value, key: &str) -> &'a str {
    value[key].as_str().unwrap()
}
