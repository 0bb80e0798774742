// Test utilities for CLI integration tests

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Exit codes used by the binary
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const ARGUMENT_ERROR: i32 = 2;
}

/// Sample text shared by the command tests.
///
/// 6 sentences, 93 characters, 21 words; THE occurs 3 times.
pub const SAMPLE_TEXT: &str = "The whale surfaced. The crew cheered!
the sea was calm
Call me Ishmael. Some years ago
never mind how long precisely
";

/// Output from CLI command execution
#[derive(Debug)]
pub struct CliOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub success: bool,
}

impl CliOutput {
    /// Check if stdout contains a string
    pub fn stdout_contains(&self, text: &str) -> bool {
        self.stdout.contains(text)
    }

    /// Check if stderr contains a string
    pub fn stderr_contains(&self, text: &str) -> bool {
        self.stderr.contains(text)
    }
}

/// Test harness for CLI commands
pub struct CliTest {
    temp_dir: TempDir,
    command: Command,
    config_content: Option<String>,
}

impl CliTest {
    /// Create a new CLI test with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");

        let mut command = Command::new(env!("CARGO_BIN_EXE_text-analyzer"));
        command.current_dir(temp_dir.path());
        // Keep the user's own settings out of the tests
        command.env_remove("TEXT_ANALYZER_TOP_WORDS");
        command.env_remove("TEXT_ANALYZER_LOG_LEVEL");
        command.env_remove("TEXT_ANALYZER_FORMAT");
        command.env("XDG_CONFIG_HOME", temp_dir.path().join("xdg"));
        command.env("HOME", temp_dir.path());

        Self {
            temp_dir,
            command,
            config_content: None,
        }
    }

    /// Add a command argument
    pub fn arg(mut self, arg: &str) -> Self {
        self.command.arg(arg);
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.command.env(key, value);
        self
    }

    /// Set configuration content, written to `config.toml` and passed with `--config`
    pub fn with_config(mut self, content: &str) -> Self {
        self.config_content = Some(content.to_string());
        self
    }

    /// Create a text file in the temp directory and return its name
    pub fn with_file(self, name: &str, content: &str) -> Self {
        std::fs::write(self.temp_dir.path().join(name), content).expect("Failed to write file");
        self
    }

    /// Get path to temp directory
    pub fn temp_path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Run the command and return output
    pub fn run(&mut self) -> CliOutput {
        if let Some(ref config) = self.config_content {
            let config_path: PathBuf = self.temp_dir.path().join("config.toml");
            std::fs::write(&config_path, config).expect("Failed to write config");
            self.command.arg("--config").arg(&config_path);
        }

        let output = self
            .command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .expect("Failed to execute command");

        CliOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(-1),
            success: output.status.success(),
        }
    }
}

/// Assert exit code and optional stdout/stderr fragments
pub fn assert_output(
    output: &CliOutput,
    exit_code: i32,
    stdout_contains: Option<&str>,
    stderr_contains: Option<&str>,
) {
    assert_eq!(
        output.exit_code, exit_code,
        "unexpected exit code\nstdout: {}\nstderr: {}",
        output.stdout, output.stderr
    );
    if let Some(text) = stdout_contains {
        assert!(
            output.stdout_contains(text),
            "stdout missing {text:?}:\n{}",
            output.stdout
        );
    }
    if let Some(text) = stderr_contains {
        assert!(
            output.stderr_contains(text),
            "stderr missing {text:?}:\n{}",
            output.stderr
        );
    }
}
