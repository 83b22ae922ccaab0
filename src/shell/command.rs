//! Shell command execution.

use std::backtrace::Backtrace;
use std::collections::HashMap;
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::config::stacktrace_enabled;
use crate::error::{Result, ZScriptError};

use super::platform::{shell_flag, shell_program};

/// Output of a finished shell command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output, empty unless captured.
    pub stdout: String,

    /// Standard error, empty unless captured.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<std::path::PathBuf>,

    /// Environment variables (merged with system env).
    pub env: HashMap<String, String>,

    /// Capture stdout (if false, inherits from parent).
    pub capture_stdout: bool,

    /// Capture stderr (if false, inherits from parent).
    pub capture_stderr: bool,
}

impl CommandOptions {
    /// Options that capture both output streams.
    pub fn captured() -> Self {
        Self {
            capture_stdout: true,
            capture_stderr: true,
            ..Default::default()
        }
    }
}

/// Execute a shell command, reporting its status without failing on it.
///
/// # Errors
///
/// Returns [`ZScriptError::Io`] if the shell cannot be started.
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandOutput> {
    execute_program(&shell_program(), &[shell_flag(), command], options)
}

/// Execute `program` with `args` directly, without a shell in between.
///
/// Arguments reach the program verbatim, so they need no quoting.
///
/// # Errors
///
/// Returns [`ZScriptError::Io`] if the program cannot be started.
pub fn execute_program(
    program: &str,
    args: &[&str],
    options: &CommandOptions,
) -> Result<CommandOutput> {
    let start = Instant::now();

    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    cmd.stdin(Stdio::inherit());
    cmd.stdout(if options.capture_stdout {
        Stdio::piped()
    } else {
        Stdio::inherit()
    });
    cmd.stderr(if options.capture_stderr {
        Stdio::piped()
    } else {
        Stdio::inherit()
    });

    debug!(program, ?args, "Running command");
    let output = cmd.output()?;
    let duration = start.elapsed();

    debug!(
        program,
        status = %describe_status(&output.status),
        ?duration,
        "Command finished"
    );

    Ok(CommandOutput {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        duration,
        success: output.status.success(),
    })
}

/// Run a shell command with inherited output.
///
/// # Errors
///
/// Returns [`ZScriptError::CommandFailed`] if the command exits
/// unsuccessfully.
pub fn exec(command: &str) -> Result<()> {
    let output = execute(command, &CommandOptions::default())?;
    check(command, &output)
}

/// Run a shell command and return what it printed to standard output.
///
/// Standard error is captured and attached to the failure message.
///
/// # Errors
///
/// Returns [`ZScriptError::CommandFailed`] if the command exits
/// unsuccessfully.
pub fn get_stdout(command: &str) -> Result<String> {
    let output = execute(command, &CommandOptions::captured())?;
    check(command, &output)?;
    Ok(output.stdout)
}

/// Run a command and return success/failure.
pub fn execute_check(command: &str) -> bool {
    execute(command, &CommandOptions::captured())
        .map(|r| r.success)
        .unwrap_or(false)
}

/// Turn an unsuccessful [`CommandOutput`] into a script error.
pub fn check(command: &str, output: &CommandOutput) -> Result<()> {
    if output.success {
        Ok(())
    } else {
        Err(command_failed(command, output.exit_code, &output.stderr))
    }
}

/// Build a [`ZScriptError::CommandFailed`] for `command`.
///
/// A trace of the caller is captured when `ZSCRIPT_STACKTRACE` is on.
pub fn command_failed(command: &str, status: Option<i32>, stderr: &str) -> ZScriptError {
    let trace = stacktrace_enabled().then(|| Backtrace::force_capture().to_string());

    ZScriptError::CommandFailed {
        command: command.to_string(),
        status,
        message: stderr.to_string(),
        trace,
    }
}

/// Describe an exit status for logs.
pub fn describe_status(status: &ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}
