//! Turning script errors into diagnostics and exit statuses.

use std::process::ExitCode;

use crate::config::{ScriptConfig, STACKTRACE_ENV};
use crate::error::{AvailableCommand, Result, ZScriptError};
use crate::format::Theme;

use super::DEFAULT_COMMAND;

/// Prints script errors and picks the process exit status.
#[derive(Debug, Clone)]
pub struct Reporter {
    theme: Theme,
    stacktrace: bool,
}

impl Reporter {
    /// Create a reporter from explicit settings.
    pub fn new(config: ScriptConfig) -> Self {
        Self {
            theme: Theme::for_color(config.color),
            stacktrace: config.stacktrace,
        }
    }

    /// Create a reporter from the process environment.
    pub fn from_env() -> Self {
        Self::new(ScriptConfig::from_env())
    }

    /// Render the diagnostic block for a script error.
    ///
    /// Fatal errors render as their plain message.
    pub fn render(&self, err: &ZScriptError) -> String {
        match err {
            ZScriptError::UnknownCommand {
                available, path, ..
            } => self.render_unknown_command(err, available, path),
            ZScriptError::CommandFailed {
                command,
                status,
                trace,
                message,
            } => self.render_command_failed(command, *status, message, trace.as_deref()),
            _ => format!("{}\n", self.theme.format_error(&err.to_string())),
        }
    }

    /// Map the outcome of a top-level dispatch to an exit status.
    ///
    /// # Panics
    ///
    /// Panics with the error when it is not a script error.
    pub fn conclude(&self, result: Result<()>) -> ExitCode {
        ExitCode::from(self.status(result))
    }

    /// Print the diagnostic for a script error and return its status.
    ///
    /// # Panics
    ///
    /// Panics with the error when it is not a script error.
    pub fn status(&self, result: Result<()>) -> u8 {
        let err = match result {
            Ok(()) => return 0,
            Err(err) => err,
        };

        match err.exit_code() {
            Some(code) => {
                tracing::debug!(code, "Script error: {}", err);
                eprint!("{}", self.render(&err));
                code
            }
            None => panic!("unhandled error in command: {:?}", err),
        }
    }

    fn render_unknown_command(
        &self,
        err: &ZScriptError,
        available: &[AvailableCommand],
        path: &[String],
    ) -> String {
        let mut out = format!("{}\n", self.theme.format_error(&err.to_string()));

        if available.is_empty() {
            out.push_str("No commands are registered here.\n");
            return out;
        }

        if path.is_empty() {
            out.push_str("Available commands:\n");
        } else {
            out.push_str(&format!(
                "Available sub-commands of \"{}\":\n",
                path.join(" ")
            ));
        }

        for command in available {
            let name = self.theme.command.apply_to(&command.name);
            if command.is_default {
                let marker = self.theme.default_marker.apply_to("(default)");
                out.push_str(&format!("  {} {}\n", name, marker));
            } else {
                out.push_str(&format!("  {}\n", name));
            }
        }

        if available.iter().any(|c| c.is_default) {
            out.push_str(&format!(
                "{}\n",
                self.theme.format_hint(&format!(
                    "Omit the command name to run \"{}\".",
                    DEFAULT_COMMAND
                ))
            ));
        }

        out
    }

    fn render_command_failed(
        &self,
        command: &str,
        status: Option<i32>,
        message: &str,
        trace: Option<&str>,
    ) -> String {
        let headline = match status {
            Some(code) => format!("command failed with exit status {}", code),
            None => "command was terminated before it could finish".to_string(),
        };

        let mut out = format!("{}\n", self.theme.format_error(&headline));
        out.push_str(&format!("  {}\n", self.theme.shell.apply_to(format!("$ {}", command))));

        let message = message.trim_end();
        if !message.is_empty() {
            for line in message.lines() {
                out.push_str(&format!("  {}\n", self.theme.dim.apply_to(line)));
            }
        }

        match trace {
            Some(trace) if self.stacktrace => {
                out.push_str("Stack trace:\n");
                out.push_str(trace.trim_end());
                out.push('\n');
            }
            _ => out.push_str(&format!(
                "{}\n",
                self.theme.format_hint(&format!(
                    "Re-run with {}=1 to print the full stack trace.",
                    STACKTRACE_ENV
                ))
            )),
        }

        out
    }
}
