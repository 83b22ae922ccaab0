//! Error types for Z-Script operations.
//!
//! This module defines [`ZScriptError`], the error type returned by command
//! bodies and dispatch, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Script errors (`UnknownCommand`, `ArgumentParse`, `CommandFailed`) are
//!   recoverable: the top-level entry point prints them and exits with
//!   [`ZScriptError::exit_code`]
//! - `Io` and `Other` are fatal and are never turned into a diagnostic
//! - Nested dispatch never wraps an error, so the most specific message wins

use thiserror::Error;

/// Exit status for dispatch and argument errors.
pub const EXIT_USAGE: u8 = 1;

/// Exit status for failed shell commands.
pub const EXIT_CHILD_FAILURE: u8 = 2;

/// One entry in the listing attached to an unknown-command error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableCommand {
    /// Registered name.
    pub name: String,

    /// Whether this is the command dispatched when no name is given.
    pub is_default: bool,
}

/// Core error type for Z-Script operations.
#[derive(Debug, Error)]
pub enum ZScriptError {
    /// No command with this name is registered in the dispatching context.
    #[error("unknown command \"{name}\"")]
    UnknownCommand {
        name: String,
        /// Commands registered in the same context, sorted by name.
        available: Vec<AvailableCommand>,
        /// Names of the commands that led to the failing context.
        path: Vec<String>,
    },

    /// Command-line flags could not be parsed.
    #[error("{message}")]
    ArgumentParse { message: String },

    /// A shell command exited unsuccessfully.
    #[error("command `{command}` failed: {message}")]
    CommandFailed {
        command: String,
        status: Option<i32>,
        message: String,
        /// Captured call trace, present only when `ZSCRIPT_STACKTRACE` is on.
        trace: Option<String>,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ZScriptError {
    /// Build an argument parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ArgumentParse {
            message: message.into(),
        }
    }

    /// Whether the top-level handler reports this error instead of treating
    /// it as a bug.
    pub fn is_script_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownCommand { .. } | Self::ArgumentParse { .. } | Self::CommandFailed { .. }
        )
    }

    /// Process exit status for a script error, `None` for fatal errors.
    pub fn exit_code(&self) -> Option<u8> {
        match self {
            Self::UnknownCommand { .. } | Self::ArgumentParse { .. } => Some(EXIT_USAGE),
            Self::CommandFailed { .. } => Some(EXIT_CHILD_FAILURE),
            Self::Io(_) | Self::Other(_) => None,
        }
    }
}

/// Result type alias for Z-Script operations.
pub type Result<T> = std::result::Result<T, ZScriptError>;
