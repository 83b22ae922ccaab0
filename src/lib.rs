//! Z-Script - a toolkit for build and automation scripts.
//!
//! A Z-Script is a small Rust binary that registers named commands and
//! dispatches one of them based on its arguments. Command bodies can
//! register sub-commands on the context they receive, so nested CLIs are
//! built by plain recursion.
//!
//! # Modules
//!
//! - [`context`] - Command registration, dispatch and top-level reporting
//! - [`error`] - Error types and result aliases
//! - [`flags`] - Flag parsing for command bodies
//! - [`format`] - ANSI text formatting
//! - [`shell`] - Shell commands, file operations and user input
//! - [`git`] - Git helpers
//! - [`config`] - Environment toggles
//! - [`logging`] - Tracing setup
//!
//! # Example
//!
//! ```no_run
//! use std::process::ExitCode;
//! use zscript::ExecutionContext;
//!
//! fn main() -> ExitCode {
//!     let mut script = ExecutionContext::from_env();
//!
//!     script.add_command("all", |_, _| {
//!         println!("Hello, world!");
//!         Ok(())
//!     });
//!
//!     script.add_command("build", |args, _| {
//!         zscript::shell::exec(&format!("cargo build {}", args.join(" ")))
//!     });
//!
//!     script.run_main()
//! }
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod flags;
pub mod format;
pub mod git;
pub mod logging;
pub mod shell;

pub use context::{ExecutionContext, Reporter, DEFAULT_COMMAND};
pub use error::{Result, ZScriptError};
pub use flags::{parse_args, FlagSpec, ParsedArguments};
