//! Shell command execution and filesystem helpers for command bodies.
//!
//! Failed shell commands surface as
//! [`ZScriptError::CommandFailed`](crate::ZScriptError::CommandFailed), which
//! the top-level entry point reports with exit status 2. Filesystem failures
//! are plain IO errors.

pub mod command;
pub mod fs;
pub mod input;
pub mod platform;

pub use command::{
    check, command_failed, exec, execute, execute_check, execute_program, get_stdout,
    CommandOptions, CommandOutput,
};
pub use fs::{
    copy_file, create_folder, create_folder_with_mode, delete_file, delete_folder, file_exists,
    is_file_executable, is_file_readable, is_file_writeable, is_folder, is_newer_than,
    modification_time, recursive_modification_time, rename,
};
pub use input::read_input;
pub use platform::{shell_flag, shell_program};
