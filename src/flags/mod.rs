//! Command-line flag parsing for command bodies.
//!
//! - [`parse_args`] parses an argument list against a [`FlagSpec`]
//! - [`ParsedArguments`] answers queries and merges flag aliases
//! - [`scan_flag`] and [`has_flag`] look for a single flag without a spec
//!
//! Parse failures are [`ZScriptError::ArgumentParse`](crate::ZScriptError)
//! errors, so a command body can return them with `?` and the top-level
//! entry point reports them without a trace.

pub mod parse;
pub mod parsed;
pub mod scan;

pub use parse::{parse_args, FlagSpec, END_OF_FLAGS};
pub use parsed::{FlagData, ParsedArguments};
pub use scan::{has_flag, scan_flag};
