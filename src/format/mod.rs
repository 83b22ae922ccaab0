//! ANSI text formatting.
//!
//! - [`Color`] and [`Decoration`] map to SGR codes
//! - [`foreground`], [`bold`] and friends build escape strings that can be
//!   concatenated and embedded in output
//! - [`Formatter`] keeps a stack of applied styles
//! - [`Theme`] holds the styles used for diagnostics
//!
//! # Example
//!
//! ```
//! use zscript::format::{bold, foreground, reset, Color};
//!
//! let error = foreground(Color::Red) + &bold();
//! let line = format!("{}Error:{} something went wrong", error, reset());
//! assert!(line.starts_with("\x1b[31m\x1b[1m"));
//! ```

pub mod color;
pub mod escape;
pub mod theme;

pub use color::{Color, Decoration};
pub use escape::{
    background, bold, foreground, reset, reset_bold, reset_underline, sgr, style, underline,
    Formatter,
};
pub use theme::{should_use_colors, Theme};
