//! Visual theme for diagnostics.

use console::{Style, Term};

/// Styles used when printing script diagnostics.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for the `Error:` prefix (red bold).
    pub error: Style,
    /// Style for command names (bold).
    pub command: Style,
    /// Style for the default-command marker (green).
    pub default_marker: Style,
    /// Style for shell command lines (dim italic).
    pub shell: Style,
    /// Style for hints (magenta dim).
    pub hint: Style,
    /// Style for secondary text (dim).
    pub dim: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            error: Style::new().red().bold().force_styling(true),
            command: Style::new().bold().force_styling(true),
            default_marker: Style::new().green().force_styling(true),
            shell: Style::new().dim().italic().force_styling(true),
            hint: Style::new().magenta().dim().force_styling(true),
            dim: Style::new().dim().force_styling(true),
        }
    }

    /// Create a theme without colors (for non-TTY or `NO_COLOR`).
    pub fn plain() -> Self {
        Self {
            error: Style::new(),
            command: Style::new(),
            default_marker: Style::new(),
            shell: Style::new(),
            hint: Style::new(),
            dim: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_color(color: bool) -> Self {
        if color {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format the `Error:` prefix followed by a message.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{} {}", self.error.apply_to("Error:"), msg)
    }

    /// Format a hint line.
    pub fn format_hint(&self, msg: &str) -> String {
        format!("{}", self.hint.apply_to(msg))
    }
}

/// Check if colors should be enabled for output written to `term`.
///
/// Each stream is checked on its own: stdout may be redirected to a file
/// while stderr is still a terminal.
pub fn should_use_colors(term: &Term) -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    term.is_term()
}
