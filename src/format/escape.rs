//! Escape sequence builders and a stack-based style writer.

use std::io::{self, Write};

use console::Term;

use crate::error::Result;

use super::color::{Color, Decoration};

/// Build an SGR escape sequence from codes joined with `;`.
pub fn sgr(codes: &[u8]) -> String {
    let joined = codes
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(";");
    format!("\x1b[{}m", joined)
}

/// Escape that sets the foreground color.
pub fn foreground(color: Color) -> String {
    sgr(&[color.foreground_code()])
}

/// Escape that sets the background color.
pub fn background(color: Color) -> String {
    sgr(&[color.background_code()])
}

/// Escape that turns on bold text.
pub fn bold() -> String {
    sgr(&[Decoration::Bold.code()])
}

/// Escape that turns on underlined text.
pub fn underline() -> String {
    sgr(&[Decoration::Underline.code()])
}

/// Escape that turns off bold text.
pub fn reset_bold() -> String {
    sgr(&[Decoration::Bold.reset_code()])
}

/// Escape that turns off underlined text.
pub fn reset_underline() -> String {
    sgr(&[Decoration::Underline.reset_code()])
}

/// Escape that clears every style.
pub fn reset() -> String {
    sgr(&[0])
}

/// Combine optional foreground, background and decoration in one escape.
///
/// Returns an empty string when nothing is set.
pub fn style(fg: Option<Color>, bg: Option<Color>, decoration: Option<Decoration>) -> String {
    let codes: Vec<u8> = [
        fg.map(Color::foreground_code),
        bg.map(Color::background_code),
        decoration.map(Decoration::code),
    ]
    .into_iter()
    .flatten()
    .collect();

    if codes.is_empty() {
        String::new()
    } else {
        sgr(&codes)
    }
}

/// Writes text while tracking a stack of applied styles.
///
/// Popping a style resets the terminal and re-applies what is left on the
/// stack. When disabled, no escapes are written at all.
#[derive(Debug)]
pub struct Formatter<W: Write> {
    out: W,
    stack: Vec<String>,
    enabled: bool,
}

impl Formatter<io::Stdout> {
    /// Formatter over standard output, colored when stdout is a terminal.
    pub fn stdout() -> Self {
        Self::new(io::stdout(), super::should_use_colors(&Term::stdout()))
    }
}

impl<W: Write> Formatter<W> {
    /// Create a formatter over any writer.
    pub fn new(out: W, enabled: bool) -> Self {
        Self {
            out,
            stack: Vec::new(),
            enabled,
        }
    }

    /// Whether escapes are written at all.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Number of styles currently applied.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Apply `style` on top of the current ones.
    pub fn apply(&mut self, style: impl Into<String>) -> Result<()> {
        let style = style.into();
        self.write_escape(&style)?;
        self.stack.push(style);
        Ok(())
    }

    /// Remove the most recently applied style.
    pub fn pop(&mut self) -> Result<()> {
        if self.stack.pop().is_some() {
            self.restore()?;
        }
        Ok(())
    }

    /// Remove every applied style.
    pub fn reset(&mut self) -> Result<()> {
        self.stack.clear();
        self.write_escape(&reset())
    }

    /// Write `text` in `style`, then return to the current styles.
    pub fn print(&mut self, text: &str, style: &str) -> Result<()> {
        self.write_escape(style)?;
        self.out.write_all(text.as_bytes())?;
        self.restore()
    }

    /// Write `text` followed by a newline in the current styles.
    pub fn println(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    /// Consume the formatter and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn restore(&mut self) -> Result<()> {
        let reapplied = format!("{}{}", reset(), self.stack.concat());
        self.write_escape(&reapplied)
    }

    fn write_escape(&mut self, escape: &str) -> Result<()> {
        if self.enabled {
            self.out.write_all(escape.as_bytes())?;
        }
        Ok(())
    }
}
