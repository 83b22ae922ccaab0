//! Runtime settings read from the environment.

use console::Term;

/// Environment variable that enables full traces for failed shell commands.
pub const STACKTRACE_ENV: &str = "ZSCRIPT_STACKTRACE";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "ZSCRIPT_LOG";

/// Settings that change how a script reports what it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScriptConfig {
    /// Capture and print call traces for failed shell commands.
    pub stacktrace: bool,

    /// Emit ANSI styling in diagnostics, which go to stderr.
    pub color: bool,
}

impl ScriptConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self {
            stacktrace: stacktrace_enabled(),
            color: crate::format::should_use_colors(&Term::stderr()),
        }
    }
}

/// Check whether `ZSCRIPT_STACKTRACE` is switched on.
///
/// Accepts `1`, `true`, `yes` and `on` in any case.
pub fn stacktrace_enabled() -> bool {
    std::env::var(STACKTRACE_ENV)
        .map(|value| is_truthy(&value))
        .unwrap_or(false)
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
