//! Platform-specific shell selection.

/// Shell used to interpret command strings.
///
/// `COMSPEC` on Windows, `/bin/sh` everywhere else. `SHELL` is ignored.
pub fn shell_program() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        "/bin/sh".to_string()
    }
}

/// Flag that makes [`shell_program`] run a command string.
pub fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-c"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn unix_uses_posix_sh() {
        assert_eq!(shell_program(), "/bin/sh");
        assert_eq!(shell_flag(), "-c");
    }

    #[test]
    fn shell_program_is_not_empty() {
        assert!(!shell_program().is_empty());
    }
}
