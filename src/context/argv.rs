//! Splitting an argument vector into a command name and its arguments.

/// Command dispatched when the argument vector names none.
pub const DEFAULT_COMMAND: &str = "all";

/// A command invocation extracted from an argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// Name of the command to dispatch.
    pub command: String,

    /// Arguments that follow the command name.
    pub args: Vec<String>,
}

impl CommandLine {
    /// Split `args` into `[command, ...rest]`.
    ///
    /// An empty vector yields [`DEFAULT_COMMAND`]. An empty first element is
    /// treated the same way, so `zscript ""` behaves like `zscript`.
    pub fn parse(args: &[String]) -> Self {
        match args.split_first() {
            Some((first, rest)) if !first.is_empty() => Self {
                command: first.clone(),
                args: rest.to_vec(),
            },
            Some((_, rest)) => Self {
                command: DEFAULT_COMMAND.to_string(),
                args: rest.to_vec(),
            },
            None => Self {
                command: DEFAULT_COMMAND.to_string(),
                args: Vec::new(),
            },
        }
    }

    /// Whether the default command was substituted.
    pub fn is_default(&self) -> bool {
        self.command == DEFAULT_COMMAND
    }
}

/// Arguments of the current process, without the program path.
pub fn process_args() -> Vec<String> {
    std::env::args().skip(1).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_args_use_default_command() {
        let line = CommandLine::parse(&[]);
        assert_eq!(line.command, "all");
        assert!(line.args.is_empty());
        assert!(line.is_default());
    }

    #[test]
    fn first_arg_is_command_name() {
        let line = CommandLine::parse(&strings(&["foo", "bar", "baz"]));
        assert_eq!(line.command, "foo");
        assert_eq!(line.args, strings(&["bar", "baz"]));
        assert!(!line.is_default());
    }

    #[test]
    fn single_arg_has_no_remaining_args() {
        let line = CommandLine::parse(&strings(&["build"]));
        assert_eq!(line.command, "build");
        assert!(line.args.is_empty());
    }

    #[test]
    fn empty_name_falls_back_to_default() {
        let line = CommandLine::parse(&strings(&["", "x"]));
        assert_eq!(line.command, DEFAULT_COMMAND);
        assert_eq!(line.args, strings(&["x"]));
    }

    #[test]
    fn flags_are_not_command_names_specially() {
        let line = CommandLine::parse(&strings(&["-v"]));
        assert_eq!(line.command, "-v");
    }
}
