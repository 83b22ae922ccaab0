//! Command registration and dispatch.
//!
//! An [`ExecutionContext`] owns a registry of named commands and the
//! argument vector it was created with. Dispatching a command hands its body
//! a fresh child context, so a body can register sub-commands and call
//! [`ExecutionContext::run`] on them. Nesting is plain recursion: each
//! registry lives only as long as the command body that owns it.
//!
//! # Example
//!
//! ```
//! use zscript::ExecutionContext;
//!
//! let mut root = ExecutionContext::new(["test", "up"]);
//! root.add_command("test", |_args, ctx| {
//!     ctx.add_command("up", |_, _| Ok(()));
//!     ctx.add_command("down", |_, _| Ok(()));
//!     ctx.run()
//! });
//! root.run().unwrap();
//! ```

pub mod argv;
pub mod command;
pub mod report;

use std::collections::BTreeMap;
use std::process::ExitCode;

use tracing::debug;

use crate::error::{AvailableCommand, Result, ZScriptError};

pub use argv::{process_args, CommandLine, DEFAULT_COMMAND};
pub use command::{Behavior, Command};
pub use report::Reporter;

/// A scope holding a command registry and the arguments available to it.
#[derive(Debug, Default)]
pub struct ExecutionContext {
    args: Vec<String>,
    path: Vec<String>,
    commands: BTreeMap<String, Command>,
}

impl ExecutionContext {
    /// Create a root context over an explicit argument vector.
    ///
    /// `args` must not include the program path.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            path: Vec::new(),
            commands: BTreeMap::new(),
        }
    }

    /// Create the root context from the process arguments.
    pub fn from_env() -> Self {
        Self::new(process_args())
    }

    /// Arguments this context was created with.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Names of the commands dispatched on the way to this context.
    ///
    /// Empty for the root context.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Register `behavior` under `name`.
    ///
    /// Registering a name twice replaces the earlier behavior.
    pub fn add_command<F>(&mut self, name: impl Into<String>, behavior: F)
    where
        F: FnMut(&[String], &mut ExecutionContext) -> Result<()> + 'static,
    {
        let name = name.into();
        let command = Command::new(name.clone(), behavior);
        if self.commands.insert(name.clone(), command).is_some() {
            debug!(command = %name, "Replaced previously registered command");
        }
    }

    /// Check whether a command is registered under `name`.
    pub fn has_command(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Registered command names, sorted.
    pub fn command_names(&self) -> Vec<&str> {
        self.commands.keys().map(String::as_str).collect()
    }

    /// Snapshot of the registry for diagnostics, sorted by name.
    pub fn available_commands(&self) -> Vec<AvailableCommand> {
        self.commands
            .keys()
            .map(|name| AvailableCommand {
                name: name.clone(),
                is_default: name == DEFAULT_COMMAND,
            })
            .collect()
    }

    /// Run the command registered under `name` with `args`.
    ///
    /// The command body receives a new child context seeded with `args`.
    /// Errors returned by the body are passed through untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ZScriptError::UnknownCommand`] if no command is registered
    /// under `name`; no behavior is invoked in that case.
    pub fn run_command<I, S>(&mut self, name: &str, args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();

        let mut path = self.path.clone();
        path.push(name.to_string());

        let command = match self.commands.get_mut(name) {
            Some(command) => command,
            None => {
                debug!(command = %name, depth = path.len(), "Unknown command");
                return Err(ZScriptError::UnknownCommand {
                    name: name.to_string(),
                    available: self.available_commands(),
                    path: self.path.clone(),
                });
            }
        };

        debug!(command = %name, depth = path.len(), ?args, "Dispatching command");

        let mut child = ExecutionContext {
            args: args.clone(),
            path,
            commands: BTreeMap::new(),
        };
        command.execute(&args, &mut child)
    }

    /// Run the command named by the first argument of this context.
    ///
    /// Falls back to [`DEFAULT_COMMAND`] when there are no arguments.
    pub fn run(&mut self) -> Result<()> {
        let CommandLine { command, args } = CommandLine::parse(&self.args);
        self.run_command(&command, args)
    }

    /// Top-level entry point for a script's `main`.
    ///
    /// Script errors are printed once and mapped to exit status 1 or 2.
    ///
    /// # Panics
    ///
    /// Any other error escapes as a panic, so it is reported as a bug with a
    /// backtrace rather than as a usage problem.
    pub fn run_main(mut self) -> ExitCode {
        let result = self.run();
        Reporter::from_env().conclude(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<(String, Vec<String>)>>>;

    fn recorder(
        log: &Log,
        label: &'static str,
    ) -> impl FnMut(&[String], &mut ExecutionContext) -> Result<()> {
        let log = Rc::clone(log);
        move |args: &[String], _: &mut ExecutionContext| {
            log.borrow_mut().push((label.to_string(), args.to_vec()));
            Ok(())
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn run_command_invokes_only_matching_behavior() {
        let log = Log::default();
        let mut ctx = ExecutionContext::new(Vec::<String>::new());
        ctx.add_command("a", recorder(&log, "a"));
        ctx.add_command("b", recorder(&log, "b"));
        ctx.add_command("c", recorder(&log, "c"));

        ctx.run_command("b", ["x", "y"]).unwrap();

        assert_eq!(*log.borrow(), vec![("b".to_string(), strings(&["x", "y"]))]);
    }

    #[test]
    fn run_command_missing_name_invokes_nothing() {
        let log = Log::default();
        let mut ctx = ExecutionContext::new(Vec::<String>::new());
        ctx.add_command("build", recorder(&log, "build"));

        let err = ctx.run_command("deploy", Vec::<String>::new()).unwrap_err();

        assert!(matches!(err, ZScriptError::UnknownCommand { ref name, .. } if name == "deploy"));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn unknown_command_lists_sorted_registry() {
        let mut ctx = ExecutionContext::new(Vec::<String>::new());
        ctx.add_command("zeta", |_, _| Ok(()));
        ctx.add_command("all", |_, _| Ok(()));
        ctx.add_command("build", |_, _| Ok(()));

        let err = ctx.run_command("nope", Vec::<String>::new()).unwrap_err();

        match err {
            ZScriptError::UnknownCommand { available, path, .. } => {
                let names: Vec<_> = available.iter().map(|c| c.name.as_str()).collect();
                assert_eq!(names, vec!["all", "build", "zeta"]);
                assert!(available[0].is_default);
                assert!(!available[1].is_default);
                assert!(path.is_empty());
            }
            other => panic!("Expected UnknownCommand, got {:?}", other),
        }
    }

    #[test]
    fn run_without_args_dispatches_default() {
        let log = Log::default();
        let mut ctx = ExecutionContext::new(Vec::<String>::new());
        ctx.add_command("all", recorder(&log, "all"));
        ctx.add_command("foo", recorder(&log, "foo"));

        ctx.run().unwrap();

        assert_eq!(*log.borrow(), vec![("all".to_string(), vec![])]);
    }

    #[test]
    fn run_splits_command_name_from_args() {
        let log = Log::default();
        let mut ctx = ExecutionContext::new(["foo", "bar", "baz"]);
        ctx.add_command("foo", recorder(&log, "foo"));

        ctx.run().unwrap();

        assert_eq!(
            *log.borrow(),
            vec![("foo".to_string(), strings(&["bar", "baz"]))]
        );
    }

    #[test]
    fn reregistering_overwrites_previous_binding() {
        let log = Log::default();
        let mut ctx = ExecutionContext::new(Vec::<String>::new());
        ctx.add_command("x", recorder(&log, "A"));
        ctx.add_command("x", recorder(&log, "B"));

        ctx.run_command("x", Vec::<String>::new()).unwrap();

        assert_eq!(*log.borrow(), vec![("B".to_string(), vec![])]);
        assert_eq!(ctx.command_names(), vec!["x"]);
    }

    #[test]
    fn child_context_is_seeded_with_command_args() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_in_body = Rc::clone(&seen);
        let mut ctx = ExecutionContext::new(["outer", "one", "two"]);
        ctx.add_command("outer", move |args, child| {
            assert_eq!(args, child.args());
            seen_in_body.borrow_mut().push(child.path().to_vec());
            Ok(())
        });

        ctx.run().unwrap();

        assert_eq!(*seen.borrow(), vec![strings(&["outer"])]);
    }

    #[test]
    fn nested_commands_dispatch_recursively() {
        let log = Log::default();
        let inner_log = Rc::clone(&log);
        let mut ctx = ExecutionContext::new(["test", "up", "fast"]);
        ctx.add_command("test", move |_, child| {
            child.add_command("up", recorder(&inner_log, "up"));
            child.add_command("down", recorder(&inner_log, "down"));
            child.run()
        });

        ctx.run().unwrap();

        assert_eq!(*log.borrow(), vec![("up".to_string(), strings(&["fast"]))]);
    }

    #[test]
    fn child_registry_is_invisible_to_parent() {
        let mut ctx = ExecutionContext::new(Vec::<String>::new());
        ctx.add_command("parent", |_, child| {
            child.add_command("inner", |_, _| Ok(()));
            assert!(!child.has_command("parent"));
            Ok(())
        });

        ctx.run_command("parent", Vec::<String>::new()).unwrap();

        assert!(!ctx.has_command("inner"));
        assert!(ctx.run_command("inner", Vec::<String>::new()).is_err());
    }

    #[test]
    fn parent_registry_is_invisible_to_child() {
        let mut ctx = ExecutionContext::new(Vec::<String>::new());
        ctx.add_command("sibling", |_, _| Ok(()));
        ctx.add_command("parent", |_, child| child.run_command("sibling", Vec::<String>::new()));

        let err = ctx.run_command("parent", Vec::<String>::new()).unwrap_err();

        assert!(matches!(err, ZScriptError::UnknownCommand { ref name, .. } if name == "sibling"));
    }

    #[test]
    fn deep_unknown_command_surfaces_unwrapped() {
        let mut ctx = ExecutionContext::new(["a", "b", "c", "missing"]);
        ctx.add_command("a", |_, a| {
            a.add_command("b", |_, b| {
                b.add_command("c", |_, c| {
                    c.add_command("present", |_, _| Ok(()));
                    c.run()
                });
                b.run()
            });
            a.run()
        });

        let err = ctx.run().unwrap_err();

        match err {
            ZScriptError::UnknownCommand {
                name,
                available,
                path,
            } => {
                assert_eq!(name, "missing");
                assert_eq!(path, strings(&["a", "b", "c"]));
                assert_eq!(available.len(), 1);
                assert_eq!(available[0].name, "present");
            }
            other => panic!("Expected UnknownCommand, got {:?}", other),
        }
    }

    #[test]
    fn non_script_errors_propagate_unchanged() {
        let mut ctx = ExecutionContext::new(["boom"]);
        ctx.add_command("boom", |_, _| Err(anyhow::anyhow!("bug in body").into()));

        let err = ctx.run().unwrap_err();

        assert!(!err.is_script_error());
        assert_eq!(err.to_string(), "bug in body");
    }

    #[test]
    fn behavior_state_persists_between_calls() {
        let mut count = 0;
        let total = Rc::new(RefCell::new(0));
        let total_in_body = Rc::clone(&total);
        let mut ctx = ExecutionContext::new(Vec::<String>::new());
        ctx.add_command("tick", move |_, _| {
            count += 1;
            *total_in_body.borrow_mut() = count;
            Ok(())
        });

        ctx.run_command("tick", Vec::<String>::new()).unwrap();
        ctx.run_command("tick", Vec::<String>::new()).unwrap();

        assert_eq!(*total.borrow(), 2);
    }

    #[test]
    fn from_env_builds_root_context() {
        let ctx = ExecutionContext::from_env();
        assert!(ctx.path().is_empty());
        assert!(ctx.command_names().is_empty());
    }
}
