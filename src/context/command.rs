//! Registered commands.

use std::fmt;

use crate::error::Result;

use super::ExecutionContext;

/// Body of a command.
///
/// Receives the arguments that followed the command name and a fresh child
/// context in which it may register and dispatch sub-commands.
pub type Behavior = Box<dyn FnMut(&[String], &mut ExecutionContext) -> Result<()>>;

/// A named unit of behavior registered in an [`ExecutionContext`].
pub struct Command {
    name: String,
    behavior: Behavior,
}

impl Command {
    /// Create a command from a name and a body.
    pub fn new<F>(name: impl Into<String>, behavior: F) -> Self
    where
        F: FnMut(&[String], &mut ExecutionContext) -> Result<()> + 'static,
    {
        Self {
            name: name.into(),
            behavior: Box::new(behavior),
        }
    }

    /// The name this command is registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the body.
    pub fn execute(&mut self, args: &[String], context: &mut ExecutionContext) -> Result<()> {
        (self.behavior)(args, context)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
