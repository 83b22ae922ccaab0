//! Reading answers from the user.

use console::Term;
use dialoguer::Input;

use crate::error::{Result, ZScriptError};

/// Convert dialoguer errors to ZScriptError.
fn map_dialoguer_err(e: dialoguer::Error) -> ZScriptError {
    ZScriptError::Io(e.into())
}

/// Print `question` and wait for one line of input.
///
/// An empty answer is allowed and returned as an empty string.
pub fn read_input(question: &str) -> Result<String> {
    read_input_on(question, &Term::stdout())
}

/// Like [`read_input`], on an explicit terminal.
pub fn read_input_on(question: &str, term: &Term) -> Result<String> {
    Input::<String>::new()
        .with_prompt(question.trim_end())
        .allow_empty(true)
        .interact_text_on(term)
        .map_err(map_dialoguer_err)
}
