//! Parsing argument lists against a flag specification.

use std::collections::BTreeMap;

use crate::error::{Result, ZScriptError};

use super::parsed::{FlagData, ParsedArguments};

/// Token that ends flag processing.
pub const END_OF_FLAGS: &str = "--";

/// The flags a command accepts and whether each one takes a parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSpec {
    flags: BTreeMap<String, bool>,
}

impl FlagSpec {
    /// Create an empty specification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a flag that takes no parameter.
    pub fn switch(mut self, flag: impl Into<String>) -> Self {
        self.flags.insert(flag.into(), false);
        self
    }

    /// Add a flag that expects one parameter per occurrence.
    pub fn option(mut self, flag: impl Into<String>) -> Self {
        self.flags.insert(flag.into(), true);
        self
    }

    /// Check whether `token` is one of the declared flags.
    pub fn is_flag(&self, token: &str) -> bool {
        self.flags.contains_key(token)
    }

    /// Whether `flag` expects a parameter. `None` for undeclared flags.
    pub fn takes_parameter(&self, flag: &str) -> Option<bool> {
        self.flags.get(flag).copied()
    }

    /// Declared flags, sorted.
    pub fn flags(&self) -> impl Iterator<Item = &str> {
        self.flags.keys().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for FlagSpec {
    fn from_iter<T: IntoIterator<Item = (S, bool)>>(iter: T) -> Self {
        Self {
            flags: iter
                .into_iter()
                .map(|(flag, takes)| (flag.into(), takes))
                .collect(),
        }
    }
}

/// Parse `args` according to `spec`.
///
/// Only tokens that exactly match a declared flag are treated as flags;
/// everything else is a standalone argument. Everything after `--` is
/// standalone too.
///
/// # Errors
///
/// Returns [`ZScriptError::ArgumentParse`] when a flag that expects a
/// parameter is last or is followed by another declared flag.
///
/// # Example
///
/// ```
/// use zscript::flags::{parse_args, FlagSpec};
///
/// let spec = FlagSpec::new().option("-o").switch("-v");
/// let args: Vec<String> = ["a", "-o", "out", "-v", "b"].iter().map(|s| s.to_string()).collect();
///
/// let parsed = parse_args(&args, &spec).unwrap();
/// assert_eq!(parsed.args(), ["a", "b"]);
/// assert_eq!(parsed.flag_args("-o"), ["out"]);
/// assert!(parsed.has_flag("-v"));
/// ```
pub fn parse_args(args: &[String], spec: &FlagSpec) -> Result<ParsedArguments> {
    let mut flags: BTreeMap<String, FlagData> = spec
        .flags()
        .map(|flag| (flag.to_string(), FlagData::default()))
        .collect();
    let mut standalone = Vec::new();
    let mut tokens = args.iter().peekable();

    while let Some(token) = tokens.next() {
        if token == END_OF_FLAGS {
            standalone.extend(tokens.by_ref().cloned());
            break;
        }

        let Some(data) = flags.get_mut(token.as_str()) else {
            standalone.push(token.clone());
            continue;
        };

        data.occurrences += 1;

        if spec.takes_parameter(token) == Some(true) {
            match tokens.next_if(|next| !spec.is_flag(next)) {
                Some(parameter) => data.args.push(parameter.clone()),
                None => {
                    return Err(ZScriptError::parse(format!(
                        "Flag \"{}\" expects a parameter",
                        token
                    )))
                }
            }
        }
    }

    Ok(ParsedArguments::new(flags, standalone))
}
