//! Queryable result of flag parsing.

use std::collections::BTreeMap;

use serde::Serialize;

/// Occurrences of one flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlagData {
    /// How many times the flag was passed.
    pub occurrences: usize,

    /// Parameters passed to the flag, in order.
    pub args: Vec<String>,
}

/// Flags and standalone arguments extracted from an argument list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedArguments {
    flags: BTreeMap<String, FlagData>,
    args: Vec<String>,
}

impl ParsedArguments {
    pub(crate) fn new(flags: BTreeMap<String, FlagData>, args: Vec<String>) -> Self {
        Self { flags, args }
    }

    /// Check whether `flag` was passed at least once.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.flag_count(flag) > 0
    }

    /// Number of times `flag` was passed.
    pub fn flag_count(&self, flag: &str) -> usize {
        self.flags.get(flag).map_or(0, |data| data.occurrences)
    }

    /// Parameters passed to `flag`.
    pub fn flag_args(&self, flag: &str) -> &[String] {
        self.flags
            .get(flag)
            .map_or(&[][..], |data| data.args.as_slice())
    }

    /// Arguments not associated with any flag.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Flags this result knows about, sorted.
    pub fn flags(&self) -> impl Iterator<Item = &str> {
        self.flags.keys().map(String::as_str)
    }

    /// Treat every occurrence of `second` as an occurrence of `first`.
    ///
    /// Returns a new value in which `second` is no longer present and its
    /// occurrences and parameters are appended to `first`.
    pub fn merge_flags(&self, first: &str, second: &str) -> ParsedArguments {
        let mut flags = self.flags.clone();
        let merged = flags.remove(second).unwrap_or_default();

        let target = flags.entry(first.to_string()).or_default();
        target.occurrences += merged.occurrences;
        target.args.extend(merged.args);

        ParsedArguments {
            flags,
            args: self.args.clone(),
        }
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
