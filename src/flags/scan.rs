//! Single-flag scanning without a full specification.
//!
//! Useful for quick checks like `has_flag(args, "--uppercase")` in a command
//! body that takes no other options.

use super::parse::END_OF_FLAGS;
use super::parsed::FlagData;

/// Collect occurrences of `flag` in `args`.
///
/// Scanning stops at `--`. When `has_parameters` is set, the token after
/// each occurrence is taken as its parameter unless it starts with `-`.
pub fn scan_flag(args: &[String], flag: &str, has_parameters: bool) -> FlagData {
    let mut data = FlagData::default();

    for (i, arg) in args.iter().enumerate() {
        if arg == END_OF_FLAGS {
            break;
        }
        if arg != flag {
            continue;
        }

        data.occurrences += 1;

        if has_parameters {
            if let Some(next) = args.get(i + 1) {
                if !next.starts_with('-') {
                    data.args.push(next.clone());
                }
            }
        }
    }

    data
}

/// Check whether `flag` appears in `args` before any `--`.
pub fn has_flag(args: &[String], flag: &str) -> bool {
    scan_flag(args, flag, false).occurrences > 0
}
