//! Path helpers

use std::path::PathBuf;

/// Expand `~`, `$VAR`, and `${VAR}` in a user-supplied path.
///
/// Falls back to the raw string when expansion fails (e.g. an unset
/// variable), letting the later file-open report the real problem.
pub fn expand_user_path(raw: &str) -> PathBuf {
    shellexpand::full(raw)
        .map(|expanded| PathBuf::from(expanded.into_owned()))
        .unwrap_or_else(|_| PathBuf::from(raw))
}
