//! Identifier case conversion.

use regex::Regex;
use std::sync::LazyLock;

/// Suffix marking a sizing token as a multiple of the em base unit.
pub const EM_SUFFIX: &str = "Em";

/// A lowercase letter directly followed by an uppercase one.
static CASE_BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("case boundary regex is valid"));

/// Convert a camelCase identifier to kebab-case.
///
/// `primaryColor` becomes `primary-color`. Runs of capitals are not split
/// (`borderRGB` becomes `border-rgb`). Total over any input, and idempotent.
pub fn camel_to_kebab(name: &str) -> String {
    CASE_BOUNDARY_RE
        .replace_all(name, "$1-$2")
        .to_lowercase()
}

/// Strip the `Em` suffix, returning the base name.
///
/// Returns `None` when the name has no such suffix or when nothing would be
/// left after stripping it.
pub fn strip_em_suffix(name: &str) -> Option<&str> {
    name.strip_suffix(EM_SUFFIX).filter(|base| !base.is_empty())
}
