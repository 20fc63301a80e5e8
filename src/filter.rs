//! Include/exclude decision policy
//!
//! Precedence:
//! 1. With include patterns, a name must match one of them and none of the
//!    exclude patterns.
//! 2. With only exclude patterns, a name is kept unless one of them matches.
//! 3. With no patterns at all, every name is kept.
//!
//! Matching is an unanchored, case-sensitive search; authors add `^`/`$` or
//! `(?i)` themselves.

use regex::Regex;

/// True if any pattern finds a match anywhere in `name`.
pub fn matches_any(name: &str, patterns: &[Regex]) -> bool {
    patterns.iter().any(|re| re.is_match(name))
}

/// Decide whether `name` should be acted upon.
pub fn should_include(name: &str, include: &[Regex], exclude: &[Regex]) -> bool {
    if !include.is_empty() {
        // Exclude only overrides names the include rules already selected.
        matches_any(name, include) && !matches_any(name, exclude)
    } else if !exclude.is_empty() {
        !matches_any(name, exclude)
    } else {
        true
    }
}
