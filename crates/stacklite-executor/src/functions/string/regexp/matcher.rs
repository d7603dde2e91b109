//! Pattern matching facade
//!
//! Compilation and leftmost-match search are delegated to the `regex`
//! crate; this module fixes the calling convention the functions rely on:
//! match positions are absolute byte offsets into the subject, never
//! offsets relative to a search cursor.

use regex::Regex;

use crate::errors::ExecutorError;

/// A pattern compiled for repeated leftmost-first matching.
///
/// Owned by a single function call; there is no shared pattern cache.
pub(super) struct CompiledPattern {
    regex: Regex,
}

/// Compile `pattern`, mapping engine rejection to `InvalidPattern`.
pub(super) fn compile(pattern: &str) -> Result<CompiledPattern, ExecutorError> {
    match Regex::new(pattern) {
        Ok(regex) => Ok(CompiledPattern { regex }),
        Err(err) => Err(ExecutorError::InvalidPattern(err.to_string())),
    }
}

impl CompiledPattern {
    /// Leftmost match starting at or after byte offset `from`, returned
    /// as an absolute `(start, length)` pair in `subject`.
    ///
    /// Greediness and precedence are whatever the engine provides; `^`
    /// stays anchored to the start of `subject`, not at `from`.
    pub(super) fn find_first(&self, subject: &str, from: usize) -> Option<(usize, usize)> {
        self.regex.find_at(subject, from).map(|m| (m.start(), m.end() - m.start()))
    }
}
