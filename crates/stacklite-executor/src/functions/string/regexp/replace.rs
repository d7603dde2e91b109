//! Iterative pattern replacement
//!
//! Walks the subject with a cursor, appending each unmatched prefix and
//! the replacement text into one growable output buffer.

use crate::errors::ExecutorError;

use super::matcher::CompiledPattern;

/// Replace every match of `pattern` in `subject` with `replacement`.
///
/// Match offsets from the facade are absolute, so the prefix appended
/// each round is exactly `subject[cursor..start]`. A zero-length match
/// copies one character past the match point before searching again,
/// which guarantees the cursor advances every iteration; an empty match
/// at the end of the subject appends its replacement and terminates.
/// With no match anywhere, the result is an owned copy of `subject`.
pub(super) fn replace_all(
    subject: &str,
    pattern: &CompiledPattern,
    replacement: &str,
) -> Result<String, ExecutorError> {
    let mut output = String::new();
    let mut cursor = 0;

    while let Some((start, length)) = pattern.find_first(subject, cursor) {
        reserve(&mut output, start - cursor + replacement.len())?;
        output.push_str(&subject[cursor..start]);
        output.push_str(replacement);

        if length > 0 {
            cursor = start + length;
            continue;
        }

        // Zero-length match: consume one character, or stop at the end.
        match subject[start..].chars().next() {
            Some(c) => {
                reserve(&mut output, c.len_utf8())?;
                output.push(c);
                cursor = start + c.len_utf8();
            }
            None => {
                cursor = start;
                break;
            }
        }
    }

    reserve(&mut output, subject.len() - cursor)?;
    output.push_str(&subject[cursor..]);
    Ok(output)
}

/// Grow the output buffer, surfacing allocator refusal as a recoverable
/// error rather than an abort.
fn reserve(buffer: &mut String, additional: usize) -> Result<(), ExecutorError> {
    buffer.try_reserve(additional).map_err(|_| ExecutorError::OutOfMemory)
}

#[cfg(test)]
mod tests {
    use super::super::matcher::compile;
    use super::*;

    #[test]
    fn test_replace_single_match() {
        let pattern = compile("b+").unwrap();
        assert_eq!(replace_all("abbc", &pattern, "-").unwrap(), "a-c");
    }

    #[test]
    fn test_replace_multiple_matches() {
        let pattern = compile("[0-9]+").unwrap();
        assert_eq!(replace_all("a1b22c333", &pattern, "#").unwrap(), "a#b#c#");
    }

    #[test]
    fn test_replace_no_match_copies_subject() {
        let pattern = compile("z").unwrap();
        assert_eq!(replace_all("abc", &pattern, "-").unwrap(), "abc");
    }

    #[test]
    fn test_replace_zero_length_matches_terminate() {
        // x* matches empty at every position of a subject with no x
        let pattern = compile("x*").unwrap();
        assert_eq!(replace_all("abc", &pattern, "-").unwrap(), "-a-b-c-");
    }

    #[test]
    fn test_replace_empty_pattern() {
        let pattern = compile("").unwrap();
        assert_eq!(replace_all("ab", &pattern, ".").unwrap(), ".a.b.");
        assert_eq!(replace_all("", &pattern, ".").unwrap(), ".");
    }

    #[test]
    fn test_replace_mixed_empty_and_real_matches() {
        // a* alternates between consuming runs of a and matching empty
        let pattern = compile("a*").unwrap();
        assert_eq!(replace_all("aabcaa", &pattern, "").unwrap(), "bc");
        // The empty match right after a consumed run inserts a replacement too
        assert_eq!(replace_all("aabcaa", &pattern, "-").unwrap(), "--b-c--");
    }

    #[test]
    fn test_replace_zero_length_advances_over_multibyte() {
        let pattern = compile("x*").unwrap();
        assert_eq!(replace_all("héo", &pattern, "-").unwrap(), "-h-é-o-");
    }

    #[test]
    fn test_replace_with_empty_replacement() {
        let pattern = compile("l+").unwrap();
        assert_eq!(replace_all("hello world", &pattern, "").unwrap(), "heo word");
    }
}
