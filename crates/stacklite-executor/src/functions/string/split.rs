//! SPLIT_PART function for SQL
//!
//! Splits a string on a literal (non-regex) separator and returns the
//! part at a one-based index; negative indices count from the last part.

use crate::errors::ExecutorError;

/// SPLIT_PART(source, separator, index) - Select one part of a split string
///
/// Splitting on `k` non-overlapping separator occurrences yields `k + 1`
/// parts; consecutive separators produce empty parts. Index 1 is the
/// first part, index -1 the last. An out-of-range index, an empty
/// separator, or any NULL argument produces NULL.
pub(crate) fn split_part(
    args: &[stacklite_types::SqlValue],
) -> Result<stacklite_types::SqlValue, ExecutorError> {
    if args.len() != 3 {
        return Err(ExecutorError::InvalidArgumentCount {
            function: "SPLIT_PART".to_string(),
            expected: 3,
            got: args.len(),
        });
    }

    match (&args[0], &args[1], &args[2]) {
        (stacklite_types::SqlValue::Null, _, _)
        | (_, stacklite_types::SqlValue::Null, _)
        | (_, _, stacklite_types::SqlValue::Null) => Ok(stacklite_types::SqlValue::Null),
        (
            stacklite_types::SqlValue::Varchar(source)
            | stacklite_types::SqlValue::Character(source),
            stacklite_types::SqlValue::Varchar(separator)
            | stacklite_types::SqlValue::Character(separator),
            stacklite_types::SqlValue::Integer(index),
        ) => {
            // An empty separator is a caller error reported as NULL, not a
            // degenerate per-character split.
            if separator.is_empty() {
                return Ok(stacklite_types::SqlValue::Null);
            }

            let parts = split(source, separator);
            match resolve_index(*index, parts.len()) {
                Some(offset) => {
                    Ok(stacklite_types::SqlValue::Varchar(parts[offset].to_string()))
                }
                None => Ok(stacklite_types::SqlValue::Null),
            }
        }
        (a, b, c) => Err(ExecutorError::UnsupportedFeature(format!(
            "SPLIT_PART requires (string, string, integer) arguments, got {:?}, {:?}, {:?}",
            a, b, c
        ))),
    }
}

/// Split `source` on every non-overlapping occurrence of `separator`.
///
/// Parts borrow from `source`; `k` separator occurrences yield exactly
/// `k + 1` parts, empty parts included.
fn split<'a>(source: &'a str, separator: &str) -> Vec<&'a str> {
    source.split(separator).collect()
}

/// Map a one-based (or negative, counted from the end) part index onto a
/// zero-based offset in `[0, count)`.
///
/// Index 0 and anything out of range resolve to None. Checked arithmetic
/// keeps `i64::MIN` from wrapping.
fn resolve_index(index: i64, count: usize) -> Option<usize> {
    let count = i64::try_from(count).ok()?;
    let offset = if index < 0 { count.checked_add(index)? } else { index.checked_sub(1)? };
    if (0..count).contains(&offset) {
        Some(offset as usize)
    } else {
        None
    }
}
