//! Regular-expression functions for SQL
//!
//! REGEXP_LIKE, REGEXP_SUBSTR and REGEXP_REPLACE over the minimal grammar
//! of the underlying matching engine. Each call compiles its own pattern;
//! a pattern the engine rejects is a user-visible error, never a silent
//! "no match".

mod matcher;
mod replace;

use crate::errors::ExecutorError;

/// REGEXP_LIKE(source, pattern) - Does the source contain a match?
///
/// Returns TRUE exactly when REGEXP_SUBSTR would return a non-NULL
/// result for the same arguments.
pub(crate) fn regexp_like(
    args: &[stacklite_types::SqlValue],
) -> Result<stacklite_types::SqlValue, ExecutorError> {
    if args.len() != 2 {
        return Err(ExecutorError::InvalidArgumentCount {
            function: "REGEXP_LIKE".to_string(),
            expected: 2,
            got: args.len(),
        });
    }

    match (&args[0], &args[1]) {
        (stacklite_types::SqlValue::Null, _) | (_, stacklite_types::SqlValue::Null) => {
            Ok(stacklite_types::SqlValue::Null)
        }
        (
            stacklite_types::SqlValue::Varchar(source)
            | stacklite_types::SqlValue::Character(source),
            stacklite_types::SqlValue::Varchar(pattern)
            | stacklite_types::SqlValue::Character(pattern),
        ) => {
            let compiled = matcher::compile(pattern)?;
            Ok(stacklite_types::SqlValue::Boolean(compiled.find_first(source, 0).is_some()))
        }
        (a, b) => Err(ExecutorError::UnsupportedFeature(format!(
            "REGEXP_LIKE requires string arguments, got {:?} and {:?}",
            a, b
        ))),
    }
}

/// REGEXP_SUBSTR(source, pattern) - First matching substring, or NULL
pub(crate) fn regexp_substr(
    args: &[stacklite_types::SqlValue],
) -> Result<stacklite_types::SqlValue, ExecutorError> {
    if args.len() != 2 {
        return Err(ExecutorError::InvalidArgumentCount {
            function: "REGEXP_SUBSTR".to_string(),
            expected: 2,
            got: args.len(),
        });
    }

    match (&args[0], &args[1]) {
        (stacklite_types::SqlValue::Null, _) | (_, stacklite_types::SqlValue::Null) => {
            Ok(stacklite_types::SqlValue::Null)
        }
        (
            stacklite_types::SqlValue::Varchar(source)
            | stacklite_types::SqlValue::Character(source),
            stacklite_types::SqlValue::Varchar(pattern)
            | stacklite_types::SqlValue::Character(pattern),
        ) => {
            let compiled = matcher::compile(pattern)?;
            match compiled.find_first(source, 0) {
                Some((start, length)) => Ok(stacklite_types::SqlValue::Varchar(
                    source[start..start + length].to_string(),
                )),
                None => Ok(stacklite_types::SqlValue::Null),
            }
        }
        (a, b) => Err(ExecutorError::UnsupportedFeature(format!(
            "REGEXP_SUBSTR requires string arguments, got {:?} and {:?}",
            a, b
        ))),
    }
}

/// REGEXP_REPLACE(source, pattern, replacement) - Substitute every match
///
/// The replacement is literal text; with no match anywhere the source is
/// returned unchanged.
pub(crate) fn regexp_replace(
    args: &[stacklite_types::SqlValue],
) -> Result<stacklite_types::SqlValue, ExecutorError> {
    if args.len() != 3 {
        return Err(ExecutorError::InvalidArgumentCount {
            function: "REGEXP_REPLACE".to_string(),
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
            stacklite_types::SqlValue::Varchar(pattern)
            | stacklite_types::SqlValue::Character(pattern),
            stacklite_types::SqlValue::Varchar(replacement)
            | stacklite_types::SqlValue::Character(replacement),
        ) => {
            let compiled = matcher::compile(pattern)?;
            let result = replace::replace_all(source, &compiled, replacement)?;
            Ok(stacklite_types::SqlValue::Varchar(result))
        }
        (a, b, c) => Err(ExecutorError::UnsupportedFeature(format!(
            "REGEXP_REPLACE requires string arguments, got {:?}, {:?}, {:?}",
            a, b, c
        ))),
    }
}
