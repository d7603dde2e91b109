//! SQL Function Implementations
//!
//! This module contains the scalar SQL function implementations:
//!
//! - `string::split`: SPLIT_PART
//! - `string::regexp`: REGEXP_LIKE, REGEXP_SUBSTR, REGEXP_REPLACE
//!
//! ## Usage
//!
//! The main entry point is `eval_scalar_function()`, which dispatches to
//! the appropriate implementation based on the function name.

use crate::errors::ExecutorError;

pub(crate) mod string;

/// Evaluate a scalar function on given argument values
///
/// Function names are matched case-insensitively. NULL arguments follow
/// SQL three-valued logic: they produce a NULL result, not an error.
pub fn eval_scalar_function(
    name: &str,
    args: &[stacklite_types::SqlValue],
) -> Result<stacklite_types::SqlValue, ExecutorError> {
    match name.to_uppercase().as_str() {
        "SPLIT_PART" => string::split_part(args),
        "REGEXP_LIKE" => string::regexp_like(args),
        "REGEXP_SUBSTR" => string::regexp_substr(args),
        "REGEXP_REPLACE" => string::regexp_replace(args),

        // Unknown function
        _ => Err(ExecutorError::UnsupportedFeature(format!("Unknown function: {}", name))),
    }
}
