//! Scalar string functions for SQL
//!
//! This crate implements the stacklite string-manipulation functions:
//!
//! - `SPLIT_PART`: split on a literal separator, select a part by index
//! - `REGEXP_LIKE` / `REGEXP_SUBSTR` / `REGEXP_REPLACE`: match, extract,
//!   and substitute over a minimal regular-expression grammar
//!
//! Every function is pure and reentrant: a call owns its compiled pattern
//! and output buffer and releases both before returning, so the host
//! engine may evaluate rows concurrently without locking.
//!
//! The main entry points are [`eval_scalar_function`], which dispatches on
//! the function name, and [`FunctionRegistry`], which lets host setup code
//! install the functions with one explicit call.

mod errors;
mod functions;
mod registry;

pub use errors::ExecutorError;
pub use functions::eval_scalar_function;
pub use registry::{FunctionRegistry, ScalarFunction};
