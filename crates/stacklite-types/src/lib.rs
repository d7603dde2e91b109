//! SQL value representation
//!
//! This crate provides the value types the stacklite scalar functions
//! operate on: character strings, integers, booleans, and NULL.

mod sql_value;

pub use sql_value::SqlValue;
