//! String manipulation functions
//!
//! Splitting on literal separators and matching against the minimal
//! regular-expression grammar of the underlying engine.

mod regexp;
mod split;

pub(crate) use regexp::{regexp_like, regexp_replace, regexp_substr};
pub(crate) use split::split_part;
