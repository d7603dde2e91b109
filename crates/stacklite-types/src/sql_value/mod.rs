//! SQL values and NULL semantics

mod display;

/// A single SQL value.
///
/// `Character` holds fixed-width CHAR data and `Varchar` variable-width
/// VARCHAR data; the string functions accept either and always produce
/// `Varchar` results.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Character(String),
    Varchar(String),
}

impl SqlValue {
    /// True for SQL NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }
}
