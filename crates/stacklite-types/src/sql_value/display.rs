//! Display implementation for SqlValue

use crate::sql_value::SqlValue;
use std::fmt;

/// Display implementation for SqlValue (how values are shown to users)
impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Integer(i) => write!(f, "{}", i),
            SqlValue::Character(s) => write!(f, "{}", s),
            SqlValue::Varchar(s) => write!(f, "{}", s),
            SqlValue::Boolean(true) => write!(f, "TRUE"),
            SqlValue::Boolean(false) => write!(f, "FALSE"),
            SqlValue::Null => write!(f, "NULL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_display() {
        assert_eq!(format!("{}", SqlValue::Varchar("hello".to_string())), "hello");
        assert_eq!(format!("{}", SqlValue::Character("ab".to_string())), "ab");
    }

    #[test]
    fn test_boolean_display() {
        assert_eq!(format!("{}", SqlValue::Boolean(true)), "TRUE");
        assert_eq!(format!("{}", SqlValue::Boolean(false)), "FALSE");
    }

    #[test]
    fn test_null_display() {
        assert_eq!(format!("{}", SqlValue::Null), "NULL");
    }
}
