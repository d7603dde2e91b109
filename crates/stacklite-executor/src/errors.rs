#[derive(Debug, Clone, PartialEq)]
pub enum ExecutorError {
    /// Wrong number of arguments for a function with a fixed arity
    InvalidArgumentCount {
        function: String,
        expected: usize,
        got: usize,
    },
    /// Pattern rejected by the regular-expression engine
    InvalidPattern(String),
    /// Growing an output buffer failed; the call is abandoned cleanly
    OutOfMemory,
    UnsupportedFeature(String),
}

impl std::fmt::Display for ExecutorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecutorError::InvalidArgumentCount { function, expected, got } => {
                write!(f, "{} requires exactly {} arguments, got {}", function, expected, got)
            }
            ExecutorError::InvalidPattern(msg) => {
                write!(f, "Invalid regular expression: {}", msg)
            }
            ExecutorError::OutOfMemory => write!(f, "Out of memory"),
            ExecutorError::UnsupportedFeature(msg) => write!(f, "Unsupported feature: {}", msg),
        }
    }
}

impl std::error::Error for ExecutorError {}
