//! Explicit scalar-function registration
//!
//! Host setup code installs functions with one explicit call instead of a
//! process-wide library entry point. The registry owns the name-to-
//! implementation mapping and checks arity at the call boundary, so the
//! implementations themselves stay arity-agnostic for the host.

use std::collections::HashMap;

use crate::errors::ExecutorError;
use crate::functions::string;

type ScalarFn =
    fn(&[stacklite_types::SqlValue]) -> Result<stacklite_types::SqlValue, ExecutorError>;

/// A scalar function implementation together with its fixed arity.
pub struct ScalarFunction {
    pub name: &'static str,
    pub arity: usize,
    func: ScalarFn,
}

/// Name-to-function mapping for a host expression evaluator.
///
/// Lookups are case-insensitive. The registry holds plain function
/// pointers and no other state, so a shared reference can be used from
/// concurrent workers.
pub struct FunctionRegistry {
    functions: HashMap<String, ScalarFunction>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self { functions: HashMap::new() }
    }

    /// A registry preloaded with the built-in string functions.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("SPLIT_PART", 3, string::split_part);
        registry.register("REGEXP_LIKE", 2, string::regexp_like);
        registry.register("REGEXP_SUBSTR", 2, string::regexp_substr);
        registry.register("REGEXP_REPLACE", 3, string::regexp_replace);
        registry
    }

    pub fn register(&mut self, name: &'static str, arity: usize, func: ScalarFn) {
        self.functions.insert(name.to_uppercase(), ScalarFunction { name, arity, func });
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(&name.to_uppercase())
    }

    /// Look up `name`, check the argument count, and invoke.
    pub fn call(
        &self,
        name: &str,
        args: &[stacklite_types::SqlValue],
    ) -> Result<stacklite_types::SqlValue, ExecutorError> {
        let function = self.functions.get(&name.to_uppercase()).ok_or_else(|| {
            ExecutorError::UnsupportedFeature(format!("Unknown function: {}", name))
        })?;

        if args.len() != function.arity {
            return Err(ExecutorError::InvalidArgumentCount {
                function: function.name.to_string(),
                expected: function.arity,
                got: args.len(),
            });
        }

        (function.func)(args)
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
