use log::warn;
use std::collections::HashMap;
use std::f64::consts::{E, PI, TAU};
use std::fmt;
use std::sync::Arc;

/// Gives a value to a bare identifier.
///
/// `name` borrows directly from the evaluated input.
pub trait VariableResolver {
    fn resolve(&self, name: &str) -> f64;
}

/// Gives a value to an identifier followed by an argument list.
pub trait FunctionResolver {
    fn call(&self, name: &str, args: &[f64]) -> f64;
}

impl<F> VariableResolver for F
where
    F: Fn(&str) -> f64,
{
    fn resolve(&self, name: &str) -> f64 {
        self(name)
    }
}

impl<F> FunctionResolver for F
where
    F: Fn(&str, &[f64]) -> f64,
{
    fn call(&self, name: &str, args: &[f64]) -> f64 {
        self(name, args)
    }
}

/// Map backed variable table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variables {
    values: HashMap<String, f64>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table preloaded with `pi`, `e` and `tau`.
    pub fn with_constants() -> Self {
        let mut variables = Self::new();
        variables.set("pi", PI);
        variables.set("e", E);
        variables.set("tau", TAU);
        variables
    }

    pub fn set(&mut self, name: &str, value: f64) {
        self.values.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }
}

impl VariableResolver for Variables {
    /// Unknown names resolve to NaN.
    fn resolve(&self, name: &str) -> f64 {
        self.get(name).unwrap_or_else(|| {
            warn!("Variable '{}' not found", name);
            f64::NAN
        })
    }
}

impl From<HashMap<String, f64>> for Variables {
    fn from(values: HashMap<String, f64>) -> Self {
        Self { values }
    }
}

impl FromIterator<(String, f64)> for Variables {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

pub type Function = Arc<dyn Fn(&[f64]) -> f64 + Send + Sync>;

/// Registry of named functions.
#[derive(Clone, Default)]
pub struct Functions {
    functions: HashMap<String, Function>,
}

impl Functions {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every builtin from [`crate::functions`].
    pub fn with_builtins() -> Self {
        let mut functions = Self::new();
        crate::functions::register_functions(&mut functions);
        functions
    }

    /// Registers a function, replacing any previous one with the same name.
    pub fn register_function<F>(&mut self, name: &str, function: F)
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        self.functions.insert(name.to_string(), Arc::new(function));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }
}

impl FunctionResolver for Functions {
    /// Unknown names resolve to NaN.
    fn call(&self, name: &str, args: &[f64]) -> f64 {
        match self.functions.get(name) {
            Some(function) => function(args),
            None => {
                warn!("Function '{}' not registered", name);
                f64::NAN
            }
        }
    }
}

impl fmt::Debug for Functions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Functions").field("names", &names).finish()
    }
}
