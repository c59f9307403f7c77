//! A tiny expression engine.
//!
//! Expressions use `+ - * /`, parentheses, unary signs, numeric literals,
//! variables and function calls. Identifiers are resolved through
//! caller-supplied [`VariableResolver`] and [`FunctionResolver`]
//! implementations; the crate ships [`Variables`] and [`Functions`] as ready
//! made ones.
//!
//! ```
//! use tinycalc_rs::{Evaluator, Functions, Variables};
//!
//! let mut variables = Variables::with_constants();
//! variables.set("r", 2.0);
//! let functions = Functions::with_builtins();
//!
//! let evaluator = Evaluator::new()
//!     .with_variables(&variables)
//!     .with_functions(&functions);
//! let area = evaluator.evaluate("pi * pow(r, 2)").unwrap();
//! assert!((area - 12.566).abs() < 1e-3);
//! ```

pub mod error;
pub mod evaluator;
pub mod functions;
mod parser;
pub mod resolver;
pub mod scanner;

pub use error::{ErrorKind, EvalError};
pub use evaluator::{calc, evaluate, Evaluator, ARGUMENT_LIMIT};
pub use resolver::{Function, FunctionResolver, Functions, VariableResolver, Variables};

use std::collections::HashMap;

/// Evaluates `expression` with `context` as variables, on top of the
/// constants `pi`, `e` and `tau`, and every builtin function.
pub fn evaluate_expression(
    expression: &str,
    context: &HashMap<String, f64>,
) -> Result<f64, EvalError> {
    let mut variables = Variables::with_constants();
    for (name, value) in context {
        variables.set(name, *value);
    }
    let functions = Functions::with_builtins();

    Evaluator::new()
        .with_variables(&variables)
        .with_functions(&functions)
        .evaluate(expression)
}
