use crate::error::EvalError;
use crate::parser::Parser;
use crate::resolver::{FunctionResolver, VariableResolver};
use log::debug;

/// Default bound on the number of arguments in one function call.
pub const ARGUMENT_LIMIT: usize = 16;

/// Evaluates expressions against an optional variable resolver and an
/// optional function resolver.
///
/// `LIMIT` bounds the argument count of a single function call. Every call to
/// [`Evaluator::evaluate`] is independent and the evaluator holds nothing but
/// the resolver references, so it is `Send` and `Sync` whenever both
/// resolvers are `Sync`.
pub struct Evaluator<
    'r,
    V: ?Sized = fn(&str) -> f64,
    F: ?Sized = fn(&str, &[f64]) -> f64,
    const LIMIT: usize = ARGUMENT_LIMIT,
> {
    variables: Option<&'r V>,
    functions: Option<&'r F>,
}

impl<'r> Evaluator<'r> {
    /// Creates an evaluator with no resolvers and the default argument limit.
    pub fn new() -> Self {
        Self {
            variables: None,
            functions: None,
        }
    }
}

impl<'r> Default for Evaluator<'r> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r, V: ?Sized, F: ?Sized, const LIMIT: usize> Evaluator<'r, V, F, LIMIT> {
    /// Replaces the argument bound with `N`.
    ///
    /// ```
    /// use tinycalc_rs::Evaluator;
    ///
    /// let sum = |_: &str, args: &[f64]| args.iter().sum::<f64>();
    /// let evaluator = Evaluator::new()
    ///     .with_functions(&sum)
    ///     .with_argument_limit::<2>();
    /// assert_eq!(evaluator.evaluate("f(1, 2)").unwrap(), 3.0);
    /// assert!(evaluator.evaluate("f(1, 2, 3)").is_err());
    /// ```
    pub fn with_argument_limit<const N: usize>(self) -> Evaluator<'r, V, F, N> {
        Evaluator {
            variables: self.variables,
            functions: self.functions,
        }
    }

    pub fn with_variables<W>(self, variables: &'r W) -> Evaluator<'r, W, F, LIMIT>
    where
        W: VariableResolver + ?Sized,
    {
        Evaluator {
            variables: Some(variables),
            functions: self.functions,
        }
    }

    pub fn with_functions<G>(self, functions: &'r G) -> Evaluator<'r, V, G, LIMIT>
    where
        G: FunctionResolver + ?Sized,
    {
        Evaluator {
            variables: self.variables,
            functions: Some(functions),
        }
    }
}

impl<'r, V, F, const LIMIT: usize> Evaluator<'r, V, F, LIMIT>
where
    V: VariableResolver + ?Sized,
    F: FunctionResolver + ?Sized,
{
    /// Evaluates a single expression.
    ///
    /// # Returns
    ///
    /// * `Ok(f64)` with the value of the expression.
    /// * `Err(EvalError)` describing the first problem found, with the byte
    ///   offset into `expression` where it was detected.
    pub fn evaluate(&self, expression: &str) -> Result<f64, EvalError> {
        debug!("Evaluating expression: {}", expression);
        let result =
            Parser::<V, F, LIMIT>::new(expression, self.variables, self.functions).parse();
        debug!("Evaluation result: {:?}", result);
        result
    }
}

/// Evaluates `expression` with the default argument limit.
///
/// ```
/// use tinycalc_rs::evaluate;
///
/// let lookup = |name: &str| if name == "x" { 5.0 } else { f64::NAN };
/// assert_eq!(evaluate("x + 1", Some(&lookup), None).unwrap(), 6.0);
/// assert_eq!(evaluate("2 + 3 * 4", None, None).unwrap(), 14.0);
/// ```
pub fn evaluate(
    expression: &str,
    variables: Option<&dyn VariableResolver>,
    functions: Option<&dyn FunctionResolver>,
) -> Result<f64, EvalError> {
    Parser::<_, _, ARGUMENT_LIMIT>::new(expression, variables, functions).parse()
}

/// Error slot form of [`evaluate`].
///
/// Returns `0.0` on failure and, when `error` is given, stores the error in
/// it. On success the slot is cleared.
pub fn calc(
    expression: &str,
    variables: Option<&dyn VariableResolver>,
    functions: Option<&dyn FunctionResolver>,
    error: Option<&mut Option<EvalError>>,
) -> f64 {
    let (value, failure) = match evaluate(expression, variables, functions) {
        Ok(value) => (value, None),
        Err(err) => (0.0, Some(err)),
    };

    if let Some(slot) = error {
        *slot = failure;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::resolver::{Functions, Variables};
    use crate::scanner::TokenKind;
    use std::cell::Cell;

    fn assert_send_sync<T: Send + Sync>(_: &T) {}

    #[test]
    fn test_evaluator_is_sync_with_sync_resolvers() {
        let variables = Variables::with_constants();
        let functions = Functions::with_builtins();
        let lookup = |_: &str| 1.0;

        assert_send_sync(&Evaluator::new());
        assert_send_sync(&Evaluator::new().with_variables(&variables));
        assert_send_sync(
            &Evaluator::new()
                .with_variables(&lookup)
                .with_functions(&functions)
                .with_argument_limit::<4>(),
        );
    }

    #[test]
    fn test_evaluate_without_resolvers() {
        let evaluator = Evaluator::new();
        assert_eq!(evaluator.evaluate("2 + 3 * 4").unwrap(), 14.0);
        assert_eq!(evaluator.evaluate("(2 + 3) * 4").unwrap(), 20.0);
        assert_eq!(evaluator.evaluate("1/0").unwrap(), f64::INFINITY);
        assert_eq!(evaluator.evaluate("1\x0B+ 2").unwrap(), 3.0);
    }

    #[test]
    fn test_evaluate_with_resolvers() {
        let mut variables = Variables::with_constants();
        variables.set("price", 100.0);
        variables.set("volume", 20.0);
        let functions = Functions::with_builtins();

        let evaluator = Evaluator::new()
            .with_variables(&variables)
            .with_functions(&functions);

        assert_eq!(evaluator.evaluate("price + 20 * volume").unwrap(), 500.0);
        assert_eq!(evaluator.evaluate("max(price, volume, 3)").unwrap(), 100.0);
        assert_eq!(evaluator.evaluate("round(pi * 100) / 100").unwrap(), 3.14);
        assert_eq!(evaluator.evaluate("sqrt(pow(3, 2) + 16)").unwrap(), 5.0);
    }

    #[test]
    fn test_missing_callbacks() {
        let evaluator = Evaluator::new();
        assert_eq!(
            evaluator.evaluate("x + 1").unwrap_err(),
            EvalError::new(ErrorKind::MissingVariableCallback, 0)
        );
        assert_eq!(
            evaluator.evaluate("1 + f()").unwrap_err(),
            EvalError::new(ErrorKind::MissingFunctionCallback, 4)
        );
    }

    #[test]
    fn test_default_argument_limit() {
        let count = |_: &str, args: &[f64]| args.len() as f64;

        let sixteen = format!("f({}1)", "1,".repeat(15));
        assert_eq!(evaluate(&sixteen, None, Some(&count)).unwrap(), 16.0);

        // The 17th argument starts at offset 2 + 16 * 2.
        let twenty_one = format!("f({}1)", "1,".repeat(20));
        assert_eq!(
            evaluate(&twenty_one, None, Some(&count)).unwrap_err(),
            EvalError::new(ErrorKind::TooManyArguments { limit: 16 }, 34)
        );
    }

    #[test]
    fn test_repeated_evaluation_is_stable() {
        let calls = Cell::new(0);
        let lookup = |_: &str| {
            calls.set(calls.get() + 1);
            2.0
        };
        let evaluator = Evaluator::new().with_variables(&lookup);

        for _ in 0..5 {
            assert_eq!(evaluator.evaluate("x * x + 1").unwrap(), 5.0);
        }
        assert_eq!(calls.get(), 10);
    }

    #[test]
    fn test_calc_fills_error_slot() {
        let mut error = None;
        assert_eq!(calc("2 +", None, None, Some(&mut error)), 0.0);
        assert_eq!(
            error,
            Some(EvalError::new(ErrorKind::UnexpectedToken(TokenKind::End), 3))
        );

        assert_eq!(calc("2 + 2", None, None, Some(&mut error)), 4.0);
        assert_eq!(error, None);

        assert_eq!(calc("@", None, None, None), 0.0);
    }
}
