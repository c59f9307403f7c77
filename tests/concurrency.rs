//! Independent evaluations sharing resolvers across threads.

use rayon::prelude::*;
use std::collections::HashMap;
use tinycalc_rs::{evaluate_expression, Evaluator, Functions, Variables};

#[test]
fn test_parallel_evaluation_matches_sequential() {
    let variables: Variables = (0..64).map(|i| (format!("x{}", i), i as f64)).collect();
    let functions = Functions::with_builtins();
    let expressions: Vec<String> = (0..64)
        .map(|i| format!("max(x{}, {}) * 2 - sqrt(x{} * x{})", i, 32, i, i))
        .collect();

    let evaluator = Evaluator::new()
        .with_variables(&variables)
        .with_functions(&functions);
    let sequential: Vec<f64> = expressions
        .iter()
        .map(|expr| evaluator.evaluate(expr).unwrap())
        .collect();

    let parallel: Vec<f64> = expressions
        .par_iter()
        .map(|expr| evaluator.evaluate(expr).unwrap())
        .collect();

    assert_eq!(sequential, parallel);
    assert_eq!(parallel[0], 64.0);
    assert_eq!(parallel[63], 63.0);
}

#[test]
fn test_shared_evaluator_across_threads() {
    let mut variables = Variables::with_constants();
    variables.set("rate", 0.5);
    let functions = Functions::with_builtins();

    let evaluator = Evaluator::new()
        .with_variables(&variables)
        .with_functions(&functions);

    let totals: Vec<f64> = (0..256)
        .into_par_iter()
        .map(|i| {
            evaluator
                .evaluate(&format!("{} * rate + min({}, 10)", i, i))
                .unwrap()
        })
        .collect();

    for (i, total) in totals.iter().enumerate() {
        let i = i as f64;
        assert_eq!(*total, i * 0.5 + i.min(10.0));
    }
}

#[test]
fn test_parallel_errors_are_isolated() {
    let inputs = vec!["1 +", "2 * 3", "(4", "5 / 0", "@"];
    let results: Vec<_> = inputs
        .par_iter()
        .map(|input| evaluate_expression(input, &HashMap::new()))
        .collect();

    assert!(results[0].is_err());
    assert_eq!(results[1].as_ref().unwrap(), &6.0);
    assert!(results[2].is_err());
    assert_eq!(results[3].as_ref().unwrap(), &f64::INFINITY);
    assert!(results[4].is_err());
}
