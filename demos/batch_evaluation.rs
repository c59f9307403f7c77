use rayon::prelude::*;
use tinycalc_rs::{Evaluator, Functions, Variables};

fn main() {
    pretty_env_logger::init();

    let contexts = vec![
        Variables::from_iter([("price".to_string(), 120.0), ("volume".to_string(), 3000.0)]),
        Variables::from_iter([("price".to_string(), 80.0), ("volume".to_string(), 6000.0)]),
    ];
    let functions = Functions::with_builtins();

    let expression = "price * volume / max(volume, 5000)";

    let results: Vec<_> = contexts
        .par_iter()
        .map(|variables| {
            Evaluator::new()
                .with_variables(variables)
                .with_functions(&functions)
                .evaluate(expression)
        })
        .collect();

    for (i, result) in results.iter().enumerate() {
        match result {
            Ok(value) => println!("Result {}: {}", i, value),
            Err(err) => println!("Error {}: {}", i, err),
        }
    }
}
