use crate::resolver::Functions;

pub fn register(functions: &mut Functions) {
    functions.register_function("min", min);
    functions.register_function("max", max);
    functions.register_function("sum", sum);
    functions.register_function("avg", avg);
}

/// NaN for an empty argument list.
fn min(args: &[f64]) -> f64 {
    args.iter()
        .copied()
        .reduce(f64::min)
        .unwrap_or(f64::NAN)
}

/// NaN for an empty argument list.
fn max(args: &[f64]) -> f64 {
    args.iter()
        .copied()
        .reduce(f64::max)
        .unwrap_or(f64::NAN)
}

fn sum(args: &[f64]) -> f64 {
    args.iter().sum()
}

fn avg(args: &[f64]) -> f64 {
    if args.is_empty() {
        return f64::NAN;
    }
    sum(args) / args.len() as f64
}
