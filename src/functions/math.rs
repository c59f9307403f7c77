use crate::resolver::Functions;
use tinycalc_macros::calc_fn;

pub fn register(functions: &mut Functions) {
    functions.register_function("sqrt", sqrt);
    functions.register_function("abs", abs);
    functions.register_function("floor", floor);
    functions.register_function("ceil", ceil);
    functions.register_function("round", round);
    functions.register_function("exp", exp);
    functions.register_function("ln", ln);
    functions.register_function("log10", log10);
    functions.register_function("sin", sin);
    functions.register_function("cos", cos);
    functions.register_function("tan", tan);
    functions.register_function("pow", pow);
    functions.register_function("atan2", atan2);
    functions.register_function("hypot", hypot);
}

#[calc_fn]
fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

#[calc_fn]
fn abs(x: f64) -> f64 {
    x.abs()
}

#[calc_fn]
fn floor(x: f64) -> f64 {
    x.floor()
}

#[calc_fn]
fn ceil(x: f64) -> f64 {
    x.ceil()
}

/// Rounds half away from zero.
#[calc_fn]
fn round(x: f64) -> f64 {
    x.round()
}

#[calc_fn]
fn exp(x: f64) -> f64 {
    x.exp()
}

/// Natural logarithm.
#[calc_fn]
fn ln(x: f64) -> f64 {
    x.ln()
}

#[calc_fn]
fn log10(x: f64) -> f64 {
    x.log10()
}

#[calc_fn]
fn sin(x: f64) -> f64 {
    x.sin()
}

#[calc_fn]
fn cos(x: f64) -> f64 {
    x.cos()
}

#[calc_fn]
fn tan(x: f64) -> f64 {
    x.tan()
}

#[calc_fn]
fn pow(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

#[calc_fn]
fn atan2(y: f64, x: f64) -> f64 {
    y.atan2(x)
}

#[calc_fn]
fn hypot(x: f64, y: f64) -> f64 {
    x.hypot(y)
}
