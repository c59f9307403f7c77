pub mod aggregate;
pub mod math;

use crate::resolver::Functions;

pub fn register_functions(functions: &mut Functions) {
    math::register(functions);
    aggregate::register(functions);
}
