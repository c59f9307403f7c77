use log::debug;
use std::io::{self, BufRead, Write};
use tinycalc_rs::{Evaluator, Functions, Variables};

fn main() -> io::Result<()> {
    pretty_env_logger::init();

    let variables = Variables::with_constants();
    let functions = Functions::with_builtins();
    debug!("functions: {functions:?}");

    let evaluator = Evaluator::new()
        .with_variables(&variables)
        .with_functions(&functions);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match evaluator.evaluate(&line) {
            Ok(result) => writeln!(stdout, "Result: {}", result)?,
            Err(err) => {
                writeln!(stdout, "Error: {}", err.message())?;
                writeln!(stdout, "  {}", line)?;
                writeln!(stdout, "  {}^", " ".repeat(err.position))?;
            }
        }
    }

    Ok(())
}
