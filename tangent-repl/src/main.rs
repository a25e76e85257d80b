mod solve;

use ariadne::Source;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::io::{self, IsTerminal, Read};
use tangent_compute::{parse, simplify, Expr};
use tangent_error::Error;

/// Reports a parse error to stderr against the expression it came from.
///
/// The `ariadne` crate's `Report` type has no `Display` implementation, so printing goes through
/// its own `eprint`.
fn report_to_stderr(err: &Error, source: &str) {
    err.build_report("input")
        .eprint(("input", Source::from(source)))
        .unwrap();
}

/// Parses an expression, reporting errors to stderr.
fn parse_reported(source: &str) -> Option<Expr> {
    match parse(source) {
        Ok(expr) => Some(expr),
        Err(err) => {
            report_to_stderr(&err, source);
            None
        },
    }
}

/// Splits `expr @ number` command arguments; the number is optional.
fn split_at_point(rest: &str) -> Option<(&str, Option<f64>)> {
    match rest.rsplit_once('@') {
        Some((source, point)) => {
            let point = point.trim().parse::<f64>().ok()?;
            Some((source.trim(), Some(point)))
        },
        None => Some((rest.trim(), None)),
    }
}

/// Executes one line of input: a bare expression or a `diff`/`eval`/`solve` command.
fn run_line(line: &str) {
    if let Some(rest) = line.strip_prefix("diff ") {
        if let Some(expr) = parse_reported(rest.trim()) {
            println!("{}", simplify(&expr.derivative()));
        }
    } else if let Some(rest) = line.strip_prefix("eval ") {
        let Some((source, Some(point))) = split_at_point(rest) else {
            eprintln!("usage: eval <expr> @ <x>");
            return;
        };
        if let Some(expr) = parse_reported(source) {
            println!("{}", expr.eval(point));
        }
    } else if let Some(rest) = line.strip_prefix("solve ") {
        let Some((source, point)) = split_at_point(rest) else {
            eprintln!("usage: solve <expr> [@ <initial guess>]");
            return;
        };
        if let Some(expr) = parse_reported(source) {
            match solve::solve(&expr, point.unwrap_or(1.0)) {
                Some(root) => println!("x = {}", root),
                None => eprintln!("newton iteration did not converge"),
            }
        }
    } else if let Some(expr) = parse_reported(line) {
        println!("{}", expr);
    }
}

fn main() {
    if io::stdin().is_terminal() {
        // interactive mode
        let mut rl = DefaultEditor::new().unwrap();

        loop {
            match rl.readline("> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line);
                    run_line(line);
                },
                Err(ReadlineError::Eof | ReadlineError::Interrupted) => break,
                Err(err) => {
                    eprintln!("{}", err);
                    break;
                },
            }
        }
    } else {
        // read expressions from piped stdin, one per line
        let mut input = String::new();
        io::stdin().read_to_string(&mut input).unwrap();

        for line in input.lines() {
            let line = line.trim();
            if !line.is_empty() {
                run_line(line);
            }
        }
    }
}
