//! Numeric root finding over a parsed expression.
//!
//! The solver treats the expression tree as a black-box function plus derivative: it only ever
//! calls [`Expr::eval`] on the expression and on its simplified derivative.

use tangent_compute::{simplify, Expr};

const MAX_ITERATIONS: usize = 64;
const TOLERANCE: f64 = 1e-9;

/// Runs Newton's method on `f` starting from `guess`.
///
/// Returns `None` if the iteration leaves the domain (a non-finite value), stalls on a flat
/// derivative, or fails to converge within the iteration budget.
pub fn solve(f: &Expr, guess: f64) -> Option<f64> {
    let derivative = simplify(&f.derivative());

    let mut x = guess;
    for _ in 0..MAX_ITERATIONS {
        let fx = f.eval(x);
        if !fx.is_finite() {
            return None;
        }
        if fx.abs() < TOLERANCE {
            return Some(x);
        }

        let dfx = derivative.eval(x);
        if !dfx.is_finite() || dfx == 0.0 {
            return None;
        }
        x -= fx / dfx;
    }

    None
}

#[cfg(test)]
mod tests {
    use tangent_compute::parse;
    use super::*;

    #[test]
    fn finds_the_square_root_of_two() {
        let f = parse("x*x-2").unwrap();
        let root = solve(&f, 1.0).unwrap();
        assert!((root - 2.0_f64.sqrt()).abs() < 1e-8);
    }

    #[test]
    fn finds_a_trigonometric_root() {
        let f = parse("sin(x)").unwrap();
        let root = solve(&f, 3.0).unwrap();
        assert!((root - std::f64::consts::PI).abs() < 1e-8);
    }

    #[test]
    fn reports_failure_on_a_rootless_function() {
        // x*x+1 >= 1 everywhere, so the tolerance check can never pass
        let f = parse("x*x+1").unwrap();
        assert_eq!(solve(&f, 0.5), None);
    }

    #[test]
    fn reports_failure_when_leaving_the_domain() {
        // from x = 10 the first step lands on a negative x, where log is NaN
        let f = parse("log(x)").unwrap();
        assert_eq!(solve(&f, 10.0), None);
    }

    #[test]
    fn reports_failure_on_a_flat_derivative() {
        let f = parse("2").unwrap();
        assert_eq!(solve(&f, 0.0), None);
    }
}
