//! Numeric evaluation of expression trees.

use crate::symbolic::expr::{Elementary, Expr};

impl Expr {
    /// Evaluates the expression at the given point.
    ///
    /// Evaluation is total: mathematically undefined points surface as ordinary floating-point
    /// outcomes (`NaN` or an infinity), never as an error.
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Expr::Number(value) => *value,
            Expr::Variable => x,
            Expr::Sum(terms) => terms.iter().map(|term| term.eval(x)).sum(),
            Expr::Product(factors) => factors.iter().map(|factor| factor.eval(x)).product(),
            Expr::Quotient(numerator, denominator) => numerator.eval(x) / denominator.eval(x),
            Expr::Compose(outer, inner) => outer.eval(inner.eval(x)),
            Expr::Poly(coeffs) => coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c),
            Expr::Func(func) => match func {
                Elementary::Sin => x.sin(),
                Elementary::Cos => x.cos(),
                Elementary::Tan => x.tan(),
                Elementary::Ln => x.ln(),
                Elementary::Exp => x.exp(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use crate::symbolic::parse;
    use super::*;

    #[test]
    fn elementary_functions() {
        assert_eq!(parse("sin(x)").unwrap().eval(1.23), 1.23_f64.sin());
        assert_eq!(parse("cos(x)").unwrap().eval(1.23), 1.23_f64.cos());
        assert_eq!(parse("tan(x)").unwrap().eval(1.23), 1.23_f64.tan());
        assert_eq!(parse("log(x)").unwrap().eval(1.23), 1.23_f64.ln());
        assert_eq!(parse("exp(x)").unwrap().eval(1.23), 1.23_f64.exp());
    }

    #[test]
    fn polynomial_horner() {
        let poly = Expr::poly(vec![1.0, -2.0, 3.0]);
        assert_float_absolute_eq!(poly.eval(2.0), 1.0 - 4.0 + 12.0, 1e-12);
    }

    #[test]
    fn composition_feeds_inner_value_outward() {
        let expr = parse("sin(cos(x))").unwrap();
        assert_float_absolute_eq!(expr.eval(0.5), 0.5_f64.cos().sin(), 1e-12);
    }

    #[test]
    fn undefined_points_are_not_errors() {
        assert!(parse("1/x").unwrap().eval(0.0).is_infinite());
        assert!(parse("log(x)").unwrap().eval(-1.0).is_nan());
    }
}
