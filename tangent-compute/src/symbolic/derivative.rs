//! Symbolic differentiation.

use crate::symbolic::expr::{Elementary, Expr};

impl Expr {
    /// Produces the derivative of the expression with respect to `x`.
    ///
    /// The result is structurally faithful to the calculus rule that produced it and is **not**
    /// simplified; run the result through [`simplify`](crate::symbolic::simplify) to reduce it.
    pub fn derivative(&self) -> Expr {
        match self {
            Expr::Number(_) => Expr::Number(0.0),
            Expr::Variable => Expr::Number(1.0),
            Expr::Sum(terms) => {
                Expr::sum(terms.iter().map(Expr::derivative).collect())
            },
            // generalized product rule: one term per factor, differentiating that factor and
            // cloning the rest
            Expr::Product(factors) => {
                let terms = (0..factors.len())
                    .map(|which| {
                        Expr::product(
                            factors
                                .iter()
                                .enumerate()
                                .map(|(i, factor)| if i == which {
                                    factor.derivative()
                                } else {
                                    factor.clone()
                                })
                                .collect(),
                        )
                    })
                    .collect();
                Expr::sum(terms)
            },
            // (f/g)' = (f'g - fg') / g^2
            Expr::Quotient(numerator, denominator) => {
                let df_g = Expr::product(vec![numerator.derivative(), (**denominator).clone()]);
                let f_dg = Expr::product(vec![(**numerator).clone(), denominator.derivative()]);
                Expr::quotient(
                    Expr::sum(vec![df_g, f_dg.negated()]),
                    Expr::product(vec![(**denominator).clone(), (**denominator).clone()]),
                )
            },
            // chain rule: (f∘g)' = (f'∘g) * g'
            Expr::Compose(outer, inner) => Expr::product(vec![
                Expr::compose(outer.derivative(), (**inner).clone()),
                inner.derivative(),
            ]),
            // power rule per term; an affine polynomial differentiates to a bare constant
            Expr::Poly(coeffs) => {
                let derived: Vec<f64> = coeffs
                    .iter()
                    .enumerate()
                    .skip(1)
                    .map(|(power, c)| power as f64 * c)
                    .collect();
                if derived.len() == 1 {
                    Expr::Number(derived[0])
                } else {
                    Expr::Poly(derived)
                }
            },
            Expr::Func(func) => match func {
                Elementary::Sin => Expr::Func(Elementary::Cos),
                Elementary::Cos => Expr::Func(Elementary::Sin).negated(),
                Elementary::Tan => Expr::quotient(
                    Expr::Number(1.0),
                    Expr::product(vec![
                        Expr::Func(Elementary::Cos),
                        Expr::Func(Elementary::Cos),
                    ]),
                ),
                Elementary::Ln => Expr::quotient(Expr::Number(1.0), Expr::Variable),
                Elementary::Exp => Expr::Func(Elementary::Exp),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use crate::symbolic::{parse, simplify};
    use super::*;

    /// Approximates the derivative at a point with a central finite difference.
    fn finite_difference(expr: &Expr, x: f64) -> f64 {
        const DX: f64 = 1e-6;
        (expr.eval(x + DX) - expr.eval(x - DX)) / (2.0 * DX)
    }

    /// Checks the symbolic derivative of the expression against finite differences at each
    /// point, both raw and simplified.
    fn check_against_finite_difference(input: &str, points: impl IntoIterator<Item = f64>) {
        const TOL: f64 = 1e-4;

        let expr = parse(input).unwrap();
        let derived = expr.derivative();
        let reduced = simplify(&derived);

        for point in points {
            let expected = finite_difference(&expr, point);
            assert_float_absolute_eq!(derived.eval(point), expected, TOL);
            assert_float_absolute_eq!(reduced.eval(point), expected, TOL);
        }
    }

    #[test]
    fn leaves() {
        assert_eq!(parse("1").unwrap().derivative().to_string(), "0");
        assert_eq!(parse("x").unwrap().derivative().to_string(), "1");
    }

    #[test]
    fn elementary_functions() {
        assert_eq!(parse("sin(x)").unwrap().derivative().to_string(), "cos(x)");
        assert_eq!(parse("cos(x)").unwrap().derivative().to_string(), "-1*sin(x)");
        assert_eq!(parse("log(x)").unwrap().derivative().to_string(), "1/x");
        assert_eq!(parse("exp(x)").unwrap().derivative().to_string(), "exp(x)");
    }

    #[test]
    fn tangent_quotient_form() {
        let derived = parse("tan(x)").unwrap().derivative();
        assert_eq!(derived.to_string(), "1/(cos(x)*cos(x))");

        let expected = 1.0 / (1.23_f64.cos() * 1.23_f64.cos());
        assert_float_absolute_eq!(derived.eval(1.23), expected, 1e-12);
    }

    #[test]
    fn polynomial_power_rule() {
        let derived = simplify(&parse("x+x*x").unwrap().derivative());
        assert_eq!(derived.to_string(), "Poly[1+2x]");

        // an affine polynomial collapses to its slope
        let derived = simplify(&parse("2-x").unwrap().derivative());
        assert_eq!(derived.to_string(), "-1");
    }

    #[test]
    fn product_rule() {
        let derived = simplify(&parse("x*sin(x)").unwrap().derivative());
        assert_eq!(derived.to_string(), "x*cos(x)+sin(x)");
    }

    #[test]
    fn quotient_rule() {
        let derived = simplify(&parse("sin(x)/x").unwrap().derivative());
        assert_eq!(derived.to_string(), "(-1*sin(x)+x*cos(x))/Poly[x^2]");

        let derived = simplify(&parse("2/3").unwrap().derivative());
        assert_eq!(derived.to_string(), "0");
    }

    #[test]
    fn chain_rule_matches_finite_differences() {
        check_against_finite_difference("sin(cos(x))", [0.0, 0.5, 1.0, -2.0]);
        check_against_finite_difference("exp(x*x)", [0.0, 0.5, -0.5]);
        check_against_finite_difference("log(x*x+1)", [0.5, 1.0, 3.0]);
    }

    #[test]
    fn derivative_matches_finite_differences() {
        check_against_finite_difference("x*x*x-2*x", [0.0, 1.0, 2.0, -1.5]);
        check_against_finite_difference("x*sin(x)", [0.0, 1.0, -1.0, 2.5]);
        check_against_finite_difference("sin(x)/x", [0.5, 1.0, 2.0]);
    }
}
