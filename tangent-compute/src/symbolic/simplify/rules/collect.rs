//! Folding of numbers, the variable, and polynomials into the polynomial normal form.
//!
//! These are the combinations behind `x+x = Poly[2x]` and `x*x = Poly[x^2]`: whenever two
//! operands of a sum or product are each a number, the variable, or a polynomial, the pair
//! reduces to direct coefficient arithmetic. The engine tries these before the structural
//! pairwise rules so that polynomial folding takes priority over factoring.

use crate::symbolic::expr::Expr;
use crate::symbolic::poly;

/// Adds two operands of mixed number/variable/polynomial kind, if possible.
///
/// The result goes through [`Expr::poly`], so degenerate outcomes collapse to a plain number.
pub(crate) fn try_add(lhs: &Expr, rhs: &Expr) -> Option<Expr> {
    match (lhs, rhs) {
        (Expr::Number(a), Expr::Number(b)) => Some(Expr::Number(a + b)),
        (Expr::Number(c), Expr::Variable)
        | (Expr::Variable, Expr::Number(c)) => Some(Expr::poly(vec![*c, 1.0])),
        (Expr::Number(c), Expr::Poly(coeffs))
        | (Expr::Poly(coeffs), Expr::Number(c)) => {
            let mut coeffs = coeffs.clone();
            coeffs[0] += c;
            Some(Expr::poly(coeffs))
        },
        (Expr::Variable, Expr::Variable) => Some(Expr::poly(vec![0.0, 2.0])),
        (Expr::Variable, Expr::Poly(coeffs))
        | (Expr::Poly(coeffs), Expr::Variable) => {
            let mut coeffs = coeffs.clone();
            coeffs[1] += 1.0;
            Some(Expr::poly(coeffs))
        },
        (Expr::Poly(lhs), Expr::Poly(rhs)) => Some(Expr::poly(poly::add(lhs, rhs))),
        _ => None,
    }
}

/// Multiplies two operands of mixed number/variable/polynomial kind, if possible.
pub(crate) fn try_mul(lhs: &Expr, rhs: &Expr) -> Option<Expr> {
    match (lhs, rhs) {
        (Expr::Number(a), Expr::Number(b)) => Some(Expr::Number(a * b)),
        (Expr::Number(c), Expr::Variable)
        | (Expr::Variable, Expr::Number(c)) => Some(Expr::poly(vec![0.0, *c])),
        (Expr::Number(c), Expr::Poly(coeffs))
        | (Expr::Poly(coeffs), Expr::Number(c)) => Some(Expr::poly(poly::scale(coeffs, *c))),
        (Expr::Variable, Expr::Variable) => Some(Expr::poly(vec![0.0, 0.0, 1.0])),
        (Expr::Variable, Expr::Poly(coeffs))
        | (Expr::Poly(coeffs), Expr::Variable) => Some(Expr::poly(poly::shift_up(coeffs))),
        (Expr::Poly(lhs), Expr::Poly(rhs)) => Some(Expr::poly(poly::mul(lhs, rhs))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variable_folding() {
        assert_eq!(try_add(&Expr::Variable, &Expr::Variable), Some(Expr::Poly(vec![0.0, 2.0])));
        assert_eq!(
            try_mul(&Expr::Variable, &Expr::Variable),
            Some(Expr::Poly(vec![0.0, 0.0, 1.0])),
        );
    }

    #[test]
    fn degenerate_results_collapse_to_numbers() {
        // x + (-x) cancels completely
        let minus_x = Expr::Poly(vec![0.0, -1.0]);
        assert_eq!(try_add(&Expr::Variable, &minus_x), Some(Expr::Number(0.0)));

        // (1 + x) + (-x) leaves only the constant term
        let one_plus_x = Expr::Poly(vec![1.0, 1.0]);
        assert_eq!(try_add(&one_plus_x, &minus_x), Some(Expr::Number(1.0)));
    }

    #[test]
    fn no_rule_for_structural_operands() {
        let quotient = Expr::quotient(Expr::Number(1.0), Expr::Variable);
        assert_eq!(try_add(&Expr::Variable, &quotient), None);
        assert_eq!(try_mul(&quotient, &Expr::Number(2.0)), None);
    }
}
