//! The canonical total order over expression trees.
//!
//! The order serves two purposes: it fixes the iteration order of the commutative children of
//! sums and products, and it lets the simplification engine recognize that two subtrees denote
//! the same quantity regardless of how they were built. Equality under this order is purely
//! structural, so it never reports a false positive.

use std::cmp::Ordering;
use super::Expr;

impl Expr {
    /// Fixed tag for each variant; the first key of the canonical order.
    fn tag(&self) -> u8 {
        match self {
            Expr::Number(_) => 0,
            Expr::Variable => 1,
            Expr::Sum(_) => 2,
            Expr::Product(_) => 3,
            Expr::Quotient(..) => 4,
            Expr::Compose(..) => 5,
            Expr::Poly(_) => 6,
            Expr::Func(_) => 7,
        }
    }

    /// Compares two expressions under the canonical total order.
    ///
    /// Variant tags compare first. Ties break per variant: numbers by value, polynomials by
    /// length then by coefficients from the highest power down, sums and products by child count
    /// then lexicographically, quotients by denominator then numerator, compositions by outer
    /// then inner, functions by kind.
    pub fn canonical_cmp(&self, other: &Expr) -> Ordering {
        self.tag().cmp(&other.tag()).then_with(|| match (self, other) {
            (Expr::Number(lhs), Expr::Number(rhs)) => lhs.total_cmp(rhs),
            (Expr::Variable, Expr::Variable) => Ordering::Equal,
            (Expr::Sum(lhs), Expr::Sum(rhs))
            | (Expr::Product(lhs), Expr::Product(rhs)) => cmp_children(lhs, rhs),
            (Expr::Quotient(lhs_num, lhs_den), Expr::Quotient(rhs_num, rhs_den)) => {
                lhs_den.canonical_cmp(rhs_den)
                    .then_with(|| lhs_num.canonical_cmp(rhs_num))
            },
            (Expr::Compose(lhs_outer, lhs_inner), Expr::Compose(rhs_outer, rhs_inner)) => {
                lhs_outer.canonical_cmp(rhs_outer)
                    .then_with(|| lhs_inner.canonical_cmp(rhs_inner))
            },
            (Expr::Poly(lhs), Expr::Poly(rhs)) => {
                lhs.len().cmp(&rhs.len()).then_with(|| {
                    lhs.iter()
                        .zip(rhs)
                        .rev()
                        .map(|(a, b)| a.total_cmp(b))
                        .find(|ord| ord.is_ne())
                        .unwrap_or(Ordering::Equal)
                })
            },
            (Expr::Func(lhs), Expr::Func(rhs)) => lhs.cmp(rhs),
            _ => unreachable!("matching tags imply matching variants"),
        })
    }

    /// Returns true if the two expressions are canonically equal.
    pub fn canonical_eq(&self, other: &Expr) -> bool {
        self.canonical_cmp(other) == Ordering::Equal
    }
}

/// Lexicographic comparison of canonically ordered child lists, shorter lists first.
fn cmp_children(lhs: &[Expr], rhs: &[Expr]) -> Ordering {
    lhs.len().cmp(&rhs.len()).then_with(|| {
        lhs.iter()
            .zip(rhs)
            .map(|(a, b)| a.canonical_cmp(b))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

#[cfg(test)]
mod tests {
    use crate::symbolic::expr::Elementary;
    use super::*;

    fn samples() -> Vec<Expr> {
        vec![
            Expr::Number(-1.0),
            Expr::Number(2.0),
            Expr::Variable,
            Expr::sum(vec![Expr::Variable, Expr::Number(1.0)]),
            Expr::product(vec![Expr::Number(2.0), Expr::Func(Elementary::Sin)]),
            Expr::quotient(Expr::Number(1.0), Expr::Variable),
            Expr::compose(Expr::Func(Elementary::Sin), Expr::Func(Elementary::Cos)),
            Expr::Poly(vec![0.0, 1.0, 3.0]),
            Expr::Func(Elementary::Tan),
        ]
    }

    #[test]
    fn reflexive_and_antisymmetric() {
        let exprs = samples();
        for a in &exprs {
            assert!(a.canonical_eq(a));
            for b in &exprs {
                match a.canonical_cmp(b) {
                    Ordering::Less => assert_eq!(b.canonical_cmp(a), Ordering::Greater),
                    Ordering::Greater => assert_eq!(b.canonical_cmp(a), Ordering::Less),
                    Ordering::Equal => assert!(a.canonical_eq(b) && b.canonical_eq(a)),
                }
            }
        }
    }

    #[test]
    fn commutative_children_ignore_build_order() {
        let a = Expr::sum(vec![Expr::Variable, Expr::Number(1.0), Expr::Func(Elementary::Sin)]);
        let b = Expr::sum(vec![Expr::Func(Elementary::Sin), Expr::Variable, Expr::Number(1.0)]);
        assert!(a.canonical_eq(&b));
        assert_eq!(a, b);
    }

    #[test]
    fn variant_tags_order_first() {
        let number = Expr::Number(1000.0);
        let variable = Expr::Variable;
        let func = Expr::Func(Elementary::Sin);
        assert_eq!(number.canonical_cmp(&variable), Ordering::Less);
        assert_eq!(variable.canonical_cmp(&func), Ordering::Less);
    }

    #[test]
    fn polynomials_compare_by_degree_then_coefficients() {
        let quadratic = Expr::Poly(vec![0.0, 0.0, 1.0]);
        let linear = Expr::Poly(vec![0.0, 5.0]);
        assert_eq!(linear.canonical_cmp(&quadratic), Ordering::Less);

        let small = Expr::Poly(vec![9.0, 1.0]);
        let large = Expr::Poly(vec![0.0, 2.0]);
        assert_eq!(small.canonical_cmp(&large), Ordering::Less);
    }
}
