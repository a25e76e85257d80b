//! Simplification rules for products: absorbing zero, identity removal, flattening, and factor
//! collection.

use crate::symbolic::expr::Expr;
use crate::symbolic::simplify::step::Step;
use crate::symbolic::step_collector::StepCollector;
use super::{collect, do_product};

/// `0*a = 0`. A zero factor collapses the whole product before any other rule runs.
pub fn multiply_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_product(expr, |factors| {
        if factors.iter().any(Expr::is_zero) {
            Some(Expr::Number(0.0))
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// Splices the factors of any nested product into the parent: `a * (b * c) = a * b * c`.
pub fn flatten(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_product(expr, |factors| {
        if !factors.iter().any(|factor| matches!(factor, Expr::Product(_))) {
            return None;
        }

        let mut new_factors = Vec::with_capacity(factors.len());
        for factor in factors {
            match factor {
                Expr::Product(inner) => new_factors.extend(inner.iter().cloned()),
                other => new_factors.push(other.clone()),
            }
        }
        Some(Expr::product(new_factors))
    })?;

    step_collector.push(Step::FlattenProduct);
    Some(opt)
}

/// `1*a = a`.
pub fn multiply_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_product(expr, |factors| {
        let new_factors = factors.iter()
            .filter(|factor| !factor.is_one())
            .cloned()
            .collect::<Vec<_>>();

        if new_factors.len() == factors.len() {
            None
        } else {
            Some(Expr::product(new_factors).downgrade())
        }
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// Folds pairs of factors that are each a number, the variable, or a polynomial:
/// `2*x = Poly[2x]`, `x*x = Poly[x^2]`, `Poly[..]*Poly[..]` by coefficient convolution.
///
/// Note there is no doubling rule here: canonically equal factors such as `cos(x)*cos(x)` stay
/// side by side, since there is no power form to collapse them into.
pub fn combine_like_factors(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_product(expr, |factors| {
        let mut new_factors = factors.to_vec();
        let mut changed = false;

        let mut current = 0;
        while current < new_factors.len() {
            let mut next = current + 1;
            while next < new_factors.len() {
                match collect::try_mul(&new_factors[current], &new_factors[next]) {
                    Some(combined) => {
                        new_factors[current] = combined;
                        new_factors.swap_remove(next);
                        changed = true;
                    },
                    None => next += 1,
                }
            }
            current += 1;
        }

        changed.then(|| Expr::product(new_factors).downgrade())
    })?;

    step_collector.push(Step::CombineFactors);
    Some(opt)
}

/// Merges a quotient with another factor: `(a/b)*(c/d) = (a*c)/(b*d)`, `(a/b)*c = (a*c)/b`.
pub fn multiply_quotients(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_product(expr, |factors| {
        for current in 0..factors.len() {
            let Expr::Quotient(numerator, denominator) = &factors[current] else { continue };
            for next in 0..factors.len() {
                if next == current {
                    continue;
                }

                let merged = match &factors[next] {
                    Expr::Quotient(rhs_num, rhs_den) => Expr::quotient(
                        Expr::product(vec![(**numerator).clone(), (**rhs_num).clone()]),
                        Expr::product(vec![(**denominator).clone(), (**rhs_den).clone()]),
                    ),
                    other => Expr::quotient(
                        Expr::product(vec![(**numerator).clone(), other.clone()]),
                        (**denominator).clone(),
                    ),
                };

                let mut new_factors = factors.to_vec();
                // remove the higher index first so the lower one stays valid
                new_factors.remove(current.max(next));
                new_factors.remove(current.min(next));
                new_factors.push(merged);
                return Some(Expr::product(new_factors).downgrade());
            }
        }
        None
    })?;

    step_collector.push(Step::MultiplyQuotients);
    Some(opt)
}

/// Applies all multiplication rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    multiply_zero(expr, step_collector)
        .or_else(|| flatten(expr, step_collector))
        .or_else(|| multiply_one(expr, step_collector))
        .or_else(|| combine_like_factors(expr, step_collector))
        .or_else(|| multiply_quotients(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use crate::symbolic::expr::Elementary;
    use super::*;

    #[test]
    fn zero_absorbs_everything() {
        let product = Expr::product(vec![
            Expr::Number(0.0),
            Expr::Func(Elementary::Sin),
            Expr::Variable,
        ]);
        assert_eq!(multiply_zero(&product, &mut ()), Some(Expr::Number(0.0)));
    }

    #[test]
    fn unit_factors_drop_out() {
        let product = Expr::product(vec![Expr::Number(1.0), Expr::Func(Elementary::Sin)]);
        assert_eq!(multiply_one(&product, &mut ()), Some(Expr::Func(Elementary::Sin)));
    }

    #[test]
    fn equal_function_factors_stay() {
        let product = Expr::product(vec![
            Expr::Func(Elementary::Cos),
            Expr::Func(Elementary::Cos),
        ]);
        assert_eq!(all(&product, &mut ()), None);
    }

    #[test]
    fn quotients_absorb_plain_factors() {
        // (1/x) * sin(x) = sin(x)/x
        let product = Expr::product(vec![
            Expr::quotient(Expr::Number(1.0), Expr::Variable),
            Expr::Func(Elementary::Sin),
        ]);
        let merged = multiply_quotients(&product, &mut ()).unwrap();
        assert_eq!(merged, Expr::quotient(
            Expr::product(vec![Expr::Number(1.0), Expr::Func(Elementary::Sin)]),
            Expr::Variable,
        ));
    }
}
