//! Simplification rules for sums: identity removal, flattening, and term collection.

use crate::symbolic::expr::Expr;
use crate::symbolic::simplify::step::Step;
use crate::symbolic::step_collector::StepCollector;
use super::{collect, do_sum};

/// Splices the terms of any nested sum into the parent: `a + (b + c) = a + b + c`.
pub fn flatten(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_sum(expr, |terms| {
        if !terms.iter().any(|term| matches!(term, Expr::Sum(_))) {
            return None;
        }

        let mut new_terms = Vec::with_capacity(terms.len());
        for term in terms {
            match term {
                Expr::Sum(inner) => new_terms.extend(inner.iter().cloned()),
                other => new_terms.push(other.clone()),
            }
        }
        Some(Expr::sum(new_terms))
    })?;

    step_collector.push(Step::FlattenSum);
    Some(opt)
}

/// `0+a = a`; a sum with nothing left collapses to zero.
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_sum(expr, |terms| {
        let new_terms = terms.iter()
            .filter(|term| !term.is_zero())
            .cloned()
            .collect::<Vec<_>>();

        if new_terms.len() == terms.len() {
            None
        } else {
            Some(Expr::sum(new_terms).downgrade())
        }
    })?;

    step_collector.push(Step::AddZero);
    Some(opt)
}

/// Combines pairs of terms.
///
/// Canonically equal terms double: `a+a = 2*a`. Terms that are each a number, the variable, or
/// a polynomial fold into the polynomial normal form: `x+x = Poly[2x]`, `1+Poly[x] = Poly[1+x]`.
pub fn combine_like_terms(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_sum(expr, |terms| {
        let mut new_terms = terms.to_vec();
        let mut changed = false;

        let mut current = 0;
        while current < new_terms.len() {
            let mut next = current + 1;
            while next < new_terms.len() {
                let combined = if new_terms[current].canonical_eq(&new_terms[next]) {
                    Some(Expr::product(vec![Expr::Number(2.0), new_terms[current].clone()]))
                } else {
                    collect::try_add(&new_terms[current], &new_terms[next])
                };

                match combined {
                    Some(combined) => {
                        new_terms[current] = combined;
                        new_terms.swap_remove(next);
                        changed = true;
                    },
                    None => next += 1,
                }
            }
            current += 1;
        }

        changed.then(|| Expr::sum(new_terms).downgrade())
    })?;

    step_collector.push(Step::CombineTerms);
    Some(opt)
}

/// Pulls a shared factor out of two terms: `a*b*c + a*b*d = a*b*(c+d)`, `a*b + b = (a+1)*b`.
///
/// The shared part is the multiset intersection of the terms' factors under the canonical
/// order; the rule fires on the first pair of terms that share anything.
pub fn factor_common_terms(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_sum(expr, |terms| {
        for current in 0..terms.len() {
            for next in current + 1..terms.len() {
                let Some(factored) = factor_pair(&terms[current], &terms[next]) else {
                    continue;
                };

                let mut new_terms = terms.to_vec();
                new_terms.swap_remove(next);
                new_terms[current] = factored;
                return Some(Expr::sum(new_terms).downgrade());
            }
        }
        None
    })?;

    step_collector.push(Step::FactorCommonTerms);
    Some(opt)
}

/// Merges two quotients over the same denominator: `a/c + b/c = (a+b)/c`.
pub fn common_denominator(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_sum(expr, |terms| {
        for current in 0..terms.len() {
            let Expr::Quotient(lhs_num, lhs_den) = &terms[current] else { continue };
            for next in current + 1..terms.len() {
                let Expr::Quotient(rhs_num, rhs_den) = &terms[next] else { continue };
                if !lhs_den.canonical_eq(rhs_den) {
                    continue;
                }

                let merged = Expr::quotient(
                    Expr::sum(vec![(**lhs_num).clone(), (**rhs_num).clone()]),
                    (**lhs_den).clone(),
                );
                let mut new_terms = terms.to_vec();
                new_terms.swap_remove(next);
                new_terms[current] = merged;
                return Some(Expr::sum(new_terms).downgrade());
            }
        }
        None
    })?;

    step_collector.push(Step::CommonDenominator);
    Some(opt)
}

/// Treats a non-product term as a product of one factor.
fn factors_of(expr: &Expr) -> &[Expr] {
    match expr {
        Expr::Product(factors) => factors,
        other => std::slice::from_ref(other),
    }
}

/// Factors the shared part out of a pair of terms, at least one of which must be a product.
fn factor_pair(lhs: &Expr, rhs: &Expr) -> Option<Expr> {
    if !matches!(lhs, Expr::Product(_)) && !matches!(rhs, Expr::Product(_)) {
        return None;
    }

    let (common, lhs_rest, rhs_rest) = intersect(factors_of(lhs), factors_of(rhs));
    if common.is_empty() {
        return None;
    }

    // an empty remainder means the term *was* the shared part, leaving a factor of one
    let lhs_part = if lhs_rest.is_empty() {
        Expr::Number(1.0)
    } else {
        Expr::product(lhs_rest).downgrade()
    };
    let rhs_part = if rhs_rest.is_empty() {
        Expr::Number(1.0)
    } else {
        Expr::product(rhs_rest).downgrade()
    };

    let mut factors = common;
    factors.push(Expr::sum(vec![lhs_part, rhs_part]));
    Some(Expr::product(factors))
}

/// Splits two canonically ordered factor lists into their multiset intersection and the
/// leftovers on each side.
fn intersect(lhs: &[Expr], rhs: &[Expr]) -> (Vec<Expr>, Vec<Expr>, Vec<Expr>) {
    let mut common = Vec::new();
    let mut lhs_rest = Vec::new();
    let mut rhs_rest = Vec::new();

    let mut i = 0;
    let mut j = 0;
    while i < lhs.len() && j < rhs.len() {
        match lhs[i].canonical_cmp(&rhs[j]) {
            std::cmp::Ordering::Less => {
                lhs_rest.push(lhs[i].clone());
                i += 1;
            },
            std::cmp::Ordering::Greater => {
                rhs_rest.push(rhs[j].clone());
                j += 1;
            },
            std::cmp::Ordering::Equal => {
                common.push(lhs[i].clone());
                i += 1;
                j += 1;
            },
        }
    }
    lhs_rest.extend(lhs[i..].iter().cloned());
    rhs_rest.extend(rhs[j..].iter().cloned());

    (common, lhs_rest, rhs_rest)
}

/// Applies all addition rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    flatten(expr, step_collector)
        .or_else(|| add_zero(expr, step_collector))
        .or_else(|| combine_like_terms(expr, step_collector))
        .or_else(|| factor_common_terms(expr, step_collector))
        .or_else(|| common_denominator(expr, step_collector))
}
