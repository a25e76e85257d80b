//! The rewrite rules applied by the simplification engine.
//!
//! Each rule takes the expression to rewrite and returns `Some(expr)` with the replacement if
//! the rule applies, or `None` if it does not. Rules only look at the node they are given; the
//! engine in [`super`] handles recursion and re-application to a fixpoint.

pub mod add;
pub mod divide;
pub mod multiply;

pub(crate) mod collect;

use crate::symbolic::expr::Expr;
use crate::symbolic::step_collector::StepCollector;
use super::step::Step;

/// If the expression is a sum, calls the given transformation function with its terms.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_sum(expr: &Expr, f: impl Fn(&[Expr]) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Sum(terms) = expr {
        f(terms)
    } else {
        None
    }
}

/// If the expression is a product, calls the given transformation function with its factors.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_product(expr: &Expr, f: impl Fn(&[Expr]) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Product(factors) = expr {
        f(factors)
    } else {
        None
    }
}

/// If the expression is a quotient, calls the given transformation function with the numerator
/// and denominator.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_quotient(expr: &Expr, f: impl Fn(&Expr, &Expr) -> Option<Expr>) -> Option<Expr> {
    if let Expr::Quotient(numerator, denominator) = expr {
        f(numerator, denominator)
    } else {
        None
    }
}

/// Applies all rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    add::all(expr, step_collector)
        .or_else(|| multiply::all(expr, step_collector))
        .or_else(|| divide::all(expr, step_collector))
}
