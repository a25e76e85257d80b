//! The simplification engine.
//!
//! Simplification is a bottom-up rewrite to a fixpoint. Each rule in [`rules`] takes an
//! expression and returns `Some(replacement)` if it applies, or `None` if the expression is
//! already in the rule's normal form. The `None` case is load-bearing: it is how the engine
//! knows a subtree is finished, so rules must only report a replacement when something actually
//! changed.
//!
//! Termination: every rule strictly reduces the child count of the node it fires on, or strictly
//! reduces the nesting of its own variant (flattening, cross-multiplication), or folds operands
//! into the dense polynomial normal form, which no rule expands again. There is deliberately no
//! distribution rule, which is what would re-grow factored forms and break the argument.

pub mod rules;
pub mod step;

use crate::symbolic::expr::Expr;
use crate::symbolic::step_collector::StepCollector;
pub use step::Step;

/// Simplifies the expression to a fixpoint of the rule set.
pub fn simplify(expr: &Expr) -> Expr {
    simplify_with(expr, &mut ())
}

/// Simplifies the expression, returning the result and every rewrite that was applied.
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let simplified = simplify_with(expr, &mut steps);
    (simplified, steps)
}

/// Simplifies the expression, reporting each applied rewrite to the given collector.
pub fn simplify_with(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    reduce(expr, step_collector).unwrap_or_else(|| expr.clone())
}

/// Recursively simplifies an expression.
///
/// Returns `Some(replacement)` if anything anywhere in the subtree changed, and `None` if the
/// subtree was already fully reduced. Callers must propagate the `None` case rather than
/// substituting a clone, so that fixpoint detection keeps working further up the tree.
pub(crate) fn reduce(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let mut current = reduce_children(expr, step_collector);

    loop {
        let node = current.as_ref().unwrap_or(expr);
        match rules::all(node, step_collector) {
            Some(next) => {
                // the rewrite may have produced fresh unreduced children
                current = Some(match reduce_children(&next, step_collector) {
                    Some(reduced) => reduced,
                    None => next,
                });
            },
            None => return current,
        }
    }
}

/// Simplifies every child of the node, rebuilding it (in canonical order) if any changed.
fn reduce_children(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    match expr {
        Expr::Sum(terms) => reduce_vec(terms, step_collector).map(Expr::sum),
        Expr::Product(factors) => reduce_vec(factors, step_collector).map(Expr::product),
        Expr::Quotient(numerator, denominator) => {
            let new_numerator = reduce(numerator, step_collector);
            let new_denominator = reduce(denominator, step_collector);
            if new_numerator.is_none() && new_denominator.is_none() {
                return None;
            }
            Some(Expr::quotient(
                new_numerator.unwrap_or_else(|| (**numerator).clone()),
                new_denominator.unwrap_or_else(|| (**denominator).clone()),
            ))
        },
        Expr::Compose(outer, inner) => {
            let new_outer = reduce(outer, step_collector);
            let new_inner = reduce(inner, step_collector);
            if new_outer.is_none() && new_inner.is_none() {
                return None;
            }
            Some(Expr::compose(
                new_outer.unwrap_or_else(|| (**outer).clone()),
                new_inner.unwrap_or_else(|| (**inner).clone()),
            ))
        },
        Expr::Number(_) | Expr::Variable | Expr::Poly(_) | Expr::Func(_) => None,
    }
}

/// Simplifies each element of a child list, returning the new list if any element changed.
fn reduce_vec(children: &[Expr], step_collector: &mut dyn StepCollector<Step>) -> Option<Vec<Expr>> {
    let mut changed = false;
    let reduced = children
        .iter()
        .map(|child| match reduce(child, step_collector) {
            Some(new) => {
                changed = true;
                new
            },
            None => child.clone(),
        })
        .collect();
    changed.then_some(reduced)
}
