//! Simplification rules for quotients.

use crate::symbolic::expr::Expr;
use crate::symbolic::simplify::step::Step;
use crate::symbolic::step_collector::StepCollector;
use super::do_quotient;

/// `0/a = 0`.
pub fn divide_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_quotient(expr, |numerator, _| {
        numerator.is_zero().then(|| Expr::Number(0.0))
    })?;

    step_collector.push(Step::DivideZero);
    Some(opt)
}

/// `a/1 = a`.
pub fn divide_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_quotient(expr, |numerator, denominator| {
        denominator.is_one().then(|| numerator.clone())
    })?;

    step_collector.push(Step::DivideOne);
    Some(opt)
}

/// Cross-multiplies nested quotients away:
///
/// `(a/b)/(c/d) = (a*d)/(b*c)`
/// `(a/b)/c = a/(b*c)`
/// `a/(c/d) = (a*d)/c`
pub fn cross_multiply(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_quotient(expr, |numerator, denominator| match (numerator, denominator) {
        (Expr::Quotient(a, b), Expr::Quotient(c, d)) => Some(Expr::quotient(
            Expr::product(vec![(**a).clone(), (**d).clone()]),
            Expr::product(vec![(**b).clone(), (**c).clone()]),
        )),
        (Expr::Quotient(a, b), denominator) => Some(Expr::quotient(
            (**a).clone(),
            Expr::product(vec![(**b).clone(), denominator.clone()]),
        )),
        (numerator, Expr::Quotient(c, d)) => Some(Expr::quotient(
            Expr::product(vec![numerator.clone(), (**d).clone()]),
            (**c).clone(),
        )),
        _ => None,
    })?;

    step_collector.push(Step::CrossMultiply);
    Some(opt)
}

/// Applies all quotient rules.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    divide_zero(expr, step_collector)
        .or_else(|| divide_one(expr, step_collector))
        .or_else(|| cross_multiply(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use crate::symbolic::expr::Elementary;
    use super::*;

    #[test]
    fn zero_numerator_collapses() {
        let quotient = Expr::quotient(Expr::Number(0.0), Expr::Func(Elementary::Sin));
        assert_eq!(divide_zero(&quotient, &mut ()), Some(Expr::Number(0.0)));
    }

    #[test]
    fn unit_denominator_collapses() {
        let quotient = Expr::quotient(Expr::Variable, Expr::Number(1.0));
        assert_eq!(divide_one(&quotient, &mut ()), Some(Expr::Variable));
    }

    #[test]
    fn nested_quotients_cross_multiply() {
        // (2/x) / (sin(x)/exp(x)) = (2*exp(x)) / (x*sin(x))
        let quotient = Expr::quotient(
            Expr::quotient(Expr::Number(2.0), Expr::Variable),
            Expr::quotient(Expr::Func(Elementary::Sin), Expr::Func(Elementary::Exp)),
        );
        let merged = cross_multiply(&quotient, &mut ()).unwrap();
        assert_eq!(merged, Expr::quotient(
            Expr::product(vec![Expr::Number(2.0), Expr::Func(Elementary::Exp)]),
            Expr::product(vec![Expr::Variable, Expr::Func(Elementary::Sin)]),
        ));
    }

    #[test]
    fn plain_quotient_is_left_alone() {
        let quotient = Expr::quotient(Expr::Func(Elementary::Sin), Expr::Variable);
        assert_eq!(all(&quotient, &mut ()), None);
    }
}
