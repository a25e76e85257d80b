//! Builds expression trees from the postfix symbol sequence.
//!
//! The builder is a single stack pass over the translator's output. Subtraction and unary
//! negation are desugared on the spot into addition and multiplication by -1, which removes
//! both operations from the rewrite system for good. A parenthesis reaching this stage, or the
//! operand stack ending at any size other than one, indicates a bug in the translator rather
//! than bad input, and panics.

use ariadne::Report;
use crate::symbolic::expr::Expr;
use crate::symbolic::simplify::simplify;
use std::ops::Range;
use tangent_error::{simple_report, Error, ErrorKind};
use tangent_parser::parser::{lex, symbol::{Sym, SymKind}, to_postfix};

/// The `^` operator is recognized by the grammar but has no tree construction rule.
#[derive(Debug, Clone, PartialEq)]
pub struct UnsupportedPower;

impl ErrorKind for UnsupportedPower {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        simple_report(
            src_id,
            spans,
            "the `^` operator is not supported",
            "no expression can be built from this operator",
            "write repeated multiplication instead, as in `x*x`",
        )
    }
}

/// Parses source text into a simplified expression tree.
pub fn parse(input: &str) -> Result<Expr, Error> {
    let symbols = lex(input)?;
    let postfix = to_postfix(symbols)?;
    let expr = build(postfix)?;
    Ok(simplify(&expr))
}

/// Materializes one expression node per postfix symbol.
fn build(postfix: Vec<Sym>) -> Result<Expr, Error> {
    let mut stack: Vec<Expr> = Vec::new();

    for sym in postfix {
        match sym.kind {
            SymKind::Number(value) => stack.push(Expr::Number(value)),
            SymKind::Var => stack.push(Expr::Variable),
            SymKind::FuncName(func) => stack.push(Expr::Func(func)),
            SymKind::Add => {
                let (lhs, rhs) = pop_operands(&mut stack);
                stack.push(Expr::sum(vec![lhs, rhs]));
            },
            // a - b desugars to a + (-1 * b)
            SymKind::Sub => {
                let (lhs, rhs) = pop_operands(&mut stack);
                stack.push(Expr::sum(vec![lhs, rhs.negated()]));
            },
            SymKind::Mul => {
                let (lhs, rhs) = pop_operands(&mut stack);
                stack.push(Expr::product(vec![lhs, rhs]));
            },
            SymKind::Div => {
                let (lhs, rhs) = pop_operands(&mut stack);
                stack.push(Expr::quotient(lhs, rhs));
            },
            SymKind::Positive => {},
            SymKind::Negative => {
                let operand = pop_operand(&mut stack);
                stack.push(operand.negated());
            },
            SymKind::Apply => {
                let argument = pop_operand(&mut stack);
                let function = pop_operand(&mut stack);
                // applying a function to the bare variable is the function itself; only a
                // non-trivial argument needs a composition node
                match argument {
                    Expr::Variable => stack.push(function),
                    argument => stack.push(Expr::compose(function, argument)),
                }
            },
            SymKind::Power => {
                return Err(Error::new(vec![sym.span], UnsupportedPower));
            },
            SymKind::OpenParen | SymKind::CloseParen => {
                unreachable!("parenthesis survived postfix translation")
            },
        }
    }

    let expr = pop_operand(&mut stack);
    assert!(stack.is_empty(), "operand stack not exhausted after tree building");
    Ok(expr)
}

fn pop_operand(stack: &mut Vec<Expr>) -> Expr {
    stack.pop().expect("operand stack underflow while building the tree")
}

fn pop_operands(stack: &mut Vec<Expr>) -> (Expr, Expr) {
    let rhs = pop_operand(stack);
    let lhs = pop_operand(stack);
    (lhs, rhs)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Parses the input and renders the simplified result.
    fn rendered(input: &str) -> String {
        parse(input).unwrap().to_string()
    }

    /// The debug name of the error kind produced by the input.
    fn error_kind(input: &str) -> String {
        format!("{:?}", parse(input).unwrap_err().kind)
    }

    #[test]
    fn constants_fold() {
        assert_eq!(rendered("1"), "1");
        assert_eq!(rendered("1+2"), "3");
        assert_eq!(rendered("1+2+3"), "6");
        assert_eq!(rendered("1+(2+3)"), "6");
        assert_eq!(rendered("1+2-3"), "0");
        assert_eq!(rendered("-1"), "-1");
        assert_eq!(rendered("-3+1"), "-2");
        assert_eq!(rendered("-1-2-3.5"), "-6.5");
        assert_eq!(rendered("1*2*3*4*5"), "120");
    }

    #[test]
    fn polynomials_fold() {
        assert_eq!(rendered("-1-x+1"), "Poly[-x]");
        assert_eq!(rendered("2*x*3"), "Poly[6x]");
        assert_eq!(rendered("2*x*x+3*x"), "Poly[3x+2x^2]");
        assert_eq!(rendered("(2*x*x+3*x)*x"), "Poly[3x^2+2x^3]");
    }

    #[test]
    fn quotients_reduce() {
        assert_eq!(rendered("x/1"), "x");
        assert_eq!(rendered("1/x/x"), "1/Poly[x^2]");
        assert_eq!(rendered("1/x/x/x/x/x"), "1/Poly[x^5]");
        assert_eq!(rendered("1/x/-x/x/x/x"), "1/Poly[-x^5]");
        assert_eq!(rendered("(2/x)/(sin(x)/exp(x))"), "(2*exp(x))/(x*sin(x))");
        assert_eq!(rendered("sin(x)/x+cos(x)/x"), "(sin(x)+cos(x))/x");
    }

    #[test]
    fn like_terms_cancel() {
        assert_eq!(rendered("sin(x)-sin(x)"), "0");
        assert_eq!(rendered("x/3-x/3"), "0");
        assert_eq!(rendered("x-x"), "0");
    }

    #[test]
    fn functions_apply() {
        assert_eq!(rendered("sin(x)"), "sin(x)");
        assert_eq!(rendered("log(x)"), "ln(x)");
        assert_eq!(rendered("sin(cos(x))"), "sin(cos(x))");
        assert_eq!(rendered("sin(2.1/sin(x))"), "sin(2.1/sin(x))");
    }

    #[test]
    fn numeric_equivalence_of_rewrites() {
        let expr = parse("sin(x)*x*x-sin(x)*x*x*x/x").unwrap();
        assert!(expr.eval(1.234).abs() < 1e-9);
    }

    #[test]
    fn parse_errors() {
        assert!(error_kind("").contains("EmptyExpression"));
        assert!(error_kind("sin x").contains("FunctionNotApplied"));
        assert!(error_kind("(1+2").contains("UnmatchedParenthesis"));
        assert!(error_kind("1+2)").contains("UnmatchedParenthesis"));
        assert!(error_kind("2*y").contains("UnknownIdentifier"));
        assert!(error_kind("1 ? 2").contains("InvalidSymbol"));
        assert!(error_kind("x^2").contains("UnsupportedPower"));
    }
}
