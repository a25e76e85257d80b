//! Precedence-aware rendering of expression trees.
//!
//! A node parenthesizes itself exactly when the precedence of the context it is printed into is
//! at least as tight as its own operator's precedence. This yields minimal-but-correct output
//! for this grammar; it is not meant to reproduce any particular human formatting style.

use crate::symbolic::expr::Expr;
use std::fmt::{self, Display, Formatter, Write};
use tangent_parser::parser::symbol::Precedence;

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.render(f, Precedence::None)
    }
}

impl Expr {
    fn render(&self, f: &mut Formatter<'_>, enclosing: Precedence) -> fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{}", value),
            Expr::Variable => f.write_char('x'),
            Expr::Sum(terms) => render_commutative(f, enclosing, self.precedence(), '+', terms),
            Expr::Product(factors) => {
                render_commutative(f, enclosing, self.precedence(), '*', factors)
            },
            Expr::Quotient(numerator, denominator) => {
                let parenthesize = enclosing >= self.precedence();
                if parenthesize {
                    f.write_char('(')?;
                }
                numerator.render(f, Precedence::MulDiv)?;
                f.write_char('/')?;
                denominator.render(f, Precedence::MulDiv)?;
                if parenthesize {
                    f.write_char(')')?;
                }
                Ok(())
            },
            Expr::Compose(outer, inner) => {
                let parenthesize = enclosing >= self.precedence();
                if parenthesize {
                    f.write_char('(')?;
                }
                match &**outer {
                    // an elementary function applies directly to its argument: `sin(cos(x))`
                    Expr::Func(func) => {
                        write!(f, "{}(", func.name())?;
                        inner.render(f, Precedence::None)?;
                        f.write_char(')')?;
                    },
                    outer => {
                        outer.render(f, Precedence::Apply)?;
                        f.write_char('o')?;
                        inner.render(f, Precedence::Apply)?;
                    },
                }
                if parenthesize {
                    f.write_char(')')?;
                }
                Ok(())
            },
            Expr::Poly(coeffs) => render_poly(f, coeffs),
            Expr::Func(func) => write!(f, "{}(x)", func.name()),
        }
    }
}

/// Renders the children of a sum or product, joined by the operator symbol, in canonical order.
fn render_commutative(
    f: &mut Formatter<'_>,
    enclosing: Precedence,
    own: Precedence,
    symbol: char,
    children: &[Expr],
) -> fmt::Result {
    let parenthesize = enclosing >= own;
    if parenthesize {
        f.write_char('(')?;
    }

    let mut iter = children.iter();
    if let Some(child) = iter.next() {
        child.render(f, own)?;
        for child in iter {
            f.write_char(symbol)?;
            child.render(f, own)?;
        }
    }

    if parenthesize {
        f.write_char(')')?;
    }
    Ok(())
}

/// Renders the dense polynomial form, e.g. `Poly[1-2x+3x^2]`.
///
/// Zero terms are omitted, a positive term after the first printed one is prefixed with `+`, and
/// unit coefficients on powers of `x` print as a bare sign.
fn render_poly(f: &mut Formatter<'_>, coeffs: &[f64]) -> fmt::Result {
    f.write_str("Poly[")?;

    let mut printed = false;
    for (power, &c) in coeffs.iter().enumerate() {
        if c == 0.0 {
            continue;
        }
        if c > 0.0 && printed {
            f.write_char('+')?;
        }

        if power == 0 {
            write!(f, "{}", c)?;
        } else {
            if c == -1.0 {
                f.write_char('-')?;
            } else if c != 1.0 {
                write!(f, "{}", c)?;
            }
            f.write_char('x')?;
            if power >= 2 {
                write!(f, "^{}", power)?;
            }
        }
        printed = true;
    }

    f.write_char(']')
}
