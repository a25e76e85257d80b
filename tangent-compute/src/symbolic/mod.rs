//! A representation of single-variable mathematical expressions built for algebraic
//! manipulation.
//!
//! # Expression representation
//!
//! Expressions are trees of [`Expr`] nodes. The commutative operations are **n-ary and
//! flattened**: `1 + x + sin(x)` is a single [`Expr::Sum`] with three children rather than a
//! nest of binary additions. Flattening is what makes term collection practical, since the terms
//! that may combine all sit at the same level of the tree.
//!
//! # Canonical ordering
//!
//! Determining whether two expressions are mathematically equal is hard in general, and this
//! module does not attempt it. Instead it defines a **canonical total order** over trees
//! (variant tag first, then per-variant tie-breaks; see [`Expr::canonical_cmp`]). The children
//! of a [`Expr::Sum`] or [`Expr::Product`] are always kept sorted in this order, which buys two
//! things at once:
//!
//! - equality of commutative nodes degrades to an elementwise walk, no matter what order the
//!   children were built in, and
//! - rendering is reproducible: the same quantity always prints the same way.
//!
//! Canonical equality is structural, so it can never report a false positive; `x^2 + 2x + 1` and
//! `(x + 1)^2` are mathematically equal but canonically distinct. The simplification engine
//! narrows the gap by rewriting both sides toward a normal form before comparing.
//!
//! # Simplification
//!
//! [`simplify`] rewrites a tree to a fixpoint of the rule set in [`simplify::rules`]: identity
//! elements are removed, nested sums/products/quotients are flattened or cross-multiplied,
//! equal terms and common factors are collected, and anything expressible as a dense polynomial
//! in `x` is folded into the [`Expr::Poly`] normal form by direct coefficient arithmetic.
//! Every rule strictly shrinks the tree or moves it toward a normal form, so the fixpoint loop
//! terminates.

pub mod construct;
pub mod expr;
pub mod simplify;
pub mod step_collector;

mod derivative;
mod eval;
mod fmt;
mod poly;

pub use construct::parse;
pub use expr::Expr;
pub use simplify::{simplify, simplify_with, simplify_with_steps};
pub use step_collector::StepCollector;
