//! Labels for the rewrites performed by the simplification engine.

/// A single rewrite applied somewhere in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A nested sum was spliced into its parent.
    FlattenSum,

    /// A zero term was dropped from a sum.
    AddZero,

    /// Two terms of a sum were combined into one.
    CombineTerms,

    /// A shared factor was pulled out of two terms: `a*b*c + a*b*d = a*b*(c+d)`.
    FactorCommonTerms,

    /// Two quotients over the same denominator were merged: `a/c + b/c = (a+b)/c`.
    CommonDenominator,

    /// A zero factor collapsed a product to zero.
    MultiplyZero,

    /// A nested product was spliced into its parent.
    FlattenProduct,

    /// A unit factor was dropped from a product.
    MultiplyOne,

    /// Two factors of a product were combined into one.
    CombineFactors,

    /// A quotient was merged with another factor: `(a/b)*(c/d) = (a*c)/(b*d)`.
    MultiplyQuotients,

    /// A zero numerator collapsed a quotient to zero.
    DivideZero,

    /// A unit denominator collapsed a quotient to its numerator.
    DivideOne,

    /// A nested quotient was cross-multiplied away: `(a/b)/(c/d) = (a*d)/(b*c)`.
    CrossMultiply,
}
