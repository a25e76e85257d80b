//! The symbol vocabulary of the expression grammar.
//!
//! Symbols are what the raw tokens become once numeric literals are parsed, identifiers are
//! resolved, and `+`/`-` are disambiguated into their unary or binary forms. Two symbols never
//! appear in source text and exist only inside the translator: [`SymKind::Apply`], which binds a
//! function name to its parenthesized argument, and the unary signs [`SymKind::Positive`] /
//! [`SymKind::Negative`].

use std::ops::Range;

/// The five elementary functions known to the grammar.
///
/// The declaration order is the kind index used by the canonical ordering of expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Elementary {
    Sin,
    Cos,
    Tan,
    Ln,
    Exp,
}

impl Elementary {
    /// The name used when rendering the function.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Ln => "ln",
            Self::Exp => "exp",
        }
    }

    /// Resolves a source identifier to a function. The natural logarithm is spelled `log` in
    /// source text but renders as `ln`.
    pub fn from_identifier(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "log" => Some(Self::Ln),
            "exp" => Some(Self::Exp),
            _ => None,
        }
    }
}

/// Operator precedence, from weakest to tightest binding.
///
/// `None` is the precedence of the outermost printing context and of operand positions; it is
/// never the precedence of an operator. Note that the unary signs bind tighter than `^`, so
/// `-x^2` would group as `(-x)^2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    None,
    AddSub,
    MulDiv,
    Power,
    Sign,
    Apply,
}

/// The kind of a symbol.
#[derive(Debug, Clone, PartialEq)]
pub enum SymKind {
    /// A numeric literal.
    Number(f64),

    /// The free variable `x`.
    Var,

    /// An elementary function name.
    FuncName(Elementary),

    Add,
    Sub,
    Mul,
    Div,
    Power,

    /// Unary `+`.
    Positive,

    /// Unary `-`.
    Negative,

    OpenParen,
    CloseParen,

    /// Function application; pushed by the translator when a function name is read.
    Apply,
}

impl SymKind {
    /// Returns the precedence of an operator symbol.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::AddSub,
            Self::Mul | Self::Div => Precedence::MulDiv,
            Self::Power => Precedence::Power,
            Self::Positive | Self::Negative => Precedence::Sign,
            Self::Apply => Precedence::Apply,
            _ => unreachable!("operand symbols have no precedence"),
        }
    }

    /// Returns true if the symbol can end an operand: a `+`/`-` immediately after one of these is
    /// a binary operator, otherwise it is a unary sign.
    pub fn ends_operand(&self) -> bool {
        matches!(
            self,
            Self::Number(_) | Self::Var | Self::CloseParen | Self::FuncName(_),
        )
    }
}

/// A symbol together with the source region it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Sym {
    /// The region of the source code that this symbol originated from.
    pub span: Range<usize>,

    /// The kind of symbol.
    pub kind: SymKind,
}
