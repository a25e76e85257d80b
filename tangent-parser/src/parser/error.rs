//! Error kinds produced while lexing and translating expressions.

use ariadne::Report;
use std::ops::Range;
use tangent_error::{simple_report, ErrorKind};

pub use tangent_error::Error;

/// The input contained no symbols at all.
#[derive(Debug, Clone, PartialEq)]
pub struct EmptyExpression;

impl ErrorKind for EmptyExpression {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        simple_report(
            src_id,
            spans,
            "empty expression",
            "nothing to parse here",
            "provide an expression, such as `2*x+1`",
        )
    }
}

/// A character with no meaning in the grammar.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidSymbol {
    /// The offending character(s), as sliced from the source.
    pub symbol: String,
}

impl ErrorKind for InvalidSymbol {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        simple_report(
            src_id,
            spans,
            format!("invalid symbol `{}`", self.symbol),
            "this character is not part of the expression grammar",
            "",
        )
    }
}

/// A numeric literal that does not form a well-formed floating-point number.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidNumber;

impl ErrorKind for InvalidNumber {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        simple_report(
            src_id,
            spans,
            "invalid number",
            "this is not a well-formed numeric literal",
            "",
        )
    }
}

/// An identifier that is neither the variable `x` nor one of the known function names.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownIdentifier {
    /// The identifier as written.
    pub name: String,
}

impl ErrorKind for UnknownIdentifier {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        simple_report(
            src_id,
            spans,
            format!("unknown identifier `{}`", self.name),
            "not a known function or variable",
            "expected one of `sin`, `cos`, `tan`, `exp`, `log`, or the variable `x`",
        )
    }
}

/// A function name that is not immediately followed by a parenthesized argument.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionNotApplied {
    /// The name of the function.
    pub name: &'static str,
}

impl ErrorKind for FunctionNotApplied {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        simple_report(
            src_id,
            spans,
            "function must be applied",
            format!("`{}` must be followed by `(`", self.name),
            "write the argument in parentheses, as in `sin(x)`",
        )
    }
}

/// A parenthesis without a partner.
#[derive(Debug, Clone, PartialEq)]
pub struct UnmatchedParenthesis {
    /// Whether the unmatched parenthesis was an opening parenthesis `(`. Otherwise, it was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

impl ErrorKind for UnmatchedParenthesis {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        let help = if self.opening {
            "add a closing parenthesis `)` somewhere after this"
        } else {
            "add an opening parenthesis `(` somewhere before this"
        };
        simple_report(
            src_id,
            spans,
            "unmatched parenthesis",
            "this parenthesis has no partner",
            help,
        )
    }
}
