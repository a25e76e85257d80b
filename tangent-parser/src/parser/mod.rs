//! Turns source text into the postfix symbol sequence consumed by the tree builder.
//!
//! [`lex`] performs the symbol pass: numeric literals are parsed, identifiers resolved against
//! the fixed function vocabulary, and `+`/`-` disambiguated into unary or binary form.
//! Disambiguation has to happen here rather than during translation because the unary and binary
//! forms sit at different precedence levels.
//!
//! [`to_postfix`] is a plain shunting-yard translator over the symbol sequence. Operators pop
//! the stack while the stacked operator's precedence is not strictly lower than the incoming
//! one, which yields left-associative grouping for operators at the same level. A function name
//! is emitted directly to the output, with a synthetic [`SymKind::Apply`] operator pushed in its
//! stead; `Apply` has the tightest binding, which forces the parenthesized argument that must
//! follow to attach to the function.

pub mod error;
pub mod symbol;

use crate::tokenizer::{tokenize_complete, TokenKind};
use error::Error;
use symbol::{Elementary, Sym, SymKind};

/// Converts source text into the symbol sequence, or fails with the first lexical error.
pub fn lex(input: &str) -> Result<Vec<Sym>, Error> {
    let tokens = tokenize_complete(input);
    let mut symbols: Vec<Sym> = Vec::with_capacity(tokens.len());

    for token in tokens.iter() {
        let kind = match token.kind {
            TokenKind::Whitespace => continue,
            TokenKind::Int | TokenKind::Float => {
                let value = token.lexeme.parse::<f64>().map_err(|_| {
                    Error::new(vec![token.span.clone()], error::InvalidNumber)
                })?;
                SymKind::Number(value)
            },
            TokenKind::Name => match token.lexeme {
                "x" => SymKind::Var,
                name => match Elementary::from_identifier(name) {
                    Some(func) => SymKind::FuncName(func),
                    None => return Err(Error::new(
                        vec![token.span.clone()],
                        error::UnknownIdentifier { name: name.to_string() },
                    )),
                },
            },
            TokenKind::Add | TokenKind::Sub => {
                let binary = symbols.last().is_some_and(|sym| sym.kind.ends_operand());
                match (token.kind, binary) {
                    (TokenKind::Add, true) => SymKind::Add,
                    (TokenKind::Add, false) => SymKind::Positive,
                    (TokenKind::Sub, true) => SymKind::Sub,
                    (TokenKind::Sub, false) => SymKind::Negative,
                    _ => unreachable!(),
                }
            },
            TokenKind::Mul => SymKind::Mul,
            TokenKind::Div => SymKind::Div,
            TokenKind::Caret => SymKind::Power,
            TokenKind::OpenParen => SymKind::OpenParen,
            TokenKind::CloseParen => SymKind::CloseParen,
            TokenKind::Dot => return Err(Error::new(
                vec![token.span.clone()],
                error::InvalidNumber,
            )),
            TokenKind::Symbol => return Err(Error::new(
                vec![token.span.clone()],
                error::InvalidSymbol { symbol: token.lexeme.to_string() },
            )),
        };

        symbols.push(Sym { span: token.span.clone(), kind });
    }

    if symbols.is_empty() {
        return Err(Error::new(vec![0..input.len()], error::EmptyExpression));
    }

    Ok(symbols)
}

/// Reorders the symbol sequence into postfix.
pub fn to_postfix(symbols: Vec<Sym>) -> Result<Vec<Sym>, Error> {
    let mut output = Vec::with_capacity(symbols.len());
    let mut operators: Vec<Sym> = Vec::new();

    let mut iter = symbols.into_iter().peekable();
    while let Some(sym) = iter.next() {
        match sym.kind {
            SymKind::Number(_) | SymKind::Var => output.push(sym),
            SymKind::FuncName(func) => {
                if !matches!(iter.peek().map(|next| &next.kind), Some(SymKind::OpenParen)) {
                    return Err(Error::new(
                        vec![sym.span],
                        error::FunctionNotApplied { name: func.name() },
                    ));
                }
                let span = sym.span.clone();
                output.push(sym);
                operators.push(Sym { span, kind: SymKind::Apply });
            },
            SymKind::Add
            | SymKind::Sub
            | SymKind::Mul
            | SymKind::Div
            | SymKind::Power
            | SymKind::Positive
            | SymKind::Negative => {
                while let Some(top) = operators.last() {
                    if matches!(top.kind, SymKind::OpenParen)
                        || top.kind.precedence() < sym.kind.precedence()
                    {
                        break;
                    }
                    output.push(operators.pop().unwrap());
                }
                operators.push(sym);
            },
            SymKind::OpenParen => operators.push(sym),
            SymKind::CloseParen => loop {
                match operators.pop() {
                    Some(top) if matches!(top.kind, SymKind::OpenParen) => break,
                    Some(top) => output.push(top),
                    None => return Err(Error::new(
                        vec![sym.span],
                        error::UnmatchedParenthesis { opening: false },
                    )),
                }
            },
            SymKind::Apply => unreachable!("`Apply` is only created on the operator stack"),
        }
    }

    while let Some(top) = operators.pop() {
        if matches!(top.kind, SymKind::OpenParen) {
            return Err(Error::new(
                vec![top.span],
                error::UnmatchedParenthesis { opening: true },
            ));
        }
        output.push(top);
    }

    Ok(output)
}
