//! Parsing front end for single-variable function expressions.
//!
//! The pipeline has two visible stages. The [`tokenizer`] module scans the raw source into
//! lexemes, and the [`parser`] module turns those lexemes into the symbol vocabulary of the
//! expression grammar and reorders them into postfix with the shunting-yard algorithm. The
//! postfix symbol sequence is the hand-off point to `tangent-compute`, which materializes the
//! expression tree.

pub mod parser;
pub mod tokenizer;
