#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::non_ascii_literal
)]

//! Shunter, a small calculator crate built around the classic
//! shunting-yard algorithm.
//!
//! A line of input runs through four stages: a context sensitive
//! tokenizer, an implicit multiplication pass, infix to postfix
//! conversion, and a stack evaluator over `f64` data. The whole pipeline
//! sits behind the [`evaluate`](fn.evaluate.html) function:
//!
//! ```
//! assert_eq!(shunter::evaluate("3 + 5 * 2"), Ok(13.0));
//! assert_eq!(shunter::evaluate("2^3^2"), Ok(512.0));
//! assert_eq!(shunter::evaluate("sqrt 2(3)"), Ok(f64::sqrt(2.0) * 3.0));
//! ```
//!
//! # Language definition
//!
//! The language implemented by shunter can contain the following
//! elements:
//!
//! - float literal values: `12`, `5.5`, `.15`, `26.`;
//! - the constants `e` and `pi`;
//! - left and right parenthesis;
//! - binary operators: `+`, `-`, `*`, `/` and `^` for exponentiation,
//!   the only right associative one;
//! - unary operators: sign (`-x`, `+x`) and the postfix factorial
//!   (`5!`);
//! - functions, parentheses optional: `sqrt`, `sin`, `cos`, `tan`,
//!   `asin`, `acos`, `atan`, also spelled `arcsin`, `arccos`, `arctan`;
//! - implicit multiplication between adjacent values and groups:
//!   `2(3)`, `2 3` and `4.2e` all mean a product.
//!
//! Any other symbol is forbidden in the input.
//!
//! Overloaded symbols are read from what precedes them: after a value,
//! `-` subtracts and `!` is the factorial; where an operand is still
//! expected, `-` negates. Unary operators bind tighter than every binary
//! operator, so `-2^2` squares the negated value:
//!
//! ```
//! assert_eq!(shunter::evaluate("-2^2"), Ok(4.0));
//! assert_eq!(shunter::evaluate("-5!"), Ok(-120.0));
//! ```
//!
//! # Errors
//!
//! Evaluation fails fast with the first [`Error`](enum.Error.html) any
//! stage detects: a `SyntaxError` for malformed input, a `NameError` for
//! an unknown word, or a `MathError` when an operator is applied outside
//! its domain, as in `1/0` or `(-5)!`. The error's message is meant for
//! direct display.

#[macro_use]
extern crate lazy_static;

mod error;
mod lexer;
mod ops;
mod rpn;
mod token;

pub use crate::error::Error;

/// Evaluate a single arithmetic expression down to one number.
///
/// The input is tokenized, implicit multiplications are inserted, the
/// tokens are reordered into reverse Polish notation and reduced with a
/// value stack. The first error any stage detects is returned as is.
///
/// # Examples
///
/// ```
/// use shunter::evaluate;
///
/// assert_eq!(evaluate("45 - 2^3"), Ok(37.0));
/// assert_eq!(evaluate("2(3)"), Ok(6.0));
/// assert!(evaluate("2 +* 3").is_err());
/// ```
pub fn evaluate(line: &str) -> Result<f64, Error> {
    let tokens = lexer::Lexer::new(line).tokenize()?;
    let tokens = lexer::insert_implicit_mul(tokens);
    let tokens = rpn::to_rpn(tokens)?;
    rpn::eval_rpn(tokens)
}
