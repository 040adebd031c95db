//! # linecalc
//!
//! linecalc evaluates one line of integer arithmetic at a time.
//! A line is tokenized, grouped into an expression tree by operator
//! precedence and parenthesis depth, and evaluated to an `i64`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::{debug, trace};

use crate::{
    ast::Expr,
    interpreter::{lexer::tokenize, parser::core::group_tokens},
};
pub use crate::error::Error;

/// Defines the expression tree.
///
/// This module declares the `Operator` enum and the `Expr` tree built by the
/// parser and consumed by the evaluator.
///
/// # Responsibilities
/// - Defines the five binary operators and their precedence tiers.
/// - Defines the owned, acyclic expression tree.
/// - Renders trees in fully parenthesized form.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating a line, with the byte offset of parse failures for user
/// feedback.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (lexer, parser, evaluator).
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the three stages of evaluation.
///
/// This module ties together lexing, tree building, and evaluation. Each stage
/// is usable on its own; [`evaluate`] composes them.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, and evaluator.
/// - Manages the flow of data and errors between stages.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Tokenizes a line and builds its expression tree without evaluating it.
///
/// # Errors
/// Returns [`Error::Parse`] if the line is not one well-formed expression.
///
/// # Examples
/// ```
/// use linecalc::parse;
///
/// let expr = parse("2 ^ 3 ^ 2").unwrap();
/// assert_eq!(expr.to_string(), "((2 ^ 3) ^ 2)");
/// ```
pub fn parse(line: &str) -> Result<Expr, Error> {
    let tokens = tokenize(line);
    trace!("tokens for {line:?}: {tokens:?}");

    let expr = group_tokens(&tokens)?;
    debug!("parsed {line:?} into {} nodes: {expr}", expr.node_count());

    Ok(expr)
}

/// Evaluates one line of arithmetic and returns its value.
///
/// Each call is independent; nothing is retained between calls.
///
/// # Errors
/// Returns [`Error::Parse`] for malformed input, including unrecognized
/// characters, and [`Error::Arithmetic`] for division by zero or overflow.
///
/// # Examples
/// ```
/// use linecalc::evaluate;
///
/// assert_eq!(evaluate("1 + 2 * 3").unwrap(), 7);
/// assert_eq!(evaluate("(1 + 2) * 3").unwrap(), 9);
///
/// // Division by zero is reported, not a crash.
/// assert!(evaluate("5 / 0").is_err());
/// ```
pub fn evaluate(line: &str) -> Result<i64, Error> {
    let value = parse(line)?.evaluate()?;
    debug!("evaluated {line:?} to {value}");

    Ok(value)
}

/// Evaluates a line and formats the result the way the binary prints it.
///
/// With `show_tree`, the fully parenthesized tree precedes the value.
///
/// # Errors
/// The same errors as [`evaluate`].
///
/// # Examples
/// ```
/// use linecalc::render;
///
/// assert_eq!(render("8 - 3 - 2", false).unwrap(), "3");
/// assert_eq!(render("8 - 3 - 2", true).unwrap(), "((8 - 3) - 2) = 3");
/// ```
pub fn render(line: &str, show_tree: bool) -> Result<String, Error> {
    let expr = parse(line)?;
    let value = expr.evaluate()?;
    debug!("evaluated {line:?} to {value}");

    Ok(if show_tree { format!("{expr} = {value}") } else { value.to_string() })
}
