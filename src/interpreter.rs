/// The lexer module tokenizes an input line.
///
/// The lexer reads the raw text and produces the ordered list of tokens for
/// the parser: numbers, operators, parentheses, and error markers for any
/// character it does not recognize. This is the first stage of the pipeline.
///
/// # Responsibilities
/// - Classifies every character of the line, skipping spaces.
/// - Keeps the exact text and byte offset of each token.
/// - Never aborts; unknown characters become error tokens.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser takes the full token sequence of a line and partitions it
/// recursively at the loosest-binding operator, unwrapping redundant
/// parentheses on the way down.
///
/// # Responsibilities
/// - Rejects error tokens and unbalanced parentheses.
/// - Chooses split points by nesting depth and operator precedence.
/// - Reports malformed structure as a `ParseError` instead of panicking.
pub mod parser;
/// The evaluator module computes the value of an expression tree.
///
/// # Responsibilities
/// - Evaluates each node left subtree first.
/// - Performs checked integer arithmetic.
/// - Reports division by zero and overflow.
pub mod evaluator;
