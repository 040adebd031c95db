use log::trace;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::utils::{check_balance, find_split_point, strip_enclosing},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest tree the builder will produce.
///
/// Each operator node and each unwrapped pair of parentheses counts as one
/// level. Lines that need more are rejected with `TooDeep`, which bounds the
/// recursion of the builder, the evaluator and `Display`.
pub const MAX_DEPTH: usize = 1024;

/// Builds an expression tree from the tokens of one line.
///
/// The whole sequence is validated first: any `Error` token is rejected as an
/// unexpected character, and parentheses must balance. The tree is then built
/// by recursively splitting the slice at its loosest-binding operator.
///
/// # Parameters
/// - `tokens`: The complete token sequence of a line.
///
/// # Returns
/// The root of the expression tree.
///
/// # Errors
/// Any [`ParseError`] describing why the tokens do not form one expression.
///
/// # Example
/// ```
/// use linecalc::interpreter::{lexer::tokenize, parser::core::group_tokens};
///
/// let expr = group_tokens(&tokenize("1 + 2 * 3")).unwrap();
/// assert_eq!(expr.to_string(), "(1 + (2 * 3))");
///
/// assert!(group_tokens(&tokenize("(1 + 2")).is_err());
/// ```
pub fn group_tokens(tokens: &[Token<'_>]) -> ParseResult<Expr> {
    if let Some(token) = tokens.iter().find(|t| t.kind == TokenKind::Error) {
        let character = token.text.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
        return Err(ParseError::UnexpectedCharacter { character,
                                                     offset: token.offset });
    }
    check_balance(tokens)?;

    group(tokens, 0, 0)
}

/// Recursive step of [`group_tokens`] over a balanced slice.
///
/// `at` is the offset reported if the slice turns out to be empty. `depth`
/// counts the levels above this slice.
fn group(mut tokens: &[Token<'_>], at: usize, mut depth: usize) -> ParseResult<Expr> {
    let at = tokens.first().map_or(at, |t| t.offset);

    loop {
        if depth > MAX_DEPTH {
            return Err(ParseError::TooDeep { offset: at });
        }
        match strip_enclosing(tokens) {
            Some(inner) => {
                tokens = inner;
                depth += 1;
            },
            None => break,
        }
    }

    match tokens {
        [] => Err(ParseError::EmptyExpression { offset: at }),
        [token] => parse_leaf(token),
        _ => {
            let split = find_split_point(tokens)?;
            let (left, rest) = tokens.split_at(split.index);
            let Some((op_token, right)) = rest.split_first() else {
                return Err(ParseError::EmptyExpression { offset: at });
            };
            trace!("split at '{}' (offset {}, depth {depth})", split.op, op_token.offset);

            let left = group(left, op_token.offset, depth + 1)?;
            let right = group(right, op_token.end(), depth + 1)?;

            Ok(Expr::binary(split.op, left, right))
        },
    }
}

/// Turns a single token into a leaf.
fn parse_leaf(token: &Token<'_>) -> ParseResult<Expr> {
    match token.kind {
        TokenKind::Number => {
            token.text
                 .parse()
                 .map(Expr::Value)
                 .map_err(|_| ParseError::LiteralTooLarge { literal: token.text.to_string(),
                                                            offset:  token.offset, })
        },
        _ => Err(ParseError::ExpectedOperand { token:  token.text.to_string(),
                                               offset: token.offset, }),
    }
}
