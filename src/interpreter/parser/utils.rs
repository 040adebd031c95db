use crate::{
    ast::Operator,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// The operator chosen as the root of a sub-expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitPoint {
    /// Index of the operator token in the slice.
    pub index: usize,
    /// The operator itself.
    pub op:    Operator,
    /// Parenthesis nesting depth at the operator.
    pub depth: usize,
}

/// Checks that every parenthesis in the sequence is matched.
///
/// # Errors
/// - `UnmatchedRightParen` for a `)` with no open `(` before it.
/// - `UnclosedLeftParen` for the innermost `(` left open at the end.
pub fn check_balance(tokens: &[Token<'_>]) -> ParseResult<()> {
    let mut open = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::LeftParen => open.push(token.offset),
            TokenKind::RightParen => {
                if open.pop().is_none() {
                    return Err(ParseError::UnmatchedRightParen { offset: token.offset });
                }
            },
            _ => {},
        }
    }

    match open.pop() {
        Some(offset) => Err(ParseError::UnclosedLeftParen { offset }),
        None => Ok(()),
    }
}

/// Finds the index of the `)` matching the `(` at the start of the slice.
///
/// Returns `None` if the slice does not start with `(` or the parenthesis is
/// never closed.
#[must_use]
pub fn matching_paren(tokens: &[Token<'_>]) -> Option<usize> {
    if tokens.first()?.kind != TokenKind::LeftParen {
        return None;
    }

    let mut depth = 0usize;
    for (index, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::LeftParen => depth += 1,
            TokenKind::RightParen => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(index);
                }
            },
            _ => {},
        }
    }

    None
}

/// Strips one pair of parentheses if it encloses the whole slice.
///
/// `((1 + 2))` becomes `(1 + 2)`. Returns `None` when the first `(` closes before the end, as in
/// `(1) + (2)`, or when the slice does not start with `(`.
#[must_use]
pub fn strip_enclosing<'a, 'src>(tokens: &'a [Token<'src>]) -> Option<&'a [Token<'src>]> {
    match tokens {
        [first, inner @ .., _]
            if first.kind == TokenKind::LeftParen
               && matching_paren(tokens) == Some(tokens.len() - 1) =>
        {
            Some(inner)
        },
        _ => None,
    }
}

/// Selects the operator at which the slice splits into left and right.
///
/// Scanning left to right, an operator replaces the current candidate when it
/// sits at a strictly shallower depth, or at the same depth with an equal or
/// looser binding tier. The rightmost loosest operator at the shallowest depth
/// therefore wins, which makes every operator group left to right.
///
/// # Errors
/// `MissingOperator` if no operator sits at depth zero, as in `1 2` or
/// `(1 + 2)(3)`.
pub fn find_split_point(tokens: &[Token<'_>]) -> ParseResult<SplitPoint> {
    let mut best: Option<SplitPoint> = None;
    let mut depth = 0usize;

    for (index, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::LeftParen => depth += 1,
            TokenKind::RightParen => {
                depth = depth.checked_sub(1)
                             .ok_or(ParseError::UnmatchedRightParen { offset: token.offset })?;
            },
            TokenKind::Operator(op) => {
                let replaces = best.is_none_or(|b| {
                                       depth < b.depth
                                       || (depth == b.depth && op.precedence() >= b.op.precedence())
                                   });
                if replaces {
                    best = Some(SplitPoint { index, op, depth });
                }
            },
            TokenKind::Number | TokenKind::Error => {},
        }
    }

    match best {
        Some(split) if split.depth == 0 => Ok(split),
        _ => Err(ParseError::MissingOperator { offset: juxtaposed_operand(tokens) }),
    }
}

/// Offset of the first depth-zero operand that directly follows another
/// operand. Falls back to the first token.
fn juxtaposed_operand(tokens: &[Token<'_>]) -> usize {
    let mut depth = 0usize;
    let mut after_operand = false;

    for token in tokens {
        let starts_operand = matches!(token.kind, TokenKind::Number | TokenKind::LeftParen);
        if depth == 0 && after_operand && starts_operand {
            return token.offset;
        }
        match token.kind {
            TokenKind::LeftParen => depth += 1,
            TokenKind::RightParen => depth = depth.saturating_sub(1),
            _ => {},
        }
        if depth == 0 {
            after_operand = matches!(token.kind, TokenKind::Number | TokenKind::RightParen);
        }
    }

    tokens.first().map_or(0, |t| t.offset)
}
