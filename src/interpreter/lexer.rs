use logos::Logos;

use crate::ast::Operator;

/// The kind of a lexical token.
///
/// Only the ASCII space is skipped. Every other character that starts no
/// token becomes a one-character [`TokenKind::Error`], so the scan never
/// aborts; rejecting those is left to the parser.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r" +")]
pub enum TokenKind {
    /// Unsigned integer literal, such as `42`. Signs are separate operators.
    #[regex(r"[0-9]+")]
    Number,
    /// One of `^ * / + -`.
    #[token("^", parse_operator)]
    #[token("*", parse_operator)]
    #[token("/", parse_operator)]
    #[token("+", parse_operator)]
    #[token("-", parse_operator)]
    Operator(Operator),
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// Any single unrecognized character.
    #[regex(r"[^0-9 ()*+/^\-]")]
    Error,
}

/// Maps the current operator slice to its [`Operator`].
///
/// # Returns
/// - `Some(Operator)` for one of `^ * / + -`.
/// - `None` otherwise, which the lexer reports as an error token.
fn parse_operator(lex: &logos::Lexer<TokenKind>) -> Option<Operator> {
    let mut chars = lex.slice().chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => Operator::from_symbol(symbol),
        _ => None,
    }
}

/// A classified slice of the input line.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Token<'src> {
    /// What the token is.
    pub kind:   TokenKind,
    /// Exactly the characters consumed for this token.
    pub text:   &'src str,
    /// Byte offset of `text` in the input line.
    pub offset: usize,
}

impl Token<'_> {
    /// Byte offset just past the end of the token.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

/// Splits a line into tokens, left to right.
///
/// Concatenating the `text` of every token, with the skipped spaces put back
/// at their offsets, reproduces the line.
///
/// ## Example
/// ```
/// use linecalc::{
///     ast::Operator,
///     interpreter::lexer::{TokenKind, tokenize},
/// };
///
/// let tokens = tokenize("12 + (3)");
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Number,
///             TokenKind::Operator(Operator::Addition),
///             TokenKind::LeftParen,
///             TokenKind::Number,
///             TokenKind::RightParen]);
/// assert_eq!(tokens[0].text, "12");
/// assert_eq!(tokens[2].offset, 5);
/// ```
#[must_use]
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(line);

    while let Some(kind) = lexer.next() {
        tokens.push(Token { kind:   kind.unwrap_or(TokenKind::Error),
                            text:   lexer.slice(),
                            offset: lexer.span().start, });
    }

    tokens
}
