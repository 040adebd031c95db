use linecalc::{
    ast::Operator,
    interpreter::lexer::{Token, TokenKind, tokenize},
};

fn kinds(line: &str) -> Vec<TokenKind> {
    tokenize(line).iter().map(|t| t.kind).collect()
}

fn rebuild(line: &str, tokens: &[Token<'_>]) -> String {
    let mut rebuilt = String::new();
    for token in tokens {
        while rebuilt.len() < token.offset {
            rebuilt.push(' ');
        }
        rebuilt.push_str(token.text);
    }
    while rebuilt.len() < line.len() {
        rebuilt.push(' ');
    }
    rebuilt
}

#[test]
fn every_operator_symbol() {
    assert_eq!(kinds("^*/+-"),
               [TokenKind::Operator(Operator::Power),
                TokenKind::Operator(Operator::Product),
                TokenKind::Operator(Operator::Division),
                TokenKind::Operator(Operator::Addition),
                TokenKind::Operator(Operator::Subtraction)]);
}

#[test]
fn numbers_consume_contiguous_digits() {
    let tokens = tokenize("123 45");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].text, "123");
    assert_eq!(tokens[1].text, "45");
    assert_eq!(tokens[1].offset, 4);
}

#[test]
fn minus_is_never_folded_into_a_literal() {
    assert_eq!(kinds("-7"), [TokenKind::Operator(Operator::Subtraction), TokenKind::Number]);
}

#[test]
fn parentheses() {
    assert_eq!(kinds("(())"),
               [TokenKind::LeftParen,
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::RightParen]);
}

#[test]
fn spaces_are_skipped() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("     ").is_empty());
    assert_eq!(kinds(" 1 "), [TokenKind::Number]);
}

#[test]
fn unknown_characters_become_single_error_tokens() {
    let tokens = tokenize("1 ?? 2");
    assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
               [TokenKind::Number, TokenKind::Error, TokenKind::Error, TokenKind::Number]);
    assert_eq!(tokens[1].text, "?");
    assert_eq!(tokens[2].offset, 3);

    assert_eq!(kinds("1.5"), [TokenKind::Number, TokenKind::Error, TokenKind::Number]);
    assert_eq!(kinds("\t"), [TokenKind::Error]);
}

#[test]
fn multibyte_error_token_covers_whole_character() {
    let tokens = tokenize("1 € 2");
    assert_eq!(tokens[1].kind, TokenKind::Error);
    assert_eq!(tokens[1].text, "€");
    assert_eq!(tokens[2].offset, 6);
}

#[test]
fn tokens_reconstitute_the_line() {
    for line in ["1+ (22 *3)", "  (4 ^ 2) - 10 / x ", "", "7"] {
        let tokens = tokenize(line);
        assert_eq!(rebuild(line, &tokens), line);
    }
}

#[test]
fn token_end_is_past_its_text() {
    let tokens = tokenize("  314 + 1");
    assert_eq!(tokens[0].offset, 2);
    assert_eq!(tokens[0].end(), 5);
}
