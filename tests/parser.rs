use linecalc::{
    ast::{Expr, Operator},
    interpreter::{
        lexer::tokenize,
        parser::utils::{check_balance, find_split_point, matching_paren, strip_enclosing},
    },
    parse,
};

fn tree(src: &str) -> String {
    match parse(src) {
        Ok(expr) => expr.to_string(),
        Err(e) => panic!("Line {src:?} failed to parse: {e}"),
    }
}

#[test]
fn single_number_is_a_leaf() {
    assert_eq!(parse("42").unwrap(), Expr::Value(42));
    assert_eq!(parse("(42)").unwrap(), Expr::Value(42));
}

#[test]
fn builds_binary_nodes() {
    assert_eq!(parse("1 + 2").unwrap(),
               Expr::binary(Operator::Addition, Expr::Value(1), Expr::Value(2)));
}

#[test]
fn loosest_operator_is_the_root() {
    assert_eq!(tree("1 + 2 * 3"), "(1 + (2 * 3))");
    assert_eq!(tree("1 * 2 + 3"), "((1 * 2) + 3)");
    assert_eq!(tree("2 * 3 ^ 2"), "(2 * (3 ^ 2))");
}

#[test]
fn equal_tiers_split_at_the_rightmost_operator() {
    assert_eq!(tree("8 - 3 - 2"), "((8 - 3) - 2)");
    assert_eq!(tree("1 - 2 + 3"), "((1 - 2) + 3)");
    assert_eq!(tree("8 / 2 * 2"), "((8 / 2) * 2)");
    assert_eq!(tree("2 ^ 3 ^ 2"), "((2 ^ 3) ^ 2)");
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(tree("(1 + 2) * 3"), "((1 + 2) * 3)");
    assert_eq!(tree("2 ^ (3 ^ 2)"), "(2 ^ (3 ^ 2))");
    assert_eq!(tree("8 - (3 - 2)"), "(8 - (3 - 2))");
}

#[test]
fn redundant_outer_parens_do_not_change_the_tree() {
    assert_eq!(parse("((1+2)*3)").unwrap(), parse("(1+2)*3").unwrap());
    assert_eq!(parse("(((1 - 2)))").unwrap(), parse("1 - 2").unwrap());
}

#[test]
fn node_count() {
    assert_eq!(parse("7").unwrap().node_count(), 1);
    assert_eq!(parse("(1 + 2) * 3").unwrap().node_count(), 5);
}

#[test]
fn strips_only_enclosing_parens() {
    let tokens = tokenize("((1 + 2))");
    let once = strip_enclosing(&tokens).unwrap();
    assert_eq!(once.len(), 5);
    let inner = strip_enclosing(once).unwrap();
    assert_eq!(inner.len(), 3);
    assert_eq!(inner[0].text, "1");
    assert!(strip_enclosing(inner).is_none());

    assert!(strip_enclosing(&tokenize("(1) + (2)")).is_none());
    assert!(strip_enclosing(&tokenize("()")).is_some_and(|inner| inner.is_empty()));
}

#[test]
fn finds_matching_paren() {
    let tokens = tokenize("(1 + (2)) * 3");
    assert_eq!(matching_paren(&tokens), Some(6));
    assert_eq!(matching_paren(&tokenize("1 + 2")), None);
    assert_eq!(matching_paren(&tokenize("(1 + 2")), None);
}

#[test]
fn split_point_prefers_shallow_depth() {
    let tokens = tokenize("(1 + 2) * 3");
    let split = find_split_point(&tokens).unwrap();
    assert_eq!(split.index, 5);
    assert_eq!(split.op, Operator::Product);
    assert_eq!(split.depth, 0);
}

#[test]
fn balance_check() {
    assert!(check_balance(&tokenize("((1) + (2))")).is_ok());
    assert!(check_balance(&tokenize("(1")).is_err());
    assert!(check_balance(&tokenize("1)")).is_err());
}
