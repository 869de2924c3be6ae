mod common;

use arithc::{
    ast::{Expr, Number},
    compiler::{
        lexer::{Token, Tokenizer},
        parser::core::Parser,
    },
    recompile_line,
};
use common::{Value, eval_line, parse_ok};

fn assert_recompiles(src: &str, expected: &str) {
    match recompile_line(src, 1) {
        Ok(out) => assert_eq!(out, expected, "recompiling {src:?}"),
        Err(e) => panic!("Line {src:?} failed: {e}"),
    }
}

fn assert_same_value(src: &str) {
    let recompiled = recompile_line(src, 1).unwrap_or_else(|e| panic!("Line failed: {e}"));
    assert_eq!(eval_line(&recompiled), eval_line(src), "{src:?} -> {recompiled:?}");
}

#[test]
fn multiplication_binds_tighter() {
    assert_recompiles("3 + 4 * 2", "3 + 4 * 2");
    assert_eq!(eval_line("3 + 4 * 2"), Ok(Value::Int(11)));
    assert_same_value("3 + 4 * 2");
}

#[test]
fn parentheses_override_precedence() {
    assert_recompiles("(3 + 4) * 2", "(3 + 4) * 2");
    assert_eq!(eval_line("(3 + 4) * 2"), Ok(Value::Int(14)));
    assert_same_value("(3 + 4) * 2");
}

#[test]
fn division_is_left_associative() {
    assert_recompiles("10 / 2 / 5", "10 / 2 / 5");
    assert_eq!(eval_line("10 / 2 / 5"), Ok(Value::Float(1.0)));
    assert_same_value("10 / 2 / 5");
}

#[test]
fn subtraction_chains_stay_flat() {
    assert_recompiles("1 - 2 - 3 - 4", "1 - 2 - 3 - 4");
    assert_recompiles("(3 - 4) - 5", "3 - 4 - 5");
    assert_eq!(eval_line("1 - 2 - 3 - 4"), Ok(Value::Int(-8)));
}

#[test]
fn right_grouping_keeps_its_parentheses() {
    assert_recompiles("3 - (4 - 5)", "3 - (4 - 5)");
    assert_recompiles("8 / (4 / 2)", "8 / (4 / 2)");
    assert_recompiles("2 * (3 * 4)", "2 * (3 * 4)");
    assert_eq!(eval_line("3 - (4 - 5)"), Ok(Value::Int(4)));
    assert_same_value("3 - (4 - 5)");
    assert_same_value("8 / (4 / 2)");
}

#[test]
fn redundant_parentheses_are_dropped() {
    assert_recompiles("((7))", "7");
    assert_recompiles("(2 * 3) + 1", "2 * 3 + 1");
    assert_recompiles("1 + (2 * 3)", "1 + 2 * 3");
    assert_recompiles("(((1 + 2)))", "1 + 2");
}

#[test]
fn string_literals_are_requoted_verbatim() {
    assert_recompiles("\"hello\" + \"world\"", "\"hello\" + \"world\"");
    assert_recompiles("\"a b\\n\" * 3", "\"a b\\n\" * 3");
    assert_recompiles("\"\"", "\"\"");
    assert_recompiles("(\"x\" + \"y\") * 2", "(\"x\" + \"y\") * 2");
    assert_eq!(eval_line("\"hello\" + \"world\""), Ok(Value::Str("helloworld".into())));
}

#[test]
fn reals_keep_their_decimal_point() {
    assert_recompiles("3.", "3.0");
    assert_recompiles(".5", "0.5");
    assert_recompiles("1.50 * 2", "1.5 * 2");
    assert_recompiles("2.5 + 1", "2.5 + 1");
}

#[test]
fn whitespace_is_insignificant() {
    assert_recompiles("  7\t*\t6  ", "7 * 6");
    assert_recompiles("(1+2)*3", "(1 + 2) * 3");
    assert_recompiles("1+2-3", "1 + 2 - 3");
}

#[test]
fn recompiling_twice_is_stable() {
    for src in ["3 + 4 * 2", "(1 - 2) * (3 - 4) / 5", "1 - (2 - (3 - 4))", "\"a\" + (\"b\" + \"c\")"] {
        let once = recompile_line(src, 1).unwrap();
        let twice = recompile_line(&once, 1).unwrap();
        assert_eq!(once, twice);
        assert_eq!(parse_ok(&once), parse_ok(src));
    }
}

#[test]
fn tokenizer_yields_end_repeatedly() {
    let mut tokenizer = Tokenizer::new("1", 1);
    assert_eq!(tokenizer.next_token().unwrap(), Token::Number(Number::from(1_u64)));
    for _ in 0..3 {
        assert_eq!(tokenizer.next_token().unwrap(), Token::End);
    }
    assert_eq!(tokenizer.scan_position(), 1);
}

#[test]
fn tokenizer_distinguishes_integers_and_reals() {
    let tokens: Vec<Token> = Tokenizer::new("12 + 1.25 - (\"s\")", 1).collect::<Result<_, _>>()
                                                                      .unwrap();
    assert_eq!(tokens,
               vec![Token::Number(Number::from(12_u64)),
                    Token::Plus,
                    Token::Number(Number::Real(1.25)),
                    Token::Minus,
                    Token::LParen,
                    Token::StringLiteral("s".to_string()),
                    Token::RParen]);
}

#[test]
fn tokenizer_does_not_treat_minus_as_sign() {
    let tokens: Vec<Token> = Tokenizer::new("-5", 1).collect::<Result<_, _>>().unwrap();
    assert_eq!(tokens, vec![Token::Minus, Token::Number(Number::from(5_u64))]);
}

#[test]
fn integers_have_no_size_limit() {
    assert_recompiles("99999999999999999999 + 1", "99999999999999999999 + 1");
    assert_recompiles("123456789012345678901234567890 * 2",
                      "123456789012345678901234567890 * 2");

    let tokens: Vec<Token> = Tokenizer::new("18446744073709551616", 1).collect::<Result<_, _>>()
                                                                      .unwrap();
    let expected = Number::Integer("18446744073709551616".parse().unwrap());
    assert_eq!(tokens, vec![Token::Number(expected)]);
}

#[test]
fn integer_leading_zeros_are_dropped() {
    assert_recompiles("007 + 0", "7 + 0");
    assert_recompiles("000", "0");
}

#[test]
fn long_flat_chains_recompile() {
    let sum = format!("1{}", " + 1".repeat(200_000));
    assert_eq!(recompile_line(&sum, 1).unwrap(), sum);

    let product = format!("2{}", " * 2".repeat(200_000));
    assert_eq!(recompile_line(&product, 1).unwrap(), product);

    let mixed = format!("1{}", " - 2 * 3 / 4".repeat(100_000));
    assert_eq!(recompile_line(&mixed, 1).unwrap(), mixed);
}

#[test]
fn long_chain_inside_parentheses_recompiles() {
    let chain = format!("1{}", " - 1".repeat(100_000));
    let grouped = format!("2 * ({chain})");
    assert_eq!(recompile_line(&grouped, 1).unwrap(), grouped);

    let right = format!("5 - ({chain})");
    assert_eq!(recompile_line(&right, 1).unwrap(), right);
}

#[test]
fn parsed_expressions_carry_their_line() {
    let mut parser = Parser::new(Tokenizer::new("(1 + 2) * \"a\"", 5)).unwrap();
    let expr = parser.parse_line().unwrap();
    assert_eq!(expr.line(), 5);

    let Expr::BinaryOp { left, right, .. } = &expr else {
        panic!("expected a binary operation, got {expr:?}");
    };
    assert_eq!(left.line(), 5);
    assert_eq!(right.line(), 5);
}
