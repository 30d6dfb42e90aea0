//! Tests for the one-token lookahead and top-level entry points.

use crate::Error;
use crate::lexer::{SourceReader, TokenCode};
use crate::parser::Parser;
use crate::test_util::{add, assert_parse_error, int};
use rstest::rstest;

#[test]
fn peek_is_idempotent() {
    let mut parser = Parser::from_text("12 + 3");
    let first = parser.peek().map(Clone::clone).ok();
    let position = parser.position();
    let second = parser.peek().map(Clone::clone).ok();
    assert_eq!(first, second);
    assert_eq!(parser.position(), position);
    assert_eq!(first.map(|t| t.lexeme), Some("12".to_owned()));
}

#[test]
fn next_consumes_the_peeked_token() {
    let mut parser = Parser::from_text("1 +");
    assert!(matches!(parser.peek(), Ok(t) if t.code == TokenCode::Integer));
    assert!(matches!(parser.next(), Ok(t) if t.code == TokenCode::Integer));
    assert!(matches!(parser.next(), Ok(t) if t.code == TokenCode::Plus));
    assert!(matches!(parser.next(), Ok(t) if t.code == TokenCode::EndOfFile));
}

#[test]
fn comments_never_reach_the_grammar() {
    let mut parser = Parser::from_text("/* a */ // b\n 1 /* x */ + 2");
    assert!(matches!(parser.peek(), Ok(t) if t.code == TokenCode::Integer));
    assert!(matches!(parser.parse(), Ok(e) if e == add(int(1), int(2))));
}

#[test]
fn expression_stops_before_trailing_operand() {
    let mut parser = Parser::from_text("1 + 2 3");
    assert!(matches!(parser.parse_expression(), Ok(e) if e == add(int(1), int(2))));
    assert!(matches!(parser.next(), Ok(t) if t.lexeme == "3"));
}

#[test]
fn small_window_parses_long_input() {
    let src = format!("1{}", " + 1".repeat(200));
    let mut parser = Parser::new(SourceReader::with_capacity(src.chars(), 2));
    let sexpr = parser.parse().map(|e| e.to_sexpr());
    assert!(sexpr.is_ok_and(|s| s.starts_with("(+ (+ ")));
}

#[rstest]
#[case(0, "0", "0")]
#[case(1, "/* */1", "1")]
#[case(1, "1 /* a */ + 2", "(+ 1 2)")]
#[case(0, "0x1F % 0.5e1", "(% 31 5/1)")]
#[case(1, "00 // z\n", "0")]
fn smallest_window_needs_no_wider_lookahead(
    #[case] capacity: usize,
    #[case] src: &str,
    #[case] expected: &str,
) {
    let mut parser = Parser::new(SourceReader::with_capacity(src.chars(), capacity));
    let sexpr = parser.parse().map(|e| e.to_sexpr());
    assert_eq!(sexpr.ok().as_deref(), Some(expected));
}

#[rstest]
#[case("", "", "operand")]
#[case("   ", "", "operand")]
#[case("/* only */", "", "operand")]
#[case("// only\n", "", "operand")]
#[case("1 +", "", "operand")]
#[case("* 2", "*", "operand")]
#[case("1 2", "2", "end of input")]
#[case("1 )", ")", "binary operator")]
#[case("1 @", "@", "binary operator")]
#[case("1 == 2", "==", "supported binary operator")]
#[case("1 ? 2", "?", "supported binary operator")]
#[case("++1", "++", "prefix operator")]
#[case("--1", "--", "prefix operator")]
#[case("(1)", "(", "operand")]
fn syntax_errors(#[case] src: &str, #[case] lexeme: &str, #[case] what: &str) {
    assert_parse_error(src, lexeme, what);
}

#[test]
fn first_error_aborts() {
    let mut parser = Parser::from_text("1 + 0b2 + )");
    assert!(matches!(parser.parse(), Err(Error::Lex(e)) if e.what == "binary number"));
}
