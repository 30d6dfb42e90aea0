mod test_util;

use rstest::{fixture, rstest};
use sigmath::lexer::{Lexer, SourceReader, Token, TokenCode, TokenKind};
use sigmath::{tokenize_with_trivia, tokenize_without_trivia};
use test_util::codes_with_trivia;

#[fixture]
fn commented_sum() -> &'static str {
    "1 /* x */ + 2"
}

#[rstest]
fn comment_contributes_no_token(commented_sum: &str) {
    let tokens = tokenize_without_trivia(commented_sum).unwrap_or_default();
    assert_eq!(
        tokens,
        [
            Token::new(TokenCode::Integer, "1"),
            Token::new(TokenCode::Plus, ""),
            Token::new(TokenCode::Integer, "2"),
            Token::new(TokenCode::EndOfFile, ""),
        ]
    );
}

#[rstest]
fn trivia_is_kept_on_request(commented_sum: &str) {
    assert_eq!(
        codes_with_trivia(commented_sum),
        [
            TokenCode::Integer,
            TokenCode::Ignore,
            TokenCode::Plus,
            TokenCode::Integer,
            TokenCode::EndOfFile,
        ]
    );
}

#[rstest]
#[case("0x2A", TokenCode::HexInteger, "2A")]
#[case("0B101", TokenCode::BinInteger, "101")]
#[case("0c17", TokenCode::OctInteger, "17")]
#[case("42", TokenCode::Integer, "42")]
#[case("3.14", TokenCode::Real, "3.14")]
#[case("6.02e+23", TokenCode::ExpReal, "6.02e+23")]
fn literal_tokens(#[case] src: &str, #[case] code: TokenCode, #[case] lexeme: &str) {
    let tokens = tokenize_without_trivia(src).unwrap_or_default();
    assert_eq!(tokens.first(), Some(&Token::new(code, lexeme)));
    assert_eq!(tokens.first().map(Token::kind), Some(TokenKind::Constant));
}

#[rstest]
#[case("<<=", &[TokenCode::ShlEq])]
#[case("<<", &[TokenCode::Shl])]
#[case("<-", &[TokenCode::LeftArrow])]
#[case("<=", &[TokenCode::LtEq])]
#[case("< =", &[TokenCode::Lt, TokenCode::Eq])]
#[case("&&=", &[TokenCode::AmpAmp, TokenCode::Eq])]
#[case("=>=", &[TokenCode::FatArrow, TokenCode::Eq])]
#[case("**=", &[TokenCode::StarStarEq])]
#[case("[]!", &[TokenCode::ExistsOnly])]
#[case("...", &[TokenCode::Ellipsis])]
fn punctuators_use_maximal_munch(#[case] src: &str, #[case] expected: &[TokenCode]) {
    let mut codes = codes_with_trivia(src);
    assert_eq!(codes.pop(), Some(TokenCode::EndOfFile));
    assert_eq!(codes, expected);
}

#[test]
fn lexer_reports_codes_and_lexemes() {
    let mut lexer = Lexer::from_text("0b11 - x");
    assert_eq!(lexer.lex(0).ok(), Some(TokenCode::BinInteger));
    assert_eq!(lexer.lexeme(), "11");
    assert_eq!(lexer.lex(0).ok(), Some(TokenCode::Minus));
    assert_eq!(lexer.lex(0).ok(), Some(TokenCode::Unknown));
    assert_eq!(lexer.lexeme(), "x");
    assert_eq!(lexer.lex(0).ok(), Some(TokenCode::EndOfFile));
}

#[test]
fn small_window_lexes_long_literals() {
    let digits = "9".repeat(40);
    let src = format!("0.{digits}");
    let mut lexer = Lexer::new(SourceReader::with_capacity(src.chars(), 4));
    let token = lexer.next_token().ok();
    assert_eq!(token.map(|t| t.lexeme), Some(src));
}

#[rstest]
#[case("0x")]
#[case("1.5e-")]
#[case("// open")]
fn lexical_errors_stop_tokenising(#[case] src: &str) {
    assert!(tokenize_with_trivia(src).is_err());
}
