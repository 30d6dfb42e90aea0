//! Token codes, their classification, and the punctuator spelling table.

use phf::phf_map;

/// Every token the lexer can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenCode {
    /// A character that starts no known token.
    Unknown,
    /// A comment; carries no meaning for the parser.
    Ignore,
    EndOfFile,

    // Brackets
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,

    // Single-character punctuators
    Tilde,
    Question,
    Bang,
    Amp,
    Pipe,
    Caret,
    Eq,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Gt,
    Lt,
    Dot,
    Colon,
    Semi,
    Comma,

    // Doubled punctuators
    AmpAmp,
    PipePipe,
    CaretCaret,
    EqEq,
    PlusPlus,
    MinusMinus,
    StarStar,
    Shr,
    Shl,
    DotDot,
    ColonColon,

    PlusMinus,
    MinusPlus,

    // Compound assignment and comparison
    TildeEq,
    BangEq,
    AmpEq,
    PipeEq,
    CaretEq,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    GtEq,
    LtEq,
    ColonEq,
    StarStarEq,
    ShrEq,
    ShlEq,

    LeftArrow,
    FatArrow,
    /// `()`
    Forall,
    /// `[]`
    Exists,
    /// `[]!`
    ExistsOnly,
    Ellipsis,

    // Numeric literals
    /// `0b` prefixed integer; the lexeme holds only the digits.
    BinInteger,
    /// `0c` prefixed integer; the lexeme holds only the digits.
    OctInteger,
    /// `0d` prefixed integer; the lexeme holds only the digits.
    DecInteger,
    /// `0x` prefixed integer; the lexeme holds only the digits.
    HexInteger,
    /// Unprefixed decimal integer.
    Integer,
    /// Real with an exponent suffix, such as `1.5e-3`.
    ExpReal,
    /// Real without an exponent, such as `0.25`.
    Real,
}

/// Syntactic role of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Invalid,
    Ignored,
    Constant,
    Variable,
    UnaryOperator,
    BinaryOperator,
    TernaryOperator,
}

/// Maps each punctuator spelling to its code.
static PUNCTUATORS: phf::Map<&'static str, TokenCode> = phf_map! {
    "(" => TokenCode::LParen,
    ")" => TokenCode::RParen,
    "[" => TokenCode::LBracket,
    "]" => TokenCode::RBracket,
    "{" => TokenCode::LBrace,
    "}" => TokenCode::RBrace,
    "~" => TokenCode::Tilde,
    "?" => TokenCode::Question,
    "!" => TokenCode::Bang,
    "&" => TokenCode::Amp,
    "|" => TokenCode::Pipe,
    "^" => TokenCode::Caret,
    "=" => TokenCode::Eq,
    "+" => TokenCode::Plus,
    "-" => TokenCode::Minus,
    "*" => TokenCode::Star,
    "/" => TokenCode::Slash,
    "%" => TokenCode::Percent,
    ">" => TokenCode::Gt,
    "<" => TokenCode::Lt,
    "." => TokenCode::Dot,
    ":" => TokenCode::Colon,
    ";" => TokenCode::Semi,
    "," => TokenCode::Comma,
    "&&" => TokenCode::AmpAmp,
    "||" => TokenCode::PipePipe,
    "^^" => TokenCode::CaretCaret,
    "==" => TokenCode::EqEq,
    "++" => TokenCode::PlusPlus,
    "--" => TokenCode::MinusMinus,
    "**" => TokenCode::StarStar,
    ">>" => TokenCode::Shr,
    "<<" => TokenCode::Shl,
    ".." => TokenCode::DotDot,
    "::" => TokenCode::ColonColon,
    "+-" => TokenCode::PlusMinus,
    "-+" => TokenCode::MinusPlus,
    "~=" => TokenCode::TildeEq,
    "!=" => TokenCode::BangEq,
    "&=" => TokenCode::AmpEq,
    "|=" => TokenCode::PipeEq,
    "^=" => TokenCode::CaretEq,
    "+=" => TokenCode::PlusEq,
    "-=" => TokenCode::MinusEq,
    "*=" => TokenCode::StarEq,
    "/=" => TokenCode::SlashEq,
    "%=" => TokenCode::PercentEq,
    ">=" => TokenCode::GtEq,
    "<=" => TokenCode::LtEq,
    ":=" => TokenCode::ColonEq,
    "**=" => TokenCode::StarStarEq,
    ">>=" => TokenCode::ShrEq,
    "<<=" => TokenCode::ShlEq,
    "<-" => TokenCode::LeftArrow,
    "=>" => TokenCode::FatArrow,
    "()" => TokenCode::Forall,
    "[]" => TokenCode::Exists,
    "[]!" => TokenCode::ExistsOnly,
    "..." => TokenCode::Ellipsis,
};

impl TokenCode {
    /// Look up a punctuator by its spelling.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sigmath::lexer::TokenCode;
    ///
    /// assert_eq!(TokenCode::from_spelling("<<="), Some(TokenCode::ShlEq));
    /// assert_eq!(TokenCode::from_spelling("<<<"), None);
    /// ```
    #[must_use]
    pub fn from_spelling(spelling: &str) -> Option<Self> {
        PUNCTUATORS.get(spelling).copied()
    }

    /// All punctuator spellings with their codes, in no particular order.
    pub fn punctuators() -> impl Iterator<Item = (&'static str, Self)> {
        PUNCTUATORS.entries().map(|(s, c)| (*s, *c))
    }

    /// Source spelling of a punctuator; `None` for every other code.
    #[must_use]
    pub const fn spelling(self) -> Option<&'static str> {
        let s = match self {
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Tilde => "~",
            Self::Question => "?",
            Self::Bang => "!",
            Self::Amp => "&",
            Self::Pipe => "|",
            Self::Caret => "^",
            Self::Eq => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Dot => ".",
            Self::Colon => ":",
            Self::Semi => ";",
            Self::Comma => ",",
            Self::AmpAmp => "&&",
            Self::PipePipe => "||",
            Self::CaretCaret => "^^",
            Self::EqEq => "==",
            Self::PlusPlus => "++",
            Self::MinusMinus => "--",
            Self::StarStar => "**",
            Self::Shr => ">>",
            Self::Shl => "<<",
            Self::DotDot => "..",
            Self::ColonColon => "::",
            Self::PlusMinus => "+-",
            Self::MinusPlus => "-+",
            Self::TildeEq => "~=",
            Self::BangEq => "!=",
            Self::AmpEq => "&=",
            Self::PipeEq => "|=",
            Self::CaretEq => "^=",
            Self::PlusEq => "+=",
            Self::MinusEq => "-=",
            Self::StarEq => "*=",
            Self::SlashEq => "/=",
            Self::PercentEq => "%=",
            Self::GtEq => ">=",
            Self::LtEq => "<=",
            Self::ColonEq => ":=",
            Self::StarStarEq => "**=",
            Self::ShrEq => ">>=",
            Self::ShlEq => "<<=",
            Self::LeftArrow => "<-",
            Self::FatArrow => "=>",
            Self::Forall => "()",
            Self::Exists => "[]",
            Self::ExistsOnly => "[]!",
            Self::Ellipsis => "...",
            Self::Unknown
            | Self::Ignore
            | Self::EndOfFile
            | Self::BinInteger
            | Self::OctInteger
            | Self::DecInteger
            | Self::HexInteger
            | Self::Integer
            | Self::ExpReal
            | Self::Real => return None,
        };
        Some(s)
    }

    /// Radix of an integer literal code.
    #[must_use]
    pub const fn radix(self) -> Option<u32> {
        match self {
            Self::BinInteger => Some(2),
            Self::OctInteger => Some(8),
            Self::DecInteger | Self::Integer => Some(10),
            Self::HexInteger => Some(16),
            _ => None,
        }
    }

    /// Classification of the token when it follows an operand.
    #[must_use]
    pub const fn kind(self) -> TokenKind {
        match self {
            Self::Ignore | Self::EndOfFile => TokenKind::Ignored,
            Self::BinInteger
            | Self::OctInteger
            | Self::DecInteger
            | Self::HexInteger
            | Self::Integer
            | Self::ExpReal
            | Self::Real => TokenKind::Constant,
            Self::Question => TokenKind::TernaryOperator,
            Self::Amp
            | Self::Pipe
            | Self::Caret
            | Self::Eq
            | Self::Plus
            | Self::Minus
            | Self::Star
            | Self::Slash
            | Self::Percent
            | Self::Gt
            | Self::Lt
            | Self::Dot
            | Self::Colon
            | Self::AmpAmp
            | Self::PipePipe
            | Self::CaretCaret
            | Self::EqEq
            | Self::StarStar
            | Self::Shr
            | Self::Shl
            | Self::ColonColon
            | Self::PlusMinus
            | Self::MinusPlus
            | Self::TildeEq
            | Self::BangEq
            | Self::AmpEq
            | Self::PipeEq
            | Self::CaretEq
            | Self::PlusEq
            | Self::MinusEq
            | Self::StarEq
            | Self::SlashEq
            | Self::PercentEq
            | Self::GtEq
            | Self::LtEq
            | Self::ColonEq
            | Self::StarStarEq
            | Self::ShrEq
            | Self::ShlEq
            | Self::LeftArrow
            | Self::FatArrow => TokenKind::BinaryOperator,
            _ => TokenKind::Invalid,
        }
    }

    /// Classification of the token where an operand is expected.
    ///
    /// Sign and increment punctuators read as prefix operators here.
    #[must_use]
    pub const fn operand_kind(self) -> TokenKind {
        match self {
            Self::Plus | Self::Minus | Self::PlusPlus | Self::MinusMinus => {
                TokenKind::UnaryOperator
            }
            other => other.kind(),
        }
    }
}

/// One recognised token and the text recorded for it.
///
/// Punctuators record no text; see [`Token::text`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub code: TokenCode,
    pub lexeme: String,
}

impl Token {
    #[must_use]
    pub fn new(code: TokenCode, lexeme: impl Into<String>) -> Self {
        Self {
            code,
            lexeme: lexeme.into(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.code.kind()
    }

    /// Text suitable for diagnostics: the lexeme, or the punctuator spelling
    /// when no lexeme was recorded.
    #[must_use]
    pub fn text(&self) -> &str {
        if self.lexeme.is_empty() {
            self.code.spelling().unwrap_or_default()
        } else {
            &self.lexeme
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::charset;
    use rstest::rstest;

    #[test]
    fn spelling_table_agrees_with_spelling() {
        for (spelling, code) in TokenCode::punctuators() {
            assert_eq!(code.spelling(), Some(spelling), "{code:?}");
        }
    }

    #[test]
    fn spelling_table_is_prefix_closed() {
        for (spelling, _) in TokenCode::punctuators() {
            for (end, _) in spelling.char_indices().skip(1) {
                let prefix = spelling.get(..end).unwrap_or_default();
                assert!(
                    TokenCode::from_spelling(prefix).is_some(),
                    "{prefix} (prefix of {spelling}) is not a punctuator"
                );
            }
        }
    }

    #[test]
    fn punctuator_starts_are_single_spellings() {
        for (spelling, _) in TokenCode::punctuators() {
            let first = spelling.chars().next().unwrap_or_default();
            assert!(charset::is_punctuator_start(first), "{spelling}");
        }
        for c in (' '..='~').filter(|&c| charset::is_punctuator_start(c)) {
            assert!(TokenCode::from_spelling(&c.to_string()).is_some(), "{c}");
        }
    }

    #[rstest]
    #[case(TokenCode::Plus, TokenKind::BinaryOperator, TokenKind::UnaryOperator)]
    #[case(TokenCode::Minus, TokenKind::BinaryOperator, TokenKind::UnaryOperator)]
    #[case(TokenCode::PlusPlus, TokenKind::Invalid, TokenKind::UnaryOperator)]
    #[case(TokenCode::Star, TokenKind::BinaryOperator, TokenKind::BinaryOperator)]
    #[case(TokenCode::HexInteger, TokenKind::Constant, TokenKind::Constant)]
    #[case(TokenCode::Ignore, TokenKind::Ignored, TokenKind::Ignored)]
    #[case(TokenCode::Question, TokenKind::TernaryOperator, TokenKind::TernaryOperator)]
    #[case(TokenCode::RParen, TokenKind::Invalid, TokenKind::Invalid)]
    #[case(TokenCode::Unknown, TokenKind::Invalid, TokenKind::Invalid)]
    fn classifies_by_position(
        #[case] code: TokenCode,
        #[case] after_operand: TokenKind,
        #[case] before_operand: TokenKind,
    ) {
        assert_eq!(code.kind(), after_operand);
        assert_eq!(code.operand_kind(), before_operand);
    }

    #[test]
    fn token_text_falls_back_to_spelling() {
        assert_eq!(Token::new(TokenCode::ShlEq, "").text(), "<<=");
        assert_eq!(Token::new(TokenCode::HexInteger, "2A").text(), "2A");
        assert_eq!(Token::new(TokenCode::EndOfFile, "").text(), "");
    }
}
