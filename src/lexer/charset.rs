//! Character classes used by the lexical rules.

/// Something a single character can be tested against: either one exact
/// character or a class predicate.
#[derive(Debug, Clone, Copy)]
pub enum CharPattern {
    Char(char),
    Class(fn(char) -> bool),
}

impl CharPattern {
    /// Test `c` against the pattern. The end-of-stream sentinel never matches.
    #[must_use]
    pub fn matches(self, c: Option<char>) -> bool {
        match (self, c) {
            (Self::Char(expected), Some(c)) => expected == c,
            (Self::Class(predicate), Some(c)) => predicate(c),
            (_, None) => false,
        }
    }
}

impl From<char> for CharPattern {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl From<fn(char) -> bool> for CharPattern {
    fn from(predicate: fn(char) -> bool) -> Self {
        Self::Class(predicate)
    }
}

pub const WHITESPACE: CharPattern = CharPattern::Class(is_whitespace);
pub const DIGIT: CharPattern = CharPattern::Class(is_digit);
pub const BINARY_DIGIT: CharPattern = CharPattern::Class(is_binary_digit);
pub const OCTAL_DIGIT: CharPattern = CharPattern::Class(is_octal_digit);
pub const HEX_DIGIT: CharPattern = CharPattern::Class(is_hex_digit);
pub const EXPONENT: CharPattern = CharPattern::Class(is_exponent);
pub const SIGN: CharPattern = CharPattern::Class(is_sign);

/// Control characters up to and including space, plus DEL.
#[must_use]
pub const fn is_whitespace(c: char) -> bool {
    matches!(c, '\u{01}'..='\u{20}' | '\u{7F}')
}

#[must_use]
pub const fn is_end_line(c: char) -> bool {
    c == '\n'
}

#[must_use]
pub const fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[must_use]
pub const fn is_binary_digit(c: char) -> bool {
    matches!(c, '0' | '1')
}

#[must_use]
pub const fn is_octal_digit(c: char) -> bool {
    matches!(c, '0'..='7')
}

#[must_use]
pub const fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

#[must_use]
pub const fn is_exponent(c: char) -> bool {
    matches!(c, 'E' | 'e')
}

#[must_use]
pub const fn is_sign(c: char) -> bool {
    matches!(c, '+' | '-')
}

/// Characters that open a punctuator (or a comment).
#[must_use]
pub const fn is_punctuator_start(c: char) -> bool {
    matches!(
        c,
        '~' | '?'
            | '!'
            | '&'
            | '|'
            | '^'
            | '='
            | '+'
            | '-'
            | '*'
            | '/'
            | '%'
            | '<'
            | '>'
            | '.'
            | ':'
            | ';'
            | ','
            | '('
            | ')'
            | '['
            | ']'
            | '{'
            | '}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(' ', true)]
    #[case('\t', true)]
    #[case('\n', true)]
    #[case('\u{7F}', true)]
    #[case('\0', false)]
    #[case('a', false)]
    fn whitespace_class(#[case] c: char, #[case] expected: bool) {
        assert_eq!(is_whitespace(c), expected);
    }

    #[test]
    fn patterns_never_match_end_of_stream() {
        assert!(!CharPattern::from('a').matches(None));
        assert!(!DIGIT.matches(None));
        assert!(DIGIT.matches(Some('7')));
        assert!(!OCTAL_DIGIT.matches(Some('8')));
    }
}
