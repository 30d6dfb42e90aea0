//! Error family surfaced by parsing.
//!
//! Every failure aborts the parse that raised it. Each variant can report the
//! text it choked on and a short description of what was expected.

use thiserror::Error;

use crate::lexer::{LexError, SourceError, Token};
use crate::parser::NumericLiteralError;

#[derive(Debug, Error)]
pub enum Error {
    /// Misuse of the character source, or a file that could not be read.
    #[error(transparent)]
    Source(#[from] SourceError),
    /// Malformed lexeme.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// A token of the wrong kind where an operand or operator was required.
    #[error("syntax error: expected {expected} (got '{lexeme}')")]
    Syntax {
        lexeme: String,
        expected: &'static str,
    },
    /// A well-formed literal whose value cannot be represented.
    #[error("invalid numeric literal '{lexeme}': {source}")]
    Literal {
        lexeme: String,
        source: NumericLiteralError,
    },
}

impl Error {
    pub(crate) fn syntax(token: &Token, expected: &'static str) -> Self {
        Self::Syntax {
            lexeme: token.text().to_owned(),
            expected,
        }
    }

    /// Text the error refers to; empty for source failures.
    #[must_use]
    pub fn lexeme(&self) -> &str {
        match self {
            Self::Source(_) => "",
            Self::Lex(e) => &e.lexeme,
            Self::Syntax { lexeme, .. } | Self::Literal { lexeme, .. } => lexeme,
        }
    }

    /// Short description of what was expected or what went wrong.
    #[must_use]
    pub fn what(&self) -> &'static str {
        match self {
            Self::Source(_) => "source access",
            Self::Lex(e) => e.what,
            Self::Syntax { expected, .. } => *expected,
            Self::Literal { .. } => "numeric literal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenCode;

    #[test]
    fn syntax_error_uses_token_text() {
        let err = Error::syntax(&Token::new(TokenCode::EqEq, ""), "operand");
        assert_eq!(err.lexeme(), "==");
        assert_eq!(err.what(), "operand");
        assert_eq!(err.to_string(), "syntax error: expected operand (got '==')");
    }

    #[test]
    fn lex_error_passes_through() {
        let err = Error::from(LexError {
            lexeme: "0b2".into(),
            what: "binary number",
        });
        assert_eq!(err.lexeme(), "0b2");
        assert_eq!(err.what(), "binary number");
        assert_eq!(err.to_string(), "invalid binary number (got '0b2')");
    }
}
