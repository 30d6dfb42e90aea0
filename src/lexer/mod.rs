//! Hand-written lexical analysis.
//!
//! The [`Lexer`] recognises one token per call, pulling characters from its
//! [`Scanner`] on demand. Whitespace is skipped, comments are reported as
//! [`TokenCode::Ignore`], numeric literals follow their radix sub-grammars and
//! punctuators are recognised by maximal munch.

use log::warn;
use thiserror::Error;

use crate::Error;

pub mod charset;
pub mod scanner;
pub mod source;
pub mod token;

pub use charset::CharPattern;
pub use scanner::Scanner;
pub use source::{
    DEFAULT_BUFFER_CAPACITY, MIN_BUFFER_CAPACITY, OwnedChars, Source, SourceError, SourceReader,
};
pub use token::{Token, TokenCode, TokenKind};

/// A malformed lexeme.
///
/// `lexeme` holds whatever was accumulated when recognition failed, followed
/// by the offending character when there was one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {what} (got '{lexeme}')")]
pub struct LexError {
    pub lexeme: String,
    pub what: &'static str,
}

/// Radix letter rule: digit class, resulting code and error description.
fn radix_rule(letter: char) -> Option<(CharPattern, TokenCode, &'static str)> {
    match letter {
        'b' | 'B' => Some((charset::BINARY_DIGIT, TokenCode::BinInteger, "binary number")),
        'c' | 'C' => Some((charset::OCTAL_DIGIT, TokenCode::OctInteger, "octal number")),
        'd' | 'D' => Some((charset::DIGIT, TokenCode::DecInteger, "decimal number")),
        'x' | 'X' => Some((
            charset::HEX_DIGIT,
            TokenCode::HexInteger,
            "hexadecimal number",
        )),
        _ => None,
    }
}

/// Token recogniser over a [`Source`].
#[derive(Debug)]
pub struct Lexer<S> {
    scanner: Scanner<S>,
}

impl<'a> Lexer<SourceReader<std::str::Chars<'a>>> {
    #[must_use]
    pub fn from_text(text: &'a str) -> Self {
        Self::new(SourceReader::from_text(text))
    }
}

impl Lexer<SourceReader<OwnedChars>> {
    /// Lex the contents of the file at `path`.
    ///
    /// # Errors
    /// Returns [`SourceError::Io`] when the file cannot be read.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, SourceError> {
        SourceReader::from_file(path).map(Self::new)
    }
}

impl<S: Source> Lexer<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            scanner: Scanner::new(source),
        }
    }

    #[must_use]
    pub fn source(&self) -> &S {
        self.scanner.source()
    }

    /// Lexeme recorded for the most recent token.
    #[must_use]
    pub fn lexeme(&self) -> &str {
        self.scanner.lexeme()
    }

    /// Recognise the next token, starting `offset` characters ahead.
    ///
    /// Characters in front of `offset` are discarded. Leading whitespace is
    /// skipped and the lexeme is cleared before recognition begins.
    ///
    /// # Errors
    /// Returns [`Error::Lex`] for malformed literals and unterminated comments
    /// and [`Error::Source`] when `offset` is outside the lookahead window.
    pub fn lex(&mut self, offset: usize) -> Result<TokenCode, Error> {
        if offset > 0 {
            warn!("lexing at offset {offset} drops the characters in front of it");
            self.scanner.skip(offset)?;
        }
        self.scanner.pass(charset::WHITESPACE, 0)?;
        self.scanner.clear_lexeme();

        match self.scanner.peek(0)? {
            None => Ok(TokenCode::EndOfFile),
            Some(c) if charset::is_digit(c) => self.lex_number(),
            Some(c) if charset::is_punctuator_start(c) => self.lex_punctuator(c),
            Some(_) => {
                self.scanner.consume(0)?;
                Ok(TokenCode::Unknown)
            }
        }
    }

    /// Recognise the next token and pair it with its lexeme.
    ///
    /// # Errors
    /// See [`Lexer::lex`].
    pub fn next_token(&mut self) -> Result<Token, Error> {
        let code = self.lex(0)?;
        Ok(Token::new(code, self.scanner.lexeme()))
    }

    /// Build the error for a failed rule, appending the offending character.
    fn invalid(&mut self, what: &'static str) -> Error {
        let mut lexeme = self.scanner.lexeme().to_owned();
        if let Ok(Some(c)) = self.scanner.peek(0) {
            lexeme.push(c);
        }
        Error::Lex(LexError { lexeme, what })
    }

    fn lex_number(&mut self) -> Result<TokenCode, Error> {
        if self.scanner.matches('0', 0)? {
            if let Some((digits, code, what)) = self.scanner.peek(1)?.and_then(radix_rule) {
                return self.lex_radix_integer(digits, code, what);
            }
            // Leading zeros collapse; a run of nothing but zeros keeps one.
            self.scanner.pass('0', 0)?;
            if !self.scanner.scan(charset::DIGIT, 0)? {
                self.scanner.append('0');
            }
        } else if !self.scanner.scan(charset::DIGIT, 0)? {
            return Err(self.invalid("number"));
        }

        if self.scanner.scan_once('.', 0)? {
            self.lex_fraction()
        } else {
            Ok(TokenCode::Integer)
        }
    }

    // Positioned on the leading `0` of a radix-prefixed literal.
    fn lex_radix_integer(
        &mut self,
        digits: CharPattern,
        code: TokenCode,
        what: &'static str,
    ) -> Result<TokenCode, Error> {
        self.scanner.skip(1)?;
        let letter = self.scanner.peek(0)?.unwrap_or_default();
        let lower = letter.to_ascii_lowercase();
        if self.scanner.pass_radix_prefix(lower, digits, 0)? {
            return Ok(code);
        }
        self.scanner.clear_lexeme();
        self.scanner.append('0');
        self.scanner.append(letter);
        Err(self.invalid(what))
    }

    // Positioned just after the recorded `.`.
    fn lex_fraction(&mut self) -> Result<TokenCode, Error> {
        if !self.scanner.scan(charset::DIGIT, 0)? {
            return Err(self.invalid("number fractional part"));
        }
        match self.scanner.scan_exponent_suffix(charset::DIGIT, 0)? {
            None => Ok(TokenCode::Real),
            Some(true) => Ok(TokenCode::ExpReal),
            Some(false) => Err(self.invalid("number exponent")),
        }
    }

    /// Consume `c` if it is next.
    fn follow(&mut self, c: char) -> Result<bool, Error> {
        Ok(self.scanner.pass_once(c, 0)?)
    }

    /// Longest punctuator starting with `first`, or a comment.
    ///
    /// Every prefix of a spelling in the table is itself a spelling, so
    /// growing the candidate one character at a time finds the longest match
    /// without looking past the next character.
    fn lex_punctuator(&mut self, first: char) -> Result<TokenCode, Error> {
        self.scanner.skip(1)?;
        if first == '/' {
            if self.follow('/')? {
                return self.lex_line_comment();
            }
            if self.follow('*')? {
                return self.lex_block_comment();
            }
        }

        let mut spelling = String::from(first);
        let Some(mut code) = TokenCode::from_spelling(&spelling) else {
            self.scanner.append(first);
            return Err(self.invalid("punctuator"));
        };
        while let Some(c) = self.scanner.peek(0)? {
            spelling.push(c);
            let Some(longer) = TokenCode::from_spelling(&spelling) else {
                break;
            };
            self.scanner.skip(1)?;
            code = longer;
        }
        Ok(code)
    }

    // Stops in front of the newline.
    fn lex_line_comment(&mut self) -> Result<TokenCode, Error> {
        loop {
            match self.scanner.peek(0)? {
                None => {
                    self.scanner.append_str("//");
                    return Err(self.invalid("comment terminator"));
                }
                Some(c) if charset::is_end_line(c) => return Ok(TokenCode::Ignore),
                Some(_) => self.scanner.skip(1)?,
            }
        }
    }

    fn lex_block_comment(&mut self) -> Result<TokenCode, Error> {
        loop {
            match self.scanner.peek(0)? {
                None => {
                    self.scanner.append_str("/*");
                    return Err(self.invalid("comment terminator"));
                }
                Some('*') if self.scanner.matches('/', 1)? => {
                    self.scanner.skip(2)?;
                    return Ok(TokenCode::Ignore);
                }
                Some(_) => self.scanner.skip(1)?,
            }
        }
    }
}

fn tokenize_impl(src: &str, keep_trivia: bool) -> Result<Vec<Token>, Error> {
    let mut lexer = Lexer::from_text(src);
    let mut out = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token.code == TokenCode::EndOfFile;
        if keep_trivia || token.code != TokenCode::Ignore {
            out.push(token);
        }
        if done {
            return Ok(out);
        }
    }
}

/// Tokenise `src` up to and including [`TokenCode::EndOfFile`], keeping
/// comment tokens.
///
/// # Errors
/// Returns the first lexical error encountered.
///
/// # Examples
///
/// ```rust
/// use sigmath::lexer::{TokenCode, tokenize_with_trivia};
///
/// let codes: Vec<_> = tokenize_with_trivia("1 /* x */ + 2")
///     .map(|ts| ts.into_iter().map(|t| t.code).collect())
///     .unwrap_or_default();
/// assert_eq!(
///     codes,
///     [
///         TokenCode::Integer,
///         TokenCode::Ignore,
///         TokenCode::Plus,
///         TokenCode::Integer,
///         TokenCode::EndOfFile,
///     ]
/// );
/// ```
pub fn tokenize_with_trivia(src: &str) -> Result<Vec<Token>, Error> {
    tokenize_impl(src, true)
}

/// Tokenise `src`, dropping comments.
///
/// # Errors
/// Returns the first lexical error encountered.
pub fn tokenize_without_trivia(src: &str) -> Result<Vec<Token>, Error> {
    tokenize_impl(src, false)
}
