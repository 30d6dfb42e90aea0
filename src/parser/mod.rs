//! Precedence-climbing expression parser.
//!
//! The [`Parser`] pulls tokens from its [`Lexer`] on demand and keeps at most
//! one token of lookahead. Comment tokens never reach the grammar. The
//! grammar itself lives in [`expression`].

use log::{debug, trace};

use crate::Error;
use crate::lexer::{Lexer, OwnedChars, Source, SourceError, SourceReader, Token, TokenCode};

pub mod ast;
mod expression;

pub use expression::numeric::{NumericLiteralError, parse_constant, parse_integer, parse_real};

use ast::Expr;

/// Parse `src` as a single complete expression.
///
/// # Errors
/// Returns the first lexical, syntactic or literal error encountered.
///
/// # Examples
///
/// ```rust
/// use sigmath::parse_expression;
///
/// let expr = parse_expression("8 - 3 - 2").map(|e| e.to_sexpr());
/// assert_eq!(expr.ok().as_deref(), Some("(- (- 8 3) 2)"));
/// ```
#[must_use = "discarding the Result will ignore parse errors"]
pub fn parse_expression(src: &str) -> Result<Expr, Error> {
    Parser::from_text(src).parse()
}

/// Recursive-descent parser over a token stream.
#[derive(Debug)]
pub struct Parser<S> {
    lexer: Lexer<S>,
    lookahead: Option<Token>,
}

impl<'a> Parser<SourceReader<std::str::Chars<'a>>> {
    #[must_use]
    pub fn from_text(text: &'a str) -> Self {
        Self::new(SourceReader::from_text(text))
    }
}

impl Parser<SourceReader<OwnedChars>> {
    /// Parse the contents of the file at `path`.
    ///
    /// # Errors
    /// Returns [`SourceError::Io`] when the file cannot be read.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, SourceError> {
        SourceReader::from_file(path).map(Self::new)
    }
}

impl<S: Source> Parser<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            lexer: Lexer::new(source),
            lookahead: None,
        }
    }

    /// Characters consumed from the source so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.lexer.source().position()
    }

    /// Look at the next significant token without consuming it.
    ///
    /// # Errors
    /// Returns the lexical error raised while recognising the token.
    pub fn peek(&mut self) -> Result<&Token, Error> {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => self.pull()?,
        };
        Ok(&*self.lookahead.insert(token))
    }

    /// Consume the next significant token.
    ///
    /// # Errors
    /// Returns the lexical error raised while recognising the token.
    pub fn next(&mut self) -> Result<Token, Error> {
        match self.lookahead.take() {
            Some(token) => Ok(token),
            None => self.pull(),
        }
    }

    fn pull(&mut self) -> Result<Token, Error> {
        loop {
            let token = self.lexer.next_token()?;
            trace!("token {:?} '{}'", token.code, token.lexeme);
            if token.code != TokenCode::Ignore {
                return Ok(token);
            }
        }
    }

    /// Parse one expression that must span the whole input.
    ///
    /// # Errors
    /// Returns the first error met; trailing tokens are a syntax error.
    pub fn parse(&mut self) -> Result<Expr, Error> {
        let result = self.parse_expression().and_then(|expr| {
            let token = self.next()?;
            if token.code == TokenCode::EndOfFile {
                Ok(expr)
            } else {
                Err(Error::syntax(&token, "end of input"))
            }
        });
        match &result {
            Ok(expr) => debug!("parsed expression of precedence {:?}", expr.precedence()),
            Err(e) => debug!("parse aborted: {e}"),
        }
        result
    }
}

#[cfg(test)]
mod tests;
