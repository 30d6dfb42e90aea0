//! Character-level matching primitives over a [`Source`].
//!
//! Every lexical rule is written in terms of three idioms:
//!
//! - [`Scanner::matches`] looks ahead without consuming anything;
//! - [`Scanner::scan`] consumes a run of matching characters and records them
//!   in the lexeme;
//! - [`Scanner::pass`] consumes a run of matching characters without
//!   recording them.
//!
//! A non-zero `offset` makes the primitive look `offset` characters ahead;
//! when it consumes, the characters in front of `offset` are dropped.

use super::charset::{self, CharPattern};
use super::source::{Source, SourceError};

/// Owns a [`Source`] and the lexeme accumulated for the current token.
#[derive(Debug)]
pub struct Scanner<S> {
    source: S,
    lexeme: String,
}

impl<S: Source> Scanner<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            lexeme: String::new(),
        }
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Text recorded for the token being recognised.
    #[must_use]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn clear_lexeme(&mut self) {
        self.lexeme.clear();
    }

    pub fn append(&mut self, c: char) {
        self.lexeme.push(c);
    }

    pub fn append_str(&mut self, s: &str) {
        self.lexeme.push_str(s);
    }

    /// Look at the character `offset` positions ahead.
    ///
    /// # Errors
    /// Propagates [`SourceError`] for offsets outside the lookahead window.
    pub fn peek(&mut self, offset: usize) -> Result<Option<char>, SourceError> {
        self.source.peek(offset)
    }

    /// Read the character at `offset` into the lexeme.
    ///
    /// # Errors
    /// Propagates [`SourceError`] for offsets outside the lookahead window.
    pub fn consume(&mut self, offset: usize) -> Result<(), SourceError> {
        if let Some(c) = self.source.read(offset)? {
            self.lexeme.push(c);
        }
        Ok(())
    }

    /// Drop `count` characters without recording them.
    ///
    /// # Errors
    /// Propagates [`SourceError`] when `count` overruns the window or stream.
    pub fn skip(&mut self, count: usize) -> Result<(), SourceError> {
        self.source.skip(count)
    }

    /// Test the character at `offset` against `pattern`.
    ///
    /// # Errors
    /// Propagates [`SourceError`] for offsets outside the lookahead window.
    pub fn matches(
        &mut self,
        pattern: impl Into<CharPattern>,
        offset: usize,
    ) -> Result<bool, SourceError> {
        let c = self.source.peek(offset)?;
        Ok(pattern.into().matches(c))
    }

    /// Consume and record a run of characters matching `pattern`.
    ///
    /// Returns whether anything matched.
    ///
    /// # Errors
    /// Propagates [`SourceError`] for offsets outside the lookahead window.
    pub fn scan(
        &mut self,
        pattern: impl Into<CharPattern>,
        offset: usize,
    ) -> Result<bool, SourceError> {
        self.take_run(pattern.into(), offset, false, true)
    }

    /// Like [`Scanner::scan`], but takes at most one character.
    ///
    /// # Errors
    /// Propagates [`SourceError`] for offsets outside the lookahead window.
    pub fn scan_once(
        &mut self,
        pattern: impl Into<CharPattern>,
        offset: usize,
    ) -> Result<bool, SourceError> {
        self.take_run(pattern.into(), offset, true, true)
    }

    /// Consume a run of characters matching `pattern` without recording them.
    ///
    /// # Errors
    /// Propagates [`SourceError`] for offsets outside the lookahead window.
    pub fn pass(
        &mut self,
        pattern: impl Into<CharPattern>,
        offset: usize,
    ) -> Result<bool, SourceError> {
        self.take_run(pattern.into(), offset, false, false)
    }

    /// Like [`Scanner::pass`], but takes at most one character.
    ///
    /// # Errors
    /// Propagates [`SourceError`] for offsets outside the lookahead window.
    pub fn pass_once(
        &mut self,
        pattern: impl Into<CharPattern>,
        offset: usize,
    ) -> Result<bool, SourceError> {
        self.take_run(pattern.into(), offset, true, false)
    }

    // The run is taken one character at a time at offset 0 so that runs
    // longer than the lookahead window never need a far peek.
    fn take_run(
        &mut self,
        pattern: CharPattern,
        offset: usize,
        once: bool,
        record: bool,
    ) -> Result<bool, SourceError> {
        if !self.matches(pattern, offset)? {
            return Ok(false);
        }
        if offset > 0 {
            self.source.skip(offset)?;
        }
        loop {
            match self.source.read(0)? {
                Some(c) if record => self.lexeme.push(c),
                _ => {}
            }
            if once || !self.matches(pattern, 0)? {
                break;
            }
        }
        Ok(true)
    }

    /// Pass a radix letter (either case of `lower`) and scan the digits that
    /// follow it.
    ///
    /// Returns `false` when the letter is missing or no digit follows it. The
    /// letter is consumed in the second case.
    ///
    /// # Errors
    /// Propagates [`SourceError`] for offsets outside the lookahead window.
    pub fn pass_radix_prefix(
        &mut self,
        lower: char,
        digits: CharPattern,
        offset: usize,
    ) -> Result<bool, SourceError> {
        let upper = lower.to_ascii_uppercase();
        let letter = if self.matches(lower, offset)? {
            lower
        } else {
            upper
        };
        if !self.pass_once(letter, offset)? {
            return Ok(false);
        }
        self.scan(digits, 0)
    }

    /// Scan an exponent suffix: marker, optional sign, then `digits`.
    ///
    /// Returns `Ok(None)` when no exponent marker is present and
    /// `Ok(Some(false))` when the marker is not followed by digits.
    ///
    /// # Errors
    /// Propagates [`SourceError`] for offsets outside the lookahead window.
    pub fn scan_exponent_suffix(
        &mut self,
        digits: CharPattern,
        offset: usize,
    ) -> Result<Option<bool>, SourceError> {
        if !self.scan_once(charset::EXPONENT, offset)? {
            return Ok(None);
        }
        self.scan_once(charset::SIGN, 0)?;
        self.scan(digits, 0).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::SourceReader;

    fn scanner(text: &str) -> Scanner<SourceReader<std::str::Chars<'_>>> {
        Scanner::new(SourceReader::from_text(text))
    }

    #[test]
    fn matches_is_pure_lookahead() {
        let mut sc = scanner("12");
        assert!(matches!(sc.matches(charset::DIGIT, 1), Ok(true)));
        assert!(matches!(sc.matches('1', 0), Ok(true)));
        assert_eq!(sc.source().position(), 0);
        assert_eq!(sc.lexeme(), "");
    }

    #[test]
    fn scan_records_greedy_run() {
        let mut sc = scanner("1234+");
        assert!(matches!(sc.scan(charset::DIGIT, 0), Ok(true)));
        assert_eq!(sc.lexeme(), "1234");
        assert!(matches!(sc.peek(0), Ok(Some('+'))));
    }

    #[test]
    fn scan_reports_no_match_without_consuming() {
        let mut sc = scanner("x1");
        assert!(matches!(sc.scan(charset::DIGIT, 0), Ok(false)));
        assert_eq!(sc.source().position(), 0);
    }

    #[test]
    fn pass_consumes_without_recording() {
        let mut sc = scanner("000");
        assert!(matches!(sc.pass('0', 0), Ok(true)));
        assert_eq!(sc.lexeme(), "");
        assert!(matches!(sc.peek(0), Ok(None)));
    }

    #[test]
    fn scan_at_offset_drops_gap() {
        let mut sc = scanner("ab12c");
        assert!(matches!(sc.scan(charset::DIGIT, 2), Ok(true)));
        assert_eq!(sc.lexeme(), "12");
        assert_eq!(sc.source().position(), 4);
    }

    #[test]
    fn scan_run_longer_than_window() {
        let digits = "7".repeat(50);
        let mut sc = Scanner::new(SourceReader::with_capacity(digits.chars(), 4));
        assert!(matches!(sc.scan(charset::DIGIT, 0), Ok(true)));
        assert_eq!(sc.lexeme(), digits);
    }

    #[test]
    fn radix_prefix_accepts_either_case() {
        let mut sc = scanner("X1f");
        assert!(matches!(
            sc.pass_radix_prefix('x', charset::HEX_DIGIT, 0),
            Ok(true)
        ));
        assert_eq!(sc.lexeme(), "1f");
    }

    #[test]
    fn exponent_suffix_keeps_marker_and_sign() {
        let mut sc = scanner("e-12");
        assert!(matches!(
            sc.scan_exponent_suffix(charset::DIGIT, 0),
            Ok(Some(true))
        ));
        assert_eq!(sc.lexeme(), "e-12");
    }

    #[test]
    fn exponent_suffix_without_digits() {
        let mut sc = scanner("E+");
        assert!(matches!(
            sc.scan_exponent_suffix(charset::DIGIT, 0),
            Ok(Some(false))
        ));
        let mut sc = scanner("+");
        assert!(matches!(
            sc.scan_exponent_suffix(charset::DIGIT, 0),
            Ok(None)
        ));
    }
}
