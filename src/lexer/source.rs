//! Buffered character sources for the scanner.
//!
//! A [`Source`] hands out characters through a fixed-size lookahead window.
//! [`SourceReader`] implements it over any character iterator, refilling the
//! window from the underlying supply as characters are consumed. Offsets are
//! always relative to the current read position and must stay inside the
//! window; anything else is reported as a [`SourceError`] rather than being
//! clamped.

use std::collections::VecDeque;
use std::path::Path;
use std::str::Chars;

use thiserror::Error;

/// Lookahead window used by [`SourceReader::from_text`] and
/// [`SourceReader::from_file`].
pub const DEFAULT_BUFFER_CAPACITY: usize = 1024;

/// Smallest lookahead window a [`SourceReader`] accepts. The lexer peeks one
/// character past the current one.
pub const MIN_BUFFER_CAPACITY: usize = 2;

/// Misuse of a [`Source`] or failure to open its backing file.
#[derive(Debug, Error)]
pub enum SourceError {
    /// A lookahead offset fell outside the buffered window.
    #[error("offset {offset} is outside the lookahead window of {capacity} characters")]
    OffsetOutOfRange { offset: usize, capacity: usize },
    /// A skip asked for more characters than the stream still holds.
    #[error("cannot skip {count} characters: only {available} remain")]
    SkipPastEnd { count: usize, available: usize },
    /// The backing file could not be read.
    #[error("failed to read source: {0}")]
    Io(#[from] std::io::Error),
}

/// Abstract buffered character stream.
///
/// `None` is the end-of-stream sentinel; it never collides with a real
/// character.
pub trait Source {
    /// Size of the lookahead window.
    fn capacity(&self) -> usize;

    /// Number of characters consumed so far.
    fn position(&self) -> usize;

    /// Number of characters pulled from the underlying supply so far.
    fn len(&self) -> usize;

    /// Returns `true` when nothing has been pulled from the supply yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look at the character `offset` positions ahead without consuming it.
    ///
    /// # Errors
    /// Returns [`SourceError::OffsetOutOfRange`] when `offset` is not inside
    /// the lookahead window.
    fn peek(&mut self, offset: usize) -> Result<Option<char>, SourceError>;

    /// Return the character `offset` positions ahead and move past it.
    ///
    /// The characters in front of `offset` are dropped along with it. At the
    /// end of the stream nothing is consumed and `None` is returned.
    ///
    /// # Errors
    /// Returns [`SourceError::OffsetOutOfRange`] when `offset` is not inside
    /// the lookahead window.
    fn read(&mut self, offset: usize) -> Result<Option<char>, SourceError>;

    /// Advance the position by `count` characters.
    ///
    /// # Errors
    /// Returns [`SourceError::OffsetOutOfRange`] when `count` exceeds the
    /// window and [`SourceError::SkipPastEnd`] when fewer than `count`
    /// characters remain.
    fn skip(&mut self, count: usize) -> Result<(), SourceError>;
}

/// Sliding-window [`Source`] over a character iterator.
#[derive(Debug)]
pub struct SourceReader<I> {
    chars: I,
    window: VecDeque<char>,
    capacity: usize,
    position: usize,
    produced: usize,
}

impl<'a> SourceReader<Chars<'a>> {
    /// Wrap an in-memory string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sigmath::lexer::{Source, SourceReader};
    ///
    /// let mut src = SourceReader::from_text("ab");
    /// assert_eq!(src.peek(1).ok().flatten(), Some('b'));
    /// assert_eq!(src.read(0).ok().flatten(), Some('a'));
    /// assert_eq!(src.position(), 1);
    /// ```
    #[must_use]
    pub fn from_text(text: &'a str) -> Self {
        Self::with_capacity(text.chars(), DEFAULT_BUFFER_CAPACITY)
    }
}

impl SourceReader<OwnedChars> {
    /// Read a whole file and wrap its contents.
    ///
    /// The file handle is released before this returns.
    ///
    /// # Errors
    /// Returns [`SourceError::Io`] when the file cannot be read as UTF-8 text.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::with_capacity(
            OwnedChars::from(text),
            DEFAULT_BUFFER_CAPACITY,
        ))
    }
}

impl<I> SourceReader<I>
where
    I: Iterator<Item = char>,
{
    /// Wrap `chars` with a lookahead window of `capacity` characters.
    ///
    /// Capacities below [`MIN_BUFFER_CAPACITY`] are raised to it. `capacity`
    /// only bounds the lookahead; the window itself grows on demand.
    #[must_use]
    pub fn with_capacity(chars: I, capacity: usize) -> Self {
        let capacity = capacity.max(MIN_BUFFER_CAPACITY);
        Self {
            chars,
            window: VecDeque::with_capacity(capacity.min(DEFAULT_BUFFER_CAPACITY)),
            capacity,
            position: 0,
            produced: 0,
        }
    }

    fn check_offset(&self, offset: usize) -> Result<(), SourceError> {
        if offset < self.capacity {
            Ok(())
        } else {
            Err(SourceError::OffsetOutOfRange {
                offset,
                capacity: self.capacity,
            })
        }
    }

    /// Pull characters until the window holds at least `wanted` of them or
    /// the supply runs dry.
    fn fill(&mut self, wanted: usize) {
        while self.window.len() < wanted {
            let Some(c) = self.chars.next() else {
                break;
            };
            self.window.push_back(c);
            self.produced += 1;
        }
    }

    fn advance(&mut self, count: usize) {
        self.window.drain(..count);
        self.position += count;
    }
}

impl<I> Source for SourceReader<I>
where
    I: Iterator<Item = char>,
{
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn position(&self) -> usize {
        self.position
    }

    fn len(&self) -> usize {
        self.produced
    }

    fn peek(&mut self, offset: usize) -> Result<Option<char>, SourceError> {
        self.check_offset(offset)?;
        self.fill(offset + 1);
        Ok(self.window.get(offset).copied())
    }

    fn read(&mut self, offset: usize) -> Result<Option<char>, SourceError> {
        let c = self.peek(offset)?;
        if c.is_some() {
            self.advance(offset + 1);
        }
        Ok(c)
    }

    fn skip(&mut self, count: usize) -> Result<(), SourceError> {
        if count > self.capacity {
            return Err(SourceError::OffsetOutOfRange {
                offset: count,
                capacity: self.capacity,
            });
        }
        self.fill(count);
        let available = self.window.len();
        if available < count {
            return Err(SourceError::SkipPastEnd { count, available });
        }
        self.advance(count);
        Ok(())
    }
}

/// Character iterator that owns its text, used for file-backed sources.
#[derive(Debug, Clone)]
pub struct OwnedChars {
    text: String,
    offset: usize,
}

impl From<String> for OwnedChars {
    fn from(text: String) -> Self {
        Self { text, offset: 0 }
    }
}

impl Iterator for OwnedChars {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let c = self.text.get(self.offset..)?.chars().next()?;
        self.offset += c.len_utf8();
        Some(c)
    }
}
