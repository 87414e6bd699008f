//! Character sources with one character of lookahead and pushback.
//!
//! [`CharSource`] pulls characters from any iterator of `io::Result<char>`
//! and tracks the position of the last character read. [`Utf8Chars`]
//! adapts an [`io::Read`] into such an iterator.
//!
//! ```rust
//! use serde_json5::CharSource;
//!
//! let mut source = CharSource::from_chars("a\r\nb".chars());
//! assert_eq!(source.next().unwrap(), Some('a'));
//! assert_eq!(source.next().unwrap(), Some('\r'));
//! assert_eq!(source.next().unwrap(), Some('\n'));
//! assert_eq!(source.position().line, 2);
//! assert_eq!(source.next().unwrap(), Some('b'));
//! assert_eq!(source.position().character, 1);
//! ```

use crate::error::{Error, Position, Result};
use crate::unicode::is_line_terminator;
use std::io::{self, BufReader, Bytes, Read};
use std::iter::Map;

/// Iterator adapter used for sources that cannot fail.
pub type InfallibleChars<I> = Map<I, fn(char) -> io::Result<char>>;

/// A single-pass character stream owned by one parse.
pub struct CharSource<I> {
    chars: I,
    /// Character read from `chars` by `peek` but not yet delivered.
    lookahead: Option<char>,
    has_lookahead: bool,
    previous: Option<char>,
    back: bool,
    eof: bool,
    read: u64,
    position: Position,
    before_previous: Position,
    after_previous: Position,
}

impl<I> CharSource<I>
where
    I: Iterator<Item = io::Result<char>>,
{
    pub fn new(chars: I) -> Self {
        CharSource {
            chars,
            lookahead: None,
            has_lookahead: false,
            previous: None,
            back: false,
            eof: false,
            read: 0,
            position: Position::start(),
            before_previous: Position::start(),
            after_previous: Position::start(),
        }
    }

    /// Position of the most recently delivered character.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    fn pull(&mut self) -> Result<Option<char>> {
        if self.has_lookahead {
            self.has_lookahead = false;
            return Ok(self.lookahead.take());
        }
        if self.eof {
            return Ok(None);
        }
        match self.chars.next() {
            Some(Ok(c)) => Ok(Some(c)),
            Some(Err(err)) => Err(Error::io(err, self.position)),
            None => {
                self.eof = true;
                Ok(None)
            }
        }
    }

    /// Consumes and returns the next character, `None` at end of input.
    pub fn next(&mut self) -> Result<Option<char>> {
        if self.back {
            self.back = false;
            self.position = self.after_previous;
            return Ok(self.previous);
        }
        let c = self.pull()?;
        if let Some(c) = c {
            self.advance(c);
        }
        self.previous = c;
        Ok(c)
    }

    /// Returns the next character without consuming it.
    pub fn peek(&mut self) -> Result<Option<char>> {
        if self.back {
            return Ok(self.previous);
        }
        if !self.has_lookahead {
            let c = self.pull()?;
            self.lookahead = c;
            self.has_lookahead = true;
        }
        Ok(self.lookahead)
    }

    /// Pushes the last character back so the next call to [`next`](Self::next)
    /// returns it again. Only one character can be pushed back.
    pub fn back(&mut self) {
        if !self.back && self.previous.is_some() {
            self.back = true;
            self.after_previous = self.position;
            self.position = self.before_previous;
        }
    }

    /// Returns `true` if another character is available.
    pub fn more(&mut self) -> Result<bool> {
        Ok(self.peek()?.is_some())
    }

    fn advance(&mut self, c: char) {
        self.before_previous = self.position;
        self.position.index = self.read;
        self.read += 1;
        if c == '\n' && self.previous == Some('\r') {
            return;
        }
        if is_line_terminator(c) {
            self.position.line += 1;
            self.position.character = 0;
        } else {
            self.position.character += 1;
        }
    }
}

impl<J> CharSource<InfallibleChars<J>>
where
    J: Iterator<Item = char>,
{
    /// Reads from an in-memory character sequence.
    pub fn from_chars<T>(chars: T) -> Self
    where
        T: IntoIterator<IntoIter = J, Item = char>,
    {
        let ok: fn(char) -> io::Result<char> = Ok;
        CharSource::new(chars.into_iter().map(ok))
    }
}

impl<R: Read> CharSource<Utf8Chars<R>> {
    /// Reads UTF-8 text from a byte stream.
    pub fn from_reader(reader: R) -> Self {
        CharSource::new(Utf8Chars::new(reader))
    }
}

/// Decodes UTF-8 from a reader one character at a time.
///
/// Malformed or truncated sequences are reported as
/// [`io::ErrorKind::InvalidData`].
pub struct Utf8Chars<R> {
    bytes: Bytes<BufReader<R>>,
}

impl<R: Read> Utf8Chars<R> {
    pub fn new(reader: R) -> Self {
        Utf8Chars {
            bytes: BufReader::new(reader).bytes(),
        }
    }
}

fn invalid_utf8() -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        "stream did not contain valid UTF-8",
    )
}

impl<R: Read> Iterator for Utf8Chars<R> {
    type Item = io::Result<char>;

    fn next(&mut self) -> Option<io::Result<char>> {
        let first = match self.bytes.next()? {
            Ok(b) => b,
            Err(err) => return Some(Err(err)),
        };
        let width = match first {
            0x00..=0x7F => return Some(Ok(char::from(first))),
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return Some(Err(invalid_utf8())),
        };
        let mut buf = [first, 0, 0, 0];
        for slot in buf.iter_mut().take(width).skip(1) {
            *slot = match self.bytes.next() {
                Some(Ok(b)) => b,
                Some(Err(err)) => return Some(Err(err)),
                None => return Some(Err(invalid_utf8())),
            };
        }
        Some(
            std::str::from_utf8(&buf[..width])
                .ok()
                .and_then(|s| s.chars().next())
                .ok_or_else(invalid_utf8),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_does_not_consume() {
        let mut source = CharSource::from_chars("xy".chars());
        assert_eq!(source.peek().unwrap(), Some('x'));
        assert_eq!(source.peek().unwrap(), Some('x'));
        assert_eq!(source.next().unwrap(), Some('x'));
        assert_eq!(source.next().unwrap(), Some('y'));
        assert!(!source.more().unwrap());
        assert_eq!(source.next().unwrap(), None);
    }

    #[test]
    fn test_back_redelivers_once() {
        let mut source = CharSource::from_chars("ab".chars());
        assert_eq!(source.next().unwrap(), Some('a'));
        let after_a = source.position();
        source.back();
        source.back();
        assert_eq!(source.position(), Position::start());
        assert_eq!(source.peek().unwrap(), Some('a'));
        assert_eq!(source.next().unwrap(), Some('a'));
        assert_eq!(source.position(), after_a);
        assert_eq!(source.next().unwrap(), Some('b'));
    }

    #[test]
    fn test_back_after_peek() {
        let mut source = CharSource::from_chars("ab".chars());
        source.next().unwrap();
        assert_eq!(source.peek().unwrap(), Some('b'));
        source.back();
        assert_eq!(source.next().unwrap(), Some('a'));
        assert_eq!(source.next().unwrap(), Some('b'));
    }

    #[test]
    fn test_line_counting() {
        let mut source = CharSource::from_chars("a\nb\r\nc\rd\u{2028}e".chars());
        let mut last = Position::start();
        while source.next().unwrap().is_some() {
            last = source.position();
        }
        assert_eq!(last.line, 5);
        assert_eq!(last.character, 1);
        assert_eq!(last.index, 9);
    }

    #[test]
    fn test_crlf_is_one_terminator() {
        let mut source = CharSource::from_chars("\r\n".chars());
        source.next().unwrap();
        assert_eq!(source.position().line, 2);
        source.next().unwrap();
        assert_eq!(source.position().line, 2);
        assert_eq!(source.position().character, 0);
    }

    #[test]
    fn test_utf8_reader() {
        let bytes = "h\u{e9}\u{6307}\u{1F642}".as_bytes();
        let chars: Vec<char> = Utf8Chars::new(bytes).map(|c| c.unwrap()).collect();
        assert_eq!(chars, vec!['h', '\u{e9}', '\u{6307}', '\u{1F642}']);
    }

    #[test]
    fn test_utf8_reader_rejects_invalid() {
        let mut chars = Utf8Chars::new(&[0x61, 0xFF][..]);
        assert_eq!(chars.next().unwrap().unwrap(), 'a');
        assert!(chars.next().unwrap().is_err());

        let mut truncated = Utf8Chars::new(&[0xE6, 0x8C][..]);
        assert!(truncated.next().unwrap().is_err());
    }

    #[test]
    fn test_reader_error_is_syntax() {
        let mut source = CharSource::from_reader(&[0xC0, 0x80][..]);
        let err = source.next().unwrap_err();
        assert!(err.is_syntax());
    }
}
