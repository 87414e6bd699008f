//! Lexical scanning: white space, comments and bare tokens.

use crate::error::{Error, Position, Result};
use crate::source::CharSource;
use crate::unicode::{is_line_terminator, is_whitespace};
use std::io;

pub(crate) struct Scanner<I> {
    source: CharSource<I>,
}

impl<I> Scanner<I>
where
    I: Iterator<Item = io::Result<char>>,
{
    pub(crate) fn new(source: CharSource<I>) -> Self {
        Scanner { source }
    }

    #[inline]
    pub(crate) fn next(&mut self) -> Result<Option<char>> {
        self.source.next()
    }

    #[inline]
    pub(crate) fn peek(&mut self) -> Result<Option<char>> {
        self.source.peek()
    }

    #[inline]
    pub(crate) fn back(&mut self) {
        self.source.back();
    }

    #[inline]
    pub(crate) fn position(&self) -> Position {
        self.source.position()
    }

    pub(crate) fn syntax_error<T: std::fmt::Display>(&self, msg: T) -> Error {
        Error::syntax(msg, self.position())
    }

    /// Like [`next`](Self::next) but end of input is an error.
    pub(crate) fn expect(&mut self, what: &str) -> Result<char> {
        self.next()?
            .ok_or_else(|| self.syntax_error(format!("Unexpected end of data, expected {}", what)))
    }

    /// Next character that is neither white space nor part of a comment.
    pub(crate) fn next_clean(&mut self) -> Result<Option<char>> {
        loop {
            match self.next()? {
                Some('/') => match self.peek()? {
                    Some('*') => {
                        self.next()?;
                        self.skip_block_comment()?;
                    }
                    Some('/') => {
                        self.next()?;
                        self.skip_line_comment()?;
                    }
                    _ => return Err(self.syntax_error("Illegal character '/'")),
                },
                Some(c) if is_whitespace(c) => {}
                other => return Ok(other),
            }
        }
    }

    /// Like [`next_clean`](Self::next_clean) but end of input is an error.
    pub(crate) fn expect_clean(&mut self) -> Result<char> {
        self.next_clean()?
            .ok_or_else(|| self.syntax_error("Unexpected end of data"))
    }

    fn skip_block_comment(&mut self) -> Result<()> {
        loop {
            match self.next()? {
                None => return Err(self.syntax_error("Unterminated multi-line comment")),
                Some('*') if self.peek()? == Some('/') => {
                    self.next()?;
                    return Ok(());
                }
                Some(_) => {}
            }
        }
    }

    fn skip_line_comment(&mut self) -> Result<()> {
        while let Some(c) = self.next()? {
            if is_line_terminator(c) {
                break;
            }
        }
        Ok(())
    }

    /// Reads a bare token up to, but not including, white space, a comment
    /// start, end of input or one of `delimiters`.
    pub(crate) fn next_clean_to(&mut self, delimiters: &str) -> Result<String> {
        let mut token = String::new();
        while let Some(c) = self.next()? {
            if delimiters.contains(c) || c == '/' || is_whitespace(c) {
                self.back();
                break;
            }
            token.push(c);
        }
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::InfallibleChars;
    use std::str::Chars;

    fn scanner(text: &str) -> Scanner<InfallibleChars<Chars<'_>>> {
        Scanner::new(CharSource::from_chars(text.chars()))
    }

    #[test]
    fn test_next_clean_skips_comments() {
        let mut s = scanner(" /* a\n * b */ // line\n\t\u{3000}x");
        assert_eq!(s.next_clean().unwrap(), Some('x'));
        assert_eq!(s.position().line, 3);
        assert_eq!(s.next_clean().unwrap(), None);
    }

    #[test]
    fn test_line_comment_at_eof() {
        let mut s = scanner("// nothing here");
        assert_eq!(s.next_clean().unwrap(), None);
    }

    #[test]
    fn test_lone_slash_is_error() {
        let err = scanner(" / x").next_clean().unwrap_err();
        assert!(err.to_string().starts_with("Illegal character '/'"));
    }

    #[test]
    fn test_unterminated_block_comment() {
        let err = scanner("/* open *").next_clean().unwrap_err();
        assert!(err.to_string().starts_with("Unterminated multi-line comment"));
    }

    #[test]
    fn test_next_clean_to_stops_and_pushes_back() {
        let mut s = scanner("true, false]");
        assert_eq!(s.next_clean_to(",]}").unwrap(), "true");
        assert_eq!(s.next().unwrap(), Some(','));
        assert_eq!(s.next_clean().unwrap(), Some('f'));
        s.back();
        assert_eq!(s.next_clean_to(",]}").unwrap(), "false");
        assert_eq!(s.next().unwrap(), Some(']'));
    }

    #[test]
    fn test_next_clean_to_stops_at_comment_and_eof() {
        let mut s = scanner("12/* c */");
        assert_eq!(s.next_clean_to(",]}").unwrap(), "12");
        assert_eq!(s.next_clean().unwrap(), None);

        let mut s = scanner("NaN");
        assert_eq!(s.next_clean_to(",]}").unwrap(), "NaN");
    }
}
