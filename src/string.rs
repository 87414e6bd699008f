//! Quoted strings, escape sequences and member names.

use crate::error::{Error, Result};
use crate::options::Json5Options;
use crate::scanner::Scanner;
use crate::unicode::{is_member_name_part, is_member_name_start};
use std::io;

const REPLACEMENT: char = '\u{FFFD}';

#[inline]
const fn is_high_surrogate(unit: u32) -> bool {
    matches!(unit, 0xD800..=0xDBFF)
}

#[inline]
const fn is_low_surrogate(unit: u32) -> bool {
    matches!(unit, 0xDC00..=0xDFFF)
}

/// Accumulates string content, pairing surrogate escapes as they arrive.
///
/// Rust strings cannot hold unpaired surrogates. When invalid surrogates are
/// allowed they decode to U+FFFD; otherwise they are an error naming both
/// code units involved.
struct Utf16Text<'a> {
    text: String,
    pending_high: Option<u32>,
    last_unit: u32,
    options: &'a Json5Options,
}

impl<'a> Utf16Text<'a> {
    fn new(options: &'a Json5Options) -> Self {
        Utf16Text {
            text: String::new(),
            pending_high: None,
            last_unit: 0,
            options,
        }
    }

    fn invalid_pair(first: u32, second: u32) -> String {
        format!("Invalid surrogate pair: U+{:04X} and U+{:04X}", first, second)
    }

    /// Resolves a dangling high surrogate that is not followed by a low one.
    fn flush(&mut self, next_unit: u32) -> std::result::Result<(), String> {
        if let Some(high) = self.pending_high.take() {
            if !self.options.allow_invalid_surrogates {
                return Err(Self::invalid_pair(high, next_unit));
            }
            self.text.push(REPLACEMENT);
        }
        Ok(())
    }

    fn push_char(&mut self, c: char) -> std::result::Result<(), String> {
        let mut units = [0u16; 2];
        let encoded = c.encode_utf16(&mut units);
        self.flush(u32::from(encoded[0]))?;
        self.text.push(c);
        self.last_unit = u32::from(encoded[encoded.len() - 1]);
        Ok(())
    }

    /// Appends one UTF-16 code unit produced by an escape sequence.
    fn push_unit(&mut self, unit: u32) -> std::result::Result<(), String> {
        if is_high_surrogate(unit) {
            self.flush(unit)?;
            self.pending_high = Some(unit);
            self.last_unit = unit;
            return Ok(());
        }
        if is_low_surrogate(unit) {
            if let Some(high) = self.pending_high.take() {
                let code = 0x10000 + ((high - 0xD800) << 10) + (unit - 0xDC00);
                self.text.push(char::from_u32(code).unwrap_or(REPLACEMENT));
                self.last_unit = unit;
                return Ok(());
            }
            if !self.options.allow_invalid_surrogates {
                return Err(Self::invalid_pair(self.last_unit, unit));
            }
            self.text.push(REPLACEMENT);
            self.last_unit = unit;
            return Ok(());
        }
        match char::from_u32(unit) {
            Some(c) => self.push_char(c),
            None => Err(format!("Invalid code point U+{:04X}", unit)),
        }
    }

    /// Appends a code point from a `\U` escape.
    fn push_code_point(&mut self, code: u32) -> std::result::Result<(), String> {
        if code <= 0xFFFF {
            return self.push_unit(code);
        }
        match char::from_u32(code) {
            Some(c) => self.push_char(c),
            None => Err(format!("Invalid code point U+{:08X}", code)),
        }
    }

    fn finish(mut self) -> std::result::Result<String, String> {
        self.flush(0)?;
        Ok(self.text)
    }
}

fn read_hex<I>(scanner: &mut Scanner<I>, count: usize) -> Result<u32>
where
    I: Iterator<Item = io::Result<char>>,
{
    let mut value = 0u32;
    for _ in 0..count {
        let c = scanner.expect("hexadecimal digit")?;
        let digit = c
            .to_digit(16)
            .ok_or_else(|| scanner.syntax_error(format!("Illegal hex digit '{}' in escape sequence", c)))?;
        value = (value << 4) | digit;
    }
    Ok(value)
}

/// Reads the body of a string whose opening `quote` was already consumed.
pub(crate) fn parse_string<I>(scanner: &mut Scanner<I>, quote: char, options: &Json5Options) -> Result<String>
where
    I: Iterator<Item = io::Result<char>>,
{
    let mut text = Utf16Text::new(options);
    loop {
        let c = scanner
            .next()?
            .ok_or_else(|| scanner.syntax_error("Unterminated string"))?;
        let pushed = match c {
            c if c == quote => break,
            '\n' | '\r' => return Err(scanner.syntax_error("Unescaped line terminator in string")),
            '\\' => parse_escape(scanner, &mut text)?,
            c => text.push_char(c),
        };
        pushed.map_err(|msg| scanner.syntax_error(msg))?;
    }
    text.finish().map_err(|msg| scanner.syntax_error(msg))
}

/// Handles the character after a backslash. The outer result carries grammar
/// errors, the inner one surrogate errors raised while appending.
fn parse_escape<I>(
    scanner: &mut Scanner<I>,
    text: &mut Utf16Text<'_>,
) -> Result<std::result::Result<(), String>>
where
    I: Iterator<Item = io::Result<char>>,
{
    let c = scanner
        .next()?
        .ok_or_else(|| scanner.syntax_error("Unterminated string"))?;
    let pushed = match c {
        'b' => text.push_char('\u{08}'),
        'f' => text.push_char('\u{0C}'),
        'n' => text.push_char('\n'),
        'r' => text.push_char('\r'),
        't' => text.push_char('\t'),
        'v' => text.push_char('\u{0B}'),
        '0' => {
            if let Some(d) = scanner.peek()?.filter(char::is_ascii_digit) {
                scanner.next()?;
                return Err(scanner.syntax_error(format!("Illegal escape sequence '\\0{}'", d)));
            }
            text.push_char('\0')
        }
        'x' => text.push_unit(read_hex(scanner, 2)?),
        'u' => text.push_unit(read_hex(scanner, 4)?),
        'U' => {
            if !text.options.allow_long_unicode_escapes {
                return Err(Error::configuration(
                    "Long unicode escape sequences are not allowed",
                    scanner.position(),
                ));
            }
            text.push_code_point(read_hex(scanner, 8)?)
        }
        '\r' => {
            if scanner.peek()? == Some('\n') {
                scanner.next()?;
            }
            Ok(())
        }
        '\n' | '\u{2028}' | '\u{2029}' => Ok(()),
        '1'..='9' => {
            return Err(scanner.syntax_error(format!("Illegal escape sequence '\\{}'", c)));
        }
        other => text.push_char(other),
    };
    Ok(pushed)
}

/// Reads an object key. `first` is the first clean character of the key,
/// already consumed.
pub(crate) fn parse_member_name<I>(
    scanner: &mut Scanner<I>,
    first: char,
    options: &Json5Options,
) -> Result<String>
where
    I: Iterator<Item = io::Result<char>>,
{
    if first == '"' || first == '\'' {
        return parse_string(scanner, first, options);
    }
    scanner.back();

    let mut name = String::new();
    while let Some(c) = scanner.next()? {
        let is_start = name.is_empty();
        if c == '\\' {
            let decoded = member_name_escape(scanner, options)?;
            let allowed = if is_start {
                is_member_name_start(decoded)
            } else {
                is_member_name_part(decoded)
            };
            if !allowed {
                return Err(scanner.syntax_error(format!(
                    "Illegal character U+{:04X} in member name escape",
                    u32::from(decoded)
                )));
            }
            name.push(decoded);
            continue;
        }
        if is_start && is_member_name_part(c) && !is_member_name_start(c) {
            return Err(scanner.syntax_error(format!("Illegal start of member name '{}'", c)));
        }
        if !is_member_name_part(c) {
            scanner.back();
            break;
        }
        name.push(c);
    }

    if name.is_empty() {
        return Err(scanner.syntax_error("Empty key"));
    }
    Ok(name)
}

fn member_name_escape<I>(scanner: &mut Scanner<I>, options: &Json5Options) -> Result<char>
where
    I: Iterator<Item = io::Result<char>>,
{
    let code = match scanner.expect("unicode escape")? {
        'u' => read_hex(scanner, 4)?,
        'U' => {
            if !options.allow_long_unicode_escapes {
                return Err(Error::configuration(
                    "Long unicode escape sequences are not allowed",
                    scanner.position(),
                ));
            }
            read_hex(scanner, 8)?
        }
        other => {
            return Err(scanner.syntax_error(format!(
                "Illegal escape sequence '\\{}' in member name",
                other
            )))
        }
    };
    char::from_u32(code).ok_or_else(|| {
        scanner.syntax_error(format!("Illegal character U+{:04X} in member name escape", code))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{CharSource, InfallibleChars};
    use std::str::Chars;

    fn scanner(text: &str) -> Scanner<InfallibleChars<Chars<'_>>> {
        Scanner::new(CharSource::from_chars(text.chars()))
    }

    fn string(body: &str, options: &Json5Options) -> Result<String> {
        let mut s = scanner(body);
        let quote = s.next().unwrap().unwrap();
        parse_string(&mut s, quote, options)
    }

    fn key(body: &str, options: &Json5Options) -> Result<String> {
        let mut s = scanner(body);
        let first = s.next_clean().unwrap().unwrap();
        parse_member_name(&mut s, first, options)
    }

    #[test]
    fn test_simple_escapes() {
        let options = Json5Options::default();
        assert_eq!(
            string(r#"'\'\"\\\b\f\n\r\t\v\0\x41é\q'"#, &options).unwrap(),
            "'\"\\\u{8}\u{c}\n\r\t\u{b}\0A\u{e9}q"
        );
    }

    #[test]
    fn test_nul_followed_by_digit() {
        let err = string(r#""\01""#, &Json5Options::default()).unwrap_err();
        assert!(err.to_string().starts_with("Illegal escape sequence '\\01'"));
        let err = string(r#""\7""#, &Json5Options::default()).unwrap_err();
        assert!(err.to_string().starts_with("Illegal escape sequence '\\7'"));
    }

    #[test]
    fn test_line_continuations() {
        let options = Json5Options::default();
        assert_eq!(string("'a\\\nb'", &options).unwrap(), "ab");
        assert_eq!(string("'a\\\r\nb'", &options).unwrap(), "ab");
        assert_eq!(string("'a\\\rb'", &options).unwrap(), "ab");
        assert_eq!(string("'a\\\u{2028}b'", &options).unwrap(), "ab");
    }

    #[test]
    fn test_raw_line_terminators() {
        let options = Json5Options::default();
        assert!(string("\"a\nb\"", &options).is_err());
        assert!(string("\"a\rb\"", &options).is_err());
        assert_eq!(string("\"a\u{2028}b\"", &options).unwrap(), "a\u{2028}b");
    }

    #[test]
    fn test_unterminated() {
        let err = string("'abc", &Json5Options::default()).unwrap_err();
        assert!(err.to_string().starts_with("Unterminated string"));
    }

    #[test]
    fn test_surrogate_pairs() {
        let options = Json5Options::default();
        assert_eq!(string(r#"'🙂'"#, &options).unwrap(), "\u{1F642}");

        let long = Json5Options::default().with_long_unicode_escapes(true);
        assert_eq!(
            string(r#"'\U0001F642\U0001F41B'"#, &long).unwrap(),
            "\u{1F642}\u{1F41B}"
        );
        let err = string(r#"'\U0001F642'"#, &options).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_invalid_surrogates() {
        let lenient = Json5Options::default();
        assert_eq!(string(r#"'\uD800x'"#, &lenient).unwrap(), "\u{FFFD}x");
        assert_eq!(string(r#"'\uDC00'"#, &lenient).unwrap(), "\u{FFFD}");

        let strict = Json5Options::default().with_invalid_surrogates(false);
        let err = string(r#"'\uD800x'"#, &strict).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Invalid surrogate pair: U+D800 and U+0078"));
        let err = string(r#"'a\uDC00'"#, &strict).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Invalid surrogate pair: U+0061 and U+DC00"));
        let err = string(r#"'\uD800'"#, &strict).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Invalid surrogate pair: U+D800 and U+0000"));
    }

    #[test]
    fn test_bad_hex_escape() {
        let err = string(r#"'\x4g'"#, &Json5Options::default()).unwrap_err();
        assert!(err.to_string().starts_with("Illegal hex digit 'g'"));
    }

    #[test]
    fn test_member_names() {
        let options = Json5Options::default();
        assert_eq!(
            key("$Lorem\\u0041_Ipsum123指事字:", &options).unwrap(),
            "$LoremA_Ipsum123指事字"
        );
        assert_eq!(key("'quoted key':", &options).unwrap(), "quoted key");
        assert_eq!(key("a\u{200D}b :", &options).unwrap(), "a\u{200D}b");
    }

    #[test]
    fn test_member_name_errors() {
        let options = Json5Options::default();
        assert!(key("1abc:", &options).is_err());
        assert!(key(":", &options)
            .unwrap_err()
            .to_string()
            .starts_with("Empty key"));
        assert!(key("a\\u002Db:", &options).is_err());
        assert!(key("a\\x41:", &options).is_err());
        assert!(key("\\u0031a:", &options).is_err());
    }
}
