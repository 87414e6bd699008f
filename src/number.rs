//! Numeric literal grammar.
//!
//! [`parse_unsigned`] turns a sign-stripped bare token into an exact
//! [`Number`]. Integers become [`BigInt`]s and fractional or exponent
//! literals become [`Decimal`]s; nothing here goes through `f64`.
//!
//! Accepted forms, the extensions being gated by [`Json5Options`]:
//!
//! | form | example | option |
//! |------|---------|--------|
//! | decimal integer | `42` | |
//! | decimal fraction / exponent | `.5`, `1.`, `6.02e23` | |
//! | hexadecimal | `0xCAFE` | |
//! | binary | `0b1010` | `allow_binary_literals` |
//! | octal | `0o755` | `allow_octal_literals` |
//! | hexadecimal floating point | `0xA.8p+1` | `allow_hex_floating_literals` |
//! | digit separators | `1_000`, `1'000` | `allow_java_digit_separators`, `allow_c_digit_separators` |

use crate::decimal::Decimal;
use crate::error::{Error, Position, Result};
use crate::options::Json5Options;
use crate::value::Number;
use num_bigint::BigInt;

/// Largest accepted binary exponent magnitude of a hexadecimal float.
pub(crate) const MAX_HEX_FLOAT_EXPONENT: i64 = 65_536;

struct Literal<'a> {
    chars: Vec<char>,
    pos: usize,
    start: Position,
    options: &'a Json5Options,
}

/// Parses an unsigned numeric token. `start` is the position of the token's
/// first character and is used to point errors at the offending character.
pub(crate) fn parse_unsigned(token: &str, start: Position, options: &Json5Options) -> Result<Number> {
    let mut literal = Literal {
        chars: token.chars().collect(),
        pos: 0,
        start,
        options,
    };
    literal.parse()
}

impl<'a> Literal<'a> {
    fn position_at(&self, offset: usize) -> Position {
        Position {
            index: self.start.index + offset as u64,
            character: self.start.character + offset as u64,
            line: self.start.line,
        }
    }

    fn syntax(&self, offset: usize, msg: &str) -> Error {
        Error::syntax(msg, self.position_at(offset))
    }

    fn disallowed(&self, offset: usize, msg: &str) -> Error {
        Error::configuration(msg, self.position_at(offset))
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn at(&self, offset: usize) -> Option<char> {
        self.chars.get(offset).copied()
    }

    fn parse(&mut self) -> Result<Number> {
        if self.at(0) == Some('0') {
            match self.at(1) {
                Some('b' | 'B') => {
                    if !self.options.allow_binary_literals {
                        return Err(self.disallowed(0, "Binary literals are not allowed"));
                    }
                    return self.radix_integer(2, "Expected binary digit for literal");
                }
                Some('o' | 'O') => {
                    if !self.options.allow_octal_literals {
                        return Err(self.disallowed(0, "Octal literals are not allowed"));
                    }
                    return self.radix_integer(8, "Expected octal digit for literal");
                }
                Some('x' | 'X') => return self.hexadecimal(),
                _ => {}
            }
        }
        self.decimal()
    }

    /// Reads a run of `radix` digits, dropping well-placed separators.
    fn digits(&mut self, radix: u32) -> Result<String> {
        let begin = self.pos;
        let mut out = String::new();
        while let Some(c) = self.peek() {
            if c.is_digit(radix) {
                out.push(c);
                self.pos += 1;
                continue;
            }
            if c != '_' && c != '\'' {
                break;
            }
            if !self.options.is_digit_separator(c) {
                let msg = if c == '_' {
                    "Java-style digit separators are not allowed"
                } else {
                    "C-style digit separators are not allowed"
                };
                return Err(self.disallowed(self.pos, msg));
            }
            let after_digit = self.pos > begin
                && self.at(self.pos - 1).is_some_and(|p| p.is_digit(radix));
            let before_digit = self.at(self.pos + 1).is_some_and(|n| n.is_digit(radix));
            if !after_digit || !before_digit {
                return Err(self.syntax(self.pos, "Illegal position for digit separator"));
            }
            self.pos += 1;
        }
        Ok(out)
    }

    fn expect_end(&self, msg: &str) -> Result<()> {
        match self.peek() {
            None => Ok(()),
            Some(_) => Err(self.syntax(self.pos, msg)),
        }
    }

    fn radix_integer(&mut self, radix: u32, msg: &str) -> Result<Number> {
        self.pos = 2;
        let digits = self.digits(radix)?;
        if digits.is_empty() {
            return Err(self.syntax(self.pos, msg));
        }
        self.expect_end(msg)?;
        let value = BigInt::parse_bytes(digits.as_bytes(), radix)
            .ok_or_else(|| self.syntax(2, msg))?;
        Ok(Number::Integer(value))
    }

    fn hexadecimal(&mut self) -> Result<Number> {
        const MSG: &str = "Expected hexadecimal digit for literal";
        self.pos = 2;
        let int = self.digits(16)?;

        if !matches!(self.peek(), Some('.' | 'p' | 'P')) {
            if int.is_empty() {
                return Err(self.syntax(self.pos, MSG));
            }
            self.expect_end(MSG)?;
            let value = BigInt::parse_bytes(int.as_bytes(), 16).ok_or_else(|| self.syntax(2, MSG))?;
            return Ok(Number::Integer(value));
        }

        if !self.options.allow_hex_floating_literals {
            return Err(self.disallowed(
                self.pos,
                "Hexadecimal floating-point literals are not allowed",
            ));
        }
        let mut frac = String::new();
        if self.peek() == Some('.') {
            self.pos += 1;
            frac = self.digits(16)?;
        }
        if int.is_empty() && frac.is_empty() {
            return Err(self.syntax(self.pos, MSG));
        }
        if !matches!(self.peek(), Some('p' | 'P')) {
            return Err(self.syntax(
                self.pos,
                "Expected exponent for hexadecimal floating-point literal",
            ));
        }
        self.pos += 1;
        let exponent = self.exponent("Hexadecimal floating-point literal's exponent is too large")?;
        if exponent.abs() > MAX_HEX_FLOAT_EXPONENT {
            return Err(self.syntax(
                self.pos,
                "Hexadecimal floating-point literal's exponent is too large",
            ));
        }
        self.expect_end("Illegal character in hexadecimal floating-point literal")?;

        let mantissa = BigInt::parse_bytes(format!("{}{}", int, frac).as_bytes(), 16)
            .ok_or_else(|| self.syntax(2, MSG))?;
        Ok(Number::Decimal(hex_float_value(mantissa, exponent - 4 * frac.len() as i64)))
    }

    /// Reads `[+-]digits` after an exponent marker.
    fn exponent(&mut self, too_large: &str) -> Result<i64> {
        let negative = match self.peek() {
            Some('+') => {
                self.pos += 1;
                false
            }
            Some('-') => {
                self.pos += 1;
                true
            }
            _ => false,
        };
        let at = self.pos;
        let digits = self.digits(10)?;
        if digits.is_empty() {
            return Err(self.syntax(self.pos, "Expected digit sequence for exponent"));
        }
        let magnitude: i64 = digits.parse().map_err(|_| self.syntax(at, too_large))?;
        Ok(if negative { -magnitude } else { magnitude })
    }

    fn decimal(&mut self) -> Result<Number> {
        const TRAILING: &str = "Illegal character in numeric literal";
        let int = self.digits(10)?;
        if int.len() > 1 && int.starts_with('0') {
            return Err(self.syntax(0, "Leading zeros are not allowed"));
        }

        let mut frac = None;
        if self.peek() == Some('.') {
            self.pos += 1;
            frac = Some(self.digits(10)?);
        }
        let frac_digits = frac.as_deref().unwrap_or("");
        if int.is_empty() && frac_digits.is_empty() {
            return Err(self.syntax(self.pos, "Expected digit"));
        }

        let mut exponent = None;
        if matches!(self.peek(), Some('e' | 'E')) {
            self.pos += 1;
            exponent = Some(self.exponent("Exponent is too large")?);
        }
        self.expect_end(TRAILING)?;

        if frac.is_none() && exponent.is_none() {
            let value: BigInt = int.parse().map_err(|_| self.syntax(0, TRAILING))?;
            return Ok(Number::Integer(value));
        }

        let unscaled: BigInt = format!("{}{}", int, frac_digits)
            .parse()
            .map_err(|_| self.syntax(0, TRAILING))?;
        let scale = (frac_digits.len() as i64)
            .checked_sub(exponent.unwrap_or(0))
            .ok_or_else(|| self.syntax(self.pos, "Exponent is too large"))?;
        Ok(Number::Decimal(Decimal::new(unscaled, scale)))
    }
}

/// `mantissa × 2^exponent` as an exact decimal with at least one fractional
/// digit and no superfluous trailing zeros.
fn hex_float_value(mantissa: BigInt, exponent: i64) -> Decimal {
    let exact = if exponent >= 0 {
        Decimal::new(mantissa << exponent as usize, 0)
    } else {
        // 2^-k == 5^k / 10^k
        let k = exponent.unsigned_abs();
        let five_pow = BigInt::from(5u32).pow(k as u32);
        Decimal::new(mantissa * five_pow, k as i64)
    };
    exact.strip_trailing_zeros(1).with_scale_at_least(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(token: &str, options: &Json5Options) -> Result<Number> {
        parse_unsigned(token, Position::start(), options)
    }

    fn text(token: &str, options: &Json5Options) -> String {
        parse(token, options).unwrap().to_string()
    }

    #[test]
    fn test_decimal_integers() {
        let options = Json5Options::default();
        assert_eq!(text("0", &options), "0");
        assert_eq!(
            text("123456789012345678901234567890", &options),
            "123456789012345678901234567890"
        );
        assert!(parse("01", &options).is_err());
        assert!(parse("12345abc", &options).is_err());
    }

    #[test]
    fn test_decimal_fractions_keep_scale() {
        let options = Json5Options::default();
        assert_eq!(text("1.50", &options), "1.50");
        assert_eq!(text(".5", &options), "0.5");
        assert_eq!(text("1.", &options), "1E+0");
        assert_eq!(text("5e3", &options), "5E+3");
        assert_eq!(text("1.25E-2", &options), "0.0125");
        assert_eq!(text("2e+2", &options), "2E+2");
        assert!(parse(".", &options).is_err());
        assert!(parse("1e", &options).is_err());
        assert!(parse("1e+", &options).is_err());
        assert!(parse("1.2.3", &options).is_err());
    }

    #[test]
    fn test_hexadecimal() {
        let options = Json5Options::default();
        assert_eq!(text("0xCAFEBABE", &options), "3405691582");
        assert_eq!(text("0x12cafeBEEF", &options), "80715103983");
        assert!(parse("0x", &options).is_err());
        assert!(parse("0xabcdefg", &options).is_err());
    }

    #[test]
    fn test_binary_and_octal_are_gated() {
        let options = Json5Options::default();
        assert!(parse("0B10101010101", &options).unwrap_err().is_configuration());
        assert!(parse("0o1234567", &options).unwrap_err().is_configuration());

        let options = Json5Options::all_extensions();
        assert_eq!(text("0B10101010101", &options), "1365");
        assert_eq!(text("0o1234567", &options), "342391");
        assert!(parse("0b1010102", &options).is_err());
        assert!(parse("0o12345678", &options).is_err());
        assert!(parse("0o_123", &options).is_err());
    }

    #[test]
    fn test_hex_floats() {
        assert!(parse("0xA.8p+1", &Json5Options::default())
            .unwrap_err()
            .is_configuration());

        let options = Json5Options::all_extensions();
        assert_eq!(text("0xA.8p+1", &options), "21.0");
        assert_eq!(text("0x1p4", &options), "16.0");
        assert_eq!(text("0x1p-2", &options), "0.25");
        assert_eq!(text("0xAA.BBp+10", &options), "174828.0");
        assert!(parse("0x0.0e0", &options).is_err());
        assert!(parse("0x0.0", &options).is_err());
        assert!(parse("0x1p", &options).is_err());
        assert!(parse("0x1p99999999", &options).is_err());
    }

    #[test]
    fn test_digit_separators() {
        let options = Json5Options::default()
            .with_java_digit_separators(true)
            .with_c_digit_separators(true);
        assert_eq!(text("123_456'789", &options), "123456789");
        assert_eq!(text("1_2", &options), "12");
        assert_eq!(text("1_0.2_5e1_0", &options), "1.025E+11");
        for bad in ["1__2", "12_", "1._2", "1_.2", "0x_12", "1e_5"] {
            let err = parse(bad, &options).unwrap_err();
            assert!(err.is_syntax(), "{}", bad);
        }
    }

    #[test]
    fn test_separators_are_gated() {
        let err = parse("1_000", &Json5Options::default()).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().starts_with("Java-style"));
        let err = parse("1'000", &Json5Options::default()).unwrap_err();
        assert!(err.to_string().starts_with("C-style"));
    }

    #[test]
    fn test_error_points_at_offending_character() {
        let options = Json5Options::default().with_java_digit_separators(true);
        let err = parse("12_", &options).unwrap_err();
        let position = err.position().unwrap();
        assert_eq!(position.index, 2);
        assert_eq!(position.character, 2);
    }
}
