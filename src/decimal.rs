//! Arbitrary-precision decimal numbers.
//!
//! A [`Decimal`] is an unscaled [`BigInt`] coefficient together with a base-ten
//! scale, so `unscaled × 10^-scale`. The scale of a parsed literal is kept:
//! `1.50` has coefficient `150` and scale `2`, and prints back as `1.50`.
//!
//! ```rust
//! use serde_json5::Decimal;
//!
//! let price: Decimal = "1.50".parse().unwrap();
//! assert_eq!(price.scale(), 2);
//! assert_eq!(price.to_string(), "1.50");
//! assert_eq!(price, "1.5".parse().unwrap());
//! ```

use crate::error::{Error, Result};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

/// An exact decimal number with an explicit scale.
///
/// Equality and ordering are numeric, so `1.0 == 1.00` even though the two
/// print differently.
#[derive(Clone, Debug)]
pub struct Decimal {
    unscaled: BigInt,
    scale: i64,
}

fn ten_pow(exponent: u32) -> BigInt {
    BigInt::from(10u32).pow(exponent)
}

impl Decimal {
    /// Creates `unscaled × 10^-scale`.
    #[must_use]
    pub fn new(unscaled: BigInt, scale: i64) -> Self {
        Decimal { unscaled, scale }
    }

    #[must_use]
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    #[must_use]
    pub const fn scale(&self) -> i64 {
        self.scale
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.unscaled.is_negative()
    }

    /// Number of decimal digits in the coefficient.
    fn precision(&self) -> u64 {
        if self.unscaled.is_zero() {
            1
        } else {
            self.unscaled.magnitude().to_string().len() as u64
        }
    }

    /// Exponent of the most significant digit.
    fn adjusted_exponent(&self) -> i128 {
        self.precision() as i128 - 1 - self.scale as i128
    }

    /// Returns the value as an integer if it has no fractional part.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use num_bigint::BigInt;
    /// use serde_json5::Decimal;
    ///
    /// let whole: Decimal = "12.000".parse().unwrap();
    /// assert_eq!(whole.to_bigint(), Some(BigInt::from(12)));
    ///
    /// let fraction: Decimal = "12.5".parse().unwrap();
    /// assert_eq!(fraction.to_bigint(), None);
    /// ```
    #[must_use]
    pub fn to_bigint(&self) -> Option<BigInt> {
        if self.unscaled.is_zero() {
            return Some(BigInt::zero());
        }
        if self.scale <= 0 {
            let exponent = u32::try_from(self.scale.unsigned_abs()).ok()?;
            return Some(&self.unscaled * ten_pow(exponent));
        }
        if self.scale as u64 >= self.precision() {
            return None;
        }
        let divisor = ten_pow(self.scale as u32);
        if (&self.unscaled % &divisor).is_zero() {
            Some(&self.unscaled / &divisor)
        } else {
            None
        }
    }

    /// Like [`to_bigint`](Self::to_bigint), but gives up on values with
    /// `max_digits` or more integer digits before building them.
    #[must_use]
    pub fn to_bigint_within(&self, max_digits: u32) -> Option<BigInt> {
        if !self.unscaled.is_zero() && self.adjusted_exponent() >= i128::from(max_digits) {
            return None;
        }
        self.to_bigint()
    }

    /// Nearest `f64`. Magnitudes outside the `f64` range become infinite or zero.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        format!("{}e{}", self.unscaled, -(self.scale as i128))
            .parse()
            .unwrap_or(f64::NAN)
    }

    /// Converts a finite `f64` using its shortest round-trip representation.
    ///
    /// Whole numbers below `1e21` keep one fractional digit, so `2.0` stays
    /// distinguishable from the integer `2`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_json5::Decimal;
    ///
    /// assert_eq!(Decimal::from_f64(2.0).unwrap().to_string(), "2.0");
    /// assert_eq!(Decimal::from_f64(0.1).unwrap().to_string(), "0.1");
    /// assert!(Decimal::from_f64(f64::NAN).is_none());
    /// ```
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let decimal: Decimal = format!("{:e}", value).parse().ok()?;
        if decimal.scale < 1 && decimal.scale > -21 {
            Some(decimal.with_scale_at_least(1))
        } else {
            Some(decimal)
        }
    }

    /// Raises the scale to `min_scale` if it is lower, without changing the value.
    #[must_use]
    pub fn with_scale_at_least(self, min_scale: i64) -> Self {
        if self.scale >= min_scale {
            return self;
        }
        let grow = min_scale.abs_diff(self.scale);
        match u32::try_from(grow) {
            Ok(exponent) => Decimal {
                unscaled: self.unscaled * ten_pow(exponent),
                scale: min_scale,
            },
            Err(_) => self,
        }
    }

    /// Drops trailing zeros of the coefficient, never going below `min_scale`.
    #[must_use]
    pub fn strip_trailing_zeros(mut self, min_scale: i64) -> Self {
        if self.unscaled.is_zero() {
            return Decimal::new(BigInt::zero(), self.scale.min(min_scale));
        }
        let ten = BigInt::from(10u32);
        while self.scale > min_scale && (&self.unscaled % &ten).is_zero() {
            self.unscaled /= &ten;
            self.scale -= 1;
        }
        self
    }

    /// Compares two non-zero magnitudes sharing the same adjusted exponent.
    fn cmp_magnitude_aligned(&self, other: &Self) -> Ordering {
        let diff = self.scale as i128 - other.scale as i128;
        let exponent = u32::try_from(diff.unsigned_abs()).unwrap_or(u32::MAX);
        let (left, right) = (self.unscaled.magnitude(), other.unscaled.magnitude());
        let factor = BigUint::from(10u32).pow(exponent);
        match diff.cmp(&0) {
            Ordering::Equal => left.cmp(right),
            Ordering::Greater => left.cmp(&(right * factor)),
            Ordering::Less => (left * factor).cmp(right),
        }
    }
}

impl From<BigInt> for Decimal {
    fn from(value: BigInt) -> Self {
        Decimal::new(value, 0)
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Decimal::new(BigInt::from(value), 0)
    }
}

impl Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        Decimal::new(-self.unscaled, self.scale)
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let (left, right) = (self.unscaled.sign(), other.unscaled.sign());
        if left != right {
            return left.cmp(&right);
        }
        if left == Sign::NoSign {
            return Ordering::Equal;
        }
        let magnitude = match self.adjusted_exponent().cmp(&other.adjusted_exponent()) {
            Ordering::Equal => self.cmp_magnitude_aligned(other),
            unequal => unequal,
        };
        if left == Sign::Minus {
            magnitude.reverse()
        } else {
            magnitude
        }
    }
}

/// Plain notation while the scale is positive and the value is not too
/// small, otherwise one leading digit and an `E` exponent (`1.5E-7`, `4E+3`).
///
/// A scale of zero is written with an exponent too (`5E+0`), so the text
/// never reads back as an integer.
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unscaled.is_negative() {
            f.write_str("-")?;
        }
        let digits = self.unscaled.magnitude().to_string();
        let adjusted = self.adjusted_exponent();

        if self.scale > 0 && adjusted >= -6 {
            let scale = self.scale as usize;
            if digits.len() > scale {
                let (int, frac) = digits.split_at(digits.len() - scale);
                return write!(f, "{}.{}", int, frac);
            }
            return write!(f, "0.{}{}", "0".repeat(scale - digits.len()), digits);
        }

        let (first, rest) = digits.split_at(1);
        f.write_str(first)?;
        if !rest.is_empty() {
            write!(f, ".{}", rest)?;
        }
        if adjusted >= 0 {
            write!(f, "E+{}", adjusted)
        } else {
            write!(f, "E{}", adjusted)
        }
    }
}

/// Parses `[+-]digits[.digits][(e|E)[+-]digits]`; at least one mantissa digit
/// is required.
impl FromStr for Decimal {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let invalid = || Error::custom(format!("invalid decimal literal '{}'", text));

        let (negative, body) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        let (mantissa, exponent) = match body.find(|c| c == 'e' || c == 'E') {
            Some(at) => (&body[..at], Some(&body[at + 1..])),
            None => (body, None),
        };
        let (int, frac) = match mantissa.find('.') {
            Some(at) => (&mantissa[..at], &mantissa[at + 1..]),
            None => (mantissa, ""),
        };
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if int.len() + frac.len() == 0 || !all_digits(int) || !all_digits(frac) {
            return Err(invalid());
        }
        let exponent: i64 = match exponent {
            Some(e) => e.parse().map_err(|_| invalid())?,
            None => 0,
        };

        let unscaled: BigInt = format!("{}{}", int, frac)
            .parse()
            .map_err(|_| invalid())?;
        let scale = (frac.len() as i64)
            .checked_sub(exponent)
            .ok_or_else(invalid)?;
        let unscaled = if negative { -unscaled } else { unscaled };
        Ok(Decimal::new(unscaled, scale))
    }
}
