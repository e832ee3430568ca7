use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1} and {2}")]
    Overflow(&'static str, Money, Money),

    #[error("Underflow error while applying {0} operation on {1} and {2}")]
    Underflow(&'static str, Money, Money),

    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Fixed-point monetary value with four implied decimal places
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(pub i64);

impl Money {
    pub const SCALE: i64 = 10_000;

    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);

    pub const fn from_whole(units: i64) -> Self {
        return Self(units * Self::SCALE);
    }

    /// Parses a plain decimal string such as `100`, `-2.5` or `.75`.
    /// Digits past the fourth decimal place are truncated.
    pub fn parse(string: &str) -> Result<Self, MoneyError> {
        let trimmed = string.trim();

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let mut parts = unsigned.split('.');

        let whole = parts.next().unwrap_or_default();
        let fraction = parts.next().unwrap_or_default();

        if parts.next().is_some() {
            Err(MoneyError::Parse("Too many decimal points", string.to_string()))?
        }

        if whole.is_empty() && fraction.is_empty() {
            Err(MoneyError::Parse("No digits found", string.to_string()))?
        }

        let is_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());

        if !is_digits(whole) || !is_digits(fraction) {
            Err(MoneyError::Parse("Invalid character", string.to_string()))?
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| MoneyError::Parse("Value out of range", string.to_string()))?
        };

        let fraction: i64 = format!("{:0<4}", fraction)[..4]
            .parse()
            .map_err(|_| MoneyError::Parse("Invalid fraction", string.to_string()))?;

        let value = whole
            .checked_mul(Self::SCALE)
            .and_then(|value| value.checked_add(fraction))
            .ok_or_else(|| MoneyError::Parse("Value out of range", string.to_string()))?;

        if negative {
            return Ok(Self(-value));
        }

        return Ok(Self(value));
    }

    pub fn is_positive(&self) -> bool {
        return self.0 > 0;
    }

    pub fn checked_add(self, other: Self) -> Result<Self, MoneyError> {
        return match self.0.checked_add(other.0) {
            Some(value) => Ok(Self(value)),
            None if other.0 > 0 => Err(MoneyError::Overflow("add", self, other)),
            None => Err(MoneyError::Underflow("add", self, other)),
        };
    }

    pub fn checked_sub(self, other: Self) -> Result<Self, MoneyError> {
        return match self.0.checked_sub(other.0) {
            Some(value) => Ok(Self(value)),
            None if other.0 < 0 => Err(MoneyError::Overflow("sub", self, other)),
            None => Err(MoneyError::Underflow("sub", self, other)),
        };
    }
}

/// Displays with two decimal places, rounding half away from zero
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let half = Self::SCALE as i128 / 200;
        let value = self.0 as i128;

        let cents = if value < 0 {
            (value - half) / (Self::SCALE as i128 / 100)
        } else {
            (value + half) / (Self::SCALE as i128 / 100)
        };

        let sign = if cents < 0 { "-" } else { "" };
        let cents = cents.abs();

        return write!(f, "{sign}{}.{:02}", cents / 100, cents % 100);
    }
}
