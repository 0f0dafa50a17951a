//! Secret code representation
//!
//! A Code stores up to ten pairwise-distinct decimal digits along with a
//! bitmask of the digits it contains for fast membership checks.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Longest possible code: every decimal digit exactly once
pub const MAX_LENGTH: usize = 10;

/// An n-digit code with pairwise-distinct digits
///
/// Leading zeros are significant ("0049" is a 4-digit code). The type is
/// `Copy` and can only be built through validating constructors, so every
/// value upholds the distinct-digit invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code {
    digits: [u8; MAX_LENGTH],
    len: u8,
    mask: u16,
}

/// Check that `length` is a playable code length
///
/// # Errors
/// Returns `Error::UnsupportedLength` unless `1 <= length <= 10`.
pub fn validate_length(length: usize) -> Result<()> {
    if (1..=MAX_LENGTH).contains(&length) {
        Ok(())
    } else {
        Err(Error::UnsupportedLength(length))
    }
}

impl Code {
    /// Create a new Code from a digit string
    ///
    /// # Errors
    /// Returns an error if:
    /// - Length is 0 or more than 10 (`UnsupportedLength`)
    /// - A character is not an ASCII digit (`NonDigit`)
    /// - A digit appears twice (`RepeatedDigit`)
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::Code;
    ///
    /// let err = Code::new("0049").unwrap_err();
    /// assert_eq!(err.to_string(), "code repeats digit '0'");
    ///
    /// let code = Code::new("5049").unwrap();
    /// assert_eq!(code.to_string(), "5049");
    /// assert_eq!(code.length(), 4);
    /// ```
    pub fn new(text: &str) -> Result<Self> {
        let length = text.chars().count();
        validate_length(length)?;

        let mut digits = [0u8; MAX_LENGTH];
        let mut mask = 0u16;

        for (i, ch) in text.chars().enumerate() {
            let digit = ch.to_digit(10).ok_or(Error::NonDigit(ch))? as u8;
            let bit = 1u16 << digit;
            if mask & bit != 0 {
                return Err(Error::RepeatedDigit(ch));
            }
            mask |= bit;
            digits[i] = digit;
        }

        Ok(Self {
            digits,
            len: length as u8,
            mask,
        })
    }

    /// Create a Code that must have exactly `length` digits
    ///
    /// # Errors
    /// Returns `Error::InvalidCodeLength` on a length mismatch, otherwise the
    /// same errors as [`Code::new`].
    pub fn with_length(text: &str, length: usize) -> Result<Self> {
        validate_length(length)?;
        let actual = text.chars().count();
        if actual != length {
            return Err(Error::InvalidCodeLength {
                expected: length,
                actual,
            });
        }
        Self::new(text)
    }

    /// Build the zero-padded code for `value`, or `None` if a digit repeats
    ///
    /// `value` must be below `10^length`.
    #[must_use]
    pub fn from_number(value: u64, length: usize) -> Option<Self> {
        debug_assert!((1..=MAX_LENGTH).contains(&length));
        debug_assert!(value < 10u64.pow(length as u32));

        let mut digits = [0u8; MAX_LENGTH];
        let mut mask = 0u16;
        let mut rest = value;

        for slot in digits[..length].iter_mut().rev() {
            let digit = (rest % 10) as u8;
            let bit = 1u16 << digit;
            if mask & bit != 0 {
                return None;
            }
            mask |= bit;
            *slot = digit;
            rest /= 10;
        }

        Some(Self {
            digits,
            len: length as u8,
            mask,
        })
    }

    /// Number of digits in the code
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.len as usize
    }

    /// The digit values (0-9), most significant first
    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits[..self.len as usize]
    }

    /// Get the digit at a specific position
    ///
    /// # Panics
    /// Panics if `position >= 10`
    #[inline]
    #[must_use]
    pub const fn digit_at(&self, position: usize) -> u8 {
        self.digits[position]
    }

    /// Check if the code contains a specific digit
    #[inline]
    #[must_use]
    pub const fn has_digit(&self, digit: u8) -> bool {
        digit < 10 && self.mask & (1 << digit) != 0
    }

    /// Bitmask with bit `d` set for every digit `d` in the code
    #[inline]
    pub(crate) const fn mask(&self) -> u16 {
        self.mask
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &digit in self.digits() {
            write!(f, "{}", char::from(b'0' + digit))?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_creation_valid() {
        let code = Code::new("5049").unwrap();
        assert_eq!(code.to_string(), "5049");
        assert_eq!(code.digits(), &[5, 0, 4, 9]);
        assert_eq!(code.length(), 4);
    }

    #[test]
    fn code_leading_zero_preserved() {
        let code = Code::new("0123").unwrap();
        assert_eq!(code.to_string(), "0123");
        assert_eq!(code.digit_at(0), 0);
    }

    #[test]
    fn code_creation_invalid_length() {
        assert_eq!(Code::new(""), Err(Error::UnsupportedLength(0)));
        assert_eq!(
            Code::new("01234567890"),
            Err(Error::UnsupportedLength(11))
        );
    }

    #[test]
    fn code_creation_invalid_characters() {
        assert_eq!(Code::new("12a4"), Err(Error::NonDigit('a')));
        assert_eq!(Code::new("12 4"), Err(Error::NonDigit(' ')));
        assert_eq!(Code::new("12-4"), Err(Error::NonDigit('-')));
    }

    #[test]
    fn code_creation_repeated_digit() {
        assert_eq!(Code::new("1231"), Err(Error::RepeatedDigit('1')));
        assert_eq!(Code::new("0049"), Err(Error::RepeatedDigit('0')));
    }

    #[test]
    fn code_with_length_checks_width() {
        assert!(Code::with_length("5049", 4).is_ok());
        assert_eq!(
            Code::with_length("504", 4),
            Err(Error::InvalidCodeLength {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            Code::with_length("5049", 11),
            Err(Error::UnsupportedLength(11))
        );
    }

    #[test]
    fn code_from_number_pads_and_filters() {
        assert_eq!(Code::from_number(49, 4), None); // 0049 repeats 0
        assert_eq!(Code::from_number(123, 4).unwrap().to_string(), "0123");
        assert_eq!(Code::from_number(5049, 4), Code::new("5049").ok());
        assert_eq!(Code::from_number(7, 1).unwrap().to_string(), "7");
    }

    #[test]
    fn code_all_ten_digits() {
        let code = Code::new("9876543210").unwrap();
        assert_eq!(code.length(), 10);
        assert_eq!(code.mask(), 0b11_1111_1111);
    }

    #[test]
    fn code_has_digit() {
        let code = Code::new("5049").unwrap();
        assert!(code.has_digit(5));
        assert!(code.has_digit(0));
        assert!(!code.has_digit(1));
        assert!(!code.has_digit(12));
    }

    #[test]
    fn code_from_str_trims() {
        let code: Code = " 1234\n".parse().unwrap();
        assert_eq!(code, Code::new("1234").unwrap());
    }

    #[test]
    fn code_ordering_is_numeric() {
        let low = Code::new("0123").unwrap();
        let high = Code::new("1023").unwrap();
        assert!(low < high);
    }
}
