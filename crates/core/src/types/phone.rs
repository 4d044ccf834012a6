//! US phone number type and progressive input formatting.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input does not match the canonical `(XXX) XXX-XXXX` form.
    #[error("phone must look like (555) 123-4567")]
    Malformed,
}

/// A US phone number in canonical `(XXX) XXX-XXXX` form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Parse a `Phone` from its canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`PhoneError::Malformed`] unless the input is exactly
    /// `(XXX) XXX-XXXX` with digits in the `X` positions.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        let bytes = s.as_bytes();
        if bytes.len() != 14 {
            return Err(PhoneError::Malformed);
        }

        for (i, &b) in bytes.iter().enumerate() {
            let ok = match i {
                0 => b == b'(',
                4 => b == b')',
                5 => b == b' ',
                9 => b == b'-',
                _ => b.is_ascii_digit(),
            };
            if !ok {
                return Err(PhoneError::Malformed);
            }
        }

        Ok(Self(s.to_owned()))
    }

    /// Reformat raw input into the canonical pattern as the user types.
    ///
    /// Non-digits are stripped and at most ten digits are kept. Partial input
    /// yields partial formatting, mirroring what a `tel` field shows while
    /// being filled in:
    ///
    /// ```
    /// use brewhaven_core::Phone;
    ///
    /// assert_eq!(Phone::format_digits("55"), "55");
    /// assert_eq!(Phone::format_digits("5551"), "(555) 1");
    /// assert_eq!(Phone::format_digits("555-123-4567x89"), "(555) 123-4567");
    /// ```
    #[must_use]
    pub fn format_digits(input: &str) -> String {
        let digits: String = input.chars().filter(char::is_ascii_digit).take(10).collect();

        match digits.len() {
            0..=2 => digits,
            3..=5 => {
                let (area, rest) = digits.split_at(3);
                format!("({area}) {rest}")
            }
            _ => {
                let (area, rest) = digits.split_at(3);
                let (prefix, line) = rest.split_at(3);
                format!("({area}) {prefix}-{line}")
            }
        }
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
