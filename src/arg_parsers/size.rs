//! The `--size` argument: exactly two positive integers.
//!
//! Accepted spellings are `(800, 600)`, `800,600` and `800x600`.
//! Whitespace is allowed around every token and nowhere else matters.

use std::ffi::OsStr;
use std::fmt::Display;
use std::str::{self, FromStr};

use crate::error::ResizeError;
use crate::rs_err;

#[cfg(test)]
use crate::utils::arbitrary;
#[cfg(test)]
use quickcheck::Arbitrary;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl TargetSize {
    pub fn new(width: u32, height: u32) -> Result<Self, ResizeError> {
        if width == 0 || height == 0 {
            return Err(rs_err!(
                Validation,
                "size must be positive, got {width}x{height}"
            ));
        }
        Ok(Self { width, height })
    }
}

#[cfg(test)]
impl Arbitrary for TargetSize {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self {
            width: arbitrary::positive_u32(g),
            height: arbitrary::positive_u32(g),
        }
    }
}

impl Display for TargetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.width, self.height)
    }
}

impl FromStr for TargetSize {
    type Err = ResizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(OsStr::new(s))
    }
}

impl TryFrom<&OsStr> for TargetSize {
    type Error = ResizeError;

    fn try_from(s: &OsStr) -> Result<Self, Self::Error> {
        let invalid_size_err = || {
            rs_err!(
                Validation,
                "invalid size `{}': expected two positive integers such as `(800, 600)' or `800x600'",
                s.to_string_lossy()
            )
        };

        if !s.is_ascii() {
            return Err(invalid_size_err());
        }

        let mut ascii = s.as_encoded_bytes().trim_ascii();
        let parenthesized = ascii.first() == Some(&b'(');
        if parenthesized {
            if ascii.len() < 2 || ascii.last() != Some(&b')') {
                return Err(invalid_size_err());
            }
            ascii = ascii[1..ascii.len() - 1].trim_ascii();
        }

        let width = read_dimension(&mut ascii).ok_or_else(invalid_size_err)?;
        ascii = ascii.trim_ascii();
        match ascii.first() {
            Some(b',') => {}
            // `800x600` reads naturally but `(800x600)` is not a tuple
            Some(b'x' | b'X') if !parenthesized => {}
            _ => return Err(invalid_size_err()),
        }
        ascii = ascii[1..].trim_ascii();
        let height = read_dimension(&mut ascii).ok_or_else(invalid_size_err)?;
        if !ascii.trim_ascii().is_empty() {
            return Err(invalid_size_err());
        }

        Self::new(width, height)
    }
}

/// Consumes leading decimal digits. Signs, decimal points and overflowing values yield `None`.
fn read_dimension(input: &mut &[u8]) -> Option<u32> {
    let count = input.iter().take_while(|b| b.is_ascii_digit()).count();
    if count == 0 {
        return None;
    }
    let (digits, remainder) = input.split_at(count);
    let value = str::from_utf8(digits).ok()?.parse::<u32>().ok()?;
    *input = remainder;
    Some(value)
}
