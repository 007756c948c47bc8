//! Validated barcode values.
//!
//! [`Barcode::parse`] is the single gate for raw input: nothing downstream
//! (conversion, normalization, lookup) ever sees an unvalidated code.

use std::fmt;

use serde::Serialize;

use super::kind::{CodeType, classify};

/// Shortest accepted code (EAN-8)
pub const MIN_LEN: usize = 8;
/// Longest accepted code (EAN-13 / ISBN-13)
pub const MAX_LEN: usize = 13;

/// Why a raw input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("barcode must have between 8 and 13 digits (got {0})")]
    TooShort(usize),

    #[error("barcode must have between 8 and 13 digits (got {0})")]
    TooLong(usize),

    #[error("barcode must contain only digits (found '{0}')")]
    NonDigit(char),
}

/// An immutable, validated barcode.
///
/// Every character is a decimal digit, except that a 10-character code may
/// end in `X` (ISBN-10 check digit).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Barcode(String);

impl Barcode {
    /// Validate raw scanner or keyboard input.
    ///
    /// Separators (spaces, hyphens, dots, ...) are stripped first. Letters are
    /// kept so they can be reported, apart from a trailing ISBN-10 `X`.
    pub fn parse(raw: &str) -> Result<Self, InputError> {
        let mut cleaned: String = raw.chars().filter(|c| c.is_alphanumeric()).collect();

        let len = cleaned.chars().count();
        if len == 10 && cleaned.ends_with('x') {
            cleaned.pop();
            cleaned.push('X');
        }

        if len < MIN_LEN {
            return Err(InputError::TooShort(len));
        }
        if len > MAX_LEN {
            return Err(InputError::TooLong(len));
        }

        let last = len - 1;
        if let Some((_, bad)) = cleaned
            .chars()
            .enumerate()
            .find(|&(i, c)| !(c.is_ascii_digit() || (c == 'X' && len == 10 && i == last)))
        {
            return Err(InputError::NonDigit(bad));
        }

        Ok(Self(cleaned))
    }

    /// Build from a string already known to satisfy the invariant.
    pub(crate) fn from_trusted(code: String) -> Self {
        debug_assert!(Self::parse(&code).is_ok(), "untrusted barcode {code}");
        Self(code)
    }

    /// The code as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Detected format.
    pub fn code_type(&self) -> CodeType {
        classify(&self.0)
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Barcode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
