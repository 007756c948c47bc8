//! Barcode format classification.

use std::fmt;

use serde::Serialize;

/// Barcode format, derived purely from length and prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CodeType {
    Ean8,
    UpcA,
    Ean13,
    Isbn10,
    Isbn13,
    /// Any other length (carried for diagnostic display)
    Unknown(usize),
}

impl CodeType {
    /// Whether this is one of the book identifier formats.
    pub fn is_isbn(self) -> bool {
        matches!(self, CodeType::Isbn10 | CodeType::Isbn13)
    }

    /// Human-readable format label.
    pub fn label(self) -> String {
        match self {
            CodeType::Ean8 => "EAN-8".to_string(),
            CodeType::UpcA => "UPC-A".to_string(),
            CodeType::Ean13 => "EAN-13".to_string(),
            CodeType::Isbn10 => "ISBN-10".to_string(),
            CodeType::Isbn13 => "ISBN-13".to_string(),
            CodeType::Unknown(len) => format!("{}-digit code", len),
        }
    }
}

impl fmt::Display for CodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Classify a code by its length (and, for 13 characters, its prefix).
///
/// Total over all inputs: lengths outside the table map to [`CodeType::Unknown`].
pub fn classify(code: &str) -> CodeType {
    match code.len() {
        8 => CodeType::Ean8,
        10 => CodeType::Isbn10,
        12 => CodeType::UpcA,
        13 if is_bookland(code) => CodeType::Isbn13,
        13 => CodeType::Ean13,
        len => CodeType::Unknown(len),
    }
}

/// `978`/`979` ("Bookland") prefix test.
pub(crate) fn is_bookland(code: &str) -> bool {
    code.starts_with("978") || code.starts_with("979")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// 13-digit codes are ISBN-13 exactly when they carry a Bookland prefix
        #[test]
        fn thirteen_digits_split_on_prefix(code in "[0-9]{13}") {
            let expected = if code.starts_with("978") || code.starts_with("979") {
                CodeType::Isbn13
            } else {
                CodeType::Ean13
            };
            prop_assert_eq!(classify(&code), expected);
        }

        /// Classification depends on length alone for the fixed-length formats
        #[test]
        fn fixed_lengths_follow_table(code in "[0-9]{8}|[0-9]{10}|[0-9]{12}") {
            let expected = match code.len() {
                8 => CodeType::Ean8,
                10 => CodeType::Isbn10,
                _ => CodeType::UpcA,
            };
            prop_assert_eq!(classify(&code), expected);
        }
    }
}
