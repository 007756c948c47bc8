//! Check digit computation shared by validation, conversion and generation.
//!
//! Two weighting schemes are supported:
//! - **EAN/UPC** (also used for ISBN-13): weight 1 at even positions, 3 at odd
//!   positions (0-based), check = (10 - sum mod 10) mod 10.
//! - **ISBN-10**: weight 10 down to 2 over the nine payload digits,
//!   check = (11 - sum mod 11) mod 11, where 10 is written as `X`.

/// Position weighting used when computing a check digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weighting {
    /// Alternating 1/3 weights (EAN-8, UPC-A, EAN-13, ISBN-13)
    Ean,
    /// Descending 10..2 weights over nine digits (ISBN-10)
    Isbn10,
}

/// Compute the check value for a payload of decimal digits (each 0-9).
///
/// Returns 0-9 for [`Weighting::Ean`] and 0-10 for [`Weighting::Isbn10`].
/// The caller guarantees the payload length; there is no error path.
pub fn compute_check_digit(digits: &[u8], weighting: Weighting) -> u8 {
    match weighting {
        Weighting::Ean => {
            let sum: u32 = digits
                .iter()
                .enumerate()
                .map(|(i, &d)| u32::from(d) * if i % 2 == 0 { 1 } else { 3 })
                .sum();
            ((10 - sum % 10) % 10) as u8
        }
        Weighting::Isbn10 => {
            let sum: u32 = digits
                .iter()
                .take(9)
                .enumerate()
                .map(|(i, &d)| u32::from(d) * (10 - i as u32))
                .sum();
            ((11 - sum % 11) % 11) as u8
        }
    }
}

/// Render a check value as the character that ends the code.
pub fn check_char(value: u8) -> char {
    if value == 10 {
        'X'
    } else {
        char::from(b'0' + value)
    }
}

/// Parse a string of ASCII digits into digit values.
///
/// Returns `None` if any character is not a decimal digit.
pub fn digits_of(code: &str) -> Option<Vec<u8>> {
    code.chars()
        .map(|c| c.to_digit(10).map(|d| d as u8))
        .collect()
}

/// Whether a full EAN-family code (payload + check digit) has a weighted sum
/// divisible by ten.
///
/// Weights are anchored at the check digit, so EAN-8 and UPC-A validate too.
pub fn has_valid_ean_checksum(code: &str) -> bool {
    let Some(digits) = digits_of(code) else {
        return false;
    };
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * if i % 2 == 0 { 1 } else { 3 })
        .sum();
    !digits.is_empty() && sum % 10 == 0
}


/// Property-based tests using proptest
#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Appending the computed digit to a 12-digit payload yields a code
        /// whose weighted sum is a multiple of ten
        #[test]
        fn appended_check_digit_validates(payload in prop::collection::vec(0u8..10, 12)) {
            let check = compute_check_digit(&payload, Weighting::Ean);
            prop_assert!(check <= 9);

            let code: String = payload
                .iter()
                .map(|&d| check_char(d))
                .chain(std::iter::once(check_char(check)))
                .collect();
            prop_assert_eq!(code.len(), 13);
            prop_assert!(has_valid_ean_checksum(&code), "checksum failed for {}", code);
        }

        /// ISBN-10 check values never exceed 10
        #[test]
        fn isbn10_check_in_range(payload in prop::collection::vec(0u8..10, 9)) {
            prop_assert!(compute_check_digit(&payload, Weighting::Isbn10) <= 10);
        }
    }
}
