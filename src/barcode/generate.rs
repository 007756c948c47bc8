//! EAN-13 candidate generation from a country prefix and a product code.
//!
//! The prefix and the zero-padded product code are joined, cut to eleven
//! characters, a twelfth "candidate" digit is appended and the EAN check digit
//! closes the code.

use super::checksum::{Weighting, check_char, compute_check_digit, digits_of};
use super::value::Barcode;

/// Width the product code is left-padded to
const PRODUCT_CODE_WIDTH: usize = 8;

/// Errors for generator input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("country prefix must be 1 to 3 digits (got '{0}')")]
    InvalidPrefix(String),

    #[error("product code must have 1 to 8 digits (got '{0}')")]
    InvalidProductCode(String),
}

/// Generate the ten sequential candidates (candidate digit 0 through 9).
pub fn generate_batch(prefix: &str, product_code: &str) -> Result<Vec<Barcode>, GenerateError> {
    let base = payload_base(prefix, product_code)?;
    Ok((0u8..10).map(|digit| complete(&base, digit)).collect())
}

/// Generate a single code with the candidate digit fixed to 0.
pub fn generate_single(prefix: &str, product_code: &str) -> Result<Barcode, GenerateError> {
    let base = payload_base(prefix, product_code)?;
    Ok(complete(&base, 0))
}

/// Validate input and build the eleven-character payload base.
fn payload_base(prefix: &str, product_code: &str) -> Result<String, GenerateError> {
    if prefix.is_empty() || prefix.len() > 3 || !prefix.chars().all(|c| c.is_ascii_digit()) {
        return Err(GenerateError::InvalidPrefix(prefix.to_string()));
    }

    // Product codes are typed freehand; drop anything that is not a digit
    let digits: String = product_code.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() || digits.len() > PRODUCT_CODE_WIDTH {
        return Err(GenerateError::InvalidProductCode(product_code.to_string()));
    }

    let mut base = format!("{}{:0>width$}", prefix, digits, width = PRODUCT_CODE_WIDTH);
    base.truncate(11);
    Ok(base)
}

fn complete(base: &str, candidate: u8) -> Barcode {
    let payload = format!("{}{}", base, check_char(candidate));
    let check = digits_of(&payload)
        .map(|digits| compute_check_digit(&digits, Weighting::Ean))
        .unwrap_or(0);
    Barcode::from_trusted(format!("{}{}", payload, check_char(check)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::barcode::checksum::has_valid_ean_checksum;
    use crate::barcode::kind::CodeType;

    #[test]
    fn test_batch_has_ten_valid_codes() {
        let codes = generate_batch("789", "1234").unwrap();
        assert_eq!(codes.len(), 10);
        for (i, code) in codes.iter().enumerate() {
            assert_eq!(code.as_str().len(), 13);
            assert!(code.as_str().starts_with("78900001234"));
            assert_eq!(&code.as_str()[11..12], i.to_string());
            assert!(has_valid_ean_checksum(code.as_str()), "{}", code);
        }
    }

    #[test]
    fn test_single_uses_zero_candidate() {
        let code = generate_single("789", "1234").unwrap();
        // 789 + 00001234 cut to 11 chars = 78900001234, candidate 0
        assert!(code.as_str().starts_with("789000012340"));
        assert_eq!(code.code_type(), CodeType::Ean13);
        assert!(has_valid_ean_checksum(code.as_str()));
    }

    #[test]
    fn test_single_matches_first_batch_entry() {
        let batch = generate_batch("590", "42").unwrap();
        let single = generate_single("590", "42").unwrap();
        assert_eq!(batch[0], single);
    }

    #[test]
    fn test_two_digit_prefix_gives_upc_length() {
        // 2 + 8 digits = 10, plus candidate and check = 12
        let code = generate_single("50", "1").unwrap();
        assert_eq!(code.code_type(), CodeType::UpcA);
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(
            generate_batch("", "1"),
            Err(GenerateError::InvalidPrefix(_))
        ));
        assert!(matches!(
            generate_batch("7890", "1"),
            Err(GenerateError::InvalidPrefix(_))
        ));
        assert!(matches!(
            generate_single("789", "abc"),
            Err(GenerateError::InvalidProductCode(_))
        ));
        assert!(matches!(
            generate_single("789", "123456789"),
            Err(GenerateError::InvalidProductCode(_))
        ));
    }

    #[test]
    fn test_product_code_separators_ignored() {
        assert_eq!(
            generate_single("789", "12-34").unwrap(),
            generate_single("789", "1234").unwrap()
        );
    }
}
