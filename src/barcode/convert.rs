//! Format conversion between UPC-A, EAN-13, ISBN-10 and ISBN-13.
//!
//! Pairs without a rule are a no-op: the input comes back unchanged. That is
//! not an error, callers rely on it for the "alternative formats" list.

use super::checksum::{Weighting, check_char, compute_check_digit, digits_of};
use super::kind::{CodeType, is_bookland};
use super::value::Barcode;

/// Formats offered as alternatives for a scanned code, in display order.
pub const ALTERNATIVE_FORMATS: [CodeType; 4] = [
    CodeType::Ean13,
    CodeType::UpcA,
    CodeType::Isbn13,
    CodeType::Isbn10,
];

impl Barcode {
    /// Convert to `target`, or return the code unchanged when no rule applies.
    pub fn convert(&self, target: CodeType) -> Barcode {
        let source = self.code_type();
        if source == target {
            return self.clone();
        }

        let code = self.as_str();
        let converted = match (source, target) {
            (CodeType::UpcA, CodeType::Ean13) => Some(format!("0{}", code)),
            (CodeType::Ean13, CodeType::UpcA) => code.strip_prefix('0').map(str::to_string),
            (CodeType::Isbn10, CodeType::Isbn13) => isbn10_to_isbn13(code),
            (CodeType::Isbn13, CodeType::Isbn10) if is_bookland(code) => isbn13_to_isbn10(code),
            _ => None,
        };

        match converted {
            Some(code) => Barcode::from_trusted(code),
            None => self.clone(),
        }
    }

    /// Canonical form handed to lookup sources: UPC-A becomes EAN-13 and
    /// ISBN-10 becomes ISBN-13; everything else passes through.
    pub fn normalize(&self) -> Barcode {
        match self.code_type() {
            CodeType::UpcA => self.convert(CodeType::Ean13),
            CodeType::Isbn10 => self.convert(CodeType::Isbn13),
            _ => self.clone(),
        }
    }

    /// Every other format this code can be converted to.
    pub fn alternatives(&self) -> Vec<(CodeType, Barcode)> {
        ALTERNATIVE_FORMATS
            .iter()
            .filter(|&&format| format != self.code_type())
            .filter_map(|&format| {
                let converted = self.convert(format);
                (converted != *self).then_some((format, converted))
            })
            .collect()
    }
}

fn isbn10_to_isbn13(code: &str) -> Option<String> {
    let base = format!("978{}", code.get(..9)?);
    let check = compute_check_digit(&digits_of(&base)?, Weighting::Ean);
    Some(format!("{}{}", base, check_char(check)))
}

fn isbn13_to_isbn10(code: &str) -> Option<String> {
    let payload = code.get(3..12)?;
    let check = compute_check_digit(&digits_of(payload)?, Weighting::Isbn10);
    Some(format!("{}{}", payload, check_char(check)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(raw: &str) -> Barcode {
        Barcode::parse(raw).unwrap()
    }

    #[test]
    fn test_upc_to_ean13() {
        let ean = code("036000291452").convert(CodeType::Ean13);
        assert_eq!(ean.as_str(), "0036000291452");
        assert_eq!(ean.code_type(), CodeType::Ean13);
    }

    #[test]
    fn test_ean13_to_upc_requires_leading_zero() {
        assert_eq!(
            code("0036000291452").convert(CodeType::UpcA).as_str(),
            "036000291452"
        );
        // No leading zero: unchanged
        assert_eq!(
            code("7891000315507").convert(CodeType::UpcA).as_str(),
            "7891000315507"
        );
    }

    #[test]
    fn test_isbn10_to_isbn13() {
        assert_eq!(
            code("0306406152").convert(CodeType::Isbn13).as_str(),
            "9780306406157"
        );
        assert_eq!(
            code("080442957X").convert(CodeType::Isbn13).as_str(),
            "9780804429573"
        );
    }

    #[test]
    fn test_isbn13_to_isbn10() {
        assert_eq!(
            code("9780306406157").convert(CodeType::Isbn10).as_str(),
            "0306406152"
        );
        assert_eq!(
            code("9780804429573").convert(CodeType::Isbn10).as_str(),
            "080442957X"
        );
    }

    #[test]
    fn test_unsupported_pair_is_identity() {
        assert_eq!(
            code("12345678").convert(CodeType::Isbn10).as_str(),
            "12345678"
        );
        assert_eq!(
            code("7891000315507").convert(CodeType::Isbn13).as_str(),
            "7891000315507"
        );
        assert_eq!(
            code("036000291452").convert(CodeType::Isbn10).as_str(),
            "036000291452"
        );
    }

    #[test]
    fn test_same_type_is_identity() {
        let upc = code("036000291452");
        assert_eq!(upc.convert(CodeType::UpcA), upc);
    }

    #[test]
    fn test_normalize_upc_example() {
        let normalized = code("036000291452").normalize();
        assert_eq!(normalized.as_str(), "0036000291452");
        assert_eq!(normalized.code_type(), CodeType::Ean13);
    }

    #[test]
    fn test_normalize_isbn10() {
        let normalized = code("0306406152").normalize();
        assert_eq!(normalized.as_str(), "9780306406157");
        assert_eq!(normalized.code_type(), CodeType::Isbn13);
    }

    #[test]
    fn test_normalize_passthrough() {
        for raw in ["12345678", "7891000315507", "9780306406157"] {
            assert_eq!(code(raw).normalize().as_str(), raw);
        }
    }

    #[test]
    fn test_alternatives_for_isbn13() {
        let alts = code("9780306406157").alternatives();
        assert_eq!(alts.len(), 1);
        assert_eq!(alts[0].0, CodeType::Isbn10);
        assert_eq!(alts[0].1.as_str(), "0306406152");
    }

    #[test]
    fn test_alternatives_for_zero_prefixed_ean() {
        let alts = code("0036000291452").alternatives();
        assert_eq!(alts, vec![(CodeType::UpcA, code("036000291452"))]);
    }
}

/// Property-based tests using proptest
#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// A valid ISBN-10: nine digits plus the computed check character
    fn isbn10() -> impl Strategy<Value = String> {
        prop::collection::vec(0u8..10, 9).prop_map(|payload| {
            let check = compute_check_digit(&payload, Weighting::Isbn10);
            payload
                .iter()
                .map(|&d| check_char(d))
                .chain(std::iter::once(check_char(check)))
                .collect()
        })
    }

    proptest! {
        /// UPC-A -> EAN-13 -> UPC-A returns the original code
        #[test]
        fn upc_roundtrip(upc in "[0-9]{12}") {
            let original = Barcode::parse(&upc).unwrap();
            let back = original.convert(CodeType::Ean13).convert(CodeType::UpcA);
            prop_assert_eq!(back, original);
        }

        /// ISBN-10 -> ISBN-13 -> ISBN-10 returns the original code, `X` included
        #[test]
        fn isbn10_roundtrip(isbn in isbn10()) {
            let original = Barcode::parse(&isbn).unwrap();
            let isbn13 = original.convert(CodeType::Isbn13);
            prop_assert_eq!(isbn13.code_type(), CodeType::Isbn13);
            prop_assert_eq!(isbn13.convert(CodeType::Isbn10), original);
        }

        /// Normalized codes are never UPC-A or ISBN-10
        #[test]
        fn normalize_output_is_canonical(raw in "[0-9]{8}|[0-9]{10}|[0-9]{12}|[0-9]{13}") {
            let normalized = Barcode::parse(&raw).unwrap().normalize();
            prop_assert!(!matches!(normalized.code_type(), CodeType::UpcA | CodeType::Isbn10));
        }
    }
}
