//! Built-in field detectors

mod brand;
mod mileage;
mod tariff;

pub use brand::{BrandDetector, KNOWN_BRANDS};
pub use mileage::MileageDetector;
pub use tariff::TariffClassDetector;

/// Parse a captured number, dropping `.` thousands separators.
///
/// Captures that still fail to parse (overflow, stray characters) become 0.
pub(crate) fn parse_number(raw: &str) -> i64 {
    let digits: String = raw.chars().filter(|c| *c != '.').collect();
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(parse_number("15000"), 15000);
    }

    #[test]
    fn test_parse_with_thousands_separator() {
        assert_eq!(parse_number("15.000"), 15000);
        assert_eq!(parse_number("1.200.000"), 1_200_000);
    }

    #[test]
    fn test_malformed_defaults_to_zero() {
        assert_eq!(parse_number(""), 0);
        assert_eq!(parse_number("12a"), 0);
        assert_eq!(parse_number("99999999999999999999999"), 0);
    }
}
