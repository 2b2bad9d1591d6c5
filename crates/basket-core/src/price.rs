//! # Price Parsing
//!
//! Turns free-form price text scraped from a catalog into [`Money`].
//!
//! ## Normalization
//! ```text
//! "1,234.50 บาท"  ──strip──►  "1234.50"  ──parse──►  123450 minor units
//! "ราคา 120.-"    ──strip──►  "120."     ──parse──►  12000
//! "1.2.3"         ──strip──►  "1.2.3"    ──parse──►  0 (two decimal points)
//! "abc"           ──strip──►  ""         ──parse──►  0
//! ```
//!
//! Parsing never fails: anything that is not a number after stripping is
//! priced at zero. Minus signs are stripped with everything else, so the
//! result is never negative.

use tracing::debug;

use crate::money::{Money, MINOR_PER_MAJOR};

/// Parses free-form price text into a non-negative amount.
///
/// ## Rules
/// - Every character other than an ASCII digit or `.` is removed
/// - The rest must contain at least one digit and at most one `.`
/// - Fraction digits past the second are rounded half-up
/// - Anything else, including amounts too large for [`Money`], yields zero
///
/// ## Example
/// ```rust
/// use basket_core::price::parse_price;
///
/// assert_eq!(parse_price("1,234.50 บาท").minor_units(), 123450);
/// assert_eq!(parse_price(".5").minor_units(), 50);
/// assert!(parse_price("").is_zero());
/// assert!(parse_price("abc").is_zero());
/// ```
pub fn parse_price(text: &str) -> Money {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    match parse_cleaned(&cleaned) {
        Some(price) => price,
        None => {
            debug!(raw = %text, cleaned = %cleaned, "price text is not a number, using 0");
            Money::zero()
        }
    }
}

/// Parses a string made only of digits and dots.
fn parse_cleaned(cleaned: &str) -> Option<Money> {
    let (whole, fraction) = match cleaned.split_once('.') {
        Some((_, rest)) if rest.contains('.') => return None,
        Some((whole, fraction)) => (whole, fraction),
        None => (cleaned, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return None;
    }

    let whole = whole.trim_start_matches('0');
    let major: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };

    let mut digits = fraction.bytes().map(|b| i64::from(b - b'0'));
    let tens = digits.next().unwrap_or(0);
    let ones = digits.next().unwrap_or(0);
    let round_up = digits.next().is_some_and(|d| d >= 5);

    let minor = major
        .checked_mul(MINOR_PER_MAJOR)?
        .checked_add(tens * 10 + ones + i64::from(round_up))?;

    Some(Money::from_minor(minor))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog_text() {
        assert_eq!(parse_price("1,234.50 บาท").minor_units(), 123450);
        assert_eq!(parse_price("120 บาท").minor_units(), 12000);
        assert_eq!(parse_price("฿ 85").minor_units(), 8500);
        assert_eq!(parse_price("  99.9  ").minor_units(), 9990);
    }

    #[test]
    fn test_parse_invalid_is_zero() {
        assert!(parse_price("").is_zero());
        assert!(parse_price("abc").is_zero());
        assert!(parse_price(".").is_zero());
        assert!(parse_price("1.2.3").is_zero());
        assert!(parse_price("ราคา..").is_zero());
    }

    #[test]
    fn test_parse_leading_and_trailing_point() {
        assert_eq!(parse_price(".5").minor_units(), 50);
        assert_eq!(parse_price("120.-").minor_units(), 12000);
        assert_eq!(parse_price("007").minor_units(), 700);
    }

    #[test]
    fn test_parse_rounds_extra_fraction_digits() {
        assert_eq!(parse_price("1.234").minor_units(), 123);
        assert_eq!(parse_price("1.235").minor_units(), 124);
        assert_eq!(parse_price("0.999").minor_units(), 100);
    }

    #[test]
    fn test_parse_never_negative() {
        assert_eq!(parse_price("-50").minor_units(), 5000);
    }

    #[test]
    fn test_parse_too_large_is_zero() {
        assert!(parse_price("99999999999999999999").is_zero());
        assert!(parse_price("92233720368547758.08").is_zero());
    }
}
