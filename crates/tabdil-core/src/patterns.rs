//! Common regex patterns for Iranian banking and identity numbers.

use lazy_static::lazy_static;
use regex::Regex;

// ASCII digit classes throughout: `\d` is Unicode-aware and would accept
// Persian/Arabic-Indic digits that the downstream byte-oriented code
// cannot process.
lazy_static! {
    // Full Sheba shape: country code followed by 24 digits
    pub static ref SHEBA_SHAPE: Regex = Regex::new(
        r"^IR[0-9]{24}$"
    ).unwrap();

    // Digits-only body (after the IR prefix is stripped)
    pub static ref DIGITS_ONLY: Regex = Regex::new(
        r"^[0-9]+$"
    ).unwrap();

    // National ID: exactly 10 digits
    pub static ref NATIONAL_ID_SHAPE: Regex = Regex::new(
        r"^[0-9]{10}$"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheba_shape() {
        assert!(SHEBA_SHAPE.is_match("IR870120000000004586572526"));
        assert!(!SHEBA_SHAPE.is_match("IR87012000000000458657252")); // 23 digits
        assert!(!SHEBA_SHAPE.is_match("ir870120000000004586572526")); // lowercase
        assert!(!SHEBA_SHAPE.is_match("IR8701200000000045865725X6"));
    }

    #[test]
    fn test_sheba_shape_rejects_non_ascii_digits() {
        assert!(!SHEBA_SHAPE.is_match("IR۸۷۰۱۲۰۰۰۰۰۰۰۰۰۴۵۸۶۵۷۲۵۲۶"));
        assert!(!SHEBA_SHAPE.is_match("IR೦೦೦೦೦೦೦೦೦೦೦೦೦೦೦೦೦೦೦೦೦೦೦೦"));
    }

    #[test]
    fn test_national_id_shape() {
        assert!(NATIONAL_ID_SHAPE.is_match("0012345679"));
        assert!(!NATIONAL_ID_SHAPE.is_match("001234567"));
        assert!(!NATIONAL_ID_SHAPE.is_match("00123456789"));
    }

    #[test]
    fn test_national_id_shape_rejects_non_ascii_digits() {
        assert!(!NATIONAL_ID_SHAPE.is_match("۱۲۳۴۵۶۷۸۹۰"));
        assert!(!NATIONAL_ID_SHAPE.is_match("١٢٣٤٥٦٧٨٩٠"));
    }
}
