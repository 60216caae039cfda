//! ISO 7064 MOD97-10 checksum engine used by all IBANs.

use crate::patterns::SHEBA_SHAPE;

/// Compute the mod-97 remainder of an arbitrary-length numeric string.
///
/// The rearranged, letter-expanded IBAN numeral is around 30 digits, beyond
/// `u64` range, so the remainder is carried digit-by-digit instead of
/// materializing the full integer. Non-digit characters are ignored; the
/// caller is expected to pass an all-digit string.
pub fn mod97(numeral: &str) -> u32 {
    let mut remainder: u32 = 0;

    for c in numeral.chars() {
        if let Some(digit) = c.to_digit(10) {
            remainder = (remainder * 10 + digit) % 97;
        }
    }

    remainder
}

/// Expand letters to their two-digit numerals (A=10, ..., Z=35), keeping
/// digits as-is. "IR" becomes "1827".
fn expand_letters(input: &str) -> String {
    let mut numeral = String::with_capacity(input.len() + 4);
    for c in input.chars() {
        if c.is_ascii_digit() {
            numeral.push(c);
        } else if c.is_ascii_uppercase() {
            let value = (c as u32) - ('A' as u32) + 10;
            numeral.push_str(&value.to_string());
        }
    }
    numeral
}

/// Validate an Iranian IBAN using the checksum algorithm.
///
/// Algorithm:
/// 1. Uppercase and strip whitespace
/// 2. Check the shape: `IR` followed by 24 digits
/// 3. Move first 4 characters to the end
/// 4. Replace letters with numbers (A=10, B=11, ..., Z=35)
/// 5. The resulting number mod 97 must equal 1
pub fn is_valid_iban(iban: &str) -> bool {
    let iban: String = iban
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    if !SHEBA_SHAPE.is_match(&iban) {
        return false;
    }

    let rearranged = format!("{}{}", &iban[4..], &iban[..4]);
    mod97(&expand_letters(&rearranged)) == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mod97_streaming() {
        // 28 digits would overflow u64 as a whole number
        assert_eq!(mod97("0120000000004586572526182787"), 1);
        assert_eq!(mod97("0"), 0);
        assert_eq!(mod97("97"), 0);
        assert_eq!(mod97("98"), 1);
    }

    #[test]
    fn test_expand_letters() {
        assert_eq!(expand_letters("IR00"), "182700");
        assert_eq!(expand_letters("AZ09"), "103509");
    }

    #[test]
    fn test_is_valid_iban_valid() {
        assert!(is_valid_iban("IR870120000000004586572526"));
        assert!(is_valid_iban("ir870120000000004586572526")); // Lowercase
        assert!(is_valid_iban("IR87 0120 0000 0000 4586 5725 26")); // Grouped
    }

    #[test]
    fn test_is_valid_iban_invalid() {
        assert!(!is_valid_iban("IR000120000000004586572526")); // Wrong check digits
        assert!(!is_valid_iban("IR87012000000000458657252")); // 23 digits
        assert!(!is_valid_iban("IR8701200000000045865725267")); // 25 digits
        assert!(!is_valid_iban("PL61109010140000071219812874")); // Wrong country
        assert!(!is_valid_iban(""));
    }

    #[test]
    fn test_is_valid_iban_non_ascii_digits() {
        // Unicode digits must fail the shape check before the byte slicing
        assert!(!is_valid_iban("IR۸۷۰۱۲۰۰۰۰۰۰۰۰۰۴۵۸۶۵۷۲۵۲۶"));
        assert!(!is_valid_iban("IR೦೦೦೦೦೦೦೦೦೦೦೦೦೦೦೦೦೦೦೦೦೦೦೦"));
    }
}
